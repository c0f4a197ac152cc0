use super::*;

/// Fetches fragments relative to the page with a plain GET.
pub(super) struct GlooFragmentFetcher;

#[async_trait(?Send)]
impl FragmentFetcher for GlooFragmentFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError> {
        let response = Request::get(path)
            .send()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|error| FetchError::Network(error.to_string()))
    }
}
