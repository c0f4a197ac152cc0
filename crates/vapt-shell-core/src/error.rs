use crate::routes::RouteTableError;

/// Failure to load an HTML fragment. The shell does not distinguish
/// between these when rendering; the variant only feeds the log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("window is unavailable")]
    WindowUnavailable,
    #[error("document is unavailable")]
    DocumentUnavailable,
    #[error("mount element #{0} is missing")]
    MissingMount(String),
    #[error("invalid shell config: {0}")]
    Config(String),
    #[error(transparent)]
    Routes(#[from] RouteTableError),
}
