use std::cell::Cell;
use std::rc::Rc;

use crate::context::ShellContext;
use crate::document::{BrowserLocation, FragmentFetcher, ShellDocument};
use crate::error::FetchError;
use crate::routes::ResolvedRoute;

/// Callback run synchronously after every render that was not superseded.
pub type PostRenderHook = Box<dyn Fn(&RenderReport)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Loaded,
    Failed(FetchError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub sequence: u64,
    pub fragment_path: String,
    /// `None` when the fragment was rendered directly rather than resolved.
    pub route: Option<ResolvedRoute>,
    pub outcome: RenderOutcome,
}

impl RenderReport {
    pub fn is_loaded(&self) -> bool {
        self.outcome == RenderOutcome::Loaded
    }
}

pub struct RouterBuilder<D, L, F> {
    context: Rc<ShellContext>,
    document: Rc<D>,
    location: L,
    fetcher: F,
    post_render_hooks: Vec<PostRenderHook>,
}

impl<D, L, F> RouterBuilder<D, L, F> {
    /// Hooks run in registration order.
    pub fn on_render(mut self, hook: impl Fn(&RenderReport) + 'static) -> Self {
        self.post_render_hooks.push(Box::new(hook));
        self
    }

    pub fn build(self) -> Router<D, L, F> {
        Router {
            context: self.context,
            document: self.document,
            location: self.location,
            fetcher: self.fetcher,
            latest_render: Cell::new(0),
            post_render_hooks: self.post_render_hooks,
        }
    }
}

/// Hash router rendering fragments into the mount element.
///
/// Every render takes the next sequence number before it starts fetching.
/// When the fetch settles, a render whose number is no longer the latest is
/// dropped without touching the DOM, so the last requested route wins no
/// matter which response arrives last. Its fetch failure is still logged.
pub struct Router<D, L, F> {
    context: Rc<ShellContext>,
    document: Rc<D>,
    location: L,
    fetcher: F,
    latest_render: Cell<u64>,
    post_render_hooks: Vec<PostRenderHook>,
}

impl<D, L, F> Router<D, L, F>
where
    D: ShellDocument,
    L: BrowserLocation,
    F: FragmentFetcher,
{
    pub fn builder(
        context: Rc<ShellContext>,
        document: Rc<D>,
        location: L,
        fetcher: F,
    ) -> RouterBuilder<D, L, F> {
        RouterBuilder {
            context,
            document,
            location,
            fetcher,
            post_render_hooks: Vec::new(),
        }
    }

    pub fn context(&self) -> &Rc<ShellContext> {
        &self.context
    }

    pub fn document(&self) -> &Rc<D> {
        &self.document
    }

    pub fn latest_render(&self) -> u64 {
        self.latest_render.get()
    }

    pub fn resolve_current(&self) -> ResolvedRoute {
        self.context.routes().resolve(&self.location.hash())
    }

    pub async fn navigate(&self, url: &str) -> Option<RenderReport> {
        self.location.push_url(url);
        self.handle_route().await
    }

    pub async fn handle_route(&self) -> Option<RenderReport> {
        let route = self.resolve_current();
        tracing::info!(path = %route.path, fragment = %route.fragment, "navigating");
        let fragment_path = route.fragment.clone();
        self.render_inner(Some(route), fragment_path).await
    }

    pub async fn render(&self, fragment_path: &str) -> Option<RenderReport> {
        self.render_inner(None, fragment_path.to_string()).await
    }

    async fn render_inner(
        &self,
        route: Option<ResolvedRoute>,
        fragment_path: String,
    ) -> Option<RenderReport> {
        let config = self.context.config();
        let sequence = self.latest_render.get().wrapping_add(1);
        self.latest_render.set(sequence);

        self.document
            .set_inner_html(&config.mount_id, &config.loading_html);

        let fetched = self.fetcher.fetch_fragment(&fragment_path).await;

        if sequence != self.latest_render.get() {
            if let Err(error) = &fetched {
                tracing::error!(fragment = %fragment_path, %error, "page load failed");
            }
            tracing::debug!(
                sequence,
                latest = self.latest_render.get(),
                fragment = %fragment_path,
                "dropping superseded render"
            );
            return None;
        }

        let outcome = match fetched {
            Ok(html) => {
                self.document.set_inner_html(&config.mount_id, &html);
                self.document
                    .set_element_class(&config.mount_id, &config.transition_class, true);
                self.document.dispatch_event(&config.page_loaded_event);
                RenderOutcome::Loaded
            }
            Err(error) => {
                tracing::error!(fragment = %fragment_path, %error, "page load failed");
                self.document
                    .set_inner_html(&config.mount_id, &config.error_html);
                RenderOutcome::Failed(error)
            }
        };

        let report = RenderReport {
            sequence,
            fragment_path,
            route,
            outcome,
        };
        for hook in &self.post_render_hooks {
            hook(&report);
        }
        Some(report)
    }
}
