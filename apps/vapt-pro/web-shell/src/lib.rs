#![allow(clippy::needless_pass_by_value)]
#![cfg_attr(test, allow(clippy::expect_used))]

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod link_click;
#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use async_trait::async_trait;
    use gloo_net::http::Request;
    use vapt_shell_core::{
        BrowserLocation, CheckboxHandler, FetchError, FragmentFetcher, Router, ShellConfig,
        ShellContext, ShellDocument, ShellError, reflect,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{DomTokenList, Element, HtmlAnchorElement, HtmlInputElement, MouseEvent};

    use crate::link_click::LinkClick;
    use crate::wasm_constants::*;

    mod dom;
    mod lifecycle;
    mod network;
    mod routing;

    use dom::BrowserDocument;
    use lifecycle::*;
    use network::GlooFragmentFetcher;
    use routing::*;

    type ShellRouter = Router<BrowserDocument, WindowLocation, GlooFragmentFetcher>;

    thread_local! {
        static ROUTER: RefCell<Option<Rc<ShellRouter>>> = const { RefCell::new(None) };
        static DOM_READY_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static ROUTE_POPSTATE_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static ROUTE_LINK_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static SET_ROLE_GLOBAL_HANDLER: RefCell<Option<Closure<dyn Fn(String)>>> = const { RefCell::new(None) };
        static TOGGLE_SIDEBAR_GLOBAL_HANDLER: RefCell<Option<Closure<dyn Fn()>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
        run_when_dom_ready(|| {
            if let Err(error) = boot() {
                tracing::error!(%error, "web shell failed to start");
            }
        });
    }

    #[wasm_bindgen]
    pub fn navigate(url: String) {
        with_router(|router| spawn_navigation(router.clone(), Some(url)));
    }

    /// Debug hook for switching between the admin and analyst views.
    #[wasm_bindgen]
    pub fn set_role(role: String) {
        with_router(|router| {
            reflect::switch_role(router.context(), &**router.document(), &role);
        });
    }

    #[wasm_bindgen]
    pub fn toggle_sidebar() {
        with_router(|router| {
            if reflect::toggle_sidebar(router.context(), &**router.document()).is_none() {
                tracing::debug!("no sidebar on this page");
            }
        });
    }

    #[wasm_bindgen]
    pub fn ui_state_json() -> String {
        with_router(|router| {
            serde_json::to_string(&router.context().snapshot()).unwrap_or_else(|_| "{}".to_string())
        })
        .unwrap_or_else(|| "{}".to_string())
    }

    fn boot() -> Result<(), ShellError> {
        let config = load_shell_config()?;
        let context = Rc::new(ShellContext::new(config)?);
        let document = Rc::new(BrowserDocument::from_window()?);
        let mount_id = context.config().mount_id.clone();
        if !document.has_element(&mount_id) {
            return Err(ShellError::MissingMount(mount_id));
        }

        let router = Rc::new(
            Router::builder(
                context.clone(),
                document.clone(),
                WindowLocation,
                GlooFragmentFetcher,
            )
            .on_render(reflect::route_context_hook(context.clone()))
            .on_render(reflect::reflector_hook(context.clone(), document.clone()))
            .build(),
        );
        ROUTER.with(|slot| *slot.borrow_mut() = Some(router.clone()));

        install_browser_navigation_handlers(&router);
        expose_console_helpers();
        reflect::initial_paint(&context, &*document);
        tracing::info!(routes = context.routes().len(), "web shell booted");

        spawn_navigation(router, None);
        Ok(())
    }

    /// Runs `f` with the booted router. The slot borrow ends before `f`
    /// runs, so `f` may call back into the exported functions.
    fn with_router<R>(f: impl FnOnce(&Rc<ShellRouter>) -> R) -> Option<R> {
        let router = ROUTER.with(|slot| slot.borrow().clone());
        match router {
            Some(router) => Some(f(&router)),
            None => {
                tracing::warn!("web shell is not booted");
                None
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::ui_state_json;

#[cfg(not(target_arch = "wasm32"))]
pub fn ui_state_json() -> String {
    serde_json::to_string(&vapt_shell_core::UiState::default()).unwrap_or_else(|_| "{}".to_string())
}
