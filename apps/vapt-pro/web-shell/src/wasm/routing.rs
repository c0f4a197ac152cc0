use super::*;

pub(super) struct WindowLocation;

impl BrowserLocation for WindowLocation {
    fn hash(&self) -> String {
        let Some(window) = web_sys::window() else {
            return String::new();
        };
        window.location().hash().unwrap_or_default()
    }

    fn push_url(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(history) = window.history() else {
            return;
        };
        if let Err(error) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
            tracing::warn!(url, ?error, "history.pushState failed");
        }
    }
}

/// `None` re-renders whatever the location currently points at.
pub(super) fn spawn_navigation(router: Rc<ShellRouter>, url: Option<String>) {
    spawn_local(async move {
        match url {
            Some(url) => {
                router.navigate(&url).await;
            }
            None => {
                router.handle_route().await;
            }
        }
    });
}

pub(super) fn install_browser_navigation_handlers(router: &Rc<ShellRouter>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(body) = window.document().and_then(|document| document.body()) else {
        return;
    };

    ROUTE_POPSTATE_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let router = router.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            spawn_navigation(router.clone(), None);
        }));
        let _ = window
            .add_event_listener_with_callback(POPSTATE_EVENT, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });

    ROUTE_LINK_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let router = router.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
            intercept_internal_link_click(&router, event);
        }));
        let _ =
            body.add_event_listener_with_callback(CLICK_EVENT, callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

pub(super) fn intercept_internal_link_click(router: &Rc<ShellRouter>, event: web_sys::Event) {
    let Some(mouse_event) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    let click = LinkClick {
        default_prevented: event.default_prevented(),
        button: mouse_event.button(),
        meta_key: mouse_event.meta_key(),
        ctrl_key: mouse_event.ctrl_key(),
        shift_key: mouse_event.shift_key(),
        alt_key: mouse_event.alt_key(),
    };
    if !click.should_route() {
        return;
    }

    let selector = &router.context().config().link_selector;
    let Some(link) = link_from_event(&event, selector) else {
        return;
    };
    event.prevent_default();

    let href = link
        .dyn_ref::<HtmlAnchorElement>()
        .map(HtmlAnchorElement::href)
        .filter(|href| !href.is_empty())
        .or_else(|| link.get_attribute("href"));
    spawn_navigation(router.clone(), href);
}

/// Nearest element, starting at the click target, matching `selector`.
pub(super) fn link_from_event(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element.closest(selector).ok().flatten()
}
