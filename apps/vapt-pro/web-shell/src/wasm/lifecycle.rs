use super::*;

/// Reads `window.__VAPT_SHELL_CONFIG__` when the page defines it.
pub(super) fn load_shell_config() -> Result<ShellConfig, ShellError> {
    let window = web_sys::window().ok_or(ShellError::WindowUnavailable)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(SHELL_CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return Ok(ShellConfig::default());
    }
    let raw: String = js_sys::JSON::stringify(&value)
        .map_err(|_| ShellError::Config(format!("{SHELL_CONFIG_GLOBAL} is not serializable")))?
        .into();
    let config = ShellConfig::from_json_str(&raw)?;
    tracing::info!("using page-provided shell config");
    Ok(config)
}

pub(super) fn run_when_dom_ready(ready: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        ready();
        return;
    };
    if document.ready_state() != "loading" {
        ready();
        return;
    }

    let mut ready = Some(ready);
    DOM_READY_HANDLER.with(|slot| {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            if let Some(ready) = ready.take() {
                ready();
            }
        }));
        let _ = document.add_event_listener_with_callback(
            DOM_CONTENT_LOADED_EVENT,
            callback.as_ref().unchecked_ref(),
        );
        *slot.borrow_mut() = Some(callback);
    });
}

/// Installs `window.setRole` and `window.toggleSidebar` for inline
/// handlers in fragments and for manual testing from the console.
pub(super) fn expose_console_helpers() {
    let Some(window) = web_sys::window() else {
        return;
    };

    SET_ROLE_GLOBAL_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn Fn(String)>::wrap(Box::new(set_role));
        js_sys::Reflect::set(
            &window,
            &SET_ROLE_GLOBAL.into(),
            callback.as_ref().unchecked_ref(),
        )
        .ok();
        *slot.borrow_mut() = Some(callback);
    });

    TOGGLE_SIDEBAR_GLOBAL_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn Fn()>::wrap(Box::new(toggle_sidebar));
        js_sys::Reflect::set(
            &window,
            &TOGGLE_SIDEBAR_GLOBAL.into(),
            callback.as_ref().unchecked_ref(),
        )
        .ok();
        *slot.borrow_mut() = Some(callback);
    });
}
