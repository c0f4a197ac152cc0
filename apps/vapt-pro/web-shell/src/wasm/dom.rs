use super::*;

struct CheckboxListener {
    handler: Rc<RefCell<CheckboxHandler>>,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl CheckboxListener {
    fn new(handler: CheckboxHandler) -> Self {
        let handler = Rc::new(RefCell::new(handler));
        let current = handler.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |event| {
            let Some(input) = checkbox_from_event(&event) else {
                return;
            };
            let handler = current.borrow().clone();
            handler(input.checked());
        }));
        Self { handler, callback }
    }
}

pub(super) fn checkbox_from_event(event: &web_sys::Event) -> Option<HtmlInputElement> {
    event.target()?.dyn_into::<HtmlInputElement>().ok()
}

/// `web_sys::Document` seen through the shell's DOM contract.
///
/// Checkbox listeners live here for the whole session, one JS function per
/// element id. The browser ignores a second `addEventListener` call with the
/// same function, so re-binding after each render never stacks listeners.
pub(super) struct BrowserDocument {
    document: web_sys::Document,
    checkbox_listeners: RefCell<HashMap<String, CheckboxListener>>,
}

impl BrowserDocument {
    pub(super) fn from_window() -> Result<Self, ShellError> {
        let window = web_sys::window().ok_or(ShellError::WindowUnavailable)?;
        let document = window.document().ok_or(ShellError::DocumentUnavailable)?;
        Ok(Self {
            document,
            checkbox_listeners: RefCell::new(HashMap::new()),
        })
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

fn set_class(classes: &DomTokenList, class: &str, enabled: bool) -> bool {
    match classes.toggle_with_force(class, enabled) {
        Ok(_) => true,
        Err(error) => {
            tracing::warn!(class, ?error, "failed to update class list");
            false
        }
    }
}

impl ShellDocument for BrowserDocument {
    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        element.set_inner_html(html);
        true
    }

    fn element_has_class(&self, id: &str, class: &str) -> Option<bool> {
        self.element(id)
            .map(|element| element.class_list().contains(class))
    }

    fn set_element_class(&self, id: &str, class: &str, enabled: bool) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        set_class(&element.class_list(), class, enabled)
    }

    fn set_body_class(&self, class: &str, enabled: bool) {
        if let Some(body) = self.document.body() {
            set_class(&body.class_list(), class, enabled);
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.document
            .body()
            .is_some_and(|body| body.class_list().contains(class))
    }

    fn set_text_by_class(&self, class: &str, text: &str) -> usize {
        let elements = self.document.get_elements_by_class_name(class);
        let mut updated = 0;
        for index in 0..elements.length() {
            if let Some(element) = elements.item(index) {
                element.set_text_content(Some(text));
                updated += 1;
            }
        }
        updated
    }

    fn set_checked(&self, id: &str, checked: bool) -> bool {
        let Some(input) = self
            .element(id)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        else {
            return false;
        };
        input.set_checked(checked);
        true
    }

    fn bind_checkbox_change(&self, id: &str, handler: CheckboxHandler) -> bool {
        let Some(element) = self.element(id) else {
            return false;
        };
        let mut listeners = self.checkbox_listeners.borrow_mut();
        let listener = listeners
            .entry(id.to_string())
            .or_insert_with(|| CheckboxListener::new(handler.clone()));
        *listener.handler.borrow_mut() = handler;

        if let Err(error) = element
            .add_event_listener_with_callback(CHANGE_EVENT, listener.callback.as_ref().unchecked_ref())
        {
            tracing::warn!(id, ?error, "failed to bind checkbox listener");
            return false;
        }
        true
    }

    fn dispatch_event(&self, name: &str) {
        let event = match web_sys::Event::new(name) {
            Ok(event) => event,
            Err(error) => {
                tracing::warn!(name, ?error, "failed to create event");
                return;
            }
        };
        if let Err(error) = self.document.dispatch_event(&event) {
            tracing::warn!(name, ?error, "failed to dispatch event");
        }
    }
}
