use std::rc::Rc;

use async_trait::async_trait;

use crate::error::FetchError;

/// Listener for a checkbox `change`, called with the new checked state.
pub type CheckboxHandler = Rc<dyn Fn(bool)>;

/// The slice of the DOM the shell reads and writes.
///
/// Element lookups are by id; a missing element is reported through the
/// return value and never treated as an error.
pub trait ShellDocument {
    fn has_element(&self, id: &str) -> bool;

    fn set_inner_html(&self, id: &str, html: &str) -> bool;

    /// `None` when the element does not exist.
    fn element_has_class(&self, id: &str, class: &str) -> Option<bool>;

    fn set_element_class(&self, id: &str, class: &str, enabled: bool) -> bool;

    fn set_body_class(&self, class: &str, enabled: bool);

    fn body_has_class(&self, class: &str) -> bool;

    /// Sets the text of every element carrying `class`; returns how many.
    fn set_text_by_class(&self, class: &str, text: &str) -> usize;

    fn set_checked(&self, id: &str, checked: bool) -> bool;

    /// Routes `change` events of the checkbox to `handler`. Binding the same
    /// id again replaces the handler instead of adding a second listener.
    fn bind_checkbox_change(&self, id: &str, handler: CheckboxHandler) -> bool;

    fn dispatch_event(&self, name: &str);
}

pub trait BrowserLocation {
    /// Raw `location.hash`, including the leading `#` when present.
    fn hash(&self) -> String;

    /// Adds a history entry for `url` without reloading the page.
    fn push_url(&self, url: &str);
}

#[async_trait(?Send)]
pub trait FragmentFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError>;
}

impl<T: BrowserLocation + ?Sized> BrowserLocation for Rc<T> {
    fn hash(&self) -> String {
        (**self).hash()
    }

    fn push_url(&self, url: &str) {
        (**self).push_url(url);
    }
}

#[async_trait(?Send)]
impl<T: FragmentFetcher + ?Sized> FragmentFetcher for Rc<T> {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch_fragment(path).await
    }
}
