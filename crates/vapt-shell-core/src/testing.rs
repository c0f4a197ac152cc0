//! In-memory stand-ins for the browser used by the unit tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::document::{BrowserLocation, CheckboxHandler, FragmentFetcher, ShellDocument};
use crate::error::FetchError;

#[derive(Default)]
struct FakeElement {
    html: String,
    html_writes: Vec<String>,
    classes: BTreeSet<String>,
    checked: bool,
    change_handler: Option<CheckboxHandler>,
}

#[derive(Default)]
pub struct FakeDocument {
    elements: RefCell<BTreeMap<String, FakeElement>>,
    body_classes: RefCell<BTreeSet<String>>,
    class_members: RefCell<BTreeMap<String, Vec<String>>>,
    dispatched: RefCell<Vec<String>>,
    change_bindings: RefCell<usize>,
}

impl FakeDocument {
    pub fn with_mount(id: &str) -> Self {
        let document = Self::default();
        document.insert_element(id);
        document
    }

    pub fn insert_element(&self, id: &str) {
        self.elements
            .borrow_mut()
            .insert(id.to_string(), FakeElement::default());
    }

    pub fn remove_element(&self, id: &str) {
        self.elements.borrow_mut().remove(id);
    }

    pub fn add_class(&self, id: &str, class: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(id) {
            element.classes.insert(class.to_string());
        }
    }

    /// Registers `count` elements carrying `class`, with empty text.
    pub fn insert_class_members(&self, class: &str, count: usize) {
        self.class_members
            .borrow_mut()
            .insert(class.to_string(), vec![String::new(); count]);
    }

    pub fn class_texts(&self, class: &str) -> Vec<String> {
        self.class_members
            .borrow()
            .get(class)
            .cloned()
            .unwrap_or_default()
    }

    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.html.clone())
    }

    pub fn html_writes(&self, id: &str) -> Vec<String> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.html_writes.clone())
            .unwrap_or_default()
    }

    pub fn is_checked(&self, id: &str) -> Option<bool> {
        self.elements.borrow().get(id).map(|element| element.checked)
    }

    pub fn dispatched(&self) -> Vec<String> {
        self.dispatched.borrow().clone()
    }

    pub fn change_bindings(&self) -> usize {
        *self.change_bindings.borrow()
    }

    /// Simulates the user flipping a checkbox.
    pub fn click_checkbox(&self, id: &str) {
        let handler = {
            let mut elements = self.elements.borrow_mut();
            let Some(element) = elements.get_mut(id) else {
                return;
            };
            element.checked = !element.checked;
            element
                .change_handler
                .clone()
                .map(|handler| (handler, element.checked))
        };
        if let Some((handler, checked)) = handler {
            handler(checked);
        }
    }
}

impl ShellDocument for FakeDocument {
    fn has_element(&self, id: &str) -> bool {
        self.elements.borrow().contains_key(id)
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        let mut elements = self.elements.borrow_mut();
        let Some(element) = elements.get_mut(id) else {
            return false;
        };
        element.html = html.to_string();
        element.html_writes.push(html.to_string());
        true
    }

    fn element_has_class(&self, id: &str, class: &str) -> Option<bool> {
        self.elements
            .borrow()
            .get(id)
            .map(|element| element.classes.contains(class))
    }

    fn set_element_class(&self, id: &str, class: &str, enabled: bool) -> bool {
        let mut elements = self.elements.borrow_mut();
        let Some(element) = elements.get_mut(id) else {
            return false;
        };
        if enabled {
            element.classes.insert(class.to_string());
        } else {
            element.classes.remove(class);
        }
        true
    }

    fn set_body_class(&self, class: &str, enabled: bool) {
        let mut classes = self.body_classes.borrow_mut();
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }

    fn set_text_by_class(&self, class: &str, text: &str) -> usize {
        let mut members = self.class_members.borrow_mut();
        let Some(texts) = members.get_mut(class) else {
            return 0;
        };
        for slot in texts.iter_mut() {
            *slot = text.to_string();
        }
        texts.len()
    }

    fn set_checked(&self, id: &str, checked: bool) -> bool {
        let mut elements = self.elements.borrow_mut();
        let Some(element) = elements.get_mut(id) else {
            return false;
        };
        element.checked = checked;
        true
    }

    fn bind_checkbox_change(&self, id: &str, handler: CheckboxHandler) -> bool {
        let mut elements = self.elements.borrow_mut();
        let Some(element) = elements.get_mut(id) else {
            return false;
        };
        if element.change_handler.is_none() {
            *self.change_bindings.borrow_mut() += 1;
        }
        element.change_handler = Some(handler);
        true
    }

    fn dispatch_event(&self, name: &str) {
        self.dispatched.borrow_mut().push(name.to_string());
    }
}

#[derive(Default)]
pub struct FakeLocation {
    hash: RefCell<String>,
    pushed: RefCell<Vec<String>>,
}

impl FakeLocation {
    pub fn set_hash(&self, hash: &str) {
        *self.hash.borrow_mut() = hash.to_string();
    }

    pub fn pushed(&self) -> Vec<String> {
        self.pushed.borrow().clone()
    }
}

impl BrowserLocation for FakeLocation {
    fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn push_url(&self, url: &str) {
        self.pushed.borrow_mut().push(url.to_string());
        let hash = url.find('#').map(|index| &url[index..]).unwrap_or_default();
        self.set_hash(hash);
    }
}

/// Serves `<section>{path}</section>` for every path unless told to fail.
#[derive(Default)]
pub struct FakeFetcher {
    failures: RefCell<HashMap<String, FetchError>>,
    requests: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn serving_all() -> Self {
        Self::default()
    }

    pub fn fail(&self, path: &str, error: FetchError) {
        self.failures.borrow_mut().insert(path.to_string(), error);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<String> {
        self.requests.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl FragmentFetcher for FakeFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(path.to_string());
        match self.failures.borrow().get(path) {
            Some(error) => Err(error.clone()),
            None => Ok(format!("<section>{path}</section>")),
        }
    }
}

/// Holds every fetch open until the test releases it.
#[derive(Default)]
pub struct GatedFetcher {
    gates: RefCell<HashMap<String, oneshot::Sender<Result<String, FetchError>>>>,
}

impl GatedFetcher {
    pub fn release(&self, path: &str, result: Result<String, FetchError>) {
        if let Some(gate) = self.gates.borrow_mut().remove(path) {
            let _ = gate.send(result);
        }
    }
}

#[async_trait(?Send)]
impl FragmentFetcher for GatedFetcher {
    async fn fetch_fragment(&self, path: &str) -> Result<String, FetchError> {
        let (sender, receiver) = oneshot::channel();
        self.gates.borrow_mut().insert(path.to_string(), sender);
        receiver
            .await
            .unwrap_or_else(|_| Err(FetchError::Network("request dropped".to_string())))
    }
}

/// Runs `f` with a thread-local subscriber and returns what it logged.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || LogSink(sink.clone()))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = buffer
        .lock()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();
    (result, logs)
}

struct LogSink(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogSink {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        if let Ok(mut buffer) = self.0.lock() {
            buffer.extend_from_slice(bytes);
        }
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
