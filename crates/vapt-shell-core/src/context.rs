use std::cell::{Ref, RefCell};

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::routes::RouteTable;
use crate::state::UiState;

/// Application context created once at startup and shared by `Rc`.
///
/// Owns the single [`UiState`] of the page session. Borrows are scoped to
/// the closures passed to [`ShellContext::update_state`] and
/// [`ShellContext::with_state`] so none survive an `.await`.
#[derive(Debug)]
pub struct ShellContext {
    config: ShellConfig,
    routes: RouteTable,
    state: RefCell<UiState>,
}

impl ShellContext {
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        config.validate()?;
        let routes = config.route_table()?;
        Ok(Self {
            config,
            routes,
            state: RefCell::new(UiState::default()),
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn state(&self) -> Ref<'_, UiState> {
        self.state.borrow()
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn update_state<R>(&self, f: impl FnOnce(&mut UiState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }
}
