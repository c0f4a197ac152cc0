//! Routing, UI state and DOM reflection for the VAPT Pro web shell.
//!
//! Everything here is independent of the browser. The wasm app implements
//! [`ShellDocument`], [`BrowserLocation`] and [`FragmentFetcher`] on top of
//! `web-sys`; tests implement them with in-memory fakes.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod reflect;
pub mod router;
pub mod routes;
pub mod state;

#[cfg(test)]
mod testing;

pub use config::ShellConfig;
pub use context::ShellContext;
pub use document::{BrowserLocation, CheckboxHandler, FragmentFetcher, ShellDocument};
pub use error::{FetchError, ShellError};
pub use router::{PostRenderHook, RenderOutcome, RenderReport, Router, RouterBuilder};
pub use routes::{ResolvedRoute, RouteMatch, RouteTable, RouteTableError};
pub use state::{Theme, UiState, UserProfile};
