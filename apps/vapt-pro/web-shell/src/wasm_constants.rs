/// Optional page-provided override for `ShellConfig`, read once at boot.
pub(crate) const SHELL_CONFIG_GLOBAL: &str = "__VAPT_SHELL_CONFIG__";
pub(crate) const SET_ROLE_GLOBAL: &str = "setRole";
pub(crate) const TOGGLE_SIDEBAR_GLOBAL: &str = "toggleSidebar";
pub(crate) const POPSTATE_EVENT: &str = "popstate";
pub(crate) const CLICK_EVENT: &str = "click";
pub(crate) const CHANGE_EVENT: &str = "change";
pub(crate) const DOM_CONTENT_LOADED_EVENT: &str = "DOMContentLoaded";
