use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::routes::{NOT_FOUND_FRAGMENT, RouteTable, RouteTableError, default_route_entries};
use crate::state::ADMIN_ROLE;

pub const DEFAULT_LOADING_HTML: &str =
    r#"<div class="flex-center" style="height:100vh"><div class="loader"></div></div>"#;
pub const DEFAULT_ERROR_HTML: &str = "<h1>Error loading page</h1><p>Check console for details.</p>";

/// DOM contract, markup and route table used by the shell.
///
/// Every field has a default, so a partial JSON override only replaces the
/// keys it names. A `routes` override replaces the whole table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub mount_id: String,
    pub sidebar_id: String,
    pub theme_toggle_id: String,
    pub link_selector: String,
    pub user_name_class: String,
    pub user_role_class: String,
    pub analyst_body_class: String,
    pub light_theme_body_class: String,
    pub collapsed_class: String,
    pub transition_class: String,
    pub page_loaded_event: String,
    pub admin_role: String,
    pub loading_html: String,
    pub error_html: String,
    pub routes: BTreeMap<String, String>,
    pub not_found_fragment: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            mount_id: "app".to_string(),
            sidebar_id: "sidebar".to_string(),
            theme_toggle_id: "themeToggle".to_string(),
            link_selector: "[data-link]".to_string(),
            user_name_class: "user-name-display".to_string(),
            user_role_class: "user-role-display".to_string(),
            analyst_body_class: "role-analyst".to_string(),
            light_theme_body_class: "light-theme".to_string(),
            collapsed_class: "collapsed".to_string(),
            transition_class: "fade-in".to_string(),
            page_loaded_event: "page-loaded".to_string(),
            admin_role: ADMIN_ROLE.to_string(),
            loading_html: DEFAULT_LOADING_HTML.to_string(),
            error_html: DEFAULT_ERROR_HTML.to_string(),
            routes: default_route_entries(),
            not_found_fragment: NOT_FOUND_FRAGMENT.to_string(),
        }
    }
}

impl ShellConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ShellError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| ShellError::Config(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ShellError> {
        if self.mount_id.trim().is_empty() {
            return Err(ShellError::Config("mount_id must not be empty".to_string()));
        }
        if self.link_selector.trim().is_empty() {
            return Err(ShellError::Config(
                "link_selector must not be empty".to_string(),
            ));
        }
        self.route_table()?;
        Ok(())
    }

    pub fn route_table(&self) -> Result<RouteTable, RouteTableError> {
        RouteTable::new(self.routes.clone(), self.not_found_fragment.clone())
    }
}
