use serde::{Deserialize, Serialize};

pub const ADMIN_ROLE: &str = "Administrator";
pub const ANALYST_ROLE: &str = "Analyst";
pub const ADMIN_DISPLAY_NAME: &str = "Admin User";
pub const ANALYST_DISPLAY_NAME: &str = "Jane Doe (Analyst)";
pub const ADMIN_EMAIL: &str = "admin@vapt.com";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The settings page exposes a "Dark Mode" checkbox.
    pub fn from_dark_mode(checked: bool) -> Self {
        if checked { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub role: String,
    pub email: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: ADMIN_DISPLAY_NAME.to_string(),
            role: ADMIN_ROLE.to_string(),
            email: ADMIN_EMAIL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    pub user: UserProfile,
    pub current_project: Option<String>,
    pub theme: Option<Theme>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            user: UserProfile::default(),
            current_project: None,
            theme: Some(Theme::Dark),
        }
    }
}

impl UiState {
    pub fn is_admin(&self, admin_role: &str) -> bool {
        self.user.role == admin_role
    }

    /// Fills in the dark default when no theme has been chosen yet.
    pub fn ensure_theme(&mut self) -> Theme {
        *self.theme.get_or_insert(Theme::Dark)
    }

    pub fn switch_role(&mut self, role: &str, admin_role: &str) {
        self.user.role = role.to_string();
        self.user.name = if role == admin_role {
            ADMIN_DISPLAY_NAME.to_string()
        } else {
            ANALYST_DISPLAY_NAME.to_string()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_dark_admin() {
        let state = UiState::default();
        assert!(state.is_admin(ADMIN_ROLE));
        assert_eq!(state.theme, Some(Theme::Dark));
        assert_eq!(state.user.email, ADMIN_EMAIL);
        assert_eq!(state.current_project, None);
    }

    #[test]
    fn unset_theme_reads_as_dark() {
        let mut state = UiState {
            theme: None,
            ..UiState::default()
        };
        assert_eq!(state.ensure_theme(), Theme::Dark);
        assert_eq!(state.theme, Some(Theme::Dark));
    }

    #[test]
    fn switching_role_renames_user() {
        let mut state = UiState::default();
        state.switch_role(ANALYST_ROLE, ADMIN_ROLE);
        assert_eq!(state.user.name, ANALYST_DISPLAY_NAME);
        assert!(!state.is_admin(ADMIN_ROLE));

        state.switch_role(ADMIN_ROLE, ADMIN_ROLE);
        assert_eq!(state.user.name, ADMIN_DISPLAY_NAME);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let json = serde_json::to_string(&UiState::default()).expect("serialize state");
        assert!(json.contains("\"theme\":\"dark\""));
    }
}
