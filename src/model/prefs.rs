use serde::{Deserialize, Serialize};

/// Scalar preferences. Each field is persisted under its own storage key
/// rather than as one blob; the struct exists so the reducer can treat
/// them as ordinary state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: String,
    pub primary_color: String,
    /// Screen-lock password compared by plain string equality. This is
    /// not a security boundary.
    #[serde(default)]
    pub app_password: Option<String>,
    pub time_tracker_width: u32,
    pub app_view_scale: f64,
    #[serde(default)]
    pub salat_location: Option<String>,
    #[serde(default)]
    pub is_auto_color_change_enabled: bool,
    /// Minutes between automatic accent-color rotations.
    pub auto_color_change_interval: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: "dark".into(),
            primary_color: "#3b82f6".into(),
            app_password: None,
            time_tracker_width: 320,
            app_view_scale: 1.0,
            salat_location: None,
            is_auto_color_change_enabled: false,
            auto_color_change_interval: 5,
        }
    }
}

impl Preferences {
    /// Screen-lock check: plain equality, no lockout.
    pub fn password_matches(&self, input: &str) -> bool {
        match &self.app_password {
            Some(p) => p == input,
            None => true,
        }
    }
}
