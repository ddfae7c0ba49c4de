//! User preferences carried alongside the ledger in backups.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "Settings::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "Settings::default_notifications")]
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            theme: Theme::default(),
            notifications: Self::default_notifications(),
        }
    }
}

impl Settings {
    pub fn default_currency() -> String {
        "BRL".into()
    }

    pub fn default_notifications() -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value
            .map(|v| Theme::from_str(&v))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_install() {
        let settings = Settings::default();
        assert_eq!(settings.currency, "BRL");
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications);
    }

    #[test]
    fn unknown_theme_values_fall_back_to_light() {
        let theme: Theme = serde_json::from_str("\"neon\"").unwrap();
        assert_eq!(theme, Theme::Light);
        let theme: Theme = serde_json::from_str("\"DARK\"").unwrap();
        assert_eq!(theme, Theme::Dark);
    }
}
