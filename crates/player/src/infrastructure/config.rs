//! Selector configuration
//!
//! Names the three containers the selector attaches to. The defaults match the
//! page markup the selector ships with; native builds can override each id
//! from the environment (a `.env` file is loaded first by the binary).

use serde::{Deserialize, Serialize};

pub const TYPE_SELECTOR_ID_VAR: &str = "NOTIFIER_TYPE_SELECTOR_ID";
pub const FIELD_SLOT_ID_VAR: &str = "NOTIFIER_FIELD_SLOT_ID";
pub const FORM_ID_VAR: &str = "NOTIFIER_FORM_ID";

/// Ids of the containers the selector reads at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Container whose clicks select the notification type
    pub type_selector_id: String,
    /// Container that holds the recipient input
    pub field_slot_id: String,
    /// Form that receives the submit control
    pub form_id: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            type_selector_id: "message-type".to_string(),
            field_slot_id: "add-field".to_string(),
            form_id: "form".to_string(),
        }
    }
}

impl SelectorConfig {
    /// Defaults overridden by `NOTIFIER_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let defaults = Self::default();
        Self {
            type_selector_id: read(TYPE_SELECTOR_ID_VAR).unwrap_or(defaults.type_selector_id),
            field_slot_id: read(FIELD_SLOT_ID_VAR).unwrap_or(defaults.field_slot_id),
            form_id: read(FORM_ID_VAR).unwrap_or(defaults.form_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = SelectorConfig::default();
        assert_eq!(config.type_selector_id, "message-type");
        assert_eq!(config.field_slot_id, "add-field");
        assert_eq!(config.form_id, "form");
    }

    #[test]
    fn test_lookup_overrides_and_ignores_blanks() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (FIELD_SLOT_ID_VAR, " recipient-slot "),
            (FORM_ID_VAR, "   "),
        ]);
        let config = SelectorConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.type_selector_id, "message-type");
        assert_eq!(config.field_slot_id, "recipient-slot");
        assert_eq!(config.form_id, "form");
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: SelectorConfig =
            serde_json::from_str(r#"{ "form_id": "notify-form" }"#).expect("parse config");
        assert_eq!(config.form_id, "notify-form");
        assert_eq!(config.field_slot_id, "add-field");
    }
}
