use crate::Result;
use crate::confirmation::SensitiveAction;
use crate::shortcut::ShortcutModifier;
use derive_getters::Getters;
use serde::Deserialize;
use web_sys::Document;

/// Attribute of `<body>` where the server may tune the enhancements, as a JSON object.
pub const CONFIG_ATTRIBUTE: &str = "data-enhancements";

pub const DEFAULT_TOAST_LIFETIME_MS: u32 = 3000;
pub const DEFAULT_FILTER_PLACEHOLDER: &str = "Filter roster by name, username, or rank...";

#[derive(Debug, Clone, PartialEq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    toast_lifetime_ms: u32,
    sensitive_actions: Vec<SensitiveAction>,
    filter_placeholder: String,
    shortcut_modifier: ShortcutModifier,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            toast_lifetime_ms: DEFAULT_TOAST_LIFETIME_MS,
            sensitive_actions: SensitiveAction::ALL.to_vec(),
            filter_placeholder: DEFAULT_FILTER_PLACEHOLDER.to_owned(),
            shortcut_modifier: ShortcutModifier::Control,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json_wasm::from_str(json)?)
    }

    /// Read the configuration from the body attribute.
    /// Falls back to the defaults when the attribute is missing or unreadable.
    pub fn load(document: &Document) -> Self {
        let Some(json) = document
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(error) => {
                log::warn!("Ignoring `{CONFIG_ATTRIBUTE}`, using defaults: {error:?}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_for_empty_object() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(Config::default(), config);
        assert_eq!(3000, *config.toast_lifetime_ms());
        assert_eq!(&SensitiveAction::ALL.to_vec(), config.sensitive_actions());
    }

    #[test]
    fn should_override_given_fields_only() {
        let config =
            Config::from_json(r#"{"toast_lifetime_ms":5000,"sensitive_actions":["medal"],"shortcut_modifier":"meta"}"#)
                .unwrap();
        assert_eq!(5000, *config.toast_lifetime_ms());
        assert_eq!(&vec![SensitiveAction::Medal], config.sensitive_actions());
        assert_eq!(&ShortcutModifier::Meta, config.shortcut_modifier());
        assert_eq!(DEFAULT_FILTER_PLACEHOLDER, config.filter_placeholder());
    }

    #[test]
    fn should_reject_unknown_action() {
        assert!(Config::from_json(r#"{"sensitive_actions":["delete"]}"#).is_err());
    }

    #[test]
    fn should_reject_malformed_json() {
        assert!(Config::from_json("{toast_lifetime_ms: 1}").is_err());
    }
}
