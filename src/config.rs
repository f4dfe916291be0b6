// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

/// Debounce delay applied when the host does not supply one
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 1000;

fn default_debounce_delay_ms() -> u64 {
    DEFAULT_DEBOUNCE_DELAY_MS
}

fn default_insert_keystroke() -> String {
    "Ctrl+Alt+E".to_string()
}

fn default_accept_keystroke() -> String {
    "Tab".to_string()
}

/// Key combos the host is expected to bind for ghost text actions
///
/// The engine never reads keyboard input itself; the host looks these up
/// and routes matching key events to the controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keystrokes {
    /// Manually triggers a fetch, bypassing the debounce timer
    #[serde(default = "default_insert_keystroke")]
    pub insert_ghost_text: String,
    /// Commits the shown suggestion as document content
    #[serde(default = "default_accept_keystroke")]
    pub accept_ghost_text: String,
}

impl Default for Keystrokes {
    fn default() -> Self {
        Keystrokes {
            insert_ghost_text: default_insert_keystroke(),
            accept_ghost_text: default_accept_keystroke(),
        }
    }
}

/// Ghost text configuration, read once at controller construction
///
/// The content fetcher is not part of this structure; it is a trait object
/// supplied separately when the controller is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GhostTextConfig {
    /// Milliseconds between the last edit and the fetch trigger
    #[serde(default = "default_debounce_delay_ms")]
    pub debounce_delay_ms: u64,
    #[serde(default)]
    pub keystrokes: Keystrokes,
}

impl Default for GhostTextConfig {
    fn default() -> Self {
        GhostTextConfig {
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            keystrokes: Keystrokes::default(),
        }
    }
}

impl GhostTextConfig {
    /// Parse configuration from TOML text; missing fields use defaults
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Debounce delay as a `Duration`
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = GhostTextConfig::default();
        assert_eq!(config.debounce_delay_ms, 1000);
        assert_eq!(config.keystrokes.insert_ghost_text, "Ctrl+Alt+E");
        assert_eq!(config.keystrokes.accept_ghost_text, "Tab");
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
debounce_delay_ms = 250

[keystrokes]
insert_ghost_text = "Ctrl+Space"
accept_ghost_text = "Enter"
"#;
        let config: GhostTextConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.debounce_delay_ms, 250);
        assert_eq!(config.debounce_delay(), Duration::from_millis(250));
        assert_eq!(config.keystrokes.insert_ghost_text, "Ctrl+Space");
        assert_eq!(config.keystrokes.accept_ghost_text, "Enter");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: GhostTextConfig = toml::from_str("").unwrap();
        assert_eq!(config, GhostTextConfig::default());
    }

    // Feature: ghost-text-config, Property: Missing fields use defaults
    // For any TOML config with missing optional fields, parsing should succeed
    // and fill in the documented defaults for every missing field.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_delay in prop::bool::ANY,
            include_keystrokes_section in prop::bool::ANY,
            include_accept_field in prop::bool::ANY,
            delay in 1u64..60_000u64,
        ) {
            let mut toml_content = String::new();
            if include_delay {
                toml_content.push_str(&format!("debounce_delay_ms = {}\n", delay));
            }
            if include_keystrokes_section {
                toml_content.push_str("[keystrokes]\n");
                if include_accept_field {
                    toml_content.push_str("accept_ghost_text = \"Enter\"\n");
                }
            }

            let config: GhostTextConfig = toml::from_str(&toml_content).unwrap();

            let expected_delay = if include_delay { delay } else { DEFAULT_DEBOUNCE_DELAY_MS };
            prop_assert_eq!(config.debounce_delay_ms, expected_delay);

            let expected_accept = if include_keystrokes_section && include_accept_field {
                "Enter"
            } else {
                "Tab"
            };
            prop_assert_eq!(config.keystrokes.accept_ghost_text, expected_accept);

            // The insert combo is never written above, so it always defaults
            prop_assert_eq!(config.keystrokes.insert_ghost_text, "Ctrl+Alt+E");
        }
    }
}
