// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_PERSONA_NAME: &str = "AI Assistant";
pub const DEFAULT_AVATAR: &str = "AI";
pub const DEFAULT_FOOTER: &str = "AI-generated response. Verify important information.";

/// Clock convention for the timestamp in the bubble header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ClockStyle {
    /// `3:45 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `15:45`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Persona configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonaConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_name() -> String {
    DEFAULT_PERSONA_NAME.to_string()
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

fn default_footer() -> String {
    DEFAULT_FOOTER.to_string()
}

impl Default for PersonaConfig {
    fn default() -> Self {
        PersonaConfig {
            name: default_name(),
            avatar: default_avatar(),
            footer: default_footer(),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub clock: ClockStyle,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub persona: PersonaConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.persona.name, "AI Assistant");
        assert_eq!(config.display.clock, ClockStyle::TwelveHour);
    }

    #[test]
    fn test_full_config() {
        let config: Config = toml::from_str(
            r#"
[persona]
name = "Helper"
avatar = "HB"
footer = "Generated"

[display]
clock = "24h"
"#,
        )
        .unwrap();

        assert_eq!(config.persona.name, "Helper");
        assert_eq!(config.persona.avatar, "HB");
        assert_eq!(config.persona.footer, "Generated");
        assert_eq!(config.display.clock, ClockStyle::TwentyFourHour);
    }

    #[test]
    fn test_unknown_clock_is_rejected() {
        let config: Result<Config, _> = toml::from_str("[display]\nclock = \"36h\"\n");
        assert!(config.is_err());
    }

    // Any valid clock value parses to the matching style
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_clock_parsing(clock in prop::sample::select(vec!["12h", "24h"])) {
            let toml_content = format!("[display]\nclock = \"{}\"\n", clock);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid clock: {}", clock);

            let expected = match clock {
                "12h" => ClockStyle::TwelveHour,
                "24h" => ClockStyle::TwentyFourHour,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().display.clock, expected);
        }
    }

    // Any subset of persona fields leaves the rest at their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_name in prop::bool::ANY,
            include_avatar in prop::bool::ANY,
            include_footer in prop::bool::ANY
        ) {
            let mut toml_content = String::from("[persona]\n");
            if include_name {
                toml_content.push_str("name = \"Custom\"\n");
            }
            if include_avatar {
                toml_content.push_str("avatar = \"CU\"\n");
            }
            if include_footer {
                toml_content.push_str("footer = \"Custom footer\"\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");
            let persona = config.unwrap().persona;

            let expected_name = if include_name { "Custom" } else { DEFAULT_PERSONA_NAME };
            let expected_avatar = if include_avatar { "CU" } else { DEFAULT_AVATAR };
            let expected_footer = if include_footer { "Custom footer" } else { DEFAULT_FOOTER };
            prop_assert_eq!(persona.name.as_str(), expected_name);
            prop_assert_eq!(persona.avatar.as_str(), expected_avatar);
            prop_assert_eq!(persona.footer.as_str(), expected_footer);
        }
    }
}
