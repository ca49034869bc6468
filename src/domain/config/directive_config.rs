//! Directive configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

pub const DEFAULT_DIRECTIVE_NAME: &str = "clipboard";
pub const DEFAULT_GLOBAL_NAME: &str = "$clipboard";
pub const DEFAULT_SURFACE_STYLE: &str =
    "position:fixed;pointer-events:none;z-index:-9999;opacity:0;";
pub const DEFAULT_PERMISSION_NAME: &str = "clipboard-write";
pub const DEFAULT_HANDHELD_PLATFORMS: [&str; 3] = ["ipad", "ipod", "iphone"];
pub const DEFAULT_SELECTION_END: u32 = 999_999;

/// Plugin configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectiveConfig {
    /// Name the directive is registered under
    pub directive_name: Option<String>,
    /// Name of the global clipboard function
    pub global_name: Option<String>,
    /// Inline style of the off-screen copy surface
    pub surface_style: Option<String>,
    /// Permission queried before the asynchronous fallback
    pub permission_name: Option<String>,
    /// User agent fragments that select the range strategy
    pub handheld_platforms: Option<Vec<String>>,
    /// End offset used by the range strategy
    pub selection_end: Option<u32>,
}

impl DirectiveConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            directive_name: Some(DEFAULT_DIRECTIVE_NAME.to_string()),
            global_name: Some(DEFAULT_GLOBAL_NAME.to_string()),
            surface_style: Some(DEFAULT_SURFACE_STYLE.to_string()),
            permission_name: Some(DEFAULT_PERMISSION_NAME.to_string()),
            handheld_platforms: Some(
                DEFAULT_HANDHELD_PLATFORMS
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            ),
            selection_end: Some(DEFAULT_SELECTION_END),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            directive_name: other.directive_name.or(self.directive_name),
            global_name: other.global_name.or(self.global_name),
            surface_style: other.surface_style.or(self.surface_style),
            permission_name: other.permission_name.or(self.permission_name),
            handheld_platforms: other.handheld_platforms.or(self.handheld_platforms),
            selection_end: other.selection_end.or(self.selection_end),
        }
    }

    /// Reject values that would break registration or the fallback
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("directive_name", &self.directive_name),
            ("global_name", &self.global_name),
            ("surface_style", &self.surface_style),
            ("permission_name", &self.permission_name),
        ];

        for (key, value) in required {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if self.selection_end == Some(0) {
            return Err(ConfigError::ValidationError {
                key: "selection_end".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get directive name, or "clipboard" if not set
    pub fn directive_name_or_default(&self) -> &str {
        self.directive_name
            .as_deref()
            .unwrap_or(DEFAULT_DIRECTIVE_NAME)
    }

    /// Get global function name, or "$clipboard" if not set
    pub fn global_name_or_default(&self) -> &str {
        self.global_name.as_deref().unwrap_or(DEFAULT_GLOBAL_NAME)
    }

    /// Get surface style, or the off-screen default if not set
    pub fn surface_style_or_default(&self) -> &str {
        self.surface_style
            .as_deref()
            .unwrap_or(DEFAULT_SURFACE_STYLE)
    }

    /// Get permission name, or "clipboard-write" if not set
    pub fn permission_name_or_default(&self) -> &str {
        self.permission_name
            .as_deref()
            .unwrap_or(DEFAULT_PERMISSION_NAME)
    }

    /// Get handheld platform fragments, or iPad/iPod/iPhone if not set
    pub fn handheld_platforms_or_default(&self) -> Vec<String> {
        match &self.handheld_platforms {
            Some(platforms) => platforms.clone(),
            None => DEFAULT_HANDHELD_PLATFORMS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Get range selection end, or 999999 if not set
    pub fn selection_end_or_default(&self) -> u32 {
        self.selection_end.unwrap_or(DEFAULT_SELECTION_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = DirectiveConfig::defaults();
        assert_eq!(config.directive_name, Some("clipboard".to_string()));
        assert_eq!(config.global_name, Some("$clipboard".to_string()));
        assert_eq!(config.permission_name, Some("clipboard-write".to_string()));
        assert_eq!(config.selection_end, Some(999_999));
        assert_eq!(
            config.handheld_platforms_or_default(),
            vec!["ipad", "ipod", "iphone"]
        );
        assert!(config
            .surface_style_or_default()
            .contains("pointer-events:none"));
    }

    #[test]
    fn empty_has_all_none() {
        let config = DirectiveConfig::empty();
        assert!(config.directive_name.is_none());
        assert!(config.global_name.is_none());
        assert!(config.surface_style.is_none());
        assert!(config.handheld_platforms.is_none());
    }

    #[test]
    fn empty_accessors_fall_back_to_defaults() {
        let config = DirectiveConfig::empty();
        assert_eq!(config.directive_name_or_default(), "clipboard");
        assert_eq!(config.global_name_or_default(), "$clipboard");
        assert_eq!(config.permission_name_or_default(), "clipboard-write");
        assert_eq!(config.selection_end_or_default(), 999_999);
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = DirectiveConfig {
            directive_name: Some("clipboard".to_string()),
            selection_end: Some(500),
            ..Default::default()
        };

        let other = DirectiveConfig {
            directive_name: Some("copy".to_string()),
            selection_end: None, // Should not override
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.directive_name, Some("copy".to_string()));
        assert_eq!(merged.selection_end, Some(500)); // Kept from base
    }

    #[test]
    fn parse_toml_partial() {
        let content = r#"
directive_name = "copy"
handheld_platforms = ["iphone", "android"]
"#;

        let config = DirectiveConfig::from_toml(content).unwrap();
        assert_eq!(config.directive_name_or_default(), "copy");
        assert_eq!(config.handheld_platforms_or_default(), vec!["iphone", "android"]);
        assert_eq!(config.global_name_or_default(), "$clipboard");
    }

    #[test]
    fn parse_toml_rejects_empty_name() {
        let err = DirectiveConfig::from_toml(r#"directive_name = "  ""#).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { ref key, .. } if key == "directive_name")
        );
    }

    #[test]
    fn parse_toml_rejects_empty_surface_style() {
        let err = DirectiveConfig::from_toml(r#"surface_style = """#).unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { ref key, .. } if key == "surface_style")
        );
    }

    #[test]
    fn parse_toml_rejects_zero_selection_end() {
        let err = DirectiveConfig::from_toml("selection_end = 0").unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { ref key, .. } if key == "selection_end")
        );
    }

    #[test]
    fn parse_toml_reports_syntax_errors() {
        let err = DirectiveConfig::from_toml("directive_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn to_toml_round_trip() {
        let config = DirectiveConfig::defaults();
        let toml = config.to_toml().unwrap();
        let parsed = DirectiveConfig::from_toml(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
