//! Tag filter configuration

use serde::Deserialize;

use crate::domain::foundation::FilterMode;

/// Defaults applied when a caller filters without naming a mode
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FilterConfig {
    /// Mode used when none is requested (`any` or `all`)
    #[serde(default)]
    pub default_mode: FilterMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_config_defaults_to_any() {
        assert_eq!(FilterConfig::default().default_mode, FilterMode::Any);
    }

    #[test]
    fn test_filter_config_deserialization() {
        let config: FilterConfig = serde_json::from_str(r#"{"default_mode": "all"}"#).unwrap();
        assert_eq!(config.default_mode, FilterMode::All);
    }
}
