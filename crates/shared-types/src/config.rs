use serde::{Deserialize, Serialize};

/// Feature flags controlling optional subsystems.
///
/// Loaded from `config.toml` at server startup. Every field defaults to
/// `false` so that a missing or incomplete config file disables all
/// optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Tracing subscriber initialisation.
    #[serde(default)]
    pub telemetry: bool,
    /// Skill suggestion recalculation from the occupation matrix.
    #[serde(default)]
    pub recommender: bool,
    /// The analytics export download route.
    #[serde(default)]
    pub export: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.telemetry);
        assert!(!flags.recommender);
        assert!(!flags.export);
    }

    #[test]
    fn deserialize_empty_toml_defaults_all_false() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            recommender = true
            "#,
        )
        .unwrap();
        assert!(config.features.recommender);
        assert!(!config.features.telemetry);
        assert!(!config.features.export);
    }

    #[test]
    fn serialize_roundtrip() {
        let flags = FeatureFlags {
            telemetry: true,
            recommender: false,
            export: true,
        };
        let json = serde_json::to_string(&flags).unwrap();
        let deserialized: FeatureFlags = serde_json::from_str(&json).unwrap();
        assert_eq!(flags, deserialized);
    }
}
