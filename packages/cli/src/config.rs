use mixin_codegen::Settings;
use mixin_resolver::IndexerPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "mixin.config.json";

/// Mixin configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Composition options, stored at the top level of the file
    #[serde(flatten)]
    pub settings: Settings,

    /// How indexers of mixin and target are matched
    #[serde(default)]
    pub indexer_policy: IndexerPolicy,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "includeDocumentation": true,
            "avoidLineBreaksInProperties": true,
            "injectMixins": false,
            "indexerPolicy": "by_signature"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.settings.include_documentation);
        assert!(config.settings.avoid_line_breaks_in_properties);
        assert!(!config.settings.inject_mixins);
        assert!(!config.settings.create_regions);
        assert_eq!(config.indexer_policy, IndexerPolicy::BySignature);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.inject_mixins);
        assert!(!config.settings.add_interfaces_to_child);
        assert_eq!(config.indexer_policy, IndexerPolicy::AnyIndexer);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        assert_eq!(Config::load(&cwd).unwrap(), Config::default());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "createRegions": true }"#,
        )
        .unwrap();
        let config = Config::load(&cwd).unwrap();
        assert!(config.settings.create_regions);
        assert!(config.settings.inject_mixins);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ not json").unwrap();

        assert!(Config::load(&dir.path().display().to_string()).is_err());
    }
}
