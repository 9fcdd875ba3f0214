use crate::core::ordering::SortSpec;
use crate::core::suggestions::DEFAULT_SUGGESTION_LIMIT;
use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings read from `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Maximum number of name suggestions shown at once
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Folder holding item icons; also the source of name suggestions
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,
    /// Catalog JSON file used when a command is given none
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default)]
    pub default_sort: SortSpec,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            icon_dir: None,
            catalog_path: None,
            default_sort: SortSpec::default(),
        }
    }
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

/// Default config location: `<data dir>/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join("config.json"))
}

/// Loads the app config from `path` (or the default location), or returns
/// defaults if the file is missing or malformed.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O.
pub async fn load_config(path: Option<&Path>) -> AppConfig {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        tracing::debug!("No data directory available, using default config");
        return AppConfig::default();
    };

    match tokio::fs::read_to_string(&path).await {
        Ok(json) => match serde_json::from_str::<AppConfig>(&json) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed config {}: {e}", path.display());
                AppConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config at {}, using defaults", path.display());
            AppConfig::default()
        }
        Err(e) => {
            tracing::warn!("Cannot read config {}: {e}", path.display());
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ordering::{SortDirection, SortField};

    #[test]
    fn test_partial_json_uses_field_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"icon_dir": "/icons"}"#).unwrap();
        assert_eq!(config.suggestion_limit, 12);
        assert_eq!(config.icon_dir, Some(PathBuf::from("/icons")));
        assert_eq!(config.default_sort, SortSpec::default());
    }

    #[test]
    fn test_default_sort_from_json() {
        let json = r#"{"default_sort": {"field": "price_per_kg", "direction": "descending"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.default_sort,
            SortSpec::new(SortField::PricePerKg, SortDirection::Descending)
        );
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("config.json"))).await;
        assert_eq!(config, AppConfig::default());
    }

    #[tokio::test]
    async fn test_load_config_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "suggestion_limit = 5").unwrap();
        assert_eq!(load_config(Some(&path)).await, AppConfig::default());
    }

    #[tokio::test]
    async fn test_load_config_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"suggestion_limit": 5, "catalog_path": "items.json"}"#).unwrap();
        let config = load_config(Some(&path)).await;
        assert_eq!(config.suggestion_limit, 5);
        assert_eq!(config.catalog_path, Some(PathBuf::from("items.json")));
    }
}
