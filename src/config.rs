use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    loading::{prelude::SkeletonVariant, skeleton::SkeletonOptions},
    utils::CCStr,
};

const CONFIG_DIR_NAME: &str = "grant-desk";
const CONFIG_FILE_NAME: &str = "config.json";
const API_URL_ENV: &str = "GRANT_DESK_API_URL";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("page_size must be between 1 and 200, got {0}")]
    PageSize(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: CCStr,
    pub page_size: u32,
    /// Variant used by views that do not pin their own skeleton
    pub default_variant: SkeletonVariant,
    /// Adjustments applied to every skeleton the overlay shows
    pub skeleton: SkeletonOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: CCStr::from("http://localhost:8080/api"),
            page_size: 20,
            default_variant: SkeletonVariant::Auto,
            skeleton: SkeletonOptions::default(),
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the configuration file at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No configuration file at {}, using defaults", path.display());
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        config.validate()
    }

    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if !(1..=200).contains(&self.page_size) {
            return Err(ConfigError::PageSize(self.page_size));
        }
        Ok(self)
    }

    fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            log::info!("{API_URL_ENV} overrides the API base URL: {url}");
            self.api_base_url = CCStr::from(url.trim());
        }
        self
    }

    /// Configuration of the running application: the default file if any,
    /// then the environment. Falls back to the defaults on error.
    pub fn load() -> Self {
        let from_file = match Self::default_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                log::error!("{e}");
                Self::default()
            }),
            None => Self::default(),
        };
        from_file.with_env_override(std::env::var(API_URL_ENV).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::loading::skeleton::SidebarWidth;

    #[test]
    fn partial_files_keep_defaults() {
        let config = AppConfig::parse(r#"{ "page_size": 50 }"#).unwrap();
        assert_eq!(config.page_size, 50);
        assert_eq!(config.api_base_url, AppConfig::default().api_base_url);
        assert_eq!(config.default_variant, SkeletonVariant::Auto);
    }

    #[test]
    fn full_file() {
        let config = AppConfig::parse(
            r#"{
                "api_base_url": "https://grants.example.org/api",
                "page_size": 10,
                "default_variant": "table"
            }"#,
        )
        .unwrap();
        assert_eq!(&*config.api_base_url, "https://grants.example.org/api");
        assert_eq!(config.default_variant, SkeletonVariant::Table);
    }

    #[test]
    fn skeleton_overrides() {
        let config = AppConfig::parse(
            r#"{ "skeleton": { "sidebar_width": "wide", "show_extra_cards": true } }"#,
        )
        .unwrap();
        assert_eq!(
            config.skeleton,
            SkeletonOptions {
                steps: None,
                sidebar_width: Some(SidebarWidth::Wide),
                show_extra_cards: Some(true),
            }
        );
        assert!(AppConfig::parse(r#"{ "skeleton": { "sidebar_width": "huge" } }"#).is_err());
        assert_eq!(
            AppConfig::parse("{}").unwrap().skeleton,
            SkeletonOptions::default()
        );
    }

    #[test]
    fn invalid_page_size_is_rejected() {
        let config = AppConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::PageSize(0))));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("grant-desk-does-not-exist/config.json");
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn env_override_ignores_blank_values() {
        let config = AppConfig::default().with_env_override(Some("  ".to_owned()));
        assert_eq!(config, AppConfig::default());
        let config =
            AppConfig::default().with_env_override(Some("https://api.example.org ".to_owned()));
        assert_eq!(&*config.api_base_url, "https://api.example.org");
    }
}
