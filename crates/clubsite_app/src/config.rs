use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use clubsite_core::{ContactDefaults, DatasetKind};
use clubsite_engine::{LoaderSettings, StoreSettings};

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_PATH: &str = "./clubsite.ron";

/// Settings read from the RON config file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub project_id: String,
    pub base_url: String,
    pub database: String,
    pub api_key: Option<String>,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub page_size: u32,
    pub max_bytes: u64,
    pub fetch_timeout_secs: u64,
    pub cache_ttl_hours: u64,
    pub cache_dir: PathBuf,
    pub cached_datasets: Vec<DatasetKind>,
    pub featured_events: usize,
    pub log_destination: LogDestination,
    pub contact_defaults: ContactDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        let store = StoreSettings::default();
        let loader = LoaderSettings::default();
        Self {
            project_id: store.project_id,
            base_url: store.base_url,
            database: store.database,
            api_key: store.api_key,
            connect_timeout_secs: store.connect_timeout.as_secs(),
            request_timeout_secs: store.request_timeout.as_secs(),
            page_size: store.page_size,
            max_bytes: store.max_bytes,
            fetch_timeout_secs: loader.fetch_timeout.as_secs(),
            cache_ttl_hours: loader.cache_ttl.as_secs() / 3600,
            cache_dir: PathBuf::from(".clubsite_cache"),
            cached_datasets: loader.cached_datasets,
            featured_events: loader.featured_events,
            log_destination: LogDestination::default(),
            contact_defaults: loader.contact_defaults,
        }
    }
}

impl AppConfig {
    /// Reads and validates the config file; a missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", path.display()));
            }
        };
        let config: Self =
            ron::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("checking {}", path.display()))?;
        Ok(config)
    }

    /// Zero limits would fail every request before it starts.
    fn validate(&self) -> anyhow::Result<()> {
        let limits = [
            ("connect_timeout_secs", self.connect_timeout_secs),
            ("request_timeout_secs", self.request_timeout_secs),
            ("fetch_timeout_secs", self.fetch_timeout_secs),
            ("page_size", u64::from(self.page_size)),
            ("max_bytes", self.max_bytes),
        ];
        for (name, value) in limits {
            if value == 0 {
                bail!("{name} must be greater than zero");
            }
        }
        Ok(())
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            base_url: self.base_url.clone(),
            project_id: self.project_id.clone(),
            database: self.database.clone(),
            api_key: self.api_key.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            page_size: self.page_size,
            max_bytes: self.max_bytes,
        }
    }

    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            fetch_timeout: Duration::from_secs(self.fetch_timeout_secs),
            cache_ttl: Duration::from_secs(self.cache_ttl_hours * 3600),
            cached_datasets: self.cached_datasets.clone(),
            featured_events: self.featured_events,
            contact_defaults: self.contact_defaults.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::load(&temp.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.loader_settings().cache_ttl, Duration::from_secs(86_400));
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clubsite.ron");
        fs::write(
            &path,
            r#"(
                project_id: "robotics-demo",
                cached_datasets: [collaborated_clubs, sponsors],
                log_destination: Both,
            )"#,
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();

        assert_eq!(config.project_id, "robotics-demo");
        assert_eq!(
            config.cached_datasets,
            vec![DatasetKind::CollaboratedClubs, DatasetKind::Sponsors]
        );
        assert_eq!(config.log_destination, LogDestination::Both);
        assert_eq!(config.featured_events, 3);
        assert_eq!(config.store_settings().project_id, "robotics-demo");
    }

    #[test]
    fn store_limits_flow_into_store_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clubsite.ron");
        fs::write(
            &path,
            "(connect_timeout_secs: 3, page_size: 50, max_bytes: 1024)",
        )
        .unwrap();

        let store = AppConfig::load(&path).unwrap().store_settings();

        assert_eq!(store.connect_timeout, Duration::from_secs(3));
        assert_eq!(store.page_size, 50);
        assert_eq!(store.max_bytes, 1024);
        assert_eq!(store.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn zero_timeouts_and_limits_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clubsite.ron");
        for body in [
            "(fetch_timeout_secs: 0)",
            "(request_timeout_secs: 0)",
            "(page_size: 0)",
            "(max_bytes: 0)",
        ] {
            fs::write(&path, body).unwrap();
            let err = AppConfig::load(&path).unwrap_err();
            assert!(
                format!("{err:#}").contains("must be greater than zero"),
                "{body}: {err:#}"
            );
        }
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("clubsite.ron");
        fs::write(&path, "(project_id: ").unwrap();

        assert!(AppConfig::load(&path).is_err());
    }
}
