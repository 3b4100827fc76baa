use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct MonitorConfig {
    #[serde(with = "humantime_serde", default = "super::default_sample_interval")]
    pub sample_interval: std::time::Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            sample_interval: super::default_sample_interval(),
        }
    }
}

impl MonitorConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!(?path, "No configuration file, using defaults");
            return Ok(MonitorConfig::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_is_missing() {
        let config = MonitorConfig::load(Path::new("/nonexistent/monitor.toml")).unwrap();
        assert_eq!(config, MonitorConfig::default());
        assert_eq!(config.sample_interval, std::time::Duration::from_millis(500));
    }

    #[test]
    fn test_parse_interval() {
        let config: MonitorConfig = toml::from_str(r#"sample_interval = "1s""#).unwrap();
        assert_eq!(config.sample_interval, std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_interval_defaults_when_absent() {
        let config: MonitorConfig = toml::from_str("").unwrap();
        assert_eq!(config.sample_interval, std::time::Duration::from_millis(500));
    }
}
