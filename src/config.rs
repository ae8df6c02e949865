use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::panel::STATS_LINE_LIMIT;

/// Resource paths and display limits. Defaults match the paths the asset
/// generator writes to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub keyword_path: String,
    pub stats_path: String,
    pub stats_line_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            keyword_path: "assets/keyword_stats.json".to_string(),
            stats_path: "assets/network_statistics.csv".to_string(),
            stats_line_limit: STATS_LINE_LIMIT,
        }
    }
}

/// Load configuration from an optional TOML file. An explicitly named file
/// that cannot be read or parsed is an error; no file means defaults.
pub fn load(path: Option<&Path>) -> Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_generated_assets() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.keyword_path, "assets/keyword_stats.json");
        assert_eq!(cfg.stats_path, "assets/network_statistics.csv");
        assert_eq!(cfg.stats_line_limit, 20);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("statsboard.toml");
        std::fs::write(&path, "stats_line_limit = 5\n").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.stats_line_limit, 5);
        assert_eq!(cfg.keyword_path, "assets/keyword_stats.json");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load(Some(Path::new("/nonexistent/statsboard.toml"))).is_err());
    }
}
