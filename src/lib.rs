pub mod config;
pub mod fetch;
pub mod generate;
pub mod model;
pub mod page;
pub mod panel;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::config::DashboardConfig;
    pub use crate::fetch::{Fetcher, FileFetcher, HttpFetcher};
    pub use crate::model::KeywordStats;
    pub use crate::page::DashboardPage;
    pub use crate::panel::{BufferSink, PanelContent, PanelSink};
    pub use crate::Dashboard;
}

use tracing::warn;

use crate::config::DashboardConfig;
use crate::fetch::Fetcher;
use crate::model::{keyword_stats_from_json, KeywordStats};
use crate::panel::{render_keyword_panel, render_stats_panel, PanelContent};

/// Library entry point. Owns a resource fetcher and the panel configuration.
///
/// The two loaders are independent: they share no state, run concurrently
/// under `load_all`, and settle each panel with exactly one piece of content.
/// All failures collapse locally into fallback text; nothing propagates.
pub struct Dashboard {
    fetcher: Box<dyn Fetcher>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(fetcher: Box<dyn Fetcher>, config: DashboardConfig) -> Self {
        Self { fetcher, config }
    }

    /// Load and render the keyword panel.
    pub async fn load_keyword_panel(&self) -> PanelContent {
        let stats = self.fetch_keyword_stats().await;
        render_keyword_panel(stats.as_ref())
    }

    /// Load and render the network statistics panel.
    pub async fn load_stats_panel(&self) -> PanelContent {
        let text = self.fetch_stats_text().await;
        render_stats_panel(text.as_deref(), self.config.stats_line_limit)
    }

    /// Load both panels concurrently. Completion order is unspecified and a
    /// failure in one never blocks or alters the other.
    pub async fn load_all(&self) -> (PanelContent, PanelContent) {
        tokio::join!(self.load_keyword_panel(), self.load_stats_panel())
    }

    async fn fetch_keyword_stats(&self) -> Option<KeywordStats> {
        let bytes = match self.fetcher.fetch(&self.config.keyword_path).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                warn!("keyword stats request failed: {e:#}");
                return None;
            }
        };
        // Parse failures collapse into the same fallback as request failures
        let stats = keyword_stats_from_json(&bytes);
        if stats.is_none() {
            warn!(path = %self.config.keyword_path, "keyword stats body is not valid JSON");
        }
        stats
    }

    async fn fetch_stats_text(&self) -> Option<String> {
        match self.fetcher.fetch(&self.config.stats_path).await {
            Ok(Some(bytes)) => Some(String::from_utf8_lossy(&bytes).into_owned()),
            Ok(None) => None,
            Err(e) => {
                warn!("network statistics request failed: {e:#}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FileFetcher;
    use std::path::Path;

    fn dashboard(root: &Path) -> Dashboard {
        Dashboard::new(
            Box::new(FileFetcher::new(root)),
            DashboardConfig::default(),
        )
    }

    fn write_assets(root: &Path, keywords: Option<&str>, stats: Option<&str>) {
        std::fs::create_dir_all(root.join("assets")).unwrap();
        if let Some(body) = keywords {
            std::fs::write(root.join("assets/keyword_stats.json"), body).unwrap();
        }
        if let Some(body) = stats {
            std::fs::write(root.join("assets/network_statistics.csv"), body).unwrap();
        }
    }

    #[tokio::test]
    async fn renders_keyword_list_in_order() {
        let tmp = tempfile::tempdir().unwrap();
        write_assets(
            tmp.path(),
            Some(r#"{"top_keywords": ["alpha", "beta"]}"#),
            None,
        );
        let content = dashboard(tmp.path()).load_keyword_panel().await;
        assert_eq!(
            content,
            PanelContent::Html("<ol><li>alpha</li><li>beta</li></ol>".to_string())
        );
    }

    #[tokio::test]
    async fn empty_keyword_list_gets_its_own_message() {
        let tmp = tempfile::tempdir().unwrap();
        write_assets(tmp.path(), Some(r#"{"top_keywords": []}"#), None);
        let content = dashboard(tmp.path()).load_keyword_panel().await;
        assert_eq!(content.as_str(), "No keywords found.");
    }

    #[tokio::test]
    async fn missing_keyword_file_falls_back() {
        let tmp = tempfile::tempdir().unwrap();
        let content = dashboard(tmp.path()).load_keyword_panel().await;
        assert_eq!(content.as_str(), "No keywords available");
    }

    #[tokio::test]
    async fn malformed_keyword_json_collapses_into_the_load_fallback() {
        let tmp = tempfile::tempdir().unwrap();
        write_assets(tmp.path(), Some("{not json"), None);
        let content = dashboard(tmp.path()).load_keyword_panel().await;
        assert_eq!(content.as_str(), "No keywords available");
    }

    #[tokio::test]
    async fn stats_panel_takes_first_twenty_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let body: String = (1..=25).map(|i| format!("r{i},v{i}\n")).collect();
        write_assets(tmp.path(), None, Some(&body));
        let content = dashboard(tmp.path()).load_stats_panel().await;
        let want: String = (1..=20)
            .map(|i| format!("r{i},v{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(content.as_str(), want);
    }

    #[tokio::test]
    async fn missing_stats_file_falls_back() {
        let tmp = tempfile::tempdir().unwrap();
        let content = dashboard(tmp.path()).load_stats_panel().await;
        assert_eq!(content.as_str(), "No network statistics found");
    }

    #[tokio::test]
    async fn panels_settle_independently() {
        // Only the stats asset exists; the keyword failure must not affect it
        let tmp = tempfile::tempdir().unwrap();
        write_assets(tmp.path(), None, Some("a,b\nc,d\n"));
        let (keywords, stats) = dashboard(tmp.path()).load_all().await;
        assert_eq!(keywords.as_str(), "No keywords available");
        assert_eq!(stats.as_str(), "a,b\nc,d");
    }

    #[tokio::test]
    async fn each_panel_receives_exactly_one_write() {
        let tmp = tempfile::tempdir().unwrap();
        write_assets(
            tmp.path(),
            Some(r#"{"top_keywords": ["alpha"]}"#),
            Some("a,b\n"),
        );
        let (keywords, stats) = dashboard(tmp.path()).load_all().await;
        let mut page = crate::page::DashboardPage::new();
        page.apply(keywords, stats);
        assert_eq!(page.keywords.writes(), 1);
        assert_eq!(page.stats.writes(), 1);
    }

    #[tokio::test]
    async fn line_limit_comes_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        write_assets(tmp.path(), None, Some("a\nb\nc\n"));
        let config = DashboardConfig {
            stats_line_limit: 2,
            ..DashboardConfig::default()
        };
        let dash = Dashboard::new(Box::new(FileFetcher::new(tmp.path())), config);
        let content = dash.load_stats_panel().await;
        assert_eq!(content.as_str(), "a\nb");
    }
}
