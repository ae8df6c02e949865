use crate::model::KeywordStats;

/// Shown when the keyword resource cannot be loaded or parsed.
pub const KEYWORDS_UNAVAILABLE: &str = "No keywords available";
/// Shown when the keyword resource loads but the list is empty.
pub const KEYWORDS_EMPTY: &str = "No keywords found.";
/// Shown when the statistics resource cannot be loaded.
pub const STATS_UNAVAILABLE: &str = "No network statistics found";

/// How many lines of the statistics file make it into the panel.
pub const STATS_LINE_LIMIT: usize = 20;

/// Rendered content for one panel: either list markup or plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    Html(String),
    Text(String),
}

impl PanelContent {
    pub fn as_str(&self) -> &str {
        match self {
            PanelContent::Html(s) | PanelContent::Text(s) => s,
        }
    }
}

/// Render target for one panel. Injected instead of looked up from a host
/// document, so rendering stays testable on its own.
pub trait PanelSink {
    fn set_content(&mut self, content: PanelContent);
}

/// In-memory sink. Records how many writes it received; a loader settles a
/// panel with exactly one.
#[derive(Debug, Default)]
pub struct BufferSink {
    id: String,
    content: Option<PanelContent>,
    writes: usize,
}

impl BufferSink {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: None,
            writes: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PanelSink for BufferSink {
    fn set_content(&mut self, content: PanelContent) {
        self.content = Some(content);
        self.writes += 1;
    }
}

/// Render the keyword panel from a decoded (or failed) fetch.
///
/// `None` means the resource could not be loaded or parsed; an empty list is
/// reported with its own message. Items are not escaped: assets are trusted,
/// same-origin data.
pub fn render_keyword_panel(stats: Option<&KeywordStats>) -> PanelContent {
    match stats {
        None => PanelContent::Text(KEYWORDS_UNAVAILABLE.to_string()),
        Some(s) if s.is_empty() => PanelContent::Text(KEYWORDS_EMPTY.to_string()),
        Some(s) => {
            let mut html = String::from("<ol>");
            for keyword in &s.top_keywords {
                html.push_str("<li>");
                html.push_str(keyword);
                html.push_str("</li>");
            }
            html.push_str("</ol>");
            PanelContent::Html(html)
        }
    }
}

/// Render the statistics panel from a fetched (or failed) text body.
///
/// The body is trimmed and truncated to the first `limit` lines; no column
/// or header parsing happens here, the CSV is opaque text.
pub fn render_stats_panel(text: Option<&str>, limit: usize) -> PanelContent {
    match text {
        None => PanelContent::Text(STATS_UNAVAILABLE.to_string()),
        Some(t) => PanelContent::Text(first_lines(t, limit)),
    }
}

fn first_lines(text: &str, limit: usize) -> String {
    text.trim()
        .split('\n')
        .take(limit)
        .collect::<Vec<_>>()
        .join("\n")
}
