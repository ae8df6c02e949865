use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keyword statistics as written by the asset generator. The panel renderer
/// only consumes `top_keywords`; `top_counts` is carried for the summary
/// views and kept in step by the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordStats {
    #[serde(default)]
    pub top_keywords: Vec<String>,
    #[serde(default)]
    pub top_counts: Vec<u64>,
}

impl KeywordStats {
    pub fn is_empty(&self) -> bool {
        self.top_keywords.is_empty()
    }
}

/// Decode a keyword stats body. A body that is not JSON at all is a load
/// failure (`None`); valid JSON that does not carry a usable `top_keywords`
/// array reads as an empty list instead.
pub fn keyword_stats_from_json(bytes: &[u8]) -> Option<KeywordStats> {
    let value: Value = serde_json::from_slice(bytes).ok()?;
    Some(serde_json::from_value(value).unwrap_or_default())
}
