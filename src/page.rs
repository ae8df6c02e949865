use crate::panel::{BufferSink, PanelContent, PanelSink};

/// Stand-in for the host document: two addressable panels whose content the
/// loaders overwrite. Assembles a static HTML page around whatever was
/// written into the sinks.
#[derive(Debug)]
pub struct DashboardPage {
    pub keywords: BufferSink,
    pub stats: BufferSink,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardPage {
    pub fn new() -> Self {
        Self {
            keywords: BufferSink::new("keywords"),
            stats: BufferSink::new("stats"),
        }
    }

    pub fn apply(&mut self, keywords: PanelContent, stats: PanelContent) {
        self.keywords.set_content(keywords);
        self.stats.set_content(stats);
    }

    pub fn to_html(&self) -> String {
        let keywords = panel_body(&self.keywords);
        let stats = panel_body(&self.stats);
        format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Literature dashboard</title></head>\n<body>\n\
             <h2>Top keywords</h2>\n<div id=\"{}\">{}</div>\n\
             <h2>Network statistics</h2>\n<pre id=\"{}\">{}</pre>\n\
             </body>\n</html>\n",
            self.keywords.id(),
            keywords,
            self.stats.id(),
            stats,
        )
    }
}

fn panel_body(sink: &BufferSink) -> &str {
    sink.content().map(PanelContent::as_str).unwrap_or("")
}
