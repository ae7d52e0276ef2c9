pub mod json;
pub mod md;

use crate::error::PageScoreError;
use crate::types::report::PageReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &PageReport, format: OutputFormat) -> Result<String, PageScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PageScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> PageReport {
    use crate::analyze::{analyze, Engine};
    use crate::types::signals::{ContentSignals, PageSignals};

    let signals = PageSignals {
        content: Some(ContentSignals {
            word_count: 1500,
            header_count: 10,
            image_count: 6,
            link_count: 15,
            citation_count: 8,
        }),
        ..PageSignals::default()
    };
    PageReport {
        url: Some("https://example.com/post".to_string()),
        analyzed_at: "2024-06-01T00:00:00+00:00".to_string(),
        source_sha256: "ab".repeat(32),
        result: analyze(&signals, &Engine::default()),
    }
}
