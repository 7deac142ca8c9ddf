//! studyquiz-report — Rendering of study documents.
//!
//! Markdown comes straight from `studyquiz-core`; this crate adds a
//! printable HTML worksheet and a JSON document for other tools.

pub mod html;
pub mod json;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

use studyquiz_core::report::StudyDocument;

/// Output format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" | "text" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Render `doc` in the requested format.
pub fn render(doc: &StudyDocument, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(doc.to_markdown()),
        OutputFormat::Json => json::generate_json(doc),
        OutputFormat::Html => Ok(html::generate_html(doc)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_display_and_parse() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert!("sarif".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn empty_document_in_every_format() {
        let doc = StudyDocument::default();
        assert_eq!(render(&doc, OutputFormat::Markdown).unwrap(), "");
        let json = render(&doc, OutputFormat::Json).unwrap();
        assert!(json.contains("\"discussion\": []"));
        let html = render(&doc, OutputFormat::Html).unwrap();
        assert!(html.contains("</html>"));
    }
}
