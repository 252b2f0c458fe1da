//! Output reporters for readability reports
//!
//! Supports multiple output formats:
//! - `text` - Terminal output, one line per metric
//! - `json` - Machine-readable JSON
//! - `markdown` - GitHub-flavored Markdown

mod json;
mod markdown;
mod text;

use crate::models::Report;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a report using an OutputFormat enum
pub fn report_with_format(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    }
}

/// Score with two decimals, or "undefined"
pub(crate) fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.2}", s),
        None => "undefined".to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::AgePolicy;
    use crate::pipeline::compute_readability;

    pub(crate) const SAMPLE: &str = "This is the front page of the Simple English Wikipedia. \
        Wikipedias are places where people work together to write encyclopedias in different languages. \
        We use Simple English words and grammar here.";

    /// Build an `all` report for the sample text
    pub(crate) fn test_report(policy: AgePolicy) -> Report {
        compute_readability(SAMPLE)
            .report("all", policy)
            .expect("all is a valid selection")
    }

    /// Build an `all` report for empty input
    pub(crate) fn empty_report() -> Report {
        compute_readability("")
            .report("all", AgePolicy::Round)
            .expect("all is a valid selection")
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(Some(7.084)), "7.08");
        assert_eq!(format_score(None), "undefined");
    }

    #[test]
    fn test_every_format_renders_empty_report() {
        let report = empty_report();
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            let out = report_with_format(&report, format).expect("render");
            assert!(!out.is_empty(), "{format} output should not be empty");
        }
    }
}
