//! Text (terminal) reporter

use super::format_score;
use crate::models::{AgeEstimate, MetricResult, Report};
use anyhow::Result;
use console::style;

/// Render report as terminal output
pub fn render(report: &Report) -> Result<String> {
    let mut out = String::new();
    let counts = &report.counts;

    out.push_str(&format!("Words: {}\n", counts.words));
    out.push_str(&format!("Sentences: {}\n", counts.sentences));
    out.push_str(&format!("Characters: {}\n", counts.characters));
    out.push_str(&format!("Syllables: {}\n", counts.syllables));
    out.push_str(&format!("Polysyllables: {}\n", counts.polysyllables));
    if let Some(difficulty) = report.difficulty {
        out.push_str(&format!("Difficulty: {}\n", style(difficulty).bold()));
    }
    out.push('\n');

    for result in &report.results {
        out.push_str(&metric_line(result));
        out.push('\n');
    }

    if report.results.len() > 1 {
        out.push('\n');
        match report.average_age {
            Some(avg) => out.push_str(&format!(
                "This text should be understood in average by {:.2}-year-olds.\n",
                avg
            )),
            None => out.push_str(&format!(
                "{}\n",
                style("Not enough text to estimate an average age.").dim()
            )),
        }
    }

    Ok(out)
}

fn metric_line(result: &MetricResult) -> String {
    let name = style(result.metric.name()).bold();
    let score = format_score(result.score);
    match &result.age {
        AgeEstimate::Years(age) => format!("{}: {} (about {}-year-olds).", name, score, age),
        AgeEstimate::Range(range) => format!(
            "{}: {}. This text should be understood by {} year olds.",
            name, score, range
        ),
        AgeEstimate::Undefined => format!("{}: {} (not enough text).", name, score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AgePolicy;
    use crate::reporters::tests::{empty_report, test_report};

    #[test]
    fn test_text_lists_counts_and_metrics() {
        let out = render(&test_report(AgePolicy::Round)).expect("render text");
        assert!(out.contains("Words: "));
        assert!(out.contains("Polysyllables: "));
        assert!(out.contains("Automated Readability Index"));
        assert!(out.contains("Coleman–Liau index"));
        assert!(out.contains("-year-olds)."));
        assert!(out.contains("understood in average by"));
    }

    #[test]
    fn test_text_ceiling_policy_uses_ranges() {
        let out = render(&test_report(AgePolicy::Ceiling)).expect("render text");
        assert!(out.contains("This text should be understood by "));
        assert!(out.contains(" year olds."));
    }

    #[test]
    fn test_text_empty_report() {
        let out = render(&empty_report()).expect("render text");
        assert!(out.contains("Words: 0"));
        assert!(out.contains("undefined (not enough text)."));
        assert!(out.contains("Not enough text"));
        assert!(!out.contains("24+"));
    }
}
