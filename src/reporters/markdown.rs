//! Markdown reporter for GitHub-flavored Markdown output
//!
//! Generates reports suitable for:
//! - Pull request comments on documentation changes
//! - README badges and wikis

use super::format_score;
use crate::models::{AgeEstimate, Difficulty, Report};
use anyhow::Result;
use chrono::Local;

/// Render report as GitHub-flavored Markdown
pub fn render(report: &Report) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(report));
    md.push('\n');

    md.push_str(&render_counts(report));
    md.push('\n');

    md.push_str(&render_scores(report));
    md.push('\n');

    md.push_str(&render_footer());

    Ok(md)
}

fn render_header(report: &Report) -> String {
    let difficulty = match report.difficulty {
        Some(Difficulty::Easy) => "🟢 EASY",
        Some(Difficulty::Hard) => "🔴 HARD",
        None => "❓ undefined",
    };

    let average = match report.average_age {
        Some(avg) => format!(" | **Average age: {:.2}**", avg),
        None => String::new(),
    };

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

    format!(
        r#"# 📖 Readability Report

**Difficulty: {}**{}

Generated: {}
"#,
        difficulty, average, timestamp
    )
}

fn render_counts(report: &Report) -> String {
    let c = &report.counts;

    format!(
        r#"## Text Statistics

| Count | Value |
|-------|-------|
| Sentences | {} |
| Words | {} |
| Characters | {} |
| Syllables | {} |
| Polysyllables | {} |
"#,
        c.sentences, c.words, c.characters, c.syllables, c.polysyllables
    )
}

fn render_scores(report: &Report) -> String {
    let mut md = format!(
        "## Scores\n\nAge policy: `{}`\n\n| Metric | Score | Reader Age |\n|--------|-------|------------|\n",
        report.policy
    );

    for result in &report.results {
        md.push_str(&format!(
            "| {} ({}) | {} | {} |\n",
            result.metric.name(),
            result.metric.code(),
            format_score(result.score),
            age_cell(&result.age)
        ));
    }

    md
}

fn age_cell(age: &AgeEstimate) -> String {
    match age {
        AgeEstimate::Years(years) => format!("about {}", years),
        AgeEstimate::Range(range) => format!("{} years", range),
        AgeEstimate::Undefined => "undefined".to_string(),
    }
}

fn render_footer() -> String {
    r#"---

*Generated by readability - ARI, Flesch–Kincaid, SMOG and Coleman–Liau scoring*
"#
    .to_string()
}
