//! Analyze command - score text files and render reports

use anyhow::{Context, Result};
use console::style;
use readability::config::CliDefaults;
use readability::models::{AgePolicy, Report};
use readability::reporters::{self, OutputFormat};
use readability::{age_for_score, Analysis, ReadabilityError};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Effective analyze settings after merging CLI flags over config defaults
#[derive(Debug, Clone)]
pub(super) struct AnalyzeOptions {
    pub metric: String,
    pub policy: AgePolicy,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub show_text: bool,
    pub fail_above_age: Option<f64>,
    pub no_emoji: bool,
}

impl AnalyzeOptions {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn resolve(
        metric: Option<String>,
        policy: Option<String>,
        format: Option<String>,
        output: Option<PathBuf>,
        show_text: bool,
        fail_above_age: Option<f64>,
        no_emoji: bool,
        defaults: &CliDefaults,
    ) -> Result<Self> {
        let policy = match policy {
            Some(p) => p.parse()?,
            None => defaults.policy.unwrap_or_default(),
        };
        let format = format
            .or_else(|| defaults.format.clone())
            .unwrap_or_else(|| "text".to_string())
            .parse()?;

        Ok(Self {
            metric: metric
                .or_else(|| defaults.metric.clone())
                .unwrap_or_else(|| "all".to_string()),
            policy,
            format,
            output,
            show_text,
            fail_above_age: fail_above_age.or(defaults.fail_above_age),
            no_emoji: no_emoji || defaults.no_emoji.unwrap_or(false),
        })
    }
}

#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    report: &'a Report,
}

/// Run the analyze command
pub(super) fn run(files: &[PathBuf], options: &AnalyzeOptions) -> Result<()> {
    let mut reports = Vec::with_capacity(files.len());

    for path in files {
        let bytes = read_input(path)?;
        let analysis = Analysis::from_bytes(&bytes)
            .with_context(|| format!("Failed to read text from {}", display_name(path)))?;
        info!("Scored {}", display_name(path));

        if options.show_text {
            echo_text(&bytes, options.format);
        }

        let report = match analysis.report(&options.metric, options.policy) {
            Ok(report) => report,
            Err(e @ ReadabilityError::UnknownMetric(_)) => {
                let c = &analysis.counts;
                eprintln!(
                    "{}: Words: {}  Sentences: {}  Characters: {}  Syllables: {}  Polysyllables: {}",
                    display_name(path),
                    c.words,
                    c.sentences,
                    c.characters,
                    c.syllables,
                    c.polysyllables
                );
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };
        reports.push((path, report));
    }

    let rendered = render_all(&reports, options.format)?;
    write_output(&rendered, options)?;

    check_fail_threshold(options.fail_above_age, &reports);
    Ok(())
}

/// Read a file, or stdin for `-`
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("Invalid filepath: {}", path.display()))
}

/// Echo the input; JSON keeps stdout parseable by echoing to stderr
fn echo_text(bytes: &[u8], format: OutputFormat) {
    let text = String::from_utf8_lossy(bytes);
    match format {
        OutputFormat::Json => eprintln!("The text is:\n{}\n", text),
        _ => println!("The text is:\n{}\n", text),
    }
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Render every report; several files get per-file sections (or a JSON array)
fn render_all(reports: &[(&PathBuf, Report)], format: OutputFormat) -> Result<String> {
    if let [(_, report)] = reports {
        return reporters::report_with_format(report, format);
    }

    if format == OutputFormat::Json {
        let entries: Vec<FileReport> = reports
            .iter()
            .map(|(path, report)| FileReport {
                file: display_name(path),
                report,
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }

    let mut out = String::new();
    for (path, report) in reports {
        let heading = match format {
            OutputFormat::Markdown => format!("<!-- {} -->\n", display_name(path)),
            _ => format!("==> {} <==\n", display_name(path)),
        };
        out.push_str(&heading);
        out.push_str(&reporters::report_with_format(report, format)?);
        out.push('\n');
    }
    Ok(out)
}

fn write_output(rendered: &str, options: &AnalyzeOptions) -> Result<()> {
    let Some(path) = &options.output else {
        print!("{}", rendered);
        if !rendered.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    let path = report_path(path, options.format);
    std::fs::write(&path, rendered)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    debug!("Wrote {} bytes to {}", rendered.len(), path.display());

    let prefix = if options.no_emoji { "" } else { "📄 " };
    eprintln!(
        "{}Report written to {}",
        prefix,
        style(path.display()).cyan()
    );
    Ok(())
}

/// A directory as `--output` gets `readability-report.<ext>` inside it
fn report_path(output: &Path, format: OutputFormat) -> PathBuf {
    if output.is_dir() {
        output.join(format!(
            "readability-report.{}",
            reporters::file_extension(format)
        ))
    } else {
        output.to_path_buf()
    }
}

/// Age used for the CI threshold: the average, or the single metric's round age
fn reader_age(report: &Report) -> Option<f64> {
    report.average_age.or_else(|| {
        let score = report.results.first()?.score?;
        age_for_score(score, AgePolicy::Round)
            .years()
            .map(f64::from)
    })
}

/// Exit with code 1 if any report exceeds the age threshold
fn check_fail_threshold(threshold: Option<f64>, reports: &[(&PathBuf, Report)]) {
    let Some(threshold) = threshold else {
        return;
    };
    let too_hard: Vec<String> = reports
        .iter()
        .filter(|(_, report)| reader_age(report).is_some_and(|age| age > threshold))
        .map(|(path, _)| display_name(path))
        .collect();
    if !too_hard.is_empty() {
        eprintln!(
            "Failing due to --fail-above-age={} threshold: {}",
            threshold,
            too_hard.join(", ")
        );
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readability::pipeline::compute_readability;

    fn defaults() -> CliDefaults {
        CliDefaults::default()
    }

    #[test]
    fn test_resolve_uses_builtin_defaults() {
        let options =
            AnalyzeOptions::resolve(None, None, None, None, false, None, false, &defaults())
                .unwrap();
        assert_eq!(options.metric, "all");
        assert_eq!(options.policy, AgePolicy::Round);
        assert_eq!(options.format, OutputFormat::Text);
        assert!(!options.no_emoji);
    }

    #[test]
    fn test_cli_flags_override_config() {
        let config = CliDefaults {
            metric: Some("SMOG".into()),
            policy: Some(AgePolicy::Ceiling),
            format: Some("json".into()),
            no_emoji: Some(true),
            fail_above_age: Some(12.0),
        };
        let options = AnalyzeOptions::resolve(
            Some("ARI".into()),
            Some("round".into()),
            None,
            None,
            false,
            None,
            false,
            &config,
        )
        .unwrap();
        assert_eq!(options.metric, "ARI");
        assert_eq!(options.policy, AgePolicy::Round);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(options.no_emoji);
        assert_eq!(options.fail_above_age, Some(12.0));
    }

    #[test]
    fn test_report_path_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            report_path(dir.path(), OutputFormat::Markdown),
            dir.path().join("readability-report.md")
        );

        let file = dir.path().join("out.json");
        assert_eq!(report_path(&file, OutputFormat::Text), file);
    }

    #[test]
    fn test_reader_age_for_single_metric() {
        let analysis = compute_readability("The cat sat.");
        let report = analysis.report("FK", AgePolicy::Ceiling).unwrap();
        assert!(report.average_age.is_none());
        assert!(reader_age(&report).is_some());

        let empty = compute_readability("").report("ARI", AgePolicy::Round).unwrap();
        assert_eq!(reader_age(&empty), None);
    }
}
