//! Core data models for readability analysis
//!
//! These models carry the counts, scores and age estimates produced by the
//! engine and consumed by the reporters.

use crate::error::ReadabilityError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aggregate counts for one text.
///
/// `polysyllables <= words <= syllables` always holds: every word has at
/// least one syllable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    pub sentences: usize,
    pub words: usize,
    pub characters: usize,
    pub syllables: usize,
    pub polysyllables: usize,
}

/// The four readability scores. `None` means the score is undefined
/// because a denominator (words or sentences) was zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub ari: Option<f64>,
    pub flesch_kincaid: Option<f64>,
    pub smog: Option<f64>,
    pub coleman_liau: Option<f64>,
}

impl ScoreSet {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Ari => self.ari,
            Metric::FleschKincaid => self.flesch_kincaid,
            Metric::Smog => self.smog,
            Metric::ColemanLiau => self.coleman_liau,
        }
    }
}

/// Readability metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "ARI")]
    Ari,
    #[serde(rename = "FK")]
    FleschKincaid,
    #[serde(rename = "SMOG")]
    Smog,
    #[serde(rename = "CL")]
    ColemanLiau,
}

impl Metric {
    /// All metrics in report order
    pub const fn all() -> &'static [Metric] {
        &[
            Metric::Ari,
            Metric::FleschKincaid,
            Metric::Smog,
            Metric::ColemanLiau,
        ]
    }

    /// Short selection code (ARI, FK, SMOG, CL)
    pub fn code(&self) -> &'static str {
        match self {
            Metric::Ari => "ARI",
            Metric::FleschKincaid => "FK",
            Metric::Smog => "SMOG",
            Metric::ColemanLiau => "CL",
        }
    }

    /// Human-readable metric name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Ari => "Automated Readability Index",
            Metric::FleschKincaid => "Flesch–Kincaid readability tests",
            Metric::Smog => "Simple Measure of Gobbledygook",
            Metric::ColemanLiau => "Coleman–Liau index",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Metric {
    type Err = ReadabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ARI" => Ok(Metric::Ari),
            "FK" => Ok(Metric::FleschKincaid),
            "SMOG" => Ok(Metric::Smog),
            "CL" => Ok(Metric::ColemanLiau),
            _ => Err(ReadabilityError::UnknownMetric(s.to_string())),
        }
    }
}

/// Which metrics a report should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Single(Metric),
    All,
}

impl Selection {
    pub fn metrics(&self) -> &[Metric] {
        match self {
            Selection::Single(metric) => std::slice::from_ref(metric),
            Selection::All => Metric::all(),
        }
    }
}

impl FromStr for Selection {
    type Err = ReadabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::Single)
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Single(metric) => write!(f, "{}", metric),
            Selection::All => write!(f, "all"),
        }
    }
}

/// How a score is turned into a reader age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgePolicy {
    /// Round to the nearest integer, map to an upper-bound age
    #[default]
    #[serde(alias = "round-bucket")]
    Round,
    /// Take the ceiling, map to an age range such as "13-14"
    #[serde(alias = "ceiling-range")]
    Ceiling,
}

impl FromStr for AgePolicy {
    type Err = ReadabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "round" | "round-bucket" => Ok(AgePolicy::Round),
            "ceiling" | "ceiling-range" => Ok(AgePolicy::Ceiling),
            _ => Err(ReadabilityError::UnknownPolicy(s.to_string())),
        }
    }
}

impl std::fmt::Display for AgePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgePolicy::Round => write!(f, "round"),
            AgePolicy::Ceiling => write!(f, "ceiling"),
        }
    }
}

/// Estimated reader age for one score.
///
/// Serializes as a number (round policy), a string (ceiling policy) or
/// `null` when the score is undefined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AgeEstimate {
    Years(u32),
    Range(String),
    Undefined,
}

impl AgeEstimate {
    /// Numeric age, only available under the round policy
    pub fn years(&self) -> Option<u32> {
        match self {
            AgeEstimate::Years(years) => Some(*years),
            _ => None,
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, AgeEstimate::Undefined)
    }
}

impl std::fmt::Display for AgeEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeEstimate::Years(years) => write!(f, "{}", years),
            AgeEstimate::Range(range) => write!(f, "{}", range),
            AgeEstimate::Undefined => write!(f, "undefined"),
        }
    }
}

/// Coarse difficulty verdict from average sentence length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    /// Words per sentence used as the HARD cutoff (integer division)
    pub const HARD_WORDS_PER_SENTENCE: usize = 10;

    /// `None` when the text has no sentences
    pub fn from_counts(counts: &TokenCounts) -> Option<Self> {
        let per_sentence = counts.words.checked_div(counts.sentences)?;
        if per_sentence > Self::HARD_WORDS_PER_SENTENCE {
            Some(Difficulty::Hard)
        } else {
            Some(Difficulty::Easy)
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "EASY"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

/// A single metric's score and the age it maps to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricResult {
    pub metric: Metric,
    pub score: Option<f64>,
    pub age: AgeEstimate,
}

/// Readability report for one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub counts: TokenCounts,
    pub difficulty: Option<Difficulty>,
    pub policy: AgePolicy,
    pub results: Vec<MetricResult>,
    /// Mean of the numeric ages, only set for the `all` selection
    pub average_age: Option<f64>,
}

impl Report {
    pub fn result(&self, metric: Metric) -> Option<&MetricResult> {
        self.results.iter().find(|r| r.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parsing() {
        assert_eq!("ARI".parse::<Metric>().unwrap(), Metric::Ari);
        assert_eq!("fk".parse::<Metric>().unwrap(), Metric::FleschKincaid);
        assert_eq!(" SMOG ".parse::<Metric>().unwrap(), Metric::Smog);
        assert_eq!("CL".parse::<Metric>().unwrap(), Metric::ColemanLiau);
        assert_eq!(
            "XYZ".parse::<Metric>(),
            Err(ReadabilityError::UnknownMetric("XYZ".into()))
        );
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!("ALL".parse::<Selection>().unwrap(), Selection::All);
        assert_eq!(
            "CL".parse::<Selection>().unwrap(),
            Selection::Single(Metric::ColemanLiau)
        );
        assert!("".parse::<Selection>().is_err());
        assert_eq!(Selection::All.metrics().len(), 4);
        assert_eq!(Selection::Single(Metric::Smog).metrics(), &[Metric::Smog]);
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("round".parse::<AgePolicy>().unwrap(), AgePolicy::Round);
        assert_eq!(
            "Ceiling-Range".parse::<AgePolicy>().unwrap(),
            AgePolicy::Ceiling
        );
        assert!("floor".parse::<AgePolicy>().is_err());
    }

    #[test]
    fn test_difficulty_uses_integer_division() {
        let counts = |words, sentences| TokenCounts {
            words,
            sentences,
            ..Default::default()
        };
        assert_eq!(Difficulty::from_counts(&counts(21, 2)), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_counts(&counts(22, 2)), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_counts(&counts(5, 0)), None);
    }

    #[test]
    fn test_age_estimate_serialization() {
        assert_eq!(serde_json::to_string(&AgeEstimate::Years(14)).unwrap(), "14");
        assert_eq!(
            serde_json::to_string(&AgeEstimate::Range("13-14".into())).unwrap(),
            "\"13-14\""
        );
        assert_eq!(serde_json::to_string(&AgeEstimate::Undefined).unwrap(), "null");
    }
}
