//! Readability pipeline
//!
//! Runs the full analysis for one text:
//! 1. Tokenize into sentences, words and characters
//! 2. Estimate syllables per word, count polysyllables
//! 3. Apply the four scoring formulas
//! 4. Map scores to ages and assemble a report for the selected metrics
//!
//! Every step is a pure function of its inputs; nothing is shared between
//! calls.

use tracing::debug;

use crate::error::{ReadabilityError, ReadabilityResult};
use crate::models::{
    AgePolicy, Difficulty, MetricResult, Report, ScoreSet, Selection, TokenCounts,
};
use crate::scoring::AgeSet;
use crate::text::{self, is_polysyllabic, syllable_count};

/// Counts and scores for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub counts: TokenCounts,
    pub scores: ScoreSet,
}

impl Analysis {
    /// Analyze `text`. Always succeeds; scores may be undefined.
    pub fn from_text(text: &str) -> Self {
        let tokens = text::tokenize(text);

        let mut syllables = 0;
        let mut polysyllables = 0;
        for word in &tokens.word_list {
            syllables += syllable_count(word);
            if is_polysyllabic(word) {
                polysyllables += 1;
            }
        }

        let counts = TokenCounts {
            sentences: tokens.sentences,
            words: tokens.words,
            characters: tokens.characters,
            syllables,
            polysyllables,
        };
        let scores = ScoreSet::from_counts(&counts);
        debug!(
            "Analyzed {} sentences, {} words, {} characters",
            counts.sentences, counts.words, counts.characters
        );

        Self { counts, scores }
    }

    /// Analyze raw bytes, rejecting input that is not UTF-8
    pub fn from_bytes(bytes: &[u8]) -> ReadabilityResult<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_text(text))
    }

    /// Build a report for `selection` ("ARI", "FK", "SMOG", "CL" or "all")
    pub fn report(&self, selection: &str, policy: AgePolicy) -> ReadabilityResult<Report> {
        let ages = AgeSet::new(&self.scores, policy);
        assemble_report(&self.counts, &self.scores, &ages, selection)
    }
}

/// Tokenize and score `text`
pub fn compute_readability(text: &str) -> Analysis {
    Analysis::from_text(text)
}

/// Package counts, scores and ages for the selected metrics.
///
/// Unknown selections return [`ReadabilityError::UnknownMetric`]; the
/// inputs are only borrowed and stay usable.
pub fn assemble_report(
    counts: &TokenCounts,
    scores: &ScoreSet,
    ages: &AgeSet,
    selection: &str,
) -> ReadabilityResult<Report> {
    let selection: Selection = selection.parse().inspect_err(|e: &ReadabilityError| {
        debug!("Rejected selection: {}", e);
    })?;

    let results = selection
        .metrics()
        .iter()
        .map(|&metric| MetricResult {
            metric,
            score: scores.get(metric),
            age: ages.get(metric).clone(),
        })
        .collect();

    let average_age = match selection {
        Selection::All => ages.average,
        Selection::Single(_) => None,
    };

    Ok(Report {
        counts: *counts,
        difficulty: Difficulty::from_counts(counts),
        policy: ages.policy,
        results,
        average_age,
    })
}
