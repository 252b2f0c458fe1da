//! Readability scoring and reader-age mapping
//!
//! Four formulas turn aggregate counts into U.S. grade-level scores, and
//! each score maps to an estimated reader age.
//!
//! # Formulas
//!
//! ```text
//! ARI  = 4.71 × chars/words + 0.5 × words/sentences − 21.43
//! FK   = 0.39 × words/sentences + 11.8 × syllables/words − 15.59
//! SMOG = 1.043 × √(polysyllables × 30 / sentences) + 3.1291
//! CL   = 0.0588 × L − 0.296 × S − 15.8
//!
//! Where:
//!   L = 100 × chars / words       (letters per 100 words)
//!   S = 100 × sentences / words   (sentences per 100 words)
//! ```
//!
//! A formula whose denominator is zero yields `None` rather than a
//! non-finite number.
//!
//! # Age policies
//!
//! - **Round** (default): round the score, map 1..=13 to an upper-bound age
//!   (6, 7, 9, 10, ... 18, 24); everything else is 25.
//! - **Ceiling**: take the ceiling, map 1..=13 to a range ("5-6" ... "18-24");
//!   everything else is "24+".
//!
//! Average ages always use the round policy's numeric ages.

mod age;
mod formulas;

pub use age::{age_for_score, average_age, AgeSet};
pub use formulas::{ari, coleman_liau, flesch_kincaid, smog};

use crate::models::{ScoreSet, TokenCounts};

impl ScoreSet {
    /// Apply all four formulas to `counts`
    pub fn from_counts(counts: &TokenCounts) -> Self {
        Self {
            ari: ari(counts.characters, counts.words, counts.sentences),
            flesch_kincaid: flesch_kincaid(counts.words, counts.syllables, counts.sentences),
            smog: smog(counts.polysyllables, counts.sentences),
            coleman_liau: coleman_liau(counts.characters, counts.words, counts.sentences),
        }
    }
}
