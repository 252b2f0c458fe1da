//! Readability - text readability metrics
//!
//! Computes the Automated Readability Index, Flesch–Kincaid, SMOG and
//! Coleman–Liau scores for a text and maps each score to an estimated
//! reader age.
//!
//! ```
//! use readability::models::AgePolicy;
//! use readability::pipeline::compute_readability;
//!
//! let analysis = compute_readability("The cat sat on the mat. It was happy.");
//! assert_eq!(analysis.counts.sentences, 2);
//!
//! let report = analysis.report("all", AgePolicy::Round).unwrap();
//! assert_eq!(report.results.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reporters;
pub mod scoring;
pub mod text;

pub use error::{ReadabilityError, ReadabilityResult};
pub use models::{AgeEstimate, AgePolicy, Metric, Report, ScoreSet, Selection, TokenCounts};
pub use pipeline::{assemble_report, compute_readability, Analysis};
pub use scoring::{age_for_score, AgeSet};
