//! Score to reader-age mapping

use crate::models::{AgeEstimate, AgePolicy, Metric, ScoreSet};

/// Upper-bound ages for rounded scores 1..=13
const ROUND_AGES: [u32; 13] = [6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 24];
const ROUND_DEFAULT_AGE: u32 = 25;

/// Age ranges for score ceilings 1..=13
const CEILING_RANGES: [&str; 13] = [
    "5-6", "6-7", "7-9", "9-10", "10-11", "11-12", "12-13", "13-14", "14-15", "15-16", "16-17",
    "17-18", "18-24",
];
const CEILING_DEFAULT_RANGE: &str = "24+";

/// Map `index` (1-based) into a 13-entry table
fn bucket<T: Copy>(table: &[T; 13], index: f64) -> Option<T> {
    if (1.0..=13.0).contains(&index) {
        Some(table[index as usize - 1])
    } else {
        None
    }
}

/// Map a score to a reader age under `policy`.
///
/// Non-finite scores map to [`AgeEstimate::Undefined`].
pub fn age_for_score(score: f64, policy: AgePolicy) -> AgeEstimate {
    if !score.is_finite() {
        return AgeEstimate::Undefined;
    }
    match policy {
        AgePolicy::Round => {
            AgeEstimate::Years(bucket(&ROUND_AGES, score.round()).unwrap_or(ROUND_DEFAULT_AGE))
        }
        AgePolicy::Ceiling => AgeEstimate::Range(
            bucket(&CEILING_RANGES, score.ceil())
                .unwrap_or(CEILING_DEFAULT_RANGE)
                .to_string(),
        ),
    }
}

fn age_for(score: Option<f64>, policy: AgePolicy) -> AgeEstimate {
    score.map_or(AgeEstimate::Undefined, |s| age_for_score(s, policy))
}

/// Mean of the round-policy ages of every defined score
pub fn average_age(scores: &ScoreSet) -> Option<f64> {
    let ages: Vec<u32> = Metric::all()
        .iter()
        .filter_map(|m| age_for(scores.get(*m), AgePolicy::Round).years())
        .collect();
    if ages.is_empty() {
        return None;
    }
    Some(ages.iter().map(|&a| a as f64).sum::<f64>() / ages.len() as f64)
}

/// Ages for all four scores under one policy
#[derive(Debug, Clone, PartialEq)]
pub struct AgeSet {
    pub policy: AgePolicy,
    pub ari: AgeEstimate,
    pub flesch_kincaid: AgeEstimate,
    pub smog: AgeEstimate,
    pub coleman_liau: AgeEstimate,
    pub average: Option<f64>,
}

impl AgeSet {
    pub fn new(scores: &ScoreSet, policy: AgePolicy) -> Self {
        Self {
            policy,
            ari: age_for(scores.ari, policy),
            flesch_kincaid: age_for(scores.flesch_kincaid, policy),
            smog: age_for(scores.smog, policy),
            coleman_liau: age_for(scores.coleman_liau, policy),
            average: average_age(scores),
        }
    }

    pub fn get(&self, metric: Metric) -> &AgeEstimate {
        match metric {
            Metric::Ari => &self.ari,
            Metric::FleschKincaid => &self.flesch_kincaid,
            Metric::Smog => &self.smog,
            Metric::ColemanLiau => &self.coleman_liau,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(score: f64) -> AgeEstimate {
        age_for_score(score, AgePolicy::Round)
    }

    fn ceiling(score: f64) -> AgeEstimate {
        age_for_score(score, AgePolicy::Ceiling)
    }

    #[test]
    fn test_round_table() {
        assert_eq!(round(1.0), AgeEstimate::Years(6));
        assert_eq!(round(2.5), AgeEstimate::Years(9));
        assert_eq!(round(7.08), AgeEstimate::Years(13));
        assert_eq!(round(12.49), AgeEstimate::Years(18));
    }

    #[test]
    fn test_round_boundaries() {
        assert_eq!(round(13.0), AgeEstimate::Years(24));
        // 13.01 rounds to 13, so it stays at 24. A "13.01 -> 25" reading
        // contradicts the rounding rule and is intentionally not followed.
        assert_eq!(round(13.01), AgeEstimate::Years(24));
        assert_eq!(round(13.5), AgeEstimate::Years(25));
        assert_eq!(round(0.49), AgeEstimate::Years(25));
        assert_eq!(round(-4.2), AgeEstimate::Years(25));
    }

    #[test]
    fn test_ceiling_table() {
        assert_eq!(ceiling(0.2), AgeEstimate::Range("5-6".into()));
        assert_eq!(ceiling(8.0), AgeEstimate::Range("13-14".into()));
        assert_eq!(ceiling(8.01), AgeEstimate::Range("14-15".into()));
        assert_eq!(ceiling(13.0), AgeEstimate::Range("18-24".into()));
        assert_eq!(ceiling(13.01), AgeEstimate::Range("24+".into()));
        assert_eq!(ceiling(-1.0), AgeEstimate::Range("24+".into()));
    }

    #[test]
    fn test_non_finite_is_undefined() {
        assert_eq!(round(f64::NAN), AgeEstimate::Undefined);
        assert_eq!(ceiling(f64::INFINITY), AgeEstimate::Undefined);
    }

    #[test]
    fn test_average_uses_round_ages() {
        let scores = ScoreSet {
            ari: Some(7.08),           // 13
            flesch_kincaid: Some(6.3), // 12
            smog: Some(9.42),          // 15
            coleman_liau: Some(10.66), // 17
        };
        assert_eq!(average_age(&scores), Some(14.25));

        let ceiling_ages = AgeSet::new(&scores, AgePolicy::Ceiling);
        assert_eq!(ceiling_ages.average, Some(14.25));
        assert_eq!(ceiling_ages.ari, AgeEstimate::Range("13-14".into()));
    }

    #[test]
    fn test_average_skips_undefined_scores() {
        let scores = ScoreSet {
            coleman_liau: Some(1.2),
            ..Default::default()
        };
        assert_eq!(average_age(&scores), Some(6.0));
        assert_eq!(average_age(&ScoreSet::default()), None);

        let ages = AgeSet::new(&ScoreSet::default(), AgePolicy::Round);
        assert_eq!(ages.get(Metric::Smog), &AgeEstimate::Undefined);
    }
}
