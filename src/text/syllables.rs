//! Heuristic syllable estimation
//!
//! Counts groups of consecutive vowels (`a e i o u y`) in a lowercase word.
//! A trailing `e` is treated as silent and skipped. Every word has at least
//! one syllable. This misjudges irregular spellings; no dictionary is used.

/// Words with more syllables than this are polysyllabic
pub const POLYSYLLABLE_THRESHOLD: usize = 2;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the syllables in `word` (expected lowercase). Never returns 0.
pub fn syllable_count(word: &str) -> usize {
    let scanned = word.strip_suffix('e').unwrap_or(word);

    let mut count = 0;
    let mut in_vowel_run = false;
    for c in scanned.chars() {
        if is_vowel(c) {
            if !in_vowel_run {
                count += 1;
                in_vowel_run = true;
            }
        } else {
            in_vowel_run = false;
        }
    }

    count.max(1)
}

/// True when `word` has more than [`POLYSYLLABLE_THRESHOLD`] syllables
pub fn is_polysyllabic(word: &str) -> bool {
    syllable_count(word) > POLYSYLLABLE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_e_is_skipped() {
        assert_eq!(syllable_count("cake"), 1);
        assert_eq!(syllable_count("the"), 1);
        assert_eq!(syllable_count("be"), 1);
    }

    #[test]
    fn test_consecutive_vowels_form_one_group() {
        assert_eq!(syllable_count("read"), 1);
        assert_eq!(syllable_count("queue"), 1);
        assert_eq!(syllable_count("beautiful"), 3);
    }

    #[test]
    fn test_y_is_a_vowel() {
        // r-ea-d-a-b-i-l-i-t-y: ea, a, i, i, y
        assert_eq!(syllable_count("readability"), 5);
        assert_eq!(syllable_count("rhythm"), 1);
    }

    #[test]
    fn test_floor_of_one() {
        assert_eq!(syllable_count("brr"), 1);
        assert_eq!(syllable_count("e"), 1);
        assert_eq!(syllable_count("2024"), 1);
        assert_eq!(syllable_count(""), 1);
    }

    #[test]
    fn test_polysyllabic() {
        assert!(!is_polysyllabic("cat"));
        assert!(!is_polysyllabic("water"));
        assert!(is_polysyllabic("encyclopedia"));
        assert!(is_polysyllabic("wikipedia"));
    }
}
