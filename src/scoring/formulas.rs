//! Readability formulas over aggregate counts

/// `numerator / denominator` as floats, `None` for a zero denominator
fn ratio(numerator: usize, denominator: usize) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

/// Automated Readability Index
pub fn ari(chars: usize, words: usize, sents: usize) -> Option<f64> {
    let chars_per_word = ratio(chars, words)?;
    let words_per_sentence = ratio(words, sents)?;
    Some(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43)
}

/// Flesch–Kincaid grade level
pub fn flesch_kincaid(words: usize, syllables: usize, sents: usize) -> Option<f64> {
    let words_per_sentence = ratio(words, sents)?;
    let syllables_per_word = ratio(syllables, words)?;
    Some(0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59)
}

/// Simple Measure of Gobbledygook
pub fn smog(polysyllables: usize, sents: usize) -> Option<f64> {
    let density = ratio(polysyllables * 30, sents)?;
    Some(1.043 * density.sqrt() + 3.1291)
}

/// Coleman–Liau index
pub fn coleman_liau(chars: usize, words: usize, sents: usize) -> Option<f64> {
    let letters_per_100 = 100.0 * ratio(chars, words)?;
    let sentences_per_100 = 100.0 * ratio(sents, words)?;
    Some(0.0588 * letters_per_100 - 0.296 * sentences_per_100 - 15.8)
}
