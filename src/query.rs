//! Query compilation: bare consonants in, vowel/trope tolerant matcher out

use crate::error::SearchError;
use regex::Regex;

/// Vowel points and cantillation marks that may sit between two typed letters.
pub const VOWELS_AND_TROPE: &str =
    r"\x{0591}-\x{05BD}\x{05BF}\x{05C1}\x{05C2}\x{05C4}\x{05C5}\x{05C7}";

/// Letters that double as vowels (he, vav, yod) and are skipped like marks.
pub const SEMI_VOWEL_LETTERS: &str = "הוי";

/// Medial and final forms of mem, nun, pe and tsade.
pub const FINAL_LETTERS: [(char, char); 4] = [
    ('מ', 'ם'),
    ('נ', 'ן'),
    ('פ', 'ף'),
    ('צ', 'ץ'),
];

/// Zero or more marks or semi-vowel letters, inserted between typed letters only.
pub fn infix() -> String {
    format!("[{}{}]*", VOWELS_AND_TROPE, SEMI_VOWEL_LETTERS)
}

/// Map each typed character to its pattern fragment. Letters with a final
/// form become a class accepting either form; everything else passes through.
pub fn expand_final_letters(chars: &[char]) -> Vec<String> {
    chars
        .iter()
        .map(|&c| {
            FINAL_LETTERS
                .iter()
                .find(|(medial, fin)| c == *medial || c == *fin)
                .map(|(medial, fin)| format!("[{}{}]", medial, fin))
                .unwrap_or_else(|| c.to_string())
        })
        .collect()
}

/// Join fragments with the infix. Nothing is added before the first or after the last.
pub fn join_with_infix(fragments: &[String]) -> String {
    fragments.join(&infix())
}

/// Full pattern source for a search string.
pub fn pattern_for(query: &str) -> String {
    let chars: Vec<char> = query.chars().collect();
    join_with_infix(&expand_final_letters(&chars))
}

/// Compile a search string into a reusable matcher.
///
/// Typed characters are not escaped, so input that is not a valid pattern
/// (an unbalanced parenthesis, say) surfaces as [`SearchError::InvalidQuery`].
pub fn compile_query(query: &str) -> Result<Regex, SearchError> {
    let pattern = pattern_for(query);
    tracing::debug!(query, pattern = %pattern, "compiling query");
    Ok(Regex::new(&pattern)?)
}
