//! Masking of a target word inside an example sentence.

use regex::{NoExpand, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClozeError {
    #[error("cannot mask an empty word")]
    EmptyWord,
    #[error("word cannot be turned into a search pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Replace every case-insensitive occurrence of `word` in `sentence` with
/// `placeholder`.
///
/// The word is matched as a literal substring, not a pattern, and matches do
/// not respect word boundaries: masking `"cat"` in `"category"` yields
/// `"______egory"`. The placeholder is inserted verbatim; `$` has no special
/// meaning in it.
///
/// # Errors
///
/// Returns `ClozeError::EmptyWord` for a blank word, or
/// `ClozeError::Pattern` if the escaped word exceeds the matcher's size limits.
pub fn mask_word(sentence: &str, word: &str, placeholder: &str) -> Result<String, ClozeError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ClozeError::EmptyWord);
    }

    let pattern = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()?;

    Ok(pattern.replace_all(sentence.trim(), NoExpand(placeholder)).into_owned())
}
