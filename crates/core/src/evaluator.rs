//! Free-text answer checking.

/// Compare a submitted answer to the expected one.
///
/// Both sides are trimmed and compared without regard to letter case. There is
/// no partial credit: `"Cats"` is not `"cat"`.
#[must_use]
pub fn is_correct(submitted: &str, expected: &str) -> bool {
    let submitted = submitted.trim();
    let expected = expected.trim();

    if submitted.is_empty() {
        return expected.is_empty();
    }

    submitted == expected || submitted.to_lowercase() == expected.to_lowercase()
}
