//! Prefix matching for inline completion.

/// True when `candidate` starts with `prefix`, comparing per character and
/// case-folding both sides unless `case_sensitive`.
pub fn has_prefix(candidate: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return candidate.starts_with(prefix);
    }
    let mut cand = candidate.chars();
    for p in prefix.chars() {
        let Some(c) = cand.next() else {
            return false;
        };
        if !c.to_lowercase().eq(p.to_lowercase()) {
            return false;
        }
    }
    true
}

/// First candidate, in scan order, that `word` is a prefix of.
pub fn first_completion<'a>(
    word: &str,
    candidates: &'a [String],
    case_sensitive: bool,
) -> Option<&'a str> {
    candidates
        .iter()
        .find(|c| has_prefix(c, word, case_sensitive))
        .map(String::as_str)
}
