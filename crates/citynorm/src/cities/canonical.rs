/// Deterministic text canonicalization applied to every lookup key, whether
/// it comes from the compiled-in table or from a caller's query.
///
/// Lowercases (full Unicode, the table carries accented aliases), trims
/// surrounding whitespace, and unifies every hyphen to a single space.
/// Interior whitespace is left untouched: collapsing runs of spaces would be
/// a behavior change for keys that are already canonical, so it is not done.
pub fn canonicalize(raw: &str) -> String {
    raw.to_lowercase().trim().replace('-', " ")
}
