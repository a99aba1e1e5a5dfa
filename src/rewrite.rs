//! Replacement line generation.

/// Accessor appended after a key reference to mark it as a runtime
/// localization lookup (`'auth.login'.tr()`).
pub const ACCESSOR_SUFFIX: &str = ".tr()";

/// Rewrite `line`, substituting the first quoted occurrence of `literal`
/// with the quoted `key` followed by [`ACCESSOR_SUFFIX`].
///
/// The quote character of the original literal is preserved: if the line
/// contains the literal in single quotes, the key is single-quoted,
/// otherwise double-quoted. Only the first occurrence is substituted; a
/// second verbatim occurrence of the same literal on the line is left
/// untouched.
pub fn generate_replacement(line: &str, literal: &str, key: &str) -> String {
    let quote = if line.contains(&format!("'{}'", literal)) {
        '\''
    } else {
        '"'
    };
    let needle = format!("{}{}{}", quote, literal, quote);
    let replacement = format!("{}{}{}{}", quote, key, quote, ACCESSOR_SUFFIX);
    line.replacen(&needle, &replacement, 1)
}
