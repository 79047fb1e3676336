//! Identifier helpers for working with source code.

/// Check if a character may start an identifier.
///
/// Uses Unicode Standard Annex #31 rules plus `_`, as Go does.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// Check if a character is considered part of an identifier.
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Check that `name` is lexically an identifier (keywords are not rejected
/// here; see [`crate::parser::keywords`]).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => chars.all(is_word_character),
        _ => false,
    }
}

/// An identifier is exported when it starts with an uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Lowercase the first character, leaving the rest intact.
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp1"));
        assert!(is_identifier("größe"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_exported() {
        assert!(is_exported("Reader"));
        assert!(!is_exported("reader"));
        assert!(!is_exported("_Reader"));
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("FileWriter"), "fileWriter");
        assert_eq!(lower_first(""), "");
    }
}
