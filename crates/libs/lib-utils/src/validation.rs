//! # Validation Utilities
//!
//! Shape predicates for registration fields. They answer "does this string look
//! right" and leave messages to the caller.

/// Minimum number of digit/dash/parenthesis characters in a phone number.
pub const PHONE_MIN_LEN: usize = 10;

/// Whitespace as matched by the `\s` class of browser regular expressions.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// True when the value is empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Remove every whitespace character.
pub fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|&c| !is_form_whitespace(c)).collect()
}

/// Check the `local@domain.tld` shape.
///
/// Accepts exactly the strings matched by `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one `@`,
/// no whitespace, a non-empty local part and a domain containing a dot with at
/// least one character on each side of some dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(is_form_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Any dot with text on both sides satisfies the pattern.
    domain
        .char_indices()
        .filter(|&(_, c)| c == '.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Check a phone number after whitespace has been stripped.
///
/// Only digits, `-`, `(` and `)` are allowed, and there must be at least
/// [`PHONE_MIN_LEN`] of them.
pub fn is_valid_phone(phone: &str) -> bool {
    let compact = strip_whitespace(phone);

    compact.chars().count() >= PHONE_MIN_LEN
        && compact
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '(' | ')'))
}
