//! Header field-name tokens.
//!
//! A field name is valid when it is a non-empty sequence of `tchar`:
//!
//! ```text
//! tchar = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
//!         "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
//! ```
//!
//! Everything else is rejected: the separators `()<>@,;:\"/[]?={}`, space and
//! horizontal tab, control characters and any non-ASCII byte.

use crate::VaryError;
use crate::utils::ensure;

/// The `Vary` value meaning "varies on unspecified request characteristics".
pub const WILDCARD: &str = "*";

const TCHAR: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        #[allow(clippy::cast_possible_truncation, reason = "i never exceeds u8::MAX")]
        let b = i as u8;
        table[i] = matches!(
            b,
            b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
        ) || b.is_ascii_alphanumeric();
        i += 1;
    }
    table
};

/// Returns `true` if `b` may appear in a field name.
#[inline]
#[must_use]
pub const fn is_tchar(b: u8) -> bool {
    TCHAR[b as usize]
}

/// Returns `true` if `field` is a well-formed field-name token.
#[must_use]
pub fn is_field_name(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(is_tchar)
}

/// Validates a single field-name token.
///
/// `name` is the argument name reported in the error.
///
/// # Errors
///
/// Returns [`VaryError::InvalidFieldName`] if `field` is empty or contains a byte
/// outside the token grammar.
pub fn validate<'a>(name: &'static str, field: &'a str) -> Result<&'a str, VaryError> {
    ensure!(is_field_name(field), VaryError::invalid_field_name(name, field));
    Ok(field)
}

/// Splits a comma-separated field list, stripping spaces and tabs around each item.
///
/// Empty items are kept, so `"a,,b"` yields `["a", "", "b"]`.
pub fn parse_field_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(|item| item.trim_matches([' ', '\t']))
}
