//! Merging field names into an existing `Vary` header value.

use std::collections::HashSet;

use tracing::trace;

use crate::VaryError;
use crate::field::{WILDCARD, parse_field_list, validate};
use crate::utils::ensure;

const SEPARATOR: &str = ", ";

/// The field names to add to a `Vary` header.
///
/// A single string is treated as a comma-separated list, while a sequence holds
/// exactly one field name per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fields<'a> {
    /// A comma-separated list, e.g. `"Accept, Accept-Encoding"`.
    List(&'a str),
    /// One field name per element, elements are not split further.
    Names(Vec<&'a str>),
}

impl<'a> Fields<'a> {
    /// Normalizes into validated field names, in the given order.
    fn into_names(self) -> Result<Vec<&'a str>, VaryError> {
        let names: Vec<&'a str> = match self {
            Fields::List(list) => {
                ensure!(!list.is_empty(), VaryError::required("field"));
                parse_field_list(list).collect()
            }
            Fields::Names(names) => names,
        };

        for name in &names {
            validate("field", name)?;
        }
        Ok(names)
    }
}

impl<'a> From<&'a str> for Fields<'a> {
    fn from(list: &'a str) -> Self {
        Fields::List(list)
    }
}

impl<'a> From<&'a String> for Fields<'a> {
    fn from(list: &'a String) -> Self {
        Fields::List(list.as_str())
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for Fields<'a> {
    fn from(names: &'a [S]) -> Self {
        Fields::Names(names.iter().map(AsRef::as_ref).collect())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for Fields<'a> {
    fn from(names: &'a Vec<S>) -> Self {
        Self::from(names.as_slice())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for Fields<'a> {
    fn from(names: &'a [S; N]) -> Self {
        Self::from(names.as_slice())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Fields<'a> {
    fn from(names: [&'a str; N]) -> Self {
        Fields::Names(names.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for Fields<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        Fields::Names(names)
    }
}

/// Appends `fields` to the `Vary` header value `header`, returning the new value.
///
/// Existing tokens keep their order and casing. New tokens are added in the given
/// order unless already present, compared case-insensitively. A `*` on either side
/// replaces the whole result with `*`.
///
/// ```
/// use micro_vary::append;
///
/// assert_eq!(append("Accept", "Origin").unwrap(), "Accept, Origin");
/// assert_eq!(append("Accept", ["accept", "User-Agent"]).unwrap(), "Accept, User-Agent");
/// assert_eq!(append("Accept", "*").unwrap(), "*");
/// ```
///
/// # Errors
///
/// Returns [`VaryError::InvalidArgument`] if `fields` is an empty string, and
/// [`VaryError::InvalidFieldName`] if any field is not a valid token.
pub fn append<'a>(header: &str, fields: impl Into<Fields<'a>>) -> Result<String, VaryError> {
    let fields: Fields<'a> = fields.into();
    let fields = fields.into_names()?;

    // existing unspecified vary
    if header == WILDCARD {
        trace!("vary is already unspecified");
        return Ok(WILDCARD.to_owned());
    }

    let mut seen: HashSet<String> = parse_field_list(header).map(str::to_ascii_lowercase).collect();

    if seen.contains(WILDCARD) || fields.contains(&WILDCARD) {
        trace!(header, "vary becomes unspecified");
        return Ok(WILDCARD.to_owned());
    }

    let appended: usize = fields.iter().map(|f| f.len() + SEPARATOR.len()).sum();
    let mut value = String::with_capacity(header.len() + appended);
    value.push_str(header);

    for field in fields {
        if !seen.insert(field.to_ascii_lowercase()) {
            trace!(field, "field already present in vary");
            continue;
        }

        if !value.is_empty() {
            value.push_str(SEPARATOR);
        }
        value.push_str(field);
    }

    Ok(value)
}
