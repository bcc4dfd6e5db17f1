//! Updating the `Vary` header of a response.
//!
//! [`vary`] works on any [`HeaderStore`], the capability of reading and writing a
//! header by name. It is implemented for [`http::HeaderMap`] and [`http::Response`],
//! so it plugs directly into handlers built on the `http` types.

use http::header::{HeaderName, VARY};
use http::{HeaderMap, HeaderValue, Response};
use tracing::{debug, trace};

use crate::VaryError;
use crate::append::{Fields, append};

/// The stored value(s) of one header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValues {
    /// The header appears once.
    Single(String),
    /// The header appears several times, in order.
    Multiple(Vec<String>),
}

impl HeaderValues {
    /// Joins the values into one comma-separated header text.
    #[must_use]
    pub fn join(self) -> String {
        match self {
            HeaderValues::Single(value) => value,
            HeaderValues::Multiple(values) => values.join(", "),
        }
    }
}

/// Something that holds response headers.
#[cfg_attr(test, mockall::automock)]
pub trait HeaderStore {
    /// Returns the current value(s) of the header `name`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value cannot be read as text.
    fn get_header(&self, name: &HeaderName) -> Result<Option<HeaderValues>, VaryError>;

    /// Replaces every value of the header `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be stored.
    fn set_header(&mut self, name: HeaderName, value: &str) -> Result<(), VaryError>;
}

impl HeaderStore for HeaderMap {
    fn get_header(&self, name: &HeaderName) -> Result<Option<HeaderValues>, VaryError> {
        let mut values = self
            .get_all(name)
            .iter()
            .map(|value| value.to_str().map(str::to_owned))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match values.len() {
            0 => None,
            1 => values.pop().map(HeaderValues::Single),
            _ => Some(HeaderValues::Multiple(values)),
        })
    }

    fn set_header(&mut self, name: HeaderName, value: &str) -> Result<(), VaryError> {
        let value = HeaderValue::from_str(value)?;
        self.insert(name, value);
        Ok(())
    }
}

impl<B> HeaderStore for Response<B> {
    fn get_header(&self, name: &HeaderName) -> Result<Option<HeaderValues>, VaryError> {
        self.headers().get_header(name)
    }

    fn set_header(&mut self, name: HeaderName, value: &str) -> Result<(), VaryError> {
        self.headers_mut().set_header(name, value)
    }
}

/// Marks that the response varies on `fields`.
///
/// The current `Vary` value is read from `res`, merged with [`append`] and written
/// back as a single header, replacing every previous `Vary` line. An empty result
/// is never written.
///
/// ```
/// use http::Response;
/// use micro_vary::vary;
///
/// let mut res = Response::new(());
/// vary(&mut res, ["Origin", "User-Agent"]).unwrap();
/// assert_eq!(res.headers()["vary"], "Origin, User-Agent");
/// ```
///
/// # Errors
///
/// Returns the errors of [`append`], or the errors of [`HeaderStore::get_header`]
/// and [`HeaderStore::set_header`].
/// Nothing is written when an error is returned.
pub fn vary<'a, S>(res: &mut S, fields: impl Into<Fields<'a>>) -> Result<(), VaryError>
where
    S: HeaderStore + ?Sized,
{
    let header = res.get_header(&VARY)?.map(HeaderValues::join).unwrap_or_default();

    let value = append(&header, fields)?;
    if value.is_empty() {
        trace!("no field to vary on");
        return Ok(());
    }

    debug!(vary = %value, "set vary header");
    res.set_header(VARY, &value)
}

/// Extension methods for every [`HeaderStore`].
pub trait VaryExt: HeaderStore {
    /// Marks that the response varies on `fields`, see [`vary`].
    ///
    /// # Errors
    ///
    /// See [`vary`].
    fn vary_on<'a>(&mut self, fields: impl Into<Fields<'a>>) -> Result<(), VaryError> {
        vary(self, fields)
    }
}

impl<T: HeaderStore + ?Sized> VaryExt for T {}
