//! Maintain the HTTP `Vary` response header
//!
//! A response that was selected using some request headers must list those headers
//! in `Vary`, so that caches only reuse it for requests that agree on them. This crate
//! keeps that header correct while handlers and middlewares add to it independently.
//!
//! # Features
//!
//! - Case-insensitive deduplication, keeping the casing of the first occurrence
//! - Existing order kept, new field names appended in the given order
//! - `*` absorbs everything: once present, the header is exactly `*`
//! - Whitespace-tolerant parsing of comma-separated field lists
//! - Strict field-name token validation
//!
//! # Example
//!
//! ```
//! use http::Response;
//! use micro_vary::{VaryExt, append};
//!
//! // the pure merge
//! assert_eq!(append("Accept", "accept, Origin").unwrap(), "Accept, Origin");
//!
//! // updating a response in place
//! let mut response = Response::new(());
//! response.vary_on("Accept-Encoding").unwrap();
//! response.vary_on(["Origin", "accept-encoding"]).unwrap();
//! assert_eq!(response.headers()[http::header::VARY], "Accept-Encoding, Origin");
//! ```
//!
//! # Architecture
//!
//! - [`field`]: field-name validation and field-list parsing
//! - [`append()`]: merges field names into a header value, see [`Fields`]
//! - [`vary()`]: reads `Vary` from a [`HeaderStore`], merges and writes it back
//!
//! # Error Handling
//!
//! Every operation returns [`VaryError`]. Invalid input is never partially applied:
//! on error the response headers are left untouched.

pub mod field;

mod append;
mod error;
mod response;
mod utils;

pub use append::Fields;
pub use append::append;
pub use error::VaryError;
pub use response::HeaderStore;
pub use response::HeaderValues;
pub use response::VaryExt;
pub use response::vary;
