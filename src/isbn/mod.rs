//! ISBN detection, normalization and validation.
//!
//! - [`classify`] decides whether an [`IdentifierRecord`](crate::IdentifierRecord)
//!   looks like an ISBN.
//! - [`normalize`] turns a raw value into a compact digit/`X` string.
//! - [`validate`] checks the ISBN-10 or ISBN-13 checksum.

mod classify;
mod normalize;
mod validate;

pub use classify::{IsbnSignal, URN_PREFIX, classify, first_isbn, is_isbn};
pub use normalize::normalize;
pub use validate::{IsbnKind, check, validate};
