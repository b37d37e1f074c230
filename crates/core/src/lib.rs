//! Pure domain layer: locale resolution and the localized content
//! projection engine. No I/O — everything here is a function of its inputs,
//! so the `db` and `api` crates can both build on it.

pub mod error;
pub mod locale;
pub mod projection;
pub mod types;
