//! Response envelope shared by every JSON handler.

use serde::Serialize;

/// The `{ "data": ... }` envelope wrapping every successful response.
///
/// Failures use the `{ "error", "code" }` shape from [`crate::error`]
/// instead, so clients can branch on the top-level key.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
