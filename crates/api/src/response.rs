//! Response envelopes shared by all handlers.
//!
//! Reads return `{ "data": ... }`, create/update mutations add the
//! notification text as `{ "data": ..., "message": ... }`, and deletes
//! return only `{ "message": ... }`.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "data": T, "message": "..." }` returned by create and update.
#[derive(Debug, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

/// `{ "message": "..." }` returned by deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
