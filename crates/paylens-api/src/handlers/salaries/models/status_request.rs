//! Moderation status request model

use serde::Deserialize;

/// Request body for PATCH /salaries/{id}/status.
///
/// The status arrives as a raw string and is parsed by the handler so that
/// unknown values produce a 400 with the envelope body instead of a
/// deserializer error.
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}
