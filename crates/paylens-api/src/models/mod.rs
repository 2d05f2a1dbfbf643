//! Response models shared across handler families.

mod error_response;

pub use error_response::ErrorResponse;
