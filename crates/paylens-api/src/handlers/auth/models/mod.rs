//! Request and response models for the auth endpoints.

mod credentials_request;
mod session_response;

pub use credentials_request::CredentialsRequest;
pub use session_response::SessionResponse;
