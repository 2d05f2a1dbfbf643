//! Request and response models for the salary endpoints.

mod detail_response;
mod salary_response;
mod status_request;
mod submit_request;
mod vote_request;

pub use detail_response::SalaryDetailResponse;
pub use salary_response::SalaryResponse;
pub use status_request::StatusUpdateRequest;
pub use submit_request::SubmitSalaryRequest;
pub use vote_request::VoteRequest;
