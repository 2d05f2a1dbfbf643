//! # paylens-salaries
//!
//! Salary domain: submission and vote stores over `paylens-store`, the
//! salary service (listing, moderation, voting), and the statistics
//! aggregator feeding the public stats endpoint.

pub mod errors;
pub mod providers;
pub mod salary_service;
pub mod stats;

pub use errors::{SalaryError, SalaryResult};
pub use salary_service::{NewSubmission, SalaryService, StatsFilter, SubmissionDetail};
pub use stats::SalaryStats;
