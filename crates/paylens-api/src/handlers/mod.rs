//! HTTP handlers, grouped by domain.

pub mod auth;
pub mod salaries;
