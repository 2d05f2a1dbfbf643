//! Statistics handler
//!
//! GET /salaries/stats - Aggregates over approved submissions (public)

use actix_web::{web, HttpResponse};

use paylens_salaries::{SalaryService, StatsFilter};

use super::map_salary_error_to_response;

/// GET /salaries/stats?country=&role=&level=
///
/// Only APPROVED rows are aggregated; filters match case-insensitively.
/// With no matching rows the summary is all zeros rather than an error.
pub async fn salary_stats_handler(
    filter: web::Query<StatsFilter>,
    service: web::Data<SalaryService>,
) -> HttpResponse {
    match service.stats(&filter).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => map_salary_error_to_response(err),
    }
}
