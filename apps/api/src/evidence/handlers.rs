use axum::{extract::rejection::StringRejection, Json};

use crate::errors::AppError;
use crate::evidence::priority::{priority_areas, PriorityArea};
use crate::evidence::report::{compute_qualification_report, QualificationReport};
use crate::evidence::stats::FieldStats;

// Bodies are taken as raw text so every payload goes through FieldStats::from_json.

/// POST /api/v1/stats/priorities
pub async fn handle_priorities(
    body: Result<String, StringRejection>,
) -> Result<Json<Vec<PriorityArea>>, AppError> {
    let stats = FieldStats::from_json(&body?)?;
    Ok(Json(priority_areas(&stats)))
}

/// POST /api/v1/stats/report
pub async fn handle_report(
    body: Result<String, StringRejection>,
) -> Result<Json<QualificationReport>, AppError> {
    let stats = FieldStats::from_json(&body?)?;
    let report = compute_qualification_report(&stats);
    tracing::debug!(
        score = report.qualification_score,
        not_uploaded = report.not_uploaded.len(),
        "Computed qualification report"
    );
    Ok(Json(report))
}
