use serde::{Deserialize, Serialize};

use crate::evidence::priority::{priority_areas, PriorityArea};
use crate::evidence::stats::FieldStats;
use crate::evidence::EvidenceCategory;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    NotUploaded,
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryHealth {
    pub category: EvidenceCategory,
    pub label: String,
    pub status: CategoryStatus,
    pub missing_fields: Option<u32>,
    pub recommendation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationReport {
    /// Whole-number score shown on the dashboard, 0–100.
    pub qualification_score: u32,
    pub percent_filled: f64,
    pub categories: Vec<CategoryHealth>,
    pub not_uploaded: Vec<EvidenceCategory>,
    pub priority_areas: Vec<PriorityArea>,
}

pub fn compute_qualification_report(stats: &FieldStats) -> QualificationReport {
    let percent_filled = stats.effective_percent_filled().clamp(0.0, 100.0);
    let mut categories = Vec::with_capacity(EvidenceCategory::ALL.len());
    let mut not_uploaded = Vec::new();

    for category in EvidenceCategory::ALL {
        let missing_fields = stats.missing(category);

        let (status, recommendation) = match missing_fields {
            None => {
                not_uploaded.push(category);
                (
                    CategoryStatus::NotUploaded,
                    Some(format!(
                        "Upload supporting documents for {}",
                        category.label()
                    )),
                )
            }
            Some(0) => (CategoryStatus::Complete, None),
            Some(n) => (
                CategoryStatus::Incomplete,
                Some(format!(
                    "{} {} missing in {}",
                    n,
                    if n == 1 { "field is" } else { "fields are" },
                    category.label()
                )),
            ),
        };

        categories.push(CategoryHealth {
            category,
            label: category.label().to_string(),
            status,
            missing_fields,
            recommendation,
        });
    }

    QualificationReport {
        qualification_score: percent_filled.round() as u32,
        percent_filled,
        categories,
        not_uploaded,
        priority_areas: priority_areas(stats),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_follow_counts() {
        let stats = FieldStats {
            missing_extraordinary_ability_fields: Some(0),
            missing_recognition_fields: Some(2),
            ..Default::default()
        };
        let report = compute_qualification_report(&stats);

        assert_eq!(report.categories.len(), 7);
        assert_eq!(report.categories[0].status, CategoryStatus::Complete);
        assert!(report.categories[0].recommendation.is_none());
        assert_eq!(report.categories[1].status, CategoryStatus::Incomplete);
        assert_eq!(
            report.categories[1].recommendation.as_deref(),
            Some("2 fields are missing in Awards & Recognition")
        );
        assert_eq!(report.categories[2].status, CategoryStatus::NotUploaded);
        assert_eq!(report.not_uploaded.len(), 5);
    }

    #[test]
    fn test_score_rounds_percent() {
        let stats = FieldStats {
            total_fields: 3,
            user_info_filled: 2,
            ..Default::default()
        };
        let report = compute_qualification_report(&stats);
        assert_eq!(report.qualification_score, 67);
    }

    #[test]
    fn test_priorities_included() {
        let stats = FieldStats {
            missing_judging_fields: Some(9),
            ..Default::default()
        };
        let report = compute_qualification_report(&stats);
        assert_eq!(report.priority_areas.len(), 3);
        assert_eq!(report.priority_areas[0].key, "judging");
        assert_eq!(report.priority_areas[0].value, 9);
    }

    #[test]
    fn test_report_serializes_snake_case_status() {
        let report = compute_qualification_report(&FieldStats::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["categories"][0]["status"], "not_uploaded");
        assert_eq!(json["not_uploaded"][0], "extraordinary_ability");
        assert_eq!(json["qualification_score"], 0);
    }
}
