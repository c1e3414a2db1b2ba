//! Field statistics: the per-category "missing field" counters produced by the scoring step.
//!
//! This is the only place raw statistics JSON is interpreted. Everything downstream receives
//! a validated `FieldStats`.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::evidence::EvidenceCategory;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("malformed field statistics: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("user_info_filled ({filled}) exceeds total_fields ({total})")]
    FilledExceedsTotal { filled: u32, total: u32 },

    #[error("percent_filled must be within 0..=100, got {0}")]
    PercentOutOfRange(f64),
}

/// Completeness counters for one applicant.
///
/// A `None` count means the category has not been uploaded yet, which is different from
/// `Some(0)` (uploaded, nothing missing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldStats {
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_extraordinary_ability_fields: Option<u32>,
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_recognition_fields: Option<u32>,
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_publications_fields: Option<u32>,
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_memberships_fields: Option<u32>,
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_judging_fields: Option<u32>,
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_original_contributions_fields: Option<u32>,
    #[serde(default, deserialize_with = "missing_count")]
    pub missing_media_coverage_fields: Option<u32>,
    #[serde(default)]
    pub total_fields: u32,
    #[serde(default)]
    pub user_info_filled: u32,
    #[serde(default)]
    pub percent_filled: Option<f64>,
}

impl FieldStats {
    /// Parses and validates a statistics payload received from the scoring service.
    pub fn from_json(raw: &str) -> Result<Self, StatsError> {
        let stats: FieldStats = serde_json::from_str(raw)?;
        stats.validate()?;
        Ok(stats)
    }

    pub fn validate(&self) -> Result<(), StatsError> {
        if self.user_info_filled > self.total_fields {
            return Err(StatsError::FilledExceedsTotal {
                filled: self.user_info_filled,
                total: self.total_fields,
            });
        }
        if let Some(percent) = self.percent_filled {
            if !(0.0..=100.0).contains(&percent) {
                return Err(StatsError::PercentOutOfRange(percent));
            }
        }
        Ok(())
    }

    /// Missing-field count for a category; `None` when the category was never uploaded.
    pub fn missing(&self, category: EvidenceCategory) -> Option<u32> {
        match category {
            EvidenceCategory::ExtraordinaryAbility => self.missing_extraordinary_ability_fields,
            EvidenceCategory::Recognition => self.missing_recognition_fields,
            EvidenceCategory::Publications => self.missing_publications_fields,
            EvidenceCategory::Memberships => self.missing_memberships_fields,
            EvidenceCategory::Judging => self.missing_judging_fields,
            EvidenceCategory::OriginalContributions => self.missing_original_contributions_fields,
            EvidenceCategory::MediaCoverage => self.missing_media_coverage_fields,
        }
    }

    /// Reported percentage, or one derived from the filled/total counters.
    pub fn effective_percent_filled(&self) -> f64 {
        match self.percent_filled {
            Some(percent) => percent,
            None if self.total_fields == 0 => 0.0,
            None => self.user_info_filled as f64 / self.total_fields as f64 * 100.0,
        }
    }
}

/// Accepts a count, `null`, or a negative legacy sentinel (mapped to "not uploaded").
fn missing_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(n) if n < 0 => Ok(None),
        Some(n) => u32::try_from(n)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("count {n} is out of range"))),
    }
}
