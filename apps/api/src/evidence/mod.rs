// Evidence categories and the completeness statistics collected against them.
// Implements: category table, FieldStats boundary validation, priority ranking,
// qualification report.

pub mod handlers;
pub mod priority;
pub mod report;
pub mod stats;

use serde::{Deserialize, Serialize};

/// A document type tracked for petition completeness.
/// Declaration order is the canonical table order used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCategory {
    ExtraordinaryAbility,
    Recognition,
    Publications,
    Memberships,
    Judging,
    OriginalContributions,
    MediaCoverage,
}

impl EvidenceCategory {
    pub const ALL: [EvidenceCategory; 7] = [
        EvidenceCategory::ExtraordinaryAbility,
        EvidenceCategory::Recognition,
        EvidenceCategory::Publications,
        EvidenceCategory::Memberships,
        EvidenceCategory::Judging,
        EvidenceCategory::OriginalContributions,
        EvidenceCategory::MediaCoverage,
    ];

    pub fn key(self) -> &'static str {
        match self {
            EvidenceCategory::ExtraordinaryAbility => "extraordinary_ability",
            EvidenceCategory::Recognition => "recognition",
            EvidenceCategory::Publications => "publications",
            EvidenceCategory::Memberships => "memberships",
            EvidenceCategory::Judging => "judging",
            EvidenceCategory::OriginalContributions => "original_contributions",
            EvidenceCategory::MediaCoverage => "media_coverage",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EvidenceCategory::ExtraordinaryAbility => "Extraordinary Ability",
            EvidenceCategory::Recognition => "Awards & Recognition",
            EvidenceCategory::Publications => "Scholarly Publications",
            EvidenceCategory::Memberships => "Professional Memberships",
            EvidenceCategory::Judging => "Judging the Work of Others",
            EvidenceCategory::OriginalContributions => "Original Contributions",
            EvidenceCategory::MediaCoverage => "Media Coverage",
        }
    }

    /// What an adjudicator looks for in this category. Feeds the critique prompt.
    pub fn review_focus(self) -> &'static str {
        match self {
            EvidenceCategory::ExtraordinaryAbility => {
                "sustained national or international acclaim and a career at the top of the field"
            }
            EvidenceCategory::Recognition => {
                "nationally or internationally recognized prizes or awards for excellence, \
                 including the selectivity and issuing body of each award"
            }
            EvidenceCategory::Publications => {
                "authorship of scholarly articles in professional or major trade publications, \
                 with venue quality and citation counts"
            }
            EvidenceCategory::Memberships => {
                "membership in associations that require outstanding achievement, \
                 judged by recognized experts"
            }
            EvidenceCategory::Judging => {
                "participation as a judge of the work of others, such as peer review or panels"
            }
            EvidenceCategory::OriginalContributions => {
                "original contributions of major significance, backed by independent evidence of impact"
            }
            EvidenceCategory::MediaCoverage => {
                "published material about the applicant in major media, with author, date and outlet"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_serde_names() {
        for category in EvidenceCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        let result: Result<EvidenceCategory, _> = serde_json::from_str(r#""hobbies""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_canonical_order_starts_with_extraordinary_ability() {
        assert_eq!(EvidenceCategory::ALL[0], EvidenceCategory::ExtraordinaryAbility);
        assert_eq!(EvidenceCategory::ALL[6], EvidenceCategory::MediaCoverage);
    }
}
