//! Priority-area ranking: picks the evidence categories with the most missing fields.

use serde::{Deserialize, Serialize};

use crate::evidence::stats::FieldStats;
use crate::evidence::EvidenceCategory;

/// Number of categories surfaced as priority areas.
pub const PRIORITY_AREA_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityArea {
    pub key: String,
    pub label: String,
    pub value: u32,
}

/// An entry of a ranking table.
pub trait AreaEntry {
    fn area_key(&self) -> &str;
    fn area_label(&self) -> &str;
}

impl AreaEntry for EvidenceCategory {
    fn area_key(&self) -> &str {
        self.key()
    }

    fn area_label(&self) -> &str {
        self.label()
    }
}

impl AreaEntry for (&str, &str) {
    fn area_key(&self) -> &str {
        self.0
    }

    fn area_label(&self) -> &str {
        self.1
    }
}

/// Ranks table entries by their count, highest first, keeping at most
/// `PRIORITY_AREA_COUNT`. Equal counts keep table order. Unknown counts rank as zero.
pub fn rank_priority_areas<T, F>(table: &[T], count_of: F) -> Vec<PriorityArea>
where
    T: AreaEntry,
    F: Fn(&T) -> Option<u32>,
{
    let mut ranked: Vec<PriorityArea> = table
        .iter()
        .map(|entry| PriorityArea {
            key: entry.area_key().to_string(),
            label: entry.area_label().to_string(),
            value: count_of(entry).unwrap_or(0),
        })
        .collect();

    // sort_by is stable, so ties stay in table order
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(PRIORITY_AREA_COUNT);
    ranked
}

/// Top priority areas for an applicant's statistics over the canonical category table.
pub fn priority_areas(stats: &FieldStats) -> Vec<PriorityArea> {
    rank_priority_areas(&EvidenceCategory::ALL, |category| stats.missing(*category))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn keys(areas: &[PriorityArea]) -> Vec<&str> {
        areas.iter().map(|a| a.key.as_str()).collect()
    }

    #[test]
    fn test_ties_keep_table_order() {
        let table = [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D")];
        let counts: HashMap<&str, u32> = [("a", 5), ("b", 2), ("c", 5), ("d", 1)].into();
        let ranked = rank_priority_areas(&table, |(k, _)| counts.get(k).copied());
        assert_eq!(keys(&ranked), vec!["a", "c", "b"]);
        assert_eq!(ranked[0].value, 5);
        assert_eq!(ranked[2].value, 2);
    }

    #[test]
    fn test_all_zero_returns_first_three_categories() {
        let ranked = priority_areas(&FieldStats::default());
        assert_eq!(
            keys(&ranked),
            vec!["extraordinary_ability", "recognition", "publications"]
        );
        assert!(ranked.iter().all(|a| a.value == 0));
    }

    #[test]
    fn test_missing_count_ranks_as_zero() {
        let table = [("a", "A"), ("b", "B"), ("c", "C")];
        let ranked = rank_priority_areas(&table, |(k, _)| (*k == "c").then_some(1));
        assert_eq!(keys(&ranked), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_short_table_returns_fewer_areas() {
        let table = [("only", "Only")];
        let ranked = rank_priority_areas(&table, |_| Some(4));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].label, "Only");
    }

    #[test]
    fn test_priority_areas_from_stats() {
        let stats = FieldStats {
            missing_publications_fields: Some(7),
            missing_judging_fields: Some(3),
            missing_media_coverage_fields: Some(7),
            missing_recognition_fields: None,
            ..Default::default()
        };
        let ranked = priority_areas(&stats);
        assert_eq!(keys(&ranked), vec!["publications", "media_coverage", "judging"]);
        assert_eq!(ranked[0].label, "Scholarly Publications");
    }
}
