use crate::models::{DementiaCategory, PredictionRecord};

/// The active category selection. `All` is the sentinel that disables
/// filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DementiaCategory),
}

impl CategoryFilter {
    pub fn matches(&self, record: &PredictionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => record.category == *category,
        }
    }

    /// Label for the filter button row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.as_str(),
        }
    }
}

/// Order-preserving filter pass over the full record list.
///
/// Pure: same inputs, same output, store untouched. A selection with no
/// matching records yields an empty list, not an error.
pub fn apply<'a>(
    records: &'a [PredictionRecord],
    filter: CategoryFilter,
) -> Vec<&'a PredictionRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: DementiaCategory) -> PredictionRecord {
        PredictionRecord {
            id: id.into(),
            user_id: "u1".into(),
            category,
            confidence: 80.0,
            created_at: String::new(),
            image_url: None,
            details: None,
        }
    }

    fn sample() -> Vec<PredictionRecord> {
        vec![
            record("a", DementiaCategory::NonDemented),
            record("b", DementiaCategory::MildDementia),
            record("c", DementiaCategory::NonDemented),
            record("d", DementiaCategory::ModerateDementia),
            record("e", DementiaCategory::MildDementia),
        ]
    }

    #[test]
    fn all_returns_every_record_in_order() {
        let records = sample();
        let filtered = apply(&records, CategoryFilter::All);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn category_selection_keeps_exact_matches_in_order() {
        let records = sample();
        let filtered = apply(
            &records,
            CategoryFilter::Only(DementiaCategory::MildDementia),
        );
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "e"]);
    }

    #[test]
    fn zero_match_selection_yields_empty() {
        let records = sample();
        let filtered = apply(
            &records,
            CategoryFilter::Only(DementiaCategory::VeryMildDementia),
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn filter_on_empty_list_is_empty() {
        assert!(apply(&[], CategoryFilter::All).is_empty());
    }

    #[test]
    fn labels_match_wire_categories() {
        assert_eq!(CategoryFilter::All.label(), "All");
        assert_eq!(
            CategoryFilter::Only(DementiaCategory::VeryMildDementia).label(),
            "Very Mild Dementia"
        );
    }
}
