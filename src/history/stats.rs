use crate::models::{DementiaCategory, PredictionRecord};

/// Summary statistics over the full, unfiltered record list.
///
/// The stat cards deliberately ignore the active filter so they describe
/// the whole history regardless of what the table currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStats {
    pub total_scans: usize,
    pub non_demented: usize,
    pub very_mild: usize,
    pub mild: usize,
    pub moderate: usize,
    pub unknown: usize,
    pub average_confidence: f64,
}

impl HistoryStats {
    pub fn compute(records: &[PredictionRecord]) -> Self {
        let mut stats = Self {
            total_scans: records.len(),
            non_demented: 0,
            very_mild: 0,
            mild: 0,
            moderate: 0,
            unknown: 0,
            average_confidence: 0.0,
        };

        let mut confidence_sum = 0.0;
        for record in records {
            confidence_sum += record.confidence;
            match record.category {
                DementiaCategory::NonDemented => stats.non_demented += 1,
                DementiaCategory::VeryMildDementia => stats.very_mild += 1,
                DementiaCategory::MildDementia => stats.mild += 1,
                DementiaCategory::ModerateDementia => stats.moderate += 1,
                DementiaCategory::Unknown => stats.unknown += 1,
            }
        }

        // Averaging over zero records is defined as 0, never NaN.
        if stats.total_scans > 0 {
            stats.average_confidence = confidence_sum / stats.total_scans as f64;
        }
        stats
    }

    pub fn count_for(&self, category: DementiaCategory) -> usize {
        match category {
            DementiaCategory::NonDemented => self.non_demented,
            DementiaCategory::VeryMildDementia => self.very_mild,
            DementiaCategory::MildDementia => self.mild,
            DementiaCategory::ModerateDementia => self.moderate,
            DementiaCategory::Unknown => self.unknown,
        }
    }

    /// All dementia-positive categories combined.
    pub fn demented_total(&self) -> usize {
        self.very_mild + self.mild + self.moderate
    }

    /// One decimal place plus a percent sign, e.g. `"88.6%"`; an empty
    /// history yields `"0.0%"`.
    pub fn average_confidence_display(&self) -> String {
        format!("{:.1}%", self.average_confidence)
    }
}

/// Pre-formatted values for the dashboard stat cards.
///
/// The original UI was inconsistent about whether "positive" meant
/// healthy or demented; these buckets are named for what they count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_scans: String,
    pub healthy_results: String,
    pub dementia_results: String,
    pub average_confidence: String,
}

impl DashboardSummary {
    pub fn from_records(records: &[PredictionRecord]) -> Self {
        let stats = HistoryStats::compute(records);
        Self {
            total_scans: stats.total_scans.to_string(),
            healthy_results: stats.non_demented.to_string(),
            dementia_results: stats.demented_total().to_string(),
            average_confidence: stats.average_confidence_display(),
        }
    }
}
