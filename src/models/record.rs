use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::enums::DementiaCategory;

/// One prediction history entry, as returned by GET /predictions/history.
///
/// Deserialization is deliberately lenient: a missing confidence becomes
/// 0 and an unrecognized category becomes `Unknown`, so a single odd
/// record can never take down the whole history view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "prediction", default)]
    pub category: DementiaCategory,
    /// Classifier confidence in [0, 100].
    #[serde(default)]
    pub confidence: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Opaque analysis payload. Passed through to detail/report
    /// rendering, never interpreted by the history core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<AnalysisDetails>,
}

impl PredictionRecord {
    /// Examination timestamp formatted for display, falling back to the
    /// raw wire string when it is not valid RFC 3339.
    pub fn created_at_display(&self) -> String {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }

    /// Confidence formatted the way every surface shows it: one decimal
    /// place plus a percent sign.
    pub fn confidence_display(&self) -> String {
        format!("{:.1}%", self.confidence)
    }
}

/// Free-form analysis attached by the backend to a saved prediction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisDetails {
    #[serde(default)]
    pub regions: Vec<BrainRegion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
}

/// One brain-region row inside the detailed analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrainRegion {
    pub name: String,
    pub status: String,
    pub score: f64,
}
