//! Response schema for the analytics API.
//!
//! All container fields use `#[serde(default)]` so a body with missing
//! optional fields deserializes to empty collections instead of failing the
//! whole call.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flat record map as returned in `table_data`.
pub type Record = serde_json::Map<String, Value>;

/// Structured result of one analyze call. Replaced wholesale by each new
/// successful call; the page controller holds at most one at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub chart_data: ChartData,
    #[serde(default)]
    pub table_data: Vec<Record>,
    /// Query parameters the backend used to produce this result. Echoed
    /// back on export so the download matches what is on screen.
    #[serde(default)]
    pub filters: Record,
    #[serde(default)]
    pub metadata: Option<Record>,
}

impl AnalysisResult {
    /// Whether the backend flagged this summary as AI-generated
    /// (`metadata.ai_summary` present and truthy).
    #[must_use]
    pub fn is_ai_summary(&self) -> bool {
        self.metadata
            .as_ref()
            .and_then(|m| m.get("ai_summary"))
            .is_some_and(|v| v.as_bool().unwrap_or(!v.is_null()))
    }
}

/// Dual-series category chart data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

/// One series of the chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

impl Dataset {
    /// Series classification the chart renderer keys axis, color, and
    /// tooltip format off: a dataset is a price series iff its label
    /// contains "price" case-insensitively. Everything else is treated as
    /// a 0-100 bounded score series.
    #[must_use]
    pub fn is_price_series(&self) -> bool {
        self.label.to_lowercase().contains("price")
    }
}

/// A canned example query surfaced before any real interaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleQuery {
    pub query: String,
}
