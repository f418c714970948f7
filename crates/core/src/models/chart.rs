use serde::{Deserialize, Serialize};

/// A single point on the TVL trend line.
///
/// The core computes these; the renderer only draws them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Axis label (e.g., "Nov 2025")
    pub label: String,

    /// Total value locked in millions of USD
    pub value_millions: f64,
}

impl TrendPoint {
    pub fn new(label: impl Into<String>, value_millions: f64) -> Self {
        Self {
            label: label.into(),
            value_millions,
        }
    }
}

/// One slice of the asset distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSlice {
    pub symbol: String,

    pub locked_value_usd: f64,

    /// Share of the total in percent (0–100). Zero when the total is zero.
    pub share_pct: f64,

    /// CSS color used for this slice and its legend entry
    pub color: String,
}
