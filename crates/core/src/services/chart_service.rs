use crate::models::chart::{DistributionSlice, TrendPoint};
use crate::models::snapshot::Snapshot;

/// Slice colors, reused in order when there are more assets than colors.
pub const PALETTE: [&str; 5] = [
    "rgb(59, 130, 246)",
    "rgb(16, 185, 129)",
    "rgb(245, 158, 11)",
    "rgb(239, 68, 68)",
    "rgb(139, 92, 246)",
];

/// Generates chart-ready data sets from a snapshot.
///
/// The core computes all the numbers; the renderer only draws them.
pub struct ChartService {
    history: Vec<TrendPoint>,
    current_label: String,
}

impl ChartService {
    pub fn new(history: Vec<TrendPoint>, current_label: impl Into<String>) -> Self {
        Self {
            history,
            current_label: current_label.into(),
        }
    }

    /// The fixed historical points followed by the snapshot's total, in millions.
    pub fn trend_series(&self, snapshot: &Snapshot) -> Vec<TrendPoint> {
        let mut series = self.history.clone();
        series.push(TrendPoint::new(
            self.current_label.clone(),
            snapshot.total_locked_value_usd() / 1e6,
        ));
        series
    }

    /// One slice per asset, in table order, keyed by locked value.
    pub fn distribution(&self, snapshot: &Snapshot) -> Vec<DistributionSlice> {
        let total = snapshot.total_locked_value_usd();
        snapshot
            .assets()
            .iter()
            .enumerate()
            .map(|(i, asset)| DistributionSlice {
                symbol: asset.symbol.clone(),
                locked_value_usd: asset.locked_value_usd,
                share_pct: if total > 0.0 {
                    asset.locked_value_usd / total * 100.0
                } else {
                    0.0
                },
                color: PALETTE[i % PALETTE.len()].to_string(),
            })
            .collect()
    }
}
