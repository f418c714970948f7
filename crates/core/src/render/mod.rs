//! Server-side page rendering.
//!
//! Every component is a pure function of the data it is handed and returns
//! an HTML fragment; [`render_dashboard_page`] stitches them into a document.
//!
//! # Components
//! - `header.rs`: title, data caption, footer
//! - `metrics.rs`: headline cards
//! - `table.rs`: asset breakdown and protocol list
//! - `charts.rs`: trend line and distribution pie (inline SVG)
//! - `css.rs`: stylesheet

pub mod charts;
pub mod css;
pub mod format;
pub mod header;
pub mod metrics;
pub mod table;

use chrono::{DateTime, Utc};

use crate::models::chart::{DistributionSlice, TrendPoint};
use crate::models::settings::DashboardSettings;
use crate::models::snapshot::Snapshot;

use format::escape_html;

/// Seconds between browser reloads while the first refresh is running.
pub const LOADING_RELOAD_SECS: u64 = 2;

/// Everything one page render needs besides the static settings.
#[derive(Debug, Clone, Copy)]
pub struct PageData<'a> {
    pub snapshot: &'a Snapshot,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub trend: &'a [TrendPoint],
    pub distribution: &'a [DistributionSlice],
}

fn document(title: &str, reload_secs: u64, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta http-equiv="refresh" content="{reload_secs}">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>{body}
</body>
</html>"#,
        title = escape_html(title),
        css = css::STYLES,
    )
}

/// The full dashboard, reloading itself every refresh interval.
pub fn render_dashboard_page(settings: &DashboardSettings, data: PageData<'_>) -> String {
    let body = [
        header::render_header(&settings.title, &settings.data_as_of, data.refreshed_at),
        metrics::render_metrics_cards(
            data.snapshot,
            &settings.highlighted_asset,
            &settings.change_24h_label,
        ),
        table::render_breakdown_table(data.snapshot.assets()),
        table::render_protocol_list(data.snapshot.protocols()),
        charts::render_charts(data.trend, data.distribution),
        header::render_footer(&settings.footer),
    ]
    .concat();

    document(&settings.title, settings.refresh_interval_secs, &body)
}

/// Shown until the first snapshot is available.
pub fn render_loading_page(settings: &DashboardSettings) -> String {
    let body = format!(
        r#"
    <div class="loading">Loading {} Data...</div>"#,
        escape_html(loading_subject(&settings.title))
    );
    document(&settings.title, LOADING_RELOAD_SECS, &body)
}

/// "Flare TVL Dashboard" reads as "Loading Flare TVL Data...".
fn loading_subject(title: &str) -> &str {
    title.strip_suffix(" Dashboard").unwrap_or(title)
}
