use crate::models::price::PriceQuote;
use crate::models::snapshot::Snapshot;

use super::format::{escape_html, format_millions, format_price};

/// The four headline cards.
///
/// A highlighted asset missing from the snapshot shows as `$0.00M`.
pub fn render_metrics_cards(snapshot: &Snapshot, highlighted_asset: &str, change_24h_label: &str) -> String {
    let highlighted_value = snapshot
        .asset(highlighted_asset)
        .map(|a| a.locked_value_usd)
        .unwrap_or(0.0);

    format!(
        r#"
    <div class="cards">
        <div class="card">
            <h3>Total TVL</h3>
            <p class="value white">{total}</p>
        </div>
        <div class="card">
            <h3>{highlighted} Locked</h3>
            <p class="value blue">{highlighted_value}</p>
        </div>
        <div class="card">
            <h3>24h Change</h3>
            <p class="value green">{change}</p>
        </div>{price_card}
    </div>"#,
        total = format_millions(snapshot.total_locked_value_usd()),
        highlighted = escape_html(highlighted_asset),
        highlighted_value = format_millions(highlighted_value),
        change = escape_html(change_24h_label),
        price_card = render_price_card(snapshot.reference_price()),
    )
}

fn render_price_card(quote: &PriceQuote) -> String {
    let (caption, color) = match quote.provider() {
        Some(provider) => (format!("Live via {}", escape_html(provider)), "green"),
        None => ("Fallback price".to_string(), "amber"),
    };

    format!(
        r#"
        <div class="card accent">
            <h3>{symbol} Price</h3>
            <p class="value {color}">{price}</p>
            <p class="caption">{caption}</p>
        </div>"#,
        symbol = escape_html(&quote.symbol),
        price = format_price(quote.price_usd),
    )
}
