//! Number and text formatting shared by the page components.

/// `$149.58M` style: USD value in millions with two decimals.
pub fn format_millions(value_usd: f64) -> String {
    format!("${:.2}M", value_usd / 1e6)
}

/// `$2.18` style: card price.
pub fn format_price(price_usd: f64) -> String {
    format!("${price_usd:.2}")
}

/// `$0.0250` style: table price, four decimals so sub-cent prices stay visible.
pub fn format_unit_price(price_usd: f64) -> String {
    format!("${price_usd:.4}")
}

pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
