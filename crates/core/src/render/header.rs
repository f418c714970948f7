use chrono::{DateTime, Utc};

use super::format::escape_html;

/// Page header: title, static data caption and, once known, the last refresh time.
pub fn render_header(title: &str, data_as_of: &str, refreshed_at: Option<DateTime<Utc>>) -> String {
    let refreshed = refreshed_at
        .map(|at| {
            format!(
                r#"
            <p class="refreshed">Refreshed {}</p>"#,
                at.format("%Y-%m-%d %H:%M:%S UTC")
            )
        })
        .unwrap_or_default();

    format!(
        r#"
    <header>
        <h1>{title}</h1>
        <div>
            <p>{data_as_of}</p>{refreshed}
        </div>
    </header>"#,
        title = escape_html(title),
        data_as_of = escape_html(data_as_of),
    )
}

pub fn render_footer(text: &str) -> String {
    format!(
        r#"
    <footer>{}</footer>"#,
        escape_html(text)
    )
}
