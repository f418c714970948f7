use crate::models::asset::AssetEntry;
use crate::models::protocol::ProtocolEntry;

use super::format::{escape_html, format_millions, format_unit_price};

/// One row per asset, in snapshot order.
pub fn render_breakdown_table(assets: &[AssetEntry]) -> String {
    let rows: String = assets
        .iter()
        .map(|asset| {
            format!(
                r#"
                    <tr>
                        <td class="symbol">{}</td>
                        <td>{}</td>
                        <td>{}</td>
                        <td class="location">{}</td>
                    </tr>"#,
                escape_html(&asset.symbol),
                format_millions(asset.locked_value_usd),
                format_unit_price(asset.unit_price_usd),
                escape_html(&asset.location),
            )
        })
        .collect();

    format!(
        r#"
    <section>
        <h2>Asset Breakdown</h2>
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        <th>Asset</th>
                        <th>TVL (USD)</th>
                        <th>Price (USD)</th>
                        <th>Location</th>
                    </tr>
                </thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>
    </section>"#
    )
}

/// Per-protocol locked value. Renders nothing when there are no protocols.
pub fn render_protocol_list(protocols: &[ProtocolEntry]) -> String {
    if protocols.is_empty() {
        return String::new();
    }

    let rows: String = protocols
        .iter()
        .map(|p| {
            format!(
                r#"
                    <tr>
                        <td class="symbol">{}</td>
                        <td>{}</td>
                    </tr>"#,
                escape_html(&p.name),
                format_millions(p.locked_value_usd),
            )
        })
        .collect();

    format!(
        r#"
    <section>
        <h2>Protocols</h2>
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        <th>Protocol</th>
                        <th>TVL (USD)</th>
                    </tr>
                </thead>
                <tbody>{rows}
                </tbody>
            </table>
        </div>
    </section>"#
    )
}
