//! Dashboard stylesheet (dark theme).

pub const STYLES: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            min-height: 100vh;
            background: #111827;
            color: #ffffff;
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
        }
        header {
            background: #111827;
            padding: 1rem;
            display: flex;
            justify-content: space-between;
            align-items: center;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
        }
        header h1 { font-size: 1.5rem; font-weight: 700; color: #60a5fa; }
        header p { font-size: 0.875rem; color: #9ca3af; }
        .refreshed { font-size: 0.75rem; color: #6b7280; text-align: right; }
        .cards {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
            gap: 1rem;
            padding: 1.5rem;
        }
        .card {
            background: #1f2937;
            padding: 1.5rem;
            border-radius: 0.5rem;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.2);
        }
        .card.accent { border-left: 4px solid #22c55e; }
        .card h3 {
            font-size: 0.875rem;
            color: #9ca3af;
            text-transform: uppercase;
            letter-spacing: 0.05em;
        }
        .card .value { font-size: 1.875rem; font-weight: 700; margin-top: 0.25rem; }
        .card .caption { font-size: 0.75rem; color: #6b7280; margin-top: 0.25rem; }
        .white { color: #ffffff; }
        .blue { color: #60a5fa; }
        .green { color: #4ade80; }
        .amber { color: #fbbf24; }
        section { padding: 1.5rem; }
        section h2 { font-size: 1.25rem; font-weight: 600; margin-bottom: 1rem; }
        .table-wrap { background: #1f2937; border-radius: 0.5rem; overflow: hidden; }
        table { width: 100%; border-collapse: collapse; }
        thead tr { background: #374151; }
        th { padding: 1rem; text-align: left; font-size: 0.875rem; font-weight: 600; color: #d1d5db; }
        td { padding: 1rem; color: #d1d5db; border-top: 1px solid #374151; }
        td.symbol { font-weight: 500; color: #ffffff; }
        td.location { font-size: 0.875rem; color: #9ca3af; }
        tbody tr:hover { background: #374151; }
        .charts {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(360px, 1fr));
            gap: 1.5rem;
            padding: 1.5rem;
        }
        .chart h3 { margin-bottom: 1rem; font-weight: 600; }
        .chart svg { width: 100%; height: auto; }
        .legend { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1rem; font-size: 0.875rem; }
        .legend span.swatch {
            display: inline-block;
            width: 0.75rem;
            height: 0.75rem;
            border-radius: 2px;
            margin-right: 0.35rem;
        }
        footer { padding: 1rem; text-align: center; color: #6b7280; font-size: 0.875rem; }
        .loading {
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            font-size: 1.25rem;
        }
"#;
