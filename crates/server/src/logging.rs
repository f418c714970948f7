use anyhow::Result;
use std::str::FromStr;
use tracing::Level;

/// Install the global `fmt` subscriber at the given level ("info", "debug", ...).
pub fn init(log_level: &str) -> Result<()> {
    let level = Level::from_str(log_level)
        .map_err(|_| anyhow::anyhow!("invalid log level '{log_level}'"))?;

    let subscriber = tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_max_level(level)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
