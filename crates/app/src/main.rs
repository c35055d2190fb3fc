use anyhow::Context;

use eventboard_app::{AppConfig, EventBoard, render::render};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    eventboard_observability::tracing::init(config.log_format);

    let board = EventBoard::from_config(&config).context("failed to load seed dataset")?;
    tracing::info!(today = %board.today(), "eventboard ready");

    // eventboard [PATH], e.g. `eventboard /event/3`
    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    print!("{}", render(&board.open(&path)));
    Ok(())
}
