use atm::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr at Warn unless RUST_LOG says otherwise, leaving stdout to the display
pub fn configure_app() -> Result {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    return Ok(());
}
