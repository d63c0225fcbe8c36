//! Logging initialization
//!
//! Console output always, plus a log file when `LOG_FILE_PATH` is configured.

use simplelog::*;
use std::fs::File;

use crate::core::error::BotResult;

/// Initialize logger for console and optional file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file, `None` logs to the console only
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(BotError)` - Log file could not be created or a logger is already set
pub fn init_logger(log_file_path: Option<&str>) -> BotResult<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file_path {
        let log_file = File::create(path)?;
        loggers.push(WriteLogger::new(LevelFilter::Info, Config::default(), log_file));
    }

    CombinedLogger::init(loggers)?;

    Ok(())
}

/// Installs a panic hook that routes panic details through the logger
pub fn install_panic_logger() {
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
        if let Some(msg) = panic_info.payload().downcast_ref::<&str>() {
            log::error!("Panic message: {}", msg);
        }
    }));
}
