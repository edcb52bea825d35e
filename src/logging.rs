use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {M} - {m}{n}";

/// Sets up log4rs with a console appender and, if a path is given, a file appender
///
/// # Arguments
///
/// * 'log_path' - path to log file, empty for console only
/// * 'log_level' - one of off, error, warn, info, debug or trace, empty for info
pub fn setup_logger(log_path: &str, log_level: &str) -> Result<(), ConfigError> {
    let level = parse_level(log_level)?;

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if !log_path.is_empty() {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(log_path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = builder.build(root.build(level))?;
    log4rs::init_config(config)?;

    Ok(())
}

fn parse_level(log_level: &str) -> Result<LevelFilter, ConfigError> {
    if log_level.is_empty() {
        return Ok(LevelFilter::Info);
    }
    log_level
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError(format!("unknown log level '{}'", log_level)))
}
