use std::process::ExitCode;

use log::SetLoggerError;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod cli;
mod commands;
mod config;
mod source;

fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}

fn main() -> ExitCode {
    let cli = cli::parse();

    // the commands still run without logging
    if let Err(err) = init_logger(cli.log_level.filter()) {
        eprintln!("warning: logging disabled: {err}");
    }

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            for cause in e.chain().skip(1) {
                eprintln!("  caused by: {cause}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_logger_is_reported() {
        // only the first logger of a process can be installed
        let _ = init_logger(LevelFilter::Warn);
        let second = init_logger(LevelFilter::Warn);
        assert!(second.is_err());
    }
}
