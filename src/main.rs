use std::sync::Arc;

use anyhow::{Context, Result};
use lockerlog::command::command_parser::{CommandParser, help_topic};
use lockerlog::config::Config;
use lockerlog::core::cli::CliArgs;
use lockerlog::logging::{LogTarget, Logger};

fn load_config(cli: &CliArgs) -> Result<Config> {
    match &cli.config_path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Could not load configuration from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn run(cli: &CliArgs, logger: &Logger) -> Result<()> {
    let config = Arc::new(load_config(cli)?);
    if cli.show_config {
        println!("{}", config.rows());
        if cli.input.is_empty() {
            return Ok(());
        }
    }

    let parser = CommandParser::new(config, logger.clone());
    if let Some(topic) = help_topic(&cli.input) {
        println!("{}", parser.help(topic)?);
        return Ok(());
    }

    let command = parser.parse(&cli.input)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&command)?);
    } else {
        println!("{command}");
    }
    Ok(())
}

fn main() {
    let cli = match CliArgs::from_env() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let logger = Logger::new("main");
    logger.set_log_dir(&cli.logs_dir);
    logger.set_file_logging_enabled(cli.file_logging);

    if let Err(err) = run(&cli, &logger) {
        logger.error(format!("{err:#}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
