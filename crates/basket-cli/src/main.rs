//! Basket CLI - Market-basket mining from the command line.

use basket_cli::commands;
use basket_cli::config::OutputFormat;
use basket_cli::interactive;
use basket_cli::{Cli, CliError, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    // Parse CLI arguments
    let cli = Cli::parse();
    let error_formatter = Formatter::new(OutputFormat::Plain, !cli.no_color);

    if let Err(e) = run(cli) {
        match e {
            CliError::Cancelled => eprintln!("\n{}", e),
            _ => eprintln!("{}", error_formatter.error(&format!("Error: {}", e))),
        }
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr, filtered by `BASKET_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("BASKET_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> basket_cli::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };

    // Config commands run before loading so a broken file can still be located or replaced
    let command = match cli.command {
        Some(Command::Config(args)) => {
            let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);
            let formatter = Formatter::new(format, !cli.no_color);
            return commands::execute_config(args, &config_path, &formatter);
        }
        command => command,
    };

    let config = Config::load_from(&config_path)?;

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match command {
        None | Some(Command::Interactive) => interactive::run_interactive(&config, &formatter),
        Some(Command::Mine(args)) => commands::execute_mine(args, &config, &formatter),
        Some(Command::Datasets) => commands::execute_datasets(&config, &formatter),
        Some(Command::Config(args)) => commands::execute_config(args, &config_path, &formatter),
    }
}
