//! Rahnuma university guide CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use rahnuma_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use rahnuma_cli::commands::{
    load_catalog, run_analytics, run_fees, run_overview, run_search,
};
use rahnuma_cli::logging::{LogConfig, LogFormat, init_logging};
use rahnuma_cli::summary::{
    print_analytics, print_fee_quote, print_overview, print_search, print_universities,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let catalog = load_catalog(cli.data_dir.as_deref())?;
    match &cli.command {
        Command::Overview(args) => {
            let result = run_overview(&catalog, args)?;
            print_overview(&result);
        }
        Command::Search(args) => {
            let result = run_search(&catalog, &args.filter)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_search(&result);
            }
        }
        Command::Fees(args) => {
            let quote = run_fees(&catalog, args)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print_fee_quote(&quote);
            }
        }
        Command::Universities => print_universities(catalog.universities()),
        Command::Analytics(args) => {
            let report = run_analytics(&catalog);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_analytics(&report);
            }
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
