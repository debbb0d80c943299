//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `url_domain` library that handles:
//! - Environment variable loading (.env file)
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use url_domain::config::{Cli, Command};
use url_domain::initialization::{init_logger_with, load_dotenv};
use url_domain::sql::{domain_expression, quote_identifier};
use url_domain::{backfill_domains, run_pipeline, BackfillOptions, PipelineConfig};

#[tokio::main]
async fn main() {
    load_dotenv();

    let cli = Cli::parse();

    if let Err(e) = start(cli).await {
        eprintln!("{}", error_message(&e));
        process::exit(1);
    }
}

async fn start(cli: Cli) -> Result<()> {
    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;
    run(cli.command).await
}

fn error_message(e: &anyhow::Error) -> String {
    format!("url_domain error: {:#}", e)
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Extract(cmd) => {
            let config = PipelineConfig::from(cmd);
            let report = tokio::task::spawn_blocking(move || run_pipeline(&config))
                .await
                .context("Pipeline task panicked")??;
            log::info!(
                "Extracted {} domain{} ({} null) in {:.2}s",
                report.total_rows - report.null_rows,
                if report.total_rows - report.null_rows == 1 { "" } else { "s" },
                report.null_rows,
                report.elapsed_seconds
            );
        }
        Command::Sql(cmd) => {
            let expr = if cmd.quote {
                quote_identifier(&cmd.expr)
            } else {
                cmd.expr
            };
            println!("{}", domain_expression(&expr, cmd.dialect));
        }
        Command::Backfill(cmd) => {
            let opts = BackfillOptions::from(cmd);
            let updated = backfill_domains(&opts).await?;
            println!(
                "✅ Updated {} row{} in {}",
                updated,
                if updated == 1 { "" } else { "s" },
                opts.db_path.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::LevelFilter;
    use url_domain::LogFormat;

    #[tokio::test]
    async fn test_logger_failure_reported_like_other_errors() {
        // A logger is already installed, so start() must fail on init.
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        let cli = Cli::parse_from(["url_domain", "sql", "url"]);

        let err = start(cli).await.expect_err("second logger init should fail");
        let message = error_message(&err);
        assert!(message.starts_with("url_domain error: Failed to initialize logger: "));
    }
}
