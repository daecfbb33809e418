use clap::{Parser, Subcommand};
use oui_data_domain::CliOverrides;
use std::process::ExitCode;
use tracing::error;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "oui-data")]
#[command(version)]
#[command(about = "IEEE OUI to organization lookup backed by a bundled dataset")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Read oui.json from this directory instead of the embedded copy
    #[arg(long, value_name = "DIR", global = true)]
    resource_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerate oui.json from the IEEE registry
    Generate {
        /// Registry CSV URL
        #[arg(long)]
        url: Option<String>,

        /// Use a local registry CSV instead of downloading
        #[arg(short = 'i', long, value_name = "CSV_FILE", conflicts_with = "url")]
        input: Option<String>,

        /// Destination of the generated dataset
        #[arg(short = 'o', long, value_name = "PATH")]
        output: Option<String>,
    },

    /// Print every entry, sorted by OUI
    List {
        /// Emit a JSON array of {id, companyInfo}
        #[arg(long)]
        json: bool,
    },

    /// Look up the organization registered for an OUI (exact match)
    Lookup {
        /// Six hex characters, e.g. B827EB
        oui: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let (url, output) = match &cli.command {
        Command::Generate { url, output, .. } => (url.clone(), output.clone()),
        _ => (None, None),
    };

    let cli_overrides = CliOverrides {
        resource_dir: cli.resource_dir.clone(),
        feed_url: url,
        output_path: output,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let result = match cli.command {
        Command::Generate { input, .. } => commands::generate::run(&config, input).await,
        Command::List { json } => commands::list::run(&config, json).await,
        Command::Lookup { oui } => commands::lookup::run(&config, &oui).await,
    };

    match result {
        Ok(code) => Ok(code),
        Err(e) => {
            error!(error = %e, "Command failed");
            Err(e)
        }
    }
}
