use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::commands::{self, CallOptions};
use crate::config::Settings;
use crate::logging;

/// Call any Asana REST endpoint by name
#[derive(Debug, Parser)]
#[command(name = "asana-cli", version)]
#[command(about = "Call any Asana REST endpoint by name")]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every known endpoint
    Endpoints {
        /// Print tool definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the parameters of one endpoint
    Describe {
        /// Endpoint name, e.g. get_a_task
        name: String,
    },

    /// Invoke an endpoint and print the JSON response
    Call {
        /// Endpoint name, e.g. get_a_task
        name: String,

        /// Path or query argument as key=value (repeatable)
        #[arg(short = 'a', long = "arg", value_parser = parse_key_value)]
        args: Vec<(String, String)>,

        /// Request payload, sent as {"data": <DATA>}
        #[arg(long)]
        data: Option<String>,

        /// All arguments as one JSON object
        #[arg(long = "args")]
        args_json: Option<String>,
    },
}

/// Parse `key=value`; the value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, _)) if key.is_empty() => Err(format!("missing key in `{raw}`")),
        Some((key, value)) => Ok((key.to_string(), value.to_string())),
        None => Err(format!("expected key=value, got `{raw}`")),
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?.with_env(|name| std::env::var(name).ok());
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }

    let level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    logging::init(level)?;
    debug!(base_url = %settings.base_url, "configuration loaded");

    match cli.command {
        Command::Endpoints { json } => commands::endpoints(json),
        Command::Describe { name } => commands::describe(&name),
        Command::Call {
            name,
            args,
            data,
            args_json,
        } => commands::call(
            &settings,
            &name,
            CallOptions {
                args,
                data,
                args_json,
            },
        ),
    }
}
