use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sobject_counts_core::constants::{DEFAULT_API_VERSION, DEFAULT_HTTP_TIMEOUT_SECS};
use sobject_counts_core::env_config::{env_non_empty, env_parse_with_default};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "sobject-counts")]
#[command(about = "Display record counts for the specified sObject types", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display record counts, including zero for objects with no records
    Display {
        /// Comma-separated list of API names of standard or custom objects
        #[arg(short = 's', long, required = true, value_delimiter = ',')]
        sobjecttype: Vec<String>,
        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        org: OrgArgs,
    },
}

#[derive(Args)]
pub(crate) struct OrgArgs {
    /// Org instance URL [env: SF_INSTANCE_URL]
    #[arg(long)]
    pub instance_url: Option<String>,
    /// OAuth access token or session id [env: SF_ACCESS_TOKEN]
    #[arg(long)]
    pub access_token: Option<String>,
    /// REST API version [env: SF_API_VERSION]
    #[arg(long)]
    pub api_version: Option<String>,
}

pub(crate) fn get_instance_url(flag: Option<String>) -> Result<String> {
    flag.or_else(|| env_non_empty("SF_INSTANCE_URL"))
        .ok_or_else(|| anyhow::anyhow!("--instance-url or SF_INSTANCE_URL must be set"))
}

pub(crate) fn get_access_token(flag: Option<String>) -> Result<String> {
    flag.or_else(|| env_non_empty("SF_ACCESS_TOKEN"))
        .ok_or_else(|| anyhow::anyhow!("--access-token or SF_ACCESS_TOKEN must be set"))
}

pub(crate) fn get_api_version(flag: Option<String>) -> String {
    flag.or_else(|| env_non_empty("SF_API_VERSION"))
        .unwrap_or_else(|| DEFAULT_API_VERSION.to_owned())
}

pub(crate) fn get_http_timeout() -> Duration {
    Duration::from_secs(env_parse_with_default("SF_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Display { sobjecttype, json, org } => {
            commands::display::run(sobjecttype, json, org).await?;
        },
    }

    Ok(())
}
