mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;

#[derive(Parser)]
#[command(name = "app-updater")]
#[command(about = "Keep a local application directory in step with a published manifest")]
struct Cli {
    /// Read settings from this file instead of ~/.config/app-updater/updater.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report whether a newer manifest version is published
    Check(TargetArgs),
    /// Download every file of a newer manifest into the local directory
    Update(TargetArgs),
}

#[derive(Args)]
struct TargetArgs {
    /// Repository API root, e.g. https://api.github.com/repos/owner/repo
    #[arg(long)]
    repo_url: Option<String>,
    /// Manifest path inside the repository and the local directory
    #[arg(long)]
    manifest_path: Option<String>,
    /// Directory holding the installed files
    #[arg(long)]
    local_dir: Option<PathBuf>,
    /// Branch to read from
    #[arg(long)]
    branch: Option<String>,
    /// Bearer token for private repositories (defaults to $GITHUB_TOKEN)
    #[arg(long)]
    token: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl TargetArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            repo_url: self.repo_url.clone(),
            manifest_path: self.manifest_path.clone(),
            local_dir: self.local_dir.clone(),
            branch: self.branch.clone(),
            token: self.token.clone(),
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let app_config = config::load_config(cli.config.as_deref());

    match cli.command {
        Command::Check(args) => {
            let request = config::build_request(app_config, args.overrides())?;
            commands::check::run(&request, args.json).await
        }
        Command::Update(args) => {
            let request = config::build_request(app_config, args.overrides())?;
            commands::update::run(&request, args.json).await
        }
    }
}
