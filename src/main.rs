//! laspad-client - command client for the laspad workshop server
//!
//! CLI binary that runs laspad commands on a local laspad server and shows
//! their log as it arrives.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use laspad_client::branches::BranchSplit;
use laspad_client::config::{
    parse_server, parse_timeout, ClientConfig, BRANCH_SPLIT_ENV, SERVER_ENV, TIMEOUT_ENV,
};
use laspad_client::session::{Console, ControlSurface, Session};
use laspad_client::transport::HttpTransport;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "laspad-client")]
#[command(about = "Run laspad commands on a laspad server")]
#[command(version)]
struct Cli {
    /// Server base URL
    #[arg(long, global = true, env = SERVER_ENV, value_parser = parse_server)]
    server: Option<url::Url>,

    /// How the branch list is split: lines, chars or delim:<char>
    #[arg(long, global = true, env = BRANCH_SPLIT_ENV)]
    branch_split: Option<BranchSplit>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true, env = TIMEOUT_ENV, value_parser = parse_timeout)]
    timeout: Option<std::time::Duration>,

    /// Print events as JSON lines
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Update dependencies
    Update,

    /// Add a workshop dependency
    Need {
        /// Mod ID of the dependency (prompted when omitted)
        mod_id: Option<String>,
    },

    /// Launch Natural Selection 2
    Ns2,

    /// Launch the editor
    Editor,

    /// List publishable branches
    Branches,

    /// Publish a branch to the workshop
    Publish {
        /// Branch to publish (selected from the server's list when omitted)
        branch: Option<String>,
    },

    /// Pick a project directory on the server
    Open {
        /// Create a project without asking when the directory has none
        #[arg(long)]
        create: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "laspad_client=debug",
        _ => "laspad_client=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Flags win over the environment
    let mut config = ClientConfig::from_env()?;
    if let Some(server) = cli.server {
        config.server = server;
    }
    if let Some(split) = cli.branch_split {
        config.branch_split = split;
    }
    if cli.timeout.is_some() {
        config.request_timeout = cli.timeout;
    }

    let interactive = cli.command.is_none()
        || matches!(
            cli.command,
            Some(
                Commands::Need { mod_id: None }
                    | Commands::Publish { branch: None }
                    | Commands::Open { create: false }
            )
        );

    let transport = Arc::new(HttpTransport::new(
        config.server.clone(),
        config.request_timeout,
    )?);
    let console: Arc<dyn Console> = if cli.json {
        Arc::new(cli::JsonConsole)
    } else if interactive {
        Arc::new(cli::TerminalConsole::interactive())
    } else {
        Arc::new(cli::TerminalConsole::batch())
    };
    let surface = Arc::new(cli::TerminalSurface::new(interactive && !cli.json));

    let mut session = Session::new(
        transport,
        console,
        Arc::clone(&surface) as Arc<dyn ControlSurface>,
        config.session_options(),
    );

    let succeeded = match cli.command {
        None => {
            cli::run_interactive(&mut session, &surface).await?;
            true
        }
        Some(Commands::Update) => {
            cli::run_simple(&mut session, cli::SimpleCommand::Update).await?
        }
        Some(Commands::Ns2) => cli::run_simple(&mut session, cli::SimpleCommand::Ns2).await?,
        Some(Commands::Editor) => {
            cli::run_simple(&mut session, cli::SimpleCommand::Editor).await?
        }
        Some(Commands::Need { mod_id }) => {
            cli::run_need(&mut session, &*surface, mod_id.as_deref()).await?
        }
        Some(Commands::Branches) => cli::run_branches(&mut session).await?,
        Some(Commands::Publish { branch }) => {
            cli::run_publish(&mut session, branch.as_deref(), interactive && !cli.json).await?
        }
        Some(Commands::Open { create }) => {
            cli::run_open(&mut session, interactive && !cli.json, create).await?
        }
    };

    if !succeeded {
        bail!("command failed");
    }
    Ok(())
}
