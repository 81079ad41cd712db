use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use taskhub::rest;
use taskhub::state::AppState;

#[derive(Parser)]
#[command(name = "taskhub")]
#[command(about = "In-memory task and group manager served over HTTP", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Port to listen on
    #[arg(long, env = "TASKHUB_PORT", default_value_t = 1323)]
    port: u16,

    /// Bind address (use 0.0.0.0 to accept LAN connections)
    #[arg(long, env = "TASKHUB_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Log filter (tracing EnvFilter syntax, e.g. "info" or "taskhub=debug")
    #[arg(long, env = "TASKHUB_LOG", default_value = "info")]
    log: String,
}

#[derive(Subcommand)]
enum Command {
    /// Start the server (default when no subcommand is given)
    Serve,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Completions { shell }) = &cli.command {
        let shell_enum = match shell.as_str() {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            "fish" => Shell::Fish,
            "powershell" => Shell::PowerShell,
            "elvish" => Shell::Elvish,
            _ => anyhow::bail!("unsupported shell: {shell}"),
        };
        let mut cmd = Cli::command();
        generate(shell_enum, &mut cmd, "taskhub", &mut io::stdout());
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(cli.log)
        .compact()
        .init();

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("invalid bind address")?;
    let state = Arc::new(AppState::seeded());
    rest::serve(addr, state).await
}
