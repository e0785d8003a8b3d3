mod cli;
mod context;
mod handlers;
mod host;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("POWERUP_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    let ctx = CliContext::load(&cli);

    match cli.command {
        Commands::Ide(ide_cmd) => {
            handlers::ide::handle(&ctx, ide_cmd.action).await?;
        }
        Commands::Pref(pref_cmd) => {
            handlers::pref::handle(&ctx, pref_cmd.action).await?;
        }
        Commands::Settings(args) => {
            handlers::settings::handle(&ctx, args).await?;
        }
        Commands::Launch(args) => {
            handlers::launch::handle(&ctx, args).await?;
        }
        Commands::Capabilities { name } => {
            handlers::capabilities::handle(name).await?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "powerup", &mut std::io::stdout());
        }
    }

    Ok(())
}
