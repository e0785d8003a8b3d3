use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "powerup")]
#[command(about = "Start work on a task-board card in your IDE", long_about = None)]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("POWERUP_GIT_HASH"), ")")
)]
pub struct Cli {
    /// Preference store file (or set POWERUP_STORE env var)
    #[arg(long, global = true, value_name = "FILE", env = "POWERUP_STORE")]
    pub store: Option<PathBuf>,

    /// Config file (or set POWERUP_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "POWERUP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Supported IDEs
    Ide(IdeCommand),
    /// Board IDE preference
    Pref(PrefCommand),
    /// Open the board settings form
    Settings(SettingsArgs),
    /// Start work on a card in the board's IDE
    Launch(LaunchArgs),
    /// List or invoke host capabilities
    Capabilities {
        /// Capability name, e.g. card-buttons or show-settings
        name: Option<String>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// IDE commands
#[derive(Args)]
pub struct IdeCommand {
    #[command(subcommand)]
    pub action: IdeAction,
}

#[derive(Subcommand)]
pub enum IdeAction {
    /// List the IDE catalogue
    List,
    /// Get one IDE by moniker
    Get {
        #[arg(long)]
        moniker: String,
    },
}

// Preference commands
#[derive(Args)]
pub struct PrefCommand {
    #[command(subcommand)]
    pub action: PrefAction,
}

#[derive(Subcommand)]
pub enum PrefAction {
    /// Show the stored IDE for a board
    Get {
        #[arg(long)]
        board: String,
    },
    /// Store an IDE moniker for a board
    Set {
        #[arg(long)]
        board: String,
        #[arg(long)]
        moniker: String,
    },
}

#[derive(Args)]
pub struct SettingsArgs {
    #[arg(long)]
    pub board: String,
    /// Select this IDE and save
    #[arg(long)]
    pub select: Option<String>,
}

#[derive(Args)]
pub struct LaunchArgs {
    #[arg(long)]
    pub board: String,
    /// Board export (or card) JSON file (or set POWERUP_CARDS env var)
    #[arg(long, value_name = "FILE", env = "POWERUP_CARDS")]
    pub cards: PathBuf,
    /// Card id or short link
    #[arg(long)]
    pub card: String,
    /// Hand the link to the system URL opener instead of only printing it
    #[arg(long)]
    pub open: bool,
}
