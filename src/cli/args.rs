use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "caption-editor-tui")]
#[command(version = "0.1.0")]
#[command(about = "Add, time and preview captions for a video", long_about = None)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Subcommand to execute (if none provided, launches TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom config file
    #[arg(long, global = true, value_name = "FILE", env = "CAPTION_EDITOR_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the TUI editor, optionally with a video already loaded
    Edit(EditArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Convert between HH:MM:SS and seconds
    Time(TimeArgs),
}

#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Video URL to open
    #[arg(short = 'u', long, value_name = "URL")]
    pub url: Option<String>,

    /// Video length as HH:MM:SS (unknown if omitted)
    #[arg(short = 'd', long, value_name = "HH:MM:SS", requires = "url")]
    pub duration: Option<String>,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Initialize default configuration file
    #[arg(long)]
    pub init: bool,

    /// Show configuration file path
    #[arg(long)]
    pub path: bool,
}

#[derive(Parser, Debug)]
pub struct TimeArgs {
    /// `HH:MM:SS` to convert to seconds, or whole seconds to format
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}
