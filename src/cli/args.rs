//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// meeting-notes - Convert meeting transcripts to structured notes
#[derive(Parser, Debug)]
#[command(name = "meeting-notes")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate structured meeting notes (PDF + text) from a transcript
    Generate(GenerateArgs),

    /// Render an existing notes text file to PDF without calling the model
    Render {
        /// Path to a notes text file produced by `generate`
        notes: PathBuf,

        /// Output PDF path (defaults to the notes path with a .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the note sections in rendering order
    Sections,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Meeting transcript text or path to a transcript file
    pub transcript: String,

    /// Project title
    #[arg(long)]
    pub project_title: Option<String>,

    /// Client name
    #[arg(long)]
    pub client_name: Option<String>,

    /// Meeting date (defaults to today, e.g. "Oct 15, 2024")
    #[arg(long)]
    pub meeting_date: Option<String>,

    /// Meeting attendees
    #[arg(long)]
    pub attendees: Option<String>,

    /// Contact information line
    #[arg(long)]
    pub contact_info: Option<String>,

    /// Output PDF filename (default: meeting_notes_<timestamp>.pdf)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Gemini API key (or set GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Print the first N lines of the generated notes
    #[arg(long, default_value = "0")]
    pub preview: usize,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
