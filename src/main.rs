//! meeting-notes - Meeting transcript to structured notes
//!
//! Entry point for the meeting-notes CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meeting_notes::cli::{Cli, Commands};
use meeting_notes::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            meeting_notes::cli::completions::print(shell);
        }
        Commands::Sections => {
            meeting_notes::cli::commands::list_sections();
        }
        command => {
            // Load configuration only for runtime commands; it also sets the log level.
            let settings = Settings::load()?;
            init_logging(settings.log_filter(cli.verbose));

            match command {
                Commands::Generate(args) => {
                    meeting_notes::cli::commands::generate_notes(&settings, args).await?;
                }
                Commands::Render { notes, output } => {
                    meeting_notes::cli::commands::render_notes_file(&settings, &notes, output)?;
                }
                Commands::Config(config_cmd) => {
                    meeting_notes::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } | Commands::Sections => unreachable!(),
            }
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `default_level`.
fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
