//! CLI command implementations

use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

use crate::cli::args::{ConfigCommand, GenerateArgs};
use crate::config::Settings;
use crate::export::{output_paths, read_text, with_pdf_extension, write_pdf, write_text};
use crate::llm::build_provider;
use crate::notes::{generate_meeting_notes, MeetingMetadata, SectionName};

/// Generate notes from a transcript and write the PDF and text files.
pub async fn generate_notes(settings: &Settings, args: GenerateArgs) -> Result<()> {
    let settings = settings.clone().with_api_key(args.api_key.as_deref());

    // Fail on a missing credential before touching the transcript or network.
    let provider = build_provider(&settings)?;

    let transcript = load_transcript(&args.transcript)?;
    if transcript.trim().is_empty() {
        anyhow::bail!("Transcript is empty");
    }

    let metadata = MeetingMetadata {
        project_title: args.project_title,
        client_name: args.client_name,
        meeting_date: args.meeting_date,
        attendees: args.attendees,
        contact_info: args.contact_info,
    };

    let notes = generate_meeting_notes(provider.as_ref(), &transcript, &metadata).await;

    let paths = output_paths(
        args.output.as_deref(),
        &settings.general.output_dir,
        Local::now(),
    );
    ensure_parent(&paths.pdf)?;

    write_pdf(&notes, &paths.pdf, &settings.document)
        .with_context(|| format!("Failed to write PDF: {}", paths.pdf.display()))?;
    write_text(&notes, &paths.text)
        .with_context(|| format!("Failed to write text file: {}", paths.text.display()))?;

    println!("Meeting notes generated successfully!");
    println!("PDF saved as: {}", paths.pdf.display());
    println!("Text version saved as: {}", paths.text.display());

    if args.preview > 0 {
        print_preview(notes.as_str(), args.preview);
    }

    Ok(())
}

/// Re-render an existing notes text file as PDF.
pub fn render_notes_file(settings: &Settings, notes: &Path, output: Option<PathBuf>) -> Result<()> {
    let rendered = read_text(notes)
        .with_context(|| format!("Failed to read notes file: {}", notes.display()))?;

    let pdf_path = match output {
        Some(path) => with_pdf_extension(&path),
        None => notes.with_extension("pdf"),
    };
    if pdf_path == notes {
        anyhow::bail!(
            "Refusing to overwrite the notes file with its PDF: {}",
            notes.display()
        );
    }
    ensure_parent(&pdf_path)?;

    write_pdf(&rendered, &pdf_path, &settings.document)
        .with_context(|| format!("Failed to write PDF: {}", pdf_path.display()))?;

    println!("PDF saved as: {}", pdf_path.display());
    Ok(())
}

/// Print the section labels in rendering order.
pub fn list_sections() {
    for (i, section) in SectionName::ALL.iter().enumerate() {
        println!("{:>2}. {:<40} {}", i + 1, section.label(), section.description());
    }
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "<redacted>".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

// Helper functions

/// Treat the argument as a file path if such a file exists, else as literal
/// transcript text.
fn load_transcript(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        tracing::info!("Reading transcript from: {}", path.display());
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read transcript file: {}", path.display()));
    }
    Ok(arg.to_string())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}

fn print_preview(notes: &str, max_lines: usize) {
    let lines: Vec<&str> = notes.lines().collect();

    println!();
    println!("{}", "=".repeat(60));
    for line in lines.iter().take(max_lines) {
        println!("{}", line);
    }
    if lines.len() > max_lines {
        println!("...");
    }
    println!("{}", "=".repeat(60));
}
