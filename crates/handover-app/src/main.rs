//! Handover marker export - command-line front end
//!
//! Reads comment rows as stored by the review app and writes a marker file
//! for an editing tool.

use anyhow::{Context, Result};
use clap::Parser;
use handover_export::{DirectorySink, ExportFormat, ExportSink};
use handover_markers::{
    markers_from_comments, CommentRow, ExportSettings, FrameRatePreset, DEFAULT_SEQUENCE_NAME,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the marker export tool.
#[derive(Parser, Debug)]
#[command(name = "handover-export")]
#[command(version)]
#[command(about = "Export review comments as timeline markers")]
#[command(long_about = "Export review comments as timeline markers.\n\n\
    Reads a JSON array of comment rows ({\"id\", \"ptime\", \"body\", \"user_name\"}) \n\
    and writes a marker file for Premiere Pro, DaVinci Resolve or any CSV reader.\n\n\
    EXAMPLES:\n    \
    handover-export -c comments.json\n    \
    handover-export -c comments.json -f resolve --fps 24 --file-stem interview\n    \
    cat comments.json | handover-export -c - --fps '59.94 (DF)' -o ./exports")]
struct Args {
    /// Comment rows as a JSON array ("-" reads stdin)
    #[arg(short, long)]
    comments: PathBuf,

    /// Target format: premiere, resolve or generic
    #[arg(short, long, default_value = "premiere")]
    format: ExportFormat,

    /// Frame rate preset: 23.976, 24, 25, "29.97 (DF)", "29.97 (NDF)", 30, "59.94 (DF)", 60
    #[arg(long, default_value = "29.97 (DF)")]
    fps: String,

    /// Sequence name written into the file (defaults to the file stem)
    #[arg(long)]
    sequence_name: Option<String>,

    /// Output file name stem, usually the video file name
    #[arg(long, default_value = "")]
    file_stem: String,

    /// Output directory (defaults to the download directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn settings(&self) -> Result<ExportSettings> {
        let preset = FrameRatePreset::parse(&self.fps)?;
        let sequence_name = match &self.sequence_name {
            Some(name) => name.clone(),
            None if !self.file_stem.is_empty() => self.file_stem.clone(),
            None => DEFAULT_SEQUENCE_NAME.to_string(),
        };
        Ok(ExportSettings::from_preset(preset, sequence_name))
    }

    fn sink(&self) -> DirectorySink {
        match &self.output_dir {
            Some(dir) => DirectorySink::new(dir),
            None => DirectorySink::downloads(),
        }
    }
}

fn read_comments(path: &Path) -> Result<Vec<CommentRow>> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read comments from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read comments from {}", path.display()))?
    };
    serde_json::from_str(&text).context("Comments must be a JSON array of comment rows")
}

fn run(args: &Args) -> Result<PathBuf> {
    let settings = args.settings()?;
    let rows = read_comments(&args.comments)?;
    let markers = markers_from_comments(&rows);

    let unpositioned = markers.iter().filter(|m| !m.is_positioned()).count();
    if unpositioned > 0 {
        warn!(
            "{} of {} comments have no usable time and will export with placeholder timecode",
            unpositioned,
            markers.len()
        );
    }

    info!(
        "Exporting {} markers as {} at {}",
        markers.len(),
        args.format.display_name(),
        args.fps
    );

    let file = args.format.export(&markers, &settings, &args.file_stem)?;
    let path = args.sink().deliver(&file)?;
    Ok(path)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging on stderr so stdout carries only the output path
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let path = run(&args)?;
    println!("{}", path.display());
    Ok(())
}
