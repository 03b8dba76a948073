use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use crate::core::duration::{fmt_duration, probe_duration_ms, total_duration_ms};
use crate::core::types::AssemblyPlan;
use crate::core::{BookRequest, OrderMode, prepare, write_book};

/// Join audiobook MP3 parts into one file, ordered by their disc/track tags.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Join(JoinCommand),
    Gui(GuiCommand),
}

/// Joins the given MP3 files into OUTPUT.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct JoinCommand {
    /// Input MP3 files
    #[arg(value_name = "INPUTS", num_args = 1.., required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output MP3 file path (must not exist)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Keep the argument order and ignore disc/track tags
    #[arg(long, default_value_t = false)]
    pub in_file_order: bool,

    /// JPEG front cover for the book
    #[arg(long, value_name = "JPEG")]
    pub cover: Option<PathBuf>,

    /// Book title (defaults to the first track's album)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Write without asking for confirmation
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,
}

/// Opens the desktop app.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct GuiCommand {
    /// Starting directory (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

pub fn run_join(cmd: JoinCommand) -> Result<()> {
    let mode = if cmd.in_file_order {
        OrderMode::InFileOrder
    } else {
        OrderMode::ByTags
    };

    let req = BookRequest {
        inputs: cmd.inputs,
        output: cmd.output,
        mode,
        cover: cmd.cover,
        title: cmd.title,
    };

    let prepared = prepare(&req, |ev| log::debug!("{ev}"))?;

    let mut stdout = io::stdout().lock();
    for line in order_lines(&prepared.plan, &req.inputs) {
        writeln!(stdout, "{line}")?;
    }
    if let Some(title) = &prepared.tags.title {
        writeln!(stdout, "Title: {title}")?;
    }
    writeln!(stdout, "Output: {}", prepared.output.display())?;

    if !cmd.yes {
        write!(stdout, "Continue? [Y/n] ")?;
        stdout.flush()?;
        drop(stdout);

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if !confirmed(&answer) {
            info!("Cancelled, nothing written");
            return Ok(());
        }
    }

    write_book(prepared, |ev| info!("{ev}"))?;
    Ok(())
}

/// One line per track in book order, then the total length.
fn order_lines(plan: &AssemblyPlan, inputs: &[PathBuf]) -> Vec<String> {
    let mut lengths = Vec::with_capacity(plan.tracks().len());
    let mut lines = Vec::with_capacity(plan.tracks().len() + 1);

    for (t, path) in plan.tracks().iter().zip(track_paths(plan, inputs)) {
        let ms = path.and_then(probe_duration_ms);
        lengths.push(ms);
        lines.push(format!(
            "Disc {}/{} Track {}/{}  {}  [{}]",
            t.disc_index,
            t.disc_count,
            t.track_index,
            t.track_count,
            t.source_name,
            fmt_duration(ms)
        ));
    }

    let (total, unknown) = total_duration_ms(&lengths);
    let mut summary = format!("Total: {}", fmt_duration(Some(total)));
    if unknown > 0 {
        summary.push_str(&format!(" (+{unknown} of unknown length)"));
    }
    lines.push(summary);
    lines
}

/// The input path behind each planned track, in book order.
fn track_paths<'a>(plan: &AssemblyPlan, inputs: &'a [PathBuf]) -> Vec<Option<&'a Path>> {
    plan.tracks()
        .iter()
        .map(|t| inputs.get(t.input_index).map(PathBuf::as_path))
        .collect()
}

/// Empty input means yes.
fn confirmed(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "" | "y" | "yes"
    )
}
