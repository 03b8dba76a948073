//! Fuzer
//!
//! Joins the MP3 parts of an audiobook into one file. Parts are put in order by the
//! disc/track numbers in their ID3 tags (or kept in the given order), the audio is
//! concatenated behind one tag, and that tag is rewritten for the finished book.
//!
//! Two front ends share the same `core` pipeline:
//! - `fuzer join ...` on the command line
//! - `fuzer gui [DIR]`, an `iced` desktop app
//!
//! `core` has no UI code.

mod cli;
mod core;
mod gui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands, run_join};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Join(cmd) => run_join(cmd)?,
        Commands::Gui(cmd) => {
            let dir = match cmd.dir {
                Some(dir) => dir,
                None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            };
            gui::run(dir)?
        }
    }

    Ok(())
}
