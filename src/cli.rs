//! Defines the command-line interface structure using clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "video-catalog", version, about = "Personal video catalog manager")]
pub struct Cli {
    /// Video file to read and write (defaults to `youtube.txt`)
    #[arg(long, global = true, env = "VIDEO_CATALOG_FILE")]
    pub file: Option<PathBuf>,

    /// TOML config file (defaults to `video-catalog.toml` if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Cmd>,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Start the interactive menu (the default)
    Menu,
    /// List all videos
    List,
    /// Add a new video
    Add {
        #[arg(long, help = "Title of the video")]
        name: String,
        #[arg(long, help = "Duration label, e.g. 10:30")]
        time: String,
    },
    /// Update the video at a 1-based position
    Update {
        index: String,
        #[arg(long, help = "New title (omit to keep)")]
        name: Option<String>,
        #[arg(long, help = "New duration (omit to keep)")]
        time: Option<String>,
    },
    /// Delete the video at a 1-based position
    Delete { index: String },
}
