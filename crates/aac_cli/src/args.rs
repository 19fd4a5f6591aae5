use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aacboard")]
#[command(about = "Inspect and edit AAC board files")]
#[command(version)]
pub struct Cli {
    /// Log level (trace|debug|info|warn|error); overrides AACBOARD_LOG_LEVEL
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling logs; overrides AACBOARD_LOG_DIR
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List categories and their items
    Inspect {
        /// Board file
        board: PathBuf,

        /// Print the board as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the text spoken for an image
    Speak {
        /// Board file
        board: PathBuf,

        /// Image location, e.g. img/food/plate.png
        image: String,
    },

    /// Add or overwrite an item in the first category and save the board
    Add {
        /// Board file
        board: PathBuf,

        /// Image location, e.g. img/food/apple.png
        image: String,

        /// Text spoken when the image is selected
        text: String,
    },

    /// Rewrite a board file in canonical form
    Normalize {
        /// Board file
        board: PathBuf,

        /// Write here instead of overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
