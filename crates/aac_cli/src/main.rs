//! Command-line front end for AAC board files.
//!
//! # Responsibility
//! - Map subcommands onto `aac_core` board operations.
//! - Print results and load issues; the core itself never prints.

use std::path::Path;
use std::process::ExitCode;

use aac_core::{init_logging, AacPage, Board, BoardError, LoadReport, LogConfig};
use clap::Parser;
use log::{error, info};

mod args;
mod error;
use args::{Cli, Commands};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = LogConfig::from_env().with_overrides(cli.log_level, cli.log_dir);
    if let Err(err) = init_logging(&config) {
        eprintln!("[WARN] logging disabled: {err}");
    }

    let result = match cli.command {
        Commands::Inspect { board, json } => inspect(&board, json),
        Commands::Speak { board, image } => speak(&board, &image),
        Commands::Add { board, image, text } => add(&board, &image, &text),
        Commands::Normalize { board, output } => {
            normalize(&board, output.as_deref().unwrap_or(board.as_path()))
        }
    };

    match result {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("[ERROR] {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn load(path: &Path) -> Result<Board, BoardError> {
    let LoadReport { board, issues } = Board::load(path)?;
    for issue in &issues {
        eprintln!("[WARN] {}: {issue}", path.display());
    }
    Ok(board)
}

fn inspect(path: &Path, json: bool) -> Result<(), CliError> {
    let board = load(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    for category in board.categories() {
        println!(
            "{} ({}, {} items)",
            category.display_name(),
            category.image_loc(),
            category.len()
        );
        for item in category.items() {
            println!("  {} -> {}", item.image_loc(), item.text());
        }
    }
    Ok(())
}

fn speak(path: &Path, image: &str) -> Result<(), CliError> {
    let board = load(path)?;
    let text = board
        .categories()
        .find(|category| category.has_image(image))
        .ok_or_else(|| BoardError::NotFound {
            image_loc: image.to_string(),
        })?
        .select(image)?;
    println!("{text}");
    Ok(())
}

fn add(path: &Path, image: &str, text: &str) -> Result<(), CliError> {
    let mut board = load(path)?;
    board.reset()?;
    board.add_item(image, text)?;
    board.save(path)?;
    println!("added {image} to {}", board.category());
    Ok(())
}

fn normalize(path: &Path, output: &Path) -> Result<(), CliError> {
    let board = load(path)?;
    board.save(output)?;
    println!(
        "wrote {} categories, {} items to {}",
        board.len(),
        board.item_count(),
        output.display()
    );
    Ok(())
}
