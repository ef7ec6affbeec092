//! Solve a maze file with BFS, Dijkstra and A*.
//!
//! Run: cargo run --bin maze -- demos/mazes/sample.txt
//! Set `RUST_LOG=debug` to see per-search summaries.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gridkit_demos::{HeuristicKind, Markers, Maze};

/// Find the shortest route through a character maze.
#[derive(Parser, Debug)]
struct Cli {
    /// Maze file, one row per line.
    file: PathBuf,

    /// Start marker.
    #[arg(long, default_value_t = 'S')]
    start: char,

    /// End marker.
    #[arg(long, default_value_t = 'E')]
    end: char,

    /// Wall character.
    #[arg(long, default_value_t = '#')]
    wall: char,

    /// Allow diagonal moves (cost √2).
    #[arg(short, long)]
    diagonal: bool,

    /// A* heuristic. Defaults to manhattan, or octile with --diagonal.
    #[arg(long, value_enum)]
    heuristic: Option<HeuristicKind>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("could not read maze file at: {}", args.file.display()))?;
    let markers = Markers {
        start: args.start,
        end: args.end,
        wall: args.wall,
    };
    let maze = Maze::parse(&text, markers)
        .with_context(|| format!("invalid maze in {}", args.file.display()))?;

    let heuristic = args
        .heuristic
        .unwrap_or_else(|| HeuristicKind::default_for(args.diagonal));
    let report = maze
        .solve(args.diagonal, heuristic)
        .context("failed to solve maze")?;

    println!("{report}");
    Ok(())
}
