//! Terminal driver for 6x6 checkers with obstacles.
//!
//! ## Usage
//!
//! - `obstacle_checkers` - Play against the engine (you are player 1, `w`)
//! - `obstacle_checkers selfplay` - Watch the engine play both sides
//!
//! Set `RUST_LOG=debug` to see search and obstacle logging.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use obstacle_checkers::board::{MoveList, DEFAULT_DEPTH, DEFAULT_OBSTACLE_COUNT};
use obstacle_checkers::{Game, GameConfig, GameStatus};

/// Mini-checkers on a 6x6 board with shifting obstacles
#[derive(Parser)]
#[command(name = "obstacle_checkers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search depth (plies) for the engine
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    ai_depth: u32,
    /// Number of obstacles placed at the start
    #[arg(long, default_value_t = DEFAULT_OBSTACLE_COUNT)]
    obstacles: usize,
    /// Seed for obstacle placement
    #[arg(long)]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the engine on the terminal
    Play,
    /// Let the engine play both sides
    Selfplay {
        /// Stop after this many moves
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.ai_depth == 0 {
        bail!("--ai-depth must be at least 1");
    }
    let config = GameConfig {
        ai_depth: cli.ai_depth,
        obstacle_count: cli.obstacles,
        seed: cli.seed,
        ..GameConfig::default()
    };

    match cli.command {
        Some(Commands::Selfplay { max_turns }) => run_selfplay(config, max_turns),
        Some(Commands::Play) | None => run_play(config),
    }
}

fn run_play(config: GameConfig) -> Result<()> {
    let mut game = Game::new(config);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", game.board());
        if let GameStatus::Won(winner) = game.status() {
            println!("{winner} wins!");
            if !prompt_yes(&mut lines, "Play again? [y/N] ")? {
                return Ok(());
            }
            game.reset();
            continue;
        }

        if game.is_engine_turn() {
            let result = game.play_engine()?;
            if let Some(mv) = result.best_move {
                println!("Engine plays {mv} (score {})", result.score);
            }
            continue;
        }

        let moves = game.playable_moves();
        print_moves(&moves);
        print!("{} > ", game.to_move());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read move")?;
        let input = line.trim();
        if input == "q" || input == "quit" {
            return Ok(());
        }
        match input.parse::<usize>().ok().and_then(|i| moves.get(i)) {
            Some(mv) => game.play(mv)?,
            None => println!("Enter a move number from the list, or q to quit"),
        }
    }
}

fn run_selfplay(config: GameConfig, max_turns: usize) -> Result<()> {
    let mut game = Game::new(config);
    println!("{}", game.board());

    for turn in 1..=max_turns {
        if let GameStatus::Won(winner) = game.status() {
            println!("{winner} wins after {} moves", turn - 1);
            return Ok(());
        }
        let mover = game.to_move();
        let result = game.search_for(mover);
        let Some(mv) = result.best_move else {
            bail!("{mover} has no move but the game is still in progress");
        };
        game.play(&mv)?;
        println!(
            "{turn}. {mover}: {mv} (score {}, {} nodes)\n{}",
            result.score,
            result.nodes,
            game.board()
        );
    }
    println!("Stopped after {max_turns} moves");
    Ok(())
}

fn print_moves(moves: &MoveList) {
    for (i, mv) in moves.iter().enumerate() {
        println!("  {i}: {mv}");
    }
}

fn prompt_yes<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
