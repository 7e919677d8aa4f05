//! Gomoku terminal front end
//!
//! Seats are chosen with `--mode`: two humans on stdin (`pvp`), a human
//! against the engine (`pvb`), or two engines (`self-play`).

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::config::AppConfig;
use gomoku::search::DepthConfig;
use gomoku::{AIEngine, Game, GameStatus, PlayMode, Pos};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row against a minimax engine")]
struct Args {
    /// TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override board rows (10-19)
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns (10-30)
    #[arg(long)]
    cols: Option<usize>,

    /// Fixed search depth in plies
    #[arg(long, conflicts_with = "dynamic")]
    depth: Option<u8>,

    /// Choose search depth from the number of empty cells
    #[arg(long)]
    dynamic: bool,

    /// Who plays: pvp, pvb or self-play (default from config)
    #[arg(long, value_enum)]
    mode: Option<PlayMode>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let mode = config.game.mode;
    info!(
        rows = config.game.rows,
        cols = config.game.cols,
        ?mode,
        depth = ?config.engine.depth,
        "starting game"
    );

    let mut game = Game::from_config(&config.game)?;
    let bot = config.game.bot_symbol;
    let mut engine = AIEngine::with_config(bot, &config.engine)?;
    // Only seated in self-play
    let mut rival = AIEngine::with_config(bot.opponent(), &config.engine)?;

    println!("{}", game.board());
    while !game.status().is_over() {
        let side = game.to_move();
        if mode.engine_plays(side, bot) {
            let seat = if side == bot { &mut engine } else { &mut rival };
            let (pos, result) = game.play_bot(seat)?;
            report_bot_move(side, pos, result.as_ref());
        } else {
            let pos = read_human_move(&game)?;
            game.play(pos)?;
        }
        println!("{}", game.board());
    }

    match game.status() {
        GameStatus::Won { winner, line } => match (line.start, line.end) {
            (Some(start), Some(end)) => println!("{} wins with {} - {}", winner, start, end),
            _ => println!("{} wins", winner),
        },
        GameStatus::Draw => println!("Draw: the board is full"),
        GameStatus::InProgress => {}
    }
    println!("Moves played: {}", game.history().len());

    Ok(())
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    if let Some(rows) = args.rows {
        config.game.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.game.cols = cols;
    }
    if let Some(plies) = args.depth {
        config.engine.depth = DepthConfig::Fixed { plies };
    }
    if args.dynamic {
        config.engine.depth = DepthConfig::dynamic();
    }
    if let Some(mode) = args.mode {
        config.game.mode = mode;
    }

    config.validate().context("invalid command-line overrides")?;
    Ok(config)
}

fn report_bot_move(side: gomoku::Stone, pos: Pos, result: Option<&gomoku::MoveResult>) {
    match result {
        Some(r) => println!(
            "{} plays {} ({:?}, score {}, depth {}, {} nodes, {} ms)",
            side, pos, r.search_type, r.score, r.depth, r.nodes, r.time_ms
        ),
        None => println!("{} opens at {}", side, pos),
    }
}

/// Prompt until the player enters a free cell as "row col".
fn read_human_move(game: &Game) -> Result<Pos> {
    let board = game.board();
    let stdin = stdin();
    loop {
        print!("{} to move, enter row and column: ", game.to_move());
        stdout().flush()?;

        let mut buffer = String::new();
        if stdin.read_line(&mut buffer)? == 0 {
            bail!("input closed before the game ended");
        }

        let mut parts = buffer.split_whitespace().map(str::parse::<usize>);
        let (row, col) = match (parts.next(), parts.next()) {
            (Some(Ok(row)), Some(Ok(col))) => (row, col),
            _ => {
                println!("Expected two numbers, e.g. \"4 7\"");
                continue;
            }
        };

        if row >= board.rows() || col >= board.cols() {
            println!("Cell ({}, {}) is outside the board", row, col);
            continue;
        }
        let pos = Pos::new(row as u8, col as u8);
        if !board.is_empty(pos) {
            println!("Cell {} is already occupied", pos);
            continue;
        }
        return Ok(pos);
    }
}
