// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point for playing, solving and benchmarking boards
// ═══════════════════════════════════════════════════════════════════════

mod config;
mod human;

use clap::{Parser, Subcommand, ValueEnum};
use human::HumanAgent;
use sotelo_agents::{Agent, AgentKind, RandomAgent, SolverAgent};
use sotelo_engine::engine::apply_move;
use sotelo_engine::setup::create_game;
use sotelo_engine::solver::{path_to_directions, search};
use sotelo_engine::visibility::game_view;
use sotelo_engine::{BoardConfig, Difficulty, GameError, GameState};
use sotelo_tournament::run_batch;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sotelo", about = "Sotelo Game: reach the goal, avoid the obstacles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Who drives the player in `play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Bot,
    Human,
    Random,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play {
        /// Who moves
        #[arg(short, long, value_enum, default_value_t = Mode::Bot)]
        mode: Mode,
        /// Board size and obstacle count: easy, medium or hard
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        /// Board seed; drawn at random when omitted
        #[arg(short, long)]
        seed: Option<u64>,
        /// TOML file with `size` and `obstacles`, overrides --difficulty
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print a board and the solver's route without playing it
    Solve {
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Play many seeded games headlessly and summarize
    Bench {
        #[arg(short, long, default_value_t = 100)]
        games: u32,
        #[arg(short, long, default_value = "easy")]
        difficulty: Difficulty,
        /// Agent type: "solver" or "random"
        #[arg(short, long, default_value = "solver")]
        agent: AgentKind,
        /// First seed; games use consecutive seeds from here
        #[arg(long, default_value_t = 0)]
        first_seed: u64,
        /// Give up on a game after this many moves
        #[arg(long, default_value_t = 10_000)]
        max_moves: u32,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { mode, difficulty, seed, config } => {
            cmd_play(mode, difficulty, seed, config.as_deref())
        }
        Commands::Solve { difficulty, seed, config } => {
            cmd_solve(difficulty, seed, config.as_deref())
        }
        Commands::Bench { games, difficulty, agent, first_seed, max_moves, json, config } => {
            cmd_bench(games, difficulty, agent, first_seed, max_moves, json, config.as_deref())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn new_game(difficulty: Difficulty, seed: Option<u64>, file: Option<&std::path::Path>) -> Result<GameState, String> {
    let board: BoardConfig = config::resolve_board_config(difficulty, file)?;
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, size = board.size, obstacles = board.obstacles, "new game");
    create_game(board, seed).map_err(|e| e.to_string())
}

fn cmd_play(mode: Mode, difficulty: Difficulty, seed: Option<u64>, file: Option<&std::path::Path>) -> Result<(), String> {
    println!("Welcome to Sotelo Game!");
    let mut state = new_game(difficulty, seed, file)?;
    print!("{}", state.grid());
    println!();

    let mut agent: Box<dyn Agent> = match mode {
        Mode::Human => {
            println!("You are playing. Use arrow keys or WASD.");
            Box::new(HumanAgent::new(BufReader::new(std::io::stdin())))
        }
        Mode::Random => {
            println!("Random walker is playing...");
            Box::new(RandomAgent::new(state.seed().unwrap_or_default()))
        }
        Mode::Bot => {
            println!("Bot is playing...");
            Box::new(SolverAgent::new())
        }
    };
    let interactive = mode == Mode::Human;

    while !state.is_won() {
        let direction = match agent.next_move(&game_view(&state)) {
            Ok(Some(d)) => d,
            Ok(None) => {
                println!("Game over after {} moves.", state.move_count());
                return Ok(());
            }
            Err(GameError::NoPath { .. }) => {
                println!("No solution found!");
                return Err("solver found no route".to_string());
            }
            Err(e) => return Err(e.to_string()),
        };

        let outcome = apply_move(&mut state, direction);
        if !outcome.accepted && !interactive {
            // Automated agents only propose open cells; a refusal means the
            // route and the board disagree.
            return Err(GameError::RouteRejected {
                step: state.move_count() as usize,
                at: state.player(),
            }
            .to_string());
        }
        print!("{}", state.grid());
        println!();
    }

    println!("Congratulations! You reached the goal!");
    println!("Total moves: {}", state.move_count());
    Ok(())
}

fn cmd_solve(difficulty: Difficulty, seed: Option<u64>, file: Option<&std::path::Path>) -> Result<(), String> {
    let state = new_game(difficulty, seed, file)?;
    println!("Seed: {}", state.seed().unwrap_or_default());
    print!("{}", state.grid());
    println!();

    let result = search(state.grid(), state.player(), state.goal());
    if result.path.is_empty() {
        println!("No solution found!");
        return Err("solver found no route".to_string());
    }
    let directions = path_to_directions(state.player(), &result.path).map_err(|e| e.to_string())?;

    println!("Route ({} moves, {} cells expanded):", result.path.len(), result.expanded);
    for (step, (pos, dir)) in result.path.iter().zip(&directions).enumerate() {
        println!("  {:>3}. {:<5} -> {}", step + 1, dir.to_string(), pos);
    }
    Ok(())
}

fn cmd_bench(
    games: u32,
    difficulty: Difficulty,
    kind: AgentKind,
    first_seed: u64,
    max_moves: u32,
    json: bool,
    file: Option<&std::path::Path>,
) -> Result<(), String> {
    let board = config::resolve_board_config(difficulty, file)?;
    let seeds: Vec<u64> = (0..games as u64).map(|g| first_seed + g).collect();
    let summary = run_batch(kind, board, &seeds, max_moves);

    if json {
        let text = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "=== Bench: {} games, agent={}, board {}x{} with {} obstacles ===\n",
        summary.games, summary.agent, board.size, board.size, board.obstacles
    );
    let pct = |n: u32| if summary.games > 0 { n as f64 / summary.games as f64 * 100.0 } else { 0.0 };
    println!("  Wins:            {:>6} ({:.1}%)", summary.wins, pct(summary.wins));
    println!("  Optimal wins:    {:>6} ({:.1}%)", summary.optimal, pct(summary.optimal));
    println!("  Errors:          {:>6}", summary.errors.len());
    println!("  Mean moves:      {:>9.2}", summary.mean_moves);
    println!("  Boards per game: {:>9.2}", summary.mean_board_attempts);
    for e in summary.errors.iter().take(5) {
        println!("    {}", e);
    }
    Ok(())
}
