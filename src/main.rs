#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use solo_battleship::{
    init_logging,
    ui::{render_board, status_line},
    GameConfig, GameEngine, DEFAULT_BOARD_SIZE, DEFAULT_MAX_PLACEMENT_ATTEMPTS,
    DEFAULT_NUM_SHIPS, DEFAULT_SHIP_LENGTH,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet from your terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[arg(long, default_value_t = DEFAULT_NUM_SHIPS)]
    ships: usize,
    #[arg(long, default_value_t = DEFAULT_SHIP_LENGTH)]
    ship_length: usize,
    #[arg(long, default_value_t = DEFAULT_MAX_PLACEMENT_ATTEMPTS, help = "Placement attempts per ship")]
    max_attempts: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Show ship positions on the board")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.board_size, cli.ships, cli.ship_length)
        .with_max_attempts(cli.max_attempts);
    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let mut engine = GameEngine::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let last_row = solo_battleship::row_letter(config.board_size - 1).unwrap_or('?');
    println!(
        "Sink {} ships of length {}. Enter guesses like A0 (rows A-{}, columns 0-{}).",
        config.num_ships,
        config.ship_length,
        last_row,
        config.board_size - 1
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !engine.is_terminal() {
        print!("{}", render_board(&engine, cli.reveal));
        print!("Fire at: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            println!();
            println!("Leaving the game unfinished. {}", status_line(&engine));
            return Ok(());
        };
        let line = line?;
        match engine.process_guess(line.trim()) {
            Ok(shot) => {
                println!("{}: {}", shot.coordinate, shot.result);
                for event in &shot.events {
                    println!("{}", event);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    print!("{}", render_board(&engine, true));
    println!("{}", status_line(&engine));
    Ok(())
}
