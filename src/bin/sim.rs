use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use serde_json::json;
use solo_battleship::{init_logging, Coordinate, GameConfig, GameEngine};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let mut engine = GameEngine::new(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut targets: Vec<Coordinate> = (0..config.board_size)
        .flat_map(|r| (0..config.board_size).map(move |c| Coordinate::new(r, c)))
        .collect();
    targets.shuffle(&mut rng);

    let mut hits = 0;
    for coord in targets {
        if engine.is_terminal() {
            break;
        }
        let shot = engine.fire(coord).map_err(|e| anyhow::anyhow!(e))?;
        if shot.result == solo_battleship::FireResult::Hit {
            hits += 1;
        }
    }

    let result = json!({
        "seed": seed,
        "status": format!("{:?}", engine.status()),
        "guesses": engine.guesses(),
        "hits": hits,
        "ships_sunk": engine.ships_sunk(),
        "game": engine.snapshot(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
