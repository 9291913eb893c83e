use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use solo_battleship::{Coordinate, FireError, GameConfig, GameEngine};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Sunk count never decreases, never exceeds the fleet size, and nothing
    /// moves once the game is over.
    #[test]
    fn counters_are_monotonic(
        seed in any::<u64>(),
        shots in prop::collection::vec((0usize..7, 0usize..7), 1..120),
    ) {
        let config = GameConfig::default();
        let mut engine = GameEngine::new(config, &mut SmallRng::seed_from_u64(seed)).unwrap();
        let mut last_sunk = 0;
        for (r, c) in shots {
            let coord = Coordinate::new(r, c);
            let guesses_before = engine.guesses();
            let was_terminal = engine.is_terminal();
            let repeat = engine.has_guessed(coord);
            match engine.fire(coord) {
                Ok(_) => {
                    prop_assert!(!was_terminal && !repeat);
                    prop_assert_eq!(engine.guesses(), guesses_before + 1);
                }
                Err(FireError::GameOver) => {
                    prop_assert!(was_terminal);
                    prop_assert_eq!(engine.guesses(), guesses_before);
                }
                Err(FireError::AlreadyGuessed(_)) => {
                    prop_assert!(repeat);
                    prop_assert_eq!(engine.guesses(), guesses_before);
                }
                Err(e) => prop_assert!(false, "unexpected error {:?}", e),
            }
            prop_assert!(engine.ships_sunk() >= last_sunk);
            prop_assert!(engine.ships_sunk() <= config.num_ships);
            prop_assert_eq!(engine.ships_sunk(), engine.fleet().sunk_count());
            prop_assert_eq!(engine.is_terminal(), engine.ships_sunk() == config.num_ships);
            last_sunk = engine.ships_sunk();
        }
    }

    /// Firing at every cell always finishes the game in at most N*N guesses.
    #[test]
    fn sweeping_the_board_wins(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut engine = GameEngine::new(config, &mut SmallRng::seed_from_u64(seed)).unwrap();
        'sweep: for r in 0..config.board_size {
            for c in 0..config.board_size {
                let shot = engine.fire(Coordinate::new(r, c)).unwrap();
                if shot.fleet_destroyed() {
                    break 'sweep;
                }
            }
        }
        prop_assert!(engine.is_terminal());
        prop_assert!(engine.guesses() <= 49);
        prop_assert!(engine.guesses() >= config.fleet_cells());
    }
}
