//! Game configuration and its defaults.

use crate::common::ConfigError;

/// Largest supported board: columns are entered as a single digit.
pub const MAX_BOARD_SIZE: usize = 10;

pub const DEFAULT_BOARD_SIZE: usize = 7;
pub const DEFAULT_NUM_SHIPS: usize = 3;
pub const DEFAULT_SHIP_LENGTH: usize = 3;

/// Placement attempts allowed per ship before generation gives up.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Game configuration, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub num_ships: usize,
    pub ship_length: usize,
    pub max_placement_attempts: usize,
}

impl GameConfig {
    /// Create a configuration with the default retry cap.
    pub const fn new(board_size: usize, num_ships: usize, ship_length: usize) -> Self {
        Self {
            board_size,
            num_ships,
            ship_length,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub const fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Number of cells the whole fleet occupies.
    pub fn fleet_cells(&self) -> usize {
        self.num_ships.saturating_mul(self.ship_length)
    }

    /// Check the sizes are positive and that the fleet can fit on the board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.num_ships == 0 {
            return Err(ConfigError::NoShips);
        }
        if self.ship_length == 0 {
            return Err(ConfigError::ZeroShipLength);
        }
        if self.ship_length > self.board_size {
            return Err(ConfigError::ShipTooLong {
                length: self.ship_length,
                board_size: self.board_size,
            });
        }
        let capacity = self.board_size * self.board_size;
        if self.fleet_cells() > capacity {
            return Err(ConfigError::FleetTooLarge {
                cells: self.fleet_cells(),
                capacity,
            });
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS, DEFAULT_SHIP_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 7);
        assert_eq!(config.fleet_cells(), 9);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_impossible_sizes() {
        assert_eq!(GameConfig::new(0, 1, 1).validate(), Err(ConfigError::ZeroBoardSize));
        assert_eq!(GameConfig::new(5, 0, 1).validate(), Err(ConfigError::NoShips));
        assert_eq!(GameConfig::new(5, 1, 0).validate(), Err(ConfigError::ZeroShipLength));
        assert_eq!(
            GameConfig::new(11, 1, 1).validate(),
            Err(ConfigError::BoardTooLarge { size: 11, max: 10 })
        );
        assert_eq!(
            GameConfig::new(4, 1, 5).validate(),
            Err(ConfigError::ShipTooLong { length: 5, board_size: 4 })
        );
        assert_eq!(
            GameConfig::new(3, 4, 3).validate(),
            Err(ConfigError::FleetTooLarge { cells: 12, capacity: 9 })
        );
        assert_eq!(
            GameConfig::default().with_max_attempts(0).validate(),
            Err(ConfigError::NoPlacementAttempts)
        );
    }
}
