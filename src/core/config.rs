//! Game configuration types.
//!
//! The board and the rule constants are fixed. What a host configures is
//! who sits in each seat and the seed that autonomous seats draw from.

use serde::{Deserialize, Serialize};

use super::player::{Color, ColorMap};

/// Tokens each player starts with in hand.
pub const TOKENS_PER_PLAYER: u8 = 9;

/// A player with exactly this many tokens on board may jump; below it the
/// game is lost.
pub const JUMP_THRESHOLD: u8 = 3;

/// Number of positions on the board.
pub const POSITION_COUNT: usize = 24;

/// Number of three-position lines that can form a mill.
pub const TRIPLE_COUNT: usize = 16;

/// Behavior tag of a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Acts on positions resolved by the host from user input.
    #[default]
    Interactive,
    /// Picks uniformly among legal choices.
    Autonomous,
}

/// Session configuration.
///
/// ## Example
///
/// ```
/// use morris_rules::core::{Color, GameConfig, PlayerKind};
///
/// let config = GameConfig::vs_computer().with_seed(7);
/// assert_eq!(config.kind(Color::White), PlayerKind::Interactive);
/// assert_eq!(config.kind(Color::Black), PlayerKind::Autonomous);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seat assignment per color.
    pub seats: ColorMap<PlayerKind>,

    /// Seed for the RNG that autonomous seats fork from.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seats: ColorMap::with_value(PlayerKind::Interactive),
            seed: 0,
        }
    }
}

impl GameConfig {
    /// Two interactive seats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interactive White against an autonomous Black.
    #[must_use]
    pub fn vs_computer() -> Self {
        Self::new().with_seat(Color::Black, PlayerKind::Autonomous)
    }

    /// Two autonomous seats.
    #[must_use]
    pub fn self_play() -> Self {
        Self::new()
            .with_seat(Color::White, PlayerKind::Autonomous)
            .with_seat(Color::Black, PlayerKind::Autonomous)
    }

    /// Set the kind of one seat.
    #[must_use]
    pub fn with_seat(mut self, color: Color, kind: PlayerKind) -> Self {
        self.seats[color] = kind;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Kind of the seat playing `color`.
    #[must_use]
    pub fn kind(&self, color: Color) -> PlayerKind {
        self.seats[color]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.kind(Color::White), PlayerKind::Interactive);
        assert_eq!(config.kind(Color::Black), PlayerKind::Interactive);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_config_builders() {
        let config = GameConfig::self_play().with_seed(99);
        assert_eq!(config.kind(Color::White), PlayerKind::Autonomous);
        assert_eq!(config.kind(Color::Black), PlayerKind::Autonomous);
        assert_eq!(config.seed, 99);

        let config = GameConfig::new().with_seat(Color::White, PlayerKind::Autonomous);
        assert_eq!(config.kind(Color::White), PlayerKind::Autonomous);
        assert_eq!(config.kind(Color::Black), PlayerKind::Interactive);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::vs_computer().with_seed(12);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, deserialized);
    }
}
