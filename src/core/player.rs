//! Player identification and per-player data storage.
//!
//! ## Color
//!
//! The two sides of the game. A player is identified by the color of its
//! tokens; White always acts first.
//!
//! ## ColorMap
//!
//! Per-color storage with O(1) access, indexed by `Color`.
//!
//! ## Player
//!
//! Token counters and the behavior tag of one seat.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use strum::EnumIter;

use super::config::{PlayerKind, TOKENS_PER_PLAYER};

/// Token color, which doubles as the player identifier.
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Color {
    /// First player.
    White,
    /// Second player.
    Black,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 0 for White, 1 for Black.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

/// Per-color data storage.
///
/// ## Example
///
/// ```
/// use morris_rules::core::{Color, ColorMap};
///
/// let mut placed: ColorMap<u8> = ColorMap::with_value(0);
/// placed[Color::Black] += 1;
///
/// assert_eq!(placed[Color::White], 0);
/// assert_eq!(placed[Color::Black], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Color) -> T) -> Self {
        Self {
            data: [factory(Color::White), factory(Color::Black)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a color's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a color's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (Color, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [Color::White, Color::Black].into_iter().zip(self.data.iter())
    }

    /// Iterate over (Color, &mut T) pairs, White first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Color, &mut T)> {
        [Color::White, Color::Black]
            .into_iter()
            .zip(self.data.iter_mut())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}

/// One seat at the board.
///
/// `tokens_to_set + tokens_on_board` never exceeds `TOKENS_PER_PLAYER`.
/// The counters are only changed by the command layer and by session
/// resets, so `tokens_on_board` always equals the number of positions
/// occupied by `color`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    tokens_to_set: u8,
    tokens_on_board: u8,
    kind: PlayerKind,
}

impl Player {
    /// Create a player holding all of its tokens in hand.
    #[must_use]
    pub fn new(color: Color, kind: PlayerKind) -> Self {
        Self {
            color,
            tokens_to_set: TOKENS_PER_PLAYER,
            tokens_on_board: 0,
            kind,
        }
    }

    /// Token color of this player.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Tokens still in hand.
    #[must_use]
    pub fn tokens_to_set(&self) -> u8 {
        self.tokens_to_set
    }

    /// Tokens currently on the board.
    #[must_use]
    pub fn tokens_on_board(&self) -> u8 {
        self.tokens_on_board
    }

    /// Behavior tag of this seat.
    #[must_use]
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Check whether this seat is played by the computer.
    #[must_use]
    pub fn is_autonomous(&self) -> bool {
        self.kind == PlayerKind::Autonomous
    }

    /// Move one token from hand to board.
    pub(crate) fn record_set(&mut self) {
        debug_assert!(self.tokens_to_set > 0);
        self.tokens_to_set -= 1;
        self.tokens_on_board += 1;
    }

    /// One of this player's tokens was removed from the board.
    pub(crate) fn record_removed(&mut self) {
        debug_assert!(self.tokens_on_board > 0);
        self.tokens_on_board -= 1;
    }

    /// Put every token back in hand.
    pub(crate) fn reset(&mut self) {
        self.tokens_to_set = TOKENS_PER_PLAYER;
        self.tokens_on_board = 0;
    }

    /// Overwrite both counters. Used when loading a fixed layout.
    pub(crate) fn set_counts(&mut self, tokens_to_set: u8, tokens_on_board: u8) {
        debug_assert!(tokens_to_set + tokens_on_board <= TOKENS_PER_PLAYER);
        self.tokens_to_set = tokens_to_set;
        self.tokens_on_board = tokens_on_board;
    }
}
