//! Moves as plain data.
//!
//! A [`Move`] is a proposed coordinate pair, not yet validated. Sequences
//! of moves can be replayed against an engine with
//! [`GameEngine::play_all`](crate::GameEngine::play_all).

use crate::error::ParseMoveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A proposed move at row `x`, column `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index.
    pub x: i32,
    /// Column index.
    pub y: i32,
}

impl Move {
    /// Creates a new move.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Move {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Move {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses `"x,y"`, allowing whitespace around either number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoveError {
            input: s.to_string(),
        };
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self::new(x, y))
    }
}
