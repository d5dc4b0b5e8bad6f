use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use config::*;
pub use controller::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use host::*;
pub use types::*;

mod card;
mod config;
mod controller;
mod engine;
mod error;
mod generator;
mod host;
mod types;

/// The grid of cards dealt for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cards: Array2<Card>,
}

impl Board {
    /// Lays out `cards` row-major into a grid of the given size.
    pub fn from_cards(size: BoardSize, cards: Vec<Card>) -> Result<Self> {
        let cards = Array2::from_shape_vec(grid_index((size.rows(), size.cols())), cards)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cards })
    }

    pub fn size(&self) -> BoardSize {
        let (rows, cols) = self.cards.dim();
        BoardSize::new_unchecked(rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        self.cards.len() as CellCount
    }

    pub fn total_pairs(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.rows() && coords.1 < size.cols() {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Iterates cards in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Card)> {
        self.cards
            .indexed_iter()
            .map(|((row, col), card)| ((row as Coord, col as Coord), card))
    }

    pub(crate) fn reveal(&mut self, coords: Coord2) {
        self.cards[grid_index(coords)].mark_revealed();
    }
}

impl Index<Coord2> for Board {
    type Output = Card;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cards[grid_index(coords)]
    }
}

/// What a single click did to the turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Ignored,
    Selected(Coord2),
    Matched(Coord2, Coord2),
    Mismatched(Coord2, Coord2),
    Won(Coord2, Coord2),
}

impl TurnOutcome {
    /// Whether a two-card comparison happened, counting as one attempt
    pub const fn completes_attempt(self) -> bool {
        matches!(
            self,
            Self::Matched(..) | Self::Mismatched(..) | Self::Won(..)
        )
    }
}

/// Result of a click, including a pending mismatch it forced face down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClickOutcome {
    pub preempted: Option<(Coord2, Coord2)>,
    pub turn: TurnOutcome,
}

impl ClickOutcome {
    pub const fn ignored() -> Self {
        Self {
            preempted: None,
            turn: TurnOutcome::Ignored,
        }
    }
}
