use serde::{Deserialize, Serialize};

/// Every symbol a card can carry, in a fixed order.
pub const SYMBOLS: [char; 36] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Blue,
    Green,
    Purple,
    Orange,
    Cyan,
    Magenta,
    Brown,
}

impl CardColor {
    pub const ALL: [CardColor; 8] = [
        Self::Red,
        Self::Blue,
        Self::Green,
        Self::Purple,
        Self::Orange,
        Self::Cyan,
        Self::Magenta,
        Self::Brown,
    ];

    pub const fn css_name(self) -> &'static str {
        use CardColor::*;
        match self {
            Red => "red",
            Blue => "blue",
            Green => "green",
            Purple => "purple",
            Orange => "orange",
            Cyan => "cyan",
            Magenta => "magenta",
            Brown => "brown",
        }
    }
}

/// Background of a rendered card, face down or face up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Background {
    Neutral,
    Face,
}

impl Background {
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Neutral => "#f0f0f0",
            Self::Face => "white",
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self::Neutral
    }
}

/// A card on the board. Its position in the grid is its identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: char,
    color: CardColor,
    revealed: bool,
}

impl Card {
    pub const fn new(symbol: char, color: CardColor) -> Self {
        Self {
            symbol,
            color,
            revealed: false,
        }
    }

    pub const fn symbol(&self) -> char {
        self.symbol
    }

    pub const fn color(&self) -> CardColor {
        self.color
    }

    /// Whether the card was permanently revealed by a match
    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Two cards form a pair when both symbol and color agree
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.symbol == other.symbol && self.color == other.color
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
    }
}
