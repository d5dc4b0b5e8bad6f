use serde::{Deserialize, Serialize};

use crate::*;

/// Board dimensions. Only obtainable through validation or as a preset, so
/// the card count is always even.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSize {
    rows: Coord,
    cols: Coord,
}

impl BoardSize {
    pub const MIN_SIDE: Coord = 2;
    pub const MAX_SIDE: Coord = 10;

    /// Square boards offered without validation.
    pub const PRESETS: [BoardSize; 3] = [Self::square(4), Self::square(6), Self::square(8)];

    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord) -> Self {
        Self { rows, cols }
    }

    const fn square(side: Coord) -> Self {
        Self::new_unchecked(side, side)
    }

    /// Validates user-chosen dimensions: both within `[2, 10]` and at least one even.
    pub fn new(rows: i64, cols: i64) -> core::result::Result<Self, SizeError> {
        let range = i64::from(Self::MIN_SIDE)..=i64::from(Self::MAX_SIDE);
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(SizeError::OutOfRange);
        }
        if rows % 2 != 0 && cols % 2 != 0 {
            return Err(SizeError::OddDimensions);
        }
        // both fit in a Coord after the range check
        Ok(Self::new_unchecked(rows as Coord, cols as Coord))
    }

    /// Parses and validates raw text input for rows and columns.
    pub fn parse(rows: &str, cols: &str) -> core::result::Result<Self, SizeError> {
        match (parse_leading_int(rows), parse_leading_int(cols)) {
            (Some(rows), Some(cols)) => Self::new(rows, cols),
            _ => Err(SizeError::NotANumber),
        }
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn cols(&self) -> Coord {
        self.cols
    }

    pub const fn total_cells(&self) -> CellCount {
        self.rows as CellCount * self.cols as CellCount
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }

    /// Preset square board with the given side, if one exists.
    pub fn preset(side: Coord) -> Option<Self> {
        Self::PRESETS.into_iter().find(|size| size.rows == side)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

impl core::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Reads an optionally signed integer prefix the way `parseInt` does:
/// leading whitespace and anything after the digits are ignored, a `0x`
/// prefix switches to hexadecimal. Values too large to represent saturate.
fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let mut seen_digit = false;
    let magnitude = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .fold(0i64, |acc, digit| {
            seen_digit = true;
            acc.saturating_mul(radix.into())
                .saturating_add(digit.into())
        });
    seen_digit.then_some(if negative { -magnitude } else { magnitude })
}

/// Delays driving the game timers, in milliseconds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// Period of the elapsed-time display refresh
    pub tick_ms: u32,
    /// How long a mismatched pair stays face up
    pub mismatch_hide_ms: u32,
    /// Pause between the last match and the summary dialog
    pub summary_delay_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            mismatch_hide_ms: 2000,
            summary_delay_ms: 500,
        }
    }
}
