use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Turn sequencing for a single board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No card selected and nothing waiting to be hidden
    Idle,
    /// One card face up, waiting for its partner
    OneSelected(Coord2),
    /// Two non-matching cards face up until hidden
    MismatchPending(Coord2, Coord2),
    /// Every pair found, no more moves
    Won,
}

impl TurnState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    pub const fn pending_mismatch(self) -> Option<(Coord2, Coord2)> {
        match self {
            Self::MismatchPending(first, second) => Some((first, second)),
            _ => None,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    board: Board,
    state: TurnState,
    attempts: Saturating<u32>,
    matches_found: CellCount,
}

impl MatchEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            attempts: Saturating(0),
            matches_found: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.0
    }

    pub fn matches_found(&self) -> CellCount {
        self.matches_found
    }

    pub fn total_pairs(&self) -> CellCount {
        self.board.total_pairs()
    }

    pub fn card_at(&self, coords: Coord2) -> &Card {
        &self.board[coords]
    }

    /// Whether the card currently shows its face: matched, selected, or part of a pending mismatch
    pub fn is_face_up(&self, coords: Coord2) -> bool {
        if self.board[coords].is_revealed() {
            return true;
        }
        match self.state {
            TurnState::OneSelected(selected) => selected == coords,
            TurnState::MismatchPending(first, second) => first == coords || second == coords,
            TurnState::Idle | TurnState::Won => false,
        }
    }

    /// Handles a click on a card.
    ///
    /// A click during a pending mismatch hides that pair first and then
    /// counts as a fresh first selection.
    pub fn click(&mut self, coords: Coord2) -> Result<ClickOutcome> {
        use TurnState::*;

        let coords = self.board.validate_coords(coords)?;

        if self.state.is_finished() || self.board[coords].is_revealed() {
            return Ok(ClickOutcome::ignored());
        }

        let preempted = self.hide_mismatch();
        if let Some(pair) = preempted {
            log::debug!("click at {:?} hid pending mismatch {:?}", coords, pair);
        }

        let turn = match self.state {
            Idle => {
                self.state = OneSelected(coords);
                TurnOutcome::Selected(coords)
            }
            OneSelected(first) if first == coords => TurnOutcome::Ignored,
            OneSelected(first) => self.compare(first, coords),
            MismatchPending(..) | Won => TurnOutcome::Ignored,
        };

        Ok(ClickOutcome { preempted, turn })
    }

    /// Turns a pending mismatch face down again, returning the pair if there was one.
    pub fn hide_mismatch(&mut self) -> Option<(Coord2, Coord2)> {
        let pair = self.state.pending_mismatch()?;
        self.state = TurnState::Idle;
        Some(pair)
    }

    fn compare(&mut self, first: Coord2, second: Coord2) -> TurnOutcome {
        self.attempts += Saturating(1);

        if !self.board[first].pairs_with(&self.board[second]) {
            log::debug!("mismatch {:?} / {:?}", first, second);
            self.state = TurnState::MismatchPending(first, second);
            return TurnOutcome::Mismatched(first, second);
        }

        self.board.reveal(first);
        self.board.reveal(second);
        self.matches_found += 1;
        log::debug!(
            "match {:?} / {:?}, {} of {} pairs",
            first,
            second,
            self.matches_found,
            self.total_pairs()
        );

        if self.matches_found == self.total_pairs() {
            self.state = TurnState::Won;
            TurnOutcome::Won(first, second)
        } else {
            self.state = TurnState::Idle;
            TurnOutcome::Matched(first, second)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rows: Coord, cols: Coord, symbols: &str) -> MatchEngine {
        let size = BoardSize::new(rows.into(), cols.into()).unwrap();
        let cards = symbols
            .chars()
            .map(|symbol| Card::new(symbol, CardColor::Red))
            .collect();
        MatchEngine::new(Board::from_cards(size, cards).unwrap())
    }

    #[test]
    fn board_shape_is_checked() {
        let size = BoardSize::new(2, 2).unwrap();
        let cards = vec![Card::new('A', CardColor::Red); 3];
        assert_eq!(
            Board::from_cards(size, cards),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn first_click_selects() {
        let mut engine = engine(2, 2, "ABAB");

        let outcome = engine.click((0, 1)).unwrap();

        assert_eq!(outcome.turn, TurnOutcome::Selected((0, 1)));
        assert_eq!(outcome.preempted, None);
        assert_eq!(engine.state(), TurnState::OneSelected((0, 1)));
        assert!(engine.is_face_up((0, 1)));
        assert!(!engine.is_face_up((0, 0)));
    }

    #[test]
    fn same_card_twice_is_ignored() {
        let mut engine = engine(2, 2, "ABAB");

        engine.click((0, 0)).unwrap();
        let outcome = engine.click((0, 0)).unwrap();

        assert_eq!(outcome, ClickOutcome::ignored());
        assert_eq!(engine.attempts(), 0);
        assert_eq!(engine.state(), TurnState::OneSelected((0, 0)));
    }

    #[test]
    fn matching_pair_is_revealed_for_good() {
        let mut engine = engine(2, 2, "ABAB");

        engine.click((0, 0)).unwrap();
        let outcome = engine.click((1, 0)).unwrap();

        assert_eq!(outcome.turn, TurnOutcome::Matched((0, 0), (1, 0)));
        assert_eq!(engine.attempts(), 1);
        assert_eq!(engine.matches_found(), 1);
        assert_eq!(engine.state(), TurnState::Idle);
        assert!(engine.card_at((0, 0)).is_revealed());
        assert!(engine.card_at((1, 0)).is_revealed());

        // revealed cards no longer react
        assert_eq!(engine.click((0, 0)).unwrap(), ClickOutcome::ignored());
    }

    #[test]
    fn color_must_match_too() {
        let size = BoardSize::new(2, 2).unwrap();
        let cards = vec![
            Card::new('A', CardColor::Red),
            Card::new('A', CardColor::Blue),
            Card::new('A', CardColor::Blue),
            Card::new('A', CardColor::Red),
        ];
        let mut engine = MatchEngine::new(Board::from_cards(size, cards).unwrap());

        engine.click((0, 0)).unwrap();
        let outcome = engine.click((0, 1)).unwrap();

        assert_eq!(outcome.turn, TurnOutcome::Mismatched((0, 0), (0, 1)));
        assert_eq!(engine.matches_found(), 0);
    }

    #[test]
    fn mismatch_waits_to_be_hidden() {
        let mut engine = engine(2, 2, "ABAB");

        engine.click((0, 0)).unwrap();
        let outcome = engine.click((0, 1)).unwrap();

        assert_eq!(outcome.turn, TurnOutcome::Mismatched((0, 0), (0, 1)));
        assert_eq!(engine.attempts(), 1);
        assert_eq!(engine.state(), TurnState::MismatchPending((0, 0), (0, 1)));
        assert!(engine.is_face_up((0, 0)) && engine.is_face_up((0, 1)));

        assert_eq!(engine.hide_mismatch(), Some(((0, 0), (0, 1))));
        assert_eq!(engine.state(), TurnState::Idle);
        assert!(!engine.is_face_up((0, 0)) && !engine.is_face_up((0, 1)));

        // hiding again is a no-op
        assert_eq!(engine.hide_mismatch(), None);
    }

    #[test]
    fn click_during_mismatch_starts_fresh_selection() {
        let mut engine = engine(2, 3, "ABCABC");

        engine.click((0, 0)).unwrap();
        engine.click((0, 1)).unwrap();
        let outcome = engine.click((0, 2)).unwrap();

        assert_eq!(outcome.preempted, Some(((0, 0), (0, 1))));
        assert_eq!(outcome.turn, TurnOutcome::Selected((0, 2)));
        assert_eq!(engine.state(), TurnState::OneSelected((0, 2)));
        assert_eq!(engine.attempts(), 1);
    }

    #[test]
    fn clicking_a_mismatched_card_reselects_it() {
        let mut engine = engine(2, 2, "ABAB");

        engine.click((0, 0)).unwrap();
        engine.click((0, 1)).unwrap();
        let outcome = engine.click((0, 1)).unwrap();

        assert_eq!(outcome.preempted, Some(((0, 0), (0, 1))));
        assert_eq!(outcome.turn, TurnOutcome::Selected((0, 1)));
        assert!(!engine.is_face_up((0, 0)));
    }

    #[test]
    fn matched_card_does_not_preempt_pending_mismatch() {
        let mut engine = engine(2, 3, "AABCBC");

        engine.click((0, 0)).unwrap();
        engine.click((0, 1)).unwrap();
        engine.click((0, 2)).unwrap();
        engine.click((1, 0)).unwrap();
        let outcome = engine.click((0, 0)).unwrap();

        assert_eq!(outcome, ClickOutcome::ignored());
        assert_eq!(engine.state(), TurnState::MismatchPending((0, 2), (1, 0)));
        assert_eq!(engine.attempts(), 2);
    }

    #[test]
    fn last_pair_wins_and_stops_input() {
        let mut engine = engine(2, 2, "ABAB");

        engine.click((0, 0)).unwrap();
        engine.click((1, 0)).unwrap();
        engine.click((0, 1)).unwrap();
        let outcome = engine.click((1, 1)).unwrap();

        assert_eq!(outcome.turn, TurnOutcome::Won((0, 1), (1, 1)));
        assert_eq!(engine.state(), TurnState::Won);
        assert!(engine.is_finished());
        assert_eq!(engine.attempts(), 2);
        assert_eq!(engine.matches_found(), engine.total_pairs());
    }

    #[test]
    fn out_of_bounds_click_is_an_error() {
        let mut engine = engine(2, 2, "ABAB");

        assert_eq!(engine.click((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(engine.click((0, 2)), Err(GameError::InvalidCoords));
        assert_eq!(engine.state(), TurnState::Idle);
    }
}
