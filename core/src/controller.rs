use core::fmt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use web_time::Instant;

use crate::*;

/// Final numbers announced when the last pair is found.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    pub elapsed_secs: u64,
    pub attempts: u32,
}

impl fmt::Display for GameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Congratulations!\n\nYou completed the game in {}m {}s\nNumber of attempts: {}",
            self.elapsed_secs / 60,
            self.elapsed_secs % 60,
            self.attempts
        )
    }
}

/// Formats seconds as `MM:SS`, minutes are not capped.
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// State that lives exactly as long as one board.
#[derive(Debug)]
struct Session {
    engine: MatchEngine,
    started_at: Option<Instant>,
    ticker: Option<TimerHandle>,
    pending_hide: Option<TimerHandle>,
}

impl Session {
    fn elapsed_secs(&self, now: Instant) -> u64 {
        self.started_at
            .map_or(0, |started_at| now.saturating_duration_since(started_at).as_secs())
    }
}

/// Drives one game at a time on top of a [`Host`].
pub struct GameController<H: Host> {
    host: H,
    timings: Timings,
    seeds: SmallRng,
    session: Option<Session>,
    pending_summary: Option<TimerHandle>,
}

impl<H: Host> GameController<H> {
    pub fn new(host: H, seed: u64) -> Self {
        Self::with_timings(host, seed, Timings::default())
    }

    pub fn with_timings(host: H, seed: u64, timings: Timings) -> Self {
        Self {
            host,
            timings,
            seeds: SmallRng::seed_from_u64(seed),
            session: None,
            pending_summary: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Engine of the current board, if a game is on
    pub fn engine(&self) -> Option<&MatchEngine> {
        self.session.as_ref().map(|session| &session.engine)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Validates raw dimensions and starts a game with them.
    ///
    /// On rejection the reason is shown through the dialog and the current
    /// game, if any, is left as it was.
    pub fn start_custom(
        &mut self,
        rows: &str,
        cols: &str,
    ) -> core::result::Result<BoardSize, SizeError> {
        match BoardSize::parse(rows, cols) {
            Ok(size) => {
                self.start_game(size);
                Ok(size)
            }
            Err(err) => {
                log::info!("rejected custom size {:?} x {:?}: {:?}", rows, cols, err);
                self.host.alert(&err.to_string());
                Err(err)
            }
        }
    }

    /// Starts a square preset board, skipping validation.
    pub fn start_preset(&mut self, side: Coord) -> Option<BoardSize> {
        let Some(size) = BoardSize::preset(side) else {
            log::warn!("no preset with side {}", side);
            return None;
        };
        self.start_game(size);
        Some(size)
    }

    pub fn start_game(&mut self, size: BoardSize) {
        self.reset();

        let seed: u64 = self.seeds.random();
        let board = RandomBoardGenerator::new(seed).generate(size);
        log::debug!("starting {} game, seed {}", size, seed);

        self.host.set_grid_columns(size.cols());
        self.host.set_attempts(0);
        self.host.set_time(&format_clock(0));
        for (coords, _) in board.iter() {
            self.host.create_cell(coords);
            self.host.attach_click_handler(coords);
        }

        let ticker = self
            .host
            .schedule_repeating(self.timings.tick_ms, TimerEvent::Tick);
        self.session = Some(Session {
            engine: MatchEngine::new(board),
            started_at: None,
            ticker: Some(ticker),
            pending_hide: None,
        });
    }

    /// Clears the board and cancels the ticker and any pending hide.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!(
                "dropping board after {} attempts",
                session.engine.attempts()
            );
            for handle in [session.ticker, session.pending_hide].into_iter().flatten() {
                self.host.cancel(handle);
            }
        }
        self.host.clear();
    }

    pub fn on_card_click(&mut self, coords: Coord2) {
        let timings = self.timings;
        let Some(session) = self.session.as_mut() else {
            log::trace!("click at {:?} without a board", coords);
            return;
        };
        let host = &mut self.host;

        let outcome = match session.engine.click(coords) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("click at {:?} rejected: {}", coords, err);
                return;
            }
        };

        if let Some((first, second)) = outcome.preempted {
            if let Some(handle) = session.pending_hide.take() {
                host.cancel(handle);
            }
            mask_card(host, first);
            mask_card(host, second);
        }

        match outcome.turn {
            TurnOutcome::Ignored => return,
            TurnOutcome::Selected(coords) => {
                session.started_at.get_or_insert_with(|| host.now());
                show_card(host, coords, *session.engine.card_at(coords));
            }
            TurnOutcome::Matched(_, second)
            | TurnOutcome::Mismatched(_, second)
            | TurnOutcome::Won(_, second) => {
                show_card(host, second, *session.engine.card_at(second));
            }
        }

        if outcome.turn.completes_attempt() {
            host.set_attempts(session.engine.attempts());
        }

        if let TurnOutcome::Mismatched(..) = outcome.turn {
            let handle = host.schedule_once(timings.mismatch_hide_ms, TimerEvent::HideMismatch);
            session.pending_hide = Some(handle);
        }

        if let TurnOutcome::Won(..) = outcome.turn {
            self.finish_game();
        }
    }

    pub fn on_timer(&mut self, handle: TimerHandle, event: TimerEvent) {
        match event {
            TimerEvent::Tick => self.tick(handle),
            TimerEvent::HideMismatch => self.hide_mismatch(handle),
            TimerEvent::ShowSummary(summary) => self.show_summary(handle, summary),
        }
    }

    fn tick(&mut self, handle: TimerHandle) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if session.ticker != Some(handle) {
            log::trace!("stale tick {:?}", handle);
            return;
        }
        if session.started_at.is_some() {
            let secs = session.elapsed_secs(self.host.now());
            self.host.set_time(&format_clock(secs));
        }
    }

    fn hide_mismatch(&mut self, handle: TimerHandle) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.pending_hide != Some(handle) {
            log::trace!("stale hide {:?}", handle);
            return;
        }
        session.pending_hide = None;
        self.host.cancel(handle);

        if let Some((first, second)) = session.engine.hide_mismatch() {
            mask_card(&mut self.host, first);
            mask_card(&mut self.host, second);
        }
    }

    fn finish_game(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(ticker) = session.ticker.take() {
            self.host.cancel(ticker);
        }

        let summary = GameSummary {
            elapsed_secs: session.elapsed_secs(self.host.now()),
            attempts: session.engine.attempts(),
        };
        log::info!("all pairs found: {:?}", summary);

        let handle = self.host.schedule_once(
            self.timings.summary_delay_ms,
            TimerEvent::ShowSummary(summary),
        );
        if let Some(previous) = self.pending_summary.replace(handle) {
            self.host.cancel(previous);
        }
    }

    fn show_summary(&mut self, handle: TimerHandle, summary: GameSummary) {
        if self.pending_summary != Some(handle) {
            log::trace!("stale summary {:?}", handle);
            return;
        }
        self.pending_summary = None;
        self.host.cancel(handle);

        self.host.alert(&summary.to_string());

        // a game started while the summary was pending stays untouched
        if self
            .session
            .as_ref()
            .is_some_and(|session| session.engine.is_finished())
        {
            self.reset();
        }
    }
}

fn show_card<S: Surface>(surface: &mut S, coords: Coord2, card: Card) {
    log::trace!("show {:?} ({} {:?})", coords, card.symbol(), card.color());
    surface.set_label(coords, Some(card.symbol()));
    surface.set_color(coords, card.color());
    surface.set_background(coords, Background::Face);
}

fn mask_card<S: Surface>(surface: &mut S, coords: Coord2) {
    log::trace!("mask {:?}", coords);
    surface.set_label(coords, None);
    surface.set_background(coords, Background::Neutral);
}
