use web_time::Instant;

use crate::*;

/// Identifies a scheduled timer for cancellation and delivery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u32);

impl TimerHandle {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Payload a timer hands back to [`GameController::on_timer`] when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    HideMismatch,
    ShowSummary(GameSummary),
}

/// Where cards and counters are drawn.
pub trait Surface {
    /// Remove every rendered cell.
    fn clear(&mut self);
    fn set_grid_columns(&mut self, cols: Coord);
    /// Add a face-down, unlabeled cell with a neutral background.
    fn create_cell(&mut self, coords: Coord2);
    /// Route clicks on the cell back to [`GameController::on_card_click`].
    fn attach_click_handler(&mut self, coords: Coord2);
    fn set_label(&mut self, coords: Coord2, label: Option<char>);
    fn set_color(&mut self, coords: Coord2, color: CardColor);
    fn set_background(&mut self, coords: Coord2, background: Background);
    fn set_attempts(&mut self, attempts: u32);
    fn set_time(&mut self, text: &str);
}

/// Blocking modal messages.
pub trait Dialog {
    fn alert(&mut self, message: &str);
}

/// Clock and cancellable timers.
///
/// Fired timers must be delivered through [`GameController::on_timer`] with
/// the handle returned here. Cancelling a handle that already fired or was
/// already cancelled does nothing.
pub trait Scheduler {
    fn now(&self) -> Instant;
    fn schedule_once(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle;
    fn schedule_repeating(&mut self, period_ms: u32, event: TimerEvent) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}

/// Everything the controller needs from its environment.
pub trait Host: Surface + Dialog + Scheduler {}

impl<T: Surface + Dialog + Scheduler> Host for T {}
