use gloo::timers::callback::{Interval, Timeout};
use hashbrown::HashMap;
use memento_core::{
    Background, CardColor, Coord, Coord2, Dialog, Scheduler, Surface, TimerEvent, TimerHandle,
};
use web_time::Instant;
use yew::html::Scope;

use crate::game::{GameView, Msg};

/// What one rendered card looks like.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CellView {
    pub coords: Coord2,
    pub label: Option<char>,
    pub color: Option<CardColor>,
    pub background: Background,
    pub clickable: bool,
}

impl CellView {
    fn hidden(coords: Coord2) -> Self {
        Self {
            coords,
            label: None,
            color: None,
            background: Background::Neutral,
            clickable: false,
        }
    }

    pub fn style(&self) -> String {
        let background = self.background.css_value();
        match self.color {
            Some(color) => format!("color: {}; background-color: {}", color.css_name(), background),
            None => format!("background-color: {}", background),
        }
    }
}

/// In-memory rendering surface, drawn by [`GameView`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct BoardView {
    cols: Coord,
    cells: Vec<CellView>,
    attempts: u32,
    time: String,
    dirty: bool,
}

impl BoardView {
    pub fn cols(&self) -> Coord {
        self.cols
    }

    pub fn cells(&self) -> &[CellView] {
        &self.cells
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    /// Whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn cell_mut(&mut self, (row, col): Coord2) -> Option<&mut CellView> {
        let index = usize::from(row) * usize::from(self.cols) + usize::from(col);
        let cell = self
            .cells
            .get_mut(index)
            .filter(|cell| cell.coords == (row, col));
        if cell.is_none() {
            log::warn!("no cell at {:?}", (row, col));
        }
        cell
    }

    fn update_cell(&mut self, coords: Coord2, update: impl FnOnce(&mut CellView)) {
        if let Some(cell) = self.cell_mut(coords) {
            update(cell);
            self.dirty = true;
        }
    }
}

impl Surface for BoardView {
    fn clear(&mut self) {
        self.cells.clear();
        self.dirty = true;
    }

    fn set_grid_columns(&mut self, cols: Coord) {
        self.cols = cols;
        self.dirty = true;
    }

    fn create_cell(&mut self, coords: Coord2) {
        self.cells.push(CellView::hidden(coords));
        self.dirty = true;
    }

    fn attach_click_handler(&mut self, coords: Coord2) {
        self.update_cell(coords, |cell| cell.clickable = true);
    }

    fn set_label(&mut self, coords: Coord2, label: Option<char>) {
        self.update_cell(coords, |cell| cell.label = label);
    }

    fn set_color(&mut self, coords: Coord2, color: CardColor) {
        self.update_cell(coords, |cell| cell.color = Some(color));
    }

    fn set_background(&mut self, coords: Coord2, background: Background) {
        self.update_cell(coords, |cell| cell.background = background);
    }

    fn set_attempts(&mut self, attempts: u32) {
        self.attempts = attempts;
        self.dirty = true;
    }

    fn set_time(&mut self, text: &str) {
        if self.time != text {
            self.time = text.to_string();
            self.dirty = true;
        }
    }
}

/// A live browser timer, stopped when cancelled.
enum ScheduledTask {
    Once(Timeout),
    Repeating(Interval),
}

impl ScheduledTask {
    fn cancel(self) {
        match self {
            Self::Once(timeout) => drop(timeout.cancel()),
            Self::Repeating(interval) => drop(interval.cancel()),
        }
    }
}

/// Browser side of the controller: board view, gloo timers and alert dialogs.
pub(crate) struct WebHost {
    link: Scope<GameView>,
    board: BoardView,
    next_timer: u32,
    timers: HashMap<TimerHandle, ScheduledTask>,
}

impl WebHost {
    pub fn new(link: Scope<GameView>) -> Self {
        Self {
            link,
            board: BoardView::default(),
            next_timer: 0,
            timers: HashMap::new(),
        }
    }

    pub fn board(&self) -> &BoardView {
        &self.board
    }

    pub fn take_dirty(&mut self) -> bool {
        self.board.take_dirty()
    }

    fn next_handle(&mut self) -> TimerHandle {
        self.next_timer = self.next_timer.wrapping_add(1);
        TimerHandle::new(self.next_timer)
    }
}

impl Surface for WebHost {
    fn clear(&mut self) {
        self.board.clear();
    }

    fn set_grid_columns(&mut self, cols: Coord) {
        self.board.set_grid_columns(cols);
    }

    fn create_cell(&mut self, coords: Coord2) {
        self.board.create_cell(coords);
    }

    fn attach_click_handler(&mut self, coords: Coord2) {
        self.board.attach_click_handler(coords);
    }

    fn set_label(&mut self, coords: Coord2, label: Option<char>) {
        self.board.set_label(coords, label);
    }

    fn set_color(&mut self, coords: Coord2, color: CardColor) {
        self.board.set_color(coords, color);
    }

    fn set_background(&mut self, coords: Coord2, background: Background) {
        self.board.set_background(coords, background);
    }

    fn set_attempts(&mut self, attempts: u32) {
        self.board.set_attempts(attempts);
    }

    fn set_time(&mut self, text: &str) {
        self.board.set_time(text);
    }
}

impl Dialog for WebHost {
    fn alert(&mut self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

impl Scheduler for WebHost {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn schedule_once(&mut self, delay_ms: u32, event: TimerEvent) -> TimerHandle {
        let handle = self.next_handle();
        let link = self.link.clone();
        let timeout = Timeout::new(delay_ms, move || link.send_message(Msg::Timer(handle, event)));
        self.timers.insert(handle, ScheduledTask::Once(timeout));
        log::trace!("timer {:?} in {}ms: {:?}", handle, delay_ms, event);
        handle
    }

    fn schedule_repeating(&mut self, period_ms: u32, event: TimerEvent) -> TimerHandle {
        let handle = self.next_handle();
        let link = self.link.clone();
        let interval =
            Interval::new(period_ms, move || link.send_message(Msg::Timer(handle, event)));
        self.timers.insert(handle, ScheduledTask::Repeating(interval));
        log::trace!("timer {:?} every {}ms: {:?}", handle, period_ms, event);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(task) = self.timers.remove(&handle) {
            log::trace!("timer {:?} cancelled", handle);
            task.cancel();
        }
    }
}
