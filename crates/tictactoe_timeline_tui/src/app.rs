//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_timeline::{HistoryOrder, Position, Timeline};
use tracing::{debug, instrument};

use super::input::{digit_position, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
}

impl App {
    /// Creates a new application with the move list in `order`.
    pub fn new(order: HistoryOrder) -> Self {
        let mut app = Self {
            timeline: Timeline::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        };
        app.select_current();
        app
    }

    /// The game being played.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => {
                self.focus = self.focus.toggled();
                self.select_current();
            }
            KeyCode::Char('o') => self.toggle_order(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
        Control::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let rows = self.timeline.len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = rows - 1,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        self.timeline.apply_move(pos);
        self.select_current();
    }

    fn jump_to_selected(&mut self) {
        let Some(entry) = self.timeline.move_list().into_iter().nth(self.selected) else {
            return;
        };
        if let Err(e) = self.timeline.try_jump_to(entry.step) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Flips the move-list order, keeping the same step selected.
    fn toggle_order(&mut self) {
        let step = self.selected_step();
        self.timeline.toggle_history_order();
        self.selected = self.row_of(step);
    }

    fn select_current(&mut self) {
        self.selected = self.row_of(self.timeline.step());
    }

    fn selected_step(&self) -> usize {
        match self.timeline.order() {
            HistoryOrder::Ascending => self.selected,
            HistoryOrder::Descending => self.timeline.len() - 1 - self.selected,
        }
    }

    fn row_of(&self, step: usize) -> usize {
        match self.timeline.order() {
            HistoryOrder::Ascending => step,
            HistoryOrder::Descending => self.timeline.len() - 1 - step,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(HistoryOrder::default())
    }
}
