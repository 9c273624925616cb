//! Main TUI application state and logic

use crate::interpreter::outline::outline;
use crate::session::{Entry, Session};
use crate::ui::constants::{EVENT_POLL_INTERVAL, HISTORY_CAPACITY};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Tree,
    Tokens,
    History,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> tree -> tokens -> history)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::History,
            FocusedPane::History => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::History,
            FocusedPane::Tree => FocusedPane::Input,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::History => FocusedPane::Tokens,
        }
    }
}

/// The main application state
pub struct App {
    /// Submitted expressions and their outcomes
    pub session: Session,

    /// Line being edited
    pub input: String,

    /// Cursor position in `input`, in characters
    pub cursor: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// History entry shown in the result, tree and tokens panes
    pub selected: Option<usize>,

    /// History entry recalled into the input with Up/Down, if any
    pub recall: Option<usize>,

    /// Per-pane scroll offsets
    pub tree_scroll: usize,
    pub tokens_scroll: usize,
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,
}

impl App {
    pub fn new() -> Self {
        App {
            session: Session::new(HISTORY_CAPACITY),
            input: String::new(),
            cursor: 0,
            focused_pane: FocusedPane::Input,
            selected: None,
            recall: None,
            tree_scroll: 0,
            tokens_scroll: 0,
            history_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(EVENT_POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// The entry shown in the detail panes
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.and_then(|i| self.session.get(i))
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input on top, panes in the middle, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[1]);

        // Left column: Result (top) | Tree (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(columns[0]);

        // Right column: Tokens (top) | History (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        super::panes::render_input_pane(
            frame,
            main_chunks[0],
            &self.input,
            self.cursor,
            self.focused_pane == FocusedPane::Input,
        );

        let entry = self.selected.and_then(|i| self.session.get(i));
        let evaluation = entry.and_then(|e| e.outcome.as_ref().ok());

        super::panes::render_result_pane(frame, left_rows[0], entry);

        let tree_lines = evaluation.map(|e| outline(&e.expr)).unwrap_or_default();
        super::panes::render_tree_pane(
            frame,
            left_rows[1],
            &tree_lines,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        let tokens = evaluation.map(|e| e.tokens.as_slice()).unwrap_or(&[]);
        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_history_pane(
            frame,
            right_rows[1],
            self.session.entries(),
            self.selected,
            self.focused_pane == FocusedPane::History,
            &mut self.history_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.len(),
            self.status_is_error,
        );
    }

    /// Handle keyboard events.
    ///
    /// Line editing keys only act while the input pane has focus; elsewhere
    /// Up/Down scroll or move the history selection.
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('d') = key.code {
                self.should_quit = true;
            }
            return;
        }

        let editing = self.focused_pane == FocusedPane::Input;

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c) if editing => {
                self.insert_char(c);
            }
            KeyCode::Backspace if editing => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_char_at_cursor();
                }
            }
            KeyCode::Delete if editing => {
                self.remove_char_at_cursor();
            }
            KeyCode::Left if editing => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Right if editing => {
                self.cursor = (self.cursor + 1).min(self.input.chars().count());
            }
            KeyCode::Home if editing => {
                self.cursor = 0;
            }
            KeyCode::End if editing => {
                self.cursor = self.input.chars().count();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Input => self.recall_older(),
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_sub(1);
                }
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_sub(1);
                }
                FocusedPane::History => {
                    if let Some(i) = self.selected {
                        self.select(i.saturating_sub(1));
                    }
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Input => self.recall_newer(),
                FocusedPane::Tree => {
                    self.tree_scroll = self.tree_scroll.saturating_add(1);
                }
                FocusedPane::Tokens => {
                    self.tokens_scroll = self.tokens_scroll.saturating_add(1);
                }
                FocusedPane::History => {
                    if let Some(i) = self.selected {
                        if i + 1 < self.session.len() {
                            self.select(i + 1);
                        }
                    }
                }
            },
            _ => {}
        }
    }

    /// Evaluate the input line and show the result
    fn submit(&mut self) {
        if self.input.trim().is_empty() {
            self.status_message = "Nothing to evaluate".to_string();
            self.status_is_error = false;
            return;
        }

        let source = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.recall = None;

        let entry = self.session.submit(&source);
        match &entry.outcome {
            Ok(evaluation) => {
                self.status_message = match &evaluation.overflow {
                    Some(_) => format!("{} (wrapped on overflow)", evaluation.value),
                    None => format!("{} = {}", evaluation.prefix, evaluation.value),
                };
                self.status_is_error = false;
            }
            Err(err) => {
                self.status_message = err.to_string();
                self.status_is_error = true;
            }
        }

        let newest = self.session.len() - 1;
        self.select(newest);
        self.history_scroll = usize::MAX;
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.tree_scroll = 0;
        self.tokens_scroll = 0;
    }

    /// Step the input back through history (Up)
    fn recall_older(&mut self) {
        if self.session.is_empty() {
            return;
        }
        let index = match self.recall {
            None => self.session.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.load_recalled(index);
    }

    /// Step the input forward through history (Down); past the newest entry
    /// the input is cleared
    fn recall_newer(&mut self) {
        match self.recall {
            Some(i) if i + 1 < self.session.len() => self.load_recalled(i + 1),
            Some(_) => {
                self.recall = None;
                self.input.clear();
                self.cursor = 0;
            }
            None => {}
        }
    }

    fn load_recalled(&mut self, index: usize) {
        if let Some(entry) = self.session.get(index) {
            self.input = entry.source.clone();
            self.cursor = self.input.chars().count();
            self.recall = Some(index);
            self.select(index);
        }
    }

    /// Byte offset of the character at `self.cursor`
    fn cursor_byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    fn insert_char(&mut self, c: char) {
        let offset = self.cursor_byte_offset();
        self.input.insert(offset, c);
        self.cursor += 1;
    }

    fn remove_char_at_cursor(&mut self) {
        let offset = self.cursor_byte_offset();
        if offset < self.input.len() {
            self.input.remove(offset);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_submit_evaluates_and_clears_input() {
        let mut app = App::new();
        type_str(&mut app, "1+2*3");
        press(&mut app, KeyCode::Enter);

        assert!(app.input.is_empty());
        assert_eq!(app.cursor, 0);
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.status_message, "(+ 1 (* 2 3)) = 7");
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_submit_error_sets_error_status() {
        let mut app = App::new();
        type_str(&mut app, "1 2");
        press(&mut app, KeyCode::Enter);

        assert!(app.status_is_error);
        assert_eq!(
            app.status_message,
            "Parse error: expected end of input, but got number"
        );
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut app = App::new();
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut app = App::new();
        type_str(&mut app, "13");
        press(&mut app, KeyCode::Left);
        type_str(&mut app, "+2*");
        assert_eq!(app.input, "1+2*3");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input, "+2*3");

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "+2*");
    }

    #[test]
    fn test_history_recall() {
        let mut app = App::new();
        type_str(&mut app, "1+1");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "2*2");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "2*2");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "1+1");
        assert_eq!(app.selected, Some(0));
        press(&mut app, KeyCode::Up);
        assert_eq!(app.input, "1+1");

        press(&mut app, KeyCode::Down);
        assert_eq!(app.input, "2*2");
        press(&mut app, KeyCode::Down);
        assert!(app.input.is_empty());
        assert_eq!(app.recall, None);
    }

    #[test]
    fn test_focus_cycle_and_quit() {
        let mut app = App::new();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Input);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_editing_keys_need_input_focus() {
        let mut app = App::new();
        type_str(&mut app, "12");

        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "+3");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.input, "12");
        assert_eq!(app.cursor, 2);

        press(&mut app, KeyCode::BackTab);
        type_str(&mut app, "+3");
        assert_eq!(app.input, "12+3");
    }

    fn selection_marker_visible(terminal: &Terminal<TestBackend>) -> bool {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .any(|cell| cell.symbol() == "▶")
    }

    #[test]
    fn test_history_selection_stays_visible() {
        let mut app = App::new();
        for i in 1..=30 {
            type_str(&mut app, &i.to_string());
            press(&mut app, KeyCode::Enter);
        }

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        assert!(selection_marker_visible(&terminal));

        while app.focused_pane != FocusedPane::History {
            press(&mut app, KeyCode::Tab);
        }

        for _ in 0..25 {
            press(&mut app, KeyCode::Up);
            terminal.draw(|f| app.render(f)).unwrap();
            assert!(
                selection_marker_visible(&terminal),
                "selected={:?} history_scroll={}",
                app.selected,
                app.history_scroll
            );
        }
        assert_eq!(app.selected, Some(4));
        assert!(app.history_scroll <= 4);

        for _ in 0..25 {
            press(&mut app, KeyCode::Down);
            terminal.draw(|f| app.render(f)).unwrap();
            assert!(selection_marker_visible(&terminal));
        }
        assert_eq!(app.selected, Some(29));
    }
}
