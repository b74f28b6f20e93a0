// App state and event handling.
// Owns the fetch lifecycle, the working collection, and the detail overlay.
// Child views never mutate state directly: key and mouse events are turned
// into Intent values applied by a single reducer.

use chrono::{DateTime, Utc};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::api::User;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::state::{Directory, LoadState};

/// A mutation intent dispatched from the list or detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Mark a record as the active selection and open the detail view.
    Select(u64),
    /// Remove a record from the working collection.
    Delete(u64),
    /// Dismiss the detail view. Escape, outside-click, and the explicit
    /// close key all emit this same intent.
    CloseDetail,
}

/// Main application state.
pub struct App {
    /// Status of the one startup fetch.
    pub load: LoadState,
    /// Session-local collection of user records.
    pub directory: Directory,
    /// Underlying failure causes and activity, never shown raw.
    pub diagnostics: Diagnostics,
    /// Bounds of the detail modal as last rendered, for mouse hit-testing.
    /// None while the modal is closed.
    pub detail_bounds: Option<Rect>,
    /// When the listing finished loading.
    pub loaded_at: Option<DateTime<Utc>>,
    /// Whether the diagnostics log overlay is shown.
    pub show_diagnostics: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            load: LoadState::default(),
            directory: Directory::default(),
            diagnostics: Diagnostics::default(),
            detail_bounds: None,
            loaded_at: None,
            show_diagnostics: false,
            should_quit: false,
        }
    }

    /// Apply the outcome of the startup fetch. Both resulting states are
    /// terminal: there is no retry within a session.
    pub fn on_fetch_outcome(&mut self, outcome: Result<Vec<User>>) {
        let (state, users, cause) = LoadState::resolve(outcome);
        match &state {
            LoadState::Ready => {
                self.loaded_at = Some(Utc::now());
                self.diagnostics.info(format!("loaded {} users", users.len()));
            }
            LoadState::Failed(_) => {
                if let Some(cause) = cause {
                    self.diagnostics.error(format!("fetch failed: {cause}"));
                }
            }
            LoadState::Loading => {}
        }
        self.load = state;
        self.directory.set_users(users);
    }

    /// Apply a mutation intent to the working collection.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Select(id) => self.directory.select(id),
            Intent::Delete(id) => self.directory.delete(id),
            Intent::CloseDetail => self.directory.close_detail(),
        }
    }

    /// Handle a terminal event.
    pub fn on_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.directory.detail_open() {
                    self.on_detail_key(key.code);
                } else if self.show_diagnostics {
                    self.on_diagnostics_key(key.code);
                } else {
                    self.on_list_key(key.code);
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(_) = mouse.kind {
                    self.on_mouse_down(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }

    /// Keys while the detail view is open.
    fn on_detail_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => {
                self.apply(Intent::CloseDetail);
            }
            _ => {}
        }
    }

    /// Keys while the diagnostics log overlay is shown.
    fn on_diagnostics_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('`') => self.show_diagnostics = false,
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Keys while the list has focus.
    fn on_list_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('`') => self.show_diagnostics = true,
            KeyCode::Down | KeyCode::Char('j') => self.directory.cursor_next(),
            KeyCode::Up | KeyCode::Char('k') => self.directory.cursor_prev(),
            KeyCode::Enter => {
                if let Some(id) = self.directory.cursor_user().map(|u| u.id) {
                    self.apply(Intent::Select(id));
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.directory.cursor_user().map(|u| u.id) {
                    self.apply(Intent::Delete(id));
                }
            }
            _ => {}
        }
    }

    /// A mouse press outside the rendered modal bounds dismisses the detail
    /// view; a press inside it does not.
    fn on_mouse_down(&mut self, column: u16, row: u16) {
        if !self.directory.detail_open() {
            return;
        }
        let inside = self
            .detail_bounds
            .is_some_and(|bounds| bounds.contains(Position::new(column, row)));
        if !inside {
            self.apply(Intent::CloseDetail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent};

    use crate::error::RosterError;
    use crate::state::loader::FETCH_FAILED_MESSAGE;

    fn loaded_app() -> App {
        let mut app = App::new();
        let users: Vec<User> = serde_json::from_str(&format!(
            "[{}]",
            crate::api::types::tests::SAMPLE_USER_JSON
        ))
        .unwrap();
        app.on_fetch_outcome(Ok(users));
        app
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse_down(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_fetch_success_reaches_ready() {
        let app = loaded_app();
        assert!(app.load.is_ready());
        assert_eq!(app.directory.len(), 1);
        assert!(app.loaded_at.is_some());
    }

    #[test]
    fn test_fetch_failure_reaches_failed_with_empty_collection() {
        let mut app = App::new();
        app.on_fetch_outcome(Err(RosterError::Status {
            status: 500,
            url: "https://jsonplaceholder.typicode.com/users".to_string(),
        }));
        assert_eq!(app.load, LoadState::Failed(FETCH_FAILED_MESSAGE.to_string()));
        assert!(app.directory.is_empty());
        // Cause is recorded for diagnostics.
        assert!(app.diagnostics.latest().unwrap().message.contains("500"));
    }

    #[test]
    fn test_enter_selects_record_under_cursor() {
        let mut app = loaded_app();
        app.on_event(&press(KeyCode::Enter));
        assert!(app.directory.detail_open());
        assert_eq!(app.directory.detail_user().unwrap().id, 1);
    }

    #[test]
    fn test_delete_key_removes_record_under_cursor() {
        let mut app = loaded_app();
        app.on_event(&press(KeyCode::Char('d')));
        assert!(app.directory.is_empty());
    }

    #[test]
    fn test_all_dismissal_paths_reach_same_closed_state() {
        for dismiss in [press(KeyCode::Esc), press(KeyCode::Char('x')), mouse_down(0, 0)] {
            let mut app = loaded_app();
            app.on_event(&press(KeyCode::Enter));
            app.detail_bounds = Some(Rect::new(10, 5, 40, 12));
            app.on_event(&dismiss);
            assert!(!app.directory.detail_open());
            assert!(!app.should_quit);
        }
    }

    #[test]
    fn test_mouse_press_inside_modal_does_not_dismiss() {
        let mut app = loaded_app();
        app.on_event(&press(KeyCode::Enter));
        app.detail_bounds = Some(Rect::new(10, 5, 40, 12));
        app.on_event(&mouse_down(15, 8));
        assert!(app.directory.detail_open());
    }

    #[test]
    fn test_quit_key_ignored_while_detail_open() {
        let mut app = loaded_app();
        app.on_event(&press(KeyCode::Enter));
        app.on_event(&press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert!(!app.directory.detail_open());
    }

    #[test]
    fn test_diagnostics_overlay_toggles() {
        let mut app = loaded_app();
        app.on_event(&press(KeyCode::Char('`')));
        assert!(app.show_diagnostics);
        app.on_event(&press(KeyCode::Esc));
        assert!(!app.show_diagnostics);
    }

    #[test]
    fn test_quit_key_exits_from_list() {
        let mut app = loaded_app();
        app.on_event(&press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
