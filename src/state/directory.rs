// Working collection state for the user list.
// Owns the session's records, the keyboard cursor, and the detail-view
// selection. Display order equals arrival order; records are immutable once
// loaded and the only mutation is removal by id.

use ratatui::widgets::TableState;

use crate::api::User;

/// Session-local collection of user records plus list/detail UI state.
#[derive(Debug, Default)]
pub struct Directory {
    users: Vec<User>,
    /// Keyboard cursor over the table rows.
    pub table_state: TableState,
    /// Id of the record projected into the detail view, if any.
    active: Option<u64>,
    detail_open: bool,
}

impl Directory {
    /// Initialize the collection from the loader's payload, in arrival order.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.users = users;
        if self.users.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(0));
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Record under the keyboard cursor.
    pub fn cursor_user(&self) -> Option<&User> {
        self.users.get(self.table_state.selected()?)
    }

    /// Move the cursor down one row, staying at the end.
    pub fn cursor_next(&mut self) {
        if self.users.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= self.users.len() - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Move the cursor up one row, staying at the start.
    pub fn cursor_prev(&mut self) {
        if self.users.is_empty() {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Mark the record as the active selection and open the detail view.
    /// No-op if the id is not present in the collection.
    pub fn select(&mut self, id: u64) {
        if self.users.iter().any(|u| u.id == id) {
            self.active = Some(id);
            self.detail_open = true;
        }
    }

    /// Remove the record with the given id from the collection. Idempotent:
    /// an absent id is a no-op. Closes the detail view if the removed record
    /// was the active selection.
    pub fn delete(&mut self, id: u64) {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        if self.users.len() == before {
            return;
        }
        if self.active == Some(id) {
            self.active = None;
            self.detail_open = false;
        }
        // Clamp the cursor onto a surviving row.
        match self.table_state.selected() {
            Some(_) if self.users.is_empty() => self.table_state.select(None),
            Some(i) if i >= self.users.len() => {
                self.table_state.select(Some(self.users.len() - 1));
            }
            _ => {}
        }
    }

    /// Close the detail view. All dismissal paths route here.
    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }

    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    /// Record currently projected into the detail view, when open.
    pub fn detail_user(&self) -> Option<&User> {
        if !self.detail_open {
            return None;
        }
        let id = self.active?;
        self.users.iter().find(|u| u.id == id)
    }
}
