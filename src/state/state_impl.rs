use crate::config::ModeHotkeys;
use crate::logger::LogBuffer;
use crate::store::{Summary, Task, TaskId, TaskStore};
use crate::ui::Theme;
use crossterm::event::KeyCode;
use log::*;
use ratatui::widgets::ListState;
use tui_textarea::{CursorMove, TextArea};

use super::navigation::{Dialog, Mode};

/// Houses data representative of application state.
///
/// The task store is the single source of truth for tasks. Everything else
/// here (selection, dialogs, pending input, log panel) is transient UI state
/// that never reaches the store.
pub struct State {
    store: TaskStore,
    tasks_list_state: ListState,
    dialog: Option<Dialog>,
    add_task_input: TextArea<'static>, // Draft title, kept when the dialog is cancelled
    show_log: bool,
    debug_mode: bool,
    debug_index: usize,
    log_buffer: LogBuffer,
    theme: Theme,
    hotkeys: ModeHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            store: TaskStore::new(),
            tasks_list_state: ListState::default(),
            dialog: None,
            add_task_input: TextArea::default(),
            show_log: false,
            debug_mode: false,
            debug_index: 0,
            log_buffer: LogBuffer::default(),
            theme: Theme::default(),
            hotkeys: ModeHotkeys::default(),
        }
    }
}

impl State {
    pub fn new(
        store: TaskStore,
        log_buffer: LogBuffer,
        theme: Theme,
        hotkeys: ModeHotkeys,
        show_log: bool,
    ) -> Self {
        let mut state = State {
            store,
            log_buffer,
            theme,
            hotkeys,
            show_log,
            ..State::default()
        };
        state.clamp_task_selection();
        state
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Get the active hotkey bindings.
    ///
    pub fn get_hotkeys(&self) -> &ModeHotkeys {
        &self.hotkeys
    }

    /// Return tasks in display order.
    ///
    pub fn get_tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Return completed and incomplete counts for the header.
    ///
    pub fn get_summary(&self) -> Summary {
        self.store.summarize()
    }

    /// Return the active input mode.
    ///
    pub fn current_mode(&self) -> Mode {
        match self.dialog {
            Some(Dialog::AddTask) => Mode::AddTask,
            Some(Dialog::DeleteConfirmation { .. }) => Mode::DeleteConfirmation,
            None if self.debug_mode => Mode::Debug,
            None => Mode::TaskList,
        }
    }

    /// Return the open dialog, if any.
    ///
    pub fn current_dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    /// Return the list state used to render the task list.
    ///
    pub fn get_tasks_list_state(&mut self) -> &mut ListState {
        &mut self.tasks_list_state
    }

    /// Return the selected task index.
    ///
    pub fn current_task_index(&self) -> Option<usize> {
        self.tasks_list_state.selected()
    }

    /// Return the selected task.
    ///
    pub fn selected_task(&self) -> Option<&Task> {
        self.current_task_index()
            .and_then(|index| self.store.tasks().get(index))
    }

    /// Activate the next task.
    ///
    pub fn next_task_index(&mut self) -> &mut Self {
        let len = self.store.len();
        if len == 0 {
            self.tasks_list_state.select(None);
            return self;
        }
        let next = match self.tasks_list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.tasks_list_state.select(Some(next));
        self
    }

    /// Activate the previous task.
    ///
    pub fn previous_task_index(&mut self) -> &mut Self {
        let len = self.store.len();
        if len == 0 {
            self.tasks_list_state.select(None);
            return self;
        }
        let prev = match self.tasks_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.tasks_list_state.select(Some(prev));
        self
    }

    /// Keep the selection within the bounds of the task list.
    ///
    fn clamp_task_selection(&mut self) {
        let len = self.store.len();
        let selected = match self.tasks_list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.tasks_list_state.select(selected);
    }

    /// Open the add task dialog. Any draft left from a cancelled dialog is
    /// kept.
    ///
    pub fn open_add_task_dialog(&mut self) -> &mut Self {
        self.dialog = Some(Dialog::AddTask);
        self
    }

    /// Return the pending add task text.
    ///
    pub fn get_add_task_input(&self) -> String {
        self.add_task_input.lines().join(" ")
    }

    /// Return the cursor column within the pending add task text.
    ///
    pub fn get_add_task_cursor(&self) -> usize {
        self.add_task_input.cursor().1
    }

    /// Apply a key to the pending add task text.
    ///
    pub fn edit_add_task_input(&mut self, code: KeyCode) -> &mut Self {
        match code {
            KeyCode::Char(c) => self.add_task_input.insert_char(c),
            KeyCode::Backspace => {
                self.add_task_input.delete_char();
            }
            KeyCode::Delete => {
                self.add_task_input.delete_next_char();
            }
            KeyCode::Left => self.add_task_input.move_cursor(CursorMove::Back),
            KeyCode::Right => self.add_task_input.move_cursor(CursorMove::Forward),
            KeyCode::Home => self.add_task_input.move_cursor(CursorMove::Head),
            KeyCode::End => self.add_task_input.move_cursor(CursorMove::End),
            _ => {}
        }
        self
    }

    /// Submit the pending add task text to the store. On success the draft
    /// is cleared, the dialog closes and the new task is selected. Blank text
    /// leaves the dialog open.
    ///
    pub fn submit_add_task(&mut self) -> &mut Self {
        let text = self.get_add_task_input();
        match self.store.add(&text) {
            Ok(id) => {
                info!("Created task {}.", id);
                self.add_task_input = TextArea::default();
                self.dialog = None;
                self.tasks_list_state.select(Some(self.store.len() - 1));
            }
            Err(e) => debug!("Keeping add dialog open: {}", e),
        }
        self
    }

    /// Flip the completion status of the selected task.
    ///
    pub fn toggle_selected_task(&mut self) -> &mut Self {
        let target = self
            .selected_task()
            .map(|task| (task.id(), !task.is_completed()));
        if let Some((id, completed)) = target {
            self.set_task_completed(id, completed);
        }
        self
    }

    /// Ask the store to set the completion status of a task.
    ///
    pub fn set_task_completed(&mut self, id: TaskId, completed: bool) -> &mut Self {
        if let Err(e) = self.store.toggle(id, completed) {
            warn!("Ignoring completion change: {}", e);
        }
        self
    }

    /// Ask for confirmation before deleting the selected task.
    ///
    pub fn request_delete_selected_task(&mut self) -> &mut Self {
        if let Some(id) = self.selected_task().map(|task| task.id()) {
            self.dialog = Some(Dialog::DeleteConfirmation { id });
        }
        self
    }

    /// Return the task pending deletion confirmation.
    ///
    pub fn pending_delete_task(&self) -> Option<&Task> {
        match self.dialog {
            Some(Dialog::DeleteConfirmation { id }) => self.store.get(id),
            _ => None,
        }
    }

    /// Delete the task pending confirmation.
    ///
    pub fn confirm_delete_task(&mut self) -> &mut Self {
        if let Some(Dialog::DeleteConfirmation { id }) = self.dialog {
            self.dialog = None;
            match self.store.remove(id) {
                Ok(task) => info!("Deleted task {} '{}'.", id, task.title()),
                Err(e) => warn!("Ignoring delete request: {}", e),
            }
            self.clamp_task_selection();
        }
        self
    }

    /// Close any open dialog without touching the store.
    ///
    pub fn cancel_dialog(&mut self) -> &mut Self {
        self.dialog = None;
        self
    }

    /// Return whether the log panel is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log || self.debug_mode
    }

    /// Show or hide the log panel.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return whether debug mode is active.
    ///
    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Enter debug mode, selecting the newest log entry.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        self.debug_index = self.log_buffer.len().saturating_sub(1);
        self
    }

    /// Exit debug mode.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    /// Return the buffered log entries.
    ///
    pub fn get_debug_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    /// Return the selected log entry index.
    ///
    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Select the next log entry.
    ///
    pub fn next_debug_entry(&mut self) -> &mut Self {
        let len = self.log_buffer.len();
        if self.debug_index + 1 < len {
            self.debug_index += 1;
        }
        self
    }

    /// Select the previous log entry.
    ///
    pub fn previous_debug_entry(&mut self) -> &mut Self {
        self.debug_index = self.debug_index.saturating_sub(1);
        self
    }
}
