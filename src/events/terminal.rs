use crate::config::hotkeys::{get_action_for_mode, HotkeyAction};
use crate::state::{Mode, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
/// Key events are polled on a helper thread and forwarded over the channel.
/// All state mutation happens on the thread calling `handle_next`. The
/// helper thread owns the only sender, so its exit disconnects the channel.
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    /// Fails once the input thread has stopped.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => Ok(true),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a single key event to state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers == KeyModifiers::CONTROL {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    let mode = state.current_mode();
    let action = get_action_for_mode(&event, mode, state.get_hotkeys());
    match (mode, action) {
        (Mode::TaskList, Some(HotkeyAction::Quit)) => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        (Mode::TaskList, Some(HotkeyAction::NavigateNext)) => {
            state.next_task_index();
        }
        (Mode::TaskList, Some(HotkeyAction::NavigatePrev)) => {
            state.previous_task_index();
        }
        (Mode::TaskList, Some(HotkeyAction::AddTask)) => {
            debug!("Opening add task dialog...");
            state.open_add_task_dialog();
        }
        (Mode::TaskList, Some(HotkeyAction::ToggleTask)) => {
            state.toggle_selected_task();
        }
        (Mode::TaskList, Some(HotkeyAction::DeleteTask)) => {
            state.request_delete_selected_task();
        }
        (Mode::TaskList, Some(HotkeyAction::ToggleLog)) => {
            state.toggle_log();
        }
        (Mode::TaskList, Some(HotkeyAction::EnterDebug)) => {
            debug!("Processing enter debug mode event '{:?}'...", event);
            state.enter_debug_mode();
        }
        (Mode::AddTask, Some(HotkeyAction::SubmitForm)) => {
            state.submit_add_task();
        }
        (Mode::AddTask, Some(HotkeyAction::Cancel)) => {
            debug!("Processing cancel add task event '{:?}'...", event);
            state.cancel_dialog();
        }
        (Mode::AddTask, _) => {
            // Unbound keys edit the draft title
            if !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
                state.edit_add_task_input(event.code);
            }
        }
        (Mode::DeleteConfirmation, Some(HotkeyAction::DeleteConfirm)) => {
            state.confirm_delete_task();
        }
        (Mode::DeleteConfirmation, Some(HotkeyAction::Cancel)) => {
            debug!("Processing cancel delete confirmation event '{:?}'...", event);
            state.cancel_dialog();
        }
        (Mode::Debug, Some(HotkeyAction::NavigateNext)) => {
            state.next_debug_entry();
        }
        (Mode::Debug, Some(HotkeyAction::NavigatePrev)) => {
            state.previous_debug_entry();
        }
        (Mode::Debug, Some(HotkeyAction::DebugModeExit)) => {
            debug!("Processing exit debug mode event '{:?}'...", event);
            state.exit_debug_mode();
        }
        _ => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::TaskId;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press_all(state: &mut State, codes: &[KeyCode]) {
        for code in codes {
            assert!(handle_key(key(*code), state));
        }
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(key(KeyCode::Char(c)), state));
        }
    }

    #[test]
    fn quit_and_ctrl_c_exit() {
        let mut state = State::default();
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert!(!handle_key(ctrl_c, &mut state));
    }

    #[test]
    fn q_is_typed_inside_add_dialog() {
        let mut state = State::default();
        press_all(&mut state, &[KeyCode::Char('a')]);
        type_text(&mut state, "quit smoking");
        assert_eq!("quit smoking", state.get_add_task_input());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = State::default();
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..key(KeyCode::Char('a'))
        };
        assert!(handle_key(release, &mut state));
        assert_eq!(Mode::TaskList, state.current_mode());
    }

    #[test]
    fn add_toggle_delete_via_keys() {
        let mut state = State::default();

        press_all(&mut state, &[KeyCode::Char('a')]);
        type_text(&mut state, "Buy milk");
        press_all(&mut state, &[KeyCode::Enter, KeyCode::Char('a')]);
        type_text(&mut state, "Walk dog");
        press_all(&mut state, &[KeyCode::Enter]);
        assert_eq!(2, state.get_tasks().len());

        // Toggle the first task
        press_all(&mut state, &[KeyCode::Char('k'), KeyCode::Char(' ')]);
        assert!(state.get_tasks()[0].is_completed());
        assert_eq!(1, state.get_summary().completed);

        // Delete the second task, cancelling once first
        press_all(&mut state, &[KeyCode::Char('j'), KeyCode::Char('d')]);
        assert_eq!(Mode::DeleteConfirmation, state.current_mode());
        press_all(&mut state, &[KeyCode::Esc]);
        assert_eq!(2, state.get_tasks().len());
        press_all(&mut state, &[KeyCode::Char('d'), KeyCode::Enter]);

        let tasks = state.get_tasks();
        assert_eq!(1, tasks.len());
        assert_eq!(TaskId::new(1), tasks[0].id());
        assert!(tasks[0].is_completed());
    }

    #[test]
    fn blank_enter_keeps_dialog() {
        let mut state = State::default();
        press_all(&mut state, &[KeyCode::Char('a'), KeyCode::Enter]);
        assert_eq!(Mode::AddTask, state.current_mode());
        press_all(&mut state, &[KeyCode::Esc]);
        assert_eq!(Mode::TaskList, state.current_mode());
        assert!(state.get_tasks().is_empty());
    }

    #[test]
    fn debug_mode_keys() {
        let mut state = State::default();
        press_all(&mut state, &[KeyCode::Char('g')]);
        assert_eq!(Mode::Debug, state.current_mode());
        // Task list bindings are inactive in debug mode
        press_all(&mut state, &[KeyCode::Char('a')]);
        assert_eq!(Mode::Debug, state.current_mode());
        press_all(&mut state, &[KeyCode::Esc]);
        assert_eq!(Mode::TaskList, state.current_mode());
    }

    #[test]
    fn handle_next_applies_forwarded_input() {
        let (tx, rx) = mpsc::channel();
        let handler = Handler { rx };
        let mut state = State::default();

        tx.send(Event::Input(key(KeyCode::Char('a')))).unwrap();
        tx.send(Event::Tick).unwrap();
        tx.send(Event::Input(key(KeyCode::Char('q')))).unwrap();

        assert!(handler.handle_next(&mut state).unwrap());
        assert_eq!(Mode::AddTask, state.current_mode());
        assert!(handler.handle_next(&mut state).unwrap());
        // 'q' is typed into the open dialog rather than quitting
        assert!(handler.handle_next(&mut state).unwrap());
        assert_eq!("q", state.get_add_task_input());
    }

    #[test]
    fn handle_next_fails_after_input_thread_exits() {
        let (tx, rx) = mpsc::channel();
        let handler = Handler { rx };
        let mut state = State::default();

        tx.send(Event::Tick).unwrap();
        drop(tx);

        assert!(handler.handle_next(&mut state).unwrap());
        assert!(handler.handle_next(&mut state).is_err());
    }

    #[test]
    fn spawned_handler_does_not_block_after_input_thread_exits() {
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            let handler = Handler::new();
            let mut state = State::default();
            // Without a terminal the input thread stops at its first error;
            // with one, ticks keep arriving. Either way this returns.
            for _ in 0..3 {
                if handler.handle_next(&mut state).is_err() {
                    break;
                }
            }
            let _ = done_tx.send(());
        });
        assert!(done_rx.recv_timeout(Duration::from_secs(5)).is_ok());
    }

    #[test]
    fn toggle_log_key() {
        let mut state = State::default();
        press_all(&mut state, &[KeyCode::Char('l')]);
        assert!(state.is_log_visible());
    }
}
