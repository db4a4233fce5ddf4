use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::state::State;
use crate::store::{Snapshot, TaskStore};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::stdout;

/// Oversees event processing, state management, and terminal output.
///
/// Everything runs on the main thread: each key event is applied to the
/// state before the next frame is drawn.
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(config.log_level_filter()?, log_buffer.clone())?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Loaded configuration from {}.", path.display());
        }

        let mut store = TaskStore::new();
        store.subscribe(Box::new(log_snapshot));

        let mut app = App {
            state: State::new(
                store,
                log_buffer,
                config.theme(),
                config.hotkeys.clone(),
                config.show_log,
            ),
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Prepare the terminal, run the render loop until an exit request or
    /// unrecoverable error, then restore the terminal.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}

/// Store observer recording each settled task list in the log.
///
fn log_snapshot(snapshot: &Snapshot) {
    debug!(
        "Task list now holds {} tasks ({} done / {} draft).",
        snapshot.tasks.len(),
        snapshot.summary.completed,
        snapshot.summary.incomplete
    );
}
