use super::{footer, header, log, main, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const HEADER_HEIGHT: u16 = 3;
const LOG_HEIGHT: u16 = 8;
const FOOTER_HEIGHT: u16 = 1;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT), Constraint::Min(3)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(FOOTER_HEIGHT));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header(frame, chunks[0], state);
    main(frame, chunks[1], state);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    }
    footer(frame, chunks[chunks.len() - 1], state);
}
