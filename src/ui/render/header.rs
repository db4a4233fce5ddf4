use super::Frame;
use crate::state::State;
use crate::store::Summary;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Return the completion count banner.
///
pub fn banner_text(summary: &Summary) -> String {
    format!(
        "TODO - {} Done / {} Draft",
        summary.completed, summary.incomplete
    )
}

/// Render header widget showing completion counts.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let banner = Line::from(Span::styled(
        banner_text(&state.get_summary()),
        styling::banner_style(theme),
    ));
    frame.render_widget(Paragraph::new(banner).block(block), size);
}
