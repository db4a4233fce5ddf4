use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let title = if state.is_debug_mode() {
        "Log (DEBUG MODE)"
    } else {
        "Log"
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if state.is_debug_mode() {
        block = block.border_style(styling::active_block_border_style(theme));
    }

    let items: Vec<ListItem> = state
        .get_debug_entries()
        .into_iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![Span::styled(
                entry,
                styling::normal_text_style(theme),
            )]))
        })
        .collect();
    let len = items.len();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .block(block);

    // Follow the newest entry unless the user is walking the log
    let mut list_state = ListState::default();
    if state.is_debug_mode() {
        list_state.select(Some(state.get_debug_index()));
    } else if len > 0 {
        list_state.select(Some(len - 1));
        frame.render_stateful_widget(
            list.highlight_style(styling::normal_text_style(theme)),
            size,
            &mut list_state,
        );
        return;
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
