use super::Frame;
use crate::config::hotkeys::{format_hotkey_display, HotkeyAction};
use crate::state::{Mode, State};
use crate::store::Task;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const BLOCK_TITLE: &str = "Tasks";

/// Render task list widget according to state.
///
pub fn task_list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    if state.current_mode() == Mode::TaskList {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                BLOCK_TITLE,
                styling::active_block_title_style(),
            ));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    if state.get_tasks().is_empty() {
        let add_key = state
            .get_hotkeys()
            .task_list
            .get(&HotkeyAction::AddTask)
            .map(format_hotkey_display)
            .unwrap_or_else(|| "the add key".to_string());
        let padding = size.height.saturating_sub(3) / 2;
        let mut lines = vec![Line::from(""); padding as usize];
        lines.push(Line::from(Span::styled(
            format!("No tasks yet. Press {} to add one!", add_key),
            styling::muted_text_style(theme),
        )));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, size);
        return;
    }

    let items: Vec<ListItem> = state
        .get_tasks()
        .iter()
        .map(|task| {
            let item = ListItem::new(task_line(task, theme));
            if task.is_completed() {
                item.style(styling::completed_row_style(theme))
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .highlight_symbol("> ")
        .block(block);

    frame.render_stateful_widget(list, size, state.get_tasks_list_state());
}

/// Build the row for a single task: checkbox, title and status label.
///
fn task_line(task: &Task, theme: &Theme) -> Line<'static> {
    let (checkbox, title_style, status, status_style) = if task.is_completed() {
        (
            "[x] ",
            styling::completed_task_style(theme),
            "Done",
            Style::default().fg(theme.secondary.to_color()),
        )
    } else {
        (
            "[ ] ",
            styling::normal_text_style(theme),
            "To do",
            Style::default().fg(theme.error.to_color()),
        )
    };
    Line::from(vec![
        Span::styled(checkbox, styling::normal_text_style(theme)),
        Span::styled(task.title().to_owned(), title_style),
        Span::raw("  "),
        Span::styled(status, status_style),
    ])
}
