use super::{task_list, Frame};
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Dialog, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const ADD_DIALOG_HEIGHT: u16 = 6;
const DELETE_DIALOG_HEIGHT: u16 = 9;
const MAX_TITLE_DISPLAY: usize = 45;

/// Render main widget according to state: the task list with any open
/// dialog on top.
///
pub fn main(frame: &mut Frame, size: Rect, state: &mut State) {
    task_list(frame, size, state);

    match state.current_dialog().copied() {
        Some(Dialog::AddTask) => render_add_task_dialog(frame, size, state),
        Some(Dialog::DeleteConfirmation { .. }) => render_delete_confirmation(frame, size, state),
        None => {}
    }
}

fn render_add_task_dialog(frame: &mut Frame, size: Rect, state: &State) {
    let popup_area = centered_rect(60, ADD_DIALOG_HEIGHT, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Add New Todo",
            Style::default()
                .fg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let input_area = input_block.inner(chunks[0]);

    // Scroll horizontally so the cursor stays visible
    let text = state.get_add_task_input();
    let cursor = display_width(&text, state.get_add_task_cursor());
    let scroll = cursor.saturating_sub(input_area.width.saturating_sub(1));
    let input = Paragraph::new(text)
        .style(styling::normal_text_style(theme))
        .scroll((0, scroll))
        .block(input_block);
    frame.render_widget(input, chunks[0]);
    if input_area.width > 0 {
        frame.set_cursor(input_area.x + cursor - scroll, input_area.y);
    }

    let hint = build_footer_text(
        &state.get_hotkeys().add_task,
        &[
            (HotkeyAction::SubmitForm, "add", None),
            (HotkeyAction::Cancel, "cancel", None),
        ],
    );
    let hint = Paragraph::new(Span::styled(hint, styling::muted_text_style(theme)))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[1]);
}

fn render_delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let popup_area = centered_rect(60, DELETE_DIALOG_HEIGHT, size);
    frame.render_widget(Clear, popup_area);

    let theme = state.get_theme();
    let title = state
        .pending_delete_task()
        .map(|task| truncate(task.title(), MAX_TITLE_DISPLAY))
        .unwrap_or_else(|| "this item".to_string());
    let hint = build_footer_text(
        &state.get_hotkeys().delete_confirmation,
        &[
            (HotkeyAction::DeleteConfirm, "delete", None),
            (HotkeyAction::Cancel, "cancel", None),
        ],
    );

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Are you sure you want to delete this item?",
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("\"{}\"", title),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, styling::muted_text_style(theme))),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    "Delete Todo",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}

/// Shorten text to at most `max` characters, marking the cut with an ellipsis.
///
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

/// Return the terminal cell width of the first `chars` characters of `text`.
///
fn display_width(text: &str, chars: usize) -> u16 {
    let prefix: String = text.chars().take(chars).collect();
    Line::from(prefix).width() as u16
}

/// Return a rectangle of fixed height and relative width centered in `r`.
///
fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let width = (r.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!("short", truncate("short", 10));
        assert_eq!("abc...", truncate("abcdef", 3));
        assert_eq!("äöü...", truncate("äöüßé", 3));
    }

    #[test]
    fn test_display_width() {
        assert_eq!(3, display_width("abcdef", 3));
        assert_eq!(4, display_width("日本語", 2));
        assert_eq!(6, display_width("日本語", 10));
        assert_eq!(0, display_width("", 4));
    }

    fn cursor_after_typing(text: &str) -> (u16, u16) {
        use crate::state::State;
        use crossterm::event::KeyCode;
        use ratatui::{
            backend::{Backend, TestBackend},
            Terminal,
        };

        let mut state = State::default();
        state.open_add_task_dialog();
        for c in text.chars() {
            state.edit_add_task_input(KeyCode::Char(c));
        }
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.size();
                main(frame, area, &mut state)
            })
            .unwrap();
        terminal.backend_mut().get_cursor().unwrap()
    }

    #[test]
    fn cursor_follows_wide_characters() {
        let (narrow_x, narrow_y) = cursor_after_typing("abc");
        let (wide_x, wide_y) = cursor_after_typing("日本語");
        assert_eq!(narrow_y, wide_y);
        assert_eq!(narrow_x + 3, wide_x);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 20);
        let popup = centered_rect(60, 6, area);
        assert_eq!(Rect::new(20, 7, 60, 6), popup);

        let tiny = Rect::new(5, 5, 10, 3);
        let popup = centered_rect(50, 6, tiny);
        assert_eq!(3, popup.height);
        assert_eq!(5, popup.y);
    }
}
