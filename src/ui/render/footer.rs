use super::Frame;
use crate::config::hotkeys::{build_footer_text, HotkeyAction};
use crate::state::{Mode, State};
use crate::ui::ColorSpec;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode label and hotkey hints for the active mode.
///
fn controls_for_mode(state: &State) -> (&'static str, String) {
    let hotkeys = state.get_hotkeys();
    match state.current_mode() {
        Mode::TaskList => (
            "TASKS:",
            build_footer_text(
                &hotkeys.task_list,
                &[
                    (
                        HotkeyAction::NavigateNext,
                        "navigate",
                        Some(HotkeyAction::NavigatePrev),
                    ),
                    (HotkeyAction::AddTask, "add", None),
                    (HotkeyAction::ToggleTask, "toggle", None),
                    (HotkeyAction::DeleteTask, "delete", None),
                    (HotkeyAction::ToggleLog, "log", None),
                    (HotkeyAction::EnterDebug, "debug mode", None),
                    (HotkeyAction::Quit, "quit", None),
                ],
            ),
        ),
        Mode::AddTask => (
            "ADD:",
            format!(
                " Type a title,{}",
                build_footer_text(
                    &hotkeys.add_task,
                    &[
                        (HotkeyAction::SubmitForm, "add", None),
                        (HotkeyAction::Cancel, "cancel", None),
                    ],
                )
            ),
        ),
        Mode::DeleteConfirmation => (
            "DELETE:",
            build_footer_text(
                &hotkeys.delete_confirmation,
                &[
                    (HotkeyAction::DeleteConfirm, "confirm delete", None),
                    (HotkeyAction::Cancel, "cancel", None),
                ],
            ),
        ),
        Mode::Debug => (
            "DEBUG:",
            build_footer_text(
                &hotkeys.debug_mode,
                &[
                    (
                        HotkeyAction::NavigateNext,
                        "navigate logs",
                        Some(HotkeyAction::NavigatePrev),
                    ),
                    (HotkeyAction::DebugModeExit, "exit debug mode", None),
                ],
            ),
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, controls_text) = controls_for_mode(state);
    let label_bg: &ColorSpec = match state.current_mode() {
        Mode::TaskList => &theme.footer_normal,
        Mode::AddTask => &theme.footer_add,
        Mode::DeleteConfirmation => &theme.footer_delete,
        Mode::Debug => &theme.footer_debug,
    };

    let content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.text.to_color())
                .bg(label_bg.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.text_muted.to_color()),
        ),
    ]);

    frame.render_widget(Paragraph::new(content), size);
}
