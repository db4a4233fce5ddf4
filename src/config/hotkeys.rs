//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per input mode.

use crate::state::Mode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Task list actions
    NavigateNext,
    NavigatePrev,
    AddTask,
    ToggleTask,
    DeleteTask,
    ToggleLog,
    EnterDebug,
    Quit,

    // Dialog actions
    SubmitForm,
    DeleteConfirm,
    Cancel,

    // Debug mode actions
    DebugModeExit,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Unmodified character key.
    ///
    pub fn char(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Unmodified non-character key.
    ///
    pub fn key(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Delete => KeyCodeSerde::Delete,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings for each input mode.
///
/// Missing modes in the configuration file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeHotkeys {
    pub task_list: HashMap<HotkeyAction, Hotkey>,
    pub add_task: HashMap<HotkeyAction, Hotkey>,
    pub delete_confirmation: HashMap<HotkeyAction, Hotkey>,
    pub debug_mode: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ModeHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl ModeHotkeys {
    /// Return the bindings used while the given mode is active.
    ///
    pub fn for_mode(&self, mode: Mode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            Mode::TaskList => &self.task_list,
            Mode::AddTask => &self.add_task,
            Mode::DeleteConfirmation => &self.delete_confirmation,
            Mode::Debug => &self.debug_mode,
        }
    }
}

/// Returns default hotkey mappings for all modes.
///
pub fn default_hotkeys() -> ModeHotkeys {
    let mut task_list = HashMap::new();
    task_list.insert(HotkeyAction::NavigateNext, Hotkey::char('j'));
    task_list.insert(HotkeyAction::NavigatePrev, Hotkey::char('k'));
    task_list.insert(HotkeyAction::AddTask, Hotkey::char('a'));
    task_list.insert(HotkeyAction::ToggleTask, Hotkey::char(' '));
    task_list.insert(HotkeyAction::DeleteTask, Hotkey::char('d'));
    task_list.insert(HotkeyAction::ToggleLog, Hotkey::char('l'));
    task_list.insert(HotkeyAction::EnterDebug, Hotkey::char('g'));
    task_list.insert(HotkeyAction::Quit, Hotkey::char('q'));

    let mut add_task = HashMap::new();
    add_task.insert(HotkeyAction::SubmitForm, Hotkey::key(KeyCode::Enter));
    add_task.insert(HotkeyAction::Cancel, Hotkey::key(KeyCode::Esc));

    let mut delete_confirmation = HashMap::new();
    delete_confirmation.insert(HotkeyAction::DeleteConfirm, Hotkey::key(KeyCode::Enter));
    delete_confirmation.insert(HotkeyAction::Cancel, Hotkey::key(KeyCode::Esc));

    let mut debug_mode = HashMap::new();
    debug_mode.insert(HotkeyAction::NavigateNext, Hotkey::char('j'));
    debug_mode.insert(HotkeyAction::NavigatePrev, Hotkey::char('k'));
    debug_mode.insert(HotkeyAction::DebugModeExit, Hotkey::key(KeyCode::Esc));

    ModeHotkeys {
        task_list,
        add_task,
        delete_confirmation,
        debug_mode,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Gets the action for a KeyEvent in the given mode.
///
pub fn get_action_for_mode(
    event: &KeyEvent,
    mode: Mode,
    hotkeys: &ModeHotkeys,
) -> Option<HotkeyAction> {
    hotkeys
        .for_mode(mode)
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| action.clone())
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let mut parts = Vec::new();

    for (action, description, paired_action) in actions {
        let Some(hotkey) = hotkeys.get(action) else {
            continue;
        };
        match paired_action.as_ref().and_then(|paired| hotkeys.get(paired)) {
            Some(paired_hotkey) => parts.push(format!(
                " {}/{}: {}",
                format_hotkey_display(hotkey),
                format_hotkey_display(paired_hotkey),
                description
            )),
            None => parts.push(format!(
                " {}: {}",
                format_hotkey_display(hotkey),
                description
            )),
        }
    }

    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
