//! Navigation-related state types.
//!
//! This module contains enums describing which dialog is open and which set of
//! hotkeys is active.

use crate::store::TaskId;

/// Specifying the dialog shown on top of the task list.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dialog {
    AddTask,
    DeleteConfirmation { id: TaskId },
}

/// Specifying the active input mode. Each mode has its own hotkey map.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    TaskList,
    AddTask,
    DeleteConfirmation,
    Debug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog() {
        assert_eq!(Dialog::AddTask, Dialog::AddTask);
        assert_eq!(
            Dialog::DeleteConfirmation { id: TaskId::new(1) },
            Dialog::DeleteConfirmation { id: TaskId::new(1) }
        );
        assert_ne!(
            Dialog::DeleteConfirmation { id: TaskId::new(1) },
            Dialog::DeleteConfirmation { id: TaskId::new(2) }
        );
    }

    #[test]
    fn test_mode() {
        assert_eq!(Mode::TaskList, Mode::TaskList);
        assert_ne!(Mode::AddTask, Mode::DeleteConfirmation);
        assert_ne!(Mode::TaskList, Mode::Debug);
    }
}
