use fake::Dummy;
use std::fmt;

/// Identifier assigned to a task by the store.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(value: u64) -> Self {
        TaskId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Defines task data structure.
///
/// Tasks are only built by the store, which guarantees a unique id and a
/// non-blank title. The title cannot change once created.
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    is_completed: bool,
}

impl Task {
    pub(crate) fn new(id: TaskId, title: String) -> Self {
        Task {
            id,
            title,
            is_completed: false,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.is_completed = completed;
    }
}

/// Completed and incomplete task counts.
///
#[derive(Clone, Copy, Debug, Default, Dummy, PartialEq, Eq)]
pub struct Summary {
    pub completed: usize,
    pub incomplete: usize,
}

impl Summary {
    /// Count completed and incomplete tasks in the given slice.
    ///
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.is_completed()).count();
        Summary {
            completed,
            incomplete: tasks.len() - completed,
        }
    }

    pub fn total(&self) -> usize {
        self.completed + self.incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn new_task_is_incomplete() {
        let task = Task::new(TaskId::new(1), "Buy milk".to_string());
        assert_eq!(TaskId::new(1), task.id());
        assert_eq!("Buy milk", task.title());
        assert!(!task.is_completed());
    }

    #[test]
    fn set_completed() {
        let mut task = Task::new(TaskId::new(7), "Walk dog".to_string());
        task.set_completed(true);
        assert!(task.is_completed());
        task.set_completed(false);
        assert!(!task.is_completed());
        assert_eq!("Walk dog", task.title());
    }

    #[test]
    fn task_id_display() {
        assert_eq!("12", TaskId::new(12).to_string());
        assert_eq!(12, TaskId::new(12).value());
    }

    #[test]
    fn summary_of_fake_tasks() {
        let tasks: Vec<Task> = (0..25).map(|_| Faker.fake::<Task>()).collect();
        let summary = Summary::of(&tasks);
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        assert_eq!(completed, summary.completed);
        assert_eq!(tasks.len() - completed, summary.incomplete);
        assert_eq!(tasks.len(), summary.total());
    }

    #[test]
    fn summary_of_empty() {
        assert_eq!(Summary::default(), Summary::of(&[]));
    }
}
