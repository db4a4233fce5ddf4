use super::{StoreError, Summary, Task, TaskId};
use log::*;

/// Callback invoked with a fresh snapshot after every successful mutation.
///
pub type Observer = Box<dyn Fn(&Snapshot)>;

/// Ordered task list plus derived counts, as observed after a mutation.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub summary: Summary,
}

/// Houses the ordered task list and the id counter.
///
/// All mutation goes through `add`, `toggle` and `remove`. Tasks keep their
/// insertion order regardless of completion status.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    observers: Vec<Observer>,
}

impl Default for TaskStore {
    fn default() -> TaskStore {
        TaskStore {
            tasks: vec![],
            next_id: 0,
            observers: vec![],
        }
    }
}

impl TaskStore {
    /// Return a new empty store.
    ///
    pub fn new() -> Self {
        TaskStore::default()
    }

    /// Register an observer notified after each successful mutation.
    ///
    pub fn subscribe(&mut self, observer: Observer) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Append a new incomplete task with the trimmed text, returning its id.
    /// Blank text is rejected without touching the store.
    ///
    pub fn add(&mut self, raw_text: &str) -> Result<TaskId, StoreError> {
        let title = raw_text.trim();
        if title.is_empty() {
            debug!("Rejected blank task title.");
            return Err(StoreError::EmptyTitle);
        }
        self.next_id += 1;
        let id = TaskId::new(self.next_id);
        self.tasks.push(Task::new(id, title.to_owned()));
        debug!("Added task {} '{}'.", id, title);
        self.notify();
        Ok(id)
    }

    /// Set the completion status of the task with the given id. The value is
    /// assigned as given, not flipped.
    ///
    pub fn toggle(&mut self, id: TaskId, completed: bool) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(StoreError::TaskNotFound { id })?;
        task.set_completed(completed);
        debug!("Set task {} completed={}.", id, completed);
        self.notify();
        Ok(())
    }

    /// Remove the task with the given id, preserving the order of the rest.
    ///
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(StoreError::TaskNotFound { id })?;
        let task = self.tasks.remove(index);
        debug!("Removed task {}.", id);
        self.notify();
        Ok(task)
    }

    /// Return completed and incomplete counts.
    ///
    pub fn summarize(&self) -> Summary {
        Summary::of(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Return a copy of the current tasks and counts.
    ///
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            summary: self.summarize(),
        }
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &self.observers {
            observer(&snapshot);
        }
    }
}
