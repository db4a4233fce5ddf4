//! Task store module.
//!
//! This module holds the in-memory task list that backs the application:
//! - `Task` and `TaskId`, the data model for a single list item
//! - `TaskStore`, the ordered collection and its id counter
//! - `Summary` and `Snapshot`, read-only views handed to the UI
//! - Store error handling

mod error;
mod task;
mod task_store;

pub use error::StoreError;
pub use task::{Summary, Task, TaskId};
pub use task_store::{Observer, Snapshot, TaskStore};
