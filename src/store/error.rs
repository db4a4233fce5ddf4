//! Task store-specific error types.

use super::TaskId;

/// Errors that can occur during task store operations.
///
/// Neither variant is fatal. The store state is left untouched whenever one
/// of these is returned.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Title was empty after trimming surrounding whitespace
    #[error("Task title must not be empty")]
    EmptyTitle,

    /// No task with the given id exists in the store
    #[error("Task not found: {id}")]
    TaskNotFound { id: TaskId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let error = StoreError::EmptyTitle;
        assert!(error.to_string().contains("must not be empty"));

        let error = StoreError::TaskNotFound { id: TaskId::new(42) };
        assert!(error.to_string().contains("Task not found"));
        assert!(error.to_string().contains("42"));
    }
}
