//! A single-screen task list for the terminal.
//!
//! Tasks live in an in-memory [`store::TaskStore`] owned by the presentation
//! [`state::State`]; nothing is persisted between runs.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod store;
pub mod ui;
