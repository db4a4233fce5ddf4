//! Application state management module.
//!
//! This module contains the presentation state for the application, including:
//! - Main `State` struct that owns the task store and transient UI state
//! - Input mode and dialog types

mod navigation;

pub use navigation::{Dialog, Mode};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
