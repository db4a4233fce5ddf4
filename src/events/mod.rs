//! Event handling module.
//!
//! This module contains the handler for terminal events: user input and
//! redraw ticks.

pub mod terminal;
