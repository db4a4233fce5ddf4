//! Reusable UI widget components.
//!
//! This module contains shared styling helpers.

pub mod styling;
