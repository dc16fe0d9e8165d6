//! Application state management for the booking terminal.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

pub mod state;

pub use state::*;
