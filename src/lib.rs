//! ROOMBOOK - Terminal Room Booking
//!
//! A terminal-based room and resource booking application, built in Rust.

pub mod domain;
pub mod application;
pub mod presentation;

pub use domain::*;
pub use application::*;
