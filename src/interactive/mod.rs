//! Interactive TUI interface
//!
//! Full-screen game with a clickable on-screen keyboard.

mod app;
mod rendering;

pub use app::{App, Statistics, run_tui};
