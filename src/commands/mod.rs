//! Command implementations

pub mod check;
pub mod setup;
pub mod simple;
pub mod today;

pub use check::check_guess;
pub use setup::GameSetup;
pub use simple::run_simple;
pub use today::{TodayResult, lookup_today};
