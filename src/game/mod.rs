//! Game session layer
//!
//! Board state, keyboard state, input dispatch and the transient message
//! slot. Everything a front end needs to run a game; no rendering.

mod input;
mod keyboard;
mod message;
mod session;

pub use input::{Key, Notice, dispatch};
pub use keyboard::{BACKSPACE_LABEL, ENTER_LABEL, KEY_ROWS, KeyState, Keyboard};
pub use message::{MESSAGE_TTL, MessageSlot};
pub use session::{GameConfig, GameSession, GameState, MAX_ROWS, RejectReason, SubmitResult};
