//! Core domain types for the game
//!
//! Everything here is pure: no I/O, no global state. Words, feedback scoring,
//! keyboard aggregation and ISO-week play periods.

mod feedback;
mod keyboard;
mod period;
mod word;

pub use feedback::{Feedback, LetterStatus, evaluate};
pub use keyboard::{KEYBOARD_ROWS, KeyboardState};
pub use period::{PlayPeriod, iso_week};
pub use word::{WORD_LENGTH, Word, WordError};
