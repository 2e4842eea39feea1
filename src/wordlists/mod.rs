//! Word lists for the game
//!
//! The weekly target rotation and the guess allowlist are embedded into the
//! binary; config may replace either with a file loaded once at startup.

mod embedded;
mod lexicon;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, WEEKLY, WEEKLY_COUNT};
pub use lexicon::Lexicon;
