//! Hauspokal Wordle
//!
//! A weekly five-letter word game for a house cup: every player guesses the
//! same word during one ISO week, with six attempts and a shareable result.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hauspokal_wordle::core::{Feedback, Word};
//!
//! let guess = Word::new("harpy").unwrap();
//! let target = Word::new("harry").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! println!("{}", feedback.glyphs());
//! ```

// Core domain types
pub mod core;

// Word lists and guess legality
pub mod wordlists;

// Weekly target selection
pub mod target;

// Round state, snapshots and players
pub mod game;

// Result summaries, share text and webhook reporting
pub mod report;

// Local persistence
pub mod storage;

// Game session wiring core, storage and reporting
pub mod session;

// Configuration file
pub mod config;

// Log setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
