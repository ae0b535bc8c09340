#![forbid(unsafe_code)]

//! Core domain model and study logic for the Kanaflip flip-card trainer.
//!
//! This crate provides:
//! - Domain types (character entries, study modes, sound events)
//! - Static syllabary tables (hiragana, katakana)
//! - Deck construction and shuffling
//! - Session state (cursor, reveal flag, streak counters)

pub mod types;
pub mod error;
pub mod syllabary;
pub mod deck;
pub mod config;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use deck::Deck;
pub use session::Session;
pub use config::Config;
