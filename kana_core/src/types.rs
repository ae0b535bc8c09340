//! Core domain types for the Kanaflip trainer.
//!
//! This module defines the fundamental types used throughout the system:
//! - Character entries (glyph + romanized reading)
//! - Study modes and their cycling order
//! - Sound events and the notifier seam
//! - Read-only session snapshots for rendering

use serde::{Deserialize, Serialize};

// ============================================================================
// Character Types
// ============================================================================

/// A single syllabary character paired with its romanized reading.
///
/// Entries come exclusively from the static tables in [`crate::syllabary`]
/// and are never mutated at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterEntry {
    pub glyph: &'static str,
    pub romaji: &'static str,
}

// ============================================================================
// Study Mode
// ============================================================================

/// Which syllabary table(s) the active deck is built from
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    Hiragana,
    Katakana,
    Mixed,
}

impl Default for StudyMode {
    fn default() -> Self {
        Self::Hiragana
    }
}

impl StudyMode {
    /// Total successor function for mode cycling:
    /// hiragana -> katakana -> mixed -> hiragana
    pub fn next(self) -> Self {
        match self {
            Self::Hiragana => Self::Katakana,
            Self::Katakana => Self::Mixed,
            Self::Mixed => Self::Hiragana,
        }
    }

    /// Display name for UI labels
    pub fn label(self) -> &'static str {
        match self {
            Self::Hiragana => "Hiragana",
            Self::Katakana => "Katakana",
            Self::Mixed => "Mixed",
        }
    }

    /// Parse a user-supplied mode name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hiragana" => Some(Self::Hiragana),
            "katakana" => Some(Self::Katakana),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }
}

// ============================================================================
// Sound Events and Notifier Seam
// ============================================================================

/// Named notification events consumed by a sound-playback collaborator.
///
/// Emissions are fire-and-forget: no acknowledgement is expected, and a
/// backend that fails to play must never affect session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEvent {
    /// Card was flipped to reveal its reading
    Flip,
    /// Card was marked "knew it"
    Correct,
    /// Streak milestone reached
    Achievement,
}

impl SoundEvent {
    /// Stable event name, used for logging
    pub fn name(self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Correct => "correct",
            Self::Achievement => "achievement",
        }
    }
}

/// Injected capability for sound playback.
///
/// The audio backend owns its own lifecycle independent of [`crate::Session`];
/// the core only calls events by name. Implementations must swallow playback
/// failures rather than propagate them.
pub trait Notifier {
    fn notify(&self, event: SoundEvent);
}

/// Notifier that discards all events
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: SoundEvent) {}
}

// ============================================================================
// Render Snapshot
// ============================================================================

/// Read-only view of session state for the presentation collaborator
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub glyph: &'static str,
    /// Reading of the current card, present only once revealed
    pub romaji: Option<&'static str>,
    pub revealed: bool,
    pub streak: u32,
    pub best_streak: u32,
    pub mode: StudyMode,
    pub shuffled: bool,
    /// 1-based position of the current card
    pub card_index: usize,
    pub deck_size: usize,
    /// Transient celebratory-display signal; cleared by the presentation
    /// layer's timer via [`crate::Session::clear_celebration`]
    pub celebrating: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_cycle_is_total_and_closed() {
        let mut mode = StudyMode::Hiragana;
        let seen = [
            StudyMode::Katakana,
            StudyMode::Mixed,
            StudyMode::Hiragana,
        ];
        for expected in seen {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn test_mode_parse_case_insensitive() {
        assert_eq!(StudyMode::parse("Hiragana"), Some(StudyMode::Hiragana));
        assert_eq!(StudyMode::parse("KATAKANA"), Some(StudyMode::Katakana));
        assert_eq!(StudyMode::parse("mixed"), Some(StudyMode::Mixed));
        assert_eq!(StudyMode::parse("romaji"), None);
    }

    #[test]
    fn test_sound_event_names() {
        assert_eq!(SoundEvent::Flip.name(), "flip");
        assert_eq!(SoundEvent::Correct.name(), "correct");
        assert_eq!(SoundEvent::Achievement.name(), "achievement");
    }
}
