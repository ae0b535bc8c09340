//! Study session state.
//!
//! A session holds the active deck, a cursor into it, the reveal flag,
//! and the streak counters, and consumes the user actions: flip,
//! advance, retreat, mark-correct, mark-incorrect, change-mode,
//! toggle-shuffle, reset. All actions are synchronous total functions
//! over session state; none can fail.

use crate::deck::Deck;
use crate::types::{CharacterEntry, Notifier, Snapshot, SoundEvent, StudyMode};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Every `DEFAULT_MILESTONE_INTERVAL`th consecutive correct answer
/// triggers the achievement sound and the celebratory display
pub const DEFAULT_MILESTONE_INTERVAL: u32 = 5;

/// Mutable state of one study session.
///
/// The session exclusively owns its deck: changing mode or toggling
/// shuffle replaces the deck entirely and resets the cursor and streak.
/// State lives only for the lifetime of the session; nothing persists.
pub struct Session {
    mode: StudyMode,
    shuffled: bool,
    cursor: usize,
    revealed: bool,
    streak: u32,
    best_streak: u32,
    celebrating: bool,
    milestone_interval: u32,
    deck: Deck,
    rng: StdRng,
    notifier: Box<dyn Notifier>,
}

impl Session {
    /// Create a session with an OS-seeded shuffle source
    pub fn new(mode: StudyMode, shuffled: bool, notifier: Box<dyn Notifier>) -> Self {
        Self::with_rng(mode, shuffled, notifier, StdRng::from_os_rng())
    }

    /// Create a session whose shuffles are reproducible from `seed`
    pub fn with_seed(
        mode: StudyMode,
        shuffled: bool,
        notifier: Box<dyn Notifier>,
        seed: u64,
    ) -> Self {
        Self::with_rng(mode, shuffled, notifier, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        mode: StudyMode,
        shuffled: bool,
        notifier: Box<dyn Notifier>,
        mut rng: StdRng,
    ) -> Self {
        let deck = Deck::build(mode, shuffled, &mut rng);
        Self {
            mode,
            shuffled,
            cursor: 0,
            revealed: false,
            streak: 0,
            best_streak: 0,
            celebrating: false,
            milestone_interval: DEFAULT_MILESTONE_INTERVAL,
            deck,
            rng,
            notifier,
        }
    }

    /// Override the streak milestone interval (configurable, default 5)
    pub fn set_milestone_interval(&mut self, every: u32) {
        // 0 would divide by zero in the milestone check; treat as "never"
        self.milestone_interval = every;
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Move to the next card, wrapping at the end of the deck
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.deck.len();
        self.revealed = false;
    }

    /// Move to the previous card, wrapping at the start of the deck
    pub fn retreat(&mut self) {
        self.cursor = (self.cursor + self.deck.len() - 1) % self.deck.len();
        self.revealed = false;
    }

    /// Flip the current card to show its reading.
    ///
    /// Emits the flip sound on the hidden -> revealed transition only.
    pub fn reveal(&mut self) {
        if self.revealed {
            return;
        }
        self.revealed = true;
        self.notifier.notify(SoundEvent::Flip);
    }

    /// Record a self-assessed correct answer and advance.
    ///
    /// Extends the streak, keeps the best-streak high-water mark, and on
    /// every milestone emits the achievement sound and raises the
    /// celebratory-display signal.
    pub fn mark_correct(&mut self) {
        self.streak += 1;
        if self.streak > self.best_streak {
            self.best_streak = self.streak;
        }
        if self.milestone_interval > 0 && self.streak % self.milestone_interval == 0 {
            self.celebrating = true;
            self.notifier.notify(SoundEvent::Achievement);
            tracing::info!(streak = self.streak, "streak milestone reached");
        }
        self.notifier.notify(SoundEvent::Correct);
        self.advance();
    }

    /// Record a self-assessed miss: streak resets, best streak survives
    pub fn mark_incorrect(&mut self) {
        self.streak = 0;
        self.advance();
    }

    /// Switch to a specific mode, rebuilding the deck
    pub fn set_mode(&mut self, mode: StudyMode) {
        self.mode = mode;
        self.rebuild_deck();
    }

    /// Switch to the next mode in the cycle
    pub fn cycle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Flip the shuffle flag, rebuilding the deck
    pub fn toggle_shuffle(&mut self) {
        self.shuffled = !self.shuffled;
        self.rebuild_deck();
    }

    /// Restore the exact initial snapshot: default mode, unshuffled,
    /// all counters zeroed, card hidden, celebration cleared
    pub fn reset(&mut self) {
        self.mode = StudyMode::default();
        self.shuffled = false;
        self.best_streak = 0;
        self.celebrating = false;
        self.rebuild_deck();
    }

    /// Clear the celebratory-display signal.
    ///
    /// Called by the presentation layer when its display timer fires; a
    /// stale call after a reset is a harmless no-op.
    pub fn clear_celebration(&mut self) {
        self.celebrating = false;
    }

    fn rebuild_deck(&mut self) {
        self.deck = Deck::build(self.mode, self.shuffled, &mut self.rng);
        self.cursor = 0;
        self.streak = 0;
        self.revealed = false;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The card under the cursor; defined for all reachable states because
    /// the cursor is kept in range by the modulo arithmetic above
    pub fn current_card(&self) -> CharacterEntry {
        self.deck.card(self.cursor)
    }

    /// Read-only snapshot for rendering
    pub fn snapshot(&self) -> Snapshot {
        let card = self.current_card();
        Snapshot {
            glyph: card.glyph,
            romaji: self.revealed.then_some(card.romaji),
            revealed: self.revealed,
            streak: self.streak,
            best_streak: self.best_streak,
            mode: self.mode,
            shuffled: self.shuffled,
            card_index: self.cursor + 1,
            deck_size: self.deck.len(),
            celebrating: self.celebrating,
        }
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    pub fn celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }
}
