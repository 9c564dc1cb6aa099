//! Game state and the derived board view
//!
//! `GameState` holds the only mutable data of a game: the secret word and
//! the letters guessed so far. `Board` pairs a state with its registry and
//! answers every display question by recomputing from scratch.

use super::rules::{self, KeyStatus, Slot};
use super::{Letter, SecretWord};
use crate::registry::{Language, Registry, farewell_text};
use log::debug;
use rand::Rng;

/// Result of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Wrong,
    /// Already guessed; state unchanged
    Repeated,
}

/// The secret word and the guesses made against it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: SecretWord,
    guessed: Vec<Letter>,
}

impl GameState {
    #[must_use]
    pub const fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: Vec::new(),
        }
    }

    /// Start a game with a random secret word from `registry`
    pub fn random<R: Rng + ?Sized>(registry: &Registry, rng: &mut R) -> Self {
        Self::new(registry.random_word(rng))
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    /// Distinct guessed letters, oldest first
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.guessed.last().copied()
    }

    /// Record a guess
    ///
    /// Guessing a letter twice is a no-op. The state does not refuse
    /// guesses after the game is over; the UI disables input instead.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.guessed.contains(&letter) {
            return GuessOutcome::Repeated;
        }

        self.guessed.push(letter);
        let outcome = if self.secret.has_letter(letter) {
            GuessOutcome::Correct
        } else {
            GuessOutcome::Wrong
        };
        debug!("guess {letter}: {outcome:?}");
        outcome
    }

    /// Replace the secret word and clear all guesses
    pub fn reset<R: Rng + ?Sized>(&mut self, registry: &Registry, rng: &mut R) {
        *self = Self::random(registry, rng);
        debug!("new game, {} letters", self.secret.chars().count());
    }

    /// Derived view of this state
    #[must_use]
    pub const fn board<'a>(&'a self, registry: &'a Registry) -> Board<'a> {
        Board {
            state: self,
            registry,
        }
    }
}

/// What the status banner shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// Nothing to report
    Playing,
    /// The last guess was wrong and eliminated `language`
    Farewell {
        language: &'static str,
        text: String,
    },
    Won,
    Lost,
}

/// One language chip in the "lives" row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chip {
    pub language: &'static Language,
    pub eliminated: bool,
}

/// Read-only snapshot of a game
///
/// Every query recomputes from the underlying state.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    state: &'a GameState,
    registry: &'a Registry,
}

impl<'a> Board<'a> {
    #[must_use]
    pub const fn state(&self) -> &'a GameState {
        self.state
    }

    #[must_use]
    pub const fn registry(&self) -> &'a Registry {
        self.registry
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        rules::wrong_guess_count(&self.state.secret, &self.state.guessed)
    }

    /// Wrong guesses still allowed before the game is lost
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.registry
            .loss_threshold()
            .saturating_sub(self.wrong_guess_count())
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.state.secret, &self.state.guessed)
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        rules::is_lost(&self.state.secret, &self.state.guessed, self.registry.len())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        rules::is_over(&self.state.secret, &self.state.guessed, self.registry.len())
    }

    #[must_use]
    pub fn last_guess_was_wrong(&self) -> bool {
        rules::last_guess_was_wrong(&self.state.secret, &self.state.guessed)
    }

    #[must_use]
    pub fn key_status(&self, letter: Letter) -> KeyStatus {
        rules::status_for(letter, &self.state.guessed, &self.state.secret)
    }

    /// One slot per character of the secret word
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        let lost = self.is_lost();
        self.state
            .secret
            .chars()
            .map(|ch| rules::reveal(ch, &self.state.guessed, lost))
            .collect()
    }

    /// The registry as chips, eliminated front to back
    #[must_use]
    pub fn chips(&self) -> Vec<Chip> {
        let wrong = self.wrong_guess_count();
        self.registry
            .languages()
            .iter()
            .enumerate()
            .map(|(index, language)| Chip {
                language,
                eliminated: rules::is_eliminated(index, wrong),
            })
            .collect()
    }

    /// The language eliminated by the most recent wrong guess
    ///
    /// `None` before the first wrong guess.
    #[must_use]
    pub fn last_eliminated(&self) -> Option<&'static Language> {
        self.wrong_guess_count()
            .checked_sub(1)
            .and_then(|index| self.registry.get(index))
    }

    /// Banner content, by precedence: farewell, win, loss, nothing
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let over = self.is_over();

        if !over
            && self.last_guess_was_wrong()
            && let Some(language) = self.last_eliminated()
        {
            return GameStatus::Farewell {
                language: language.name,
                text: farewell_text(language.name, self.state.guessed.len()),
            };
        }

        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }
}
