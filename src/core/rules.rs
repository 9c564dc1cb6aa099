//! Game rules as pure functions
//!
//! Every derived value of a game (wrong guesses, win, loss, key colors,
//! word slots) is computed here from the secret word and the guessed
//! letters. Nothing is cached; callers recompute on every observation.

use super::{Letter, SecretWord};

/// Display state of a keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    Unguessed,
    Correct,
    Wrong,
}

/// Content of one word slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Not guessed yet, shown as a blank
    Hidden,
    /// Guessed (or not a letter), shown normally
    Revealed(char),
    /// Shown only because the game was lost
    Missed(char),
}

impl Slot {
    /// The character to draw, or `None` for a blank
    #[must_use]
    pub const fn glyph(self) -> Option<char> {
        match self {
            Self::Hidden => None,
            Self::Revealed(c) | Self::Missed(c) => Some(c.to_ascii_uppercase()),
        }
    }
}

/// Iterate the distinct letters of `guessed`, in first-guess order
fn distinct(guessed: &[Letter]) -> impl Iterator<Item = Letter> + '_ {
    let mut seen = [false; 26];
    guessed.iter().copied().filter(move |letter| {
        let first = !seen[letter.index()];
        seen[letter.index()] = true;
        first
    })
}

/// Number of distinct guessed letters that are not in the secret word
#[must_use]
pub fn wrong_guess_count(secret: &SecretWord, guessed: &[Letter]) -> usize {
    distinct(guessed)
        .filter(|&letter| !secret.has_letter(letter))
        .count()
}

/// Wrong guesses tolerated before the game is lost
///
/// One less than the registry size: the last language is never eliminated.
#[inline]
#[must_use]
pub const fn loss_threshold(registry_size: usize) -> usize {
    registry_size.saturating_sub(1)
}

/// True once every letter of the secret word has been guessed
#[must_use]
pub fn is_won(secret: &SecretWord, guessed: &[Letter]) -> bool {
    secret
        .letters()
        .iter()
        .all(|letter| guessed.contains(letter))
}

/// True once the wrong-guess count reaches the loss threshold
#[must_use]
pub fn is_lost(secret: &SecretWord, guessed: &[Letter], registry_size: usize) -> bool {
    wrong_guess_count(secret, guessed) >= loss_threshold(registry_size)
}

#[must_use]
pub fn is_over(secret: &SecretWord, guessed: &[Letter], registry_size: usize) -> bool {
    is_won(secret, guessed) || is_lost(secret, guessed, registry_size)
}

/// True if a letter has been guessed and the most recent one was wrong
#[must_use]
pub fn last_guess_was_wrong(secret: &SecretWord, guessed: &[Letter]) -> bool {
    guessed
        .last()
        .is_some_and(|&letter| !secret.has_letter(letter))
}

/// Key color for `letter`
#[must_use]
pub fn status_for(letter: Letter, guessed: &[Letter], secret: &SecretWord) -> KeyStatus {
    if !guessed.contains(&letter) {
        KeyStatus::Unguessed
    } else if secret.has_letter(letter) {
        KeyStatus::Correct
    } else {
        KeyStatus::Wrong
    }
}

/// Slot content for one character of the secret word
///
/// A letter is shown once guessed, or for every slot once the game is
/// lost; in the latter case never-guessed letters are marked `Missed`.
#[must_use]
pub fn reveal(ch: char, guessed: &[Letter], lost: bool) -> Slot {
    let Ok(letter) = Letter::new(ch) else {
        return Slot::Revealed(ch);
    };

    match (guessed.contains(&letter), lost) {
        (true, _) => Slot::Revealed(ch),
        (false, true) => Slot::Missed(ch),
        (false, false) => Slot::Hidden,
    }
}

/// Whether the language chip at `index` has been eliminated
///
/// Languages are eliminated in registry order, one per wrong guess.
#[inline]
#[must_use]
pub const fn is_eliminated(index: usize, wrong_count: usize) -> bool {
    index < wrong_count
}
