//! Core domain types for the game
//!
//! Letters, the secret word, the pure rules, and the game state. Nothing
//! here touches the terminal.

mod letter;
pub mod rules;
mod state;
mod word;

pub use letter::{ALPHABET, Letter, LetterError};
pub use rules::{KeyStatus, Slot};
pub use state::{Board, Chip, GameState, GameStatus, GuessOutcome};
pub use word::{SecretWord, WordError};
