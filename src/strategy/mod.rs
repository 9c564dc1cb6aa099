//! Automatic guessing strategies
//!
//! Used by the simulator to play many games without a human.

use crate::core::{Board, KeyStatus, Letter};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// English letters from most to least frequent
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick an unguessed letter, or `None` if every letter has been tried
    fn next_letter<R: Rng + ?Sized>(&self, board: &Board<'_>, rng: &mut R) -> Option<Letter>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    Random(RandomStrategy),
    Frequency(FrequencyStrategy),
}

impl Strategy for StrategyType {
    fn next_letter<R: Rng + ?Sized>(&self, board: &Board<'_>, rng: &mut R) -> Option<Letter> {
        match self {
            Self::Random(s) => s.next_letter(board, rng),
            Self::Frequency(s) => s.next_letter(board, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "random", "frequency". Defaults to frequency if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::Frequency(_) => "frequency",
        }
    }
}

fn unguessed<'a>(board: &'a Board<'_>) -> impl Iterator<Item = Letter> + 'a {
    Letter::all().filter(|&letter| board.key_status(letter) == KeyStatus::Unguessed)
}

/// Uniformly random unguessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_letter<R: Rng + ?Sized>(&self, board: &Board<'_>, rng: &mut R) -> Option<Letter> {
        let options: Vec<Letter> = unguessed(board).collect();
        options.choose(rng).copied()
    }
}

/// Most frequent English letter not yet guessed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter<R: Rng + ?Sized>(&self, board: &Board<'_>, _rng: &mut R) -> Option<Letter> {
        FREQUENCY_ORDER
            .chars()
            .filter_map(|c| Letter::new(c).ok())
            .find(|&letter| board.key_status(letter) == KeyStatus::Unguessed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, SecretWord};
    use crate::registry::Registry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn game(word: &str, guesses: &str) -> GameState {
        let mut state = GameState::new(SecretWord::new(word).unwrap());
        for c in guesses.chars() {
            state.guess(Letter::new(c).unwrap());
        }
        state
    }

    #[test]
    fn frequency_order_is_a_permutation_of_the_alphabet() {
        let mut letters: Vec<char> = FREQUENCY_ORDER.chars().collect();
        letters.sort_unstable();
        assert_eq!(letters.into_iter().collect::<String>(), crate::core::ALPHABET);
    }

    #[test]
    fn frequency_skips_guessed_letters() {
        let registry = Registry::builtin();
        let state = game("ruby", "eta");
        let mut rng = StdRng::seed_from_u64(0);

        let letter = FrequencyStrategy.next_letter(&state.board(&registry), &mut rng);
        assert_eq!(letter, Letter::new('o').ok());
    }

    #[test]
    fn random_never_repeats_a_guess() {
        let registry = Registry::builtin();
        let state = game("ruby", "abcdefghijklmnopqrstuvwxy");
        let mut rng = StdRng::seed_from_u64(9);

        let letter = RandomStrategy.next_letter(&state.board(&registry), &mut rng);
        assert_eq!(letter, Letter::new('z').ok());
    }

    #[test]
    fn strategies_exhaust_the_alphabet() {
        let registry = Registry::builtin();
        let state = game("ruby", crate::core::ALPHABET);
        let mut rng = StdRng::seed_from_u64(1);
        let board = state.board(&registry);

        assert_eq!(RandomStrategy.next_letter(&board, &mut rng), None);
        assert_eq!(FrequencyStrategy.next_letter(&board, &mut rng), None);
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("unknown").name(), "frequency");
    }
}
