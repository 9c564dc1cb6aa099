//! Simulation command
//!
//! Plays many games with an automatic strategy and collects statistics.

use crate::core::GameState;
use crate::registry::Registry;
use crate::strategy::{Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    pub wrong_guesses: usize,
}

/// Win rate for one secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub name: &'static str,
    pub games: usize,
    pub won: usize,
}

/// Statistics over all simulated games
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: &'static str,
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    pub average_guesses: f64,
    /// wrong guesses -> number of games
    pub wrong_distribution: FxHashMap<usize, usize>,
    /// In registry order
    pub per_language: Vec<LanguageStats>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }
}

/// Play a single game to the end with `strategy`
pub fn play_game<S: Strategy, R: Rng + ?Sized>(
    registry: &Registry,
    strategy: &S,
    rng: &mut R,
) -> GameRecord {
    let mut state = GameState::random(registry, rng);

    while !state.board(registry).is_over() {
        let Some(letter) = strategy.next_letter(&state.board(registry), rng) else {
            break;
        };
        state.guess(letter);
    }

    let board = state.board(registry);
    GameRecord {
        word: state.secret().text().to_string(),
        won: board.is_won(),
        guesses: state.guessed().len(),
        wrong_guesses: board.wrong_guess_count(),
    }
}

/// Run `games` independent games in parallel
///
/// Game `i` uses an RNG seeded with `seed + i`, so results depend only on
/// the seed and not on thread scheduling.
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation(
    registry: &Registry,
    strategy: StrategyType,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> SimulationResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let records: Vec<GameRecord> = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let record = play_game(registry, &strategy, &mut rng);
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let result = summarize(registry, strategy.name(), &records, duration);
    info!(
        "simulated {} games with {} strategy: {} won",
        result.games, result.strategy, result.won
    );
    result
}

fn summarize(
    registry: &Registry,
    strategy: &'static str,
    records: &[GameRecord],
    duration: Duration,
) -> SimulationResult {
    let won = records.iter().filter(|r| r.won).count();

    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for record in records {
        *wrong_distribution.entry(record.wrong_guesses).or_insert(0) += 1;
    }

    let per_language = registry
        .languages()
        .iter()
        .map(|lang| {
            let games: Vec<&GameRecord> = records
                .iter()
                .filter(|r| lang.name.eq_ignore_ascii_case(&r.word))
                .collect();
            LanguageStats {
                name: lang.name,
                games: games.len(),
                won: games.iter().filter(|r| r.won).count(),
            }
        })
        .collect();

    let average_guesses = if records.is_empty() {
        0.0
    } else {
        records.iter().map(|r| r.guesses).sum::<usize>() as f64 / records.len() as f64
    };

    SimulationResult {
        strategy,
        games: records.len(),
        won,
        lost: records.len() - won,
        average_guesses,
        wrong_distribution,
        per_language,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{FrequencyStrategy, RandomStrategy};

    #[test]
    fn every_game_ends() {
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let record = play_game(&registry, &RandomStrategy, &mut rng);
            assert!(record.won || record.wrong_guesses == registry.loss_threshold());
            assert!(record.wrong_guesses <= registry.loss_threshold());
            assert!(record.guesses <= 26);
        }
    }

    #[test]
    fn simulation_counts_add_up() {
        let registry = Registry::builtin();
        let result = run_simulation(
            &registry,
            StrategyType::Frequency(FrequencyStrategy),
            200,
            11,
            false,
        );

        assert_eq!(result.games, 200);
        assert_eq!(result.won + result.lost, 200);
        assert_eq!(result.wrong_distribution.values().sum::<usize>(), 200);
        assert_eq!(result.per_language.len(), registry.len());
        assert_eq!(result.per_language.iter().map(|l| l.games).sum::<usize>(), 200);
        assert!(result.win_rate() >= 0.0 && result.win_rate() <= 1.0);
    }

    #[test]
    fn simulation_is_reproducible() {
        let registry = Registry::builtin();
        let strategy = StrategyType::Random(RandomStrategy);
        let a = run_simulation(&registry, strategy, 64, 99, false);
        let b = run_simulation(&registry, strategy, 64, 99, false);

        assert_eq!(a.won, b.won);
        assert_eq!(a.per_language, b.per_language);
        assert_eq!(a.wrong_distribution, b.wrong_distribution);
    }

    #[test]
    fn empty_simulation() {
        let registry = Registry::builtin();
        let result = run_simulation(
            &registry,
            StrategyType::Random(RandomStrategy),
            0,
            0,
            false,
        );
        assert_eq!(result.games, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
