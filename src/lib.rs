//! Assembly: Endgame
//!
//! A hangman-style word game: guess the name of a programming language
//! before the wrong guesses wipe out every language but Assembly.
//!
//! # Quick Start
//!
//! ```rust
//! use assembly_endgame::core::{GameState, Letter, SecretWord};
//! use assembly_endgame::registry::Registry;
//!
//! let registry = Registry::builtin();
//! let mut game = GameState::new(SecretWord::new("go").unwrap());
//!
//! game.guess(Letter::new('g').unwrap());
//! game.guess(Letter::new('o').unwrap());
//! assert!(game.board(&registry).is_won());
//! ```

// Core domain types
pub mod core;

// Languages and farewell texts
pub mod registry;

// Automatic guessing strategies
pub mod strategy;

// config.toml loading
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
