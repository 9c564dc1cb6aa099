//! Simple line-based mode
//!
//! Text-based game without the TUI: one line of input per turn.

use crate::config::KeyboardLayout;
use crate::core::{GameState, GameStatus, GuessOutcome, Letter};
use crate::output::display::{print_board, print_help};
use crate::registry::Registry;
use anyhow::Result;
use colored::Colorize;
use log::info;
use rand::Rng;
use std::io::{BufRead, Write};

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Letters to guess, in order
    Guess(Vec<Letter>),
    New,
    Quit,
    Help,
    Invalid(String),
}

/// Parse one line of input
///
/// The words `new`, `quit`/`exit`, and `help` are commands; any other run
/// of letters is a sequence of guesses.
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "" => Command::Invalid("Type a letter to guess".to_string()),
        "new" => Command::New,
        "quit" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        _ => {
            let letters: Result<Vec<Letter>, _> = input
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(Letter::new)
                .collect();
            match letters {
                Ok(letters) => Command::Guess(letters),
                Err(e) => Command::Invalid(e.to_string()),
            }
        }
    }
}

/// Run the simple mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(registry: &Registry, layout: KeyboardLayout, rng: &mut R) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(registry, layout, rng, stdin.lock(), stdout.lock())
}

/// Play games reading commands from `input` until quit or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: Rng, I: BufRead, W: Write>(
    registry: &Registry,
    layout: KeyboardLayout,
    rng: &mut R,
    mut input: I,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                     Assembly: Endgame                        ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the word within {} attempts to keep the programming world safe from Assembly!",
        registry.loss_threshold()
    )?;
    print_help(&mut out)?;

    let mut state = GameState::random(registry, rng);

    loop {
        print_board(&mut out, &state.board(registry), layout)?;

        if state.board(registry).is_over() {
            let won = state.board(registry).status() == GameStatus::Won;
            info!(
                "game over: {} ({} wrong)",
                if won { "won" } else { "lost" },
                state.board(registry).wrong_guess_count()
            );

            let Some(answer) = prompt(&mut input, &mut out, "Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                state.reset(registry, rng);
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            break;
        }

        let Some(line) = prompt(&mut input, &mut out, "Guess a letter")? else {
            break;
        };

        match parse_command(&line) {
            Command::Guess(letters) => {
                for letter in letters {
                    if state.board(registry).is_over() {
                        break;
                    }
                    if state.guess(letter) == GuessOutcome::Repeated {
                        writeln!(out, "{}", format!("You already guessed {letter}").yellow())?;
                    }
                }
            }
            Command::New => {
                state.reset(registry, rng);
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            Command::Quit => break,
            Command::Help => print_help(&mut out)?,
            Command::Invalid(msg) => writeln!(out, "{}", format!("❌ {msg}").red())?,
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Write a prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(input: &mut I, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn letters(s: &str) -> Vec<Letter> {
        s.chars().map(|c| Letter::new(c).unwrap()).collect()
    }

    fn run(seed: u64, script: &str) -> String {
        colored::control::set_override(false);
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut out = Vec::new();
        play(
            &registry,
            KeyboardLayout::Alphabetical,
            &mut rng,
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(parse_command("new"), Command::New);
        assert_eq!(parse_command(" QUIT "), Command::Quit);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("r"), Command::Guess(letters("r")));
        assert_eq!(parse_command("R u b"), Command::Guess(letters("rub")));
        assert!(matches!(parse_command("4"), Command::Invalid(_)));
        assert!(matches!(parse_command(""), Command::Invalid(_)));
    }

    #[test]
    fn quit_ends_session() {
        let output = run(1, "quit\n");
        assert!(output.contains("Assembly: Endgame"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn end_of_input_ends_session() {
        let output = run(1, "");
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn guessing_every_letter_finishes_the_game() {
        // The whole alphabet either wins or loses any word
        let output = run(2, "abcdefghijklmnopqrstuvwxyz\nno\n");
        assert!(output.contains("You win!") || output.contains("You lost!"));
        assert!(output.contains("Play again?"));
    }

    #[test]
    fn vowels_then_everything_wins_or_loses() {
        let output = run(3, "aeiou\nrstlnmhpcdfgbjkqvwxyz\nyes\nquit\n");
        assert!(output.contains("New game started"));
    }

    #[test]
    fn repeated_guess_is_reported() {
        let output = run(4, "e\ne\nquit\n");
        assert!(output.contains("You already guessed E"));
    }

    #[test]
    fn invalid_input_is_reported() {
        let output = run(5, "7\nquit\n");
        assert!(output.contains("is not a letter"));
    }
}
