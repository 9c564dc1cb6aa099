//! Display functions for boards and command results

use super::formatters::{attempts_bar, chip, chips_line, keyboard_lines, word_line};
use crate::commands::{LanguageRow, SimulationResult};
use crate::config::KeyboardLayout;
use crate::core::{Board, Chip, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print the full board: status, chips, word, keyboard
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_board<W: Write>(
    out: &mut W,
    board: &Board<'_>,
    layout: KeyboardLayout,
) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    match board.status() {
        GameStatus::Playing => {}
        GameStatus::Farewell { text, .. } => {
            writeln!(out, "  {}", format!("“{text}” 🫡").magenta().italic())?;
        }
        GameStatus::Won => {
            writeln!(out, "  {}", "You win!".bright_green().bold())?;
            writeln!(out, "  {}", "Well done! 🎉".green())?;
        }
        GameStatus::Lost => {
            writeln!(out, "  {}", "You lost!".bright_red().bold())?;
            writeln!(
                out,
                "  {}",
                "Better start learning Assembly 😭".red()
            )?;
        }
    }

    writeln!(out, "\n  {}", chips_line(board))?;
    writeln!(
        out,
        "\n  Attempts left: [{}] {}",
        attempts_bar(board).green(),
        board.attempts_left()
    )?;
    writeln!(out, "\n      {}\n", word_line(board))?;
    for line in keyboard_lines(board, layout) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

/// Print the commands accepted by the simple mode
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  - Type a letter (or several) and press Enter to guess")?;
    writeln!(out, "  - 'new' starts a new game, 'quit' exits, 'help' shows this")?;
    writeln!(out)?;
    Ok(())
}

/// Print the language registry
pub fn print_languages(rows: &[LanguageRow]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "LANGUAGES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for row in rows {
        let lost_at = row.eliminated_by.map_or_else(
            || "never eliminated".bright_green().to_string(),
            |n| format!("lost on wrong guess #{n}"),
        );
        let chip_text = chip(&Chip {
            language: row.language,
            eliminated: false,
        });
        println!(
            "  {:>2}. {}  {} / {}  {}",
            row.index + 1,
            chip_text,
            row.language.background.to_string().bright_black(),
            row.language.foreground.to_string().bright_black(),
            lost_at
        );
    }

    let threshold = rows.iter().filter(|r| r.eliminated_by.is_some()).count();
    println!("\n  Wrong guesses allowed: {}", threshold.to_string().bright_yellow().bold());
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Won / lost:       {} / {}", result.won.to_string().green(), result.lost.to_string().red());
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.games == 0 {
        return;
    }

    println!("\n📈 {}", "Wrong guesses:".bright_cyan().bold());
    let max_wrong = result.wrong_distribution.keys().copied().max().unwrap_or(0);
    for wrong in 0..=max_wrong {
        let count = result.wrong_distribution.get(&wrong).copied().unwrap_or(0);
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {wrong}: {bar} {count:5} ({pct:5.1}%)");
    }

    println!("\n🗂  {}", "By word:".bright_cyan().bold());
    for lang in &result.per_language {
        let rate = if lang.games == 0 {
            0.0
        } else {
            lang.won as f64 / lang.games as f64 * 100.0
        };
        println!(
            "   {:<12} {:5} games  {:5.1}% won",
            lang.name, lang.games, rate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Letter, SecretWord};
    use crate::registry::Registry;

    fn render(word: &str, guesses: &str) -> String {
        colored::control::set_override(false);
        let registry = Registry::builtin();
        let mut state = GameState::new(SecretWord::new(word).unwrap());
        for c in guesses.chars() {
            state.guess(Letter::new(c).unwrap());
        }
        let mut out = Vec::new();
        print_board(&mut out, &state.board(&registry), KeyboardLayout::Qwerty).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_shows_win_message() {
        let text = render("go", "go");
        assert!(text.contains("You win!"));
        assert!(text.contains("G O"));
    }

    #[test]
    fn board_shows_loss_message() {
        let text = render("go", "abcdefhi");
        assert!(text.contains("You lost!"));
        assert!(text.contains("Better start learning Assembly"));
    }

    #[test]
    fn board_shows_farewell_for_first_language() {
        let text = render("go", "z");
        assert!(text.contains("Adios, HTML"));
        assert!(!text.contains("You win!"));
    }

    #[test]
    fn board_is_quiet_before_first_guess() {
        let text = render("go", "");
        assert!(!text.contains("You win!"));
        assert!(!text.contains("You lost!"));
        assert!(text.contains("_ _"));
        assert!(text.contains("[Q] [W] [E]"));
    }
}
