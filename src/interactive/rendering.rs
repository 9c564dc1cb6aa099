//! TUI rendering with ratatui
//!
//! Layout and drawing for the game screen. The layout functions are pure
//! so mouse clicks can be mapped back onto keys.

use super::app::App;
use super::celebration::{Celebration, PALETTE_SIZE};
use crate::config::KeyboardLayout;
use crate::core::{Board, GameStatus, KeyStatus, Letter, Slot};
use crate::registry::Rgb;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

const KEY_WIDTH: u16 = 5;
const KEY_HEIGHT: u16 = 3;
const KEY_GAP: u16 = 1;
const NEW_GAME_WIDTH: u16 = 16;

const CONFETTI_COLORS: [Color; PALETTE_SIZE] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub header: Rect,
    pub status: Rect,
    pub chips: Rect,
    pub word: Rect,
    pub keyboard: Rect,
    pub new_game: Rect,
    pub footer: Rect,
}

/// Split the terminal into the screen regions
#[must_use]
pub fn screen_layout(area: Rect, keyboard: KeyboardLayout) -> Screen {
    let keyboard_height = keyboard.rows().len() as u16 * KEY_HEIGHT;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // Header
            Constraint::Length(4),               // Status banner
            Constraint::Length(4),               // Language chips
            Constraint::Length(3),               // Word
            Constraint::Length(keyboard_height), // Keyboard
            Constraint::Length(3),               // New game button
            Constraint::Min(0),                  // Spacer
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    Screen {
        header: chunks[0],
        status: chunks[1],
        chips: chunks[2],
        word: chunks[3],
        keyboard: chunks[4],
        new_game: chunks[5],
        footer: chunks[7],
    }
}

/// Position of every key inside the keyboard region
///
/// Rows are centered; keys that do not fit are left out.
#[must_use]
pub fn key_rects(area: Rect, layout: KeyboardLayout) -> Vec<(Letter, Rect)> {
    let mut keys = Vec::with_capacity(26);

    for (row_index, row) in layout.rows().iter().enumerate() {
        let letters: Vec<Letter> = row.chars().filter_map(|c| Letter::new(c).ok()).collect();
        let count = letters.len() as u16;
        let row_width = count * KEY_WIDTH + count.saturating_sub(1) * KEY_GAP;
        let x0 = area.x + area.width.saturating_sub(row_width) / 2;
        let y = area.y + row_index as u16 * KEY_HEIGHT;

        for (i, letter) in letters.into_iter().enumerate() {
            let x = x0 + i as u16 * (KEY_WIDTH + KEY_GAP);
            let rect = Rect::new(x, y, KEY_WIDTH, KEY_HEIGHT).intersection(area);
            if rect.width == KEY_WIDTH && rect.height == KEY_HEIGHT {
                keys.push((letter, rect));
            }
        }
    }

    keys
}

/// The key under a screen position, if any
#[must_use]
pub fn key_at(area: Rect, layout: KeyboardLayout, position: Position) -> Option<Letter> {
    let screen = screen_layout(area, layout);
    key_rects(screen.keyboard, layout)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(letter, _)| letter)
}

/// Where the "New Game" button is drawn
#[must_use]
pub fn new_game_rect(area: Rect) -> Rect {
    let width = NEW_GAME_WIDTH.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let layout = app.config.display.keyboard;
    let screen = screen_layout(f.area(), layout);
    let board = app.board();

    render_header(f, &board, screen.header);
    render_status(f, &board, screen.status);
    render_chips(f, &board, screen.chips);
    render_word(f, &board, screen.word);
    render_keyboard(f, &board, layout, screen.keyboard);
    if board.is_over() {
        render_new_game(f, screen.new_game);
    }
    render_footer(f, app, &board, screen.footer);

    if let Some(ref celebration) = app.celebration {
        f.render_widget(Confetti(celebration), f.area());
    }
}

fn render_header(f: &mut Frame, board: &Board<'_>, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Assembly: Endgame",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "Guess the word within {} attempts to keep the programming world safe from Assembly!",
            board.registry().loss_threshold()
        )),
    ];

    let header = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_status(f: &mut Frame, board: &Board<'_>, area: Rect) {
    let (content, color) = match board.status() {
        GameStatus::Playing => (vec![], Color::DarkGray),
        GameStatus::Farewell { text, .. } => (
            vec![Line::from(Span::styled(
                format!("“{text}” 🫡"),
                Style::default().add_modifier(Modifier::ITALIC),
            ))],
            Color::Magenta,
        ),
        GameStatus::Won => (
            vec![
                Line::from(Span::styled(
                    "You win!",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from("Well done! 🎉"),
            ],
            Color::Green,
        ),
        GameStatus::Lost => (
            vec![
                Line::from(Span::styled(
                    "You lost!",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from("Better start learning Assembly 😭"),
            ],
            Color::Red,
        ),
    };

    let status = Paragraph::new(content)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(status, area);
}

fn render_chips(f: &mut Frame, board: &Board<'_>, area: Rect) {
    let mut spans = Vec::new();
    for (i, chip) in board.chips().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let lang = chip.language;
        spans.push(if chip.eliminated {
            Span::styled(
                format!(" 💀{} ", lang.name),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
            )
        } else {
            Span::styled(
                format!(" {} ", lang.name),
                Style::default()
                    .fg(rgb(lang.foreground))
                    .bg(rgb(lang.background)),
            )
        });
    }

    let chips = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" Languages | {} attempts left ", board.attempts_left()))
                .borders(Borders::ALL),
        );
    f.render_widget(chips, area);
}

fn render_word(f: &mut Frame, board: &Board<'_>, area: Rect) {
    let slot_style = Style::default().add_modifier(Modifier::UNDERLINED);
    let spans: Vec<Span> = board
        .slots()
        .into_iter()
        .map(|slot| {
            let text = format!(" {} ", slot.glyph().unwrap_or(' '));
            match slot {
                Slot::Hidden => Span::styled(text, slot_style),
                Slot::Revealed(_) => Span::styled(
                    text,
                    slot_style.fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Slot::Missed(_) => Span::styled(
                    text,
                    slot_style.fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            }
        })
        .collect();

    let word = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(word, area);
}

fn key_style(status: KeyStatus, over: bool) -> Style {
    let style = match status {
        KeyStatus::Unguessed => Style::default().fg(Color::Yellow),
        KeyStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyStatus::Wrong => Style::default().fg(Color::White).bg(Color::Red),
    };
    if over {
        style.add_modifier(Modifier::DIM)
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

fn render_keyboard(f: &mut Frame, board: &Board<'_>, layout: KeyboardLayout, area: Rect) {
    let over = board.is_over();

    for (letter, rect) in key_rects(area, layout) {
        let style = key_style(board.key_status(letter), over);
        let key = Paragraph::new(letter.to_upper().to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(style),
            );
        f.render_widget(key, rect);
    }
}

fn render_new_game(f: &mut Frame, area: Rect) {
    let button = Paragraph::new("New Game")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(button, new_game_rect(area));
}

fn render_footer(f: &mut Frame, app: &App, board: &Board<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Won: {} | Lost: {} | Streak: {}",
        app.stats.total_games, app.stats.games_won, app.stats.games_lost, app.stats.streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help_text = if board.is_over() {
        "Enter/n: New Game | q/Esc: Quit"
    } else {
        "a-z or click: Guess | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

/// Confetti overlay
struct Confetti<'a>(&'a Celebration);

impl Widget for Confetti<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        for p in self.0.particles() {
            if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * f32::from(area.width)) as u16;
            let y = area.y + (p.y * f32::from(area.height)) as u16;
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_char(p.glyph)
                    .set_fg(CONFETTI_COLORS[p.color % PALETTE_SIZE]);
            }
        }
    }
}
