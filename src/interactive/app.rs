//! TUI application state and logic

use super::celebration::Celebration;
use super::rendering::{key_at, new_game_rect, screen_layout};
use crate::config::GameConfig;
use crate::core::{Board, GameState, GuessOutcome, Letter};
use crate::registry::Registry;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{debug, info};
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;
use std::time::{Duration, Instant};

/// Application state
///
/// The single owner of the game state; all mutation happens here, on the
/// event loop.
pub struct App {
    pub registry: Registry,
    pub state: GameState,
    pub config: GameConfig,
    pub celebration: Option<Celebration>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub games_lost: usize,
    /// Consecutive wins
    pub streak: usize,
}

impl App {
    /// Start a session with a random first word
    #[must_use]
    pub fn new(registry: Registry, config: GameConfig, mut rng: StdRng) -> Self {
        let state = GameState::random(&registry, &mut rng);
        Self::with_state(registry, config, state, rng)
    }

    /// Start a session from an existing game
    #[must_use]
    pub fn with_state(
        registry: Registry,
        config: GameConfig,
        state: GameState,
        rng: StdRng,
    ) -> Self {
        Self {
            registry,
            state,
            config,
            celebration: None,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    #[must_use]
    pub const fn board(&self) -> Board<'_> {
        self.state.board(&self.registry)
    }

    /// Guess a letter from the on-screen keyboard
    ///
    /// Returns `None` when the keyboard is disabled (game over).
    pub fn press_letter(&mut self, letter: Letter) -> Option<GuessOutcome> {
        if self.board().is_over() {
            return None;
        }

        let outcome = self.state.guess(letter);
        if self.board().is_over() {
            self.finish_game();
        }
        Some(outcome)
    }

    fn finish_game(&mut self) {
        let won = self.board().is_won();
        self.stats.total_games += 1;

        if won {
            self.stats.games_won += 1;
            self.stats.streak += 1;
            info!(
                "won '{}' with {} wrong guesses",
                self.state.secret(),
                self.board().wrong_guess_count()
            );

            let cfg = &self.config.celebration;
            if cfg.enabled {
                self.celebration = Some(Celebration::burst(
                    cfg.particles,
                    cfg.gravity,
                    &mut self.rng,
                ));
            }
        } else {
            self.stats.games_lost += 1;
            self.stats.streak = 0;
            info!("lost '{}'", self.state.secret());
        }
    }

    /// Resample the secret word and clear all guesses
    pub fn new_game(&mut self) {
        self.state.reset(&self.registry, &mut self.rng);
        self.celebration = None;
    }

    /// Advance animations
    pub fn on_tick(&mut self, dt: Duration) {
        if let Some(celebration) = self.celebration.as_mut() {
            celebration.tick(dt);
            if celebration.is_finished() {
                debug!("celebration finished after {:?}", celebration.elapsed());
                self.celebration = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let over = self.board().is_over();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('q' | 'Q') if over => {
                self.should_quit = true;
            }
            KeyCode::Char('n' | 'N') | KeyCode::Enter if over => {
                self.new_game();
            }
            KeyCode::Char(c) => {
                if let Ok(letter) = Letter::new(c) {
                    self.press_letter(letter);
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event on a screen of size `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let position = Position::new(mouse.column, mouse.row);
        let layout = self.config.display.keyboard;

        if self.board().is_over() {
            let screen = screen_layout(area, layout);
            if new_game_rect(screen.new_game).contains(position) {
                self.new_game();
            }
        } else if let Some(letter) = key_at(area, layout, position) {
            self.press_letter(letter);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(app.config.display.tick_rate_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(last_tick.elapsed());
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameStatus, SecretWord};
    use crate::interactive::rendering::{key_rects, ui};
    use crossterm::event::{KeyEventState, MouseEvent};
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    fn new_app(word: &str) -> App {
        let state = GameState::new(SecretWord::new(word).unwrap());
        App::with_state(
            Registry::builtin(),
            GameConfig::default(),
            state,
            StdRng::seed_from_u64(21),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
    }

    fn type_letters(app: &mut App, letters: &str) {
        for c in letters.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, x: u16, y: u16) {
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            },
            AREA,
        );
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn typing_guesses_letters() {
        let mut app = new_app("ruby");
        type_letters(&mut app, "rz");
        assert_eq!(app.state.guessed().len(), 2);
        assert_eq!(app.board().wrong_guess_count(), 1);
    }

    #[test]
    fn winning_starts_celebration_and_counts_stats() {
        let mut app = new_app("go");
        type_letters(&mut app, "go");

        assert_eq!(app.board().status(), GameStatus::Won);
        assert!(app.celebration.is_some());
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.streak, 1);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn celebration_runs_once_and_ends() {
        let mut app = new_app("go");
        type_letters(&mut app, "go");
        for _ in 0..600 {
            app.on_tick(Duration::from_millis(33));
        }
        assert!(app.celebration.is_none());
        // still won, but no new burst
        assert!(app.board().is_won());
    }

    #[test]
    fn celebration_can_be_disabled() {
        let mut app = new_app("go");
        app.config.celebration.enabled = false;
        type_letters(&mut app, "go");
        assert!(app.board().is_won());
        assert!(app.celebration.is_none());
    }

    #[test]
    fn keyboard_disabled_after_loss() {
        let mut app = new_app("go");
        type_letters(&mut app, "abcdefhi");
        assert!(app.board().is_lost());
        assert_eq!(app.stats.games_lost, 1);
        assert_eq!(app.stats.streak, 0);

        assert_eq!(app.press_letter(Letter::new('g').unwrap()), None);
        assert_eq!(app.state.guessed().len(), 8);
        // a ninth wrong guess never happens
        assert_eq!(app.board().wrong_guess_count(), 8);
    }

    #[test]
    fn enter_starts_new_game_only_when_over() {
        let mut app = new_app("go");
        type_letters(&mut app, "z");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.guessed().len(), 1);

        type_letters(&mut app, "go");
        assert!(app.board().is_over());
        press(&mut app, KeyCode::Enter);
        assert!(app.state.guessed().is_empty());
        assert!(!app.board().is_over());
        assert!(app.celebration.is_none());
    }

    #[test]
    fn n_is_a_guess_while_playing() {
        let mut app = new_app("python");
        type_letters(&mut app, "n");
        assert_eq!(app.state.guessed(), &[Letter::new('n').unwrap()]);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app("go");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a guess while playing");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app2 = new_app("go");
        press(&mut app2, KeyCode::Esc);
        assert!(app2.should_quit);
    }

    #[test]
    fn uppercase_controls_after_game_over() {
        let mut app = new_app("go");
        type_letters(&mut app, "go");
        press(&mut app, KeyCode::Char('N'));
        assert!(app.state.guessed().is_empty());
        assert!(!app.board().is_over());

        let mut app = new_app("go");
        type_letters(&mut app, "go");
        press(&mut app, KeyCode::Char('Q'));
        assert!(app.should_quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = new_app("go");
        app.handle_key(KeyEvent {
            code: KeyCode::Char('g'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(app.state.guessed().is_empty());
    }

    #[test]
    fn clicking_a_key_guesses_it() {
        let mut app = new_app("go");
        let screen = screen_layout(AREA, app.config.display.keyboard);
        let (_, rect) = key_rects(screen.keyboard, app.config.display.keyboard)
            .into_iter()
            .find(|(letter, _)| letter.as_char() == 'g')
            .unwrap();

        click(&mut app, rect.x + 2, rect.y + 1);
        assert_eq!(app.state.guessed(), &[Letter::new('g').unwrap()]);
    }

    #[test]
    fn clicking_new_game_restarts() {
        let mut app = new_app("go");
        type_letters(&mut app, "go");
        let screen = screen_layout(AREA, app.config.display.keyboard);
        let button = new_game_rect(screen.new_game);

        click(&mut app, button.x + 1, button.y + 1);
        assert!(app.state.guessed().is_empty());
    }

    #[test]
    fn screen_shows_title_and_chips() {
        let app = new_app("ruby");
        let text = screen_text(&app);
        assert!(text.contains("Assembly: Endgame"));
        assert!(text.contains("8 attempts"));
        assert!(text.contains("HTML"));
        assert!(!text.contains("New Game"));
    }

    #[test]
    fn screen_shows_win_banner() {
        let mut app = new_app("go");
        app.config.celebration.enabled = false;
        type_letters(&mut app, "go");
        let text = screen_text(&app);
        assert!(text.contains("You win!"));
        assert!(text.contains("New Game"));
    }

    #[test]
    fn screen_shows_loss_banner() {
        let mut app = new_app("go");
        type_letters(&mut app, "abcdefhi");
        let text = screen_text(&app);
        assert!(text.contains("You lost!"));
        assert!(text.contains("New Game"));
    }

    #[test]
    fn screen_renders_with_confetti() {
        let mut app = new_app("go");
        type_letters(&mut app, "go");
        for _ in 0..30 {
            app.on_tick(Duration::from_millis(33));
        }
        // must not panic drawing particles near the edges
        let _ = screen_text(&app);
    }
}
