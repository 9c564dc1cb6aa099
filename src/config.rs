//! External configuration loader
//!
//! Reads `config.toml` from the executable's directory (or CWD), or from an
//! explicit path. Missing keys fall back to defaults.

use log::{info, warn};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// File name searched for when no explicit path is given
pub const CONFIG_FILE: &str = "config.toml";

// ── Public Config Struct ──

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub display: DisplayConfig,
    pub celebration: CelebrationConfig,
    /// Fixed RNG seed for reproducible games
    pub seed: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    pub tick_rate_ms: u64,
    pub keyboard: KeyboardLayout,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CelebrationConfig {
    pub enabled: bool,
    pub particles: usize,
    /// Downward acceleration in screen heights per second squared
    pub gravity: f32,
}

/// Row arrangement of the on-screen keyboard
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardLayout {
    #[default]
    Alphabetical,
    Qwerty,
}

impl KeyboardLayout {
    /// Letters of each keyboard row, top to bottom
    #[must_use]
    pub const fn rows(self) -> &'static [&'static str] {
        match self {
            Self::Alphabetical => &["abcdefghi", "jklmnopqr", "stuvwxyz"],
            Self::Qwerty => &["qwertyuiop", "asdfghjkl", "zxcvbnm"],
        }
    }
}

/// Error type for configuration loading
#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(path, e) => write!(f, "could not read {}: {e}", path.display()),
            Self::Parse(path, e) => write!(f, "{} parse error: {e}", path.display()),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(_, e) => Some(e),
            Self::Parse(_, e) => Some(e),
        }
    }
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    display: TomlDisplay,
    #[serde(default)]
    celebration: TomlCelebration,
    #[serde(default)]
    game: TomlGame,
}

#[derive(Deserialize, Debug)]
struct TomlDisplay {
    #[serde(default = "default_tick_rate")]
    tick_rate_ms: u64,
    #[serde(default)]
    keyboard: KeyboardLayout,
}

#[derive(Deserialize, Debug)]
struct TomlCelebration {
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default = "default_particles")]
    particles: usize,
    #[serde(default = "default_gravity")]
    gravity: f32,
}

#[derive(Deserialize, Debug, Default)]
struct TomlGame {
    #[serde(default)]
    seed: Option<u64>,
}

// ── Defaults ──

fn default_tick_rate() -> u64 { 33 } // ~30 fps while confetti falls
fn default_enabled() -> bool { true }
fn default_particles() -> usize { 1000 }
fn default_gravity() -> f32 { 0.6 }

impl Default for TomlDisplay {
    fn default() -> Self {
        TomlDisplay {
            tick_rate_ms: default_tick_rate(),
            keyboard: KeyboardLayout::default(),
        }
    }
}

impl Default for TomlCelebration {
    fn default() -> Self {
        TomlCelebration {
            enabled: default_enabled(),
            particles: default_particles(),
            gravity: default_gravity(),
        }
    }
}

impl TomlConfig {
    fn into_config(self) -> GameConfig {
        let mut gravity = self.celebration.gravity;
        // confetti must fall or it never leaves the screen
        if !(gravity.is_finite() && gravity > 0.0) {
            warn!("celebration gravity {gravity} must be positive, using {}", default_gravity());
            gravity = default_gravity();
        }

        GameConfig {
            display: DisplayConfig {
                // zero would spin the event loop
                tick_rate_ms: self.display.tick_rate_ms.max(1),
                keyboard: self.display.keyboard,
            },
            celebration: CelebrationConfig {
                enabled: self.celebration.enabled,
                particles: self.celebration.particles,
                gravity,
            },
            seed: self.game.seed,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        TomlConfig::default().into_config()
    }
}

// ── Loading ──

impl GameConfig {
    /// Load configuration
    ///
    /// With `explicit`, that file must exist. Otherwise `config.toml` is
    /// searched in the executable directory, then the CWD; if none is
    /// found the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match candidate_dirs()
            .into_iter()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|path| path.is_file())
        {
            Some(path) => Self::from_file(&path),
            None => {
                info!("no {CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        let config = Self::parse(&text).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns the TOML error for malformed input or unknown sections.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str::<TomlConfig>(text)?.into_config();
        if config.celebration.enabled && config.celebration.particles == 0 {
            warn!("celebration enabled with zero particles");
        }
        Ok(config)
    }
}

/// Candidate directories to search: exe dir + CWD (deduplicated).
fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![];

    // 1. Directory of the running executable
    if let Ok(exe) = std::env::current_exe() {
        let resolved = exe.canonicalize().unwrap_or(exe);
        if let Some(parent) = resolved.parent() {
            dirs.push(parent.to_path_buf());
        }
    }

    // 2. Current working directory
    if let Ok(cwd) = std::env::current_dir()
        && !dirs.iter().any(|d| d == &cwd)
    {
        dirs.push(cwd);
    }

    dirs
}
