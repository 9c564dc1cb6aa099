//! Language registry
//!
//! The ordered list of programming languages that doubles as the pool of
//! secret words and the "lives remaining" row. Order matters: languages
//! are eliminated front to back, and the last one is never eliminated.

mod embedded;
pub mod farewell;

pub use embedded::{FAREWELLS, LANGUAGES, LANGUAGES_COUNT};
pub use farewell::farewell_text;

use crate::core::{SecretWord, rules};
use rand::Rng;
use std::fmt;

/// A display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// One registry entry: a language name and its chip colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub background: Rgb,
    pub foreground: Rgb,
}

/// Error type for invalid registries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Empty,
    /// Fewer than two languages leaves no wrong guess to spare
    TooSmall(usize),
    UnguessableName(&'static str),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Registry has no languages"),
            Self::TooSmall(len) => {
                write!(f, "Registry needs at least 2 languages, got {len}")
            }
            Self::UnguessableName(name) => {
                write!(f, "Language '{name}' has no letters to guess")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered set of at least two languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registry {
    languages: &'static [Language],
}

impl Registry {
    /// Create a registry from a static list of languages
    ///
    /// # Errors
    /// Returns `RegistryError` if the list has fewer than two languages or a name has no
    /// ASCII letter (such a word could never be won).
    pub fn new(languages: &'static [Language]) -> Result<Self, RegistryError> {
        if languages.is_empty() {
            return Err(RegistryError::Empty);
        }
        if languages.len() < 2 {
            return Err(RegistryError::TooSmall(languages.len()));
        }

        if let Some(bad) = languages
            .iter()
            .find(|lang| SecretWord::new(lang.name).is_err())
        {
            return Err(RegistryError::UnguessableName(bad.name));
        }

        Ok(Self { languages })
    }

    /// The built-in registry (validated by the build script)
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            languages: LANGUAGES,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always false; kept for API symmetry with slices
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn languages(&self) -> &'static [Language] {
        self.languages
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'static Language> {
        self.languages.get(index)
    }

    /// Find a language by name, ignoring case
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static Language> {
        self.languages
            .iter()
            .find(|lang| lang.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Wrong guesses tolerated before the game is lost
    #[inline]
    #[must_use]
    pub const fn loss_threshold(&self) -> usize {
        rules::loss_threshold(self.len())
    }

    /// Pick a secret word uniformly from the registry names
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretWord {
        let index = rng.random_range(0..self.len());
        self.secret_at(index)
    }

    fn secret_at(&self, index: usize) -> SecretWord {
        let lang = &self.languages[index];
        match SecretWord::new(lang.name) {
            Ok(word) => word,
            // Names are checked in `new` and by the build script
            Err(e) => unreachable!("registry holds unguessable name: {e}"),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const PLAIN: Rgb = Rgb::new(0, 0, 0);

    const BAD: &[Language] = &[
        Language {
            name: "C",
            background: PLAIN,
            foreground: PLAIN,
        },
        Language {
            name: "++",
            background: PLAIN,
            foreground: PLAIN,
        },
    ];

    #[test]
    fn builtin_registry_matches_data() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), LANGUAGES_COUNT);
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.get(0).unwrap().name, "HTML");
        assert_eq!(registry.get(8).unwrap().name, "Assembly");
        assert_eq!(registry.loss_threshold(), 8);
    }

    #[test]
    fn builtin_registry_is_valid() {
        assert_eq!(Registry::new(LANGUAGES), Ok(Registry::builtin()));
    }

    #[test]
    fn builtin_colors_parsed() {
        let html = Registry::builtin().find("html").unwrap();
        assert_eq!(html.background, Rgb::new(0xE2, 0x68, 0x0F));
        assert_eq!(html.foreground.to_string(), "#F9F4DA");
    }

    #[test]
    fn registry_rejects_empty() {
        assert_eq!(Registry::new(&[]), Err(RegistryError::Empty));
    }

    #[test]
    fn registry_rejects_single_language() {
        const ONE: &[Language] = &[Language {
            name: "Assembly",
            background: PLAIN,
            foreground: PLAIN,
        }];
        assert_eq!(Registry::new(ONE), Err(RegistryError::TooSmall(1)));
    }

    #[test]
    fn smallest_registry_starts_in_play() {
        const TWO: &[Language] = &[
            Language {
                name: "Go",
                background: PLAIN,
                foreground: PLAIN,
            },
            Language {
                name: "Assembly",
                background: PLAIN,
                foreground: PLAIN,
            },
        ];
        let registry = Registry::new(TWO).unwrap();
        assert_eq!(registry.loss_threshold(), 1);

        let mut rng = StdRng::seed_from_u64(3);
        let mut state = crate::core::GameState::random(&registry, &mut rng);
        assert!(!state.board(&registry).is_over());
        state.reset(&registry, &mut rng);
        assert!(!state.board(&registry).is_over());
    }

    #[test]
    fn registry_rejects_unguessable_names() {
        assert_eq!(Registry::new(BAD), Err(RegistryError::UnguessableName("++")));
    }

    #[test]
    fn find_is_case_insensitive() {
        let registry = Registry::builtin();
        assert_eq!(registry.find("node.JS").unwrap().name, "Node.js");
        assert!(registry.find("cobol").is_none());
    }

    #[test]
    fn random_word_comes_from_registry() {
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let word = registry.random_word(&mut rng);
            assert!(registry.find(word.text()).is_some());
        }
    }

    #[test]
    fn random_word_covers_registry() {
        let registry = Registry::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = rustc_hash::FxHashSet::default();
        for _ in 0..500 {
            seen.insert(registry.random_word(&mut rng).text().to_string());
        }
        assert_eq!(seen.len(), registry.len());
    }
}
