//! Interactive TUI interface

pub mod app;
pub mod celebration;
pub mod rendering;

pub use app::{App, Statistics, run_tui};
pub use celebration::Celebration;
