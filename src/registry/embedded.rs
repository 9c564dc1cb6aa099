//! Embedded registry data
//!
//! Languages and farewell templates compiled into the binary at build time.

use super::{Language, Rgb};

// Include generated data from build script
include!(concat!(env!("OUT_DIR"), "/languages.rs"));
include!(concat!(env!("OUT_DIR"), "/farewells.rs"));
