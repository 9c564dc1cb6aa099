//! Farewell messages for eliminated languages

use super::FAREWELLS;

/// Flavor text shown when a wrong guess eliminates `language`
///
/// `variant` picks the template (wrapping around), so the same game state
/// always renders the same line.
///
/// # Examples
/// ```
/// use assembly_endgame::registry::farewell_text;
///
/// assert_eq!(farewell_text("HTML", 0), "Farewell, HTML");
/// ```
#[must_use]
pub fn farewell_text(language: &str, variant: usize) -> String {
    let template = FAREWELLS[variant % FAREWELLS.len()];
    template.replace("{language}", language)
}
