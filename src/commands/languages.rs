//! Registry listing command

use crate::registry::{Language, Registry};

/// One row of the registry listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRow {
    pub index: usize,
    pub language: &'static Language,
    /// Wrong guess that eliminates this language, `None` for the survivor
    pub eliminated_by: Option<usize>,
}

/// Describe the registry in elimination order
#[must_use]
pub fn describe(registry: &Registry) -> Vec<LanguageRow> {
    let threshold = registry.loss_threshold();
    registry
        .languages()
        .iter()
        .enumerate()
        .map(|(index, language)| LanguageRow {
            index,
            language,
            eliminated_by: (index < threshold).then_some(index + 1),
        })
        .collect()
}
