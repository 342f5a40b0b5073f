use towns::TownId;

use crate::style::{BASE_FILL_ALPHA, SELECTED_FILL_ALPHA};

/// Which shape carries the selected fill.
///
/// Contract: exactly one town is highlighted after `select`, zero before
/// the first selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    selected: Option<TownId>,
}

impl HighlightState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, town: TownId) {
        self.selected = Some(town);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<TownId> {
        self.selected
    }

    pub fn is_selected(&self, town: TownId) -> bool {
        self.selected == Some(town)
    }

    pub fn fill_alpha(&self, town: TownId) -> f64 {
        if self.is_selected(town) {
            SELECTED_FILL_ALPHA
        } else {
            BASE_FILL_ALPHA
        }
    }
}
