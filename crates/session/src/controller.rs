use std::sync::Arc;

use geom::Vec2;
use links::TownLinks;
use towns::{Town, TownId, TownIndex};
use view::{FocusTransform, HighlightState, Viewport, focus};

use crate::error::AppError;

/// Monotonic tag for one news refresh request. Results for a superseded
/// generation are discarded, so the latest selection always wins the
/// news region, never the latest response.
pub type NewsGeneration = u64;

/// One side effect of a selection change.
///
/// Ordering contract: `Highlight`, `Focus`, `Links`, `RefreshNews` —
/// visual feedback first, the slow network step last and fire-and-forget.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Highlight { town: TownId },
    Focus(FocusTransform),
    Links(TownLinks),
    RefreshNews { town: TownId, generation: NewsGeneration },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOutcome {
    pub town: TownId,
    pub effects: Vec<Effect>,
}

/// Owns the single current Selection and fans out updates.
///
/// Replaces the source's ambient globals: the town collection, viewport,
/// and selection all live here and mutate only through `select`/`locate`.
#[derive(Debug, Clone)]
pub struct SelectionController {
    index: Arc<TownIndex>,
    viewport: Viewport,
    highlight: HighlightState,
    news_generation: NewsGeneration,
}

impl SelectionController {
    pub fn new(index: Arc<TownIndex>, viewport: Viewport) -> Self {
        Self {
            index,
            viewport,
            highlight: HighlightState::new(),
            news_generation: 0,
        }
    }

    pub fn index(&self) -> &TownIndex {
        &self.index
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selection(&self) -> Option<TownId> {
        self.highlight.selected()
    }

    pub fn selected_town(&self) -> Option<&Town> {
        self.selection().and_then(|id| self.index.get(id))
    }

    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    pub fn current_generation(&self) -> NewsGeneration {
        self.news_generation
    }

    /// Selects a town by exact name and returns the ordered effect list.
    ///
    /// Idempotent on re-select: the Selection is replaced wholesale and
    /// every effect is re-emitted, which is safe to re-run.
    pub fn select(&mut self, name: &str) -> Result<SelectOutcome, AppError> {
        let town = self
            .index
            .by_name(name)
            .ok_or_else(|| AppError::UnknownTown(name.to_string()))?;
        let town_id = town.id;
        let bounds = town.bounds;
        let town_name = town.name.clone();

        self.highlight.select(town_id);
        self.news_generation += 1;

        Ok(SelectOutcome {
            town: town_id,
            effects: vec![
                Effect::Highlight { town: town_id },
                Effect::Focus(focus(bounds, self.viewport)),
                Effect::Links(TownLinks::for_town(&town_name)),
                Effect::RefreshNews {
                    town: town_id,
                    generation: self.news_generation,
                },
            ],
        })
    }

    /// Selects the first town containing `point`. On no match the
    /// Selection is left unchanged and the error is surfaced.
    pub fn locate(&mut self, point: Vec2) -> Result<SelectOutcome, AppError> {
        let name = self
            .index
            .locate(point)
            .map(|t| t.name.clone())
            .ok_or(AppError::NoContainingTown)?;
        self.select(&name)
    }

    /// True only for the most recent `RefreshNews` generation; stale
    /// results must be dropped by the caller.
    pub fn accept_news(&self, generation: NewsGeneration) -> bool {
        generation == self.news_generation
    }
}
