use geom::{Aabb2, MultiPolygon, Vec2};

/// Stable numeric town identifier from the boundary dataset.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TownId(pub u64);

/// One town boundary. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Town {
    pub id: TownId,
    pub name: String,
    pub geometry: MultiPolygon,
    /// Cached union of the geometry parts' bounds.
    pub bounds: Aabb2,
}

impl Town {
    pub fn contains(&self, p: Vec2) -> bool {
        // Bounds prefilter keeps the per-town cost low during locate().
        self.bounds.contains(p) && self.geometry.contains(p)
    }
}
