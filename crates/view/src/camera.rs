use geom::{Aabb2, Vec2};

use crate::style::{FIT_MARGIN, FOCUS_DURATION_MS, FOCUS_FILL_FRACTION};

/// Viewport size in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Uniform-scale map camera. A map point `p` renders at
/// `p * scale + translate`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub scale: f64,
    pub translate: Vec2,
}

impl Camera {
    pub fn apply(&self, p: Vec2) -> Vec2 {
        p.scale(self.scale) + self.translate
    }

    fn centered_on(scale: f64, target: Vec2, viewport: Viewport) -> Self {
        let translate = viewport.center() - target.scale(scale);
        Self { scale, translate }
    }
}

/// A camera change with its animation length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocusTransform {
    pub camera: Camera,
    pub duration_ms: u64,
}

/// Initial whole-dataset view: both axes spread by `FIT_MARGIN`, the
/// smaller resulting scale wins, centered on the union bounds.
pub fn fit_all(bounds: Aabb2, viewport: Viewport) -> Camera {
    let sx = scale_for_span(viewport.width, FIT_MARGIN * bounds.width());
    let sy = scale_for_span(viewport.height, FIT_MARGIN * bounds.height());
    let scale = match (sx, sy) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    };
    Camera::centered_on(scale, bounds.center(), viewport)
}

/// Focus camera for one town: its bbox fills `FOCUS_FILL_FRACTION` of the
/// viewport on the tighter axis, bbox center on the viewport center.
///
/// `scale = FOCUS_FILL_FRACTION / max(dx / w, dy / h)`; a degenerate bbox
/// keeps scale 1.0 but is still centered.
pub fn focus(bounds: Aabb2, viewport: Viewport) -> FocusTransform {
    let ratio = (bounds.width() / viewport.width).max(bounds.height() / viewport.height);
    let scale = if ratio > 0.0 {
        FOCUS_FILL_FRACTION / ratio
    } else {
        1.0
    };

    FocusTransform {
        camera: Camera::centered_on(scale, bounds.center(), viewport),
        duration_ms: FOCUS_DURATION_MS,
    }
}

fn scale_for_span(view_extent: f64, span: f64) -> Option<f64> {
    if span > 0.0 { Some(view_extent / span) } else { None }
}
