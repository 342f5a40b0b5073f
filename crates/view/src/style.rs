/// Fill alpha for unselected town shapes.
pub const BASE_FILL_ALPHA: f64 = 0.12;
/// Fill alpha for the single selected shape.
pub const SELECTED_FILL_ALPHA: f64 = 0.25;
/// Pan+zoom animation length for a focus transition.
pub const FOCUS_DURATION_MS: u64 = 600;
/// Spread multiplier applied to both axes when fitting the whole state.
pub const FIT_MARGIN: f64 = 1.5;
/// Fraction of the viewport a focused town's bbox should fill.
pub const FOCUS_FILL_FRACTION: f64 = 0.9;
