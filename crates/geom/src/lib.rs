pub mod bounds;
pub mod polygon;
pub mod vec;

// Geom crate: small, well-tested planar primitives only.
pub use bounds::*;
pub use polygon::*;
pub use vec::*;
