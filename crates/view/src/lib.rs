pub mod camera;
pub mod highlight;
pub mod style;

pub use camera::*;
pub use highlight::*;
pub use style::*;
