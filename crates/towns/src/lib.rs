pub mod error;
pub mod geojson;
pub mod index;
pub mod town;

pub use error::*;
pub use geojson::*;
pub use index::*;
pub use town::*;
