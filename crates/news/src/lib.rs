pub mod error;
pub mod parse;
pub mod query;
pub mod render;

pub use error::*;
pub use parse::*;
pub use query::*;
pub use render::*;
