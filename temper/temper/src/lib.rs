pub mod output;
pub mod prelude;
pub mod properties;
pub mod styling;
mod tags;

pub use output::*;
pub use styling::*;
