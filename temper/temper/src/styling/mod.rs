pub mod attribute;
pub mod combinator;
pub mod container;
pub mod declaration;
pub mod error;
mod render;
pub mod rule;

pub use attribute::AttributeOperation;
pub use combinator::Combinator;
pub use container::{Container, stylesheet};
pub use declaration::Declaration;
pub use error::StyleError;
pub use rule::Rule;
