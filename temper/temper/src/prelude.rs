pub use crate::output::{CONFIG_FILE, OutputConfig, TemperConfig, write_stylesheet};
pub use crate::properties::ElementProperty;
pub use crate::properties::helpers::{ShadowOffset, inset, outset};
pub use crate::styling::{
    AttributeOperation, Combinator, Container, Declaration, Rule, StyleError, stylesheet,
};
