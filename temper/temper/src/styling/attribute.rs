use strum_macros::{Display, EnumIter};

/// Match operator of an attribute selector such as `[href^=https]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display, EnumIter)]
pub enum AttributeOperation {
    #[default]
    #[strum(to_string = "=")]
    Equals,
    #[strum(to_string = "*=")]
    Contains,
    #[strum(to_string = "^=")]
    StartsWith,
    #[strum(to_string = "$=")]
    EndsWith,
}

impl AttributeOperation {
    /// Selector text for an attribute test. An empty value only tests presence.
    pub fn selector(self, name: &str, value: &str) -> String {
        if value.is_empty() {
            format!("[{name}]")
        } else {
            format!("[{name}{self}{value}]")
        }
    }
}
