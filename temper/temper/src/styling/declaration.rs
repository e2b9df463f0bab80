use std::fmt::{Display, Formatter};

/// One `name: value` pair. Duplicates are kept; the browser decides which one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    value: String,
}

impl Declaration {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Declaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  {}: {};", self.name, self.value)
    }
}
