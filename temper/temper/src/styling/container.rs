use crate::styling::render::{render_container, validate_container};
use crate::styling::{AttributeOperation, Combinator, Rule, StyleError};
use std::fmt::{Display, Formatter};

/// Rules sharing one way of attaching to the enclosing selector.
///
/// The stylesheet root is a container too: a [`Combinator::Compound`]
/// container rendered with an empty outer selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    combinator: Combinator,
    rules: Vec<Rule>,
}

/// Builds a stylesheet root and runs `body` on it.
pub fn stylesheet(body: impl FnOnce(&mut Container)) -> Container {
    let mut root = Container::root();
    body(&mut root);
    root
}

impl Container {
    pub fn new(combinator: Combinator) -> Self {
        Self {
            combinator,
            rules: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(Combinator::Compound)
    }

    pub fn combinator(&self) -> &Combinator {
        &self.combinator
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Appends `rule` and returns it.
    pub fn push(&mut self, rule: Rule) -> &mut Rule {
        let index = self.rules.len();
        self.rules.push(rule);
        &mut self.rules[index]
    }

    /// Runs `body` on this container once, right away.
    pub fn apply(&mut self, body: impl FnOnce(&mut Container)) -> &mut Container {
        body(self);
        self
    }

    pub fn tag(&mut self, name: &str) -> &mut Rule {
        self.push(Rule::new(name))
    }

    pub fn any(&mut self) -> &mut Rule {
        self.tag("*")
    }

    pub fn id(&mut self, name: &str) -> &mut Rule {
        self.push(Rule::default()).id(name)
    }

    pub fn class(&mut self, name: &str) -> &mut Rule {
        self.push(Rule::new(&format!(".{name}")))
    }

    pub fn select(&mut self, state: &str) -> &mut Rule {
        self.push(Rule::new(&format!(":{state}")))
    }

    pub fn attribute(&mut self, name: &str) -> &mut Rule {
        self.attribute_value(name, "", AttributeOperation::Equals)
    }

    pub fn attribute_value(
        &mut self,
        name: &str,
        value: &str,
        operation: AttributeOperation,
    ) -> &mut Rule {
        self.push(Rule::new(&operation.selector(name, value)))
    }

    // The accessors below hang the new container off a `*` rule, so
    // `immediate().next().div()` reads as `>*+div`.

    pub fn nested(&mut self) -> &mut Container {
        self.wrap(Combinator::Descendant)
    }

    pub fn immediate(&mut self) -> &mut Container {
        self.wrap(Combinator::Child)
    }

    pub fn next(&mut self) -> &mut Container {
        self.wrap(Combinator::Adjacent)
    }

    pub fn after(&mut self) -> &mut Container {
        self.wrap(Combinator::General)
    }

    pub fn or(&mut self) -> &mut Container {
        self.wrap(Combinator::Group)
    }

    pub fn not(&mut self) -> &mut Container {
        self.wrap(Combinator::Not)
    }

    /// Checks the structural shape the renderer relies on.
    pub fn validate(&self) -> Result<(), StyleError> {
        validate_container(self, "")
    }

    pub fn try_render(&self) -> Result<String, StyleError> {
        self.validate()?;
        let mut css = String::new();
        render_container(self, "", &mut css);
        Ok(css)
    }

    /// Renders the tree as CSS text.
    ///
    /// # Panics
    ///
    /// Panics when the tree is malformed, e.g. a `:not` container with no
    /// rules. Use [`Container::try_render`] to get the error instead.
    pub fn render(&self) -> String {
        match self.try_render() {
            Ok(css) => css,
            Err(err) => panic!("cannot render stylesheet: {err}"),
        }
    }

    fn wrap(&mut self, combinator: Combinator) -> &mut Container {
        self.any().attach(Container::new(combinator))
    }
}

impl Display for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
