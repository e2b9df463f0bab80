use crate::styling::render::{render_rule, validate_rule};
use crate::styling::{AttributeOperation, Combinator, Container, Declaration, StyleError};
use std::fmt::{Display, Formatter};

/// A compound selector with its declarations and nested containers.
///
/// Builder methods mutate the rule in place and hand back a reference into
/// the tree, either to this rule or to the node they created, so calls chain:
/// `sheet.a().id("top").select("hover")` refines one logical element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    selector: String,
    declarations: Vec<Declaration>,
    children: Vec<Container>,
}

impl Default for Rule {
    fn default() -> Self {
        Self::new("*")
    }
}

impl Rule {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn children(&self) -> &[Container] {
        &self.children
    }

    pub fn property(&mut self, name: &str, value: &str) -> &mut Rule {
        self.declarations.push(Declaration::new(name, value));
        self
    }

    /// Runs `body` on this rule once, right away.
    pub fn apply(&mut self, body: impl FnOnce(&mut Rule)) -> &mut Rule {
        body(self);
        self
    }

    /// Appends `container` to the children and returns it.
    pub fn attach(&mut self, container: Container) -> &mut Container {
        let index = self.children.len();
        self.children.push(container);
        &mut self.children[index]
    }

    /// Appends `#name` to the selector, replacing a bare `*`.
    pub fn id(&mut self, name: &str) -> &mut Rule {
        if self.selector == "*" {
            self.selector = format!("#{name}");
        } else {
            self.selector.push_str(&format!("#{name}"));
        }
        self
    }

    /// Refines this element with `.name`. Repeated calls chain as `.a.b`.
    pub fn class(&mut self, name: &str) -> &mut Rule {
        self.refine(&format!(".{name}"))
    }

    /// Pseudo-class on this element, e.g. `a:hover:focus`.
    pub fn select(&mut self, state: &str) -> &mut Rule {
        self.refine(&format!(":{state}"))
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
        self.refine(&operation.selector(name, value))
    }

    /// Rule rendered inside `@media (<query>)` with this rule's selector.
    pub fn media(&mut self, query: &str) -> &mut Rule {
        self.attach(Container::new(Combinator::media(query)))
            .push(Rule::new(""))
    }

    pub fn nested(&mut self) -> &mut Container {
        self.attach(Container::new(Combinator::Descendant))
    }

    pub fn immediate(&mut self) -> &mut Container {
        self.attach(Container::new(Combinator::Child))
    }

    pub fn next(&mut self) -> &mut Container {
        self.attach(Container::new(Combinator::Adjacent))
    }

    pub fn after(&mut self) -> &mut Container {
        self.attach(Container::new(Combinator::General))
    }

    pub fn or(&mut self) -> &mut Container {
        self.attach(Container::new(Combinator::Group))
    }

    pub fn not(&mut self) -> &mut Container {
        self.attach(Container::new(Combinator::Not))
    }

    /// Declaration lines of this rule, without selector or braces.
    pub fn declarations_text(&self) -> String {
        self.declarations
            .iter()
            .map(Declaration::to_string)
            .collect()
    }

    pub fn try_render(&self) -> Result<String, StyleError> {
        validate_rule(self, &self.selector)?;
        let mut css = String::new();
        render_rule(self, &self.selector, &mut css);
        Ok(css)
    }

    /// Renders this rule on its own, with no outer selector.
    ///
    /// # Panics
    ///
    /// Panics when a nested container is malformed, like [`Container::render`].
    pub fn render(&self) -> String {
        match self.try_render() {
            Ok(css) => css,
            Err(err) => panic!("cannot render rule `{}`: {err}", self.selector),
        }
    }

    fn refine(&mut self, selector: &str) -> &mut Rule {
        self.attach(Container::new(Combinator::Compound))
            .push(Rule::new(selector))
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
