use std::fmt::{Display, Formatter};

/// How the rules of a container attach to the selector of the enclosing rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Combinator {
    /// Plain concatenation, used for refinements on the same element (`a.foo`, `a:hover`).
    #[default]
    Compound,
    Descendant,
    Child,
    Adjacent,
    General,
    Group,
    /// Wraps the child selector in `:not(...)`.
    Not,
    /// Wraps the whole rendered block in `@media (<query>) { ... }`.
    Media(String),
}

impl Combinator {
    pub fn media(query: &str) -> Self {
        Self::Media(query.to_string())
    }

    /// Literal combinator text. Only the descendant combinator contains whitespace.
    pub fn as_text(&self) -> String {
        match self {
            Combinator::Compound => String::new(),
            Combinator::Descendant => " ".to_string(),
            Combinator::Child => ">".to_string(),
            Combinator::Adjacent => "+".to_string(),
            Combinator::General => "~".to_string(),
            Combinator::Group => ",".to_string(),
            Combinator::Not => "!".to_string(),
            Combinator::Media(query) => format!("@media ({query})"),
        }
    }

    pub fn is_media(&self) -> bool {
        matches!(self, Combinator::Media(_))
    }

    /// Full selector of a rule with `selector` attached under `outer`.
    ///
    /// The result is used both for the rule's own block and as the prefix
    /// handed to the rule's child containers.
    pub fn combine(&self, outer: &str, selector: &str) -> String {
        match self {
            Combinator::Not => format!("{outer}:not({selector})"),
            Combinator::Media(_) => format!("{outer}{selector}"),
            plain => format!("{outer}{}{selector}", plain.as_text()),
        }
    }
}

impl Display for Combinator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}
