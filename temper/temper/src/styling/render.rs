use crate::styling::{Combinator, Container, Rule, StyleError};
use tracing::trace;

/// Writes every rule of `container`, in insertion order, under `outer`.
pub(crate) fn render_container(container: &Container, outer: &str, css: &mut String) {
    let combinator = container.combinator();
    for rule in container.rules() {
        let selector = combinator.combine(outer, rule.selector());
        if combinator.is_media() {
            css.push_str(&format!("{combinator} {{\n"));
            render_rule(rule, &selector, css);
            css.push_str("}\n\n");
        } else {
            render_rule(rule, &selector, css);
        }
    }
}

/// Writes the block of `rule` (if it declares anything), then its children.
///
/// `selector` is the rule's full selector and becomes the outer selector of
/// every child container. Under a `:not` container that means children
/// inherit the closed `a:not(x)` selector, not a bare `a:not(x` prefix.
pub(crate) fn render_rule(rule: &Rule, selector: &str, css: &mut String) {
    if !rule.declarations().is_empty() {
        trace!(selector, declarations = rule.declarations().len(), "css block");
        css.push_str(&format!("{selector} {{\n"));
        css.push_str(&rule.declarations_text());
        css.push_str("}\n\n");
    }

    for child in rule.children() {
        render_container(child, selector, css);
    }
}

pub(crate) fn validate_container(container: &Container, outer: &str) -> Result<(), StyleError> {
    let combinator = container.combinator();
    if container.rules().is_empty() {
        match combinator {
            Combinator::Not => {
                return Err(StyleError::EmptyNegation {
                    prefix: outer.to_string(),
                });
            }
            Combinator::Media(query) => {
                return Err(StyleError::EmptyMedia {
                    query: query.clone(),
                });
            }
            _ => {}
        }
    }

    for rule in container.rules() {
        validate_rule(rule, &combinator.combine(outer, rule.selector()))?;
    }
    Ok(())
}

pub(crate) fn validate_rule(rule: &Rule, selector: &str) -> Result<(), StyleError> {
    rule.children()
        .iter()
        .try_for_each(|child| validate_container(child, selector))
}
