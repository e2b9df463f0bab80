use temper::prelude::*;

/// Renders a sheet built by `body`, dropping the filler declaration.
pub fn render_css(body: impl FnOnce(&mut Container)) -> String {
    stylesheet(body).render().replace("  a: b;\n", "")
}

/// Filler declaration so a rule renders a block.
pub fn placeholder(rule: &mut Rule) {
    rule.property("a", "b");
}
