use crate::styling::{Container, Rule};

macro_rules! tags {
    ($($tag:ident),* $(,)?) => {
        impl Container {
            $(
                pub fn $tag(&mut self) -> &mut Rule {
                    self.tag(stringify!($tag))
                }
            )*
        }
    };
}

// `select` and `style` are left out: the names are taken by builder methods.
tags! {
    a, abbr, article, aside, audio, b, blockquote, body, button, canvas, caption, code, dd, details,
    dialog, div, dl, dt, em, fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6,
    header, hr, html, i, iframe, img, input, label, legend, li, main, mark, nav, ol, option, p,
    pre, section, small, span, strong, sub, summary, sup, table, tbody, td, textarea, tfoot, th,
    thead, tr, u, ul, video,
}
