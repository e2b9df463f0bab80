use crate::styling::Rule;
use std::fmt::Display;

/// Offsets of a box shadow, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShadowOffset {
    pub horizontal: i32,
    pub vertical: i32,
    pub blur: i32,
    pub strength: i32,
}

impl Default for ShadowOffset {
    fn default() -> Self {
        Self {
            horizontal: 0,
            vertical: 1,
            blur: 0,
            strength: 0,
        }
    }
}

impl Display for ShadowOffset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.horizontal, self.vertical, self.blur, self.strength
        )
    }
}

pub fn outset(color: impl Display, offset: ShadowOffset) -> String {
    format!("{offset} {color}")
}

pub fn inset(color: impl Display, offset: ShadowOffset) -> String {
    format!("{offset} {color} inset")
}

impl Rule {
    /// Top-to-bottom gradient with the vendor-prefixed fallbacks.
    pub fn gradient_vertical(&mut self, from: impl Display, to: impl Display) -> &mut Rule {
        let values = [
            from.to_string(),
            format!("-moz-linear-gradient(top, {from} 0%, {to} 100%)"),
            format!(
                "-webkit-gradient(linear, left top, left bottom, color-stop(0%,{from}), color-stop(100%,{to}))"
            ),
            format!("-webkit-linear-gradient(top, {from} 0%,{to} 100%)"),
            format!("-o-linear-gradient(top, {from} 0%,{to} 100%)"),
            format!("-ms-linear-gradient(top, {from} 0%,{to} 100%)"),
            format!("linear-gradient(to bottom, {from} 0%,{to} 100%)"),
        ];
        for value in &values {
            self.background().set(value);
        }
        self
    }

    pub fn round_border(&mut self, width: &str, color: impl Display, radius: &str) -> &mut Rule {
        self.border().set(&format!("{width} solid {color}"));
        self.border().radius().set(radius)
    }

    /// `box-shadow` plus the `-moz-` and `-webkit-` variants.
    pub fn shadow(&mut self, shadows: &[&str]) -> &mut Rule {
        let value = shadows.join(", ");
        self.property("box-shadow", &value)
            .property("-moz-box-shadow", &value)
            .property("-webkit-box-shadow", &value)
    }
}
