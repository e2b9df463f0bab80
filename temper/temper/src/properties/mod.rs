//! Named property accessors, e.g. `rule.border().bottom().width().set("1px")`.
//!
//! Each accessor only builds a dash-cased property name; setting a value goes
//! through [`Rule::property`].

pub mod helpers;

use crate::styling::Rule;

/// A property name bound to the rule it will be declared on.
#[derive(Debug)]
pub struct ElementProperty<'a> {
    name: String,
    rule: &'a mut Rule,
}

impl<'a> ElementProperty<'a> {
    pub fn new(name: &str, rule: &'a mut Rule) -> Self {
        Self {
            name: name.to_string(),
            rule,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(self, value: &str) -> &'a mut Rule {
        let ElementProperty { name, rule } = self;
        rule.property(&name, value)
    }

    /// Sub-property `<name>-<suffix>`, as any accessor type.
    pub fn named<T: From<ElementProperty<'a>>>(self, suffix: &str) -> T {
        ElementProperty {
            name: format!("{}-{suffix}", self.name),
            rule: self.rule,
        }
        .into()
    }
}

macro_rules! property_groups {
    ($(
        $(#[$meta:meta])*
        $group:ident { $($accessor:ident => $suffix:literal: $kind:ident),* $(,)? }
    )*) => {$(
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $group<'a>(ElementProperty<'a>);

        impl<'a> From<ElementProperty<'a>> for $group<'a> {
            fn from(property: ElementProperty<'a>) -> Self {
                Self(property)
            }
        }

        impl<'a> $group<'a> {
            pub fn name(&self) -> &str {
                self.0.name()
            }

            pub fn set(self, value: &str) -> &'a mut Rule {
                self.0.set(value)
            }

            $(
                pub fn $accessor(self) -> $kind<'a> {
                    self.0.named($suffix)
                }
            )*
        }
    )*};
}

property_groups! {
    TextDecorationProperty {
        line => "line": ElementProperty,
        color => "color": ElementProperty,
        style => "style": ElementProperty,
    }

    TextProperty {
        decoration => "decoration": TextDecorationProperty,
        shadow => "shadow": ElementProperty,
        align => "align": ElementProperty,
        overflow => "overflow": ElementProperty,
        orientation => "orientation": ElementProperty,
    }

    /// `width`/`color`/`style` of a border edge.
    BorderElementProperty {
        width => "width": ElementProperty,
        color => "color": ElementProperty,
        style => "style": ElementProperty,
    }

    OutlineProperty {
        width => "width": ElementProperty,
        color => "color": ElementProperty,
        style => "style": ElementProperty,
        offset => "offset": ElementProperty,
    }

    BorderProperty {
        width => "width": ElementProperty,
        color => "color": ElementProperty,
        style => "style": ElementProperty,
        bottom => "bottom": BorderElementProperty,
        left => "left": BorderElementProperty,
        right => "right": BorderElementProperty,
        top => "top": BorderElementProperty,
        collapse => "collapse": ElementProperty,
        spacing => "spacing": ElementProperty,
        image => "image": BorderImageProperty,
        radius => "radius": RadiusProperty,
    }

    BorderImageProperty {
        outset => "outset": ElementProperty,
        slice => "slice": ElementProperty,
        repeat => "repeat": ElementProperty,
        source => "source": ElementProperty,
        width => "width": ElementProperty,
    }

    BoxProperty {
        decoration_break => "decoration-break": ElementProperty,
        shadow => "shadow": ElementProperty,
        sizing => "sizing": ElementProperty,
    }

    RadiusProperty {
        width => "width": ElementProperty,
        color => "color": ElementProperty,
        style => "style": ElementProperty,
        bottom_left => "bottom-left": ElementProperty,
        bottom_right => "bottom-right": ElementProperty,
        top_left => "top-left": ElementProperty,
        top_right => "top-right": ElementProperty,
    }

    /// `top`/`right`/`bottom`/`left` of `margin` and `padding`.
    SidesProperty {
        bottom => "bottom": ElementProperty,
        left => "left": ElementProperty,
        right => "right": ElementProperty,
        top => "top": ElementProperty,
    }

    CaretProperty {
        animation => "animation": ElementProperty,
        color => "color": ElementProperty,
        shape => "shape": ElementProperty,
    }

    BackgroundProperty {
        attachment => "attachment": ElementProperty,
        blend_mode => "blend-mode": ElementProperty,
        clip => "clip": ElementProperty,
        color => "color": ElementProperty,
        image => "image": ElementProperty,
        origin => "origin": ElementProperty,
        position => "position": ElementProperty,
        repeat => "repeat": ElementProperty,
        size => "size": ElementProperty,
    }

    FontProperty {
        family => "family": ElementProperty,
        feature_settings => "feature-settings": ElementProperty,
        kerning => "kerning": ElementProperty,
        language_override => "language-override": ElementProperty,
        size => "size": ElementProperty,
        size_adjust => "size-adjust": ElementProperty,
        stretch => "stretch": ElementProperty,
        style => "style": ElementProperty,
        synthesis => "synthesis": ElementProperty,
        variant => "variant": ElementProperty,
        weight => "weight": ElementProperty,
    }
}

macro_rules! rule_properties {
    ($($accessor:ident => $name:literal: $kind:ident),* $(,)?) => {
        impl Rule {
            $(
                pub fn $accessor(&mut self) -> $kind<'_> {
                    ElementProperty::new($name, self).into()
                }
            )*
        }
    };
}

rule_properties! {
    border => "border": BorderProperty,
    r#box => "box": BoxProperty,
    outline => "outline": OutlineProperty,
    padding => "padding": SidesProperty,
    margin => "margin": SidesProperty,
    background => "background": BackgroundProperty,

    position => "position": ElementProperty,
    top => "top": ElementProperty,
    left => "left": ElementProperty,
    right => "right": ElementProperty,
    bottom => "bottom": ElementProperty,
    clip => "clip": ElementProperty,
    clear => "clear": ElementProperty,
    display => "display": ElementProperty,
    float => "float": ElementProperty,
    width => "width": ElementProperty,
    height => "height": ElementProperty,
    overflow => "overflow": ElementProperty,
    visibility => "visibility": ElementProperty,

    color => "color": ElementProperty,
    opacity => "opacity": ElementProperty,
    text => "text": TextProperty,
    font => "font": FontProperty,
    content => "content": ElementProperty,
    cursor => "cursor": ElementProperty,
    caret => "caret": CaretProperty,

    min_width => "min-width": ElementProperty,
    max_width => "max-width": ElementProperty,
    min_height => "min-height": ElementProperty,
    max_height => "max-height": ElementProperty,
    line_height => "line-height": ElementProperty,
    vertical_align => "vertical-align": ElementProperty,
    white_space => "white-space": ElementProperty,
    list_style => "list-style": ElementProperty,
    z_index => "z-index": ElementProperty,
}
