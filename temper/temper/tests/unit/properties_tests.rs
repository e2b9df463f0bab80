use temper::prelude::*;

fn declared(rule: &Rule) -> Vec<(String, String)> {
    rule.declarations()
        .iter()
        .map(|declaration| (declaration.name().to_string(), declaration.value().to_string()))
        .collect()
}

#[test]
fn test_nested_accessors_build_dashed_names() {
    let mut rule = Rule::new("div");
    rule.border().bottom().width().set("1px");
    rule.border().radius().top_left().set("4px");
    rule.border().image().slice().set("30%");
    rule.text().decoration().line().set("underline");
    rule.font().feature_settings().set("\"liga\" 1");
    rule.background().blend_mode().set("multiply");
    rule.r#box().decoration_break().set("clone");
    rule.outline().offset().set("2px");
    rule.margin().top().set("0");
    rule.caret().color().set("red");

    let names = declared(&rule)
        .into_iter()
        .map(|(name, _)| name)
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "border-bottom-width",
            "border-radius-top-left",
            "border-image-slice",
            "text-decoration-line",
            "font-feature-settings",
            "background-blend-mode",
            "box-decoration-break",
            "outline-offset",
            "margin-top",
            "caret-color",
        ]
    );
}

#[test]
fn test_flat_accessors() {
    let mut rule = Rule::new("p");
    rule.min_width()
        .set("10rem")
        .z_index()
        .set("3")
        .line_height()
        .set("1.5");

    assert_eq!(
        declared(&rule),
        vec![
            ("min-width".to_string(), "10rem".to_string()),
            ("z-index".to_string(), "3".to_string()),
            ("line-height".to_string(), "1.5".to_string()),
        ]
    );
}

#[test]
fn test_group_name_and_value() {
    let mut rule = Rule::new("p");
    assert_eq!(rule.padding().name(), "padding");
    assert_eq!(rule.padding().left().name(), "padding-left");

    rule.padding().set("1rem 2rem");
    assert_eq!(rule.render(), "p {\n  padding: 1rem 2rem;\n}\n\n");
}

#[test]
fn test_shadow_helper_emits_vendor_variants() {
    let mut rule = Rule::new(".card");
    let drop_shadow = outset("#000", ShadowOffset::default());
    rule.shadow(&[drop_shadow.as_str(), "0 0 2px red"]);

    let value = "0px 1px 0px 0px #000, 0 0 2px red".to_string();
    assert_eq!(
        declared(&rule),
        vec![
            ("box-shadow".to_string(), value.clone()),
            ("-moz-box-shadow".to_string(), value.clone()),
            ("-webkit-box-shadow".to_string(), value),
        ]
    );
}

#[test]
fn test_inset_value() {
    let offset = ShadowOffset {
        horizontal: 2,
        vertical: 3,
        blur: 4,
        strength: 5,
    };
    assert_eq!(inset("red", offset), "2px 3px 4px 5px red inset");
}

#[test]
fn test_round_border() {
    let mut rule = Rule::new("button");
    rule.round_border("1px", "#ccc", "4px");
    assert_eq!(
        rule.render(),
        "button {\n  border: 1px solid #ccc;\n  border-radius: 4px;\n}\n\n"
    );
}

#[test]
fn test_gradient_vertical() {
    let mut rule = Rule::new("header");
    rule.gradient_vertical("#fff", "#000");

    let declarations = declared(&rule);
    assert_eq!(declarations.len(), 7);
    assert!(declarations.iter().all(|(name, _)| name == "background"));
    assert_eq!(declarations[0].1, "#fff");
    assert_eq!(
        declarations[6].1,
        "linear-gradient(to bottom, #fff 0%,#000 100%)"
    );
}
