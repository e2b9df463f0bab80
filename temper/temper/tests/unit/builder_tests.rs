use crate::support::{placeholder, render_css};

#[test]
fn test_using_tag() {
    let css = render_css(|sheet| {
        sheet.a().apply(placeholder);
    });
    assert_eq!(css, "a {\n}\n\n");
}

#[test]
fn test_using_tag_and_id() {
    let css = render_css(|sheet| {
        sheet.a().id("top").apply(placeholder);
    });
    assert_eq!(css, "a#top {\n}\n\n");
}

#[test]
fn test_using_id() {
    let css = render_css(|sheet| {
        sheet.id("top").apply(placeholder);
    });
    assert_eq!(css, "#top {\n}\n\n");
}

#[test]
fn test_using_class() {
    let css = render_css(|sheet| {
        sheet.class("top").apply(placeholder);
    });
    assert_eq!(css, ".top {\n}\n\n");
}

#[test]
fn test_using_class_and_id() {
    let css = render_css(|sheet| {
        sheet.class("top").id("main").apply(placeholder);
    });
    assert_eq!(css, ".top#main {\n}\n\n");
}

#[test]
fn test_using_tag_class_and_id() {
    let css = render_css(|sheet| {
        sheet.div().class("top").id("main").apply(placeholder);
    });
    assert_eq!(css, "div.top#main {\n}\n\n");
}

#[test]
fn test_using_media() {
    let css = render_css(|sheet| {
        sheet.div().apply(|div| {
            div.media("min-width:1200px").apply(placeholder);
        });
    });
    assert_eq!(css, "@media (min-width:1200px) {\ndiv {\n}\n\n}\n\n");
}

#[test]
fn test_using_pseudo_selector() {
    let css = render_css(|sheet| {
        sheet.a().select("hover").apply(placeholder);
    });
    assert_eq!(css, "a:hover {\n}\n\n");
}

#[test]
fn test_using_not_pseudo_selector() {
    let css = render_css(|sheet| {
        sheet.a().not().attribute("href").apply(placeholder);
    });
    assert_eq!(css, "a:not([href]) {\n}\n\n");
}

#[test]
fn test_container_level_pseudo_selector_and_any() {
    let css = render_css(|sheet| {
        sheet.select("root").apply(placeholder);
        sheet.any().apply(placeholder);
    });
    assert_eq!(css, ":root {\n}\n\n* {\n}\n\n");
}
