//! End-to-end rendering tests over the public API.
//!
//! Exercises the three output formats with class assignment, link
//! policy, per-crumb attributes, and option layering, asserting on
//! exact markup strings.

use crumbline::{Crumb, CrumbOptions, CrumbRenderer, Format, RenderConfig, RenderOptions};

fn render(crumbs: &[Crumb], options: RenderOptions) -> String {
    CrumbRenderer::default().render(crumbs, &options)
}

fn class_options(format: Format) -> RenderOptions {
    RenderOptions {
        format: Some(format),
        default_crumb_class: Some("default".to_string()),
        first_crumb_class: Some("first".to_string()),
        last_crumb_class: Some("last".to_string()),
        ..Default::default()
    }
}

// =============================================================================
// Class assignment
// =============================================================================

#[test]
fn classes_single_crumb_inline() {
    let crumbs = vec![Crumb::new("name", "url")];
    assert_eq!(
        render(&crumbs, class_options(Format::Inline)),
        r#"<a href="url" class="default first last">name</a>"#
    );
}

#[test]
fn classes_single_crumb_list() {
    let crumbs = vec![Crumb::new("name", "url")];
    assert_eq!(
        render(&crumbs, class_options(Format::List)),
        r#"<ul><li class="default first last"><a href="url">name</a></li></ul>"#
    );
}

#[test]
fn classes_single_crumb_tag() {
    let crumbs = vec![Crumb::new("name", "url")];
    assert_eq!(
        render(&crumbs, class_options(Format::Tag)),
        r#"<crumb class="default first last" href="url">name</crumb>"#
    );
}

#[test]
fn classes_three_crumbs_inline() {
    let crumbs = vec![
        Crumb::new("name1", "url1"),
        Crumb::new("name2", "url2"),
        Crumb::new("name3", "url3"),
    ];
    assert_eq!(
        render(&crumbs, class_options(Format::Inline)),
        r#"<a href="url1" class="default first">name1</a> » <a href="url2" class="default">name2</a> » <a href="url3" class="default last">name3</a>"#
    );
}

#[test]
fn classes_three_crumbs_list_with_container() {
    let crumbs = vec![
        Crumb::new("name1", "url1"),
        Crumb::new("name2", "url2"),
        Crumb::new("name3", "url3"),
    ];
    let options = RenderOptions {
        container_class: Some("container".to_string()),
        ..class_options(Format::List)
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<ul class="container"><li class="default first"><a href="url1">name1</a></li><li class="default"><a href="url2">name2</a></li><li class="default last"><a href="url3">name3</a></li></ul>"#
    );
}

#[test]
fn classes_list_with_literal_separator() {
    let crumbs = vec![
        Crumb::new("name1", "url1"),
        Crumb::new("name2", "url2"),
        Crumb::new("name3", "url3"),
    ];
    let options = RenderOptions {
        container_class: Some("container".to_string()),
        separator: Some(" / ".to_string()),
        ..class_options(Format::List)
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<ul class="container"><li class="default first"><a href="url1">name1</a></li> / <li class="default"><a href="url2">name2</a></li> / <li class="default last"><a href="url3">name3</a></li></ul>"#
    );
}

// =============================================================================
// Last-crumb link policy
// =============================================================================

#[test]
fn last_crumb_not_linked_single_crumb() {
    let crumbs = vec![Crumb::new("name", "url")];
    let unlink_last = |format| RenderOptions {
        format: Some(format),
        link_last_crumb: Some(false),
        ..Default::default()
    };

    assert_eq!(
        render(&crumbs, unlink_last(Format::Inline)),
        "<span>name</span>"
    );
    assert_eq!(
        render(&crumbs, unlink_last(Format::List)),
        "<ul><li><span>name</span></li></ul>"
    );
    assert_eq!(
        render(&crumbs, unlink_last(Format::Tag)),
        "<crumb>name</crumb>"
    );
}

#[test]
fn last_crumb_not_linked_longer_trail() {
    let crumbs = vec![Crumb::new("name1", "url1"), Crumb::new("name2", "url2")];
    let options = RenderOptions {
        link_last_crumb: Some(false),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<a href="url1">name1</a> » <span>name2</span>"#
    );

    let options = RenderOptions {
        format: Some(Format::Tag),
        link_last_crumb: Some(false),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<crumb href="url1">name1</crumb><crumb>name2</crumb>"#
    );
}

// =============================================================================
// Per-crumb attributes
// =============================================================================

#[test]
fn html_options_on_linked_crumb() {
    let crumbs =
        vec![Crumb::new("name", "url").with_options(CrumbOptions::default().with_attr("title", "title"))];
    assert_eq!(
        render(&crumbs, RenderOptions::default()),
        r#"<a href="url" title="title">name</a>"#
    );
}

#[test]
fn html_options_on_plain_crumb() {
    let crumbs =
        vec![Crumb::new("name", "url").with_options(CrumbOptions::default().with_attr("title", "title"))];
    let options = RenderOptions {
        link_last_crumb: Some(false),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<span title="title">name</span>"#
    );
}

#[test]
fn html_options_land_on_list_item() {
    let crumbs =
        vec![Crumb::new("name", "url").with_options(CrumbOptions::default().with_attr("title", "title"))];
    let options = RenderOptions {
        format: Some(Format::List),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<ul><li title="title"><a href="url">name</a></li></ul>"#
    );

    let options = RenderOptions {
        format: Some(Format::List),
        link_last_crumb: Some(false),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<ul><li title="title"><span>name</span></li></ul>"#
    );
}

// =============================================================================
// Input immutability
// =============================================================================

#[test]
fn rendering_does_not_alter_input_crumbs() {
    let crumbs = vec![
        Crumb::unlinked("name1")
            .with_options(CrumbOptions::default().with_attr("class", "mine")),
        Crumb::unlinked("name2"),
    ];
    let before = crumbs.clone();

    for format in [Format::Inline, Format::List, Format::Tag] {
        let options = RenderOptions {
            truncate: Some(4),
            ..class_options(format)
        };
        let _ = render(&crumbs, options);
    }

    assert_eq!(crumbs, before);
}

// =============================================================================
// Configuration layering
// =============================================================================

#[test]
fn call_site_overrides_renderer_config() {
    let linking = CrumbRenderer::new(RenderConfig {
        link_last_crumb: true,
        ..Default::default()
    });
    let crumbs = vec![Crumb::new("name", "url")];

    let unlink = RenderOptions {
        link_last_crumb: Some(false),
        ..Default::default()
    };
    let link = RenderOptions {
        link_last_crumb: Some(true),
        ..Default::default()
    };

    // A call-site false beats a config true, and vice versa.
    assert!(!linking.render(&crumbs, &unlink).contains("href"));
    assert!(linking.render(&crumbs, &link).contains("href"));

    let unlinking = CrumbRenderer::new(RenderConfig {
        link_last_crumb: false,
        ..Default::default()
    });
    assert!(!unlinking.render(&crumbs, &unlink).contains("href"));
    assert!(unlinking.render(&crumbs, &link).contains("href"));
}

#[test]
fn renderer_config_separator_applies() {
    let renderer = CrumbRenderer::new(RenderConfig {
        separators: crumbline::Separators {
            inline: " / ".to_string(),
            ..Default::default()
        },
        ..Default::default()
    });
    let crumbs = vec![Crumb::new("a", "u1"), Crumb::new("b", "u2")];
    assert_eq!(
        renderer.render(&crumbs, &RenderOptions::default()),
        r#"<a href="u1">a</a> / <a href="u2">b</a>"#
    );
}

// =============================================================================
// Documented examples
// =============================================================================

#[test]
fn example_inline_defaults() {
    let crumbs = vec![Crumb::new("Home", "/"), Crumb::new("Shop", "/shop")];
    assert_eq!(
        render(&crumbs, RenderOptions::default()),
        r#"<a href="/">Home</a> » <a href="/shop">Shop</a>"#
    );
}

#[test]
fn example_list_with_container_class() {
    let crumbs = vec![Crumb::new("Home", "/")];
    let options = RenderOptions {
        format: Some(Format::List),
        container_class: Some("x".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<ul class="x"><li><a href="/">Home</a></li></ul>"#
    );
}

#[test]
fn example_tag_format() {
    let crumbs = vec![Crumb::new("A", "u1"), Crumb::new("B", "u2")];
    let options = RenderOptions {
        format: Some(Format::Tag),
        ..Default::default()
    };
    assert_eq!(
        render(&crumbs, options),
        r#"<crumb href="u1">A</crumb><crumb href="u2">B</crumb>"#
    );
}

#[test]
fn example_skip_if_blank() {
    let options = RenderOptions {
        skip_if_blank: Some(true),
        ..Default::default()
    };
    assert_eq!(render(&[], options), "");
}

#[test]
fn example_title_merges_with_classes_in_every_format() {
    let crumbs =
        vec![Crumb::new("name", "url").with_options(CrumbOptions::default().with_attr("title", "t"))];

    assert_eq!(
        render(&crumbs, class_options(Format::Inline)),
        r#"<a href="url" class="default first last" title="t">name</a>"#
    );
    assert_eq!(
        render(&crumbs, class_options(Format::List)),
        r#"<ul><li class="default first last" title="t"><a href="url">name</a></li></ul>"#
    );
    assert_eq!(
        render(&crumbs, class_options(Format::Tag)),
        r#"<crumb class="default first last" href="url" title="t">name</crumb>"#
    );
}

// =============================================================================
// Serialized trails
// =============================================================================

#[test]
fn trail_deserialized_from_json_renders() {
    let json = r#"[
        {"label": "Home", "href": "/"},
        {"label": "Shop", "href": "/shop", "options": {"html": {"title": "the shop"}}},
        {"label": "Cart"}
    ]"#;
    let crumbs: Vec<Crumb> = serde_json::from_str(json).unwrap();
    assert_eq!(
        render(&crumbs, RenderOptions::default()),
        r#"<a href="/">Home</a> » <a href="/shop" title="the shop">Shop</a> » <span>Cart</span>"#
    );
}

#[test]
fn trail_with_options_from_json_respects_overrides() {
    let json = r#"[
        {"label": "A <b>long</b> label", "href": "/x", "options": {"escape": false, "truncate": 30}}
    ]"#;
    let crumbs: Vec<Crumb> = serde_json::from_str(json).unwrap();
    assert_eq!(
        render(&crumbs, RenderOptions::default()),
        r#"<a href="/x">A <b>long</b> label</a>"#
    );
}
