//! Breadcrumb trail rendering.
//!
//! The single rendering routine of the crate. A [`CrumbRenderer`] holds a
//! fixed [`RenderConfig`] snapshot; each `render` call layers the caller's
//! [`RenderOptions`] over it, then walks the trail once:
//!
//! 1. Resolve options (separator defaults depend on format and direction).
//! 2. Return `""` early for an empty trail when `skip_if_blank` is set.
//! 3. Reverse the trail when rendering right-to-left. Positions (first,
//!    last) are computed on the sequence actually iterated.
//! 4. Normalize each crumb: merge per-crumb overrides, truncate, escape,
//!    assign positional classes, decide linkability.
//! 5. Dispatch on the output format and join with the separator.
//!
//! Rendering is pure: it borrows the crumbs, builds new merged values,
//! and never mutates caller data.

use crate::config::{Format, RenderConfig, RenderOptions, ResolvedOptions};
use crate::markup;
use crate::types::{AttrMap, Crumb};
use maud::{Markup, PreEscaped};

/// Renders breadcrumb trails against a fixed configuration snapshot.
///
/// Construction is cheap and the renderer is immutable, so one instance
/// can serve concurrent requests without coordination. To reconfigure,
/// build a new renderer.
#[derive(Debug, Clone, Default)]
pub struct CrumbRenderer {
    config: RenderConfig,
}

impl CrumbRenderer {
    /// Create a renderer with explicit process-wide defaults.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration snapshot this renderer resolves against.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render a trail to a markup string.
    ///
    /// The result is safe to insert into a document verbatim: labels are
    /// escaped according to the resolved `escape` option and attribute
    /// values are always escaped. The separator is trusted markup and is
    /// inserted as-is.
    pub fn render(&self, crumbs: &[Crumb], options: &RenderOptions) -> String {
        let opts = options.resolve(&self.config);
        if opts.skip_if_blank && crumbs.is_empty() {
            return String::new();
        }

        let trail: Vec<&Crumb> = if opts.right_to_left {
            crumbs.iter().rev().collect()
        } else {
            crumbs.iter().collect()
        };

        let total = trail.len();
        let rendered = trail
            .iter()
            .enumerate()
            .map(|(index, crumb)| render_crumb(crumb, index, total, &opts).into_string())
            .collect::<Vec<_>>()
            .join(&opts.separator);

        match opts.format {
            Format::List => {
                markup::element("ul", PreEscaped(rendered), &container_attrs(&opts)).into_string()
            }
            Format::Inline | Format::Tag => rendered,
        }
    }
}

/// A crumb after normalization: final label markup, effective link
/// target, and the merged attribute set for its element.
struct Prepared<'a> {
    label: Markup,
    href: Option<&'a str>,
    attrs: AttrMap,
}

fn render_crumb(crumb: &Crumb, index: usize, total: usize, opts: &ResolvedOptions) -> Markup {
    let prepared = prepare(crumb, index, total, opts);
    match opts.format {
        Format::Inline => match prepared.href {
            Some(href) => markup::anchor(prepared.label, href, &prepared.attrs),
            None => markup::element("span", prepared.label, &prepared.attrs),
        },
        Format::List => {
            // The merged attributes go on the item; the nested anchor or
            // span stays bare.
            let inner = match prepared.href {
                Some(href) => markup::anchor(prepared.label, href, &AttrMap::new()),
                None => markup::element("span", prepared.label, &AttrMap::new()),
            };
            markup::element("li", inner, &prepared.attrs)
        }
        Format::Tag => {
            let mut attrs = prepared.attrs;
            if let Some(href) = prepared.href {
                attrs.insert("href".to_string(), href.to_string());
            }
            markup::element("crumb", prepared.label, &attrs)
        }
    }
}

fn prepare<'a>(
    crumb: &'a Crumb,
    index: usize,
    total: usize,
    opts: &ResolvedOptions,
) -> Prepared<'a> {
    let overrides = crumb.options.as_ref();
    let truncate = overrides.and_then(|o| o.truncate).or(opts.truncate);
    let escape = overrides.and_then(|o| o.escape).unwrap_or(opts.escape);

    // Truncate before escaping so the limit applies to what the reader
    // sees, not to entity-expanded text.
    let label = match truncate {
        Some(max) => markup::truncate(&crumb.label, max),
        None => crumb.label.clone(),
    };
    let label = markup::text(&label, escape);

    // Renderer-level defaults first; crumb-level attributes win per key.
    let mut attrs = opts.crumb_attributes.clone();
    if let Some(overrides) = overrides {
        for (name, value) in &overrides.html {
            attrs.insert(name.clone(), value.clone());
        }
    }

    let mut classes: Vec<&str> = Vec::new();
    if let Some(class) = class_if_present(&opts.default_crumb_class) {
        classes.push(class);
    }
    if index == 0 {
        if let Some(class) = class_if_present(&opts.first_crumb_class) {
            classes.push(class);
        }
    }
    if index + 1 == total {
        if let Some(class) = class_if_present(&opts.last_crumb_class) {
            classes.push(class);
        }
    }
    if !classes.is_empty() {
        append_class(&mut attrs, &classes.join(" "));
    }

    let linkable = crumb.href.is_some()
        && opts.render_links
        && (index + 1 != total || opts.link_last_crumb);

    Prepared {
        label,
        href: if linkable { crumb.href.as_deref() } else { None },
        attrs,
    }
}

fn container_attrs(opts: &ResolvedOptions) -> AttrMap {
    let mut attrs = opts.container_attributes.clone();
    if let Some(class) = class_if_present(&opts.container_class) {
        append_class(&mut attrs, class);
    }
    attrs
}

/// Computed classes append after a caller-supplied `class`, never
/// replace it.
fn append_class(attrs: &mut AttrMap, class: &str) {
    match attrs.get_mut("class") {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(class);
        }
        None => {
            attrs.insert("class".to_string(), class.to_string());
        }
    }
}

fn class_if_present(class: &Option<String>) -> Option<&str> {
    class.as_deref().filter(|c| !c.is_empty())
}
