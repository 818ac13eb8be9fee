//! Markup fragment construction on top of maud.
//!
//! The renderer builds its output from three primitives: escaped text,
//! anchors, and generic elements. Attribute values are always escaped;
//! inner content is passed as pre-rendered [`Markup`] and inserted as-is,
//! so nested fragments (an anchor inside a list item) are never escaped
//! twice. Attribute names come from host configuration, not page content,
//! and are written through unescaped.

use crate::types::AttrMap;
use maud::{Escaper, Markup, PreEscaped};
use std::fmt::Write;

/// HTML-escape raw text.
pub fn escape(text: &str) -> String {
    let mut out = String::new();
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = Escaper::new(out).write_str(text);
}

/// Wrap raw text as markup, escaping it when `escape` is set.
pub fn text(label: &str, escape_label: bool) -> Markup {
    if escape_label {
        PreEscaped(escape(label))
    } else {
        PreEscaped(label.to_string())
    }
}

/// Shorten text to at most `max` chars, ending in `...` when cut.
///
/// The limit includes the marker, so `truncate("breadcrumb", 7)` is
/// `"brea..."`. Limits of 3 or less leave room for nothing but dots.
/// Operates on chars, not bytes, so multibyte labels cut cleanly.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return ".".repeat(max);
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

/// Build an anchor element around pre-rendered inner markup.
///
/// `href` renders first; remaining attributes follow in map order.
pub fn anchor(inner: Markup, href: &str, attrs: &AttrMap) -> Markup {
    let mut out = String::from("<a href=\"");
    escape_into(&mut out, href);
    out.push('"');
    push_attrs(&mut out, attrs);
    out.push('>');
    out.push_str(&inner.into_string());
    out.push_str("</a>");
    PreEscaped(out)
}

/// Build a generic element around pre-rendered inner markup.
pub fn element(name: &str, inner: Markup, attrs: &AttrMap) -> Markup {
    let mut out = String::new();
    let _ = write!(out, "<{name}");
    push_attrs(&mut out, attrs);
    out.push('>');
    out.push_str(&inner.into_string());
    let _ = write!(out, "</{name}>");
    PreEscaped(out)
}

fn push_attrs(out: &mut String, attrs: &AttrMap) {
    for (name, value) in attrs {
        let _ = write!(out, " {name}=\"");
        escape_into(out, value);
        out.push('"');
    }
}
