//! Shared types for breadcrumb trails.
//!
//! A trail is an ordered sequence of [`Crumb`]s supplied by the caller,
//! already in display order. Crumbs are plain data: the renderer borrows
//! them and never mutates them. Everything round-trips through serde so
//! hosts can carry trails between layers as JSON or TOML.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute name to value pairs applied to a rendered element.
///
/// `BTreeMap` keeps attribute output deterministic regardless of
/// insertion order.
pub type AttrMap = BTreeMap<String, String>;

/// One navigational step: a label, an optional link target, and optional
/// per-crumb rendering overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Display text. A missing label in serialized input deserializes as
    /// the empty string.
    #[serde(default)]
    pub label: String,
    /// Link target. Crumbs without an href always render as plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Per-crumb rendering overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<CrumbOptions>,
}

impl Crumb {
    /// Create a linked crumb.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            options: None,
        }
    }

    /// Create a crumb with no link target.
    pub fn unlinked(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            options: None,
        }
    }

    /// Attach per-crumb options.
    pub fn with_options(mut self, options: CrumbOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Per-crumb rendering overrides.
///
/// Unset fields fall back to the renderer-level crumb defaults. The
/// attribute map merges key-by-key with crumb-level values winning, so a
/// crumb can add a `title` without clobbering configured attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrumbOptions {
    /// Maximum label length in chars, including the `...` marker.
    pub truncate: Option<usize>,
    /// Whether to HTML-escape the label.
    pub escape: Option<bool>,
    /// Extra attributes for the rendered element (`title`, `class`, ...).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub html: AttrMap,
}

impl CrumbOptions {
    /// Add a single attribute, builder style.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.html.insert(name.into(), value.into());
        self
    }
}
