//! Renderer configuration.
//!
//! Process-wide defaults live in an explicit [`RenderConfig`] value rather
//! than global state. Resolution is layered: call-site [`RenderOptions`]
//! override the renderer's config, which overrides stock defaults. Each
//! layer only needs the keys it wants to change.
//!
//! ## Config File
//!
//! Hosts that want file-driven defaults can load a `crumbline.toml`:
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! format = "inline"         # Output shape: "inline", "list", or "tag"
//! render_links = true       # Render anchors at all
//! link_last_crumb = true    # Link the final crumb too
//! right_to_left = false     # Reverse the trail before rendering
//! skip_if_blank = false     # Return "" for an empty trail
//! escape = true             # HTML-escape crumb labels
//! # truncate = 30           # Shorten labels to N chars (omit to disable)
//!
//! # container_class = "breadcrumbs"   # Class on the list wrapper
//! # default_crumb_class = "crumb"     # Class on every crumb
//! # first_crumb_class = "first"       # Extra class on the first crumb
//! # last_crumb_class = "last"         # Extra class on the last crumb
//!
//! # Default separator per output format and direction.
//! [separators]
//! inline = " » "
//! inline_rtl = " « "
//! list = ""
//! list_rtl = ""
//! tag = ""
//! tag_rtl = ""
//!
//! # Attributes on the list wrapper element.
//! [container_attributes]
//! # id = "breadcrumbs"
//!
//! # Attributes applied to every crumb element.
//! [crumb_attributes]
//! # data-nav = "crumb"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::types::AttrMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("unsupported output format: {0:?}")]
    UnsupportedFormat(String),
}

/// Output shape selector.
///
/// The set is closed: an unrecognized format name fails at parse time
/// ([`Format::from_str`] or serde), so a renderer can never be asked for
/// a format it does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Anchors and spans joined with a separator.
    #[default]
    Inline,
    /// List items wrapped in a `<ul>` container.
    List,
    /// One `<crumb>` element per step, no wrapper.
    Tag,
}

impl Format {
    /// Canonical config-file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Inline => "inline",
            Format::List => "list",
            Format::Tag => "tag",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(Format::Inline),
            "list" => Ok(Format::List),
            "tag" => Ok(Format::Tag),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Default separator per output format and direction.
///
/// The resolved separator depends jointly on the format and the trail
/// direction, so each (format, direction) pair gets its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Separators {
    /// Inline format, left-to-right.
    pub inline: String,
    /// Inline format, right-to-left.
    pub inline_rtl: String,
    /// List format, left-to-right.
    pub list: String,
    /// List format, right-to-left.
    pub list_rtl: String,
    /// Tag format, left-to-right.
    pub tag: String,
    /// Tag format, right-to-left.
    pub tag_rtl: String,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            inline: " » ".to_string(),
            inline_rtl: " « ".to_string(),
            list: String::new(),
            list_rtl: String::new(),
            tag: String::new(),
            tag_rtl: String::new(),
        }
    }
}

impl Separators {
    /// The default separator for a (format, direction) pair.
    pub fn for_format(&self, format: Format, right_to_left: bool) -> &str {
        match (format, right_to_left) {
            (Format::Inline, false) => &self.inline,
            (Format::Inline, true) => &self.inline_rtl,
            (Format::List, false) => &self.list,
            (Format::List, true) => &self.list_rtl,
            (Format::Tag, false) => &self.tag,
            (Format::Tag, true) => &self.tag_rtl,
        }
    }
}

/// Process-wide rendering defaults.
///
/// Every [`RenderOptions`] field that a call site leaves unset resolves
/// to the value here. All fields have stock defaults, so user config
/// files need only specify overrides. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output shape.
    pub format: Format,
    /// Separator table, consulted when a call site sets no separator.
    pub separators: Separators,
    /// Render anchors at all. `false` turns every crumb into plain text.
    pub render_links: bool,
    /// Link the final crumb too. `false` renders it as plain text even
    /// when it has an href.
    pub link_last_crumb: bool,
    /// Reverse the trail before rendering.
    pub right_to_left: bool,
    /// Return the empty string for an empty trail instead of empty
    /// container markup.
    pub skip_if_blank: bool,
    /// Class on the list wrapper element. Empty or absent means no class.
    pub container_class: Option<String>,
    /// Attributes on the list wrapper element.
    pub container_attributes: AttrMap,
    /// Class on every crumb.
    pub default_crumb_class: Option<String>,
    /// Extra class on the first crumb.
    pub first_crumb_class: Option<String>,
    /// Extra class on the last crumb.
    pub last_crumb_class: Option<String>,
    /// Shorten labels to this many chars. `None` disables truncation.
    pub truncate: Option<usize>,
    /// HTML-escape crumb labels.
    pub escape: bool,
    /// Attributes applied to every crumb element. Per-crumb attributes
    /// merge over these, key by key.
    pub crumb_attributes: AttrMap,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: Format::Inline,
            separators: Separators::default(),
            render_links: true,
            link_last_crumb: true,
            right_to_left: false,
            skip_if_blank: false,
            container_class: None,
            container_attributes: AttrMap::new(),
            default_crumb_class: None,
            first_crumb_class: None,
            last_crumb_class: None,
            truncate: None,
            escape: true,
            crumb_attributes: AttrMap::new(),
        }
    }
}

impl RenderConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.truncate == Some(0) {
            return Err(ConfigError::Validation(
                "truncate must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Per-call rendering options.
///
/// Every field is optional; unset fields resolve against the renderer's
/// [`RenderConfig`]. A call-site value always wins, including `false`
/// over a config `true`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Output shape.
    pub format: Option<Format>,
    /// Separator between rendered crumbs, inserted as-is (not escaped).
    pub separator: Option<String>,
    /// Render anchors at all.
    pub render_links: Option<bool>,
    /// Link the final crumb too.
    pub link_last_crumb: Option<bool>,
    /// Reverse the trail before rendering.
    pub right_to_left: Option<bool>,
    /// Return the empty string for an empty trail.
    pub skip_if_blank: Option<bool>,
    /// Class on the list wrapper element.
    pub container_class: Option<String>,
    /// Attributes on the list wrapper element.
    pub container_attributes: Option<AttrMap>,
    /// Class on every crumb.
    pub default_crumb_class: Option<String>,
    /// Extra class on the first crumb.
    pub first_crumb_class: Option<String>,
    /// Extra class on the last crumb.
    pub last_crumb_class: Option<String>,
    /// Shorten labels to this many chars.
    pub truncate: Option<usize>,
    /// HTML-escape crumb labels.
    pub escape: Option<bool>,
    /// Attributes applied to every crumb element.
    pub crumb_attributes: Option<AttrMap>,
}

impl RenderOptions {
    /// Layer these options over `config`, producing a fully concrete set.
    pub fn resolve(&self, config: &RenderConfig) -> ResolvedOptions {
        let format = self.format.unwrap_or(config.format);
        let right_to_left = self.right_to_left.unwrap_or(config.right_to_left);
        let separator = self
            .separator
            .clone()
            .unwrap_or_else(|| config.separators.for_format(format, right_to_left).to_string());
        ResolvedOptions {
            format,
            separator,
            render_links: self.render_links.unwrap_or(config.render_links),
            link_last_crumb: self.link_last_crumb.unwrap_or(config.link_last_crumb),
            right_to_left,
            skip_if_blank: self.skip_if_blank.unwrap_or(config.skip_if_blank),
            container_class: self
                .container_class
                .clone()
                .or_else(|| config.container_class.clone()),
            container_attributes: self
                .container_attributes
                .clone()
                .unwrap_or_else(|| config.container_attributes.clone()),
            default_crumb_class: self
                .default_crumb_class
                .clone()
                .or_else(|| config.default_crumb_class.clone()),
            first_crumb_class: self
                .first_crumb_class
                .clone()
                .or_else(|| config.first_crumb_class.clone()),
            last_crumb_class: self
                .last_crumb_class
                .clone()
                .or_else(|| config.last_crumb_class.clone()),
            truncate: self.truncate.or(config.truncate),
            escape: self.escape.unwrap_or(config.escape),
            crumb_attributes: self
                .crumb_attributes
                .clone()
                .unwrap_or_else(|| config.crumb_attributes.clone()),
        }
    }
}

/// A fully concrete option set, produced by [`RenderOptions::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub format: Format,
    pub separator: String,
    pub render_links: bool,
    pub link_last_crumb: bool,
    pub right_to_left: bool,
    pub skip_if_blank: bool,
    pub container_class: Option<String>,
    pub container_attributes: AttrMap,
    pub default_crumb_class: Option<String>,
    pub first_crumb_class: Option<String>,
    pub last_crumb_class: Option<String>,
    pub truncate: Option<usize>,
    pub escape: bool,
    pub crumb_attributes: AttrMap,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(RenderConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `crumbline.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `crumbline.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("crumbline.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
///
/// Used to resolve a fully-merged config from any layering of default
/// tables and user overrides.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<RenderConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: RenderConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `crumbline.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<RenderConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}
