//! # Crumbline
//!
//! A minimal breadcrumb trail renderer for HTML navigation. The caller
//! supplies an ordered trail of crumbs (label, optional link target,
//! optional per-crumb attributes); crumbline turns it into a markup
//! string in one of three shapes:
//!
//! ```text
//! inline   <a href="/">Home</a> » <a href="/shop">Shop</a>
//! list     <ul class="x"><li><a href="/">Home</a></li></ul>
//! tag      <crumb href="/">Home</crumb><crumb href="/shop">Shop</crumb>
//! ```
//!
//! Crumbline formats a trail the caller already has. It does not fetch,
//! compute, or validate navigational data, and it has no opinion on how
//! the host wires it up.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The trail data model: `Crumb`, `CrumbOptions`, `AttrMap` |
//! | [`config`] | `RenderConfig` defaults, `RenderOptions` overrides, separator table, TOML loading |
//! | [`markup`] | Maud-based element construction: escape, truncate, anchor, generic element |
//! | [`render`] | `CrumbRenderer`: normalization, class assignment, linkability, format dispatch |
//!
//! # Example
//!
//! ```rust
//! use crumbline::{Crumb, CrumbRenderer, RenderOptions};
//!
//! let renderer = CrumbRenderer::default();
//! let trail = vec![Crumb::new("Home", "/"), Crumb::new("Shop", "/shop")];
//! let html = renderer.render(&trail, &RenderOptions::default());
//! assert_eq!(html, r#"<a href="/">Home</a> » <a href="/shop">Shop</a>"#);
//! ```
//!
//! # Design Decisions
//!
//! ## Maud For Markup
//!
//! Output fragments are built on [Maud](https://maud.lambda.xyz/) rather
//! than string templates:
//!
//! - **XSS-safe by default**: labels and attribute values go through
//!   maud's escaper; opting out is explicit (`escape = false`).
//! - **No double escaping**: pre-rendered fragments travel as
//!   `maud::Markup`, so a nested anchor inside a list item is inserted
//!   as-is.
//! - **Zero runtime files**: no template directory to ship or get out of
//!   sync.
//!
//! ## Explicit Configuration Over Global State
//!
//! Process-wide defaults are an explicit [`RenderConfig`] value injected
//! at renderer construction, not a global registry. Resolution is layered:
//! call-site [`RenderOptions`] override the renderer's config, which
//! overrides stock defaults. Each layer only specifies the keys it wants
//! to change, and a call-site `false` beats a config `true`. Hosts that
//! want file-driven defaults can load a sparse `crumbline.toml`; unknown
//! keys are rejected to catch typos early.
//!
//! ## Pure Rendering
//!
//! `render` borrows the trail and never mutates it; merged option values
//! are built fresh per call. A renderer is immutable after construction
//! and can serve concurrent requests without coordination.

pub mod config;
pub mod markup;
pub mod render;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-exports for convenience
pub use config::{ConfigError, Format, RenderConfig, RenderOptions, Separators, load_config};
pub use render::CrumbRenderer;
pub use types::{AttrMap, Crumb, CrumbOptions};
