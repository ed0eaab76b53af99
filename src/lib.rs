//! # JWeb
//!
//! Server-side rendering with client hydration.
//!
//! A page is built as a tree of [`Node`]s, serialized to HTML for the
//! browser and to hydration JSON for the client runtime. The hydration
//! payload travels in a `<script type="application/json">` tag appended to
//! the rendered document.
//!
//! ## Feature Flags
//!
//! - `core` - Virtual DOM, HTML and hydration JSON serialization
//! - `pages` (default, implies `core`) - Hydration bundles and the SSR renderer
//!
//! ## Quick Example
//!
//! ```
//! use jweb::{Element, HydrationBundle, Node, SsrRenderer};
//!
//! let body = Node::from(
//!     Element::new("button")?
//!         .with_attribute("data-handler", "h-0")?
//!         .with_child("Count: 0")?,
//! );
//!
//! let html = SsrRenderer::new().render_page(
//!     &body,
//!     HydrationBundle::builder().state(&0).handler("h-0"),
//! )?;
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"<button data-handler="h-0">Count: 0</button>"#));
//! assert!(html.contains(r#""state":[0]"#));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "core")]
pub use jweb_core::{
	AttributeValue, Element, Fragment, HydrationFormat, IntoNode, Node, RenderSettings, VdomError,
};

#[cfg(feature = "pages")]
pub use jweb_pages::{
	HydrationBundle, HydrationBundleBuilder, HydrationError, SsrRenderer, StateList,
	inject_hydration_script,
};
