//! # jweb-pages
//!
//! Hydration bundling and server-side rendering for JWeb.
//!
//! ## Architecture
//!
//! - [`hydration`]: the hydration bundle, state list and script injection
//! - [`ssr`]: renderer that produces HTML with the hydration script attached
//!
//! ## Example
//!
//! ```
//! use jweb_core::{Element, Node};
//! use jweb_pages::{HydrationBundle, SsrRenderer};
//!
//! let page = Node::from(
//!     Element::new("body")?.with_child(Element::new("p")?.with_child("Hello")?)?,
//! );
//!
//! let html = SsrRenderer::new().render_hydrated(
//!     &page,
//!     HydrationBundle::builder().context_id("session-1").handler("h-0"),
//! )?;
//!
//! assert!(html.starts_with("<body><p>Hello</p><script id=\"__hydration_data__\""));
//! assert!(html.ends_with("</script></body>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod hydration;
pub mod ssr;

pub use error::{HydrationError, Result};
pub use hydration::{HydrationBundle, HydrationBundleBuilder, StateList, inject_hydration_script};
pub use ssr::SsrRenderer;
