//! Hydration and server-side rendering
//!
//! This module provides access to jweb-pages, which bundles a rendered
//! tree with its state and handler ids and attaches the result to the
//! HTML response.
//!
//! ## Example
//!
//! ```
//! use jweb::pages::{HydrationBundle, inject_hydration_script};
//!
//! let bundle = HydrationBundle::builder().context_id("s-1").build()?;
//! let html = inject_hydration_script("<html><body></body></html>", &bundle.to_script_tag()?);
//!
//! assert!(html.ends_with("</script></body></html>"));
//! # Ok::<(), jweb::HydrationError>(())
//! ```

// Re-export all jweb-pages functionality
pub use jweb_pages::*;
