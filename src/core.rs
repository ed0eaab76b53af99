//! Virtual DOM and serializers
//!
//! This module provides access to jweb-core: the node model, HTML
//! serialization, tree copying and hydration JSON.

// Re-export all jweb-core functionality
pub use jweb_core::*;
