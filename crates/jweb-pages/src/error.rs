//! Error types for jweb-pages

use jweb_core::VdomError;
use thiserror::Error;

/// Error type for hydration bundling and page rendering
#[derive(Debug, Error)]
pub enum HydrationError {
	/// A state value could not be serialized to JSON
	#[error("Failed to serialize state value: {0}")]
	StateSerialization(#[from] serde_json::Error),

	/// A pre-serialized state value is not valid JSON
	#[error("Invalid state JSON: {0}")]
	InvalidStateJson(String),

	/// A pre-serialized tree is not valid JSON
	#[error("Invalid vnode JSON: {0}")]
	InvalidVnodeJson(String),

	/// Node construction failed
	#[error(transparent)]
	Vdom(#[from] VdomError),
}

/// Result type for hydration operations
pub type Result<T> = std::result::Result<T, HydrationError>;
