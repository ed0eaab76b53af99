//! Error types for jweb-core

use thiserror::Error;

/// Error type for virtual DOM construction and settings loading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VdomError {
	/// A void element was given children.
	///
	/// Void elements (`img`, `br`, ...) have no content model, so this is
	/// always a bug in the page-construction code.
	#[error("Invalid structure: <{tag}> is a void element and cannot have children (got {children})")]
	InvalidStructure {
		/// The void tag name.
		tag: String,
		/// Number of children the caller attempted to attach.
		children: usize,
	},

	/// The tag name is empty or contains characters that cannot appear in markup.
	#[error("Invalid tag name: '{0}'")]
	InvalidTagName(String),

	/// The attribute name is empty or contains characters that cannot appear in markup.
	#[error("Invalid attribute name: '{0}'")]
	InvalidAttributeName(String),

	/// Rendering settings could not be parsed
	#[error("Invalid render settings: {0}")]
	Settings(String),
}

/// Result type for virtual DOM operations
pub type Result<T> = std::result::Result<T, VdomError>;
