//! Rendering settings.
//!
//! Settings are plain data, deserializable from TOML:
//!
//! ```toml
//! extra_void_elements = ["x-spacer"]
//! pretty_hydration = true
//! hydration_script_id = "__hydration_data__"
//! ```

use crate::error::{Result, VdomError};
use crate::vnode::is_void_element;
use serde::{Deserialize, Serialize};

/// Default `id` of the hydration `<script>` tag.
pub const DEFAULT_HYDRATION_SCRIPT_ID: &str = "__hydration_data__";

/// Settings that influence node construction and SSR output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
	/// Tag names treated as void in addition to the HTML void elements.
	///
	/// Useful for custom elements that never carry content.
	pub extra_void_elements: Vec<String>,
	/// Emit indented hydration JSON.
	pub pretty_hydration: bool,
	/// `id` attribute of the hydration `<script>` tag.
	pub hydration_script_id: String,
}

impl Default for RenderSettings {
	fn default() -> Self {
		Self {
			extra_void_elements: Vec::new(),
			pretty_hydration: false,
			hydration_script_id: DEFAULT_HYDRATION_SCRIPT_ID.to_string(),
		}
	}
}

impl RenderSettings {
	/// Creates the default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from a TOML document. Missing keys take their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let mut settings: Self =
			toml::from_str(source).map_err(|e| VdomError::Settings(e.to_string()))?;
		for tag in &mut settings.extra_void_elements {
			*tag = tag.to_ascii_lowercase();
		}
		tracing::debug!(
			extra_void_elements = settings.extra_void_elements.len(),
			pretty_hydration = settings.pretty_hydration,
			"loaded render settings"
		);
		Ok(settings)
	}

	/// Adds a custom void tag.
	pub fn void_element(mut self, tag: impl Into<String>) -> Self {
		self.extra_void_elements
			.push(tag.into().to_ascii_lowercase());
		self
	}

	/// Enables or disables pretty hydration JSON.
	pub fn pretty_hydration(mut self, pretty: bool) -> Self {
		self.pretty_hydration = pretty;
		self
	}

	/// Sets the hydration script id.
	pub fn hydration_script_id(mut self, id: impl Into<String>) -> Self {
		self.hydration_script_id = id.into();
		self
	}

	/// Returns whether `tag` (already lowercase) is void under these settings.
	pub fn is_void(&self, tag: &str) -> bool {
		is_void_element(tag) || self.extra_void_elements.iter().any(|t| t == tag)
	}
}
