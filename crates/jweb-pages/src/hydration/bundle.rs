//! Hydration bundle assembly.

use super::state::{StateList, parse_raw};
use crate::error::{HydrationError, Result};
use jweb_core::{DEFAULT_HYDRATION_SCRIPT_ID, HydrationFormat, Node, escape_html_attribute};
use serde::Serialize;
use serde_json::value::RawValue;

/// Hydration payload for one response.
///
/// Serializes as:
///
/// ```json
/// {"contextId":"s-1","vnode":{"type":"text","content":"hi"},"state":[],"handlers":["h1"]}
/// ```
///
/// `contextId` and `vnode` are `null` when absent, `state` is `[]` when no
/// state was supplied and `handlers` is always an array. The tree and the
/// state values are embedded as already serialized JSON.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HydrationBundle {
	context_id: Option<String>,
	vnode: Option<Box<RawValue>>,
	state: StateList,
	handlers: Vec<String>,
}

impl HydrationBundle {
	/// Starts building a bundle.
	pub fn builder() -> HydrationBundleBuilder {
		HydrationBundleBuilder::default()
	}

	/// Returns the serialized tree, if any.
	pub fn vnode(&self) -> Option<&str> {
		self.vnode.as_deref().map(RawValue::get)
	}

	/// Returns the state values.
	pub fn state(&self) -> &StateList {
		&self.state
	}

	/// Returns the context id, if any.
	pub fn context_id(&self) -> Option<&str> {
		self.context_id.as_deref()
	}

	/// Returns the handler ids.
	pub fn handlers(&self) -> &[String] {
		&self.handlers
	}

	/// Serializes the bundle to a JSON object.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Wraps the bundle in a `<script id="__hydration_data__">` tag.
	pub fn to_script_tag(&self) -> Result<String> {
		self.to_script_tag_with_id(DEFAULT_HYDRATION_SCRIPT_ID)
	}

	/// Wraps the bundle in a `<script type="application/json">` tag with the given id.
	///
	/// Every `<` in the payload is written as `\u003c`, so markup such as
	/// `</script>` or `<!--` inside a string cannot end the tag or change
	/// how the browser tokenizes it. The JSON still decodes to the same value.
	pub fn to_script_tag_with_id(&self, id: &str) -> Result<String> {
		Ok(format!(
			r#"<script id="{}" type="application/json">{}</script>"#,
			escape_html_attribute(id),
			escape_json_for_script(&self.to_json()?)
		))
	}
}

/// Builder for [`HydrationBundle`].
///
/// The tree can be given as a [`Node`], which is serialized here, or as an
/// already serialized JSON string, which is embedded as is after
/// validation. Setting either replaces the other.
#[derive(Debug, Default)]
pub struct HydrationBundleBuilder {
	vnode: Option<String>,
	state: StateList,
	context_id: Option<String>,
	handlers: Vec<String>,
	error: Option<HydrationError>,
}

impl HydrationBundleBuilder {
	/// Serializes `node` as compact hydration JSON and uses it as the tree.
	pub fn vnode(self, node: &Node) -> Self {
		self.vnode_with_format(node, HydrationFormat::Compact)
	}

	/// Serializes `node` in the given format and uses it as the tree.
	pub fn vnode_with_format(mut self, node: &Node, format: HydrationFormat) -> Self {
		self.vnode = Some(node.to_hydration_json_with(format));
		self
	}

	/// Uses an already serialized tree.
	///
	/// The string is embedded without re-serialization; [`build`](Self::build)
	/// fails if it is not valid JSON.
	pub fn vnode_json(mut self, json: impl Into<String>) -> Self {
		self.vnode = Some(json.into());
		self
	}

	/// Returns whether a tree has been set.
	pub fn has_vnode(&self) -> bool {
		self.vnode.is_some()
	}

	/// Sets the context (session) id.
	pub fn context_id(mut self, id: impl Into<String>) -> Self {
		self.context_id = Some(id.into());
		self
	}

	/// Serializes and appends a state value.
	///
	/// A serialization failure is reported by [`build`](Self::build).
	pub fn state<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
		let result = self.state.push(value);
		self.record(result);
		self
	}

	/// Appends an already serialized state value.
	///
	/// Invalid JSON is reported by [`build`](Self::build).
	pub fn state_json(mut self, json: impl Into<String>) -> Self {
		let result = self.state.push_json(json);
		self.record(result);
		self
	}

	/// Appends every value of a state list.
	pub fn states(mut self, states: StateList) -> Self {
		self.state.merge(states);
		self
	}

	/// Adds a handler id.
	pub fn handler(mut self, id: impl Into<String>) -> Self {
		self.handlers.push(id.into());
		self
	}

	/// Adds several handler ids.
	pub fn handlers(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.handlers.extend(ids.into_iter().map(Into::into));
		self
	}

	/// Builds the bundle.
	///
	/// # Errors
	///
	/// Returns the first state serialization error, or
	/// [`HydrationError::InvalidStateJson`] /
	/// [`HydrationError::InvalidVnodeJson`] for malformed pre-serialized input.
	pub fn build(self) -> Result<HydrationBundle> {
		if let Some(e) = self.error {
			return Err(e);
		}

		let vnode = self
			.vnode
			.map(|json| parse_raw(json).map_err(HydrationError::InvalidVnodeJson))
			.transpose()?;

		tracing::debug!(
			has_vnode = vnode.is_some(),
			state_count = self.state.len(),
			handler_count = self.handlers.len(),
			has_context = self.context_id.is_some(),
			"assembled hydration bundle"
		);

		Ok(HydrationBundle {
			context_id: self.context_id,
			vnode,
			state: self.state,
			handlers: self.handlers,
		})
	}

	// Only the first failure is kept.
	fn record(&mut self, result: Result<()>) {
		if let Err(e) = result
			&& self.error.is_none()
		{
			self.error = Some(e);
		}
	}
}

/// Escapes `<` for embedding JSON inside a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same
/// character.
fn escape_json_for_script(json: &str) -> String {
	json.replace('<', "\\u003c")
}
