//! Serialized state values for hydration.

use crate::error::{HydrationError, Result};
use serde::Serialize;
use serde_json::value::{RawValue, to_raw_value};

/// An ordered list of serialized state values.
///
/// Each entry is a complete JSON value. The list serializes as a JSON
/// array in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct StateList {
	values: Vec<Box<RawValue>>,
}

impl StateList {
	/// Creates an empty state list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Serializes `value` and appends it.
	pub fn push<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.values.push(to_raw_value(value)?);
		Ok(())
	}

	/// Appends an already serialized JSON value.
	///
	/// The value is embedded as given, minus surrounding whitespace.
	///
	/// # Errors
	///
	/// Returns [`HydrationError::InvalidStateJson`] if `json` is not exactly
	/// one JSON value.
	pub fn push_json(&mut self, json: impl Into<String>) -> Result<()> {
		let value = parse_raw(json.into()).map_err(HydrationError::InvalidStateJson)?;
		self.values.push(value);
		Ok(())
	}

	/// Returns the number of values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Checks if the list is empty.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Returns the serialized values in order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.values.iter().map(|v| v.get())
	}

	/// Serializes the list as a JSON array. An empty list serializes as `[]`.
	pub fn to_json_array(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Appends all values of `other`.
	pub fn merge(&mut self, other: StateList) {
		self.values.extend(other.values);
	}
}

/// Parses `json` as exactly one JSON value, keeping its text.
pub(super) fn parse_raw(json: String) -> std::result::Result<Box<RawValue>, String> {
	RawValue::from_string(json).map_err(|e| e.to_string())
}
