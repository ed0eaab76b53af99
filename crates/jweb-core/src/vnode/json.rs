//! Hydration JSON serialization.
//!
//! The client runtime reads this shape to learn what the server rendered:
//!
//! ```text
//! element  -> {"type":"element","tag":..,"attrs":{..}?,"children":[..]?}
//! text     -> {"type":"text","content":..}
//! raw      -> {"type":"raw","html":..}
//! fragment -> {"type":"fragment","children":[..]}
//! ```
//!
//! `attrs` and `children` are omitted on elements when empty. Boolean
//! attributes serialize as `true`. Strings use JSON escaping only, never
//! HTML escaping.
//!
//! The compact form is written directly with [`escape_json_string`]. The
//! pretty form goes through the [`Serialize`] impl on [`Node`], which
//! produces the same fields in the same order.
//!
//! [`escape_json_string`]: super::escape::escape_json_string

use super::escape::push_json_string;
use super::{AttributeValue, Element, Node};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::sync::Arc;

/// Output layout of the hydration JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HydrationFormat {
	/// No insignificant whitespace. This is the wire format.
	#[default]
	Compact,
	/// Two-space indentation, for debugging.
	Pretty,
}

impl Node {
	/// Serializes the tree to compact hydration JSON.
	pub fn to_hydration_json(&self) -> String {
		let mut out = String::new();
		write_node(&mut out, self);
		out
	}

	/// Serializes the tree to indented hydration JSON.
	///
	/// Field names and nesting are identical to the compact form.
	pub fn to_hydration_json_pretty(&self) -> String {
		serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_hydration_json())
	}

	/// Serializes the tree to hydration JSON in the given format.
	pub fn to_hydration_json_with(&self, format: HydrationFormat) -> String {
		match format {
			HydrationFormat::Compact => self.to_hydration_json(),
			HydrationFormat::Pretty => self.to_hydration_json_pretty(),
		}
	}
}

fn write_node(out: &mut String, node: &Node) {
	match node {
		Node::Element(el) => write_element(out, el),
		Node::Text(content) => {
			out.push_str(r#"{"type":"text","content":"#);
			push_json_string(out, content);
			out.push('}');
		}
		Node::Raw(html) => {
			out.push_str(r#"{"type":"raw","html":"#);
			push_json_string(out, html);
			out.push('}');
		}
		Node::Fragment(fragment) => {
			out.push_str(r#"{"type":"fragment","children":"#);
			write_children(out, fragment.children());
			out.push('}');
		}
	}
}

fn write_element(out: &mut String, el: &Element) {
	out.push_str(r#"{"type":"element","tag":"#);
	push_json_string(out, el.tag());

	let attrs = el.attributes();
	if !attrs.is_empty() {
		out.push_str(r#","attrs":{"#);
		for (i, (name, value)) in attrs.iter().enumerate() {
			if i > 0 {
				out.push(',');
			}
			push_json_string(out, name);
			out.push(':');
			match value {
				AttributeValue::Boolean => out.push_str("true"),
				AttributeValue::Text(value) => push_json_string(out, value),
			}
		}
		out.push('}');
	}

	if !el.children().is_empty() {
		out.push_str(r#","children":"#);
		write_children(out, el.children());
	}
	out.push('}');
}

fn write_children(out: &mut String, children: &[Arc<Node>]) {
	out.push('[');
	for (i, child) in children.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}
		write_node(out, child);
	}
	out.push(']');
}

impl Serialize for Node {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Node::Element(el) => el.serialize(serializer),
			Node::Text(content) => {
				let mut map = serializer.serialize_map(Some(2))?;
				map.serialize_entry("type", "text")?;
				map.serialize_entry("content", &**content)?;
				map.end()
			}
			Node::Raw(html) => {
				let mut map = serializer.serialize_map(Some(2))?;
				map.serialize_entry("type", "raw")?;
				map.serialize_entry("html", &**html)?;
				map.end()
			}
			Node::Fragment(fragment) => {
				let mut map = serializer.serialize_map(Some(2))?;
				map.serialize_entry("type", "fragment")?;
				map.serialize_entry("children", &Children(fragment.children()))?;
				map.end()
			}
		}
	}
}

impl Serialize for Element {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let attrs = self.attributes();
		let children = self.children();
		let len = 2 + usize::from(!attrs.is_empty()) + usize::from(!children.is_empty());

		let mut map = serializer.serialize_map(Some(len))?;
		map.serialize_entry("type", "element")?;
		map.serialize_entry("tag", self.tag())?;
		if !attrs.is_empty() {
			map.serialize_entry("attrs", &Attributes(attrs))?;
		}
		if !children.is_empty() {
			map.serialize_entry("children", &Children(children))?;
		}
		map.end()
	}
}

impl Serialize for AttributeValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			AttributeValue::Boolean => serializer.serialize_bool(true),
			AttributeValue::Text(value) => serializer.serialize_str(value),
		}
	}
}

struct Attributes<'a>(&'a [(std::borrow::Cow<'static, str>, AttributeValue)]);

impl Serialize for Attributes<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (name, value) in self.0 {
			map.serialize_entry(&**name, value)?;
		}
		map.end()
	}
}

struct Children<'a>(&'a [Arc<Node>]);

impl Serialize for Children<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
		for child in self.0 {
			seq.serialize_element(child.as_ref())?;
		}
		seq.end()
	}
}
