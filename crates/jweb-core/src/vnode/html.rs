//! HTML serialization.

use super::escape::{escape_html_attribute, escape_html_text};
use super::{AttributeValue, Element, Node};

impl Node {
	/// Renders the node to an HTML string.
	///
	/// Output depends only on the node itself: attributes and children
	/// appear in insertion order.
	pub fn to_html(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	/// Appends the HTML rendering of this node to `output`.
	pub fn write_html(&self, output: &mut String) {
		match self {
			Node::Element(el) => el.write_html(output),
			Node::Text(text) => output.push_str(&escape_html_text(text)),
			Node::Raw(html) => output.push_str(html),
			Node::Fragment(fragment) => {
				for child in fragment.children() {
					child.write_html(output);
				}
			}
		}
	}
}

impl Element {
	/// Renders the element to an HTML string.
	pub fn to_html(&self) -> String {
		let mut output = String::new();
		self.write_html(&mut output);
		output
	}

	fn write_html(&self, output: &mut String) {
		output.push('<');
		output.push_str(self.tag());

		for (name, value) in self.attributes() {
			output.push(' ');
			output.push_str(name);
			if let AttributeValue::Text(value) = value {
				output.push_str("=\"");
				output.push_str(&escape_html_attribute(value));
				output.push('"');
			}
		}
		output.push('>');

		if self.is_void() {
			return;
		}
		for child in self.children() {
			child.write_html(output);
		}
		output.push_str("</");
		output.push_str(self.tag());
		output.push('>');
	}
}
