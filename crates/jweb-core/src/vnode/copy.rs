//! Deep copying of node trees.

use super::{AttributeValue, Element, Fragment, Node};
use std::borrow::Cow;
use std::sync::Arc;

impl Node {
	/// Returns a structurally identical tree that shares no allocation with `self`.
	///
	/// [`Clone`] is shallow: cloned nodes share their children through
	/// [`Arc`]. Use this when handing a cached tree to a consumer that must
	/// not observe or pin the original.
	pub fn deep_copy(&self) -> Node {
		match self {
			Node::Element(el) => Node::Element(el.deep_copy()),
			Node::Text(text) => Node::Text(copy_str(text)),
			Node::Raw(html) => Node::Raw(copy_str(html)),
			Node::Fragment(fragment) => Node::Fragment(Fragment::from_shared(copy_children(
				fragment.children(),
			))),
		}
	}
}

impl Element {
	/// Deep-copies the element and its whole subtree.
	pub fn deep_copy(&self) -> Element {
		let attrs = self
			.attributes()
			.iter()
			.map(|(name, value)| {
				let value = match value {
					AttributeValue::Boolean => AttributeValue::Boolean,
					AttributeValue::Text(v) => AttributeValue::Text(copy_str(v)),
				};
				(copy_str(name), value)
			})
			.collect();
		Element::from_validated(
			copy_str(self.tag_cow()),
			attrs,
			copy_children(self.children()),
			self.is_void(),
		)
	}
}

fn copy_children(children: &[Arc<Node>]) -> Vec<Arc<Node>> {
	children
		.iter()
		.map(|child| Arc::new(child.deep_copy()))
		.collect()
}

// Owned strings are reallocated; `'static` borrows are shared.
fn copy_str(s: &Cow<'static, str>) -> Cow<'static, str> {
	s.clone()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::vnode::IntoNode;
	use rstest::{fixture, rstest};

	#[fixture]
	fn tree() -> Node {
		Element::new("section")
			.unwrap()
			.with_attribute("id", String::from("main"))
			.unwrap()
			.with_boolean_attribute("hidden")
			.unwrap()
			.with_children([
				Node::text(String::from("a < b")),
				Node::raw("<hr>"),
				Node::fragment([Element::new("br").unwrap()]),
			])
			.unwrap()
			.into_node()
	}

	#[rstest]
	fn test_deep_copy_is_equal(tree: Node) {
		let copy = tree.deep_copy();
		assert_eq!(copy, tree);
		assert_eq!(copy.to_html(), tree.to_html());
		assert_eq!(copy.to_hydration_json(), tree.to_hydration_json());
	}

	#[rstest]
	fn test_deep_copy_shares_no_children(tree: Node) {
		let copy = tree.deep_copy();
		for (original, copied) in tree.children().iter().zip(copy.children()) {
			assert!(!Arc::ptr_eq(original, copied));
		}
	}

	#[rstest]
	fn test_shallow_clone_shares_children(tree: Node) {
		let clone = tree.clone();
		assert!(Arc::ptr_eq(&tree.children()[0], &clone.children()[0]));
	}

	#[rstest]
	fn test_with_on_copy_leaves_original(tree: Node) {
		let before = tree.to_html();
		let copy = tree.deep_copy();
		let changed = copy
			.as_element()
			.unwrap()
			.with_attribute("id", "other")
			.unwrap()
			.with_child("tail")
			.unwrap();

		assert_eq!(tree.to_html(), before);
		assert_ne!(changed.to_html(), before);
	}

	#[rstest]
	fn test_deep_copy_preserves_void_flag() {
		let img = Element::new("img").unwrap();
		assert!(img.deep_copy().is_void());
	}
}
