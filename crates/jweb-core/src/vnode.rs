//! Virtual DOM node types.
//!
//! ## Overview
//!
//! [`Node`] is a closed set of four variants:
//!
//! - [`Node::Element`]: a tag with ordered attributes and children
//! - [`Node::Text`]: text content, HTML-escaped on output
//! - [`Node::Raw`]: trusted markup, emitted verbatim
//! - [`Node::Fragment`]: a group of siblings with no wrapping tag
//!
//! Nodes are immutable once built. The `with_*` methods return new nodes
//! that share untouched subtrees through [`Arc`]. Use [`Node::deep_copy`]
//! when a tree must be fully independent of its source.
//!
//! Each node has two serializations: HTML via [`Node::to_html`] and the
//! hydration JSON via [`Node::to_hydration_json`].
//!
//! ## Example
//!
//! ```
//! use jweb_core::vnode::{Element, Node};
//!
//! let page = Element::new("div")?
//!     .with_attribute("class", "greeting")?
//!     .with_child("Hello & welcome")?;
//!
//! assert_eq!(
//!     Node::from(page).to_html(),
//!     "<div class=\"greeting\">Hello &amp; welcome</div>"
//! );
//! # Ok::<(), jweb_core::VdomError>(())
//! ```

mod copy;
mod element;
pub mod escape;
mod html;
mod json;

pub use element::{AttributeValue, Element, VOID_ELEMENTS, is_void_element};
pub use json::HydrationFormat;

use std::borrow::Cow;
use std::sync::Arc;

/// A node of the virtual DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// An HTML element.
	Element(Element),
	/// Escaped text content.
	Text(Cow<'static, str>),
	/// Trusted markup emitted without escaping.
	///
	/// The caller is responsible for the safety of the content.
	Raw(Cow<'static, str>),
	/// Sibling nodes with no wrapping tag.
	Fragment(Fragment),
}

/// An ordered group of sibling nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
	children: Vec<Arc<Node>>,
}

impl Fragment {
	/// Creates a fragment from the given children.
	pub fn new(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self {
			children: children
				.into_iter()
				.map(|c| Arc::new(c.into_node()))
				.collect(),
		}
	}

	/// Returns the children.
	pub fn children(&self) -> &[Arc<Node>] {
		&self.children
	}

	/// Returns a new fragment with `child` appended.
	pub fn with_child(&self, child: impl IntoNode) -> Self {
		let mut children = self.children.clone();
		children.push(Arc::new(child.into_node()));
		Self { children }
	}

	pub(crate) fn from_shared(children: Vec<Arc<Node>>) -> Self {
		Self { children }
	}
}

impl Node {
	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a text node, treating absent content as the empty string.
	pub fn text_or_empty(content: Option<impl Into<Cow<'static, str>>>) -> Self {
		Self::Text(content.map(Into::into).unwrap_or_default())
	}

	/// Creates a raw markup node.
	pub fn raw(html: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(html.into())
	}

	/// Creates a fragment node.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoNode>) -> Self {
		Self::Fragment(Fragment::new(children))
	}

	/// Returns the element if this node is one.
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Node::Element(el) => Some(el),
			_ => None,
		}
	}

	/// Returns the direct children of an element or fragment.
	///
	/// Text and raw nodes have no children.
	pub fn children(&self) -> &[Arc<Node>] {
		match self {
			Node::Element(el) => el.children(),
			Node::Fragment(fragment) => fragment.children(),
			Node::Text(_) | Node::Raw(_) => &[],
		}
	}

	/// Counts this node and all of its descendants.
	pub fn count_nodes(&self) -> usize {
		1 + self
			.children()
			.iter()
			.map(|child| child.count_nodes())
			.sum::<usize>()
	}
}

/// Conversion into a [`Node`].
///
/// Implemented for nodes, elements and strings so builders can accept
/// any of them as children.
pub trait IntoNode {
	/// Converts self into a node.
	fn into_node(self) -> Node;
}

impl IntoNode for Node {
	fn into_node(self) -> Node {
		self
	}
}

impl IntoNode for Element {
	fn into_node(self) -> Node {
		Node::Element(self)
	}
}

impl IntoNode for Fragment {
	fn into_node(self) -> Node {
		Node::Fragment(self)
	}
}

impl IntoNode for Arc<Node> {
	fn into_node(self) -> Node {
		Arc::unwrap_or_clone(self)
	}
}

impl IntoNode for String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self))
	}
}

impl IntoNode for &String {
	fn into_node(self) -> Node {
		Node::Text(Cow::Owned(self.clone()))
	}
}

impl IntoNode for &'static str {
	fn into_node(self) -> Node {
		Node::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoNode> IntoNode for Option<T> {
	fn into_node(self) -> Node {
		match self {
			Some(v) => v.into_node(),
			None => Node::Text(Cow::Borrowed("")),
		}
	}
}

impl<T: IntoNode> IntoNode for Vec<T> {
	fn into_node(self) -> Node {
		Node::fragment(self)
	}
}

macro_rules! impl_from_for_node {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Node {
				fn from(value: $ty) -> Self {
					value.into_node()
				}
			}
		)*
	};
}

impl_from_for_node!(Element, Fragment, String, &'static str);
