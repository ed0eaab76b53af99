//! Element nodes and attribute values.

use super::{IntoNode, Node};
use crate::error::{Result, VdomError};
use crate::settings::RenderSettings;
use std::borrow::Cow;
use std::sync::Arc;

/// HTML void elements. These never have children or a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Returns whether `tag` (lowercase) is an HTML void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// The value of an element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
	/// A boolean attribute: present with no value (`<button disabled>`).
	Boolean,
	/// A string value, possibly empty (`alt=""`).
	Text(Cow<'static, str>),
}

impl AttributeValue {
	/// Returns the string value, or `None` for boolean attributes.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			AttributeValue::Boolean => None,
			AttributeValue::Text(value) => Some(value),
		}
	}

	/// Returns whether this is a boolean attribute.
	pub fn is_boolean(&self) -> bool {
		matches!(self, AttributeValue::Boolean)
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> Self {
		AttributeValue::Text(Cow::Borrowed(value))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> Self {
		AttributeValue::Text(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for AttributeValue {
	fn from(value: Cow<'static, str>) -> Self {
		AttributeValue::Text(value)
	}
}

impl<T: Into<Cow<'static, str>>> From<Option<T>> for AttributeValue {
	/// `None` becomes a boolean attribute.
	fn from(value: Option<T>) -> Self {
		match value {
			Some(v) => AttributeValue::Text(v.into()),
			None => AttributeValue::Boolean,
		}
	}
}

/// An element node.
///
/// The tag name is lowercased at construction and the element records
/// whether it is void, so its serialization depends only on its own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, AttributeValue)>,
	children: Vec<Arc<Node>>,
	is_void: bool,
}

impl Element {
	/// Creates an element with no attributes or children.
	///
	/// # Errors
	///
	/// Returns [`VdomError::InvalidTagName`] if the tag is empty or contains
	/// whitespace, `<`, `>`, `/`, `=` or quotes.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Result<Self> {
		Self::with_parts(
			tag,
			Vec::<(&'static str, AttributeValue)>::new(),
			Vec::<Node>::new(),
		)
	}

	/// Creates an element from all of its parts using the default void list.
	///
	/// # Errors
	///
	/// Returns [`VdomError::InvalidStructure`] if the tag is void and
	/// `children` is non-empty, [`VdomError::InvalidTagName`] or
	/// [`VdomError::InvalidAttributeName`].
	pub fn with_parts<N, V>(
		tag: impl Into<Cow<'static, str>>,
		attrs: impl IntoIterator<Item = (N, V)>,
		children: impl IntoIterator<Item = impl IntoNode>,
	) -> Result<Self>
	where
		N: Into<Cow<'static, str>>,
		V: Into<AttributeValue>,
	{
		let tag = normalize_tag(tag.into())?;
		let is_void = is_void_element(&tag);
		Self::assemble(tag, is_void, attrs, children)
	}

	/// Creates an element, consulting `settings` for additional void tags.
	///
	/// # Errors
	///
	/// Same as [`Element::with_parts`].
	pub fn new_with<N, V>(
		settings: &RenderSettings,
		tag: impl Into<Cow<'static, str>>,
		attrs: impl IntoIterator<Item = (N, V)>,
		children: impl IntoIterator<Item = impl IntoNode>,
	) -> Result<Self>
	where
		N: Into<Cow<'static, str>>,
		V: Into<AttributeValue>,
	{
		let tag = normalize_tag(tag.into())?;
		let is_void = settings.is_void(&tag);
		Self::assemble(tag, is_void, attrs, children)
	}

	fn assemble<N, V>(
		tag: Cow<'static, str>,
		is_void: bool,
		attrs: impl IntoIterator<Item = (N, V)>,
		children: impl IntoIterator<Item = impl IntoNode>,
	) -> Result<Self>
	where
		N: Into<Cow<'static, str>>,
		V: Into<AttributeValue>,
	{
		let children: Vec<Arc<Node>> = children
			.into_iter()
			.map(|c| Arc::new(c.into_node()))
			.collect();
		if is_void && !children.is_empty() {
			return Err(VdomError::InvalidStructure {
				tag: tag.into_owned(),
				children: children.len(),
			});
		}

		let mut element = Self {
			tag,
			attrs: Vec::new(),
			children,
			is_void,
		};
		for (name, value) in attrs {
			element.set_attr(name.into(), value.into())?;
		}
		Ok(element)
	}

	/// Rebuilds an element from already-validated parts.
	pub(super) fn from_validated(
		tag: Cow<'static, str>,
		attrs: Vec<(Cow<'static, str>, AttributeValue)>,
		children: Vec<Arc<Node>>,
		is_void: bool,
	) -> Self {
		Self {
			tag,
			attrs,
			children,
			is_void,
		}
	}

	/// Returns the lowercase tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub(super) fn tag_cow(&self) -> &Cow<'static, str> {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attributes(&self) -> &[(Cow<'static, str>, AttributeValue)] {
		&self.attrs
	}

	/// Looks up an attribute by name.
	pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	/// Returns the children.
	pub fn children(&self) -> &[Arc<Node>] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns a copy with the attribute set.
	///
	/// An existing attribute of the same name keeps its position and has
	/// its value replaced.
	///
	/// # Errors
	///
	/// Returns [`VdomError::InvalidAttributeName`] if the name is empty or
	/// contains whitespace, `<`, `>`, `/`, `=` or quotes.
	pub fn with_attribute(
		&self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<AttributeValue>,
	) -> Result<Self> {
		let mut element = self.clone();
		element.set_attr(name.into(), value.into())?;
		Ok(element)
	}

	/// Returns a copy with a boolean attribute set.
	///
	/// # Errors
	///
	/// Same as [`Element::with_attribute`].
	pub fn with_boolean_attribute(&self, name: impl Into<Cow<'static, str>>) -> Result<Self> {
		self.with_attribute(name, AttributeValue::Boolean)
	}

	/// Returns a copy without the named attribute.
	pub fn without_attribute(&self, name: &str) -> Self {
		let mut element = self.clone();
		element.attrs.retain(|(n, _)| n != name);
		element
	}

	/// Returns a copy with `child` appended.
	///
	/// # Errors
	///
	/// Returns [`VdomError::InvalidStructure`] on a void element.
	pub fn with_child(&self, child: impl IntoNode) -> Result<Self> {
		self.with_children([child])
	}

	/// Returns a copy with `children` appended.
	///
	/// Appending an empty sequence to a void element is allowed.
	///
	/// # Errors
	///
	/// Returns [`VdomError::InvalidStructure`] on a void element.
	pub fn with_children(&self, children: impl IntoIterator<Item = impl IntoNode>) -> Result<Self> {
		let added: Vec<Arc<Node>> = children
			.into_iter()
			.map(|c| Arc::new(c.into_node()))
			.collect();
		if added.is_empty() {
			return Ok(self.clone());
		}
		if self.is_void {
			return Err(VdomError::InvalidStructure {
				tag: self.tag.to_string(),
				children: added.len(),
			});
		}
		let mut element = self.clone();
		element.children.extend(added);
		Ok(element)
	}

	fn set_attr(&mut self, name: Cow<'static, str>, value: AttributeValue) -> Result<()> {
		if !is_valid_name(&name) {
			return Err(VdomError::InvalidAttributeName(name.into_owned()));
		}
		if let Some(pos) = self.attrs.iter().position(|(n, _)| *n == name) {
			self.attrs[pos].1 = value;
		} else {
			self.attrs.push((name, value));
		}
		Ok(())
	}
}

// Tag and attribute names share the same forbidden characters.
fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& !name
			.chars()
			.any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '=' | '"' | '\''))
}

fn normalize_tag(tag: Cow<'static, str>) -> Result<Cow<'static, str>> {
	if !is_valid_name(&tag) {
		return Err(VdomError::InvalidTagName(tag.into_owned()));
	}
	if tag.bytes().any(|b| b.is_ascii_uppercase()) {
		Ok(Cow::Owned(tag.to_ascii_lowercase()))
	} else {
		Ok(tag)
	}
}
