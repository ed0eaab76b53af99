//! # jweb-core
//!
//! Virtual DOM for server-rendered JWeb pages.
//!
//! ## Features
//!
//! - **Closed node model**: [`Node`] is one of element, text, raw or fragment
//! - **HTML serialization**: escaping of text and attribute values, void elements
//! - **Hydration JSON**: the tree description consumed by the client runtime
//! - **Deep copy**: independent copies of cached or shared trees
//!
//! ## Example
//!
//! ```
//! use jweb_core::{Element, Node};
//!
//! let button = Element::new("button")?
//!     .with_boolean_attribute("disabled")?
//!     .with_child("Save")?;
//! let node = Node::from(button);
//!
//! assert_eq!(node.to_html(), "<button disabled>Save</button>");
//! assert_eq!(
//!     node.to_hydration_json(),
//!     r#"{"type":"element","tag":"button","attrs":{"disabled":true},"children":[{"type":"text","content":"Save"}]}"#
//! );
//! # Ok::<(), jweb_core::VdomError>(())
//! ```

pub mod error;
pub mod settings;
pub mod vnode;

pub use error::{Result, VdomError};
pub use settings::{DEFAULT_HYDRATION_SCRIPT_ID, RenderSettings};
pub use vnode::escape::{escape_html_attribute, escape_html_text, escape_json_string};
pub use vnode::{
	AttributeValue, Element, Fragment, HydrationFormat, IntoNode, Node, VOID_ELEMENTS,
	is_void_element,
};
