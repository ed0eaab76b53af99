//! Escaping routines for the two output formats.
//!
//! HTML text, HTML attribute values and JSON strings each get their own
//! function. They overlap in the characters they touch but are not
//! interchangeable:
//!
//! | Input | [`escape_html_text`] | [`escape_html_attribute`] | [`escape_json_string`] |
//! |-------|----------------------|---------------------------|------------------------|
//! | `&`   | `&amp;`              | `&amp;`                   | `&`                    |
//! | `<`   | `&lt;`               | `&lt;`                    | `<`                    |
//! | `>`   | `&gt;`               | `&gt;`                    | `>`                    |
//! | `"`   | `&quot;`             | `&quot;`                  | `\"`                   |
//! | `'`   | `&#x27;`             | `'`                       | `'`                    |
//! | `\`   | `\`                  | `\`                       | `\\`                   |
//! | `\n`  | `\n`                 | `\n`                      | `\n` (escaped)         |
//!
//! All three return a borrowed reference when nothing needs escaping.

use std::borrow::Cow;
use std::fmt::Write;

/// Escapes text content for placement between HTML tags.
///
/// Replaces `&`, `<`, `>`, `"` and `'`.
pub fn escape_html_text(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes an attribute value for placement inside double quotes.
///
/// Replaces `&`, `<`, `>` and `"`. Single quotes are left alone since the
/// serializer always quotes attribute values with `"`.
pub fn escape_html_attribute(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"']) {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Escapes a string for use inside a JSON string literal (without the quotes).
///
/// Handles backslash, double quote, `\n`, `\r`, `\t`, backspace, form feed,
/// and emits every other control character below `0x20` as `\u00XX`.
pub fn escape_json_string(s: &str) -> Cow<'_, str> {
	if !s.chars().any(|c| c == '"' || c == '\\' || c < '\u{20}') {
		return Cow::Borrowed(s);
	}
	let mut escaped = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'"' => escaped.push_str("\\\""),
			'\\' => escaped.push_str("\\\\"),
			'\n' => escaped.push_str("\\n"),
			'\r' => escaped.push_str("\\r"),
			'\t' => escaped.push_str("\\t"),
			'\u{08}' => escaped.push_str("\\b"),
			'\u{0C}' => escaped.push_str("\\f"),
			c if c < '\u{20}' => {
				// Writing to a String cannot fail
				let _ = write!(escaped, "\\u{:04x}", c as u32);
			}
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Appends `s` as a quoted JSON string literal.
pub(crate) fn push_json_string(out: &mut String, s: &str) {
	out.push('"');
	out.push_str(&escape_json_string(s));
	out.push('"');
}
