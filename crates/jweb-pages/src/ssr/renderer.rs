//! SSR renderer.

use crate::error::Result;
use crate::hydration::{HydrationBundleBuilder, inject_hydration_script};
use jweb_core::{HydrationFormat, Node, RenderSettings, escape_html_attribute};

/// Renders node trees to HTML and attaches hydration data.
#[derive(Debug, Clone)]
pub struct SsrRenderer {
	settings: RenderSettings,
	lang: String,
}

impl Default for SsrRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl SsrRenderer {
	/// Creates a renderer with default settings.
	pub fn new() -> Self {
		Self::with_settings(RenderSettings::default())
	}

	/// Creates a renderer with custom settings.
	pub fn with_settings(settings: RenderSettings) -> Self {
		Self {
			settings,
			lang: "en".to_string(),
		}
	}

	/// Sets the `lang` attribute used by [`wrap_in_html`](Self::wrap_in_html).
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Returns the settings.
	pub fn settings(&self) -> &RenderSettings {
		&self.settings
	}

	/// Returns the hydration JSON format selected by the settings.
	pub fn hydration_format(&self) -> HydrationFormat {
		if self.settings.pretty_hydration {
			HydrationFormat::Pretty
		} else {
			HydrationFormat::Compact
		}
	}

	/// Renders a node to HTML without hydration data.
	pub fn render(&self, node: &Node) -> String {
		let _span = tracing::trace_span!("ssr_render").entered();
		node.to_html()
	}

	/// Renders a node and injects its hydration script.
	///
	/// If `bundle` has no tree yet, `node` is serialized into it.
	pub fn render_hydrated(&self, node: &Node, bundle: HydrationBundleBuilder) -> Result<String> {
		let html = self.render(node);
		self.attach(&html, node, bundle)
	}

	/// Renders `body` inside a full HTML document and injects its hydration script.
	pub fn render_page(&self, body: &Node, bundle: HydrationBundleBuilder) -> Result<String> {
		let html = self.wrap_in_html(&self.render(body));
		self.attach(&html, body, bundle)
	}

	/// Wraps rendered content in a minimal HTML document.
	pub fn wrap_in_html(&self, content: &str) -> String {
		let mut html = String::with_capacity(content.len() + 256);
		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!(
			"<html lang=\"{}\">\n",
			escape_html_attribute(&self.lang)
		));
		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		html.push_str("</head>\n");
		html.push_str("<body>\n");
		html.push_str(content);
		html.push('\n');
		html.push_str("</body>\n");
		html.push_str("</html>");
		html
	}

	fn attach(&self, html: &str, node: &Node, bundle: HydrationBundleBuilder) -> Result<String> {
		let bundle = if bundle.has_vnode() {
			bundle
		} else {
			bundle.vnode_with_format(node, self.hydration_format())
		};
		let script = bundle
			.build()?
			.to_script_tag_with_id(&self.settings.hydration_script_id)?;
		Ok(inject_hydration_script(html, &script))
	}
}
