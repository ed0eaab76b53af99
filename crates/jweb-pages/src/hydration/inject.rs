//! Splicing the hydration script into a rendered document.

/// Inserts `script` into `html`.
///
/// The script goes immediately before the first `</body>`; failing that,
/// before the first `</html>`; failing that, at the end. Tag matching is
/// ASCII case-insensitive. Callers inject once per response.
///
/// # Example
///
/// ```
/// use jweb_pages::hydration::inject_hydration_script;
///
/// let html = inject_hydration_script("<body><p>x</p></body></html>", "<script></script>");
/// assert_eq!(html, "<body><p>x</p><script></script></body></html>");
/// ```
pub fn inject_hydration_script(html: &str, script: &str) -> String {
	// ASCII lowercasing keeps byte offsets aligned with `html`
	let lower = html.to_ascii_lowercase();
	let (position, anchor) = if let Some(pos) = lower.find("</body>") {
		(pos, "</body>")
	} else if let Some(pos) = lower.find("</html>") {
		(pos, "</html>")
	} else {
		tracing::warn!(
			html_len = html.len(),
			"no </body> or </html> found, appending hydration script"
		);
		(html.len(), "end")
	};
	tracing::debug!(anchor, position, "injecting hydration script");

	let mut out = String::with_capacity(html.len() + script.len());
	out.push_str(&html[..position]);
	out.push_str(script);
	out.push_str(&html[position..]);
	out
}
