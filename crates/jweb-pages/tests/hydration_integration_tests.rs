//! Integration tests for hydration bundling, script injection and SSR.
//!
//! Test categories:
//! 1. Bundle defaults and field layout
//! 2. Script tag safety
//! 3. Injection placement
//! 4. Full render flow
//! 5. Logging
//! 6. Property-based injection and escaping checks

use jweb_core::{Element, IntoNode, Node, RenderSettings};
use jweb_pages::{HydrationBundle, HydrationError, SsrRenderer, StateList, inject_hydration_script};
use proptest::prelude::*;
use rstest::*;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

fn parse(s: &str) -> Value {
	serde_json::from_str(s).unwrap()
}

/// Extracts the JSON payload from a hydration script tag.
fn script_payload<'a>(html: &'a str, id: &str) -> &'a str {
	let open = format!(r#"<script id="{id}" type="application/json">"#);
	let start = html.find(&open).unwrap() + open.len();
	let end = start + html[start..].find("</script>").unwrap();
	&html[start..end]
}

#[fixture]
fn counter_page() -> Node {
	Element::new("div")
		.unwrap()
		.with_attribute("id", "counter")
		.unwrap()
		.with_children([
			Element::new("span")
				.unwrap()
				.with_child("Count: 0")
				.unwrap()
				.into_node(),
			Element::new("button")
				.unwrap()
				.with_attribute("data-handler", "inc")
				.unwrap()
				.with_child("+")
				.unwrap()
				.into_node(),
		])
		.unwrap()
		.into_node()
}

// ============================================================================
// Category 1: Bundle defaults and field layout
// ============================================================================

#[rstest]
fn test_empty_bundle_has_empty_state_and_null_context() {
	let json = HydrationBundle::builder()
		.build()
		.unwrap()
		.to_json()
		.unwrap();
	assert!(json.contains(r#""state":[]"#));
	assert!(json.contains(r#""contextId":null"#));
	assert!(json.contains(r#""vnode":null"#));
	assert!(json.contains(r#""handlers":[]"#));
}

#[rstest]
fn test_bundle_field_order() {
	let json = HydrationBundle::builder()
		.vnode(&Node::text("x"))
		.context_id("c")
		.state(&1)
		.handler("h")
		.build()
		.unwrap()
		.to_json()
		.unwrap();

	let positions: Vec<usize> = ["\"contextId\"", "\"vnode\"", "\"state\"", "\"handlers\""]
		.iter()
		.map(|key| json.find(key).unwrap())
		.collect();
	assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[rstest]
fn test_bundle_embeds_vnode_as_object() {
	let bundle = HydrationBundle::builder()
		.vnode(&Node::raw("<b>bold</b>"))
		.build()
		.unwrap();
	assert_eq!(
		parse(&bundle.to_json().unwrap())["vnode"],
		json!({"type": "raw", "html": "<b>bold</b>"})
	);
}

#[derive(Serialize)]
struct TodoState {
	items: Vec<&'static str>,
	done: u32,
}

#[rstest]
fn test_bundle_state_values_keep_order() {
	let mut shared = StateList::new();
	shared.push(&json!({"theme": "dark"})).unwrap();

	let bundle = HydrationBundle::builder()
		.state(&TodoState {
			items: vec!["milk", "eggs"],
			done: 1,
		})
		.states(shared)
		.state_json("[1,2,3]")
		.build()
		.unwrap();

	assert_eq!(
		parse(&bundle.to_json().unwrap())["state"],
		json!([
			{"items": ["milk", "eggs"], "done": 1},
			{"theme": "dark"},
			[1, 2, 3]
		])
	);
}

#[rstest]
fn test_first_error_wins() {
	let result = HydrationBundle::builder()
		.state_json("{")
		.vnode_json("also broken")
		.build();
	assert!(matches!(result, Err(HydrationError::InvalidStateJson(_))));
}

// ============================================================================
// Category 2: Script tag safety
// ============================================================================

#[rstest]
#[case("</script>")]
#[case("</SCRIPT><img src=x onerror=alert(1)>")]
#[case("a</b>c")]
#[case("<!--<script>")]
fn test_script_tag_contains_no_early_close(#[case] text: &'static str) {
	let bundle = HydrationBundle::builder()
		.vnode(&Node::text(text))
		.context_id(text)
		.handler(text)
		.build()
		.unwrap();
	let tag = bundle.to_script_tag().unwrap();
	let payload = script_payload(&tag, "__hydration_data__");

	assert!(!payload.contains('<'));
	let value = parse(payload);
	assert_eq!(value["vnode"]["content"], json!(text));
	assert_eq!(value["contextId"], json!(text));
	assert_eq!(value["handlers"][0], json!(text));
}

// ============================================================================
// Category 3: Injection placement
// ============================================================================

#[rstest]
#[case::before_body(
	"<html><body><main></main></body></html>",
	"<html><body><main></main>@</body></html>"
)]
#[case::before_html("<html><main></main></html>", "<html><main></main>@</html>")]
#[case::appended("<main></main>", "<main></main>@")]
#[case::mixed_case("<Body>x</bOdY>", "<Body>x@</bOdY>")]
#[case::empty("", "@")]
fn test_injection_placement(#[case] html: &str, #[case] expected: &str) {
	assert_eq!(inject_hydration_script(html, "@"), expected);
}

#[rstest]
fn test_injection_preserves_surrounding_html() {
	let html = "<html><body><p>a</p></body><!-- tail --></html>";
	let out = inject_hydration_script(html, "<script></script>");
	assert_eq!(out.replace("<script></script>", ""), html);
}

// ============================================================================
// Category 4: Full render flow
// ============================================================================

#[rstest]
fn test_render_page_full_flow(counter_page: Node) {
	let renderer = SsrRenderer::new();
	let html = renderer
		.render_page(
			&counter_page,
			HydrationBundle::builder()
				.context_id("sess-42")
				.state(&json!({"count": 0}))
				.handler("inc"),
		)
		.unwrap();

	assert!(html.contains(
		r#"<div id="counter"><span>Count: 0</span><button data-handler="inc">+</button></div>"#
	));

	let script_at = html.find("<script id=\"__hydration_data__\"").unwrap();
	assert!(script_at < html.rfind("</body>").unwrap());

	let bundle = parse(script_payload(&html, "__hydration_data__"));
	assert_eq!(bundle["contextId"], json!("sess-42"));
	assert_eq!(bundle["state"], json!([{"count": 0}]));
	assert_eq!(bundle["handlers"], json!(["inc"]));
	assert_eq!(bundle["vnode"], parse(&counter_page.to_hydration_json()));
}

#[rstest]
fn test_render_with_settings_from_toml(counter_page: Node) {
	let settings = RenderSettings::from_toml_str(
		r#"
		pretty_hydration = true
		hydration_script_id = "page-data"
		"#,
	)
	.unwrap();
	let html = SsrRenderer::with_settings(settings)
		.render_hydrated(&counter_page, HydrationBundle::builder())
		.unwrap();

	let payload = script_payload(&html, "page-data");
	assert!(payload.contains('\n'));
	assert_eq!(
		parse(payload)["vnode"],
		parse(&counter_page.to_hydration_json())
	);
}

#[rstest]
fn test_render_deep_copied_tree_matches_original(counter_page: Node) {
	let renderer = SsrRenderer::new();
	let copy = counter_page.deep_copy();
	assert_eq!(renderer.render(&copy), renderer.render(&counter_page));
}

// ============================================================================
// Category 5: Logging
// ============================================================================

#[rstest]
fn test_append_fallback_logs_warning() {
	use tracing_subscriber::layer::SubscriberExt as _;
	use tracing_subscriber::util::SubscriberInitExt as _;

	// Arrange
	struct LevelCapture {
		levels: Arc<Mutex<Vec<tracing::Level>>>,
	}

	impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LevelCapture {
		fn on_event(
			&self,
			event: &tracing::Event<'_>,
			_ctx: tracing_subscriber::layer::Context<'_, S>,
		) {
			self.levels.lock().unwrap().push(*event.metadata().level());
		}
	}

	let levels = Arc::new(Mutex::new(Vec::new()));
	let _guard = tracing_subscriber::registry()
		.with(LevelCapture {
			levels: levels.clone(),
		})
		.set_default();

	// Act
	inject_hydration_script("<body></body>", "S");
	let with_anchor = levels.lock().unwrap().clone();
	inject_hydration_script("<p>no anchor</p>", "S");

	// Assert
	let all = levels.lock().unwrap();
	assert!(!with_anchor.contains(&tracing::Level::WARN));
	assert!(all.contains(&tracing::Level::WARN));
}

// ============================================================================
// Category 6: Property-based checks
// ============================================================================

proptest! {
	#[test]
	fn prop_injection_only_adds_script(body in "[a-z<>/ ]{0,40}", script in "[A-Z]{1,10}") {
		let html = format!("<html><body>{body}</body></html>");
		let out = inject_hydration_script(&html, &script);
		prop_assert_eq!(out.len(), html.len() + script.len());
		let expected = format!("{script}</body>");
		prop_assert!(out.contains(&expected));
	}

	#[test]
	fn prop_script_payload_round_trips(text in any::<String>()) {
		let bundle = HydrationBundle::builder()
			.vnode(&Node::text(text.clone()))
			.build()
			.unwrap();
		let tag = bundle.to_script_tag().unwrap();
		let payload = script_payload(&tag, "__hydration_data__");
		prop_assert!(!payload.contains('<'));
		let value: Value = serde_json::from_str(payload).unwrap();
		prop_assert_eq!(value["vnode"]["content"].as_str(), Some(text.as_str()));
	}
}
