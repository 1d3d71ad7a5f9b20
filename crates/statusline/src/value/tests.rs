use bezel_primitives::Color;
use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{ComponentView, Dynamic, ProviderOpts, ProviderOutput, Resolver, Scope, Value};
use crate::component::{Icon, Separator};
use crate::context::{BufferSnapshot, RenderContext, WindowId};
use crate::error::ValueError;
use crate::highlight::{ColorValue, HighlightSpec};
use crate::presets::Presets;

fn with_resolver<R>(host: &BufferSnapshot, f: impl FnOnce(&Resolver<'_>, &ComponentView<'_>) -> R) -> R {
	let ctx = RenderContext::new(WindowId(7), 60, true, host);
	let presets = Presets::builder()
		.provider("echo_opts", |_, _, opts| Ok(opts.get_str("say").unwrap_or("").to_string()))
		.provider("fails", |_, _, _| -> anyhow::Result<String> { anyhow::bail!("no data") })
		.build();
	let scope = Scope::new(&ctx, &presets);
	let opts = ProviderOpts::new().with("say", "from component");
	let view = ComponentView {
		name: Some("test"),
		priority: 3,
		truncate_hide: false,
		short: false,
		opts: &opts,
		text: Some("body"),
		hl: None,
	};
	f(&Resolver::new(&scope, Some("test")), &view)
}

fn provider_text(value: Value<ProviderOutput>, opts: Option<&ProviderOpts>) -> Result<Option<String>, ValueError> {
	with_resolver(&BufferSnapshot::default(), |r, view| {
		r.resolve("provider", &value, view, opts)
			.map(|out| out.map(|out| out.text))
	})
}

#[test]
fn constant_is_returned_unchanged() {
	assert_eq!(provider_text(Value::from("hi"), None), Ok(Some("hi".to_string())));
}

#[test]
fn preset_provider_is_invoked_with_component_opts() {
	let value = Value::preset("echo_opts");
	assert_eq!(provider_text(value, None), Ok(Some("from component".to_string())));
}

#[test]
fn explicit_opts_override_component_opts() {
	let opts = ProviderOpts::new().with("say", "explicit");
	let value = Value::preset("echo_opts");
	assert_eq!(provider_text(value, Some(&opts)), Ok(Some("explicit".to_string())));
}

#[test]
fn unknown_preset_is_reported_by_resolve() {
	assert_eq!(
		provider_text(Value::preset("missing"), None),
		Err(ValueError::UnknownPresetName {
			name: "missing".to_string()
		})
	);
}

#[test]
fn failing_preset_provider_is_an_evaluation_failure() {
	let err = provider_text(Value::preset("fails"), None).unwrap_err();
	assert!(matches!(err, ValueError::ProviderEvaluationFailure { message, .. } if message.contains("no data")));
}

#[test]
fn computed_forms_receive_their_arguments() {
	let zero = Value::computed0(|scope| Ok(format!("w{}", scope.width())));
	let one = Value::computed1(|_, view| Ok(format!("p{}", view.priority)));
	let two = Value::computed2(|_, view, opts| {
		Ok(format!("{}:{}", view.name.unwrap_or("?"), opts.get_str("say").unwrap_or("")))
	});
	let opts = ProviderOpts::new().with("say", "x");

	assert_eq!(provider_text(zero, None), Ok(Some("w60".to_string())));
	assert_eq!(provider_text(one, None), Ok(Some("p3".to_string())));
	assert_eq!(provider_text(two, Some(&opts)), Ok(Some("test:x".to_string())));
}

#[test]
fn nil_result_is_unset() {
	let value = Value::computed0(|_| Ok(Option::<String>::None));
	assert_eq!(provider_text(value, None), Ok(None));
}

#[test]
fn panics_are_caught() {
	let value = Value::computed0(|_| -> anyhow::Result<String> { panic!("boom") });
	let err = provider_text(value, None).unwrap_err();
	assert_eq!(
		err,
		ValueError::ProviderEvaluationFailure {
			attr: "provider",
			message: "panicked: boom".to_string()
		}
	);
}

#[rstest]
#[case(Dynamic::Int(3), "integer")]
#[case(Dynamic::Bool(true), "bool")]
#[case(Dynamic::Highlight(HighlightSpec::new()), "highlight")]
fn wrong_provider_type_is_a_mismatch(#[case] result: Dynamic, #[case] found: &'static str) {
	let value = Value::computed0(move |_| Ok(result.clone()));
	assert_eq!(
		provider_text(value, None),
		Err(ValueError::TypeMismatch {
			attr: "provider",
			expected: "string",
			found
		})
	);
}

#[test]
fn two_argument_form_needs_opts() {
	let value: Value<bool> = Value::computed2(|_, _, _| Ok(true));
	let result = with_resolver(&BufferSnapshot::default(), |r, view| r.resolve("enabled", &value, view, None));
	assert!(matches!(result, Err(ValueError::TypeMismatch { attr: "enabled", .. })));
}

#[test]
fn attr_falls_back_to_raw_name_for_unknown_presets() {
	let host = BufferSnapshot::default();
	let provider: Value<ProviderOutput> = Value::preset("literal text");
	let separator: Value<Separator> = Value::preset("no_such_glyph");
	let enabled: Value<bool> = Value::preset("no_such_flag");

	with_resolver(&host, |r, view| {
		let out = r.attr("provider", Some(&provider), view, None).unwrap().unwrap();
		assert_eq!(out.text, "literal text");
		let sep = r.attr("left_sep", Some(&separator), view, None).unwrap().unwrap();
		assert_eq!(sep.text, "no_such_glyph");
		assert!(r.attr("enabled", Some(&enabled), view, None).is_err());
		assert_eq!(r.attr::<bool>("enabled", None, view, None), Ok(None));
	});
}

#[test]
fn separator_and_icon_presets_resolve_to_glyphs() {
	let host = BufferSnapshot::default();
	let separator: Value<Separator> = Value::preset("left_rounded");
	let icon: Value<Icon> = Value::preset("circle");
	with_resolver(&host, |r, view| {
		let sep = r.resolve("left_sep", &separator, view, None).unwrap().unwrap();
		assert_eq!(sep.text, "\u{e0b6}");
		let icon = r.resolve("icon", &icon, view, None).unwrap().unwrap();
		assert_eq!(icon.text, "\u{25cf}");
	});
}

#[test]
fn highlight_preset_names_a_group() {
	let host = BufferSnapshot::default();
	let hl: Value<HighlightSpec> = Value::preset("StatusLineNC");
	with_resolver(&host, |r, view| {
		let spec = r.resolve("hl", &hl, view, None).unwrap().unwrap();
		assert_eq!(spec, HighlightSpec::named("StatusLineNC"));
	});
}

#[test]
fn computed_highlight_can_use_mode_color() {
	let host = BufferSnapshot {
		mode: "i".to_string(),
		..BufferSnapshot::default()
	};
	let hl: Value<HighlightSpec> = Value::computed0(|scope| {
		let fg = scope.mode_color().map_or(ColorValue::from("fg"), ColorValue::from);
		Ok(HighlightSpec::new().fg(fg))
	});
	with_resolver(&host, |r, view| {
		let spec = r.resolve("hl", &hl, view, None).unwrap().unwrap();
		assert_eq!(spec.fg, Some(ColorValue::Color(Color::from_u32(0xD10000))));
	});
}

#[rstest]
#[case(ColorValue::from("skyblue"), Some(Color::from_u32(0x50B0F0)))]
#[case(ColorValue::from("#010203"), Some(Color::Rgb(1, 2, 3)))]
#[case(ColorValue::from("blue"), Some(Color::Blue))]
#[case(ColorValue::from(Color::Indexed(9)), Some(Color::Indexed(9)))]
#[case(ColorValue::from("not a color"), None)]
fn colors_resolve_through_presets_then_literals(#[case] value: ColorValue, #[case] expected: Option<Color>) {
	let host = BufferSnapshot::default();
	assert_eq!(with_resolver(&host, |r, _| r.color(&value)), expected);
}

#[test]
fn provider_opts_accessors() {
	let opts = ProviderOpts::new()
		.with("type", "relative")
		.with("padding", true)
		.with("depth", 2);
	assert_eq!(opts.get_str("type"), Some("relative"));
	assert_eq!(opts.get_bool("padding"), Some(true));
	assert_eq!(opts.get_i64("depth"), Some(2));
	assert_eq!(opts.get_str("padding"), None);
	assert!(!opts.is_empty());
	assert!(ProviderOpts::new().is_empty());

	let parsed: ProviderOpts = serde_json::from_str(r#"{"type":"full-path"}"#).unwrap();
	assert_eq!(parsed.get_str("type"), Some("full-path"));
}
