//! Resolution of [`Value`]s into concrete attribute values.

use std::panic::{AssertUnwindSafe, catch_unwind};

use bezel_primitives::{Color, parse_color};

use super::{ComponentView, Dynamic, ProviderOpts, ProviderOutput, Scope, Value};
use crate::component::{Icon, Separator};
use crate::error::ValueError;
use crate::highlight::{ColorValue, HighlightSpec};

/// A concrete attribute type a [`Value`] can resolve to.
pub(crate) trait Resolvable: Sized + Clone {
	/// Type name used in mismatch diagnostics.
	const EXPECTED: &'static str;

	/// Converts a computed result. `Ok(None)` means "unset".
	fn from_dynamic(attr: &'static str, value: Dynamic) -> Result<Option<Self>, ValueError>;

	/// Substitutes the preset registered under `name`.
	fn from_preset(
		name: &str,
		scope: &Scope<'_>,
		view: &ComponentView<'_>,
		opts: Option<&ProviderOpts>,
	) -> Result<Self, ValueError>;

	/// Value used when `name` is not a registered preset.
	fn from_raw(name: &str) -> Option<Self>;
}

fn mismatch(attr: &'static str, expected: &'static str, found: &Dynamic) -> ValueError {
	ValueError::TypeMismatch {
		attr,
		expected,
		found: found.kind(),
	}
}

fn unknown(name: &str) -> ValueError {
	ValueError::UnknownPresetName {
		name: name.to_string(),
	}
}

impl Resolvable for ProviderOutput {
	const EXPECTED: &'static str = "string";

	fn from_dynamic(attr: &'static str, value: Dynamic) -> Result<Option<Self>, ValueError> {
		match value {
			Dynamic::Nil => Ok(None),
			Dynamic::Str(text) => Ok(Some(Self::new(text))),
			Dynamic::Provided(output) => Ok(Some(output)),
			other => Err(mismatch(attr, Self::EXPECTED, &other)),
		}
	}

	fn from_preset(
		name: &str,
		scope: &Scope<'_>,
		view: &ComponentView<'_>,
		opts: Option<&ProviderOpts>,
	) -> Result<Self, ValueError> {
		let provider = scope.presets.provider(name).ok_or_else(|| unknown(name))?;
		let opts = opts.unwrap_or(view.opts);
		let result = evaluate("provider", || provider(scope, view, opts))?;
		Ok(Self::from_dynamic("provider", result)?.unwrap_or_default())
	}

	fn from_raw(name: &str) -> Option<Self> {
		Some(Self::new(name))
	}
}

impl Resolvable for bool {
	const EXPECTED: &'static str = "bool";

	fn from_dynamic(attr: &'static str, value: Dynamic) -> Result<Option<Self>, ValueError> {
		match value {
			Dynamic::Bool(value) => Ok(Some(value)),
			other => Err(mismatch(attr, Self::EXPECTED, &other)),
		}
	}

	fn from_preset(
		name: &str,
		_scope: &Scope<'_>,
		_view: &ComponentView<'_>,
		_opts: Option<&ProviderOpts>,
	) -> Result<Self, ValueError> {
		Err(unknown(name))
	}

	fn from_raw(_name: &str) -> Option<Self> {
		None
	}
}

impl Resolvable for HighlightSpec {
	const EXPECTED: &'static str = "highlight";

	fn from_dynamic(attr: &'static str, value: Dynamic) -> Result<Option<Self>, ValueError> {
		match value {
			Dynamic::Nil => Ok(None),
			Dynamic::Str(name) => Ok(Some(Self::named(name))),
			Dynamic::Highlight(spec) => Ok(Some(spec)),
			other => Err(mismatch(attr, Self::EXPECTED, &other)),
		}
	}

	/// A highlight given by name refers to the highlight group itself.
	fn from_preset(
		name: &str,
		_scope: &Scope<'_>,
		_view: &ComponentView<'_>,
		_opts: Option<&ProviderOpts>,
	) -> Result<Self, ValueError> {
		Ok(Self::named(name))
	}

	fn from_raw(name: &str) -> Option<Self> {
		Some(Self::named(name))
	}
}

impl Resolvable for Icon {
	const EXPECTED: &'static str = "icon";

	fn from_dynamic(attr: &'static str, value: Dynamic) -> Result<Option<Self>, ValueError> {
		match value {
			Dynamic::Nil => Ok(None),
			Dynamic::Str(text) => Ok(Some(Self::new(text))),
			Dynamic::Icon(icon) => Ok(Some(icon)),
			other => Err(mismatch(attr, Self::EXPECTED, &other)),
		}
	}

	fn from_preset(
		name: &str,
		scope: &Scope<'_>,
		_view: &ComponentView<'_>,
		_opts: Option<&ProviderOpts>,
	) -> Result<Self, ValueError> {
		scope
			.presets
			.separator(name)
			.map(Self::new)
			.ok_or_else(|| unknown(name))
	}

	fn from_raw(name: &str) -> Option<Self> {
		Some(Self::new(name))
	}
}

impl Resolvable for Separator {
	const EXPECTED: &'static str = "separator";

	fn from_dynamic(attr: &'static str, value: Dynamic) -> Result<Option<Self>, ValueError> {
		match value {
			Dynamic::Nil => Ok(None),
			Dynamic::Str(text) => Ok(Some(Self::new(text))),
			Dynamic::Separator(sep) => Ok(Some(sep)),
			other => Err(mismatch(attr, Self::EXPECTED, &other)),
		}
	}

	fn from_preset(
		name: &str,
		scope: &Scope<'_>,
		_view: &ComponentView<'_>,
		_opts: Option<&ProviderOpts>,
	) -> Result<Self, ValueError> {
		scope
			.presets
			.separator(name)
			.map(Self::new)
			.ok_or_else(|| unknown(name))
	}

	fn from_raw(name: &str) -> Option<Self> {
		Some(Self::new(name))
	}
}

/// Runs host code, turning errors and panics into evaluation failures.
fn evaluate<F>(attr: &'static str, f: F) -> Result<Dynamic, ValueError>
where
	F: FnOnce() -> anyhow::Result<Dynamic>,
{
	match catch_unwind(AssertUnwindSafe(f)) {
		Ok(Ok(value)) => Ok(value),
		Ok(Err(error)) => Err(ValueError::ProviderEvaluationFailure {
			attr,
			message: format!("{error:#}"),
		}),
		Err(payload) => {
			let message = payload
				.downcast_ref::<&str>()
				.map(|s| (*s).to_string())
				.or_else(|| payload.downcast_ref::<String>().cloned())
				.unwrap_or_else(|| "panic".to_string());
			Err(ValueError::ProviderEvaluationFailure {
				attr,
				message: format!("panicked: {message}"),
			})
		}
	}
}

/// Resolves attribute values for one component within one render.
pub(crate) struct Resolver<'a> {
	scope: &'a Scope<'a>,
	component: Option<&'a str>,
}

impl<'a> Resolver<'a> {
	pub(crate) fn new(scope: &'a Scope<'a>, component: Option<&'a str>) -> Self {
		Self { scope, component }
	}

	/// Resolves `value` without any fallback handling.
	///
	/// `opts` is only passed for providers; a two-argument computed value
	/// anywhere else is a type mismatch.
	pub(crate) fn resolve<T: Resolvable>(
		&self,
		attr: &'static str,
		value: &Value<T>,
		view: &ComponentView<'_>,
		opts: Option<&ProviderOpts>,
	) -> Result<Option<T>, ValueError> {
		let scope = self.scope;
		let result = match value {
			Value::Constant(value) => return Ok(Some(value.clone())),
			Value::Preset(name) => return T::from_preset(name, scope, view, opts).map(Some),
			Value::Computed0(f) => evaluate(attr, || f(scope))?,
			Value::Computed1(f) => evaluate(attr, || f(scope, view))?,
			Value::Computed2(f) => match opts {
				Some(opts) => evaluate(attr, || f(scope, view, opts))?,
				None => {
					return Err(ValueError::TypeMismatch {
						attr,
						expected: "zero- or one-argument computed value",
						found: "two-argument computed value",
					});
				}
			},
		};
		T::from_dynamic(attr, result)
	}

	/// Resolves an optional attribute, logging failures.
	///
	/// Unknown preset names fall back to the raw name; other failures are
	/// returned so the caller can pick the attribute's fallback.
	pub(crate) fn attr<T: Resolvable>(
		&self,
		attr: &'static str,
		value: Option<&Value<T>>,
		view: &ComponentView<'_>,
		opts: Option<&ProviderOpts>,
	) -> Result<Option<T>, ValueError> {
		let Some(value) = value else {
			return Ok(None);
		};
		match self.resolve(attr, value, view, opts) {
			Ok(resolved) => Ok(resolved),
			Err(ValueError::UnknownPresetName { name }) => {
				let raw = T::from_raw(&name);
				tracing::warn!(
					component = ?self.component,
					attr,
					preset = %name,
					raw_fallback = raw.is_some(),
					"Unknown preset name"
				);
				raw.map(Some).ok_or(ValueError::UnknownPresetName { name })
			}
			Err(error) => {
				tracing::warn!(component = ?self.component, attr, error = %error, "Attribute resolution failed");
				Err(error)
			}
		}
	}

	/// Resolves a color name through the presets, then as a color literal.
	pub(crate) fn color(&self, value: &ColorValue) -> Option<Color> {
		match value {
			ColorValue::Color(color) => Some(*color),
			ColorValue::Named(name) => self
				.scope
				.presets
				.color(name)
				.or_else(|| parse_color(name).ok())
				.or_else(|| {
					tracing::warn!(
						component = ?self.component,
						error = %unknown(name),
						"Color is neither a preset nor a color literal"
					);
					None
				}),
		}
	}
}
