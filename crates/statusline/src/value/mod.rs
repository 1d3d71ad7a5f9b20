//! Attribute values and the views computed values receive.
//!
//! Every component attribute is a [`Value`]: a constant, a named preset
//! reference, or a host closure. Closures return a loosely typed
//! [`Dynamic`] which the resolver checks against the attribute's type.

mod resolve;

use std::sync::Arc;

use bezel_primitives::{Color, Style};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};

pub(crate) use self::resolve::Resolver;
use crate::component::{Icon, Separator};
use crate::context::{HostView, RenderContext, WindowId};
use crate::highlight::HighlightSpec;
use crate::presets::Presets;

/// Closure taking only the render scope.
pub type Nullary = Arc<dyn Fn(&Scope<'_>) -> anyhow::Result<Dynamic> + Send + Sync>;
/// Closure additionally receiving the owning component.
pub type Unary = Arc<dyn Fn(&Scope<'_>, &ComponentView<'_>) -> anyhow::Result<Dynamic> + Send + Sync>;
/// Provider closure additionally receiving the provider options.
pub type Binary = Arc<
	dyn Fn(&Scope<'_>, &ComponentView<'_>, &ProviderOpts) -> anyhow::Result<Dynamic> + Send + Sync,
>;

/// A component attribute.
///
/// Arity counts the component-facing arguments; every computed form also
/// receives the [`Scope`] of the current render. [`Value::Computed2`] is
/// only meaningful for providers and is a type mismatch anywhere else.
pub enum Value<T> {
	Constant(T),
	Preset(String),
	Computed0(Nullary),
	Computed1(Unary),
	Computed2(Binary),
}

impl<T> Value<T> {
	/// Reference to a registered color, separator or provider.
	pub fn preset(name: impl Into<String>) -> Self {
		Self::Preset(name.into())
	}

	pub fn computed0<F, R>(f: F) -> Self
	where
		F: Fn(&Scope<'_>) -> anyhow::Result<R> + Send + Sync + 'static,
		R: Into<Dynamic>,
	{
		Self::Computed0(nullary(move |scope| f(scope).map(Into::into)))
	}

	pub fn computed1<F, R>(f: F) -> Self
	where
		F: Fn(&Scope<'_>, &ComponentView<'_>) -> anyhow::Result<R> + Send + Sync + 'static,
		R: Into<Dynamic>,
	{
		Self::Computed1(unary(move |scope, view| f(scope, view).map(Into::into)))
	}

	pub fn computed2<F, R>(f: F) -> Self
	where
		F: Fn(&Scope<'_>, &ComponentView<'_>, &ProviderOpts) -> anyhow::Result<R>
			+ Send
			+ Sync
			+ 'static,
		R: Into<Dynamic>,
	{
		Self::Computed2(binary(move |scope, view, opts| {
			f(scope, view, opts).map(Into::into)
		}))
	}
}

// Funnel closures through `Fn` bounds so their argument lifetimes are
// inferred as higher-ranked.
fn nullary<F>(f: F) -> Nullary
where
	F: Fn(&Scope<'_>) -> anyhow::Result<Dynamic> + Send + Sync + 'static,
{
	Arc::new(f)
}

fn unary<F>(f: F) -> Unary
where
	F: Fn(&Scope<'_>, &ComponentView<'_>) -> anyhow::Result<Dynamic> + Send + Sync + 'static,
{
	Arc::new(f)
}

pub(crate) fn binary<F>(f: F) -> Binary
where
	F: Fn(&Scope<'_>, &ComponentView<'_>, &ProviderOpts) -> anyhow::Result<Dynamic>
		+ Send
		+ Sync
		+ 'static,
{
	Arc::new(f)
}

impl<T: Clone> Clone for Value<T> {
	fn clone(&self) -> Self {
		match self {
			Self::Constant(value) => Self::Constant(value.clone()),
			Self::Preset(name) => Self::Preset(name.clone()),
			Self::Computed0(f) => Self::Computed0(Arc::clone(f)),
			Self::Computed1(f) => Self::Computed1(Arc::clone(f)),
			Self::Computed2(f) => Self::Computed2(Arc::clone(f)),
		}
	}
}

impl<T: core::fmt::Debug> core::fmt::Debug for Value<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		match self {
			Self::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
			Self::Preset(name) => f.debug_tuple("Preset").field(name).finish(),
			Self::Computed0(_) => f.write_str("Computed0(..)"),
			Self::Computed1(_) => f.write_str("Computed1(..)"),
			Self::Computed2(_) => f.write_str("Computed2(..)"),
		}
	}
}

impl<T> From<T> for Value<T> {
	fn from(value: T) -> Self {
		Self::Constant(value)
	}
}

macro_rules! value_from_str {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<&str> for Value<$ty> {
				fn from(text: &str) -> Self {
					Self::Constant(<$ty>::from(text))
				}
			}

			impl From<String> for Value<$ty> {
				fn from(text: String) -> Self {
					Self::Constant(<$ty>::from(text))
				}
			}
		)*
	};
}

value_from_str!(ProviderOutput, Icon, Separator, HighlightSpec);

/// Text produced by a provider plus an optional default icon.
#[derive(Debug, Clone, Default)]
pub struct ProviderOutput {
	pub text: String,
	pub icon: Option<Icon>,
}

impl ProviderOutput {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			icon: None,
		}
	}

	pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
		self.icon = Some(icon.into());
		self
	}
}

impl From<&str> for ProviderOutput {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for ProviderOutput {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

impl From<&str> for HighlightSpec {
	fn from(name: &str) -> Self {
		Self::named(name)
	}
}

impl From<String> for HighlightSpec {
	fn from(name: String) -> Self {
		Self::named(name)
	}
}

/// Loosely typed result of a computed value.
#[derive(Debug, Clone, Default)]
pub enum Dynamic {
	#[default]
	Nil,
	Bool(bool),
	Int(i64),
	Str(String),
	Provided(ProviderOutput),
	Highlight(HighlightSpec),
	Icon(Icon),
	Separator(Separator),
}

impl Dynamic {
	/// Short type name used in mismatch diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Nil => "nil",
			Self::Bool(_) => "bool",
			Self::Int(_) => "integer",
			Self::Str(_) => "string",
			Self::Provided(_) => "provider output",
			Self::Highlight(_) => "highlight",
			Self::Icon(_) => "icon",
			Self::Separator(_) => "separator",
		}
	}
}

impl From<()> for Dynamic {
	fn from((): ()) -> Self {
		Self::Nil
	}
}

impl From<bool> for Dynamic {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Dynamic {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<&str> for Dynamic {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for Dynamic {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<ProviderOutput> for Dynamic {
	fn from(value: ProviderOutput) -> Self {
		Self::Provided(value)
	}
}

impl From<HighlightSpec> for Dynamic {
	fn from(value: HighlightSpec) -> Self {
		Self::Highlight(value)
	}
}

impl From<Icon> for Dynamic {
	fn from(value: Icon) -> Self {
		Self::Icon(value)
	}
}

impl From<Separator> for Dynamic {
	fn from(value: Separator) -> Self {
		Self::Separator(value)
	}
}

impl<T: Into<Dynamic>> From<Option<T>> for Dynamic {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Nil, Into::into)
	}
}

/// Provider configuration knobs, a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderOpts(Map<String, Json>);

impl ProviderOpts {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
		self.0.insert(key.into(), value.into());
		self
	}

	pub fn get(&self, key: &str) -> Option<&Json> {
		self.0.get(key)
	}

	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.0.get(key).and_then(Json::as_str)
	}

	pub fn get_bool(&self, key: &str) -> Option<bool> {
		self.0.get(key).and_then(Json::as_bool)
	}

	pub fn get_i64(&self, key: &str) -> Option<i64> {
		self.0.get(key).and_then(Json::as_i64)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

/// Read-only view of the component being rendered.
///
/// `text` and `hl` are filled in as resolution progresses: providers see
/// neither, icons and highlights see the text, separators see both.
#[derive(Debug, Clone, Copy)]
pub struct ComponentView<'a> {
	pub name: Option<&'a str>,
	pub priority: i32,
	pub truncate_hide: bool,
	/// Whether the short provider is being rendered.
	pub short: bool,
	pub opts: &'a ProviderOpts,
	pub text: Option<&'a str>,
	pub hl: Option<&'a Style>,
}

/// Everything a computed value may consult during a render.
#[derive(Clone, Copy)]
pub struct Scope<'a> {
	pub ctx: &'a RenderContext<'a>,
	pub presets: &'a Presets,
}

impl<'a> Scope<'a> {
	pub fn new(ctx: &'a RenderContext<'a>, presets: &'a Presets) -> Self {
		Self { ctx, presets }
	}

	pub fn host(&self) -> &'a dyn HostView {
		self.ctx.host
	}

	pub fn window(&self) -> WindowId {
		self.ctx.window
	}

	pub fn width(&self) -> usize {
		self.ctx.width
	}

	pub fn active(&self) -> bool {
		self.ctx.active
	}

	/// Named color from the presets.
	pub fn color(&self, name: &str) -> Option<Color> {
		self.presets.color(name)
	}

	/// Color configured for the host's current mode.
	pub fn mode_color(&self) -> Option<Color> {
		self.presets
			.mode_color(crate::presets::mode_name(self.ctx.host.mode()))
	}
}

impl core::fmt::Debug for Scope<'_> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Scope").field("ctx", self.ctx).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests;
