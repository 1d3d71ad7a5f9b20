//! Component definitions and their rendered fragments.

mod render;

use serde_json::Value as Json;

pub(crate) use self::render::Renderer;
use crate::highlight::{HighlightHandle, HighlightSpec};
use crate::value::{ProviderOpts, ProviderOutput, Value};

/// Glyph shown before a component's text.
///
/// Without its own `hl` the icon shares the component highlight; a partial
/// `hl` inherits the missing colors from it.
#[derive(Debug, Clone, Default)]
pub struct Icon {
	pub text: String,
	pub hl: Option<Value<HighlightSpec>>,
	/// Render even when the provider text is empty.
	pub always_visible: bool,
}

impl Icon {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	pub fn hl(mut self, hl: impl Into<Value<HighlightSpec>>) -> Self {
		self.hl = Some(hl.into());
		self
	}

	pub fn always_visible(mut self, always_visible: bool) -> Self {
		self.always_visible = always_visible;
		self
	}
}

impl From<&str> for Icon {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Icon {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

/// Glyph placed on either side of a component.
///
/// `text` may name a separator preset. An unset `hl` foreground defaults to
/// the owning component's background.
#[derive(Debug, Clone, Default)]
pub struct Separator {
	pub text: String,
	pub hl: Option<Value<HighlightSpec>>,
	/// Render even when the provider text is empty.
	pub always_visible: bool,
}

impl Separator {
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	pub fn hl(mut self, hl: impl Into<Value<HighlightSpec>>) -> Self {
		self.hl = Some(hl.into());
		self
	}

	pub fn always_visible(mut self, always_visible: bool) -> Self {
		self.always_visible = always_visible;
		self
	}
}

impl From<&str> for Separator {
	fn from(text: &str) -> Self {
		Self::new(text)
	}
}

impl From<String> for Separator {
	fn from(text: String) -> Self {
		Self::new(text)
	}
}

/// The atomic renderable unit of a statusline.
///
/// Every attribute is optional; omitted attributes take their defaults
/// (empty text, inherited highlight, enabled, priority 0).
#[derive(Debug, Clone, Default)]
pub struct Component {
	/// Identifier used in diagnostics.
	pub name: Option<String>,
	pub provider: Option<Value<ProviderOutput>>,
	/// Alternate text used once truncation shortens the component.
	pub short_provider: Option<Value<ProviderOutput>>,
	/// Options handed to two-argument providers.
	pub provider_opts: ProviderOpts,
	pub icon: Option<Value<Icon>>,
	pub hl: Option<Value<HighlightSpec>>,
	pub left_sep: Vec<Value<Separator>>,
	pub right_sep: Vec<Value<Separator>>,
	pub enabled: Option<Value<bool>>,
	/// Lower priorities are truncated first.
	pub priority: i32,
	/// Allow truncation to remove the component entirely.
	pub truncate_hide: bool,
}

impl Component {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	pub fn provider(mut self, provider: impl Into<Value<ProviderOutput>>) -> Self {
		self.provider = Some(provider.into());
		self
	}

	pub fn short_provider(mut self, provider: impl Into<Value<ProviderOutput>>) -> Self {
		self.short_provider = Some(provider.into());
		self
	}

	pub fn provider_opts(mut self, opts: ProviderOpts) -> Self {
		self.provider_opts = opts;
		self
	}

	/// Sets a single provider option.
	pub fn opt(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
		self.provider_opts = self.provider_opts.with(key, value);
		self
	}

	pub fn icon(mut self, icon: impl Into<Value<Icon>>) -> Self {
		self.icon = Some(icon.into());
		self
	}

	pub fn hl(mut self, hl: impl Into<Value<HighlightSpec>>) -> Self {
		self.hl = Some(hl.into());
		self
	}

	/// Appends a left separator.
	pub fn left_sep(mut self, sep: impl Into<Value<Separator>>) -> Self {
		self.left_sep.push(sep.into());
		self
	}

	/// Appends a right separator.
	pub fn right_sep(mut self, sep: impl Into<Value<Separator>>) -> Self {
		self.right_sep.push(sep.into());
		self
	}

	pub fn enabled(mut self, enabled: impl Into<Value<bool>>) -> Self {
		self.enabled = Some(enabled.into());
		self
	}

	pub fn priority(mut self, priority: i32) -> Self {
		self.priority = priority;
		self
	}

	pub fn truncate_hide(mut self, truncate_hide: bool) -> Self {
		self.truncate_hide = truncate_hide;
		self
	}
}

/// Which provider a component renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
	#[default]
	Full,
	Short,
}

/// One highlighted run of text inside a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
	pub text: String,
	pub hl: HighlightHandle,
	pub width: usize,
}

/// A rendered component: `left_sep ++ icon ++ text ++ right_sep`.
///
/// Suppressed pieces are absent, so an empty component may have no pieces
/// at all. `hl` is the component highlight even then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
	pub pieces: Vec<Piece>,
	pub hl: HighlightHandle,
	pub width: usize,
}

impl Fragment {
	/// Highlight a following gap inherits: that of the last piece, or the
	/// component highlight when nothing was drawn.
	pub fn trailing_hl(&self) -> &HighlightHandle {
		self.pieces.last().map_or(&self.hl, |piece| &piece.hl)
	}

	pub fn text(&self) -> String {
		self.pieces.iter().map(|piece| piece.text.as_str()).collect()
	}
}
