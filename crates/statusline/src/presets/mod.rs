//! Named colors, separators and providers that attribute values may reference.
//!
//! The table is assembled once at setup through [`PresetsBuilder`] and is
//! read-only during renders.

mod colors;
mod providers;
mod separators;

use bezel_primitives::Color;
use rustc_hash::FxHashMap as HashMap;

use crate::config::StatuslineConfig;
use crate::error::ConfigError;
use crate::value::{Binary, ComponentView, Dynamic, ProviderOpts, Scope, binary};

pub use self::colors::mode_name;

/// A registered provider: `(scope, component, opts) -> text [+ icon]`.
pub type ProviderFn = Binary;

/// Preset registry consulted by the value resolver.
#[derive(Clone)]
pub struct Presets {
	colors: HashMap<String, Color>,
	separators: HashMap<String, String>,
	providers: HashMap<String, ProviderFn>,
	mode_colors: HashMap<String, String>,
}

impl Presets {
	/// Builder seeded with the builtin tables.
	pub fn builder() -> PresetsBuilder {
		PresetsBuilder {
			presets: Self::builtin(),
		}
	}

	/// Builtin tables with the overrides from `config` applied.
	pub fn from_config(config: &StatuslineConfig) -> Result<Self, ConfigError> {
		Ok(Self::builder().apply_config(config)?.build())
	}

	/// Tables with no entries at all.
	pub fn empty() -> Self {
		Self {
			colors: HashMap::default(),
			separators: HashMap::default(),
			providers: HashMap::default(),
			mode_colors: HashMap::default(),
		}
	}

	fn builtin() -> Self {
		let mut presets = Self::empty();
		for (name, color) in colors::DEFAULT_COLORS {
			presets.colors.insert((*name).to_string(), *color);
		}
		for (name, glyph) in separators::DEFAULT_SEPARATORS {
			presets.separators.insert((*name).to_string(), (*glyph).to_string());
		}
		for (mode, color) in colors::DEFAULT_MODE_COLORS {
			presets.mode_colors.insert((*mode).to_string(), (*color).to_string());
		}
		for (name, provider) in providers::BUILTIN_PROVIDERS {
			let provider = *provider;
			presets.providers.insert(
				(*name).to_string(),
				binary(move |scope, view, opts| Ok(Dynamic::Provided(provider(scope, view, opts)))),
			);
		}
		presets
	}

	pub fn color(&self, name: &str) -> Option<Color> {
		self.colors.get(name).copied()
	}

	pub fn separator(&self, name: &str) -> Option<&str> {
		self.separators.get(name).map(String::as_str)
	}

	pub fn provider(&self, name: &str) -> Option<&ProviderFn> {
		self.providers.get(name)
	}

	/// Color for a mode name such as `INSERT`.
	///
	/// Mode colors name a color preset or hold a color literal.
	pub fn mode_color(&self, mode: &str) -> Option<Color> {
		let value = self.mode_colors.get(mode)?;
		self.color(value)
			.or_else(|| bezel_primitives::parse_color(value).ok())
	}

	/// Separator glyph for `text`, or `text` itself when it names no preset.
	pub(crate) fn separator_or_literal<'s>(&'s self, text: &'s str) -> &'s str {
		self.separator(text).unwrap_or(text)
	}
}

impl Default for Presets {
	fn default() -> Self {
		Self::builtin()
	}
}

impl core::fmt::Debug for Presets {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Presets")
			.field("colors", &self.colors.len())
			.field("separators", &self.separators.len())
			.field("providers", &self.providers.len())
			.field("mode_colors", &self.mode_colors.len())
			.finish()
	}
}

/// Setup-time registration of presets. Registering an existing name
/// replaces it.
#[derive(Debug, Clone)]
pub struct PresetsBuilder {
	presets: Presets,
}

impl PresetsBuilder {
	pub fn color(mut self, name: impl Into<String>, color: Color) -> Self {
		self.presets.colors.insert(name.into(), color);
		self
	}

	pub fn separator(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
		self.presets.separators.insert(name.into(), glyph.into());
		self
	}

	/// Maps a mode name (`NORMAL`, `INSERT`, ...) to a color preset name or
	/// color literal.
	pub fn mode_color(mut self, mode: impl Into<String>, color: impl Into<String>) -> Self {
		self.presets.mode_colors.insert(mode.into(), color.into());
		self
	}

	pub fn provider<F, R>(mut self, name: impl Into<String>, f: F) -> Self
	where
		F: Fn(&Scope<'_>, &ComponentView<'_>, &ProviderOpts) -> anyhow::Result<R>
			+ Send
			+ Sync
			+ 'static,
		R: Into<Dynamic>,
	{
		self.presets.providers.insert(
			name.into(),
			binary(move |scope, view, opts| f(scope, view, opts).map(Into::into)),
		);
		self
	}

	/// Applies the `theme`, `separators` and `vi-mode-colors` tables.
	pub fn apply_config(mut self, config: &StatuslineConfig) -> Result<Self, ConfigError> {
		for (name, value) in &config.theme {
			let color = bezel_primitives::parse_color(value).map_err(|error| ConfigError::Parse {
				key: format!("theme.{name}"),
				error,
			})?;
			self.presets.colors.insert(name.clone(), color);
		}
		for (name, glyph) in &config.separators {
			self.presets.separators.insert(name.clone(), glyph.clone());
		}
		for (mode, value) in &config.vi_mode_colors {
			if self.presets.color(value).is_none() {
				bezel_primitives::parse_color(value).map_err(|error| ConfigError::Parse {
					key: format!("vi-mode-colors.{mode}"),
					error,
				})?;
			}
			self.presets.mode_colors.insert(mode.clone(), value.clone());
		}
		Ok(self)
	}

	pub fn build(self) -> Presets {
		self.presets
	}
}
