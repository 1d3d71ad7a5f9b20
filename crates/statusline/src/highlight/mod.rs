//! Highlight specifications and the shared highlight cache.
//!
//! The cache maps highlight names to styles. A name is registered at most
//! once: later requests with the same name get the existing handle even if
//! their colors differ, so hosts never see a group redefined mid-session.
//! Anonymous highlights are named by [`auto_name`], which makes identical
//! anonymous styles collapse into one entry.

use std::fmt::Write as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bezel_primitives::{Color, Modifier, Style};
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

/// A color given directly or by name.
///
/// Names resolve through the color presets first and are parsed as color
/// literals (`#rrggbb`, `red`, ...) otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorValue {
	Color(Color),
	Named(String),
}

impl From<Color> for ColorValue {
	fn from(color: Color) -> Self {
		Self::Color(color)
	}
}

impl From<&str> for ColorValue {
	fn from(name: &str) -> Self {
		Self::Named(name.to_string())
	}
}

impl From<String> for ColorValue {
	fn from(name: String) -> Self {
		Self::Named(name)
	}
}

/// Unresolved highlight: colors may still be preset names.
///
/// Missing `fg`/`bg` are filled from the renderer's defaults; `name`
/// overrides the generated cache name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSpec {
	pub fg: Option<ColorValue>,
	pub bg: Option<ColorValue>,
	pub style: Modifier,
	pub name: Option<String>,
}

impl HighlightSpec {
	pub fn new() -> Self {
		Self::default()
	}

	/// A reference to a highlight registered under `name`.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	pub fn fg(mut self, color: impl Into<ColorValue>) -> Self {
		self.fg = Some(color.into());
		self
	}

	pub fn bg(mut self, color: impl Into<ColorValue>) -> Self {
		self.bg = Some(color.into());
		self
	}

	pub fn style(mut self, style: Modifier) -> Self {
		self.style = style;
		self
	}

	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// Handle to a registered highlight; compares by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HighlightHandle(Arc<str>);

impl HighlightHandle {
	pub fn name(&self) -> &str {
		&self.0
	}
}

impl core::fmt::Display for HighlightHandle {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Deterministic cache name for an anonymous style.
///
/// Layout: `StatusComponent_<fg>_<bg>_<style>`. Colors encode as `NONE`
/// (unset), six hex digits, `i<N>` for palette indices or the lowercase
/// ANSI name; none of these contain `_`, so distinct styles never share a
/// name.
pub fn auto_name(style: &Style) -> String {
	let mut name = String::from("StatusComponent_");
	push_color(&mut name, style.fg);
	name.push('_');
	push_color(&mut name, style.bg);
	name.push('_');
	if style.modifiers.is_empty() {
		name.push_str("NONE");
	} else {
		for (i, modifier) in style.modifiers.names().enumerate() {
			if i > 0 {
				name.push('_');
			}
			name.push_str(modifier);
		}
	}
	name
}

fn push_color(out: &mut String, color: Option<Color>) {
	match color {
		None => out.push_str("NONE"),
		Some(Color::Rgb(r, g, b)) => {
			let _ = write!(out, "{r:02x}{g:02x}{b:02x}");
		}
		Some(Color::Indexed(i)) => {
			let _ = write!(out, "i{i}");
		}
		Some(named) => {
			let _ = write!(out, "{named}");
		}
	}
}

/// Process-wide highlight registry shared by every render.
///
/// Lookups and insertions each take the lock briefly; no lock is held across
/// a render. Insertion is insert-if-absent per name, so concurrent renders
/// racing on the same name agree on one entry.
#[derive(Debug, Default)]
pub struct HighlightCache {
	entries: RwLock<HashMap<Arc<str>, Style>>,
	generation: AtomicU64,
}

impl HighlightCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the handle for `name` (or the generated name for `style`),
	/// registering `style` only if that name is not yet present.
	pub fn get_or_create(&self, style: Style, name: Option<&str>) -> HighlightHandle {
		let generated;
		let name = match name {
			Some(name) => name,
			None => {
				generated = auto_name(&style);
				generated.as_str()
			}
		};

		if let Some((key, _)) = self.entries.read().get_key_value(name) {
			return HighlightHandle(Arc::clone(key));
		}

		let mut entries = self.entries.write();
		if let Some((key, _)) = entries.get_key_value(name) {
			return HighlightHandle(Arc::clone(key));
		}
		let key: Arc<str> = Arc::from(name);
		entries.insert(Arc::clone(&key), style);
		tracing::trace!(highlight = %key, ?style, "Registered highlight");
		HighlightHandle(key)
	}

	/// Style registered for `handle`, if it survived the last reset.
	pub fn lookup(&self, handle: &HighlightHandle) -> Option<Style> {
		self.get(handle.name())
	}

	pub fn get(&self, name: &str) -> Option<Style> {
		self.entries.read().get(name).copied()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.entries.read().contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// All registered entries sorted by name.
	pub fn snapshot(&self) -> Vec<(HighlightHandle, Style)> {
		let mut entries: Vec<_> = self
			.entries
			.read()
			.iter()
			.map(|(key, style)| (HighlightHandle(Arc::clone(key)), *style))
			.collect();
		entries.sort_by(|a, b| a.0.cmp(&b.0));
		entries
	}

	/// Drops every entry; later lookups re-create them lazily.
	pub fn reset(&self) {
		let mut entries = self.entries.write();
		let dropped = entries.len();
		entries.clear();
		let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
		tracing::debug!(dropped, generation, "Highlight cache reset");
	}

	/// Number of resets so far. Hosts compare it to know when their
	/// applied highlight definitions are stale.
	pub fn generation(&self) -> u64 {
		self.generation.load(Ordering::Acquire)
	}
}
