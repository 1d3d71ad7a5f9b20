//! Section trees and assembly of rendered fragments into one line.

use std::ops::Range;

use crate::component::{Component, Fragment};
use crate::highlight::HighlightHandle;

/// Components rendered contiguously. Adjacent sections are separated by a
/// gap that absorbs the unused width.
#[derive(Debug, Clone, Default)]
pub struct Section {
	pub components: Vec<Component>,
}

impl Section {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(mut self, component: Component) -> Self {
		self.components.push(component);
		self
	}
}

impl From<Vec<Component>> for Section {
	fn from(components: Vec<Component>) -> Self {
		Self { components }
	}
}

impl FromIterator<Component> for Section {
	fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
		Self {
			components: iter.into_iter().collect(),
		}
	}
}

/// Which half of a [`StatuslineTree`] a window renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
	Active,
	Inactive,
}

/// Section lists for focused and unfocused windows.
#[derive(Debug, Clone, Default)]
pub struct StatuslineTree {
	pub active: Vec<Section>,
	pub inactive: Vec<Section>,
}

impl StatuslineTree {
	pub fn new(active: Vec<Section>, inactive: Vec<Section>) -> Self {
		Self { active, inactive }
	}

	pub fn sections(&self, kind: TreeKind) -> &[Section] {
		match kind {
			TreeKind::Active => &self.active,
			TreeKind::Inactive => &self.inactive,
		}
	}
}

/// A highlighted range of a [`RenderedLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSpan {
	/// Byte range into [`RenderedLine::text`].
	pub bytes: Range<usize>,
	/// Display column range.
	pub columns: Range<usize>,
	pub hl: HighlightHandle,
}

/// Final statusline text plus spans that tile it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedLine {
	pub text: String,
	pub spans: Vec<HighlightSpan>,
}

impl RenderedLine {
	/// Display width in columns.
	pub fn width(&self) -> usize {
		self.spans.last().map_or(0, |span| span.columns.end)
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}

	fn push(&mut self, text: &str, width: usize, hl: &HighlightHandle) {
		if text.is_empty() {
			return;
		}
		let bytes = self.text.len()..self.text.len() + text.len();
		let start = self.width();
		self.text.push_str(text);
		self.spans.push(HighlightSpan {
			bytes,
			columns: start..start + width,
			hl: hl.clone(),
		});
	}
}

/// Sum of the widths of the visible fragments.
pub(crate) fn content_width(sections: &[Vec<Option<Fragment>>]) -> usize {
	sections
		.iter()
		.flatten()
		.flatten()
		.map(|fragment| fragment.width)
		.sum()
}

/// Joins rendered sections, filling the gaps between them with spaces.
///
/// The slack `budget - content` is split evenly across the gaps and the last
/// gap takes the remainder. Each gap uses the highlight of the fragment
/// drawn before it, or `default_hl` before anything is drawn.
pub(crate) fn assemble(
	sections: &[Vec<Option<Fragment>>],
	budget: usize,
	default_hl: impl Fn() -> HighlightHandle,
) -> RenderedLine {
	let gaps = sections.len().saturating_sub(1);
	let slack = budget.saturating_sub(content_width(sections));
	let (per_gap, remainder) = match gaps {
		0 => (0, 0),
		n => (slack / n, slack % n),
	};

	let mut line = RenderedLine::default();
	let mut inherited: Option<&HighlightHandle> = None;
	// Only registered once a gap is actually drawn before any fragment.
	let mut fallback: Option<HighlightHandle> = None;
	for (index, section) in sections.iter().enumerate() {
		if index > 0 {
			let fill = if index == gaps { per_gap + remainder } else { per_gap };
			if fill > 0 {
				let hl = match inherited {
					Some(hl) => hl,
					None => &*fallback.get_or_insert_with(&default_hl),
				};
				line.push(&" ".repeat(fill), fill, hl);
			}
		}
		for fragment in section.iter().flatten() {
			for piece in &fragment.pieces {
				line.push(&piece.text, piece.width, &piece.hl);
			}
			inherited = Some(fragment.trailing_hl());
		}
	}
	line
}
