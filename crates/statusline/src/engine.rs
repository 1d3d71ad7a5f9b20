//! The statusline facade: tree selection, rendering and cache lifecycle.

use std::sync::Arc;

use bezel_primitives::Style;

use crate::component::{Fragment, RenderMode, Renderer};
use crate::config::StatuslineConfig;
use crate::context::RenderContext;
use crate::error::ConfigError;
use crate::highlight::{HighlightCache, HighlightHandle};
use crate::layout::{RenderedLine, StatuslineTree, TreeKind, assemble, content_width};
use crate::presets::Presets;
use crate::rules::WindowRules;
use crate::truncate::{Slot, TruncState, truncate};
use crate::value::Scope;

/// A configured statusline, shared by every window of a host.
///
/// Rendering takes `&self`; the only state shared across renders is the
/// [`HighlightCache`].
#[derive(Debug)]
pub struct Statusline {
	tree: StatuslineTree,
	presets: Presets,
	force_inactive: WindowRules,
	disable: WindowRules,
	reset_triggers: Vec<String>,
	truncation: bool,
	highlights: Arc<HighlightCache>,
}

impl Statusline {
	/// Compiles the window rules of `config`.
	///
	/// `presets` is usually [`Presets::from_config`] of the same config.
	pub fn new(
		tree: StatuslineTree,
		presets: Presets,
		config: &StatuslineConfig,
		highlights: Arc<HighlightCache>,
	) -> Result<Self, ConfigError> {
		Ok(Self {
			tree,
			presets,
			force_inactive: WindowRules::compile(&config.force_inactive)?,
			disable: WindowRules::compile(&config.disable)?,
			reset_triggers: config.highlight_reset_triggers.clone(),
			truncation: config.truncation,
			highlights,
		})
	}

	/// Tree a window renders, or `None` when its statusline is disabled.
	pub fn select(&self, ctx: &RenderContext<'_>) -> Option<TreeKind> {
		if self.disable.matches(ctx.host) {
			tracing::trace!(window = ?ctx.window, "Statusline disabled for window");
			return None;
		}
		let forced = self.force_inactive.matches(ctx.host);
		let kind = if ctx.active && !forced {
			TreeKind::Active
		} else {
			TreeKind::Inactive
		};
		tracing::trace!(window = ?ctx.window, active = ctx.active, forced, ?kind, "Selected statusline tree");
		Some(kind)
	}

	/// Renders the statusline for one window.
	///
	/// Never fails: component errors are logged and degrade that component
	/// only. The result may still exceed `ctx.width` when truncation runs
	/// out of candidates.
	pub fn render(&self, ctx: &RenderContext<'_>) -> RenderedLine {
		let Some(kind) = self.select(ctx) else {
			return RenderedLine::default();
		};
		let sections = self.tree.sections(kind);
		let scope = Scope::new(ctx, &self.presets);
		let renderer = Renderer::new(&scope, &self.highlights);

		let mut fragments: Vec<Vec<Option<Fragment>>> = Vec::with_capacity(sections.len());
		let mut slots = Vec::new();
		let mut positions = Vec::new();
		for (s, section) in sections.iter().enumerate() {
			let mut rendered = Vec::with_capacity(section.components.len());
			for (c, component) in section.components.iter().enumerate() {
				let fragment = renderer.render(component, RenderMode::Full);
				if fragment.is_some() {
					slots.push(Slot::new(
						component.priority,
						component.short_provider.is_some(),
						component.truncate_hide,
					));
					positions.push((s, c));
				}
				rendered.push(fragment);
			}
			fragments.push(rendered);
		}

		let width = content_width(&fragments);
		if self.truncation && width > ctx.width {
			let mut total = width;
			truncate(&mut slots, ctx.width, width, |index, to| {
				let (s, c) = positions[index];
				let component = &sections[s].components[c];
				let fragment = match to {
					TruncState::Full => Some(renderer.render_fragment(component, RenderMode::Full)),
					TruncState::Short => Some(renderer.render_fragment(component, RenderMode::Short)),
					TruncState::Hidden => None,
				};
				let old = fragments[s][c].as_ref().map_or(0, |f| f.width);
				total = total - old + fragment.as_ref().map_or(0, |f| f.width);
				fragments[s][c] = fragment;
				total
			});
		}

		assemble(&fragments, ctx.width, || self.default_highlight())
	}

	/// Highlight for gaps before any component has been drawn.
	fn default_highlight(&self) -> HighlightHandle {
		let style = Style {
			fg: self.presets.color("fg"),
			bg: self.presets.color("bg"),
			..Style::new()
		};
		self.highlights.get_or_create(style, None)
	}

	/// Clears the highlight cache; entries come back on the next render.
	pub fn reset_highlights(&self) {
		self.highlights.reset();
	}

	/// Resets the highlight cache if `event` is a configured trigger.
	pub fn notify_event(&self, event: &str) -> bool {
		let triggered = self.reset_triggers.iter().any(|trigger| trigger == event);
		if triggered {
			tracing::debug!(event, "Highlight reset triggered");
			self.reset_highlights();
		}
		triggered
	}

	pub fn highlights(&self) -> &Arc<HighlightCache> {
		&self.highlights
	}
}
