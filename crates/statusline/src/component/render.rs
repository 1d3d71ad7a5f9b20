//! Rendering one component into a [`Fragment`].

use bezel_primitives::{Color, Style, display_width};

use super::{Component, Fragment, Icon, Piece, RenderMode, Separator};
use crate::highlight::{HighlightCache, HighlightHandle, HighlightSpec};
use crate::value::{ComponentView, ProviderOutput, Resolver, Scope, Value};

/// Renders components against one render scope.
pub(crate) struct Renderer<'a> {
	scope: &'a Scope<'a>,
	cache: &'a HighlightCache,
}

impl<'a> Renderer<'a> {
	pub(crate) fn new(scope: &'a Scope<'a>, cache: &'a HighlightCache) -> Self {
		Self { scope, cache }
	}

	/// Renders `component`, or `None` when it is disabled.
	pub(crate) fn render(&self, component: &Component, mode: RenderMode) -> Option<Fragment> {
		self.enabled(component)
			.then(|| self.render_fragment(component, mode))
	}

	/// Resolves `enabled`. Omitted means enabled; any failure disables.
	pub(crate) fn enabled(&self, component: &Component) -> bool {
		let resolver = Resolver::new(self.scope, component.name.as_deref());
		let view = base_view(component, RenderMode::Full);
		match resolver.attr("enabled", component.enabled.as_ref(), &view, None) {
			Ok(Some(enabled)) => enabled,
			Ok(None) => true,
			Err(_) => false,
		}
	}

	/// Renders an enabled component with the provider selected by `mode`.
	pub(crate) fn render_fragment(&self, component: &Component, mode: RenderMode) -> Fragment {
		let resolver = Resolver::new(self.scope, component.name.as_deref());
		let presets = self.scope.presets;
		let view = base_view(component, mode);

		let provider = match mode {
			RenderMode::Full => component.provider.as_ref(),
			RenderMode::Short => component.short_provider.as_ref().or(component.provider.as_ref()),
		};
		let output: ProviderOutput = resolver
			.attr("provider", provider, &view, Some(&component.provider_opts))
			.ok()
			.flatten()
			.unwrap_or_default();
		let text = output.text;
		let view = ComponentView {
			text: Some(&text),
			..view
		};

		let spec = resolver
			.attr("hl", component.hl.as_ref(), &view, None)
			.ok()
			.flatten()
			.unwrap_or_default();
		let style = self.style(&resolver, &spec, presets.color("fg"), presets.color("bg"));
		let hl = self.cache.get_or_create(style, spec.name.as_deref());
		// A name registered earlier keeps its colors; defaults derive from those.
		let style = self.cache.lookup(&hl).unwrap_or(style);
		let view = ComponentView {
			hl: Some(&style),
			..view
		};

		let mut pieces = Vec::new();
		for sep in &component.left_sep {
			pieces.extend(self.separator(&resolver, "left_sep", sep, &view, &text, &style));
		}

		let icon = resolver
			.attr("icon", component.icon.as_ref(), &view, None)
			.ok()
			.flatten()
			.or(output.icon);
		if let Some(icon) = icon
			&& (icon.always_visible || !text.is_empty())
		{
			pieces.extend(self.icon(&resolver, &icon, &view, &style, &hl));
		}

		if !text.is_empty() {
			pieces.push(piece(text.clone(), hl.clone()));
		}

		for sep in &component.right_sep {
			pieces.extend(self.separator(&resolver, "right_sep", sep, &view, &text, &style));
		}

		let width = pieces.iter().map(|piece| piece.width).sum();
		Fragment { pieces, hl, width }
	}

	fn icon(
		&self,
		resolver: &Resolver<'_>,
		icon: &Icon,
		view: &ComponentView<'_>,
		style: &Style,
		component_hl: &HighlightHandle,
	) -> Option<Piece> {
		let glyph = self.scope.presets.separator_or_literal(&icon.text);
		if glyph.is_empty() {
			return None;
		}
		let hl = match resolver.attr("icon.hl", icon.hl.as_ref(), view, None) {
			Ok(Some(spec)) => {
				let icon_style = self.style(resolver, &spec, style.fg, style.bg);
				self.cache.get_or_create(icon_style, spec.name.as_deref())
			}
			_ => component_hl.clone(),
		};
		Some(piece(glyph.to_string(), hl))
	}

	fn separator(
		&self,
		resolver: &Resolver<'_>,
		attr: &'static str,
		value: &Value<Separator>,
		view: &ComponentView<'_>,
		text: &str,
		parent: &Style,
	) -> Option<Piece> {
		let sep = resolver.attr(attr, Some(value), view, None).ok().flatten()?;
		if text.is_empty() && !sep.always_visible {
			return None;
		}
		let glyph = self.scope.presets.separator_or_literal(&sep.text);
		if glyph.is_empty() {
			return None;
		}

		let spec = resolver
			.attr("sep.hl", sep.hl.as_ref(), view, None)
			.ok()
			.flatten()
			.unwrap_or_default();
		let style = self.style(resolver, &spec, parent.bg, self.scope.presets.color("bg"));
		let hl = self.cache.get_or_create(style, spec.name.as_deref());
		Some(piece(glyph.to_string(), hl))
	}

	/// Fills the unset colors of `spec` with the given defaults.
	fn style(&self, resolver: &Resolver<'_>, spec: &HighlightSpec, fg: Option<Color>, bg: Option<Color>) -> Style {
		Style {
			fg: spec.fg.as_ref().and_then(|color| resolver.color(color)).or(fg),
			bg: spec.bg.as_ref().and_then(|color| resolver.color(color)).or(bg),
			modifiers: spec.style,
		}
	}
}

fn base_view(component: &Component, mode: RenderMode) -> ComponentView<'_> {
	ComponentView {
		name: component.name.as_deref(),
		priority: component.priority,
		truncate_hide: component.truncate_hide,
		short: mode == RenderMode::Short,
		opts: &component.provider_opts,
		text: None,
		hl: None,
	}
}

fn piece(text: String, hl: HighlightHandle) -> Piece {
	let width = display_width(&text);
	Piece { text, hl, width }
}
