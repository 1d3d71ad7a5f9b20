//! Cursor position and scroll progress.

use crate::value::{ComponentView, ProviderOpts, ProviderOutput, Scope};

const SCROLL_BLOCKS: [&str; 8] = [
	"\u{2581}", "\u{2582}", "\u{2583}", "\u{2584}", "\u{2585}", "\u{2586}", "\u{2587}", "\u{2588}",
];

/// `line:col`; opt `padding` right-aligns the line to 3 columns and
/// left-aligns the column to 2.
pub(super) fn position(scope: &Scope<'_>, _: &ComponentView<'_>, opts: &ProviderOpts) -> ProviderOutput {
	let (line, col) = scope.host().cursor();
	if opts.get_bool("padding").unwrap_or(false) {
		ProviderOutput::new(format!("{line:>3}:{col:<2}"))
	} else {
		ProviderOutput::new(format!("{line}:{col}"))
	}
}

/// `Top`, `Bot`, or the cursor's percentage through the buffer.
pub(super) fn line_percentage(scope: &Scope<'_>, _: &ComponentView<'_>, _: &ProviderOpts) -> ProviderOutput {
	let host = scope.host();
	let (line, _) = host.cursor();
	let lines = host.line_count().max(1);

	if line <= 1 {
		ProviderOutput::new("Top")
	} else if line >= lines {
		ProviderOutput::new("Bot")
	} else {
		ProviderOutput::new(format!("{}%", line * 100 / lines))
	}
}

/// Two-column block glyph whose height tracks the cursor's progress.
/// Opt `reverse` inverts the direction.
pub(super) fn scroll_bar(scope: &Scope<'_>, _: &ComponentView<'_>, opts: &ProviderOpts) -> ProviderOutput {
	let host = scope.host();
	let (line, _) = host.cursor();
	let lines = host.line_count().max(1);
	let line = line.clamp(1, lines);

	let mut index = line * (SCROLL_BLOCKS.len() - 1) / lines;
	if opts.get_bool("reverse").unwrap_or(false) {
		index = SCROLL_BLOCKS.len() - 1 - index;
	}
	ProviderOutput::new(SCROLL_BLOCKS[index].repeat(2))
}
