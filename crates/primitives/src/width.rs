use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `text` occupies.
#[inline]
pub fn display_width(text: &str) -> usize {
	UnicodeWidthStr::width(text)
}
