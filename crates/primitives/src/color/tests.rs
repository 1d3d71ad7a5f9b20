use super::{Color, Modifier, Style};

#[test]
fn from_u32_unpacks_channels() {
	assert_eq!(Color::from_u32(0x1f_2e_3d), Color::Rgb(0x1f, 0x2e, 0x3d));
}

#[test]
fn display_uses_parseable_notation() {
	assert_eq!(Color::Rgb(255, 0, 16).to_string(), "#ff0010");
	assert_eq!(Color::Indexed(42).to_string(), "@42");
	assert_eq!(Color::LightBlue.to_string(), "lightblue");
	assert_eq!(Color::Reset.to_string(), "reset");
}

#[test]
fn modifier_display_lists_names_in_bit_order() {
	assert_eq!(Modifier::NONE.to_string(), "NONE");
	assert_eq!((Modifier::ITALIC | Modifier::BOLD).to_string(), "bold,italic");
}

#[test]
fn style_builders_accumulate() {
	let style = Style::new()
		.fg(Color::Red)
		.bg(Color::Black)
		.add_modifier(Modifier::BOLD)
		.add_modifier(Modifier::UNDERLINED);
	assert_eq!(style.fg, Some(Color::Red));
	assert_eq!(style.bg, Some(Color::Black));
	assert!(style.modifiers.contains(Modifier::BOLD | Modifier::UNDERLINED));
	assert!(!style.modifiers.contains(Modifier::ITALIC));
}
