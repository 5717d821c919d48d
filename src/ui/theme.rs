use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const TITLE_ACCENT: Color = Color::Rgb(0xd4, 0xa0, 0x3e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const DIM_TEXT: Color = Color::Rgb(0x8a, 0x8a, 0x8a);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
