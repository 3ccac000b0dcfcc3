use ratatui::style::Color;

pub const BRAND_PRIMARY: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const BRAND_SECONDARY: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SURFACE: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const SURFACE_RAISED: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const TEXT_MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
