use raylib::prelude::Color;

pub const BLUE_600: Color = Color::new(0x25, 0x63, 0xEB, 0xFF);
pub const YELLOW_300: Color = Color::new(0xFD, 0xE0, 0x47, 0xFF);
pub const YELLOW_400: Color = Color::new(0xFA, 0xCC, 0x15, 0xFF);
pub const PINK_400: Color = Color::new(0xF4, 0x72, 0xB6, 0xFF);
pub const PINK_500: Color = Color::new(0xEC, 0x48, 0x99, 0xFF);
pub const TEAL_300: Color = Color::new(0x5E, 0xEA, 0xD4, 0xFF);
pub const ORANGE_400: Color = Color::new(0xFB, 0x92, 0x3C, 0xFF);
pub const LIME_300: Color = Color::new(0xBE, 0xF2, 0x64, 0xFF);
pub const SKY_100: Color = Color::new(0xE0, 0xF2, 0xFE, 0xFF);
pub const SKY_300: Color = Color::new(0x7D, 0xD3, 0xFC, 0xFF);
pub const ROSE_400: Color = Color::new(0xFB, 0x71, 0x85, 0xFF);
pub const AMBER_300: Color = Color::new(0xFC, 0xD3, 0x4D, 0xFF);
pub const SLATE_300: Color = Color::new(0xCB, 0xD5, 0xE1, 0xFF);
pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF, 0xFF);

/// `color` with its alpha multiplied by `opacity`.
pub fn faded(color: Color, opacity: f32) -> Color {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, alpha)
}
