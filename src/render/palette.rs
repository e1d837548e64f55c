//! Shared read-only colors.

use crate::render::Color;

pub const PRIMARY: Color = Color::from_rgb8(0x0e, 0xa5, 0xe9);
pub const PRIMARY_DARK: Color = Color::from_rgb8(0x02, 0x84, 0xc7);
pub const SUCCESS: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
pub const WARNING: Color = Color::from_rgb8(0xf5, 0x9e, 0x0b);
pub const DANGER: Color = Color::from_rgb8(0xef, 0x44, 0x44);
pub const PURPLE: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);
pub const PINK: Color = Color::from_rgb8(0xec, 0x48, 0x99);
pub const TEAL: Color = Color::from_rgb8(0x14, 0xb8, 0xa6);
pub const INDIGO: Color = Color::from_rgb8(0x63, 0x66, 0xf1);

/// Categorical palette, cycled by ordinal color scales.
pub const CATEGORICAL: [Color; 8] = [
    PRIMARY, SUCCESS, WARNING, DANGER, PURPLE, PINK, TEAL, INDIGO,
];

pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
pub const TEXT: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
pub const TEXT_SECONDARY: Color = Color::from_rgb8(0x6b, 0x72, 0x80);
pub const AXIS: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub const GAUGE_TRACK: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
