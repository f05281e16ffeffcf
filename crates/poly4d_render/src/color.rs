//! Colors and the face palette

/// 8-bit RGBA color, sRGB encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const RED: Color = Color::rgb(230, 41, 55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Components scaled to `[0, 1]`, still sRGB encoded
    pub fn to_srgb_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Components in linear space, for sRGB render targets
    ///
    /// Alpha is not gamma encoded and is only rescaled.
    pub fn to_linear_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_srgb_f32();
        [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b), a]
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Fill colors for faces, picked by face index
pub const FACE_PALETTE: [Color; 24] = [
    Color::rgb(255, 0, 0),     // red
    Color::rgb(0, 255, 0),     // green
    Color::rgb(0, 0, 255),     // blue
    Color::rgb(255, 255, 0),   // yellow
    Color::rgb(255, 165, 0),   // orange
    Color::rgb(128, 0, 128),   // purple
    Color::rgb(0, 191, 255),   // sky blue
    Color::rgb(255, 192, 203), // pink
    Color::rgb(50, 205, 50),   // lime green
    Color::rgb(255, 215, 0),   // gold
    Color::rgb(138, 43, 226),  // violet
    Color::rgb(165, 42, 42),   // brown
    Color::rgb(245, 245, 220), // beige
    Color::rgb(255, 0, 255),   // magenta
    Color::rgb(128, 0, 0),     // maroon
    Color::rgb(0, 100, 0),     // dark green
    Color::rgb(0, 0, 139),     // dark blue
    Color::rgb(139, 0, 139),   // dark purple
    Color::rgb(101, 67, 33),   // dark brown
    Color::rgb(169, 169, 169), // dark gray
    Color::rgb(211, 211, 211), // light gray
    Color::rgb(245, 245, 245), // almost white
    Color::rgb(128, 128, 128), // gray
    Color::rgb(255, 255, 255), // white
];

/// Palette entry for a face, cycling when there are more faces than colors
#[inline]
pub fn palette_color(face_index: usize) -> Color {
    FACE_PALETTE[face_index % FACE_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), Color::rgb(255, 0, 0));
        assert_eq!(palette_color(23), Color::WHITE);
        assert_eq!(palette_color(24), palette_color(0));
        assert_eq!(palette_color(50), palette_color(2));
    }

    #[test]
    fn test_palette_is_opaque() {
        assert!(FACE_PALETTE.iter().all(|c| c.a == 255));
    }

    #[test]
    fn test_srgb_scaling() {
        assert_eq!(Color::WHITE.to_srgb_f32(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::rgba(0, 0, 0, 0).to_srgb_f32(), [0.0; 4]);
    }

    #[test]
    fn test_linear_conversion() {
        let [r, g, b, a] = Color::rgba(255, 128, 0, 128).to_linear_f32();
        assert!((r - 1.0).abs() < 1e-5);
        assert!((g - 0.2158).abs() < 1e-3);
        assert_eq!(b, 0.0);
        // Alpha stays linear
        assert!((a - 128.0 / 255.0).abs() < 1e-6);
    }
}
