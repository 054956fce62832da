use coolor::{Hsl, Rgb};
use ratatui::style::Color;

/// Converts between ratatui colors and HSL for shading.
pub struct ColorConverter;

impl ColorConverter {
    /// Approximates a terminal color as RGB.
    #[must_use]
    pub fn to_rgb(color: Color) -> Rgb {
        let (r, g, b) = match color {
            Color::Rgb(r, g, b) => (r, g, b),
            Color::Black => (0, 0, 0),
            Color::Red => (170, 0, 0),
            Color::Green => (0, 170, 0),
            Color::Yellow => (170, 85, 0),
            Color::Blue => (0, 0, 170),
            Color::Magenta => (170, 0, 170),
            Color::Cyan => (0, 170, 170),
            Color::Gray => (170, 170, 170),
            Color::DarkGray => (85, 85, 85),
            Color::LightGreen => (85, 255, 85),
            Color::LightCyan => (85, 255, 255),
            _ => (255, 255, 255),
        };
        Rgb::new(r, g, b)
    }

    /// Converts to HSL.
    #[must_use]
    pub fn to_hsl(color: Color) -> Hsl {
        Self::to_rgb(color).to_hsl()
    }

    /// Converts back to a ratatui color.
    #[must_use]
    pub fn to_ratatui(hsl: Hsl) -> Color {
        let rgb: Rgb = hsl.to_rgb();
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    /// Darkens `color` as if drawn at `opacity` over a black background.
    #[must_use]
    pub fn faded(color: Color, opacity: f32) -> Color {
        let mut hsl = Self::to_hsl(color);
        hsl.l *= opacity.clamp(0.0, 1.0);
        Self::to_ratatui(hsl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_round_trip() {
        let original = Color::Rgb(0, 163, 122);
        let back = ColorConverter::to_ratatui(ColorConverter::to_hsl(original));

        let Color::Rgb(r, g, b) = back else {
            panic!("Expected RGB color");
        };
        assert!(i16::from(r).abs() <= 1);
        assert!((i16::from(g) - 163).abs() <= 1);
        assert!((i16::from(b) - 122).abs() <= 1);
    }

    #[test]
    fn test_faded_is_darker() {
        let full = ColorConverter::to_hsl(Color::Rgb(200, 200, 200));
        let faded = ColorConverter::to_hsl(ColorConverter::faded(Color::Rgb(200, 200, 200), 0.6));

        assert!(faded.l < full.l);
    }
}
