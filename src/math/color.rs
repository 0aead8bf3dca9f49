use std::ops::{Add, AddAssign, Mul};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const BLACK: RGBColor = RGBColor::new(0.0, 0.0, 0.0);
    pub const WHITE: RGBColor = RGBColor::new(1.0, 1.0, 1.0);

    /// clamps every channel into [0, 1]. NaN channels become 0.
    pub fn clamped(&self) -> RGBColor {
        // f32::max returns the non-NaN operand, so this is deterministic for NaN as well
        RGBColor::new(
            self.r.max(0.0).min(1.0),
            self.g.max(0.0).min(1.0),
            self.b.max(0.0).min(1.0),
        )
    }

    pub fn is_in_gamut(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    pub fn max_channel(&self) -> f32 {
        self.r.max(self.g).max(self.b)
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(c: [f32; 3]) -> RGBColor {
        RGBColor::new(c[0], c[1], c[2])
    }
}

/// a framebuffer pixel. channels are normalized floats in [0, 1]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RGBAColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RGBAColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> RGBAColor {
        RGBAColor { r, g, b, a }
    }
    pub const TRANSPARENT: RGBAColor = RGBAColor::new(0.0, 0.0, 0.0, 0.0);

    pub const fn opaque(color: RGBColor) -> RGBAColor {
        RGBAColor::new(color.r, color.g, color.b, 1.0)
    }

    pub fn rgb(&self) -> RGBColor {
        RGBColor::new(self.r, self.g, self.b)
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

fn quantize(channel: f32) -> u8 {
    (channel.max(0.0).min(1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        let hot = RGBColor::new(1.7, -0.2, 0.5);
        assert_eq!(hot.clamped(), RGBColor::new(1.0, 0.0, 0.5));
        assert!(!hot.is_in_gamut());
        assert!(hot.clamped().is_in_gamut());

        let nan = RGBColor::new(f32::NAN, 0.25, f32::INFINITY);
        assert_eq!(nan.clamped(), RGBColor::new(0.0, 0.25, 1.0));
    }

    #[test]
    fn test_quantization() {
        let pixel = RGBAColor::new(1.0, 0.5, 0.0, 1.0);
        assert_eq!(pixel.to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(RGBAColor::opaque(RGBColor::BLACK).to_rgba8(), [0, 0, 0, 255]);
    }
}
