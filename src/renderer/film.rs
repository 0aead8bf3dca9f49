use super::Vec2D;

use crate::math::{RGBAColor, RGBColor};

/// output of one render. `image` is what gets displayed, `radiance` keeps the unclamped shading.
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    pub image: Vec2D<RGBAColor>,
    pub radiance: Vec2D<RGBColor>,
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Film {
            image: Vec2D::new(width, height, RGBAColor::TRANSPARENT),
            radiance: Vec2D::new(width, height, RGBColor::BLACK),
        }
    }

    pub fn width(&self) -> usize {
        self.image.width
    }

    pub fn height(&self) -> usize {
        self.image.height
    }
}
