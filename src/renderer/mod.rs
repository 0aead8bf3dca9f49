use crate::hittable::Hittable;
use crate::math::*;
use crate::parsing::config::{RenderSettings, RendererType};
use crate::profile::Profile;
use crate::scene::Scene;

mod film;
mod naive;
mod rows;
mod vec2d;

pub use film::Film;
pub use naive::NaiveRenderer;
pub use rows::RowRenderer;
pub use vec2d::Vec2D;

use std::time::Instant;

/// result of tracing the single camera ray of one pixel
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PixelSample {
    pub radiance: RGBColor,
    pub hit: bool,
}

impl PixelSample {
    /// the framebuffer value: clamped and fully opaque
    pub fn pixel(&self) -> RGBAColor {
        RGBAColor::opaque(self.radiance.clamped())
    }

    pub fn profile(&self) -> Profile {
        Profile::new(
            1,
            self.hit as usize,
            !self.hit as usize,
            (self.hit && !self.radiance.is_in_gamut()) as usize,
        )
    }
}

/// shades pixel (x, y) of a width x height raster. row 0 maps to the top edge of the image plane.
pub fn sample_pixel(scene: &Scene, x: usize, y: usize, width: usize, height: usize) -> PixelSample {
    let s = x as f32 / width as f32;
    let t = y as f32 / height as f32;
    let ray = scene.camera.get_ray(s, t);
    match scene.sphere.hit(ray) {
        Some(record) => PixelSample {
            radiance: scene.material.shade(
                scene.camera.origin,
                &scene.light,
                record.point,
                record.normal,
            ),
            hit: true,
        },
        None => PixelSample {
            radiance: scene.background,
            hit: false,
        },
    }
}

pub trait Renderer {
    // fills every pixel of `film` exactly once
    fn render_into(&self, scene: &Scene, film: &mut Film) -> Profile;

    fn render(&self, scene: &Scene, settings: &RenderSettings) -> Film {
        let (width, height) = (settings.resolution.width, settings.resolution.height);
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();

        let mut film = Film::new(width, height);
        let stats = self.render_into(scene, &mut film);

        let elapsed = (now.elapsed().as_millis() as f32) / 1000.0;
        info!("took {}s", elapsed);
        stats.pretty_print(elapsed.max(f32::EPSILON), rayon::current_num_threads());
        film
    }
}

pub fn construct_renderer(renderer: RendererType) -> Box<dyn Renderer> {
    match renderer {
        RendererType::Naive => Box::new(NaiveRenderer::new()),
        RendererType::Rows => Box::new(RowRenderer::new()),
    }
}
