use super::{sample_pixel, Film, Renderer};

use crate::profile::Profile;
use crate::scene::Scene;

use rayon::prelude::*;

#[derive(Default, Copy, Clone, Debug)]
pub struct NaiveRenderer {}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {}
    }
}

impl Renderer for NaiveRenderer {
    fn render_into(&self, scene: &Scene, film: &mut Film) -> Profile {
        let (width, height) = (film.width(), film.height());
        if width == 0 || height == 0 {
            return Profile::default();
        }
        let image = &mut film.image.buffer;
        let radiance = &mut film.radiance.buffer;
        image
            .par_iter_mut()
            .zip(radiance.par_iter_mut())
            .enumerate()
            .map(|(pixel_index, (pixel_ref, radiance_ref))| {
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;

                let sample = sample_pixel(scene, x, y, width, height);
                debug_assert!(
                    !sample.radiance.r.is_nan(),
                    "nan radiance at ({}, {})",
                    x,
                    y
                );
                *pixel_ref = sample.pixel();
                *radiance_ref = sample.radiance;

                sample.profile()
            })
            .reduce(Profile::default, |a, b| a.combine(b))
    }
}
