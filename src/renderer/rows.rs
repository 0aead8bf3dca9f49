use super::{sample_pixel, Film, Renderer};

use crate::profile::Profile;
use crate::scene::Scene;

use rayon::prelude::*;

/// hands each worker whole rows. rows are disjoint slices of the buffers so no locking is needed.
#[derive(Default, Copy, Clone, Debug)]
pub struct RowRenderer {}

impl RowRenderer {
    pub fn new() -> RowRenderer {
        RowRenderer {}
    }
}

impl Renderer for RowRenderer {
    fn render_into(&self, scene: &Scene, film: &mut Film) -> Profile {
        let (width, height) = (film.width(), film.height());
        // an empty film has no rows, and rayon rejects a zero chunk size
        if width == 0 || height == 0 {
            return Profile::default();
        }
        let image = &mut film.image.buffer;
        let radiance = &mut film.radiance.buffer;
        image
            .par_chunks_mut(width)
            .zip(radiance.par_chunks_mut(width))
            .enumerate()
            .map(|(y, (image_row, radiance_row))| {
                let mut profile = Profile::default();
                for (x, (pixel_ref, radiance_ref)) in
                    image_row.iter_mut().zip(radiance_row.iter_mut()).enumerate()
                {
                    let sample = sample_pixel(scene, x, y, width, height);
                    *pixel_ref = sample.pixel();
                    *radiance_ref = sample.radiance;
                    profile = profile.combine(sample.profile());
                }
                profile
            })
            .reduce(Profile::default, |a, b| a.combine(b))
    }
}
