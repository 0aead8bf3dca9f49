#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub camera_rays: usize,
    pub hits: usize,
    pub misses: usize,
    pub clamped_pixels: usize, // hits whose shaded color left [0, 1] before clamping
}

impl Profile {
    pub fn new(camera_rays: usize, hits: usize, misses: usize, clamped_pixels: usize) -> Self {
        Profile {
            camera_rays,
            hits,
            misses,
            clamped_pixels,
        }
    }
    pub fn combine(&self, other: Self) -> Self {
        Profile::new(
            self.camera_rays + other.camera_rays,
            self.hits + other.hits,
            self.misses + other.misses,
            self.clamped_pixels + other.clamped_pixels,
        )
    }

    pub fn pretty_print(&self, elapsed: f32, threads: usize) {
        let &Profile {
            camera_rays,
            hits,
            misses,
            clamped_pixels,
        } = self;
        info!(
            "{} total camera rays at {} per second and {} per second per thread",
            camera_rays,
            camera_rays as f32 / elapsed,
            camera_rays as f32 / elapsed / (threads as f32)
        );
        info!(
            "{} hits ({:.1}%), {} misses",
            hits,
            100.0 * hits as f32 / (camera_rays.max(1) as f32),
            misses
        );
        if clamped_pixels > 0 {
            info!("{} pixels were clamped into displayable range", clamped_pixels);
        }
    }
}
