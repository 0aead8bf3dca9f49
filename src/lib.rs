#[macro_use]
extern crate tracing;

pub mod camera;
pub mod geometry;
pub mod hittable;
pub mod light;
pub mod materials;
pub mod math;
pub mod output;
pub mod parsing;
pub mod prelude;
pub mod profile;
pub mod renderer;
pub mod scene;
