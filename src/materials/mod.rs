mod phong;

pub use phong::{Phong, DEFAULT_SHININESS};
