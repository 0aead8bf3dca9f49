use crate::math::{RGBAColor, RGBColor};
use crate::parsing::config::RenderSettings;
use crate::renderer::{Film, Vec2D};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};

const DEFAULT_EXTENSION: &str = "png";

/// where the 8 bit image and the optional exr go for these settings
pub fn output_paths(render_settings: &RenderSettings) -> (PathBuf, PathBuf) {
    let directory = PathBuf::from(
        render_settings
            .output_directory
            .as_deref()
            .unwrap_or("output"),
    );
    let filename = render_settings.filename.as_deref().unwrap_or("beauty");

    let mut image_path = directory.join(filename);
    if image_path.extension().is_none() {
        image_path.set_extension(DEFAULT_EXTENSION);
    }
    let exr_path = image_path.with_extension("exr");
    (image_path, exr_path)
}

pub fn output_film(render_settings: &RenderSettings, film: &Film) -> Result<()> {
    let now = Instant::now();
    let (image_path, exr_path) = output_paths(render_settings);
    if let Some(parent) = image_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.to_string_lossy()))?;
    }

    if render_settings.exr {
        info!("saving exr image to {}", exr_path.to_string_lossy());
        write_exr(&film.radiance, &exr_path)?;
    }
    info!("saving image to {}", image_path.to_string_lossy());
    write_image(&film.image, &image_path)?;

    info!(
        "took {}s to output",
        (now.elapsed().as_millis() as f32) / 1000.0
    );
    Ok(())
}

pub fn to_rgba_image(film: &Vec2D<RGBAColor>) -> RgbaImage {
    RgbaImage::from_fn(film.width as u32, film.height as u32, |x, y| {
        image::Rgba(film.at(x as usize, y as usize).to_rgba8())
    })
}

/// 8 bit output, format chosen by the file extension. formats without alpha drop it.
pub fn write_image(film: &Vec2D<RGBAColor>, path: &Path) -> Result<()> {
    let img = to_rgba_image(film);
    let format = ImageFormat::from_path(path)
        .with_context(|| format!("unsupported image format for {}", path.to_string_lossy()))?;
    let result = match format {
        ImageFormat::Pnm => DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .save_with_format(path, format),
        _ => img.save_with_format(path, format),
    };
    result.with_context(|| format!("failed to write {}", path.to_string_lossy()))
}

/// linear, unclamped radiance
pub fn write_exr(film: &Vec2D<RGBColor>, path: &Path) -> Result<()> {
    exr::prelude::write_rgb_file(path, film.width, film.height, |x, y| {
        let color = film.at(x, y);
        (color.r, color.g, color.b)
    })
    .with_context(|| format!("failed to write {}", path.to_string_lossy()))
}
