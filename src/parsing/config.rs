use anyhow::{ensure, Result};
use serde::Deserialize;

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: usize,
    pub height: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RenderSettings {
    pub filename: Option<String>,
    pub output_directory: Option<String>, // defaults to "output"
    pub resolution: Resolution,
    pub threads: Option<u16>,
    // also write the unclamped linear radiance as exr
    #[serde(default)]
    pub exr: bool,
}

impl RenderSettings {
    pub fn new(width: usize, height: usize) -> Self {
        RenderSettings {
            filename: None,
            output_directory: None,
            resolution: Resolution { width, height },
            threads: None,
            exr: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.resolution.width > 0 && self.resolution.height > 0,
            "resolution must be non-zero, got {}x{}",
            self.resolution.width,
            self.resolution.height
        );
        Ok(())
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RendererType {
    // one parallel task per pixel
    Naive,
    // one parallel task per row
    Rows,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TOMLConfig {
    pub default_scene_file: String,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub scene_file: String,
    pub renderer: RendererType,
    pub render_settings: Vec<RenderSettings>,
}

impl From<TOMLConfig> for Config {
    fn from(data: TOMLConfig) -> Self {
        Config {
            scene_file: data.default_scene_file,
            renderer: data.renderer,
            render_settings: data.render_settings,
        }
    }
}
