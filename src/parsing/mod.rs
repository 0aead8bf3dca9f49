pub mod config;
pub mod scene;

use config::{Config, TOMLConfig};
use scene::SceneData;

use crate::scene::Scene;

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub type Point3Data = [f32; 3];
pub type RGBData = [f32; 3];

fn load_arbitrary<T>(filepath: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    info!("loading file at {}", filepath.to_string_lossy());
    let mut input = String::new();

    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("failed to read {}", filepath.to_string_lossy()))?;

    let data: T = toml::from_str(&input)
        .with_context(|| format!("failed to parse {}", filepath.to_string_lossy()))?;
    Ok(data)
}

/// parses a config file, filling in the thread count with the number of cpus where omitted.
pub fn parse_settings(input: &str) -> Result<TOMLConfig> {
    let settings: TOMLConfig = toml::from_str(input)?;
    Ok(fill_defaults(settings))
}

pub fn get_settings(filepath: impl Into<PathBuf>) -> Result<TOMLConfig> {
    let settings: TOMLConfig = load_arbitrary(&filepath.into())?;
    Ok(fill_defaults(settings))
}

fn fill_defaults(mut settings: TOMLConfig) -> TOMLConfig {
    let num_cpus = num_cpus::get();
    for render_settings in settings.render_settings.iter_mut() {
        render_settings.threads = match render_settings.threads {
            Some(expr) => Some(expr),
            None => Some(num_cpus as u16),
        };
    }
    settings
}

pub fn validate_config(config: &Config) -> Result<()> {
    for (i, render_settings) in config.render_settings.iter().enumerate() {
        render_settings
            .validate()
            .with_context(|| format!("invalid render_settings entry {}", i))?;
    }
    Ok(())
}

/// parses and validates a scene description
pub fn parse_scene(input: &str) -> Result<Scene> {
    let data: SceneData = toml::from_str(input)?;
    let scene = Scene::from(data);
    scene.validate()?;
    Ok(scene)
}

pub fn construct_scene(filepath: impl Into<PathBuf>) -> Result<Scene> {
    let filepath = filepath.into();
    let data: SceneData = load_arbitrary(&filepath)?;
    let scene = Scene::from(data);
    scene
        .validate()
        .with_context(|| format!("invalid scene in {}", filepath.to_string_lossy()))?;
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::config::{RendererType, Resolution};
    use super::*;

    use crate::math::*;

    const DEMO_SCENE: &str = r#"
[sphere]
center = [0.0, 0.0, -4.0]
radius = 2.0

[light]
position = [0.0, 4.0, 0.0]

[camera]
origin = [0.0, 0.0, 4.0]
top_left = [-2.0, 2.0, 0.0]
top_right = [2.0, 2.0, 0.0]
bottom_left = [-2.0, -2.0, 0.0]
bottom_right = [2.0, -2.0, 0.0]

[material]
ambient = [0.1, 0.0, 0.0]
diffuse = [1.0, 0.0, 0.0]
specular = [1.0, 1.0, 1.0]
"#;

    #[test]
    fn test_parsing_scene() {
        let scene = parse_scene(DEMO_SCENE).unwrap();
        assert_eq!(scene, Scene::intersection_demo());
    }

    #[test]
    fn test_parsing_scene_with_overrides() {
        let input = format!(
            "background = [0.0, 0.0, 0.25]\n{}",
            DEMO_SCENE.replace("specular = [1.0, 1.0, 1.0]", "specular = [1.0, 1.0, 1.0]\nshininess = 64.0")
        );
        let scene = parse_scene(&input).unwrap();
        assert_eq!(scene.background, RGBColor::new(0.0, 0.0, 0.25));
        assert_eq!(scene.material.shininess, 64.0);
    }

    #[test]
    fn test_parsing_invalid_scene() {
        let input = DEMO_SCENE.replace("radius = 2.0", "radius = -1.0");
        assert!(parse_scene(&input).is_err());
        let input = DEMO_SCENE.replace("origin = [0.0, 0.0, 4.0]", "origin = [0.5, 0.5, 0.0]");
        assert!(parse_scene(&input).is_err());
        assert!(parse_scene("[sphere]\nradius = 1.0").is_err());
    }

    #[test]
    fn test_parsing_config() {
        let input = r#"
default_scene_file = "data/scenes/intersection_demo.toml"
renderer = { type = "Rows" }

[[render_settings]]
filename = "intersection_demo"
resolution = { width = 1024, height = 1024 }
exr = true

[[render_settings]]
resolution = { width = 64, height = 32 }
threads = 2
"#;
        let config = Config::from(parse_settings(input).unwrap());
        assert_eq!(config.renderer, RendererType::Rows);
        assert_eq!(config.scene_file, "data/scenes/intersection_demo.toml");
        assert_eq!(config.render_settings.len(), 2);

        let first = &config.render_settings[0];
        assert_eq!(first.filename.as_deref(), Some("intersection_demo"));
        assert!(first.exr);
        assert!(first.threads.unwrap() > 0);

        let second = &config.render_settings[1];
        assert_eq!(
            second.resolution,
            Resolution {
                width: 64,
                height: 32
            }
        );
        assert_eq!(second.threads, Some(2));
        assert!(!second.exr);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_shipped_config_and_scene() {
        let config = Config::from(get_settings("data/config.toml").unwrap());
        assert!(validate_config(&config).is_ok());
        for settings in &config.render_settings {
            assert!(settings.filename.is_some());
            assert!(settings.threads.unwrap() > 0);
        }
        let scene = construct_scene(&config.scene_file).unwrap();
        assert_eq!(scene, Scene::intersection_demo());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(get_settings("data/does_not_exist.toml").is_err());
        assert!(construct_scene("data/does_not_exist.toml").is_err());
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let input = r#"
default_scene_file = "scene.toml"
renderer = { type = "Naive" }

[[render_settings]]
resolution = { width = 0, height = 32 }
"#;
        let config = Config::from(parse_settings(input).unwrap());
        assert!(validate_config(&config).is_err());
    }
}
