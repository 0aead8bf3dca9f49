extern crate rust_raycaster as root;

use root::output::output_film;
use root::parsing::config::*;
use root::parsing::{construct_scene, get_settings, validate_config};
use root::prelude::*;

use std::process::ExitCode;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::{error, info, Level};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn run(opts: Opt) -> Result<()> {
    let toml_config: TOMLConfig = get_settings(&opts.config_file)
        .with_context(|| format!("couldn't read config file {}", opts.config_file))?;
    let mut config = Config::from(toml_config);
    // override scene file based on provided command line argument
    if let Some(scene_file) = opts.scene_file {
        config.scene_file = scene_file;
    }
    validate_config(&config)?;

    let threads = config
        .render_settings
        .iter()
        .map(|i| &i.threads)
        .fold(1, |a, &b| a.max(b.unwrap_or(1)));
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads as usize)
        .build_global()
        .context("failed to build the global thread pool")?;

    let scene = construct_scene(&config.scene_file).context("fatal error parsing scene")?;
    info!("scene: {:?}", scene);

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }

    let renderer = construct_renderer(config.renderer);
    for render_settings in config.render_settings.iter() {
        let film = renderer.render(&scene, render_settings);
        output_film(render_settings, &film)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::INFO))
        .init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
