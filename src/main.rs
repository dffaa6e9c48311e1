//! Render a sphere scene to a PNG
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use cornell_tracer::{config::RenderConfig, render, scene::Scene};
use indicatif::ProgressBar;
use log::info;

mod cli;
mod logger;
use cli::{Args, BuiltinScene};
use logger::init_logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let mut config = match &args.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load render file {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(width) = args.width {
        config.camera.image_width = width;
    }
    if let Some(max_depth) = args.max_depth {
        config.trace.max_depth = max_depth;
    }
    config.trace.fresnel |= args.fresnel;

    let (camera, mut scene) = config.build().context("invalid render file")?;
    if args.config.is_none() {
        scene = match args.scene {
            BuiltinScene::Cornell => Scene::cornell_box(),
            BuiltinScene::Scattered => Scene::scattered(args.seed, args.balls),
        };
    }

    info!(
        "Rendering {}x{}, depth {}, {} objects, {} lights",
        camera.image_width(),
        camera.image_height(),
        config.trace.max_depth,
        scene.objects().len(),
        scene.lights().len()
    );

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(camera.image_height() as u64)
    };
    let start = Instant::now();
    let image = render::render(&camera, &scene, &config.trace, &bar);
    info!("Rendered in {:.2?}", start.elapsed());

    image
        .save(&args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("Wrote {}", args.output.display());
    Ok(())
}
