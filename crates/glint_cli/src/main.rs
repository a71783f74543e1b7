//! Render a preset scene to a PNG file.
//!
//! Usage: glint <scene-number> [width] [height] [plane-width]

mod scenes;

use anyhow::{bail, Context, Result};
use log::info;
use std::time::Instant;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 800;
const DEFAULT_PLANE_WIDTH: f64 = 4.0;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: glint <scene-number> [width] [height] [plane-width]");
    }

    let number: u32 = args[0]
        .parse()
        .with_context(|| format!("invalid scene number `{}`", args[0]))?;
    let width: u32 = match args.get(1) {
        Some(s) => s.parse().with_context(|| format!("invalid width `{s}`"))?,
        None => DEFAULT_WIDTH,
    };
    let height: u32 = match args.get(2) {
        Some(s) => s.parse().with_context(|| format!("invalid height `{s}`"))?,
        None => DEFAULT_HEIGHT,
    };
    let plane_width: f64 = match args.get(3) {
        Some(s) => s
            .parse()
            .with_context(|| format!("invalid plane width `{s}`"))?,
        None => DEFAULT_PLANE_WIDTH,
    };

    let scene = match scenes::by_number(number) {
        Some(scene) => scene.context("failed to build scene")?,
        None => bail!("no preset scene {number}, available: 1-6"),
    };

    let start = Instant::now();
    let raster = scene
        .render(width, height, plane_width)
        .context("render failed")?;
    info!("rendered `{}` in {:.2?}", scene.name(), start.elapsed());

    let filename = format!("{}.png", scene.name());
    raster
        .save_png(&filename)
        .with_context(|| format!("failed to write {filename}"))?;
    info!("saved {filename}");

    Ok(())
}
