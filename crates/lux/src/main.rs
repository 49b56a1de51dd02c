//! lux - a CPU Monte Carlo path tracer.
//!
//! Renders one of the built-in scenes to `image.ppm`.

mod scenes;

use anyhow::{bail, Result};
use lux_render::{ppm, render, Progress};
use std::sync::Arc;
use std::time::Instant;

const OUTPUT_PATH: &str = "image.ppm";

const SCENES: &[&str] = &[
    "three-spheres",
    "bouncing",
    "earth",
    "perlin",
    "quads",
    "light",
    "cornell",
];

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "three-spheres".to_string());
    let scene = match name.as_str() {
        "three-spheres" => scenes::three_spheres(),
        "bouncing" => scenes::bouncing_spheres(),
        "earth" => scenes::earth(),
        "perlin" => scenes::perlin_spheres(),
        "quads" => scenes::quads(),
        "light" => scenes::simple_light(),
        "cornell" => scenes::cornell_box(),
        other => bail!("unknown scene '{other}', expected one of: {}", SCENES.join(", ")),
    };
    log::info!("scene: {name}");

    let progress = Arc::new(Progress::new(scene.camera.image_height() as usize));

    let start = Instant::now();
    let image = render(&scene.camera, scene.world, &scene.config, &progress)?;
    progress.finish();
    log::info!("rendered in {:.2?}", start.elapsed());

    ppm::save(&image, OUTPUT_PATH)?;
    log::info!("wrote {OUTPUT_PATH}");

    Ok(())
}
