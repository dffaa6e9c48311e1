//! Drive the tracer over every pixel of the camera

use std::time::Instant;

use crate::{cameras::Camera, scene::Scene, tracer::TraceConfig, utils, Color};
use image::{Rgb, RgbImage};
use indicatif::ProgressBar;
use log::{debug, warn};
use rayon::prelude::*;

/// Colour of pixel (row `v`, column `u`), one ray per pixel
pub fn render_pixel(camera: &Camera, scene: &Scene, trace: &TraceConfig, v: u32, u: u32) -> Color {
    trace.color(&camera.get_ray(v, u), scene)
}

/// Render the whole image
///
/// Rows are traced in parallel; `bar` advances once per finished row. Pass
/// [`ProgressBar::hidden`] to render silently.
pub fn render(camera: &Camera, scene: &Scene, trace: &TraceConfig, bar: &ProgressBar) -> RgbImage {
    let (width, height) = (camera.image_width(), camera.image_height());
    if scene.lights().is_empty() {
        warn!("Scene has no lights, only ambient light will be visible");
    }
    debug!(
        "Rendering {}x{} with depth {} over {} objects",
        width,
        height,
        trace.max_depth,
        scene.objects().len()
    );

    let start = Instant::now();
    let rows: Vec<Vec<Rgb<u8>>> = (0..height)
        .into_par_iter()
        .map(|v| {
            let row = (0..width)
                .map(|u| utils::get_pixel(&render_pixel(camera, scene, trace, v, u)))
                .collect();
            bar.inc(1);
            row
        })
        .collect();
    bar.finish();

    let mut image = RgbImage::new(width, height);
    for (v, row) in rows.into_iter().enumerate() {
        for (u, pixel) in row.into_iter().enumerate() {
            image.put_pixel(u as u32, v as u32, pixel);
        }
    }
    debug!("Traced {} pixels in {:.2?}", width * height, start.elapsed());
    image
}
