//! Rendering drives the integrator over the film, one scanline per
//! rayon task; pixels are independent, so rows can finish in any
//! order.

pub mod whitted;

// std
use std::io::Stdout;
use std::sync::Mutex;
// others
use pbr::ProgressBar;
use rayon::prelude::*;
// crate
use crate::cameras::Camera;
use crate::core::film::Film;
use crate::core::scene::Scene;
use crate::core::util::Spectrum;
use crate::integrators::whitted::WhittedIntegrator;

/// Trace one primary ray per film pixel and store the results in the
/// film. With `progress` set, a progress bar ticks once per finished
/// scanline.
pub fn render(
    camera: &Camera,
    scene: &Scene,
    integrator: &WhittedIntegrator,
    film: &mut Film,
    progress: bool,
) {
    let nx = film.x_resolution();
    let ny = film.y_resolution();
    let bar: Option<Mutex<ProgressBar<Stdout>>> = if progress {
        Some(Mutex::new(ProgressBar::new(u64::from(ny))))
    } else {
        None
    };

    let rows: Vec<Vec<Spectrum>> = (0..ny)
        .into_par_iter()
        .map(|i| {
            let row: Vec<Spectrum> = (0..nx)
                .map(|j| integrator.trace_ray(scene, &camera.construct_ray(nx, ny, j, i)))
                .collect();
            if let Some(ref bar) = bar {
                if let Ok(mut bar) = bar.lock() {
                    bar.inc();
                }
            }
            row
        })
        .collect();

    if let Some(bar) = bar {
        if let Ok(mut bar) = bar.lock() {
            bar.finish();
        }
    }
    for (i, row) in rows.iter().enumerate() {
        for (j, color) in row.iter().enumerate() {
            film.set_pixel(j as u32, i as u32, *color);
        }
    }
}
