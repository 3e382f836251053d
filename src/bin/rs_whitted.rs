//! Command line renderer for a handful of built-in demo scenes.

// std
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Instant;
// others
use clap::{Parser, ValueEnum};
use log::{error, info, LevelFilter};
// crate
use rs_whitted::cameras::Camera;
use rs_whitted::core::error::Error;
use rs_whitted::core::film::Film;
use rs_whitted::core::geometry::{Point3f, Vector3f};
use rs_whitted::core::light::AmbientLight;
use rs_whitted::core::material::Material;
use rs_whitted::core::scene::Scene;
use rs_whitted::core::shape::ShapeList;
use rs_whitted::core::spectrum::RGBSpectrum;
use rs_whitted::core::util::{Float, Spectrum};
use rs_whitted::integrators::render;
use rs_whitted::integrators::whitted::{WhittedIntegrator, DEFAULT_MAX_DEPTH};
use rs_whitted::lights::spot::SpotLight;
use rs_whitted::shapes::sphere::Sphere;
use rs_whitted::shapes::triangle::Triangle;

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
enum DemoScene {
    /// Nested transparent spheres under a spot light
    Spheres,
    /// Two spheres between a full and a tinted mirror
    Mirrors,
    /// Transparent sphere casting a soft shadow on two triangles
    Triangles,
}

#[derive(Parser)]
#[command(name = "rs_whitted")]
#[command(about = "A Whitted-style recursive ray tracer")]
struct Args {
    /// Built-in scene to render
    #[arg(long, value_enum, default_value = "spheres")]
    scene: DemoScene,

    /// Image width in pixels
    #[arg(long, default_value = "500")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "500")]
    height: u32,

    /// Recursion depth for reflection and refraction
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    debug_level: LogLevel,

    /// Show a per-scanline progress bar
    #[arg(long)]
    progress: bool,

    /// Output file path
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,
}

/// Intensities in the demo scenes are given on a 0..255 scale.
fn rgb255(r: Float, g: Float, b: Float) -> Spectrum {
    RGBSpectrum::rgb(r / 255.0, g / 255.0, b / 255.0)
}

fn spheres_scene() -> Result<(Scene, Camera), Error> {
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Sphere::new(Point3f::new(0.0, 0.0, -50.0), 50.0)?
            .set_emission(rgb255(0.0, 0.0, 255.0))
            .set_material(
                Material::new()
                    .set_kd(0.4)
                    .set_ks(0.3)
                    .set_shininess(100)
                    .set_kt(0.3),
            ),
    ));
    geometries.add(Arc::new(
        Sphere::new(Point3f::new(0.0, 0.0, -50.0), 25.0)?
            .set_emission(rgb255(255.0, 0.0, 0.0))
            .set_material(Material::new().set_kd(0.5).set_ks(0.5).set_shininess(100)),
    ));
    let scene = Scene::new("two spheres")
        .set_geometries(geometries)
        .add_light(Arc::new(
            SpotLight::new(
                rgb255(1000.0, 600.0, 0.0),
                Point3f::new(-100.0, -100.0, 500.0),
                Vector3f::new(-1.0, -1.0, -2.0)?,
            )
            .set_kl(0.0004)
            .set_kq(0.0000006),
        ));
    let camera = Camera::builder()
        .set_location(Point3f::new(0.0, 0.0, 1000.0))
        .set_direction(-Vector3f::AXIS_Z, Vector3f::AXIS_Y)
        .set_vp_distance(1000.0)
        .set_vp_size(150.0, 150.0)
        .build()?;
    Ok((scene, camera))
}

fn mirrors_scene() -> Result<(Scene, Camera), Error> {
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Sphere::new(Point3f::new(-950.0, -900.0, -1000.0), 400.0)?
            .set_emission(rgb255(0.0, 50.0, 100.0))
            .set_material(
                Material::new()
                    .set_kd(0.25)
                    .set_ks(0.25)
                    .set_shininess(20)
                    .set_kt(RGBSpectrum::rgb(0.5, 0.0, 0.0)),
            ),
    ));
    geometries.add(Arc::new(
        Sphere::new(Point3f::new(-950.0, -900.0, -1000.0), 200.0)?
            .set_emission(rgb255(100.0, 50.0, 20.0))
            .set_material(Material::new().set_kd(0.25).set_ks(0.25).set_shininess(20)),
    ));
    geometries.add(Arc::new(
        Triangle::new(
            Point3f::new(1500.0, -1500.0, -1500.0),
            Point3f::new(-1500.0, 1500.0, -1500.0),
            Point3f::new(670.0, 670.0, 3000.0),
        )?
        .set_emission(rgb255(20.0, 20.0, 20.0))
        .set_material(Material::new().set_kr(1.0)),
    ));
    geometries.add(Arc::new(
        Triangle::new(
            Point3f::new(1500.0, -1500.0, -1500.0),
            Point3f::new(-1500.0, 1500.0, -1500.0),
            Point3f::new(-1500.0, -1500.0, -2000.0),
        )?
        .set_emission(rgb255(20.0, 20.0, 20.0))
        .set_material(Material::new().set_kr(RGBSpectrum::rgb(0.5, 0.0, 0.4))),
    ));
    let scene = Scene::new("two spheres on mirrors")
        .set_geometries(geometries)
        .set_ambient(AmbientLight::new(rgb255(255.0, 255.0, 255.0), 0.1))
        .add_light(Arc::new(
            SpotLight::new(
                rgb255(1020.0, 400.0, 400.0),
                Point3f::new(-750.0, -750.0, -150.0),
                Vector3f::new(-1.0, -1.0, -4.0)?,
            )
            .set_kl(0.00001)
            .set_kq(0.000005),
        ));
    let camera = Camera::builder()
        .set_location(Point3f::new(0.0, 0.0, 10000.0))
        .set_direction(-Vector3f::AXIS_Z, Vector3f::AXIS_Y)
        .set_vp_distance(10000.0)
        .set_vp_size(2500.0, 2500.0)
        .build()?;
    Ok((scene, camera))
}

fn triangles_scene() -> Result<(Scene, Camera), Error> {
    let mut geometries = ShapeList::new();
    let floor_material = Material::new().set_kd(0.5).set_ks(0.5).set_shininess(60);
    geometries.add(Arc::new(
        Triangle::new(
            Point3f::new(-150.0, -150.0, -115.0),
            Point3f::new(150.0, -150.0, -135.0),
            Point3f::new(75.0, 75.0, -150.0),
        )?
        .set_material(floor_material),
    ));
    geometries.add(Arc::new(
        Triangle::new(
            Point3f::new(-150.0, -150.0, -115.0),
            Point3f::new(-70.0, 70.0, -140.0),
            Point3f::new(75.0, 75.0, -150.0),
        )?
        .set_material(floor_material),
    ));
    geometries.add(Arc::new(
        Sphere::new(Point3f::new(60.0, 50.0, -50.0), 30.0)?
            .set_emission(rgb255(0.0, 0.0, 255.0))
            .set_material(
                Material::new()
                    .set_kd(0.2)
                    .set_ks(0.2)
                    .set_shininess(30)
                    .set_kt(0.6),
            ),
    ));
    let scene = Scene::new("transparent sphere over triangles")
        .set_geometries(geometries)
        .set_ambient(AmbientLight::new(rgb255(255.0, 255.0, 255.0), 0.15))
        .add_light(Arc::new(
            SpotLight::new(
                rgb255(700.0, 400.0, 400.0),
                Point3f::new(60.0, 50.0, 0.0),
                -Vector3f::AXIS_Z,
            )
            .set_kl(4.0e-5)
            .set_kq(2.0e-7),
        ));
    let camera = Camera::builder()
        .set_location(Point3f::new(0.0, 0.0, 1000.0))
        .set_direction(-Vector3f::AXIS_Z, Vector3f::AXIS_Y)
        .set_vp_distance(1000.0)
        .set_vp_size(200.0, 200.0)
        .build()?;
    Ok((scene, camera))
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.debug_level.clone().into())
        .init();

    let built = match args.scene {
        DemoScene::Spheres => spheres_scene(),
        DemoScene::Mirrors => mirrors_scene(),
        DemoScene::Triangles => triangles_scene(),
    };
    let (scene, camera) = match built {
        Ok(built) => built,
        Err(e) => {
            error!("failed to build scene: {}", e);
            process::exit(1);
        }
    };
    info!(
        "rendering \"{}\" at {}x{}, depth {}",
        scene.name, args.width, args.height, args.depth
    );

    let integrator = WhittedIntegrator::new(args.depth);
    let mut film = Film::new(args.width, args.height);
    let start = Instant::now();
    render(&camera, &scene, &integrator, &mut film, args.progress);
    info!("rendered in {:.2?}", start.elapsed());

    if let Err(e) = film.write_image(&args.output) {
        error!("failed to write {}: {}", args.output.display(), e);
        process::exit(1);
    }
    info!("wrote {}", args.output.display());
}
