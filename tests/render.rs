//! End-to-end behavior of the tracing pipeline: fixed-geometry hit
//! points, recursion boundaries and full camera-to-film renders.

use std::sync::Arc;

use rs_whitted::cameras::Camera;
use rs_whitted::core::film::Film;
use rs_whitted::core::geometry::{pnt3_distance, Point3f, Ray, Vector3f};
use rs_whitted::core::light::AmbientLight;
use rs_whitted::core::material::Material;
use rs_whitted::core::scene::Scene;
use rs_whitted::core::shape::{Shape, ShapeList};
use rs_whitted::core::spectrum::RGBSpectrum;
use rs_whitted::integrators::render;
use rs_whitted::integrators::whitted::WhittedIntegrator;
use rs_whitted::lights::directional::DirectionalLight;
use rs_whitted::lights::point::PointLight;
use rs_whitted::lights::spot::SpotLight;
use rs_whitted::shapes::cylinder::Cylinder;
use rs_whitted::shapes::plane::Plane;
use rs_whitted::shapes::sphere::Sphere;
use rs_whitted::shapes::triangle::Triangle;
use rs_whitted::shapes::tube::Tube;

#[test]
fn fixed_geometry_hit_points() {
    // unit sphere at the origin, ray along -x from (2, 0, 0)
    let sphere = Sphere::new(Point3f::ORIGIN, 1.0).unwrap();
    let ray = Ray::new(Point3f::new(2.0, 0.0, 0.0), -Vector3f::AXIS_X);
    let hits = sphere.intersect(&ray).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].point, Point3f::new(1.0, 0.0, 0.0));
    assert_eq!(hits[1].point, Point3f::new(-1.0, 0.0, 0.0));

    let plane = Plane::new(Point3f::new(0.0, 0.0, 1.0), Vector3f::AXIS_Z).unwrap();
    let ray = Ray::new(Point3f::ORIGIN, Vector3f::AXIS_Z);
    let hits = plane.intersect(&ray).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].point, Point3f::new(0.0, 0.0, 1.0));

    let triangle = Triangle::new(
        Point3f::ORIGIN,
        Point3f::new(1.0, 0.0, 0.0),
        Point3f::new(0.0, 1.0, 0.0),
    )
    .unwrap();
    let ray = Ray::new(Point3f::new(0.2, 0.2, 1.0), -Vector3f::AXIS_Z);
    let hits = triangle.intersect(&ray).unwrap();
    assert_eq!(hits.len(), 1);
    assert!(pnt3_distance(&hits[0].point, &Point3f::new(0.2, 0.2, 0.0)) < 1.0e-12);
}

#[test]
fn normals_are_unit_length_on_every_shape() {
    let axis = Ray::new(Point3f::ORIGIN, Vector3f::new(0.0, 1.0, 1.0).unwrap());
    let shapes: Vec<(Box<dyn Shape>, Point3f)> = vec![
        (
            Box::new(Sphere::new(Point3f::new(1.0, 2.0, 3.0), 5.0).unwrap()),
            Point3f::new(6.0, 2.0, 3.0),
        ),
        (
            Box::new(
                Plane::from_points(
                    Point3f::ORIGIN,
                    Point3f::new(2.0, 0.0, 0.0),
                    Point3f::new(0.0, 3.0, 0.0),
                )
                .unwrap(),
            ),
            Point3f::new(7.0, -2.0, 0.0),
        ),
        (
            Box::new(
                Triangle::new(
                    Point3f::ORIGIN,
                    Point3f::new(4.0, 0.0, 0.0),
                    Point3f::new(0.0, 4.0, 1.0),
                )
                .unwrap(),
            ),
            Point3f::new(1.0, 1.0, 0.25),
        ),
        (
            Box::new(Tube::new(axis, 2.0).unwrap()),
            // on the lateral surface, 2 away from the axis
            Point3f::new(2.0, 3.0, 3.0),
        ),
        (
            Box::new(
                Cylinder::new(Ray::new(Point3f::ORIGIN, Vector3f::AXIS_Z), 2.0, 4.0).unwrap(),
            ),
            Point3f::new(2.0, 0.0, 1.0),
        ),
    ];
    for (shape, p) in &shapes {
        let n = shape.normal(p);
        assert!((n.length() - 1.0).abs() < 1.0e-9);
    }
}

#[test]
fn empty_scene_returns_background_for_every_ray() {
    let scene = Scene::new("empty").set_background(RGBSpectrum::rgb(0.3, 0.2, 0.1));
    let integrator = WhittedIntegrator::default();
    for d in [
        Vector3f::AXIS_X,
        -Vector3f::AXIS_Y,
        Vector3f::new(1.0, -2.0, 3.0).unwrap(),
    ] {
        let ray = Ray::new(Point3f::new(5.0, -7.0, 2.0), d);
        assert_eq!(
            integrator.trace_ray(&scene, &ray),
            RGBSpectrum::rgb(0.3, 0.2, 0.1)
        );
    }
}

/// A sphere lit by one directional light, between two mirrors that
/// would bounce light forever. With all global coefficients zero the
/// deep render must equal the local-only render.
#[test]
fn zero_coefficients_reduce_to_local_illumination() {
    fn build(kr: f64) -> Scene {
        let mut geometries = ShapeList::new();
        geometries.add(Arc::new(
            Sphere::new(Point3f::ORIGIN, 1.0)
                .unwrap()
                .set_material(Material::new().set_kd(0.5).set_kr(kr)),
        ));
        geometries.add(Arc::new(
            Plane::new(Point3f::new(0.0, 0.0, -5.0), Vector3f::AXIS_Z)
                .unwrap()
                .set_material(Material::new().set_kr(kr)),
        ));
        Scene::new("mirror box")
            .set_geometries(geometries)
            .add_light(Arc::new(DirectionalLight::new(
                RGBSpectrum::new(1.0),
                -Vector3f::AXIS_Z,
            )))
    }
    let ray = Ray::new(Point3f::new(0.0, 0.0, 10.0), -Vector3f::AXIS_Z);
    let local_only = WhittedIntegrator::new(1).trace_ray(&build(0.9), &ray);
    let dead_globals = WhittedIntegrator::default().trace_ray(&build(0.0), &ray);
    assert_eq!(local_only, dead_globals);
}

/// Two parallel perfect mirrors: the recursion must terminate at the
/// depth limit rather than ping-ponging forever, and deeper limits
/// can only add energy from the emissive walls.
#[test]
fn parallel_mirrors_terminate_and_accumulate() {
    let mut geometries = ShapeList::new();
    let wall = |z: f64, n: Vector3f| {
        Plane::new(Point3f::new(0.0, 0.0, z), n)
            .unwrap()
            .set_emission(RGBSpectrum::new(0.01))
            .set_material(Material::new().set_kr(1.0))
    };
    geometries.add(Arc::new(wall(0.0, Vector3f::AXIS_Z)));
    geometries.add(Arc::new(wall(10.0, -Vector3f::AXIS_Z)));
    let scene = Scene::new("mirror corridor").set_geometries(geometries);
    let ray = Ray::new(
        Point3f::new(0.0, 0.0, 5.0),
        Vector3f::new(0.0, 0.1, -1.0).unwrap(),
    );

    let mut previous = 0.0;
    for depth in [1, 2, 4, 8, 32] {
        let color = WhittedIntegrator::new(depth).trace_ray(&scene, &ray);
        assert!(color[0] >= previous);
        previous = color[0];
    }
}

/// A transparent wall in front of a lit wall: with straight-through
/// refraction the seen color scales with the wall's kt.
#[test]
fn refraction_passes_background_through_transparent_wall() {
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Plane::new(Point3f::new(0.0, 0.0, 5.0), Vector3f::AXIS_Z)
            .unwrap()
            .set_material(Material::new().set_kt(0.5)),
    ));
    let scene = Scene::new("window")
        .set_background(RGBSpectrum::new(0.8))
        .set_geometries(geometries);
    let ray = Ray::new(Point3f::new(0.0, 0.0, 10.0), -Vector3f::AXIS_Z);
    let color = WhittedIntegrator::default().trace_ray(&scene, &ray);
    // the secondary ray escapes to the background, scaled by kt
    assert_eq!(color, RGBSpectrum::new(0.8 * 0.5));
}

/// A tinted mirror with no lights: the only energy is the reflected
/// background, scaled back by kr, plus the ambient term added once.
#[test]
fn mirror_scales_background_by_kr() {
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Plane::new(Point3f::ORIGIN, Vector3f::AXIS_Z)
            .unwrap()
            .set_material(Material::new().set_kr(RGBSpectrum::rgb(0.5, 0.25, 0.0))),
    ));
    let scene = Scene::new("tinted mirror")
        .set_background(RGBSpectrum::new(0.8))
        .set_ambient(AmbientLight::new(RGBSpectrum::new(0.1), 1.0))
        .set_geometries(geometries);
    let ray = Ray::new(
        Point3f::new(0.0, 0.0, 10.0),
        Vector3f::new(0.0, 1.0, -1.0).unwrap(),
    );
    let color = WhittedIntegrator::default().trace_ray(&scene, &ray);
    assert_eq!(
        color,
        RGBSpectrum::rgb(0.8 * 0.5 + 0.1, 0.8 * 0.25 + 0.1, 0.1)
    );
}

/// Count the hits of every ray of a 3x3 view plane against a sphere,
/// the way the original camera integration exercises did.
fn count_sphere_hits(camera: &Camera, sphere: &Sphere) -> usize {
    let mut total = 0;
    for i in 0..3 {
        for j in 0..3 {
            let ray = camera.construct_ray(3, 3, j, i);
            if let Some(hits) = sphere.intersect(&ray) {
                total += hits.len();
            }
        }
    }
    total
}

#[test]
fn camera_rays_against_spheres() {
    let camera = Camera::builder()
        .set_location(Point3f::ORIGIN)
        .set_direction(-Vector3f::AXIS_Z, Vector3f::AXIS_Y)
        .set_vp_size(3.0, 3.0)
        .set_vp_distance(1.0)
        .build()
        .unwrap();
    // small sphere: only the center ray hits, entering and leaving
    let small = Sphere::new(Point3f::new(0.0, 0.0, -3.0), 1.0).unwrap();
    assert_eq!(count_sphere_hits(&camera, &small), 2);

    // large sphere filling the view: all nine rays cross it
    let camera = Camera::builder()
        .set_location(Point3f::new(0.0, 0.0, 0.5))
        .set_direction(-Vector3f::AXIS_Z, Vector3f::AXIS_Y)
        .set_vp_size(3.0, 3.0)
        .set_vp_distance(1.0)
        .build()
        .unwrap();
    let large = Sphere::new(Point3f::new(0.0, 0.0, -2.5), 2.5).unwrap();
    assert_eq!(count_sphere_hits(&camera, &large), 18);
}

#[test]
fn point_light_shadowing_with_occluder_beyond_light() {
    // floor at z = 0, light at z = 2, "ceiling" at z = 4: the ceiling
    // is farther than the light and must not cast a shadow
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Plane::new(Point3f::ORIGIN, Vector3f::AXIS_Z)
            .unwrap()
            .set_material(Material::new().set_kd(0.5)),
    ));
    geometries.add(Arc::new(
        Plane::new(Point3f::new(0.0, 0.0, 4.0), -Vector3f::AXIS_Z).unwrap(),
    ));
    let scene = Scene::new("lit floor")
        .set_geometries(geometries)
        .add_light(Arc::new(PointLight::new(
            RGBSpectrum::new(1.0),
            Point3f::new(0.0, 0.0, 2.0),
        )));
    let ray = Ray::new(
        Point3f::new(0.0, 1.0, 1.0),
        Vector3f::new(0.0, -1.0, -1.0).unwrap(),
    );
    let color = WhittedIntegrator::default().trace_ray(&scene, &ray);
    assert!(!color.is_black());
}

#[test]
fn spot_light_leaves_reverse_side_dark() {
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Plane::new(Point3f::ORIGIN, Vector3f::AXIS_Z)
            .unwrap()
            .set_material(Material::new().set_kd(0.5)),
    ));
    // beam points up, away from the floor
    let scene = Scene::new("reversed spot")
        .set_geometries(geometries)
        .add_light(Arc::new(SpotLight::new(
            RGBSpectrum::new(1.0),
            Point3f::new(0.0, 0.0, 2.0),
            Vector3f::AXIS_Z,
        )));
    let ray = Ray::new(
        Point3f::new(0.0, 1.0, 1.0),
        Vector3f::new(0.0, -1.0, -1.0).unwrap(),
    );
    assert!(WhittedIntegrator::default()
        .trace_ray(&scene, &ray)
        .is_black());
}

#[test]
fn render_writes_shadowed_and_lit_pixels() {
    // small render of a sphere over a floor plane under a spot light:
    // the film must contain both lit pixels and darker shadow pixels
    let mut geometries = ShapeList::new();
    geometries.add(Arc::new(
        Sphere::new(Point3f::new(0.0, 0.0, -30.0), 10.0)
            .unwrap()
            .set_material(Material::new().set_kd(0.5).set_ks(0.5).set_shininess(30)),
    ));
    geometries.add(Arc::new(
        Plane::new(Point3f::new(0.0, -15.0, 0.0), Vector3f::AXIS_Y)
            .unwrap()
            .set_material(Material::new().set_kd(0.5)),
    ));
    let scene = Scene::new("sphere on floor")
        .set_geometries(geometries)
        .set_ambient(AmbientLight::new(RGBSpectrum::new(0.1), 1.0))
        .add_light(Arc::new(
            SpotLight::new(
                RGBSpectrum::new(2.0),
                Point3f::new(0.0, 40.0, -30.0),
                -Vector3f::AXIS_Y,
            )
            .set_kl(0.001),
        ));
    let camera = Camera::builder()
        .set_location(Point3f::new(0.0, 0.0, 50.0))
        .set_direction(-Vector3f::AXIS_Z, Vector3f::AXIS_Y)
        .set_vp_size(60.0, 60.0)
        .set_vp_distance(50.0)
        .build()
        .unwrap();
    let mut film = Film::new(32, 32);
    render(&camera, &scene, &WhittedIntegrator::default(), &mut film, false);

    let mut lit = 0;
    let mut dark = 0;
    for i in 0..32 {
        for j in 0..32 {
            if film.pixel(j, i).max_component_value() > 0.2 {
                lit += 1;
            } else {
                dark += 1;
            }
        }
    }
    assert!(lit > 0, "no lit pixels");
    assert!(dark > 0, "no dark pixels");
}
