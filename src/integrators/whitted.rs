//! Whitted-style recursive shading.
//!
//! Each shaded point accumulates its shape's emission, the Phong
//! local effects of every visible light, and the global effects of
//! one reflected and one refracted secondary ray. Recursion carries a
//! depth counter and an accumulated contribution factor `k`; a branch
//! dies when the depth runs out or every channel of `k` drops below
//! [`MIN_CONTRIBUTION`], so deep reflections cost nothing once they
//! can no longer change the pixel.
//!
//! [`MIN_CONTRIBUTION`]: constant.MIN_CONTRIBUTION.html

// crate
use crate::core::geometry::{pnt3_distance, vec3_dot, Ray, Vector3f};
use crate::core::light::Light;
use crate::core::material::Material;
use crate::core::scene::Scene;
use crate::core::shape::GeoPoint;
use crate::core::util::{align_zero, Float, Spectrum};

/// Contribution threshold below which a recursion branch is dropped.
pub const MIN_CONTRIBUTION: Float = 1.0e-3;

/// Default recursion depth.
pub const DEFAULT_MAX_DEPTH: u32 = 10;

pub struct WhittedIntegrator {
    max_depth: u32,
}

impl WhittedIntegrator {
    pub fn new(max_depth: u32) -> Self {
        WhittedIntegrator {
            max_depth: max_depth.max(1),
        }
    }

    /// Color seen along a single ray: the background for a miss,
    /// otherwise the recursive shade of the closest hit plus the
    /// scene's ambient term (added exactly once, here).
    pub fn trace_ray(&self, scene: &Scene, ray: &Ray) -> Spectrum {
        match self.closest_intersection(scene, ray) {
            None => scene.background,
            Some(hit) => {
                self.calc_color(scene, &hit, ray, self.max_depth, Spectrum::new(1.0))
                    + scene.ambient.intensity()
            }
        }
    }

    fn closest_intersection<'a>(&self, scene: &'a Scene, ray: &Ray) -> Option<GeoPoint<'a>> {
        let hits = scene.geometries.intersect(ray)?;
        ray.closest_hit(&hits)
    }

    fn calc_color(
        &self,
        scene: &Scene,
        hit: &GeoPoint,
        ray: &Ray,
        level: u32,
        k: Spectrum,
    ) -> Spectrum {
        let color = hit.shape.emission() + self.local_effects(scene, hit, ray, &k);
        if level == 1 {
            color
        } else {
            color + self.global_effects(scene, hit, ray, level, &k)
        }
    }

    /// Phong diffuse and specular response of every light that is on
    /// the viewer's side of the surface, each scaled by the shadow
    /// transparency factor towards that light.
    fn local_effects(&self, scene: &Scene, hit: &GeoPoint, ray: &Ray, k: &Spectrum) -> Spectrum {
        let n: Vector3f = hit.shape.normal(&hit.point);
        let v: Vector3f = ray.d;
        let nv: Float = align_zero(vec3_dot(&n, &v));
        // the ray grazes the surface; nothing reaches the viewer
        if nv == 0.0 {
            return Spectrum::default();
        }

        let material: Material = hit.shape.material();
        let mut color = Spectrum::default();
        for light in &scene.lights {
            let l: Vector3f = light.direction(&hit.point);
            let nl: Float = align_zero(vec3_dot(&n, &l));
            // light and viewer on the same side of the surface
            if nl * nv > 0.0 {
                let ktr = self.transparency(scene, hit, light.as_ref(), &l, &n);
                if !(ktr * *k).lower_than(MIN_CONTRIBUTION) {
                    let intensity = light.intensity(&hit.point) * ktr;
                    color += self.diffuse(&material.kd, nl, &intensity)
                        + self.specular(&material, &l, &n, nl, &v, &intensity);
                }
            }
        }
        color
    }

    fn diffuse(&self, kd: &Spectrum, nl: Float, intensity: &Spectrum) -> Spectrum {
        *intensity * *kd * nl.abs()
    }

    fn specular(
        &self,
        material: &Material,
        l: &Vector3f,
        n: &Vector3f,
        nl: Float,
        v: &Vector3f,
        intensity: &Spectrum,
    ) -> Spectrum {
        let r: Vector3f = (l - *n * (2.0 * nl)).normalize();
        let vr: Float = align_zero(vec3_dot(v, &r));
        // the mirror of the light points away from the viewer
        if vr >= 0.0 {
            return Spectrum::default();
        }
        *intensity * material.ks * (-vr).powi(material.shininess)
    }

    /// Accumulated transmission of every occluder strictly between
    /// the point and the light: 1 for a clear path, 0 behind an
    /// opaque occluder, the product of `kt` factors in between.
    fn transparency(
        &self,
        scene: &Scene,
        hit: &GeoPoint,
        light: &dyn Light,
        l: &Vector3f,
        n: &Vector3f,
    ) -> Spectrum {
        let shadow_ray = Ray::offset(hit.point, -*l, n);
        let occluders = match scene.geometries.intersect(&shadow_ray) {
            None => return Spectrum::new(1.0),
            Some(occluders) => occluders,
        };

        let light_distance: Float = light.distance(&shadow_ray.o);
        let mut ktr = Spectrum::new(1.0);
        for occluder in &occluders {
            if align_zero(pnt3_distance(&occluder.point, &shadow_ray.o) - light_distance) < 0.0 {
                ktr = ktr * occluder.shape.material().kt;
                if ktr.lower_than(MIN_CONTRIBUTION) {
                    return Spectrum::default();
                }
            }
        }
        ktr
    }

    /// Reflected and refracted contributions, each weighted by the
    /// matching material factor and pruned once the accumulated
    /// factor is spent.
    fn global_effects(
        &self,
        scene: &Scene,
        hit: &GeoPoint,
        ray: &Ray,
        level: u32,
        k: &Spectrum,
    ) -> Spectrum {
        let n: Vector3f = hit.shape.normal(&hit.point);
        let material: Material = hit.shape.material();
        self.global_effect(scene, &self.reflected_ray(hit, ray, &n), level, k, &material.kr)
            + self.global_effect(scene, &self.refracted_ray(hit, ray, &n), level, k, &material.kt)
    }

    fn global_effect(
        &self,
        scene: &Scene,
        ray: &Ray,
        level: u32,
        k: &Spectrum,
        kx: &Spectrum,
    ) -> Spectrum {
        let kkx = *k * *kx;
        if kkx.lower_than(MIN_CONTRIBUTION) {
            return Spectrum::default();
        }
        match self.closest_intersection(scene, ray) {
            None => scene.background * *kx,
            Some(hit) => self.calc_color(scene, &hit, ray, level - 1, kkx) * *kx,
        }
    }

    /// Mirror of the incoming direction about the normal, offset off
    /// the surface.
    fn reflected_ray(&self, hit: &GeoPoint, ray: &Ray, n: &Vector3f) -> Ray {
        let d: Vector3f = ray.d;
        let r: Vector3f = d - *n * (2.0 * vec3_dot(&d, n));
        Ray::offset(hit.point, r, n)
    }

    /// Transmission without bending: the refracted ray continues in
    /// the incoming direction from the far side of the surface.
    fn refracted_ray(&self, hit: &GeoPoint, ray: &Ray, n: &Vector3f) -> Ray {
        Ray::offset(hit.point, ray.d, n)
    }
}

impl Default for WhittedIntegrator {
    fn default() -> Self {
        WhittedIntegrator::new(DEFAULT_MAX_DEPTH)
    }
}
