//! The recursive colour evaluator

use crate::{
    fresnel::{refract, schlick_approximation},
    scene::{Hit, Scene},
    shading::lambertian,
    Color, Ray, SHADOW_REACH, SURFACE_BIAS,
};
use serde::{Deserialize, Serialize};

/// Trace config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Bounces a camera ray may take before it is absorbed
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Weight reflection and transmission of dielectrics by Schlick's reflectance instead of
    /// the material's fixed reflectivity
    #[serde(default)]
    pub fresnel: bool,
}
impl TraceConfig {
    /// Colour seen along a camera ray
    pub fn color(&self, ray: &Ray, scene: &Scene) -> Color {
        trace(ray, self.max_depth, scene, self.fresnel)
    }
}
impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            fresnel: false,
        }
    }
}

fn default_max_depth() -> u32 {
    10
}

/// Colour seen along `ray` with `depth` bounces left
///
/// Black once the budget is spent or when nothing is hit. Mirrors recurse along the reflected
/// ray, dielectrics along the refracted ray, and materials that do both average the two
/// weighted colours. A dielectric transmits `1 - reflectivity`, so a fully reflective one acts
/// as a mirror. Everything else is shaded directly.
pub fn ray_color(ray: &Ray, depth: u32, scene: &Scene) -> Color {
    trace(ray, depth, scene, false)
}

fn trace(ray: &Ray, depth: u32, scene: &Scene, fresnel: bool) -> Color {
    // If we have exceeded the ray bounce limit, no more light is gathered
    if depth == 0 {
        return Color::zeros();
    }
    let Some(hit) = scene.nearest_hit(ray) else {
        return Color::zeros();
    };

    let material = &hit.object.material;
    let reflectivity = material.reflectivity;
    // Whatever a dielectric does not reflect it lets through
    let transparency = if material.transmissive {
        1.0 - reflectivity
    } else {
        0.0
    };

    match (reflectivity > 0.0, transparency > 0.0) {
        (true, true) => {
            let reflection = trace(&reflected(ray, &hit), depth - 1, scene, fresnel);
            match refract(ray, material, &hit.context) {
                Some(refracted) => {
                    let transmission = trace(&refracted, depth - 1, scene, fresnel);
                    if fresnel {
                        let r = schlick_approximation(
                            &ray.dir.normalized(),
                            &hit.context.normal,
                            material,
                        );
                        r * reflection + (1.0 - r) * transmission
                    } else {
                        0.5 * (reflectivity * reflection + transparency * transmission)
                    }
                }
                // Total internal reflection
                None if fresnel => reflection,
                None => reflectivity * reflection,
            }
        }
        (true, false) => {
            reflectivity * trace(&reflected(ray, &hit), depth - 1, scene, fresnel)
        }
        (false, true) => match refract(ray, material, &hit.context) {
            Some(refracted) => transparency * trace(&refracted, depth - 1, scene, fresnel),
            None => Color::zeros(),
        },
        (false, false) => lambertian(&hit, scene),
    }
}

/// Mirror ray leaving a hit, started just off the surface
fn reflected(ray: &Ray, hit: &Hit<'_>) -> Ray {
    let normal = hit.context.normal;
    Ray::new(
        hit.context.p + SURFACE_BIAS * normal,
        SHADOW_REACH * ray.dir.get_reflective(&normal),
    )
}
