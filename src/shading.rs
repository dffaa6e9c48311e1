//! Direct diffuse lighting with hard shadows

use crate::{scene::Hit, scene::Scene, Color, Ray, SHADOW_REACH, SURFACE_BIAS};

/// Lambertian shading of a hit
///
/// Each light that is not occluded contributes `intensity * max(0, n·l)`. The contributions are
/// averaged over all lights, the material's ambient term is added, and the sum tints the
/// material colour. A scene without lights shows only the ambient term.
pub fn lambertian(hit: &Hit<'_>, scene: &Scene) -> Color {
    let material = &hit.object.material;
    let lights = scene.lights();

    let mut direct = 0.0;
    for light in lights {
        let to_light = light.position - hit.context.p;
        let to_light_unit = to_light.normalized();

        // Start off the surface and stop short of the light
        let shadow_ray = Ray::new(
            hit.context.p + SURFACE_BIAS * to_light_unit,
            SHADOW_REACH * to_light,
        );
        if !scene.is_occluded(&shadow_ray) {
            direct += light.intensity * (hit.context.normal * to_light_unit).max(0.0);
        }
    }
    if !lights.is_empty() {
        direct /= lights.len() as f64;
    }

    (material.ambient + direct) * material.color
}
