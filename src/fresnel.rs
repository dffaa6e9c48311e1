//! Fresnel reflectance and Snell refraction at dielectric boundaries

use crate::{materials::Material, objects::IntersectionContext, Ray, Vec3, SURFACE_BIAS};

/// Schlick's approximation of the reflected fraction at a boundary
///
/// `incoming` travels towards the surface and `normal` is the outward surface normal. For
/// materials denser than vacuum the angle is taken on the transmitted side, and when no
/// transmitted ray exists the reflectance is exactly 1. The result always lies in [0, 1].
pub fn schlick_approximation(incoming: &Vec3, normal: &Vec3, material: &Material) -> f64 {
    let n = material.refractive_index;
    let mut cos_x = -(*normal * *incoming);

    let r0 = if cos_x > 0.0 {
        (1.0 - n) / (1.0 + n)
    } else {
        (n - 1.0) / (n + 1.0)
    };
    let r0 = r0 * r0;

    if n > 1.0 {
        let sin_t2 = n * n * (1.0 - cos_x * cos_x);
        if sin_t2 > 1.0 {
            return 1.0;
        }
        cos_x = (1.0 - sin_t2).sqrt();
    } else {
        // No bending, so only the angle's magnitude matters from either side
        cos_x = cos_x.abs();
    }

    let x = 1.0 - cos_x;
    r0 + (1.0 - r0) * x.powi(5)
}

/// Bend `ray` through the surface described by `context`
///
/// Works for rays entering the material as well as leaving it; a ray leaving sees the indices
/// swapped and the normal flipped. Returns `None` on total internal reflection. The refracted
/// ray starts just past the surface along its own direction.
pub fn refract(ray: &Ray, material: &Material, context: &IntersectionContext) -> Option<Ray> {
    let mut normal = context.normal;
    let mut n1 = 1.0;
    let mut n2 = material.refractive_index;

    let mut cos_theta = -(normal * ray.dir);
    if cos_theta < 0.0 {
        // Leaving the material
        std::mem::swap(&mut n1, &mut n2);
        cos_theta = -cos_theta;
        normal = -normal;
    }

    let ratio = n1 / n2;
    let sin_theta = ratio * (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    if sin_theta > 1.0 {
        return None;
    }
    let cos_phi = (1.0 - sin_theta * sin_theta).max(0.0).sqrt();

    let dir = ratio * ray.dir + (ratio * cos_theta - cos_phi) * normal;
    Some(Ray::new(context.p + SURFACE_BIAS * dir, dir))
}
