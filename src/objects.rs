//! Objects
use crate::{config::ConfigError, Point, Ray, Vec3};
use serde::{Deserialize, Serialize};

pub trait Hittable {
    /// Nearest intersection in front of the ray origin
    fn try_hit(&self, ray: &Ray) -> Option<IntersectionContext>;

    /// Whether the open segment `ray.get(t)` for `0 < t < 1` crosses the surface
    fn occludes(&self, ray: &Ray) -> bool;
}

/// Represents a hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionContext {
    /// Ray parameter of the hit
    pub t: f64,
    /// Point of intersection
    pub p: Point,
    /// Outward unit normal, not yet flipped for rays leaving the surface
    pub normal: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
}
impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn from_config(config: &SphereConfig) -> Result<Self, ConfigError> {
        if !(config.radius.is_finite() && config.radius > 0.0) {
            return Err(ConfigError::InvalidSphere(format!(
                "radius must be positive and finite, got {}",
                config.radius
            )));
        }
        Ok(Self::new(config.center.into(), config.radius))
    }

    /// Both roots of `|O + tD - C|^2 = r^2`, smaller first, or `None` if they are complex
    fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
        let oc = ray.orig - self.center;
        let a = ray.dir.square_of_length();
        let half_b = oc * ray.dir;
        let c = oc.square_of_length() - self.radius * self.radius;
        let discriminant = half_b * half_b - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        Some(((-half_b - sqrtd) / a, (-half_b + sqrtd) / a))
    }
}
impl Hittable for Sphere {
    fn try_hit(&self, ray: &Ray) -> Option<IntersectionContext> {
        let (near, far) = self.roots(ray)?;
        // Take the near root unless the origin is inside the sphere
        let t = if near > 0.0 {
            near
        } else if far > 0.0 {
            far
        } else {
            return None;
        };
        let p = ray.get(t);
        Some(IntersectionContext {
            t,
            p,
            normal: (p - self.center) / self.radius,
        })
    }

    fn occludes(&self, ray: &Ray) -> bool {
        match self.roots(ray) {
            Some((near, far)) => (0.0 < near && near < 1.0) || (0.0 < far && far < 1.0),
            None => false,
        }
    }
}

/// Sphere config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereConfig {
    pub center: [f64; 3],
    pub radius: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_ahead() -> Sphere {
        Sphere::new(Point::new(0.0, 0.0, -5.0), 1.0)
    }

    #[test]
    fn hit_from_outside_takes_near_root() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point::zeros(), Vec3::new(0.0, 0.0, -1.0));
        let ctx = sphere.try_hit(&ray).expect("ray points at the sphere");
        assert!((ctx.t - 4.0).abs() < 1e-12);
        assert_eq!(ctx.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn hit_from_inside_takes_far_root() {
        let sphere = unit_sphere_ahead();
        let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
        let ctx = sphere.try_hit(&ray).unwrap();
        assert!((ctx.t - 1.0).abs() < 1e-12);
        // Outward normal, not corrected for the ray being inside
        assert_eq!(ctx.normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn miss_and_behind() {
        let sphere = unit_sphere_ahead();
        let sideways = Ray::new(Point::zeros(), Vec3::new(1.0, 0.0, 0.0));
        assert!(sphere.try_hit(&sideways).is_none());
        let away = Ray::new(Point::zeros(), Vec3::new(0.0, 0.0, 1.0));
        assert!(sphere.try_hit(&away).is_none());
    }

    #[test]
    fn hit_point_lies_on_surface() {
        let sphere = Sphere::new(Point::new(1.5, -2.0, -7.0), 2.5);
        let origin = Point::new(0.3, 0.4, 1.0);
        for target in [
            Point::new(1.5, -2.0, -7.0),
            Point::new(2.0, -1.0, -6.0),
            Point::new(0.5, -3.0, -8.0),
        ] {
            let ray = Ray::new(origin, target - origin);
            let ctx = sphere.try_hit(&ray).unwrap();
            assert!(ctx.t > 0.0);
            assert!(((ctx.p - sphere.center).length() - sphere.radius).abs() < 1e-3);
            assert!((ctx.normal.length() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn occlusion_only_within_segment() {
        let sphere = unit_sphere_ahead();
        // Segment ends before the sphere
        let short = Ray::new(Point::zeros(), Vec3::new(0.0, 0.0, -3.0));
        assert!(!sphere.occludes(&short));
        // Segment passes through the sphere
        let long = Ray::new(Point::zeros(), Vec3::new(0.0, 0.0, -10.0));
        assert!(sphere.occludes(&long));
        // Sphere entirely behind the origin
        let back = Ray::new(Point::zeros(), Vec3::new(0.0, 0.0, 10.0));
        assert!(!sphere.occludes(&back));
    }

    #[test]
    fn config_rejects_bad_radius() {
        let bad = SphereConfig {
            center: [0.0; 3],
            radius: -1.0,
        };
        assert!(Sphere::from_config(&bad).is_err());
        let good = SphereConfig {
            center: [0.0, 1.0, 2.0],
            radius: 0.5,
        };
        assert_eq!(
            Sphere::from_config(&good).unwrap(),
            Sphere::new(Point::new(0.0, 1.0, 2.0), 0.5)
        );
    }
}
