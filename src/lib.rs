//! Whitted-style Ray Tracing Library
//!
//! Spheres, point lights, Lambertian shading with hard shadows, mirror reflection and
//! dielectric refraction, evaluated by a depth-bounded recursion per camera ray.

pub mod cameras;
pub mod config;
pub mod fresnel;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod shading;
pub mod tracer;
pub mod utils;
pub mod vector;

pub use vector::Vector;

pub type Vec3 = Vector<f64, 3>;
pub type Point = Vec3;
pub type Color = Vec3;

/// Offset along a direction that moves secondary ray origins off the surface they leave
pub const SURFACE_BIAS: f64 = 0.08;

/// Fraction of the way to a light a shadow ray reaches, so the light itself never occludes
pub const SHADOW_REACH: f64 = 0.92;

/// Prelude
pub mod prelude {
    pub use crate::cameras::Camera;
    pub use crate::materials::Material;
    pub use crate::objects::{Hittable, IntersectionContext, Sphere};
    pub use crate::scene::{Hit, Light, Scene, SceneObject};
    pub use crate::tracer::{ray_color, TraceConfig};
    pub use crate::{Color, Point, Ray, Vec3};
}

/// The ray in ray tracing
///
/// `dir` need not be unit length; intersection tests read `t` in units of `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub orig: Point,
    pub dir: Vec3,
}
impl Ray {
    pub fn new(orig: Point, dir: Vec3) -> Self {
        Self { orig, dir }
    }

    pub fn get(&self, t: f64) -> Point {
        self.orig + t * self.dir
    }
}
