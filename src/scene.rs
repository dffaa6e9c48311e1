//! Scenes: the objects and lights a ray is traced against

use crate::{
    config::ConfigError,
    materials::{Material, MaterialConfig},
    objects::{Hittable, IntersectionContext, Sphere, SphereConfig},
    utils, Point, Ray,
};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// One renderable object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub geometry: Sphere,
    pub material: Material,
}
impl SceneObject {
    pub fn new(geometry: Sphere, material: Material) -> Self {
        Self { geometry, material }
    }

    pub fn from_config(config: &ObjectConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            Sphere::from_config(&config.sphere)?,
            Material::from_config(&config.material)?,
        ))
    }
}
impl Hittable for SceneObject {
    fn try_hit(&self, ray: &Ray) -> Option<IntersectionContext> {
        self.geometry.try_hit(ray)
    }

    fn occludes(&self, ray: &Ray) -> bool {
        self.geometry.occludes(ray)
    }
}

/// Point light, not attenuated by distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point,
    pub intensity: f64,
}
impl Light {
    pub fn new(position: Point, intensity: f64) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn from_config(config: &LightConfig) -> Result<Self, ConfigError> {
        if !(config.intensity.is_finite() && config.intensity >= 0.0) {
            return Err(ConfigError::InvalidLight(format!(
                "intensity must be finite and non-negative, got {}",
                config.intensity
            )));
        }
        Ok(Self::new(config.position.into(), config.intensity))
    }
}

/// The nearest object along a ray and where it was struck
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a SceneObject,
    pub context: IntersectionContext,
}

/// Objects and lights, read-only while rendering
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<Light>,
}
impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object)
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Closest object in front of the ray origin
    ///
    /// Linear scan; on exactly equal distances the earlier object wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        for object in &self.objects {
            if let Some(context) = object.try_hit(ray) {
                if closest.map_or(true, |hit| context.t < hit.context.t) {
                    closest = Some(Hit { object, context });
                }
            }
        }
        closest
    }

    /// Whether any object blocks the segment from `ray.orig` to `ray.get(1.0)`
    pub fn is_occluded(&self, ray: &Ray) -> bool {
        self.objects.iter().any(|object| object.occludes(ray))
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        let mut scene = Self::new();
        for obj_cfg in &config.objects {
            scene.add(SceneObject::from_config(obj_cfg)?);
        }
        for light_cfg in &config.lights {
            scene.add_light(Light::from_config(light_cfg)?);
        }
        debug!(
            "Built scene from config: {} objects, {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Cornell box built from huge spheres, with a matte, a mirror and a glass ball
    pub fn cornell_box() -> Self {
        let mut scene = Self::new();
        let walls = [
            // Floor, ceiling, back, left, right
            (Point::new(0.0, -100000.0, 0.0), 99990.0, Material::MATTE_WHITE),
            (Point::new(0.0, 100000.0, 0.0), 99990.0, Material::MATTE_WHITE),
            (Point::new(0.0, 0.0, -100000.0), 99950.0, Material::MATTE_WHITE),
            (Point::new(-100000.0, 0.0, 0.0), 99990.0, Material::MATTE_RED),
            (Point::new(100000.0, 0.0, 0.0), 99990.0, Material::MATTE_GREEN),
        ];
        for (center, radius, material) in walls {
            scene.add(SceneObject::new(Sphere::new(center, radius), material));
        }

        scene.add(SceneObject::new(
            Sphere::new(Point::new(-5.0, -6.0, -24.5), 3.5),
            Material::MATTE_BLUE,
        ));
        scene.add(SceneObject::new(
            Sphere::new(Point::new(-3.0, -6.5, -36.5), 4.0),
            Material::MIRROR,
        ));
        scene.add(SceneObject::new(
            Sphere::new(Point::new(4.0, -6.5, -32.0), 4.0),
            Material::GLASS,
        ));

        scene.add_light(Light::new(Point::new(-1.0, 8.0, -40.0), 1.0));
        scene
    }

    /// The Cornell box plus up to `count` small matte balls resting on the floor
    ///
    /// Positions come from a generator seeded with `seed`, so a seed always yields the same
    /// scene. Candidates overlapping an existing ball are skipped.
    pub fn scattered(seed: u64, count: usize) -> Self {
        const FLOOR_Y: f64 = -10.0;
        const MAX_ATTEMPTS: usize = 10_000;
        const PALETTE: [Material; 5] = [
            Material::MATTE_WHITE,
            Material::MATTE_RED,
            Material::MATTE_GREEN,
            Material::MATTE_BLUE,
            Material::MATTE_BLACK,
        ];

        let mut rng = StdRng::seed_from_u64(seed);
        let mut scene = Self::cornell_box();
        let balls_before = scene.objects.len();
        let mut placed = 0;

        // The floor fills up long before this many tries
        let attempts = count.saturating_mul(20).min(MAX_ATTEMPTS);
        for _ in 0..attempts {
            if placed == count {
                break;
            }
            let radius = rng.gen_range(0.5..1.5);
            let footprint = utils::gen_random(
                &mut rng,
                &Point::new(-9.0 + radius, 0.0, -45.0 + radius),
                &Point::new(9.0 - radius, 0.0, -15.0),
            );
            let center = Point::new(footprint.x(), FLOOR_Y + radius, footprint.z());
            let overlaps = scene.objects.iter().any(|obj| {
                obj.geometry.radius < 1000.0
                    && (obj.geometry.center - center).length() < obj.geometry.radius + radius
            });
            if overlaps {
                continue;
            }
            let material = PALETTE[rng.gen_range(0..PALETTE.len())];
            scene.add(SceneObject::new(Sphere::new(center, radius), material));
            placed += 1;
        }
        debug!(
            "Scattered {} of {} requested balls with seed {}",
            scene.objects.len() - balls_before,
            count,
            seed
        );
        scene
    }
}

/// Scene config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub objects: Vec<ObjectConfig>,
    #[serde(default)]
    pub lights: Vec<LightConfig>,
}

/// Object config: a sphere and its material
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectConfig {
    #[serde(flatten)]
    pub sphere: SphereConfig,
    pub material: MaterialConfig,
}

/// Light config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightConfig {
    pub position: [f64; 3],
    pub intensity: f64,
}
