//! Cameras and configs for cameras
use crate::{config::ConfigError, Point, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Camera Config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default)]
    pub center: [f64; 3],
    #[serde(default = "default_focal_length")]
    pub focal_length: f64,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,
    #[serde(default = "default_image_width")]
    pub image_width: u32,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            center: [0.0; 3],
            focal_length: default_focal_length(),
            aspect_ratio: default_aspect_ratio(),
            image_width: default_image_width(),
        }
    }
}

fn default_focal_length() -> f64 {
    2.0
}

fn default_aspect_ratio() -> f64 {
    16.0 / 9.0
}

fn default_image_width() -> u32 {
    960
}

/// Pinhole camera looking down -z at a viewport two units high
///
/// Pixel (row v, column u) maps to the viewport point `upper_left + u*du + v*dv`, with rows
/// running downwards.
#[derive(Debug, Clone)]
pub struct Camera {
    center: Point,
    image_width: u32,
    image_height: u32,
    upper_left: Point,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}
impl Camera {
    pub fn new(center: Point, focal_length: f64, aspect_ratio: f64, image_width: u32) -> Self {
        let image_height = ((image_width as f64 / aspect_ratio) as u32).max(1);

        // Establish the viewport; its width follows the realised pixel ratio
        let viewport_height = 2.0;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);
        let viewport_u = Vec3::new(viewport_width, 0.0, 0.0);
        let viewport_v = Vec3::new(0.0, -viewport_height, 0.0);

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let upper_left =
            center - Vec3::new(0.0, 0.0, focal_length) - 0.5 * viewport_u - 0.5 * viewport_v;

        Self {
            center,
            image_width,
            image_height,
            upper_left,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Result<Self, ConfigError> {
        if !(config.aspect_ratio.is_finite() && config.aspect_ratio > 0.0) {
            return Err(ConfigError::InvalidCamera(format!(
                "aspect ratio must be positive, got {}",
                config.aspect_ratio
            )));
        }
        if !(config.focal_length.is_finite() && config.focal_length > 0.0) {
            return Err(ConfigError::InvalidCamera(format!(
                "focal length must be positive, got {}",
                config.focal_length
            )));
        }
        if config.image_width == 0 {
            return Err(ConfigError::InvalidCamera(
                "image width must be at least 1".to_string(),
            ));
        }
        Ok(Self::new(
            config.center.into(),
            config.focal_length,
            config.aspect_ratio,
            config.image_width,
        ))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    /// `image_width / aspect_ratio`, floored, at least 1
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Unit direction from the camera centre through pixel (row `pos_v`, column `pos_u`)
    pub fn ray_direction(&self, pos_v: u32, pos_u: u32) -> Vec3 {
        let pixel_position = self.upper_left
            + pos_u as f64 * self.pixel_delta_u
            + pos_v as f64 * self.pixel_delta_v;
        (pixel_position - self.center).normalized()
    }

    pub fn get_ray(&self, pos_v: u32, pos_u: u32) -> Ray {
        Ray::new(self.center, self.ray_direction(pos_v, pos_u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_height_is_floored_and_at_least_one() {
        let cam = Camera::new(Point::zeros(), 1.0, 16.0 / 9.0, 960);
        assert_eq!(cam.image_height(), 540);
        let cam = Camera::new(Point::zeros(), 1.0, 16.0 / 9.0, 100);
        assert_eq!(cam.image_height(), 56);
        let cam = Camera::new(Point::zeros(), 1.0, 1000.0, 10);
        assert_eq!(cam.image_height(), 1);
    }

    #[test]
    fn corner_and_centre_directions() {
        let cam = Camera::new(Point::zeros(), 2.0, 2.0, 200);
        assert_eq!(cam.image_height(), 100);

        // Pixel (0, 0) is the viewport's upper-left corner: (-2, 1, -2)
        let corner = cam.ray_direction(0, 0);
        let expected = Vec3::new(-2.0, 1.0, -2.0).normalized();
        assert!((corner - expected).length() < 1e-12);

        // The middle pixel looks straight ahead
        let middle = cam.ray_direction(50, 100);
        assert!((middle - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
        assert!((middle.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn directions_are_pure_and_offset_independent() {
        let at_origin = Camera::new(Point::zeros(), 2.0, 16.0 / 9.0, 320);
        let moved = Camera::new(Point::new(3.0, -1.0, 7.0), 2.0, 16.0 / 9.0, 320);
        for (v, u) in [(0, 0), (17, 250), (179, 319)] {
            assert_eq!(at_origin.ray_direction(v, u), at_origin.ray_direction(v, u));
            assert!((at_origin.ray_direction(v, u) - moved.ray_direction(v, u)).length() < 1e-12);
        }
        assert_eq!(moved.get_ray(3, 4).orig, Point::new(3.0, -1.0, 7.0));
    }

    #[test]
    fn config_validation() {
        let bad = CameraConfig {
            aspect_ratio: 0.0,
            ..CameraConfig::default()
        };
        assert!(Camera::from_config(&bad).is_err());
        let bad = CameraConfig {
            image_width: 0,
            ..CameraConfig::default()
        };
        assert!(Camera::from_config(&bad).is_err());
        let cam = Camera::from_config(&CameraConfig::default()).unwrap();
        assert_eq!(cam.image_width(), 960);
        assert_eq!(cam.image_height(), 540);
    }
}
