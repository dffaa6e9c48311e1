//! Implementation of materials

use crate::{config::ConfigError, Color};
use serde::{Deserialize, Serialize};

/// Surface description shared by every object built from the same preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse colour, each channel in [0, 1]
    pub color: Color,
    /// Light added regardless of the lights in the scene
    pub ambient: f64,
    pub refractive_index: f64,
    /// Weight of the mirrored contribution, in [0, 1]
    pub reflectivity: f64,
    pub transmissive: bool,
}
impl Material {
    pub const fn matte(r: f64, g: f64, b: f64) -> Self {
        Self {
            color: Color::new(r, g, b),
            ambient: 0.25,
            refractive_index: 1.0,
            reflectivity: 0.0,
            transmissive: false,
        }
    }

    pub const MATTE_WHITE: Material = Material::matte(0.8, 0.8, 0.8);
    pub const MATTE_RED: Material = Material::matte(0.8, 0.3, 0.3);
    pub const MATTE_GREEN: Material = Material::matte(0.3, 0.8, 0.3);
    pub const MATTE_BLUE: Material = Material::matte(0.3, 0.3, 0.8);
    pub const MATTE_BLACK: Material = Material::matte(0.2, 0.2, 0.2);
    pub const MIRROR: Material = Material {
        color: Color::new(0.0, 0.0, 0.0),
        ambient: 0.25,
        refractive_index: 1.0,
        reflectivity: 0.9,
        transmissive: false,
    };
    pub const GLASS: Material = Material {
        color: Color::new(1.0, 1.0, 1.0),
        ambient: 0.25,
        refractive_index: 1.52,
        reflectivity: 0.9,
        transmissive: true,
    };

    pub fn from_config(config: &MaterialConfig) -> Result<Self, ConfigError> {
        match config {
            MaterialConfig::Preset { name } => Ok(name.material()),
            MaterialConfig::Custom(c) => {
                let material = Self {
                    color: c.color.into(),
                    ambient: c.ambient,
                    refractive_index: c.refractive_index,
                    reflectivity: c.reflectivity,
                    transmissive: c.transmissive,
                };
                material.validate()?;
                Ok(material)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .color
            .as_slice()
            .iter()
            .any(|c| !(0.0..=1.0).contains(c))
        {
            return Err(ConfigError::InvalidMaterial(format!(
                "color channels must lie in [0, 1], got {:?}",
                self.color.as_slice()
            )));
        }
        if !(self.ambient >= 0.0) {
            return Err(ConfigError::InvalidMaterial(format!(
                "ambient must be non-negative, got {}",
                self.ambient
            )));
        }
        if !(self.refractive_index >= 1.0) {
            return Err(ConfigError::InvalidMaterial(format!(
                "refractive index must be at least 1, got {}",
                self.refractive_index
            )));
        }
        if !(0.0..=1.0).contains(&self.reflectivity) {
            return Err(ConfigError::InvalidMaterial(format!(
                "reflectivity must lie in [0, 1], got {}",
                self.reflectivity
            )));
        }
        Ok(())
    }
}
impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::zeros(),
            ambient: 0.3,
            refractive_index: 1.0,
            reflectivity: 0.0,
            transmissive: false,
        }
    }
}

/// Named material presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    MatteWhite,
    MatteRed,
    MatteGreen,
    MatteBlue,
    MatteBlack,
    Mirror,
    Glass,
}
impl Preset {
    pub fn material(self) -> Material {
        match self {
            Preset::MatteWhite => Material::MATTE_WHITE,
            Preset::MatteRed => Material::MATTE_RED,
            Preset::MatteGreen => Material::MATTE_GREEN,
            Preset::MatteBlue => Material::MATTE_BLUE,
            Preset::MatteBlack => Material::MATTE_BLACK,
            Preset::Mirror => Material::MIRROR,
            Preset::Glass => Material::GLASS,
        }
    }
}

/// Config for materials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MaterialConfig {
    Preset { name: Preset },
    Custom(CustomMaterialConfig),
}

/// Custom material config
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomMaterialConfig {
    pub color: [f64; 3],
    #[serde(default = "default_ambient")]
    pub ambient: f64,
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f64,
    #[serde(default)]
    pub reflectivity: f64,
    #[serde(default)]
    pub transmissive: bool,
}

fn default_ambient() -> f64 {
    0.25
}

fn default_refractive_index() -> f64 {
    1.0
}
