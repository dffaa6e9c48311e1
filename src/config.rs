//! Render files: camera, trace settings and scene in one YAML document

use std::{fs, path::Path};

use crate::{
    cameras::{Camera, CameraConfig},
    scene::{Scene, SceneConfig},
    tracer::TraceConfig,
};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid sphere: {0}")]
    InvalidSphere(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Invalid light: {0}")]
    InvalidLight(String),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),
}

/// Everything needed to render one image
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub trace: TraceConfig,
    #[serde(default)]
    pub scene: SceneConfig,
}
impl RenderConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading render config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Validate and build the camera and scene
    pub fn build(&self) -> Result<(Camera, Scene), ConfigError> {
        Ok((
            Camera::from_config(&self.camera)?,
            Scene::from_config(&self.scene)?,
        ))
    }
}
