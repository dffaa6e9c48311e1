use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable on the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes used when no render file is given
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BuiltinScene {
    /// Cornell box with a matte, a mirror and a glass ball
    Cornell,
    /// Cornell box with extra randomly placed matte balls
    Scattered,
}

#[derive(Parser)]
#[command(name = "cornell-tracer")]
#[command(about = "Whitted-style ray tracer for sphere scenes")]
pub struct Args {
    /// YAML render file with camera, trace and scene sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Scene to render when no render file is given
    #[arg(long, value_enum, default_value = "cornell", conflicts_with = "config")]
    pub scene: BuiltinScene,

    /// Seed for the scattered scene
    #[arg(long, default_value = "1", conflicts_with = "config")]
    pub seed: u64,

    /// Number of extra balls in the scattered scene
    #[arg(long, default_value = "12", conflicts_with = "config")]
    pub balls: usize,

    /// Image width in pixels, overrides the render file
    #[arg(long)]
    pub width: Option<u32>,

    /// Maximum bounces per camera ray, overrides the render file
    #[arg(long, short = 'd')]
    pub max_depth: Option<u32>,

    /// Weight glass by Schlick reflectance instead of its fixed reflectivity
    #[arg(long)]
    pub fresnel: bool,

    /// Output PNG path
    #[arg(short, long, default_value = "cornell.png")]
    pub output: PathBuf,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_scene_options_conflict_with_render_file() {
        for extra in [["--scene", "scattered"], ["--seed", "4"], ["--balls", "3"]] {
            let mut argv = vec!["cornell-tracer", "--config", "scenes/cornell.yaml"];
            argv.extend(extra);
            assert!(Args::try_parse_from(argv).is_err(), "{extra:?}");
        }
    }

    #[test]
    fn render_file_alone_keeps_defaults() {
        let args = Args::try_parse_from(["cornell-tracer", "-c", "scenes/cornell.yaml", "-d", "4"])
            .unwrap();
        assert!(args.config.is_some());
        assert_eq!(args.max_depth, Some(4));
        assert_eq!(args.seed, 1);
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
    }

    #[test]
    fn builtin_scene_without_render_file() {
        let args =
            Args::try_parse_from(["cornell-tracer", "--scene", "scattered", "--balls", "5"]).unwrap();
        assert!(matches!(args.scene, BuiltinScene::Scattered));
        assert_eq!(args.balls, 5);
    }
}
