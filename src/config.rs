//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`P4D_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use poly4d_core::{AnimationSettings, RotationMode, RotationPlane, Scene, SceneState};
use poly4d_input::ZoomController;
use poly4d_math::{Projector, Vec3};
use poly4d_render::Camera3D;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera and zoom configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Rotation speeds and tick timing
    #[serde(default)]
    pub animation: AnimationConfig,
    /// 4D to 3D projection constants
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`P4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // P4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("P4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Scene state the viewer starts in
    pub fn initial_state(&self) -> SceneState {
        let mut state = SceneState::new(self.animation.initial_axis, self.animation.initial_mode);
        state.scene = Scene::from_index(self.rendering.start_scene);
        state
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "poly4d".to_string(),
            width: 1920,
            height: 1080,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub position: [f32; 3],
    /// Point the camera looks at [x, y, z]
    pub target: [f32; 3],
    /// Vertical field of view in degrees
    pub fovy: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Zoom speed while Z or X is held (units per second)
    pub zoom_speed: f32,
    /// Closest the camera may zoom to its target
    pub min_distance: f32,
    /// Farthest the camera may zoom from its target
    pub max_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [10.0, 10.0, 10.0],
            target: [0.0, 0.0, 0.0],
            fovy: 45.0,
            near: 0.1,
            far: 1000.0,
            zoom_speed: 6.0,
            min_distance: 2.0,
            max_distance: 60.0,
        }
    }
}

impl CameraConfig {
    pub fn to_camera(&self) -> Camera3D {
        Camera3D::new()
            .looking_at(Vec3::from_array(self.position), Vec3::from_array(self.target))
            .with_fovy(self.fovy)
            .with_clip(self.near, self.far)
    }

    pub fn to_zoom_controller(&self) -> ZoomController {
        ZoomController::new()
            .with_zoom_speed(self.zoom_speed)
            .with_distance_range(self.min_distance, self.max_distance)
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Animation ticks per second
    pub tick_rate: f32,
    /// Most ticks run for one frame
    pub max_ticks_per_update: u32,
    /// Radians per tick for the active plane in single-axis mode
    pub single_axis_step: f32,
    /// Radians per tick for each plane (xy, xz, xw, yz, yw, zw) in all-axes mode
    pub all_axes_steps: [f32; 6],
    /// Active plane at startup
    pub initial_axis: RotationPlane,
    /// Rotation mode at startup
    pub initial_mode: RotationMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let settings = AnimationSettings::default();
        Self {
            tick_rate: settings.tick_rate,
            max_ticks_per_update: settings.max_ticks_per_update,
            single_axis_step: settings.single_axis_step,
            all_axes_steps: settings.all_axes_steps,
            initial_axis: RotationPlane::XW,
            initial_mode: RotationMode::SingleAxis,
        }
    }
}

impl AnimationConfig {
    pub fn to_settings(&self) -> AnimationSettings {
        AnimationSettings {
            single_axis_step: self.single_axis_step,
            all_axes_steps: self.all_axes_steps,
            tick_rate: self.tick_rate,
            max_ticks_per_update: self.max_ticks_per_update,
        }
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Numerator of the perspective scale
    pub scale: f32,
    /// Viewer distance along w
    pub distance: f32,
    /// Smallest allowed magnitude of the denominator
    pub epsilon: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        let p = Projector::DEFAULT;
        Self {
            scale: p.scale,
            distance: p.distance,
            epsilon: p.epsilon,
        }
    }
}

impl ProjectionConfig {
    pub fn to_projector(&self) -> Projector {
        Projector::new(self.scale, self.distance, self.epsilon.abs())
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Scene shown at startup (0-11, wraps)
    pub start_scene: usize,
    /// Show scene, axis and mode in the window title
    pub status_in_title: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            start_scene: 0,
            status_in_title: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    pub log_level: String,
    /// Show frames per second in the window title
    pub show_fps: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_fps: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
