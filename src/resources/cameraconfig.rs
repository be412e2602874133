//! Camera configuration resource.
//!
//! Manages camera settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [viewport]
//! x = 0
//! y = 0
//! width = 800
//! height = 600
//!
//! [view]
//! zoom = 1.0
//! angle = 0.0
//! round_pixels = false
//! background = rgba(0,0,0,0)
//!
//! [bounds]
//! x = 0
//! y = 0
//! width = 2000
//! height = 2000
//! ```
//!
//! The `[bounds]` section is optional; when present, scroll bounds are
//! enabled on the camera.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::geom::Rect;

/// Default safe values for startup
const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;
const DEFAULT_ZOOM: f32 = 1.0;
const DEFAULT_ANGLE: f32 = 0.0;
const DEFAULT_ROUND_PIXELS: bool = false;
const DEFAULT_BACKGROUND: &str = "rgba(0,0,0,0)";
const DEFAULT_CONFIG_PATH: &str = "./camera.ini";

/// Camera configuration resource.
///
/// Stores viewport geometry, view settings, and optional scroll bounds.
/// [`apply_camera_config`](crate::systems::config::apply_camera_config)
/// pushes changed values onto the live camera.
#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    /// Viewport x position in pixels.
    pub viewport_x: f32,
    /// Viewport y position in pixels.
    pub viewport_y: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
    /// Zoom factor.
    pub zoom: f32,
    /// Rotation in degrees.
    pub angle: f32,
    /// Round scroll to whole pixels.
    pub round_pixels: bool,
    /// Background color descriptor (see [`crate::color::Color::parse`]).
    pub background: String,
    /// Scroll bounds, when configured.
    pub bounds: Option<Rect>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            viewport_x: 0.0,
            viewport_y: 0.0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            zoom: DEFAULT_ZOOM,
            angle: DEFAULT_ANGLE,
            round_pixels: DEFAULT_ROUND_PIXELS,
            background: DEFAULT_BACKGROUND.to_string(),
            bounds: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [viewport] section
        if let Some(x) = config.getfloat("viewport", "x").ok().flatten() {
            self.viewport_x = x as f32;
        }
        if let Some(y) = config.getfloat("viewport", "y").ok().flatten() {
            self.viewport_y = y as f32;
        }
        if let Some(width) = config.getfloat("viewport", "width").ok().flatten() {
            self.viewport_width = width as f32;
        }
        if let Some(height) = config.getfloat("viewport", "height").ok().flatten() {
            self.viewport_height = height as f32;
        }

        // [view] section
        if let Some(zoom) = config.getfloat("view", "zoom").ok().flatten() {
            self.zoom = zoom as f32;
        }
        if let Some(angle) = config.getfloat("view", "angle").ok().flatten() {
            self.angle = angle as f32;
        }
        if let Some(round) = config.getbool("view", "round_pixels").ok().flatten() {
            self.round_pixels = round;
        }
        if let Some(background) = config.get("view", "background") {
            self.background = background;
        }

        // [bounds] section, all four keys required to enable
        let bx = config.getfloat("bounds", "x").ok().flatten();
        let by = config.getfloat("bounds", "y").ok().flatten();
        let bw = config.getfloat("bounds", "width").ok().flatten();
        let bh = config.getfloat("bounds", "height").ok().flatten();
        if let (Some(x), Some(y), Some(w), Some(h)) = (bx, by, bw, bh) {
            self.bounds = Some(Rect::new(x as f32, y as f32, w as f32, h as f32));
        }

        info!(
            "Loaded camera config: viewport {}x{} at ({}, {}), zoom={}, bounds={:?}",
            self.viewport_width,
            self.viewport_height,
            self.viewport_x,
            self.viewport_y,
            self.zoom,
            self.bounds
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [viewport] section
        config.set("viewport", "x", Some(self.viewport_x.to_string()));
        config.set("viewport", "y", Some(self.viewport_y.to_string()));
        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));

        // [view] section
        config.set("view", "zoom", Some(self.zoom.to_string()));
        config.set("view", "angle", Some(self.angle.to_string()));
        config.set("view", "round_pixels", Some(self.round_pixels.to_string()));
        config.set("view", "background", Some(self.background.clone()));

        if let Some(bounds) = self.bounds {
            config.set("bounds", "x", Some(bounds.x.to_string()));
            config.set("bounds", "y", Some(bounds.y.to_string()));
            config.set("bounds", "width", Some(bounds.width.to_string()));
            config.set("bounds", "height", Some(bounds.height.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved camera config to {:?}", self.config_path);

        Ok(())
    }
}
