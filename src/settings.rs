//! Simulation settings
//!
//! Fixed at construction time. Loaded from JSON or built from a preset.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Bounds;

/// RGB color, 0-255 per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const BLUE: Rgb = Rgb(0, 0, 255);

    /// Perceived brightness (0-255), used by text surfaces to pick glyphs
    pub fn luma(&self) -> u8 {
        let Rgb(r, g, b) = *self;
        ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
    }
}

/// Named presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    #[default]
    Default,
    /// White robot on black, larger and faster
    Night,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Night => "night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default" => Some(Preset::Default),
            "night" | "dark" => Some(Preset::Night),
            _ => None,
        }
    }
}

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl SettingsError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        SettingsError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Construction-time configuration for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window/arena size in pixels (width, height)
    pub arena_size: (u32, u32),
    pub background: Rgb,
    /// Target ticks per second
    pub tick_rate: u32,
    pub caption: String,

    // === Robot ===
    pub robot_radius: f32,
    pub robot_color: Rgb,
    /// Pixels per tick
    pub translational_speed: f32,
    /// Degrees per tick
    pub rotational_speed: f32,
    /// Upper bound on a single rotation phase, in seconds
    pub max_rotation_secs: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_size: (ARENA_WIDTH, ARENA_HEIGHT),
            background: Rgb::WHITE,
            tick_rate: TICK_RATE,
            caption: WINDOW_CAPTION.to_string(),

            robot_radius: ROBOT_RADIUS,
            robot_color: Rgb::BLUE,
            translational_speed: ROBOT_TRANSLATIONAL_SPEED,
            rotational_speed: ROBOT_ROTATIONAL_SPEED,
            max_rotation_secs: MAX_ROTATION_SECS,
        }
    }
}

impl Settings {
    /// Create settings from a named preset
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Default => Self::default(),
            Preset::Night => Self::night(),
        }
    }

    /// White robot on a black background, radius 30, 3 px/tick
    pub fn night() -> Self {
        Self {
            background: Rgb::BLACK,
            robot_radius: 30.0,
            robot_color: Rgb::WHITE,
            translational_speed: 3.0,
            rotational_speed: 1.0,
            ..Self::default()
        }
    }

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (w, h) = self.arena_size;
        if w == 0 || h == 0 {
            return Err(SettingsError::invalid("arena_size", "dimensions must be non-zero"));
        }
        if self.tick_rate == 0 {
            return Err(SettingsError::invalid("tick_rate", "must be positive"));
        }
        positive("robot_radius", self.robot_radius)?;
        positive("translational_speed", self.translational_speed)?;
        positive("rotational_speed", self.rotational_speed)?;
        positive("max_rotation_secs", self.max_rotation_secs)?;

        let diameter = self.robot_radius * 2.0;
        if diameter > w as f32 || diameter > h as f32 {
            return Err(SettingsError::invalid(
                "robot_radius",
                format!("robot of radius {} does not fit a {}x{} arena", self.robot_radius, w, h),
            ));
        }
        Ok(())
    }

    /// Longest rotation phase in ticks (never less than one)
    pub fn max_rotation_ticks(&self) -> u32 {
        let ticks = (self.max_rotation_secs * self.tick_rate as f32).round();
        (ticks as u32).max(1)
    }

    /// Arena rectangle the robot must stay within
    pub fn bounds(&self) -> Bounds {
        let (w, h) = self.arena_size;
        Bounds::from_size(w as f32, h as f32)
    }

    /// Starting point for the robot
    pub fn arena_center(&self) -> Vec2 {
        self.bounds().center()
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::invalid(field, format!("must be positive, got {value}")))
    }
}
