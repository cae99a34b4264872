use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SettingsResult;

/// Environment variable naming a JSON settings file to load at startup.
pub const SETTINGS_ENV_VAR: &str = "TOUCH_TRACKER_SETTINGS";

/// How close (in points) a tap must land to a line to select it.
pub const DEFAULT_PROXIMITY_RADIUS: f32 = 20.0;

/// All user-tunable settings. Persisted by eframe between runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old settings
pub struct Settings {
    pub board: BoardConfig,
    pub gestures: GestureConfig,
    pub render: RenderConfig,
}

impl Settings {
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Settings from the file named by [`SETTINGS_ENV_VAR`], if it is set.
    pub fn from_env() -> Option<SettingsResult<Self>> {
        std::env::var_os(SETTINGS_ENV_VAR).map(Self::load)
    }
}

/// Selection behavior of the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// A line is hit when a sampled point lies strictly within this distance
    pub proximity_radius: f32,
    /// Parametric fractions along a line that are tested against the tap point
    pub sample_fractions: Vec<f32>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
            sample_fractions: vec![0.0, 0.5, 1.0],
        }
    }
}

/// Configuration for gesture recognition. Distances in points, times in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Minimum movement before a pan sample is reported
    pub min_pan_distance: f32,
    /// Maximum movement for a touch to still count as a tap or long press
    pub tap_slop: f32,
    /// Maximum contact time of a tap
    pub tap_max_duration: f64,
    /// Maximum time between taps for a double tap
    pub multi_tap_time: f64,
    /// Time a touch must be held for a long press
    pub long_press_time: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_pan_distance: 1.0,
            tap_slop: 10.0,
            tap_max_duration: 0.3,
            multi_tap_time: 0.3,
            long_press_time: 0.5,
        }
    }
}

/// Colors are stored as unmultiplied RGBA so the file format doesn't depend on egui.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub line_width: f32,
    pub background: [u8; 4],
    pub finished: [u8; 4],
    pub in_progress: [u8; 4],
    pub selected: [u8; 4],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_width: 10.0,
            background: [128, 128, 128, 255],
            finished: [0, 0, 0, 255],
            in_progress: [255, 0, 0, 255],
            selected: [0, 255, 0, 255],
        }
    }
}

impl RenderConfig {
    pub fn background_color(&self) -> Color32 {
        to_color(self.background)
    }

    pub fn finished_color(&self) -> Color32 {
        to_color(self.finished)
    }

    pub fn in_progress_color(&self) -> Color32 {
        to_color(self.in_progress)
    }

    pub fn selected_color(&self) -> Color32 {
        to_color(self.selected)
    }
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}
