//! Simulator settings
//!
//! Persisted in LocalStorage on the web, optionally read from a JSON file on
//! native. Validation happens here so the per-tick math never sees a zero
//! divisor.

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorPolicy};
use crate::consts::*;
use crate::error::{Result, SimError};
use crate::sim::spawn::SizePolicy;

/// What happens when a shape reaches the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BounceVariant {
    /// Reflect off the floor and rise back to the spawn height, forever
    #[default]
    BoundedReturn,
    /// The floor absorbs the shape; it stays frozen until reset
    FloorStop,
}

impl BounceVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BounceVariant::BoundedReturn => "bounded-return",
            BounceVariant::FloorStop => "floor-stop",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounded-return" | "bounded" | "bounce" => Some(BounceVariant::BoundedReturn),
            "floor-stop" | "floor" | "stop" => Some(BounceVariant::FloorStop),
            _ => None,
        }
    }

    /// Like `from_str`, but an unknown name is an error
    pub fn parse(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| SimError::UnknownVariant(s.to_string()))
    }
}

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Gravity magnitude (always positive; direction comes from the update equations)
    pub gravity: f32,
    /// Ticks per second
    pub fps: f32,
    /// Visual speed knob: velocity gained per tick is `gravity * units / fps`
    pub units: f32,
    /// Use this color for every new shape instead of a random one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_color: Option<Color>,
    /// Use this radius for every new shape instead of the hold duration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_shape_size: Option<f32>,
    pub bounce_variant: BounceVariant,
    /// Canvas background
    pub background: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            fps: DEFAULT_FPS,
            units: DEFAULT_UNITS,
            fixed_color: None,
            fixed_shape_size: None,
            bounce_variant: BounceVariant::BoundedReturn,
            background: Color::css("black"),
        }
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the tick math relies on
    pub fn validate(&self) -> Result<()> {
        if !positive(self.gravity) {
            return Err(SimError::InvalidGravity(self.gravity));
        }
        if !positive(self.fps) {
            return Err(SimError::InvalidFps(self.fps));
        }
        if !positive(self.units) {
            return Err(SimError::InvalidUnits(self.units));
        }
        if let Some(size) = self.fixed_shape_size {
            if !positive(size) {
                return Err(SimError::InvalidShapeSize(size));
            }
        }
        Ok(())
    }

    /// Interval between ticks in milliseconds
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    /// Velocity gained by a falling shape each tick
    pub fn velocity_step(&self) -> f32 {
        self.gravity * self.units / self.fps
    }

    pub fn color_policy(&self) -> ColorPolicy {
        match &self.fixed_color {
            Some(color) => ColorPolicy::Fixed(color.clone()),
            None => ColorPolicy::Random,
        }
    }

    pub fn size_policy(&self) -> SizePolicy {
        match self.fixed_shape_size {
            Some(size) => SizePolicy::Fixed(size),
            None => SizePolicy::HoldDuration,
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "gravity_bounce_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        match self.to_json() {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Could not save settings: {:?}", e),
            },
            Err(e) => log::warn!("Could not encode settings: {}", e),
        }
    }

    /// Load settings from an optional JSON file (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.bounce_variant, BounceVariant::BoundedReturn);
        assert_eq!(settings.color_policy(), ColorPolicy::Random);
        assert_eq!(settings.size_policy(), SizePolicy::HoldDuration);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let bad_gravity = Settings {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(bad_gravity.validate(), Err(SimError::InvalidGravity(_))));

        let bad_fps = Settings {
            fps: -60.0,
            ..Default::default()
        };
        assert!(matches!(bad_fps.validate(), Err(SimError::InvalidFps(_))));

        let bad_units = Settings {
            units: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(bad_units.validate(), Err(SimError::InvalidUnits(_))));

        let bad_size = Settings {
            fixed_shape_size: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(bad_size.validate(), Err(SimError::InvalidShapeSize(_))));
    }

    #[test]
    fn test_from_json_camel_case() {
        let json = r#"{
            "gravity": 9.8,
            "fps": 75,
            "units": 5,
            "fixedColor": "red",
            "fixedShapeSize": 20,
            "bounceVariant": "floor-stop",
            "background": "black"
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.fps, 75.0);
        assert_eq!(settings.units, 5.0);
        assert_eq!(settings.bounce_variant, BounceVariant::FloorStop);
        assert_eq!(settings.color_policy(), ColorPolicy::Fixed(Color::css("red")));
        assert_eq!(settings.size_policy(), SizePolicy::Fixed(20.0));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "fps": 90 }"#).unwrap();
        assert_eq!(settings.fps, 90.0);
        assert_eq!(settings.gravity, DEFAULT_GRAVITY);
        assert_eq!(settings.fixed_color, None);
    }

    #[test]
    fn test_from_json_validates() {
        assert!(matches!(
            Settings::from_json(r#"{ "fps": 0 }"#),
            Err(SimError::InvalidFps(_))
        ));
        assert!(matches!(Settings::from_json("not json"), Err(SimError::Json(_))));
    }

    #[test]
    fn test_json_roundtrip_keeps_variant() {
        let settings = Settings {
            bounce_variant: BounceVariant::FloorStop,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert!(json.contains("\"floor-stop\""));
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(BounceVariant::from_str("Floor-Stop"), Some(BounceVariant::FloorStop));
        assert_eq!(BounceVariant::from_str("bounded"), Some(BounceVariant::BoundedReturn));
        assert_eq!(BounceVariant::from_str("sideways"), None);
        assert_eq!(BounceVariant::FloorStop.as_str(), "floor-stop");

        assert_eq!(BounceVariant::parse("stop").unwrap(), BounceVariant::FloorStop);
        assert!(matches!(
            BounceVariant::parse("sideways"),
            Err(SimError::UnknownVariant(name)) if name == "sideways"
        ));
    }

    #[test]
    fn test_tick_interval() {
        let settings = Settings {
            fps: 50.0,
            ..Default::default()
        };
        assert!((settings.tick_interval_ms() - 20.0).abs() < 1e-9);
    }
}
