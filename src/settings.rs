//! Player preferences
//!
//! Kept separate from [`crate::Tuning`]: tuning changes the game, settings
//! only change how much of it the player sees.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_PARTICLES;
use crate::tuning::ConfigError;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Maximum live particles for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 100,
            QualityPreset::Medium => MAX_PARTICLES,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,
    /// Screen shake on crash
    pub screen_shake: bool,
    /// Particle effects (trail, explosion, sparkles)
    pub particles: bool,
    /// Reduced motion (suppresses shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            screen_shake: true,
            particles: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective particle count cap
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of scalars; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_motion_disables_shake() {
        let settings = Settings {
            reduced_motion: true,
            ..Settings::default()
        };
        assert!(settings.screen_shake);
        assert!(!settings.effective_screen_shake());
    }

    #[test]
    fn test_particle_cap() {
        assert_eq!(Settings::from_preset(QualityPreset::Low).max_particles(), 100);
        let off = Settings {
            particles: false,
            ..Settings::default()
        };
        assert_eq!(off.max_particles(), 0);
    }

    #[test]
    fn test_json_round_trip_and_partial() {
        let settings = Settings::from_preset(QualityPreset::High);
        let parsed = Settings::from_json(&settings.to_json()).unwrap();
        assert_eq!(parsed, settings);

        let partial = Settings::from_json(r#"{ "quality": "Low" }"#).unwrap();
        assert_eq!(partial.quality, QualityPreset::Low);
        assert!(partial.particles);
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!(QualityPreset::parse("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::parse("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }
}
