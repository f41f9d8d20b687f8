//! Presentation configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::interp::Ease;

/// Top-level settings for a presentation. Every field has a default, so a
/// partial JSON object (or none at all) is accepted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of slides in the deck; ordinals run 1..=total_slides.
    pub total_slides: u32,

    /// Page-wide tween defaults, used where a step names no ease/duration.
    pub default_ease: Ease,
    pub default_duration: f32,

    pub transition: TransitionCfg,

    /// Delay before a slide's content reveal starts.
    pub reveal_delay: f32,

    /// Body fade-in at startup.
    pub page_fade_duration: f32,

    pub nav_float: NavFloatCfg,

    /// Opacity applied to a disabled prev/next control.
    pub disabled_opacity: f32,

    /// Upper bound on a single frame step, in seconds.
    pub max_frame_delta: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransitionCfg {
    /// Duration of each half (exit, enter).
    pub duration: f32,
    /// Horizontal travel of the outgoing/incoming slide.
    pub offset: f32,
    pub ease: Ease,
    /// How long before the enter tween ends the content reveal is triggered.
    pub reveal_lead: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavFloatCfg {
    pub enabled: bool,
    pub offset_y: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            total_slides: 12,
            default_ease: Ease::Power2Out,
            default_duration: 0.6,
            transition: TransitionCfg::default(),
            reveal_delay: 0.1,
            page_fade_duration: 1.0,
            nav_float: NavFloatCfg::default(),
            disabled_opacity: 0.5,
            max_frame_delta: 0.1,
        }
    }
}

impl Default for TransitionCfg {
    fn default() -> Self {
        Self {
            duration: 0.4,
            offset: 100.0,
            ease: Ease::Power2InOut,
            reveal_lead: 0.2,
        }
    }
}

impl Default for NavFloatCfg {
    fn default() -> Self {
        Self {
            enabled: true,
            offset_y: -3.0,
            duration: 2.0,
            ease: Ease::Power1InOut,
        }
    }
}

fn check_duration(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration { field, value })
    }
}

fn check_finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

impl Config {
    /// Reject values the navigator or timeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_slides == 0 {
            return Err(ConfigError::NoSlides);
        }
        check_duration("default_duration", self.default_duration)?;
        check_duration("transition.duration", self.transition.duration)?;
        check_duration("transition.reveal_lead", self.transition.reveal_lead)?;
        check_duration("reveal_delay", self.reveal_delay)?;
        check_duration("page_fade_duration", self.page_fade_duration)?;
        check_duration("nav_float.duration", self.nav_float.duration)?;
        check_finite("transition.offset", self.transition.offset)?;
        check_finite("nav_float.offset_y", self.nav_float.offset_y)?;
        // transitions only complete while time advances
        if !(self.max_frame_delta.is_finite() && self.max_frame_delta > 0.0) {
            return Err(ConfigError::InvalidFrameDelta(self.max_frame_delta));
        }
        if !(0.0..=1.0).contains(&self.disabled_opacity) {
            return Err(ConfigError::InvalidOpacity(self.disabled_opacity));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{ "total_slides": 5, "transition": { "offset": 60 } }"#)
                .unwrap();
        assert_eq!(cfg.total_slides, 5);
        assert_eq!(cfg.transition.offset, 60.0);
        assert_eq!(cfg.transition.duration, 0.4);
        assert_eq!(cfg.reveal_delay, 0.1);
    }

    #[test]
    fn rejects_bad_values() {
        let cfg = Config {
            total_slides: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::NoSlides));

        let mut cfg = Config::default();
        cfg.transition.duration = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDuration {
                field: "transition.duration",
                ..
            })
        ));

        let cfg = Config {
            disabled_opacity: 2.0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidOpacity(2.0)));

        let cfg = Config {
            max_frame_delta: 0.0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFrameDelta(0.0)));
        let cfg = Config {
            max_frame_delta: f32::INFINITY,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidFrameDelta(_))
        ));
    }

    #[test]
    fn rejects_non_finite_offsets() {
        let mut cfg = Config::default();
        cfg.transition.offset = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "transition.offset",
                ..
            })
        ));

        let mut cfg = Config::default();
        cfg.nav_float.offset_y = f32::INFINITY;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                field: "nav_float.offset_y",
                value: f32::INFINITY
            })
        );
    }
}
