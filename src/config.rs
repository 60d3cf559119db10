//! Start-up configuration for the gear widget.
//!
//! The host page may embed
//! `<script id="gear-scroll-config" type="application/json">{ ... }</script>`;
//! any field left out keeps its default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::GearSpec;
use crate::state::SpringConfig;

pub const CONFIG_ELEMENT_ID: &str = "gear-scroll-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Also covers gear geometry or spring settings that break their invariants.
    #[error("malformed gear config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearConfig {
    pub gear: GearSpec,
    pub spring: SpringConfig,
    pub tooltip: String,
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            gear: GearSpec::default(),
            spring: SpringConfig::default(),
            tooltip: "↻ Scroll".to_string(),
        }
    }
}

impl GearConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GearConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Reads the embedded config element, falling back to defaults when it
    /// is absent or unusable.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            log::debug!("no #{CONFIG_ELEMENT_ID} element, using default gear config");
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default gear config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_gives_defaults() {
        assert_eq!(GearConfig::from_json("  ").expect("empty ok"), GearConfig::default());
        assert_eq!(GearConfig::from_json("{}").expect("object ok"), GearConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let c = GearConfig::from_json(r#"{"tooltip":"spin","spring":{"stiffness":120}}"#)
            .expect("valid json");
        assert_eq!(c.tooltip, "spin");
        assert_eq!(c.spring.stiffness, 120.0);
        assert_eq!(c.spring.damping, 20.0);
        assert_eq!(c.gear, GearSpec::default());
    }

    #[test]
    fn custom_gear_is_validated() {
        let c = GearConfig::from_json(
            r#"{"gear":{"teeth_count":12,"inner_radius":30,"outer_radius":45,"tooth_height":10}}"#,
        )
        .expect("valid gear");
        assert_eq!(c.gear.teeth_count(), 12);

        let err = GearConfig::from_json(
            r#"{"gear":{"teeth_count":2,"inner_radius":30,"outer_radius":45,"tooth_height":10}}"#,
        )
        .expect_err("two teeth is not a gear");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("at least 3 teeth"));
    }

    #[test]
    fn partial_gear_override_keeps_the_rest() {
        let c = GearConfig::from_json(r#"{"gear":{"teeth_count":12},"tooltip":"spin"}"#)
            .expect("partial gear is fine");
        assert_eq!(c.gear.teeth_count(), 12);
        assert_eq!(c.gear.outer_radius(), GearSpec::default().outer_radius());
        assert_eq!(c.tooltip, "spin");
    }

    #[test]
    fn divergent_spring_settings_are_rejected() {
        let err = GearConfig::from_json(r#"{"spring":{"stiffness":20000}}"#)
            .expect_err("too stiff for the fixed step");
        assert!(err.to_string().contains("too stiff"));

        let err = GearConfig::from_json(r#"{"spring":{"damping":-5}}"#)
            .expect_err("negative damping adds energy");
        assert!(err.to_string().contains("damping"));

        let err = GearConfig::from_json(r#"{"spring":{"mass":0}}"#).expect_err("zero mass");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GearConfig::from_json("{not json").expect_err("broken json");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
