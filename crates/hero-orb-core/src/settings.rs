//! Engine settings and caller overrides.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// Effective configuration of one orb engine instance.
///
/// `perspective` must exceed `radius`; otherwise the depth factor diverges
/// for points facing the camera. This is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrbSettings {
    /// Number of points sampled on the sphere.
    pub particle_count: usize,
    /// Sphere radius in model units.
    pub radius: f64,
    /// Base on-screen particle radius before scale and twinkle.
    pub base_size: f64,
    /// Amplitude of the size oscillation (0 disables twinkling).
    pub twinkle: f64,
    /// Clock increment per rendered frame.
    pub spin_speed: f64,
    /// Multiplier from clock to yaw angle.
    pub yaw_factor: f64,
    /// Peak pitch angle in radians.
    pub tilt_amplitude: f64,
    /// Pitch oscillation frequency relative to the clock.
    pub tilt_frequency: f64,
    /// Screen-space scale applied to projected coordinates.
    pub projection_scale: f64,
    /// Camera distance along the depth axis.
    pub perspective: f64,
    /// CSS colour of the glow around every particle.
    pub shadow_color: String,
}

impl Default for OrbSettings {
    fn default() -> Self {
        Self {
            particle_count: 1800,
            radius: 1.52,
            base_size: 1.4,
            twinkle: 0.55,
            spin_speed: 0.011,
            yaw_factor: 0.26,
            tilt_amplitude: 0.55,
            tilt_frequency: 0.5,
            projection_scale: 0.294,
            perspective: 3.5,
            shadow_color: "rgba(255, 200, 120, 0.35)".to_string(),
        }
    }
}

impl OrbSettings {
    /// Defaults with `overrides` merged over them.
    pub fn from_overrides(overrides: &OrbOverrides) -> Self {
        Self::default().merged(overrides)
    }

    /// Copy of these settings with every present override applied.
    pub fn merged(&self, overrides: &OrbOverrides) -> Self {
        let mut settings = self.clone();
        if let Some(v) = overrides.particle_count {
            settings.particle_count = v;
        }
        if let Some(v) = overrides.radius {
            settings.radius = v;
        }
        if let Some(v) = overrides.base_size {
            settings.base_size = v;
        }
        if let Some(v) = overrides.twinkle {
            settings.twinkle = v;
        }
        if let Some(v) = overrides.spin_speed {
            settings.spin_speed = v;
        }
        if let Some(v) = overrides.yaw_factor {
            settings.yaw_factor = v;
        }
        if let Some(v) = overrides.tilt_amplitude {
            settings.tilt_amplitude = v;
        }
        if let Some(v) = overrides.tilt_frequency {
            settings.tilt_frequency = v;
        }
        if let Some(v) = overrides.projection_scale {
            settings.projection_scale = v;
        }
        if let Some(v) = overrides.perspective {
            settings.perspective = v;
        }
        if let Some(v) = &overrides.shadow_color {
            settings.shadow_color.clone_from(v);
        }
        settings
    }

    /// Serialise as a JSON object with the same keys the browser API accepts.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Partial settings supplied by a caller. Absent fields keep their defaults.
///
/// Unknown keys are ignored so a browser configuration object may carry
/// host-only options such as `resizeTarget`. A key whose value has the wrong
/// type is dropped on its own; the remaining keys still apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrbOverrides {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub particle_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub base_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub twinkle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub spin_speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub yaw_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub tilt_amplitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub tilt_frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub projection_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub perspective: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub shadow_color: Option<String>,
}

/// Deserialize one override, treating a badly typed value as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match T::deserialize(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            log::warn!("ignoring hero orb setting: {err}");
            Ok(None)
        }
    }
}

impl OrbOverrides {
    /// Parse overrides from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse overrides from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Whether no override is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
