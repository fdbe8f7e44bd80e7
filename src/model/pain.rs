//! Existential pain: an intensity that only grows, and a location that
//! is never found.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when restoring a `Pain` from serialized data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PainError {
    #[error("Pain intensity must be finite and non-negative, got {0}")]
    InvalidIntensity(f64),
}

/// Cognitive pain carried by the system.
///
/// Intensity is never negative. The location stays `None` while the pain is
/// diffuse, which in this model is always.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PainRecord")]
pub struct Pain {
    intensity: f64,
    location: Option<String>,
}

/// Unchecked wire shape of `Pain`.
#[derive(Deserialize)]
struct PainRecord {
    intensity: f64,
    location: Option<String>,
}

impl TryFrom<PainRecord> for Pain {
    type Error = PainError;

    fn try_from(record: PainRecord) -> Result<Self, Self::Error> {
        if !record.intensity.is_finite() || record.intensity < 0.0 {
            return Err(PainError::InvalidIntensity(record.intensity));
        }
        Ok(Self {
            intensity: record.intensity,
            location: record.location,
        })
    }
}

impl Pain {
    /// Non-localized pain of the given intensity.
    ///
    /// # Panics
    ///
    /// Panics if `intensity` is negative or not finite.
    pub fn diffuse(intensity: f64) -> Self {
        assert!(
            intensity.is_finite() && intensity >= 0.0,
            "pain intensity must be finite and non-negative, got {intensity}"
        );
        Self {
            intensity,
            location: None,
        }
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Intensity as narrated: whole values keep one decimal ("20.0"),
    /// fractional values print in full ("22.25").
    pub fn display_intensity(&self) -> String {
        if self.intensity.fract() == 0.0 {
            format!("{:.1}", self.intensity)
        } else {
            format!("{}", self.intensity)
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn is_localized(&self) -> bool {
        self.location.is_some()
    }

    /// Raise the intensity by `amount`.
    ///
    /// # Panics
    ///
    /// Panics if `amount` is negative; pain never decreases on its own.
    pub(crate) fn increase(&mut self, amount: f64) {
        assert!(amount >= 0.0, "pain cannot be relieved by increase({amount})");
        self.intensity += amount;
    }
}
