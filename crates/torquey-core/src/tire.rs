//! Tire geometry
//!
//! Converts tire size codes such as `225/45R17` to rolling diameter and
//! circumference, and lists the common sizes offered as presets.

use regex::Regex;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

const MM_PER_INCH: f64 = 25.4;

/// Errors from tire size parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TireError {
    /// Not of the form `WIDTH/ASPECT` `R` `RIM`
    #[error("Invalid tire size code: '{0}' (expected e.g. 225/45R17)")]
    InvalidCode(String),

    /// A dimension is zero, negative or not finite
    #[error("Invalid tire dimension: {field} must be positive, got {value}")]
    InvalidDimension {
        /// Which dimension
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// A tire preset offered in the drivetrain editor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TirePreset {
    /// Size code and diameter as shown in the picker
    pub label: &'static str,
    /// Rolling circumference in meters
    pub circumference: f64,
}

/// Common tire sizes
pub const TIRE_PRESETS: [TirePreset; 12] = [
    TirePreset { label: "205/55R16 (0.627m)", circumference: 1.97 },
    TirePreset { label: "215/45R17 (0.617m)", circumference: 1.94 },
    TirePreset { label: "225/45R17 (0.630m)", circumference: 1.98 },
    TirePreset { label: "225/40R18 (0.624m)", circumference: 1.96 },
    TirePreset { label: "235/40R18 (0.637m)", circumference: 2.0 },
    TirePreset { label: "245/40R18 (0.640m)", circumference: 2.01 },
    TirePreset { label: "255/35R18 (0.624m)", circumference: 1.96 },
    TirePreset { label: "265/35R18 (0.637m)", circumference: 2.0 },
    TirePreset { label: "275/35R19 (0.659m)", circumference: 2.07 },
    TirePreset { label: "285/30R19 (0.637m)", circumference: 2.0 },
    TirePreset { label: "295/30R20 (0.665m)", circumference: 2.09 },
    TirePreset { label: "305/30R20 (0.672m)", circumference: 2.11 },
];

/// Find the preset whose circumference is exactly `circumference`
pub fn preset_for_circumference(circumference: f64) -> Option<&'static TirePreset> {
    TIRE_PRESETS
        .iter()
        .find(|p| p.circumference == circumference)
}

/// Circumference in meters for a wheel diameter in meters
pub fn circumference_from_diameter(diameter_m: f64) -> f64 {
    diameter_m * PI
}

/// Diameter in meters for a circumference in meters
pub fn diameter_from_circumference(circumference_m: f64) -> f64 {
    circumference_m / PI
}

/// Metric tire size: section width, aspect ratio and rim diameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TireSize {
    /// Section width in millimeters
    pub width_mm: f64,
    /// Sidewall height as a percentage of width
    pub aspect_ratio: f64,
    /// Rim diameter in inches
    pub rim_diameter_in: f64,
}

impl TireSize {
    /// Validated size; every dimension must be positive
    pub fn new(width_mm: f64, aspect_ratio: f64, rim_diameter_in: f64) -> Result<Self, TireError> {
        for (field, value) in [
            ("width", width_mm),
            ("aspect ratio", aspect_ratio),
            ("rim diameter", rim_diameter_in),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(TireError::InvalidDimension { field, value });
            }
        }
        Ok(Self {
            width_mm,
            aspect_ratio,
            rim_diameter_in,
        })
    }

    /// Sidewall height in millimeters
    pub fn sidewall_mm(&self) -> f64 {
        self.width_mm * self.aspect_ratio / 100.0
    }

    /// Overall diameter in meters
    pub fn diameter_m(&self) -> f64 {
        (2.0 * self.sidewall_mm() + self.rim_diameter_in * MM_PER_INCH) / 1000.0
    }

    /// Rolling circumference in meters
    pub fn circumference_m(&self) -> f64 {
        circumference_from_diameter(self.diameter_m())
    }
}

fn size_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*/\s*(\d+(?:\.\d+)?)\s*(?:Z?R|-)\s*(\d+(?:\.\d+)?)$")
            .expect("tire size pattern is valid")
    })
}

impl FromStr for TireSize {
    type Err = TireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let caps = size_code_regex()
            .captures(code)
            .ok_or_else(|| TireError::InvalidCode(s.to_string()))?;

        let field = |i: usize| -> Result<f64, TireError> {
            caps[i]
                .parse::<f64>()
                .map_err(|_| TireError::InvalidCode(s.to_string()))
        };

        TireSize::new(field(1)?, field(2)?, field(3)?)
    }
}

impl fmt::Display for TireSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}R{}", self.width_mm, self.aspect_ratio, self.rim_diameter_in)
    }
}
