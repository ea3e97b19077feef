//! Unit Conversion Functions
//!
//! Provides conversion functions for torque and speed curves:
//! - Torque: lb·ft → N·m
//! - Power: kW → hp (mechanical) / PS (metric)
//! - Speed: m/s → km/h / mph
//!
//! All inputs are normalized to SI first (N·m, kW, m/s) and converted to the
//! display unit last. No rounding is applied here; see [`round_to`].

use crate::units::{PowerUnit, SpeedUnit, TorqueUnit};

/// N·m per lb·ft
pub const NM_PER_LBFT: f64 = 1.35582;

/// Mechanical horsepower per kW
pub const HP_PER_KW: f64 = 1.34102;

/// Metric horsepower (PS) per kW
pub const PS_PER_KW: f64 = 1.35962;

/// km/h per m/s
pub const KMH_PER_MS: f64 = 3.6;

/// mph per m/s
pub const MPH_PER_MS: f64 = 2.23694;

/// Convert a torque value in `unit` to N·m
pub fn to_nm(value: f64, unit: TorqueUnit) -> f64 {
    match unit {
        TorqueUnit::LbFt => value * NM_PER_LBFT,
        TorqueUnit::Nm => value,
    }
}

/// Convert power in kW to `unit`
pub fn convert_power(kw: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Kw => kw,
        PowerUnit::Hp => kw * HP_PER_KW,
        PowerUnit::Ps => kw * PS_PER_KW,
    }
}

/// Convert speed in m/s to `unit`
pub fn convert_speed(ms: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::Ms => ms,
        SpeedUnit::Kmh => ms * KMH_PER_MS,
        SpeedUnit::Mph => ms * MPH_PER_MS,
    }
}

/// Most decimal places [`round_to`] honours; an `f64` carries no more
pub const MAX_DISPLAY_DECIMALS: u32 = 15;

/// Round a value for display to a fixed number of decimal places
///
/// Halfway cases round away from zero. `decimals` is capped at
/// [`MAX_DISPLAY_DECIMALS`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_DISPLAY_DECIMALS) as i32);
    (value * factor).round() / factor
}
