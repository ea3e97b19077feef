//! Drivetrain physics
//!
//! Power from torque and engine speed, torque at the wheel, and road speed
//! from engine speed and gearing. Inputs are SI (N·m, m) and assumed finite.

use std::f64::consts::PI;

/// Engine power in kW from torque in N·m at `rpm`.
///
/// P = T × ω / 1000 with ω = rpm × 2π / 60.
pub fn calculate_power_kw(torque_nm: f64, rpm: f64) -> f64 {
    if torque_nm == 0.0 || rpm == 0.0 {
        return 0.0;
    }
    torque_nm * rpm * 2.0 * PI / 60_000.0
}

/// Torque at the driven wheel after the gearbox and final drive
pub fn calculate_wheel_torque(engine_torque_nm: f64, gear_ratio: f64, final_drive_ratio: f64) -> f64 {
    if engine_torque_nm == 0.0 {
        return 0.0;
    }
    engine_torque_nm * gear_ratio * final_drive_ratio
}

/// Road speed in m/s at `rpm` for the given gearing.
///
/// `gear_ratio` and `final_drive_ratio` must both be strictly positive;
/// callers filter placeholder ratios before getting here.
pub fn calculate_speed_ms(
    rpm: f64,
    gear_ratio: f64,
    final_drive_ratio: f64,
    tire_circumference: f64,
) -> f64 {
    if rpm == 0.0 {
        return 0.0;
    }
    let wheel_rpm = rpm / (gear_ratio * final_drive_ratio);
    wheel_rpm * tire_circumference / 60.0
}
