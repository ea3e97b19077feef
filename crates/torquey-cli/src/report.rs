//! Plain-text tables for the command line

use std::fmt::{self, Write};

use torquey_core::prelude::*;

/// Torque and power against rpm
pub fn write_rpm_table<W: Write>(
    out: &mut W,
    curves: &RpmCurves,
    options: &CurveOptions,
) -> fmt::Result {
    let torque_label = options.units.torque().label();
    let power_label = options.units.power().label();

    writeln!(out, "{} ({} / {} vs rpm)", curves.name, torque_label, power_label)?;
    writeln!(out, "{:>8} {:>12} {:>12}", "rpm", torque_label, power_label)?;
    for ((rpm, torque), (_, power)) in curves.torque.iter().zip(&curves.power) {
        writeln!(out, "{:>8.0} {:>12.1} {:>12.2}", rpm, torque, power)?;
    }
    Ok(())
}

/// Wheel torque and power against road speed for one gear
pub fn write_speed_table<W: Write>(
    out: &mut W,
    curves: &SpeedCurves,
    options: &CurveOptions,
) -> fmt::Result {
    let speed_label = options.units.speed().label();
    let power_label = options.units.power().label();
    match &curves.gear_label {
        Some(label) => writeln!(out, "{} {} (ratio {})", curves.name, label, curves.gear_ratio)?,
        None => writeln!(out, "{} (direct drive)", curves.name)?,
    }

    writeln!(out, "{:>10} {:>14} {:>12}", speed_label, "wheel N·m", power_label)?;
    for ((speed, wheel_torque), (_, power)) in curves.torque.iter().zip(&curves.power) {
        writeln!(out, "{:>10.1} {:>14.1} {:>12.2}", speed, wheel_torque, power)?;
    }
    Ok(())
}

/// One-line tire geometry summary
pub fn tire_summary(size: &TireSize) -> String {
    format!(
        "{}: diameter {:.4} m, circumference {:.4} m",
        size,
        size.diameter_m(),
        size.circumference_m()
    )
}

/// Library contents grouped by category
pub fn write_library_listing<W: Write>(
    out: &mut W,
    library: &CarLibrary,
    category: Option<&str>,
) -> fmt::Result {
    for cat in library.categories() {
        if category.is_some_and(|c| c != cat) {
            continue;
        }
        writeln!(out, "{}", cat)?;
        for car in library.by_category(Some(cat)) {
            writeln!(out, "  {:<28} {}", car.id, car.data.name)?;
        }
    }
    Ok(())
}
