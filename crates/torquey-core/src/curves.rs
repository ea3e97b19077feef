//! Curve derivation
//!
//! Turns datasets into the series a chart draws: torque and power against
//! engine speed, and wheel torque and power against road speed for each gear.

use serde::{Deserialize, Serialize};

use crate::dataset::{DataSet, TorqueDataPoint};
use crate::physics::{calculate_power_kw, calculate_speed_ms, calculate_wheel_torque};
use crate::unit_conversion::{convert_power, convert_speed, round_to, to_nm};
use crate::units::UnitSelection;

/// `(x, y)` pairs in draw order
pub type Series = Vec<(f64, f64)>;

/// Which torque values count as a plottable sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorqueThreshold {
    /// `torque >= 0`
    #[default]
    NonNegative,
    /// `torque > 0`
    Positive,
}

impl TorqueThreshold {
    /// Whether `torque` passes this threshold
    pub fn accepts(&self, torque: f64) -> bool {
        match self {
            TorqueThreshold::NonNegative => torque >= 0.0,
            TorqueThreshold::Positive => torque > 0.0,
        }
    }
}

/// How curves are derived and presented
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveOptions {
    /// Display units
    pub units: UnitSelection,
    /// Which torque samples are plotted
    pub torque_threshold: TorqueThreshold,
    /// Decimal places power values are rounded to
    pub power_decimals: u32,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            units: UnitSelection::default(),
            torque_threshold: TorqueThreshold::default(),
            power_decimals: 2,
        }
    }
}

/// Torque and power against engine rpm for one car
#[derive(Debug, Clone, PartialEq)]
pub struct RpmCurves {
    /// Car name
    pub name: String,
    /// Torque in the selected torque unit
    pub torque: Series,
    /// Power in the selected power unit
    pub power: Series,
}

impl RpmCurves {
    /// Legend name of the torque series
    pub fn torque_series_name(&self) -> String {
        format!("{} Torque", self.name)
    }

    /// Legend name of the power series
    pub fn power_series_name(&self) -> String {
        format!("{} Power", self.name)
    }
}

/// Wheel torque and power against road speed for one car in one gear
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedCurves {
    /// Car name
    pub name: String,
    /// `G1`, `G2`, ... when the car has gear ratios; `None` for a single
    /// direct-drive gear
    pub gear_label: Option<String>,
    /// Transmission ratio of this gear
    pub gear_ratio: f64,
    /// Wheel torque in N·m against speed in the selected speed unit
    pub torque: Series,
    /// Power in the selected power unit against speed
    pub power: Series,
}

impl SpeedCurves {
    fn base_name(&self) -> String {
        match &self.gear_label {
            Some(label) => format!("{} {}", self.name, label),
            None => self.name.clone(),
        }
    }

    /// Legend name, including the gear label when there is one
    pub fn torque_series_name(&self) -> String {
        format!("{} Torque", self.base_name())
    }

    /// Legend name, including the gear label when there is one
    pub fn power_series_name(&self) -> String {
        format!("{} Power", self.base_name())
    }
}

/// Samples worth plotting, sorted by rpm.
///
/// Empty rows and negative rpm are dropped, torque is checked against
/// `threshold`. Samples with equal rpm keep their entry order.
pub fn chart_points(data: &[TorqueDataPoint], threshold: TorqueThreshold) -> Vec<TorqueDataPoint> {
    let mut points: Vec<TorqueDataPoint> = data
        .iter()
        .filter(|p| !p.is_placeholder() && p.rpm >= 0.0 && threshold.accepts(p.torque))
        .copied()
        .collect();
    points.sort_by(|a, b| a.rpm.total_cmp(&b.rpm));
    points
}

fn display_power(torque_nm: f64, rpm: f64, options: &CurveOptions) -> f64 {
    let kw = calculate_power_kw(torque_nm, rpm);
    round_to(convert_power(kw, options.units.power()), options.power_decimals)
}

/// Torque and power against rpm
pub fn rpm_curves(dataset: &DataSet, options: &CurveOptions) -> RpmCurves {
    let points = chart_points(&dataset.data, options.torque_threshold);
    let torque_unit = options.units.torque();

    let torque = points.iter().map(|p| (p.rpm, p.torque)).collect();
    let power = points
        .iter()
        .map(|p| (p.rpm, display_power(to_nm(p.torque, torque_unit), p.rpm, options)))
        .collect();

    RpmCurves {
        name: dataset.name.clone(),
        torque,
        power,
    }
}

/// Per-gear wheel torque and power against road speed.
///
/// Empty unless both the final drive ratio and tire circumference are set
/// to positive values.
/// With no usable gear ratios a single 1:1 gear is assumed.
pub fn speed_curves(dataset: &DataSet, options: &CurveOptions) -> Vec<SpeedCurves> {
    let config = &dataset.gear_config;
    let (Some(final_drive), Some(circumference)) =
        (config.usable_final_drive(), config.usable_tire_circumference())
    else {
        return Vec::new();
    };

    let ratios = config.effective_gear_ratios();
    let labelled = !ratios.is_empty();
    let gears = if labelled { ratios } else { vec![1.0] };

    let points = chart_points(&dataset.data, options.torque_threshold);
    let torque_unit = options.units.torque();
    let speed_unit = options.units.speed();

    gears
        .into_iter()
        .enumerate()
        .map(|(index, gear_ratio)| {
            let mut torque = Series::with_capacity(points.len());
            let mut power = Series::with_capacity(points.len());

            for p in &points {
                let torque_nm = to_nm(p.torque, torque_unit);
                let speed = convert_speed(
                    calculate_speed_ms(p.rpm, gear_ratio, final_drive, circumference),
                    speed_unit,
                );
                torque.push((speed, calculate_wheel_torque(torque_nm, gear_ratio, final_drive)));
                power.push((speed, display_power(torque_nm, p.rpm, options)));
            }

            SpeedCurves {
                name: dataset.name.clone(),
                gear_label: labelled.then(|| format!("G{}", index + 1)),
                gear_ratio,
                torque,
                power,
            }
        })
        .collect()
}

/// RPM-domain curves for every visible dataset
pub fn torque_power_chart(datasets: &[DataSet], options: &CurveOptions) -> Vec<RpmCurves> {
    datasets
        .iter()
        .filter(|ds| ds.visible)
        .map(|ds| rpm_curves(ds, options))
        .collect()
}

/// Speed-domain curves for every visible dataset with complete gearing
pub fn speed_chart(datasets: &[DataSet], options: &CurveOptions) -> Vec<SpeedCurves> {
    datasets
        .iter()
        .filter(|ds| ds.visible)
        .flat_map(|ds| speed_curves(ds, options))
        .collect()
}

/// Whether any visible dataset can be drawn against road speed
pub fn show_speed_chart(datasets: &[DataSet]) -> bool {
    datasets
        .iter()
        .any(|ds| ds.visible && ds.gear_config.is_speed_eligible())
}
