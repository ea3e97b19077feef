//! Car datasets
//!
//! A dataset is one car's torque samples plus its drivetrain configuration
//! and a few display-only properties.

use serde::{Deserialize, Serialize};

use crate::car_data::ImportedCar;

/// Colors handed out to new cars, in order
pub const DATASET_COLORS: [&str; 6] = [
    "#ff6b6b", "#4ecdc4", "#feca57", "#ff9ff3", "#54a0ff", "#5f27cd",
];

/// One torque measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueDataPoint {
    /// Engine speed in rpm
    pub rpm: f64,
    /// Engine torque in the unit it was entered in
    pub torque: f64,
}

impl TorqueDataPoint {
    /// Sample at `rpm` with `torque`
    pub fn new(rpm: f64, torque: f64) -> Self {
        Self { rpm, torque }
    }

    /// An empty entry row: neither rpm nor torque has been filled in
    pub fn is_placeholder(&self) -> bool {
        self.rpm <= 0.0 && self.torque <= 0.0
    }
}

/// Drivetrain configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearConfig {
    /// Differential ratio
    pub final_drive_ratio: Option<f64>,

    /// Transmission ratios, first gear first. `0` marks a gear that has been
    /// added but not filled in.
    pub gear_ratios: Vec<f64>,

    /// Rolling circumference in meters
    pub tire_circumference: Option<f64>,
}

impl GearConfig {
    /// Gear ratios with placeholder (non-positive) entries removed
    pub fn effective_gear_ratios(&self) -> Vec<f64> {
        self.gear_ratios.iter().copied().filter(|r| *r > 0.0).collect()
    }

    /// Final drive ratio, if set to a usable (positive) value
    pub fn usable_final_drive(&self) -> Option<f64> {
        self.final_drive_ratio.filter(|r| *r > 0.0)
    }

    /// Tire circumference, if set to a usable (positive) value
    pub fn usable_tire_circumference(&self) -> Option<f64> {
        self.tire_circumference.filter(|c| *c > 0.0)
    }

    /// Both the final drive and the tire are known and positive, so road
    /// speed can be derived
    pub fn is_speed_eligible(&self) -> bool {
        self.usable_final_drive().is_some() && self.usable_tire_circumference().is_some()
    }
}

/// A car as held by the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    /// Display name, also used for export file names
    pub name: String,
    /// Whether the car is drawn
    pub visible: bool,
    /// CSS hex color of the car's series
    pub color: String,
    /// Torque samples in entry order, including empty rows
    pub data: Vec<TorqueDataPoint>,
    /// Drivetrain
    pub gear_config: GearConfig,
    /// Draw curves smoothed rather than as straight segments
    pub smooth_curve: bool,
}

impl DataSet {
    /// A fresh car in slot `index` with a single empty row
    pub fn new_car(index: usize) -> Self {
        Self {
            name: format!("Car {}", index + 1),
            visible: true,
            color: DATASET_COLORS[index % DATASET_COLORS.len()].to_string(),
            data: vec![TorqueDataPoint::new(0.0, 0.0)],
            gear_config: GearConfig::default(),
            smooth_curve: true,
        }
    }

    /// A new car in slot `index` populated from an import
    pub fn from_imported(index: usize, imported: ImportedCar) -> Self {
        let mut dataset = Self::new_car(index);
        imported.apply_to(&mut dataset);
        dataset
    }

    /// Points that carry data, in entry order
    pub fn filled_points(&self) -> impl Iterator<Item = &TorqueDataPoint> {
        self.data.iter().filter(|p| !p.is_placeholder())
    }

    /// Append an empty entry row
    pub fn add_point(&mut self) {
        self.data.push(TorqueDataPoint::new(0.0, 0.0));
    }

    /// Remove the row at `index`. The last remaining row is never removed.
    /// Returns whether a row was removed.
    pub fn remove_point(&mut self, index: usize) -> bool {
        if self.data.len() <= 1 || index >= self.data.len() {
            return false;
        }
        self.data.remove(index);
        true
    }

    /// Append an unset gear
    pub fn add_gear(&mut self) {
        self.gear_config.gear_ratios.push(0.0);
    }

    /// Remove the gear at `index`. Returns whether a gear was removed.
    pub fn remove_gear(&mut self, index: usize) -> bool {
        if index >= self.gear_config.gear_ratios.len() {
            return false;
        }
        self.gear_config.gear_ratios.remove(index);
        true
    }
}
