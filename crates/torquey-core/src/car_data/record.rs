//! The exported car shape

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::dataset::{DataSet, TorqueDataPoint};

/// A car as written to a `.json` file.
///
/// Only user-entered data is kept; display settings (color, visibility,
/// smoothing) are left out. Wheel size is stored as a diameter in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarRecord {
    /// Car name
    pub name: String,

    /// Filled-in torque samples
    pub data: Vec<TorqueDataPoint>,

    /// Wheel diameter in meters (circumference / π)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheel_diameter: Option<f64>,

    /// Final drive ratio
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_drive_ratio: Option<f64>,

    /// Gear ratios, first gear first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gears: Option<Vec<f64>>,
}

impl CarRecord {
    /// Project a dataset onto the export shape
    pub fn from_dataset(dataset: &DataSet) -> Self {
        let config = &dataset.gear_config;
        let gears = config.effective_gear_ratios();

        Self {
            name: dataset.name.clone(),
            data: dataset.filled_points().copied().collect(),
            wheel_diameter: config.tire_circumference.map(|c| c / PI),
            final_drive_ratio: config.final_drive_ratio,
            gears: if gears.is_empty() { None } else { Some(gears) },
        }
    }
}
