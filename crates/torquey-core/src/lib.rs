//! # Torquey Core Library
//!
//! Core functionality for the Torquey torque and power curve viewer.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Torque, power and speed unit conversion
//! - Drivetrain physics (power, wheel torque, road speed)
//! - Curve derivation for RPM and road-speed charts
//! - Car JSON import/export with validation
//! - Tire size geometry and a preset car library
//!
//! Everything except [`settings::Settings::load`]/[`settings::Settings::save`]
//! is pure: no I/O and no retained state.
//!
//! ## Example
//!
//! ```rust
//! use torquey_core::prelude::*;
//!
//! let text = r#"{"name":"Test Car","data":[{"rpm":1000,"torque":100}],"finalDriveRatio":3.5,"wheelDiameter":0.63}"#;
//! let car = parse_car_json(text).unwrap();
//! let dataset = DataSet::from_imported(0, car);
//!
//! let options = CurveOptions::default();
//! let curves = rpm_curves(&dataset, &options);
//! assert_eq!(curves.power.len(), 1);
//!
//! let json = export_car_to_json(&dataset).unwrap();
//! assert!(json.contains("\"finalDriveRatio\": 3.5"));
//! ```

pub mod car_data;
pub mod curves;
pub mod dataset;
pub mod library;
pub mod physics;
pub mod settings;
pub mod tire;
pub mod unit_conversion;
pub mod units;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::car_data::{
        export_car_to_json, export_file_name, parse_car_json, CarRecord, ImportError, ImportedCar,
    };
    pub use crate::curves::{
        rpm_curves, show_speed_chart, speed_chart, speed_curves, torque_power_chart, CurveOptions,
        RpmCurves, SpeedCurves, TorqueThreshold,
    };
    pub use crate::dataset::{DataSet, GearConfig, TorqueDataPoint};
    pub use crate::library::{CarLibrary, PresetCar};
    pub use crate::settings::Settings;
    pub use crate::tire::TireSize;
    pub use crate::units::{PowerUnit, SpeedUnit, TorqueUnit, UnitSelection, UnitStandard};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
