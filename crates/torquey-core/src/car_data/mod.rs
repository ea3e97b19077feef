//! Car Data Import/Export
//!
//! Handles the portable JSON representation of a single car: exporting a
//! dataset to a [`CarRecord`] and validating/normalizing imported JSON back
//! into dataset fields.

mod error;
mod export;
mod import;
mod record;

pub use error::ImportError;
pub use export::{export_car_to_json, export_file_name};
pub use import::{parse_car_json, ImportedCar};
pub use record::CarRecord;
