//! Car Library
//!
//! A catalogue of ready-made cars grouped by category, read from a single
//! JSON document:
//!
//! ```json
//! [
//!   { "id": "mazda-mx5-nd", "category": "JDM", "data": { "name": "...", "data": [...] } }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use thiserror::Error;

use crate::car_data::{CarRecord, ImportedCar};
use crate::dataset::GearConfig;

/// Errors from loading a car library
#[derive(Error, Debug)]
pub enum LibraryError {
    /// The document is not a list of preset cars
    #[error("Library parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two presets share an id
    #[error("Duplicate preset id: {0}")]
    DuplicateId(String),
}

/// A car shipped with the library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetCar {
    /// Unique key
    pub id: String,
    /// Grouping shown in the library browser
    pub category: String,
    /// The car in export format
    pub data: CarRecord,
}

impl PresetCar {
    /// Convert to dataset fields. Library data is trusted, so nothing is
    /// filtered.
    pub fn to_imported(&self) -> ImportedCar {
        let record = &self.data;
        ImportedCar {
            name: record.name.clone(),
            data: record.data.clone(),
            gear_config: GearConfig {
                final_drive_ratio: record.final_drive_ratio,
                gear_ratios: record.gears.clone().unwrap_or_default(),
                tire_circumference: record.wheel_diameter.map(|d| d * PI),
            },
        }
    }
}

/// Preset cars in document order
#[derive(Debug, Clone, Default)]
pub struct CarLibrary {
    cars: Vec<PresetCar>,
}

impl CarLibrary {
    /// Build a library, rejecting duplicate ids
    pub fn new(cars: Vec<PresetCar>) -> Result<Self, LibraryError> {
        for (i, car) in cars.iter().enumerate() {
            if cars[..i].iter().any(|other| other.id == car.id) {
                return Err(LibraryError::DuplicateId(car.id.clone()));
            }
        }
        Ok(Self { cars })
    }

    /// Parse a library document
    pub fn from_json(text: &str) -> Result<Self, LibraryError> {
        let cars: Vec<PresetCar> = serde_json::from_str(text)?;
        tracing::debug!("Loaded car library with {} presets", cars.len());
        Self::new(cars)
    }

    /// All presets
    pub fn cars(&self) -> &[PresetCar] {
        &self.cars
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for car in &self.cars {
            if !categories.contains(&car.category.as_str()) {
                categories.push(&car.category);
            }
        }
        categories
    }

    /// Cars in `category`, or every car for `None`
    pub fn by_category<'a>(&'a self, category: Option<&'a str>) -> impl Iterator<Item = &'a PresetCar> + 'a {
        self.cars
            .iter()
            .filter(move |car| category.map_or(true, |c| car.category == c))
    }

    /// Look a preset up by id
    pub fn get(&self, id: &str) -> Option<&PresetCar> {
        self.cars.iter().find(|car| car.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id":"a","category":"JDM","data":{"name":"A","data":[]}},
            {"id":"a","category":"JDM","data":{"name":"B","data":[]}}
        ]"#;
        let err = CarLibrary::from_json(json).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate preset id: a");
    }

    #[test]
    fn test_malformed_library() {
        assert!(matches!(
            CarLibrary::from_json("{}"),
            Err(LibraryError::Parse(_))
        ));
    }
}
