//! Car import and validation
//!
//! Accepts both the bare record and the older `{"car": {...}}` wrapper.
//! Required fields are checked in order and the first failure aborts the
//! import. Optional drivetrain fields never fail an import; bad values are
//! dropped.

use serde_json::{Map, Value};
use std::f64::consts::PI;

use super::error::ImportError;
use crate::dataset::{DataSet, GearConfig, TorqueDataPoint};

/// A validated car ready to be merged into a dataset
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedCar {
    /// Car name
    pub name: String,
    /// Torque samples in file order
    pub data: Vec<TorqueDataPoint>,
    /// Drivetrain with the wheel size converted to a circumference
    pub gear_config: GearConfig,
}

impl ImportedCar {
    /// Replace the dataset's name, data and drivetrain with the imported
    /// values. Display settings are kept.
    pub fn apply_to(self, dataset: &mut DataSet) {
        dataset.name = self.name;
        dataset.data = self.data;
        dataset.gear_config = self.gear_config;
    }
}

/// Parse and validate car JSON
pub fn parse_car_json(text: &str) -> Result<ImportedCar, ImportError> {
    let result = validate(text);
    if let Err(ref e) = result {
        tracing::warn!("Rejected car import: {}", e);
    }
    result
}

fn validate(text: &str) -> Result<ImportedCar, ImportError> {
    let parsed: Value = serde_json::from_str(text).map_err(|_| ImportError::MalformedJson)?;

    let wrapped = parsed.get("car").filter(|car| is_truthy(car));
    let named = parsed.get("name").is_some_and(is_truthy);
    let car = match wrapped {
        Some(car) => car,
        None if named => &parsed,
        None => return Err(ImportError::InvalidFormat),
    };

    let name = match car.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        _ => return Err(ImportError::InvalidName),
    };

    let points = car
        .get("data")
        .and_then(Value::as_array)
        .ok_or(ImportError::InvalidTorqueData)?;

    let data = points
        .iter()
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;

    if data.is_empty() {
        return Err(ImportError::NoDataPoints);
    }

    let gear_config = match car.as_object() {
        Some(fields) => normalize_gear_config(fields),
        None => GearConfig::default(),
    };

    tracing::debug!(
        "Imported '{}': {} points, {} gears",
        name,
        data.len(),
        gear_config.gear_ratios.len()
    );

    Ok(ImportedCar {
        name,
        data,
        gear_config,
    })
}

fn parse_point(point: &Value) -> Result<TorqueDataPoint, ImportError> {
    let rpm = point.get("rpm").and_then(number);
    let torque = point.get("torque").and_then(number);
    match (rpm, torque) {
        (Some(rpm), Some(torque)) => Ok(TorqueDataPoint { rpm, torque }),
        _ => Err(ImportError::InvalidDataPoint),
    }
}

fn normalize_gear_config(fields: &Map<String, Value>) -> GearConfig {
    let tire_circumference = positive_field(fields, "wheelDiameter").map(|d| d * PI);
    let final_drive_ratio = positive_field(fields, "finalDriveRatio");

    let gear_ratios = match fields.get("gears") {
        Some(Value::Array(gears)) => {
            let kept: Vec<f64> = gears
                .iter()
                .filter_map(number)
                .filter(|g| *g > 0.0)
                .collect();
            if kept.len() != gears.len() {
                tracing::debug!("Dropped {} invalid gear ratios", gears.len() - kept.len());
            }
            kept
        }
        Some(other) => {
            tracing::debug!("Ignoring non-array gears: {}", other);
            Vec::new()
        }
        None => Vec::new(),
    };

    GearConfig {
        final_drive_ratio,
        gear_ratios,
        tire_circumference,
    }
}

/// A numeric member greater than zero, if present
fn positive_field(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = fields.get(key)?;
    match number(value) {
        Some(v) if v > 0.0 => Some(v),
        _ => {
            tracing::debug!("Ignoring invalid {}: {}", key, value);
            None
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

/// Whether a value counts as "set" when detecting the file layout
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_wrapper_falls_back_to_top_level() {
        let car = parse_car_json(r#"{"car":null,"name":"Top","data":[{"rpm":1,"torque":2}]}"#)
            .unwrap();
        assert_eq!(car.name, "Top");
    }

    #[test]
    fn test_empty_name_is_invalid_format() {
        let err = parse_car_json(r#"{"name":"","data":[{"rpm":1,"torque":2}]}"#).unwrap_err();
        assert_eq!(err, ImportError::InvalidFormat);
    }

    #[test]
    fn test_wrapped_empty_name() {
        let err = parse_car_json(r#"{"car":{"name":"","data":[]}}"#).unwrap_err();
        assert_eq!(err, ImportError::InvalidName);
    }

    #[test]
    fn test_non_object_wrapper() {
        let err = parse_car_json(r#"{"car":5,"name":"x"}"#).unwrap_err();
        assert_eq!(err, ImportError::InvalidName);
    }

    #[test]
    fn test_top_level_array_is_invalid_format() {
        assert_eq!(parse_car_json("[1, 2]").unwrap_err(), ImportError::InvalidFormat);
        assert_eq!(parse_car_json("null").unwrap_err(), ImportError::InvalidFormat);
    }

    #[test]
    fn test_non_object_point() {
        let err = parse_car_json(r#"{"name":"x","data":[{"rpm":1,"torque":2}, 7]}"#).unwrap_err();
        assert_eq!(err, ImportError::InvalidDataPoint);
    }

    #[test]
    fn test_integer_and_float_numbers() {
        let car = parse_car_json(r#"{"name":"x","data":[{"rpm":1000,"torque":99.5}]}"#).unwrap();
        assert_eq!(car.data, vec![TorqueDataPoint::new(1000.0, 99.5)]);
    }

    #[test]
    fn test_invalid_optional_fields_ignored() {
        let car = parse_car_json(
            r#"{"name":"x","data":[{"rpm":1,"torque":2}],"wheelDiameter":"0.6","finalDriveRatio":-3,"gears":"3.5"}"#,
        )
        .unwrap();
        assert_eq!(car.gear_config, GearConfig::default());
    }

    #[test]
    fn test_apply_keeps_display_fields() {
        let mut dataset = DataSet::new_car(2);
        dataset.visible = false;
        let car = parse_car_json(r#"{"name":"Imported","data":[{"rpm":1,"torque":2}]}"#).unwrap();
        car.apply_to(&mut dataset);
        assert_eq!(dataset.name, "Imported");
        assert_eq!(dataset.color, "#feca57");
        assert!(!dataset.visible);
    }
}
