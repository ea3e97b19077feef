//! Tests for the preset car library

use pretty_assertions::assert_eq;
use std::f64::consts::PI;
use torquey_core::dataset::DataSet;
use torquey_core::library::CarLibrary;

const LIBRARY_JSON: &str = r#"[
    {
        "id": "roadster",
        "category": "JDM",
        "data": {
            "name": "Roadster",
            "data": [{"rpm": 2000, "torque": 150}, {"rpm": 4500, "torque": 200}],
            "wheelDiameter": 0.62,
            "finalDriveRatio": 2.87,
            "gears": [5.09, 2.99, 2.04, 1.53, 1.25, 1.0]
        }
    },
    {
        "id": "pony",
        "category": "American",
        "data": {
            "name": "Pony Car",
            "data": [{"rpm": 3000, "torque": 500}]
        }
    },
    {
        "id": "hatch",
        "category": "JDM",
        "data": {
            "name": "Hot Hatch",
            "data": [{"rpm": 2500, "torque": 400}],
            "finalDriveRatio": 4.11
        }
    }
]"#;

#[test]
fn test_categories_in_first_seen_order() {
    let library = CarLibrary::from_json(LIBRARY_JSON).unwrap();
    assert_eq!(library.categories(), vec!["JDM", "American"]);
}

#[test]
fn test_filter_by_category() {
    let library = CarLibrary::from_json(LIBRARY_JSON).unwrap();
    let jdm: Vec<&str> = library
        .by_category(Some("JDM"))
        .map(|car| car.id.as_str())
        .collect();
    assert_eq!(jdm, vec!["roadster", "hatch"]);
    assert_eq!(library.by_category(None).count(), 3);
    assert_eq!(library.by_category(Some("European")).count(), 0);
}

#[test]
fn test_preset_to_dataset() {
    let library = CarLibrary::from_json(LIBRARY_JSON).unwrap();
    let preset = library.get("roadster").unwrap();
    let dataset = DataSet::from_imported(1, preset.to_imported());

    assert_eq!(dataset.name, "Roadster");
    assert_eq!(dataset.color, "#4ecdc4");
    assert_eq!(dataset.data.len(), 2);
    assert_eq!(dataset.gear_config.final_drive_ratio, Some(2.87));
    assert_eq!(dataset.gear_config.gear_ratios.len(), 6);
    let circumference = dataset.gear_config.tire_circumference.unwrap();
    assert!((circumference - 0.62 * PI).abs() < 1e-9);
}

#[test]
fn test_preset_without_drivetrain() {
    let library = CarLibrary::from_json(LIBRARY_JSON).unwrap();
    let imported = library.get("pony").unwrap().to_imported();
    assert_eq!(imported.gear_config.final_drive_ratio, None);
    assert_eq!(imported.gear_config.tire_circumference, None);
    assert!(imported.gear_config.gear_ratios.is_empty());
}

#[test]
fn test_unknown_id() {
    let library = CarLibrary::from_json(LIBRARY_JSON).unwrap();
    assert!(library.get("missing").is_none());
}
