//! Car export

use super::record::CarRecord;
use crate::dataset::DataSet;

/// Serialize a dataset as pretty-printed [`CarRecord`] JSON.
///
/// Empty rows and unset gears are dropped; optional drivetrain fields are
/// written only when set.
pub fn export_car_to_json(dataset: &DataSet) -> serde_json::Result<String> {
    let record = CarRecord::from_dataset(dataset);
    tracing::debug!(
        "Exporting '{}' with {} of {} data points",
        record.name,
        record.data.len(),
        dataset.data.len()
    );
    serde_json::to_string_pretty(&record)
}

/// File name for an exported car: anything but ASCII letters and digits
/// becomes `_`.
pub fn export_file_name(name: &str) -> String {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{}.json", stem)
}
