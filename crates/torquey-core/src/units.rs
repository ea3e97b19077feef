//! Display units and unit standards
//!
//! Closed enumerations for the torque, power and speed units a curve can be
//! shown in, plus the named unit standards that bundle one of each.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when parsing a unit identifier that is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} unit: '{value}'")]
pub struct UnknownUnit {
    /// Which unit family was being parsed
    pub kind: &'static str,
    /// The rejected identifier
    pub value: String,
}

/// Torque units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TorqueUnit {
    /// Pound-feet
    #[serde(rename = "lbft")]
    LbFt,
    /// Newton-meters
    #[serde(rename = "nm")]
    Nm,
}

/// Power units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUnit {
    /// Kilowatts
    #[serde(rename = "kw")]
    Kw,
    /// Mechanical horsepower
    #[serde(rename = "hp")]
    Hp,
    /// Metric horsepower
    #[serde(rename = "ps")]
    Ps,
}

/// Speed units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    /// Miles per hour
    #[serde(rename = "mph")]
    Mph,
    /// Kilometers per hour
    #[serde(rename = "kmh")]
    Kmh,
    /// Meters per second
    #[serde(rename = "ms")]
    Ms,
}

/// Named unit bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStandard {
    /// lb·ft, hp, mph
    #[serde(rename = "imperial")]
    Imperial,
    /// N·m, kW, km/h
    #[serde(rename = "metric")]
    Metric,
    /// N·m, PS, km/h
    #[serde(rename = "metric-ps")]
    MetricPs,
    /// N·m, kW, m/s
    #[serde(rename = "si")]
    Si,
    /// Units are chosen individually
    #[serde(rename = "custom")]
    Custom,
}

impl TorqueUnit {
    /// Every torque unit, in menu order
    pub const ALL: [TorqueUnit; 2] = [TorqueUnit::LbFt, TorqueUnit::Nm];

    /// Identifier used in settings and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            TorqueUnit::LbFt => "lbft",
            TorqueUnit::Nm => "nm",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            TorqueUnit::LbFt => "lb·ft",
            TorqueUnit::Nm => "N·m",
        }
    }
}

impl PowerUnit {
    /// Every power unit, in menu order
    pub const ALL: [PowerUnit; 3] = [PowerUnit::Kw, PowerUnit::Hp, PowerUnit::Ps];

    /// Identifier used in settings and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            PowerUnit::Kw => "kw",
            PowerUnit::Hp => "hp",
            PowerUnit::Ps => "ps",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PowerUnit::Kw => "kW",
            PowerUnit::Hp => "hp",
            PowerUnit::Ps => "PS",
        }
    }
}

impl SpeedUnit {
    /// Every speed unit, in menu order
    pub const ALL: [SpeedUnit; 3] = [SpeedUnit::Mph, SpeedUnit::Kmh, SpeedUnit::Ms];

    /// Identifier used in settings and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            SpeedUnit::Mph => "mph",
            SpeedUnit::Kmh => "kmh",
            SpeedUnit::Ms => "ms",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SpeedUnit::Mph => "mph",
            SpeedUnit::Kmh => "km/h",
            SpeedUnit::Ms => "m/s",
        }
    }
}

impl UnitStandard {
    /// Every standard, in menu order
    pub const ALL: [UnitStandard; 5] = [
        UnitStandard::Imperial,
        UnitStandard::Metric,
        UnitStandard::MetricPs,
        UnitStandard::Si,
        UnitStandard::Custom,
    ];

    /// Identifier used in settings and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            UnitStandard::Imperial => "imperial",
            UnitStandard::Metric => "metric",
            UnitStandard::MetricPs => "metric-ps",
            UnitStandard::Si => "si",
            UnitStandard::Custom => "custom",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            UnitStandard::Imperial => "Imperial (lb·ft, hp, mph)",
            UnitStandard::Metric => "Metric (N·m, kW, km/h)",
            UnitStandard::MetricPs => "Metric PS (N·m, PS, km/h)",
            UnitStandard::Si => "SI (N·m, kW, m/s)",
            UnitStandard::Custom => "Custom",
        }
    }

    /// The unit triple this standard stands for. `None` for [`UnitStandard::Custom`].
    pub fn preset(&self) -> Option<UnitPreset> {
        let (torque, power, speed) = match self {
            UnitStandard::Imperial => (TorqueUnit::LbFt, PowerUnit::Hp, SpeedUnit::Mph),
            UnitStandard::Metric => (TorqueUnit::Nm, PowerUnit::Kw, SpeedUnit::Kmh),
            UnitStandard::MetricPs => (TorqueUnit::Nm, PowerUnit::Ps, SpeedUnit::Kmh),
            UnitStandard::Si => (TorqueUnit::Nm, PowerUnit::Kw, SpeedUnit::Ms),
            UnitStandard::Custom => return None,
        };
        Some(UnitPreset {
            torque,
            power,
            speed,
        })
    }
}

macro_rules! impl_unit_text {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownUnit;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|unit| unit.id() == wanted)
                    .ok_or_else(|| UnknownUnit {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_unit_text!(TorqueUnit, "torque");
impl_unit_text!(PowerUnit, "power");
impl_unit_text!(SpeedUnit, "speed");
impl_unit_text!(UnitStandard, "standard");

/// One torque, power and speed unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreset {
    /// Torque unit
    pub torque: TorqueUnit,
    /// Power unit
    pub power: PowerUnit,
    /// Speed unit
    pub speed: SpeedUnit,
}

/// The units the user is currently viewing curves in.
///
/// Whenever `standard` is not [`UnitStandard::Custom`] the three units match
/// its preset. The fields are private so the only ways to change them keep
/// that true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawUnitSelection")]
pub struct UnitSelection {
    standard: UnitStandard,
    torque: TorqueUnit,
    power: PowerUnit,
    speed: SpeedUnit,
}

impl UnitSelection {
    /// Selection for a named standard. For `Custom` the imperial units are
    /// used as the starting point.
    pub fn from_standard(standard: UnitStandard) -> Self {
        let mut selection = Self::default();
        selection.select_standard(standard);
        selection
    }

    /// Custom selection with explicitly chosen units
    pub fn custom(torque: TorqueUnit, power: PowerUnit, speed: SpeedUnit) -> Self {
        Self {
            standard: UnitStandard::Custom,
            torque,
            power,
            speed,
        }
    }

    /// Switch to `standard`. A non-custom standard overwrites all three
    /// units; `Custom` keeps whatever was selected before.
    pub fn select_standard(&mut self, standard: UnitStandard) {
        self.standard = standard;
        if let Some(preset) = standard.preset() {
            self.torque = preset.torque;
            self.power = preset.power;
            self.speed = preset.speed;
        }
    }

    /// Choose the torque unit; the standard becomes `Custom`
    pub fn set_torque_unit(&mut self, unit: TorqueUnit) {
        self.standard = UnitStandard::Custom;
        self.torque = unit;
    }

    /// Choose the power unit; the standard becomes `Custom`
    pub fn set_power_unit(&mut self, unit: PowerUnit) {
        self.standard = UnitStandard::Custom;
        self.power = unit;
    }

    /// Choose the speed unit; the standard becomes `Custom`
    pub fn set_speed_unit(&mut self, unit: SpeedUnit) {
        self.standard = UnitStandard::Custom;
        self.speed = unit;
    }

    /// Selected standard
    pub fn standard(&self) -> UnitStandard {
        self.standard
    }

    /// Selected torque unit
    pub fn torque(&self) -> TorqueUnit {
        self.torque
    }

    /// Selected power unit
    pub fn power(&self) -> PowerUnit {
        self.power
    }

    /// Selected speed unit
    pub fn speed(&self) -> SpeedUnit {
        self.speed
    }
}

impl Default for UnitSelection {
    fn default() -> Self {
        Self {
            standard: UnitStandard::Imperial,
            torque: TorqueUnit::LbFt,
            power: PowerUnit::Hp,
            speed: SpeedUnit::Mph,
        }
    }
}

/// Serialized shape of [`UnitSelection`]; missing fields fall back to the
/// imperial defaults and a non-custom standard wins over stored units.
#[derive(Deserialize)]
#[serde(default)]
struct RawUnitSelection {
    standard: UnitStandard,
    torque: TorqueUnit,
    power: PowerUnit,
    speed: SpeedUnit,
}

impl Default for RawUnitSelection {
    fn default() -> Self {
        let defaults = UnitSelection::default();
        Self {
            standard: defaults.standard,
            torque: defaults.torque,
            power: defaults.power,
            speed: defaults.speed,
        }
    }
}

impl From<RawUnitSelection> for UnitSelection {
    fn from(raw: RawUnitSelection) -> Self {
        let mut selection = UnitSelection::custom(raw.torque, raw.power, raw.speed);
        selection.select_standard(raw.standard);
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let imperial = UnitStandard::Imperial.preset().unwrap();
        assert_eq!(imperial.torque, TorqueUnit::LbFt);
        assert_eq!(imperial.power, PowerUnit::Hp);
        assert_eq!(imperial.speed, SpeedUnit::Mph);

        let si = UnitStandard::Si.preset().unwrap();
        assert_eq!(si.torque, TorqueUnit::Nm);
        assert_eq!(si.power, PowerUnit::Kw);
        assert_eq!(si.speed, SpeedUnit::Ms);

        assert!(UnitStandard::Custom.preset().is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TorqueUnit::LbFt.label(), "lb·ft");
        assert_eq!(PowerUnit::Hp.label(), "hp");
        assert_eq!(SpeedUnit::Kmh.label(), "km/h");
        assert_eq!(UnitStandard::Custom.label(), "Custom");
    }

    #[test]
    fn test_parse_ids() {
        assert_eq!("metric-ps".parse::<UnitStandard>(), Ok(UnitStandard::MetricPs));
        assert_eq!(" LBFT ".parse::<TorqueUnit>(), Ok(TorqueUnit::LbFt));
        assert_eq!("kmh".parse::<SpeedUnit>(), Ok(SpeedUnit::Kmh));

        let err = "watts".parse::<PowerUnit>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown power unit: 'watts'");
    }

    #[test]
    fn test_serde_ids_match_display() {
        for unit in UnitStandard::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit));
        }
    }

    #[test]
    fn test_select_custom_keeps_units() {
        let mut selection = UnitSelection::from_standard(UnitStandard::Si);
        selection.select_standard(UnitStandard::Custom);
        assert_eq!(selection.standard(), UnitStandard::Custom);
        assert_eq!(selection.torque(), TorqueUnit::Nm);
        assert_eq!(selection.power(), PowerUnit::Kw);
        assert_eq!(selection.speed(), SpeedUnit::Ms);
    }

    #[test]
    fn test_individual_unit_switches_to_custom() {
        let mut selection = UnitSelection::default();
        selection.set_speed_unit(SpeedUnit::Kmh);
        assert_eq!(selection.standard(), UnitStandard::Custom);
        assert_eq!(selection.torque(), TorqueUnit::LbFt);
        assert_eq!(selection.speed(), SpeedUnit::Kmh);
    }

    #[test]
    fn test_deserialize_enforces_preset() {
        let selection: UnitSelection =
            serde_json::from_str(r#"{"standard":"metric","torque":"lbft","power":"hp","speed":"mph"}"#)
                .unwrap();
        assert_eq!(selection, UnitSelection::from_standard(UnitStandard::Metric));

        let custom: UnitSelection =
            serde_json::from_str(r#"{"standard":"custom","torque":"nm","power":"hp","speed":"kmh"}"#)
                .unwrap();
        assert_eq!(
            custom,
            UnitSelection::custom(TorqueUnit::Nm, PowerUnit::Hp, SpeedUnit::Kmh)
        );
    }
}
