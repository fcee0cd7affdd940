//! Length values with an explicit unit of measure.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const POINTS_PER_INCH: f64 = 72.0;
const POINTS_PER_CENTIMETER: f64 = 72.0 / 2.54;
const POINTS_PER_MILLIMETER: f64 = 72.0 / 25.4;
const POINTS_PER_PICA: f64 = 12.0;

static UNIT_REGEX: OnceLock<Regex> = OnceLock::new();
const UNIT_PATTERN: &str = r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))\s*(pt|cm|mm|in|pc)?\s*$";

/// Unit of measure for a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Typographic point (1/72 inch)
    #[default]
    Point,
    /// Centimeter
    Centimeter,
    /// Millimeter
    Millimeter,
    /// Inch
    Inch,
    /// Pica (12 points)
    Pica,
}

impl UnitType {
    /// DDL suffix for this unit.
    pub fn suffix(&self) -> &'static str {
        match self {
            UnitType::Point => "pt",
            UnitType::Centimeter => "cm",
            UnitType::Millimeter => "mm",
            UnitType::Inch => "in",
            UnitType::Pica => "pc",
        }
    }

    fn points_per_unit(&self) -> f64 {
        match self {
            UnitType::Point => 1.0,
            UnitType::Centimeter => POINTS_PER_CENTIMETER,
            UnitType::Millimeter => POINTS_PER_MILLIMETER,
            UnitType::Inch => POINTS_PER_INCH,
            UnitType::Pica => POINTS_PER_PICA,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "pt" => Some(UnitType::Point),
            "cm" => Some(UnitType::Centimeter),
            "mm" => Some(UnitType::Millimeter),
            "in" => Some(UnitType::Inch),
            "pc" => Some(UnitType::Pica),
            _ => None,
        }
    }
}

/// A length: a number together with its unit of measure.
///
/// Zero points is a regular length. Whether a property holding a `Unit` was
/// ever set is tracked by the slot, not by the value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Unit {
    value: f64,
    unit_type: UnitType,
}

impl Unit {
    /// Create a length in the given unit.
    pub fn new(value: f64, unit_type: UnitType) -> Self {
        Self { value, unit_type }
    }

    /// Length in points.
    pub fn from_point(value: f64) -> Self {
        Self::new(value, UnitType::Point)
    }

    /// Length in centimeters.
    pub fn from_centimeter(value: f64) -> Self {
        Self::new(value, UnitType::Centimeter)
    }

    /// Length in millimeters.
    pub fn from_millimeter(value: f64) -> Self {
        Self::new(value, UnitType::Millimeter)
    }

    /// Length in inches.
    pub fn from_inch(value: f64) -> Self {
        Self::new(value, UnitType::Inch)
    }

    /// Length in picas.
    pub fn from_pica(value: f64) -> Self {
        Self::new(value, UnitType::Pica)
    }

    /// Numeric value in this length's own unit.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit of measure.
    pub fn unit_type(&self) -> UnitType {
        self.unit_type
    }

    /// The length expressed in points.
    pub fn points(&self) -> f64 {
        self.value * self.unit_type.points_per_unit()
    }

    /// The same length expressed in another unit.
    pub fn convert_to(&self, unit_type: UnitType) -> Self {
        Self::new(self.points() / unit_type.points_per_unit(), unit_type)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit_type.suffix())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let re = UNIT_REGEX.get_or_init(|| Regex::new(UNIT_PATTERN).unwrap());
        let caps = re
            .captures(s)
            .ok_or_else(|| Error::invalid_value("unit", s))?;

        let value: f64 = caps[1]
            .parse()
            .map_err(|_| Error::invalid_value("unit", s))?;
        let unit_type = match caps.get(2) {
            Some(m) => UnitType::from_suffix(m.as_str()).ok_or_else(|| Error::invalid_value("unit", s))?,
            None => UnitType::Point,
        };

        Ok(Self::new(value, unit_type))
    }
}
