//! Vertical and horizontal placement of shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Unit;
use crate::error::{Error, Result};

/// Vertical placement: a named alignment or an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopPosition {
    /// Aligned to the top edge
    Top,
    /// Vertically centered
    Center,
    /// Aligned to the bottom edge
    Bottom,
    /// Inside edge (mirrored layouts)
    Inside,
    /// Outside edge (mirrored layouts)
    Outside,
    /// Absolute offset from the reference edge
    Offset(Unit),
}

impl Default for TopPosition {
    fn default() -> Self {
        TopPosition::Offset(Unit::default())
    }
}

impl fmt::Display for TopPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopPosition::Top => write!(f, "Top"),
            TopPosition::Center => write!(f, "Center"),
            TopPosition::Bottom => write!(f, "Bottom"),
            TopPosition::Inside => write!(f, "Inside"),
            TopPosition::Outside => write!(f, "Outside"),
            TopPosition::Offset(unit) => write!(f, "{}", unit),
        }
    }
}

impl FromStr for TopPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(TopPosition::Top),
            "center" => Ok(TopPosition::Center),
            "bottom" => Ok(TopPosition::Bottom),
            "inside" => Ok(TopPosition::Inside),
            "outside" => Ok(TopPosition::Outside),
            _ => s
                .parse::<Unit>()
                .map(TopPosition::Offset)
                .map_err(|_| Error::invalid_value("top position", s)),
        }
    }
}

/// Horizontal placement: a named alignment or an absolute offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeftPosition {
    /// Aligned to the left edge
    Left,
    /// Horizontally centered
    Center,
    /// Aligned to the right edge
    Right,
    /// Inside edge (mirrored layouts)
    Inside,
    /// Outside edge (mirrored layouts)
    Outside,
    /// Absolute offset from the reference edge
    Offset(Unit),
}

impl Default for LeftPosition {
    fn default() -> Self {
        LeftPosition::Offset(Unit::default())
    }
}

impl fmt::Display for LeftPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeftPosition::Left => write!(f, "Left"),
            LeftPosition::Center => write!(f, "Center"),
            LeftPosition::Right => write!(f, "Right"),
            LeftPosition::Inside => write!(f, "Inside"),
            LeftPosition::Outside => write!(f, "Outside"),
            LeftPosition::Offset(unit) => write!(f, "{}", unit),
        }
    }
}

impl FromStr for LeftPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(LeftPosition::Left),
            "center" => Ok(LeftPosition::Center),
            "right" => Ok(LeftPosition::Right),
            "inside" => Ok(LeftPosition::Inside),
            "outside" => Ok(LeftPosition::Outside),
            _ => s
                .parse::<Unit>()
                .map(LeftPosition::Offset)
                .map_err(|_| Error::invalid_value("left position", s)),
        }
    }
}
