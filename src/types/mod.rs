//! Scalar value types held by node properties.

mod color;
mod position;
mod unit;

pub use color::Color;
pub use position::{LeftPosition, TopPosition};
pub use unit::{Unit, UnitType};
