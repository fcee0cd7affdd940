//! Building document trees from JSON interchange.

mod json;
mod options;

pub use json::{from_json, from_json_value};
pub use options::{ErrorMode, ImportOptions};
