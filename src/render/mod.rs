//! Output of document trees: DDL text, JSON, and tree walks.

pub mod ddl;
mod json;
mod options;
mod stats;
pub mod visitor;

pub(crate) use json::{ELEMENTS_KEY, TYPE_KEY};

pub use ddl::{to_ddl, write_ddl, write_ddl_file, Serializer};
pub use json::{to_json, to_json_value, JsonFormat};
pub use options::{DdlOptions, LineEnding};
pub use stats::TreeStats;
pub use visitor::{walk, CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction};
