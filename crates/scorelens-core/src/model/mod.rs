/// Data model -- record table, cell values, outcome labels, and formatting.

pub mod format;
pub mod outcome;
pub mod table;
pub mod value;

pub use outcome::Outcome;
pub use table::RecordTable;
pub use value::Value;
