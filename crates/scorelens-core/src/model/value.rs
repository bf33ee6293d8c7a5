/// A single cell of the record table.
use super::format::format_number;
use compact_str::{format_compact, CompactString};
use std::fmt;

/// Cell contents after column typing.
///
/// Numeric columns hold `Number`, text columns hold `Text`; an empty cell is
/// `Missing` in either kind of column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(CompactString),
    Missing,
}

impl Value {
    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Label used when this cell acts as a group key.
    ///
    /// Numbers use their exact shortest representation, not the rounded
    /// display form. Missing cells have no label and belong to no group.
    pub fn group_label(&self) -> Option<CompactString> {
        match self {
            Self::Number(n) => Some(format_compact!("{n}")),
            Self::Text(s) => Some(s.clone()),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Text(s) => f.write_str(s),
            Self::Missing => Ok(()),
        }
    }
}
