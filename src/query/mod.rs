//! # Structural Queries
//!
//! Read-only matching over an ordered set of parsed units. A [`Query`]
//! borrows the units and keeps no other state; every `find_*` call walks the
//! trees afresh and reports matches ordered by unit, then by source order.
//!
//! | Query | Matches |
//! |-------|---------|
//! | [`Query::find_functions`] | functions and methods by name pattern |
//! | [`Query::find_by_signature`] | functions by `(params) results` text |
//! | [`Query::find_implementations`] | types whose methods satisfy an interface |
//! | [`Query::find_structs_by_field_type`] | structs holding a field of a type |
//! | [`Query::find_by_import_dependency`] | import specs by path pattern |

mod functions;
mod implementations;
mod imports;
mod pattern;
mod structs;

use indexmap::IndexMap;

use crate::base::Position;
use crate::syntax::SourceUnit;

pub use pattern::{NamePattern, PathPattern};

/// Units keyed by name, in insertion order
pub type UnitMap = IndexMap<String, SourceUnit>;

/// Collect units into a [`UnitMap`] keyed by their names
pub fn unit_map(units: impl IntoIterator<Item = SourceUnit>) -> UnitMap {
    units
        .into_iter()
        .map(|unit| (unit.name().to_string(), unit))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    Function,
    Method,
    Implementation,
    Struct,
    Import,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Function => "function",
            MatchKind::Method => "method",
            MatchKind::Implementation => "implementation",
            MatchKind::Struct => "struct",
            MatchKind::Import => "import",
        }
    }
}

/// One query result. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryMatch {
    pub unit: String,
    pub line: usize,
    pub name: String,
    pub signature: String,
    pub kind: MatchKind,
}

impl QueryMatch {
    fn new(
        unit: &SourceUnit,
        position: Position,
        name: impl Into<String>,
        signature: String,
        kind: MatchKind,
    ) -> Self {
        Self {
            unit: unit.name().to_string(),
            line: unit.line(position),
            name: name.into(),
            signature,
            kind,
        }
    }
}

/// A borrowed view over a set of units.
#[derive(Debug, Clone, Copy)]
pub struct Query<'u> {
    units: &'u UnitMap,
}

impl<'u> Query<'u> {
    pub fn new(units: &'u UnitMap) -> Self {
        Self { units }
    }

    pub fn units(&self) -> impl Iterator<Item = &'u SourceUnit> {
        self.units.values()
    }
}

#[cfg(test)]
mod tests;
