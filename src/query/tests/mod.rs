mod tests_functions;
mod tests_implementations;
mod tests_structs_and_imports;

use super::{UnitMap, unit_map};
use crate::syntax::parse_unit;

fn units(sources: &[(&str, &str)]) -> UnitMap {
    unit_map(sources.iter().map(|(name, text)| {
        parse_unit(*name, text).unwrap_or_else(|error| panic!("{name}: {error}"))
    }))
}
