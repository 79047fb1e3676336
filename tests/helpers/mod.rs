pub mod source_fixtures;
pub mod unit_helpers;
