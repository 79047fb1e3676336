//! # Refactorings
//!
//! Tree-to-tree transformations over a parsed unit. Each operation builds
//! whatever semantic information it needs, leaves its input untouched and
//! returns either the input itself (a true no-op) or a structurally
//! independent tree. On error nothing has been produced.
//!
//! - [`rename_symbol_at`] renames every occurrence of the symbol under a
//!   position
//! - [`extract_function`] moves a run of statements into a new function
//! - [`inline_variable`] replaces reads of a simply-initialized variable by
//!   its initializer

mod extract;
mod inline;
mod rename;

pub use extract::extract_function;
pub use inline::inline_variable;
pub use rename::rename_symbol_at;

use crate::base::text_utils::is_identifier;
use crate::error::{AnalysisError, Result};
use crate::parser::keywords::is_keyword;

/// Check that `name` can be introduced as a new identifier
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AnalysisError::invalid("name is empty"));
    }
    if !is_identifier(name) {
        return Err(AnalysisError::invalid(format!(
            "'{name}' is not a valid identifier"
        )));
    }
    if is_keyword(name) {
        return Err(AnalysisError::invalid(format!("'{name}' is a keyword")));
    }
    if name == "_" {
        return Err(AnalysisError::invalid("the blank identifier cannot be used as a name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
