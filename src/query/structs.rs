use tracing::debug;

use super::{MatchKind, Query, QueryMatch};
use crate::syntax::ast::TypeExpr;
use crate::syntax::type_text;

impl Query<'_> {
    /// Struct types with a field whose type text equals `pattern`; `*`
    /// matches every struct.
    pub fn find_structs_by_field_type(&self, pattern: &str) -> Vec<QueryMatch> {
        let mut matches = Vec::new();
        for unit in self.units() {
            for spec in unit.file().type_specs() {
                let TypeExpr::Struct(struct_type) = &spec.ty else {
                    continue;
                };
                let matched = pattern == "*"
                    || struct_type
                        .fields
                        .iter()
                        .any(|field| type_text(&field.ty) == pattern);
                if matched {
                    matches.push(QueryMatch::new(
                        unit,
                        spec.name.span.start,
                        spec.name.as_str(),
                        format!("type {} {}", spec.name.as_str(), type_text(&spec.ty)),
                        MatchKind::Struct,
                    ));
                }
            }
        }
        debug!(pattern, matches = matches.len(), "find_structs_by_field_type");
        matches
    }
}
