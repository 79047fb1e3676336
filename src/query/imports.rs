use tracing::debug;

use super::{MatchKind, PathPattern, Query, QueryMatch};

impl Query<'_> {
    /// Import specs whose path matches `pattern`, one match per spec
    pub fn find_by_import_dependency(&self, pattern: &str) -> Vec<QueryMatch> {
        let pattern = PathPattern::parse(pattern);
        let mut matches = Vec::new();
        for unit in self.units() {
            for spec in unit.file().import_specs() {
                let path = spec.path_value();
                if !pattern.matches(&path) {
                    continue;
                }
                let signature = match &spec.name {
                    Some(alias) => format!("import {} {}", alias.as_str(), spec.path.value),
                    None => format!("import {}", spec.path.value),
                };
                matches.push(QueryMatch::new(
                    unit,
                    spec.span.start,
                    path,
                    signature,
                    MatchKind::Import,
                ));
            }
        }
        debug!(pattern = ?pattern, matches = matches.len(), "find_by_import_dependency");
        matches
    }
}
