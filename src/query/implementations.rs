use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::{MatchKind, Query, QueryMatch};
use crate::syntax::ast::{FuncType, InterfaceElem, InterfaceType, TypeExpr};
use crate::syntax::{param_type_texts, type_text};

/// What conformance compares for one method: parameter types and the number
/// of results. Result types are not compared.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MethodShape {
    params: Vec<String>,
    results: usize,
}

impl MethodShape {
    fn of(sig: &FuncType) -> Self {
        Self {
            params: param_type_texts(&sig.params),
            results: sig.result_count(),
        }
    }
}

type MethodSet = IndexMap<SmolStr, MethodShape>;

impl<'u> Query<'u> {
    /// Declared non-interface types whose methods satisfy the named
    /// interface. An interface that is not declared in any unit has no
    /// implementations.
    pub fn find_implementations(&self, interface: &str) -> Vec<QueryMatch> {
        let mut visited = FxHashSet::default();
        let Some(required) = self.required_methods(interface, &mut visited) else {
            debug!(interface, "interface not declared in any unit");
            return Vec::new();
        };

        let mut matches = Vec::new();
        for unit in self.units() {
            for spec in unit.file().type_specs() {
                if matches!(spec.ty, TypeExpr::Interface(_)) {
                    continue;
                }
                let methods = self.method_set(spec.name.as_str());
                let satisfied = methods.len() >= required.len()
                    && required
                        .iter()
                        .all(|(name, shape)| methods.get(name) == Some(shape));
                trace!(
                    candidate = spec.name.as_str(),
                    methods = methods.len(),
                    satisfied,
                    "implementation check"
                );
                if satisfied {
                    matches.push(QueryMatch::new(
                        unit,
                        spec.name.span.start,
                        spec.name.as_str(),
                        format!("type {} {}", spec.name.as_str(), type_text(&spec.ty)),
                        MatchKind::Implementation,
                    ));
                }
            }
        }
        debug!(interface, matches = matches.len(), "find_implementations");
        matches
    }

    fn interface_type(&self, name: &str) -> Option<&'u InterfaceType> {
        self.units()
            .flat_map(|unit| unit.file().type_specs())
            .find_map(|spec| match &spec.ty {
                TypeExpr::Interface(interface) if spec.name.as_str() == name => Some(interface),
                _ => None,
            })
    }

    /// The interface's methods, with embedded interfaces declared in the
    /// units expanded in place.
    fn required_methods(&self, name: &str, visited: &mut FxHashSet<SmolStr>) -> Option<MethodSet> {
        if !visited.insert(SmolStr::new(name)) {
            return Some(MethodSet::default());
        }
        let interface = self.interface_type(name)?;
        let mut methods = MethodSet::default();
        for elem in &interface.elems {
            match elem {
                InterfaceElem::Method(method) => {
                    methods.insert(method.name.name.clone(), MethodShape::of(&method.sig));
                }
                InterfaceElem::Embedded(terms) => {
                    let embedded = match terms.as_slice() {
                        [term] if !term.tilde => term.ty.base_name(),
                        _ => None,
                    };
                    if let Some(embedded) = embedded
                        && let Some(inherited) = self.required_methods(&embedded.name, visited)
                    {
                        for (method, shape) in inherited {
                            methods.entry(method).or_insert(shape);
                        }
                    }
                }
            }
        }
        Some(methods)
    }

    /// Methods declared with `type_name` as receiver, by value or pointer
    fn method_set(&self, type_name: &str) -> MethodSet {
        self.units()
            .flat_map(|unit| unit.file().functions())
            .filter(|func| {
                func.receiver_type_name()
                    .is_some_and(|receiver| receiver.as_str() == type_name)
            })
            .map(|func| (func.name.name.clone(), MethodShape::of(&func.sig)))
            .collect()
    }
}
