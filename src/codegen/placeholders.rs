//! Conventional placeholder names recognized in templates.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

use crate::parser::keywords::{is_keyword, is_predeclared};

/// Identifier texts treated as template placeholders.
pub const PLACEHOLDER_NAMES: &[&str] = &[
    "PackageName",
    "ImportPath",
    "TypeName",
    "StructName",
    "InterfaceName",
    "FunctionName",
    "MethodName",
    "ReceiverName",
    "ReceiverType",
    "FieldName",
    "FieldType",
    "ParamName",
    "ParamType",
    "ReturnType",
    "VarName",
    "ConstName",
    "ElementType",
    "KeyType",
    "ValueType",
];

static PLACEHOLDER_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| PLACEHOLDER_NAMES.iter().copied().collect());

/// Check if `text` names a placeholder
pub fn is_placeholder(text: &str) -> bool {
    PLACEHOLDER_SET.contains(text) && !is_keyword(text) && !is_predeclared(text)
}
