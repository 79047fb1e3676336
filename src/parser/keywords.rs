//! Reserved words and predeclared identifiers.
//!
//! These tables are read-only for the lifetime of the process.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Go's 25 reserved keywords.
pub const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Predeclared types.
pub const PREDECLARED_TYPES: &[&str] = &[
    "any",
    "bool",
    "byte",
    "comparable",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Predeclared constants, the zero value, and builtin functions.
pub const PREDECLARED_VALUES: &[&str] = &[
    "true", "false", "iota", "nil", "append", "cap", "clear", "close", "complex", "copy", "delete",
    "imag", "len", "make", "max", "min", "new", "panic", "print", "println", "real", "recover",
];

/// Numeric predeclared types (zero value `0`).
pub const NUMERIC_TYPES: &[&str] = &[
    "byte",
    "complex64",
    "complex128",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static PREDECLARED_SET: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    PREDECLARED_TYPES
        .iter()
        .chain(PREDECLARED_VALUES)
        .copied()
        .collect()
});

/// Check if `name` is a reserved keyword
pub fn is_keyword(name: &str) -> bool {
    KEYWORD_SET.contains(name)
}

/// Check if `name` is a predeclared identifier (type, constant or builtin)
pub fn is_predeclared(name: &str) -> bool {
    PREDECLARED_SET.contains(name)
}

/// Check if `name` is a predeclared type
pub fn is_predeclared_type(name: &str) -> bool {
    PREDECLARED_TYPES.contains(&name)
}

/// Check if `name` is a predeclared numeric type
pub fn is_numeric_type(name: &str) -> bool {
    NUMERIC_TYPES.contains(&name)
}
