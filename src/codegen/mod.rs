//! # Code generation
//!
//! AST-level generation of Go declarations.
//!
//! | Entry point | Produces |
//! |-------------|----------|
//! | [`TemplateEngine`] | instances of registered templates with placeholders replaced |
//! | [`generate_interface_implementation`] | a struct plus stub methods satisfying an interface |
//! | [`generate_test_scaffold`] | a table-driven test skeleton for a function |
//!
//! Generated nodes carry synthetic spans; print them with
//! [`crate::syntax::printer`].

mod interface_impl;
mod placeholders;
mod template;
mod test_scaffold;
mod zero_value;

pub use interface_impl::generate_interface_implementation;
pub use placeholders::{PLACEHOLDER_NAMES, is_placeholder};
pub use template::{Generated, Template, TemplateEngine};
pub use test_scaffold::generate_test_scaffold;
pub use zero_value::zero_value;

#[cfg(test)]
mod tests;
