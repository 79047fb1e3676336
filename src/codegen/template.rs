//! Registered AST templates.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::placeholders::is_placeholder;
use crate::error::{AnalysisError, Result};
use crate::parser::{SyntaxKind, parse_file, significant_tokens};
use crate::syntax::ast::{BasicLit, Decl, File, Ident, ImportSpec};
use crate::syntax::printer::{print_decl, print_file};
use crate::syntax::visit::{self, Visitor, VisitorMut};

/// Package clause prepended to templates that lack one
const WRAPPER_PACKAGE: &str = "template";

/// A parsed template. Immutable once registered.
#[derive(Debug, Clone)]
pub struct Template {
    name: SmolStr,
    source: String,
    file: File,
    placeholders: IndexSet<SmolStr>,
    synthetic: bool,
}

impl Template {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    /// Placeholder names in first-occurrence order
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.placeholders.iter().map(SmolStr::as_str)
    }

    /// Whether the package clause was synthesized at registration
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

/// Result of executing a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    /// The single declaration of a template registered without a package clause
    Decl(Decl),
    File(File),
}

impl Generated {
    pub fn print(&self) -> String {
        match self {
            Generated::Decl(decl) => print_decl(decl),
            Generated::File(file) => print_file(file),
        }
    }
}

/// Registry of named templates, kept in registration order.
#[derive(Debug, Default)]
pub struct TemplateEngine {
    templates: IndexMap<SmolStr, Template>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and register `source` under `name`.
    ///
    /// Sources without a package clause are wrapped in a synthetic one.
    pub fn register_template(&mut self, name: &str, source: &str) -> Result<&Template> {
        if self.templates.contains_key(name) {
            return Err(AnalysisError::invalid(format!(
                "template '{name}' is already registered"
            )));
        }

        let synthetic = !has_package_clause(source);
        let text = if synthetic {
            format!("package {WRAPPER_PACKAGE}\n{source}")
        } else {
            source.to_string()
        };
        let parse = parse_file(&text);
        if !parse.ok() {
            return Err(AnalysisError::parse_failed(name, parse.errors));
        }
        let file = parse.file;
        if file.decls.is_empty() {
            return Err(AnalysisError::invalid(format!(
                "template '{name}' declares nothing"
            )));
        }

        let mut scan = PlaceholderScan::default();
        scan.visit_file(&file);
        debug!(
            template = name,
            synthetic,
            decls = file.decls.len(),
            placeholders = scan.found.len(),
            "registered template"
        );

        let template = Template {
            name: SmolStr::new(name),
            source: source.to_string(),
            file,
            placeholders: scan.found,
            synthetic,
        };
        Ok(self
            .templates
            .entry(SmolStr::new(name))
            .or_insert(template))
    }

    /// Instantiate `name`, replacing every identifier and import path whose
    /// text is a key of `data`. Unknown texts stay as they are.
    pub fn execute<K, V>(
        &self,
        name: &str,
        data: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Generated>
    where
        K: Into<SmolStr>,
        V: Into<SmolStr>,
    {
        let template = self
            .templates
            .get(name)
            .ok_or_else(|| AnalysisError::TemplateNotFound(name.to_string()))?;
        let data: FxHashMap<SmolStr, SmolStr> = data
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let mut file = template.file.clone();
        let mut substitution = Substitution {
            data: &data,
            replaced: 0,
        };
        substitution.visit_file_mut(&mut file);
        debug!(template = name, replaced = substitution.replaced, "executed template");

        if template.synthetic
            && file.imports.is_empty()
            && file.decls.len() == 1
            && let Some(decl) = file.decls.pop()
        {
            return Ok(Generated::Decl(decl));
        }
        Ok(Generated::File(file))
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Placeholders recorded for `name`
    pub fn placeholders(&self, name: &str) -> Result<Vec<&str>> {
        self.templates
            .get(name)
            .map(|template| template.placeholders().collect())
            .ok_or_else(|| AnalysisError::TemplateNotFound(name.to_string()))
    }

    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(SmolStr::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn has_package_clause(source: &str) -> bool {
    significant_tokens(source)
        .first()
        .is_some_and(|token| token.kind == SyntaxKind::PACKAGE_KW)
}

#[derive(Default)]
struct PlaceholderScan {
    found: IndexSet<SmolStr>,
}

impl Visitor for PlaceholderScan {
    fn visit_ident(&mut self, ident: &Ident) {
        if is_placeholder(ident.as_str()) {
            self.found.insert(ident.name.clone());
        }
    }

    fn visit_import_spec(&mut self, spec: &ImportSpec) {
        let path = spec.path_value();
        if is_placeholder(&path) {
            self.found.insert(SmolStr::new(path));
        }
        visit::walk_import_spec(self, spec);
    }
}

struct Substitution<'d> {
    data: &'d FxHashMap<SmolStr, SmolStr>,
    replaced: usize,
}

impl VisitorMut for Substitution<'_> {
    fn visit_ident_mut(&mut self, ident: &mut Ident) {
        if let Some(value) = self.data.get(&ident.name) {
            trace!("[TEMPLATE] {} -> {}", ident.name, value);
            ident.name = value.clone();
            self.replaced += 1;
        }
    }

    fn visit_import_spec_mut(&mut self, spec: &mut ImportSpec) {
        if let Some(value) = self.data.get(spec.path_value().as_str()) {
            trace!("[TEMPLATE] import {} -> {}", spec.path.value, value);
            spec.path = BasicLit::string(value);
            self.replaced += 1;
        }
        visit::walk_import_spec_mut(self, spec);
    }
}
