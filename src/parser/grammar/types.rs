//! Type productions: type names, literals, signatures and parameter lists

use super::super::parser::{PResult, Parser};
use super::super::syntax_kind::SyntaxKind;
use super::TYPE_START;
use crate::syntax::ast::{
    ArrayType, ChanDir, ChanType, Field, FieldList, FuncType, Ident, InterfaceElem,
    InterfaceMethod, InterfaceType, LitKind, BasicLit, MapType, StructType, TypeExpr, TypeName,
    TypeTerm,
};

/// One comma-separated entry of a parameter list before grouping
enum ParamEntry {
    Named(Ident, TypeExpr),
    Unnamed(TypeExpr),
}

impl Parser<'_> {
    pub(crate) fn parse_type(&mut self) -> PResult<TypeExpr> {
        match self.current_kind() {
            SyntaxKind::IDENT => Ok(TypeExpr::Named(self.parse_type_name()?)),
            SyntaxKind::STAR => {
                self.bump();
                Ok(TypeExpr::Pointer(Box::new(self.parse_type()?)))
            }
            SyntaxKind::L_BRACKET => self.parse_array_or_slice_type(),
            SyntaxKind::MAP_KW => {
                self.bump();
                self.expect(SyntaxKind::L_BRACKET)?;
                let key = self.parse_type()?;
                self.expect(SyntaxKind::R_BRACKET)?;
                let value = self.parse_type()?;
                Ok(TypeExpr::Map(MapType {
                    key: Box::new(key),
                    value: Box::new(value),
                }))
            }
            SyntaxKind::CHAN_KW => {
                self.bump();
                let dir = if self.eat(SyntaxKind::ARROW) {
                    ChanDir::Send
                } else {
                    ChanDir::Both
                };
                let elem = self.parse_type()?;
                Ok(TypeExpr::Chan(ChanType {
                    dir,
                    elem: Box::new(elem),
                }))
            }
            SyntaxKind::ARROW => {
                self.bump();
                self.expect(SyntaxKind::CHAN_KW)?;
                let elem = self.parse_type()?;
                Ok(TypeExpr::Chan(ChanType {
                    dir: ChanDir::Recv,
                    elem: Box::new(elem),
                }))
            }
            SyntaxKind::FUNC_KW => {
                self.bump();
                Ok(TypeExpr::Func(self.parse_signature()?))
            }
            SyntaxKind::STRUCT_KW => Ok(TypeExpr::Struct(self.parse_struct_type()?)),
            SyntaxKind::INTERFACE_KW => Ok(TypeExpr::Interface(self.parse_interface_type()?)),
            SyntaxKind::L_PAREN => {
                self.bump();
                let inner = self.parse_type()?;
                self.expect(SyntaxKind::R_PAREN)?;
                Ok(inner)
            }
            SyntaxKind::ELLIPSIS => {
                self.bump();
                Ok(TypeExpr::Ellipsis(Box::new(self.parse_type()?)))
            }
            _ => Err(self.unexpected("type")),
        }
    }

    /// `Name`, `pkg.Name`, with optional type arguments
    fn parse_type_name(&mut self) -> PResult<TypeName> {
        let first = self.expect_ident()?;
        let (package, name) = if self.at(SyntaxKind::DOT) && self.nth(1) == SyntaxKind::IDENT {
            self.bump();
            (Some(first), self.expect_ident()?)
        } else {
            (None, first)
        };
        let args = if self.at(SyntaxKind::L_BRACKET) && self.nth(1) != SyntaxKind::R_BRACKET {
            self.parse_type_args()?
        } else {
            Vec::new()
        };
        Ok(TypeName {
            package,
            name,
            args,
        })
    }

    pub(crate) fn parse_type_args(&mut self) -> PResult<Vec<TypeExpr>> {
        self.expect(SyntaxKind::L_BRACKET)?;
        let mut args = vec![self.parse_type()?];
        while self.eat(SyntaxKind::COMMA) {
            if self.at(SyntaxKind::R_BRACKET) {
                break;
            }
            args.push(self.parse_type()?);
        }
        self.expect(SyntaxKind::R_BRACKET)?;
        Ok(args)
    }

    fn parse_array_or_slice_type(&mut self) -> PResult<TypeExpr> {
        self.expect(SyntaxKind::L_BRACKET)?;
        if self.eat(SyntaxKind::R_BRACKET) {
            return Ok(TypeExpr::Slice(Box::new(self.parse_type()?)));
        }
        let len = if self.eat(SyntaxKind::ELLIPSIS) {
            None
        } else {
            let old_level = self.expr_level;
            self.expr_level = 1;
            let len = self.parse_expr();
            self.expr_level = old_level;
            Some(Box::new(len?))
        };
        self.expect(SyntaxKind::R_BRACKET)?;
        let elem = self.parse_type()?;
        Ok(TypeExpr::Array(ArrayType {
            len,
            elem: Box::new(elem),
        }))
    }

    fn parse_struct_type(&mut self) -> PResult<StructType> {
        let start = self.start();
        self.expect(SyntaxKind::STRUCT_KW)?;
        self.expect(SyntaxKind::L_BRACE)?;
        let mut fields = Vec::new();
        while !self.at_any(&[SyntaxKind::R_BRACE, SyntaxKind::EOF]) {
            fields.push(self.parse_struct_field()?);
            self.expect_semicolon()?;
        }
        self.expect(SyntaxKind::R_BRACE)?;
        Ok(StructType {
            fields,
            span: self.span_from(start),
        })
    }

    /// `a, b T "tag"` or an embedded `T` / `*T` / `pkg.T`
    fn parse_struct_field(&mut self) -> PResult<Field> {
        let start = self.start();
        let embedded = match self.current_kind() {
            SyntaxKind::STAR => true,
            SyntaxKind::IDENT => matches!(
                self.nth(1),
                SyntaxKind::DOT
                    | SyntaxKind::SEMICOLON
                    | SyntaxKind::R_BRACE
                    | SyntaxKind::STRING
                    | SyntaxKind::EOF
            ),
            _ => false,
        };
        let (names, ty) = if embedded {
            (Vec::new(), self.parse_type()?)
        } else {
            let names = self.parse_ident_list()?;
            (names, self.parse_type()?)
        };
        let tag = if self.at(SyntaxKind::STRING) {
            let token = self.bump();
            let mut tag = BasicLit::new(LitKind::String, token.text);
            tag.span = self.token_span(&token);
            Some(tag)
        } else {
            None
        };
        Ok(Field {
            names,
            ty,
            tag,
            span: self.span_from(start),
        })
    }

    fn parse_interface_type(&mut self) -> PResult<InterfaceType> {
        let start = self.start();
        self.expect(SyntaxKind::INTERFACE_KW)?;
        self.expect(SyntaxKind::L_BRACE)?;
        let mut elems = Vec::new();
        while !self.at_any(&[SyntaxKind::R_BRACE, SyntaxKind::EOF]) {
            if self.at(SyntaxKind::IDENT) && self.nth(1) == SyntaxKind::L_PAREN {
                let method_start = self.start();
                let name = self.expect_ident()?;
                let sig = self.parse_signature()?;
                elems.push(InterfaceElem::Method(InterfaceMethod {
                    name,
                    sig,
                    span: self.span_from(method_start),
                }));
            } else {
                elems.push(InterfaceElem::Embedded(self.parse_type_terms()?));
            }
            self.expect_semicolon()?;
        }
        self.expect(SyntaxKind::R_BRACE)?;
        Ok(InterfaceType {
            elems,
            span: self.span_from(start),
        })
    }

    /// `~int | string | Other`
    pub(crate) fn parse_type_terms(&mut self) -> PResult<Vec<TypeTerm>> {
        let mut terms = Vec::new();
        loop {
            let tilde = self.eat(SyntaxKind::TILDE);
            let ty = self.parse_type()?;
            terms.push(TypeTerm { tilde, ty });
            if !self.eat(SyntaxKind::PIPE) {
                break;
            }
        }
        Ok(terms)
    }

    /// Parameters [ Result ]
    pub(crate) fn parse_signature(&mut self) -> PResult<FuncType> {
        let params = self.parse_parameters()?;
        let results = if self.at(SyntaxKind::L_PAREN) {
            Some(self.parse_parameters()?)
        } else if self.at_any(TYPE_START) {
            let start = self.start();
            let ty = self.parse_type()?;
            let mut list = FieldList::new(vec![Field::new(Vec::new(), ty)]);
            list.span = self.span_from(start);
            Some(list)
        } else {
            None
        };
        Ok(FuncType { params, results })
    }

    /// `(a, b int, c string)` or `(int, string)`
    ///
    /// Entries are read one at a time and grouped afterwards: once any entry
    /// carries a name, bare identifiers before it are names sharing its type.
    pub(crate) fn parse_parameters(&mut self) -> PResult<FieldList> {
        let start = self.start();
        self.expect(SyntaxKind::L_PAREN)?;
        let old_level = self.expr_level;
        self.expr_level = 1;
        let entries = self.parse_param_entries(SyntaxKind::R_PAREN);
        self.expr_level = old_level;
        let entries = entries?;
        self.expect(SyntaxKind::R_PAREN)?;
        let mut list = FieldList::new(group_params(entries));
        list.span = self.span_from(start);
        Ok(list)
    }

    fn parse_param_entries(&mut self, close: SyntaxKind) -> PResult<Vec<ParamEntry>> {
        let mut entries = Vec::new();
        while !self.at_any(&[close, SyntaxKind::EOF]) {
            entries.push(self.parse_param_entry()?);
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        Ok(entries)
    }

    fn parse_param_entry(&mut self) -> PResult<ParamEntry> {
        if self.at(SyntaxKind::IDENT) && self.param_has_name() {
            let name = self.expect_ident()?;
            let ty = self.parse_type()?;
            return Ok(ParamEntry::Named(name, ty));
        }
        Ok(ParamEntry::Unnamed(self.parse_type()?))
    }

    /// Whether the identifier at the cursor names a parameter rather than
    /// starting its type.
    fn param_has_name(&self) -> bool {
        match self.nth(1) {
            SyntaxKind::IDENT
            | SyntaxKind::STAR
            | SyntaxKind::L_PAREN
            | SyntaxKind::MAP_KW
            | SyntaxKind::CHAN_KW
            | SyntaxKind::ARROW
            | SyntaxKind::FUNC_KW
            | SyntaxKind::STRUCT_KW
            | SyntaxKind::INTERFACE_KW
            | SyntaxKind::ELLIPSIS => true,
            // `xs []int` and `buf [4]byte` versus the instantiation `List[T]`
            SyntaxKind::L_BRACKET => {
                let open = self.token_index() + 1;
                if self.nth_at(open + 1) == SyntaxKind::R_BRACKET {
                    return true;
                }
                let after = self.matching_close(open);
                TYPE_START.contains(&self.nth_at(after))
            }
            _ => false,
        }
    }

    /// `[K comparable, V any]` or `[A, B any]`
    pub(crate) fn parse_type_params(&mut self) -> PResult<FieldList> {
        let start = self.start();
        self.expect(SyntaxKind::L_BRACKET)?;
        let mut fields = Vec::new();
        let mut pending: Vec<Ident> = Vec::new();
        while !self.at_any(&[SyntaxKind::R_BRACKET, SyntaxKind::EOF]) {
            let field_start = self.start();
            pending.push(self.expect_ident()?);
            if self.eat(SyntaxKind::COMMA) {
                continue;
            }
            let terms = self.parse_type_terms()?;
            let constraint = constraint_type(terms);
            let mut field = Field::new(std::mem::take(&mut pending), constraint);
            field.span = self.span_from(field_start);
            fields.push(field);
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        if !pending.is_empty() {
            return Err(self.unexpected("type constraint"));
        }
        self.expect(SyntaxKind::R_BRACKET)?;
        let mut list = FieldList::new(fields);
        list.span = self.span_from(start);
        Ok(list)
    }
}

/// A lone constraint stays a plain type; unions become an inline interface.
fn constraint_type(mut terms: Vec<TypeTerm>) -> TypeExpr {
    if terms.len() == 1 && !terms[0].tilde {
        if let Some(term) = terms.pop() {
            return term.ty;
        }
    }
    TypeExpr::Interface(InterfaceType {
        elems: vec![InterfaceElem::Embedded(terms)],
        span: Default::default(),
    })
}

fn group_params(entries: Vec<ParamEntry>) -> Vec<Field> {
    let any_named = entries
        .iter()
        .any(|entry| matches!(entry, ParamEntry::Named(..)));
    if !any_named {
        return entries
            .into_iter()
            .filter_map(|entry| match entry {
                ParamEntry::Unnamed(ty) => Some(Field::new(Vec::new(), ty)),
                ParamEntry::Named(..) => None,
            })
            .collect();
    }

    let mut fields = Vec::new();
    let mut pending: Vec<Ident> = Vec::new();
    for entry in entries {
        match entry {
            ParamEntry::Named(name, ty) => {
                pending.push(name);
                let span = pending
                    .iter()
                    .fold(Default::default(), |span: crate::base::Span, ident| {
                        span.cover(ident.span)
                    });
                let mut field = Field::new(std::mem::take(&mut pending), ty);
                field.span = span;
                fields.push(field);
            }
            ParamEntry::Unnamed(TypeExpr::Named(type_name))
                if type_name.package.is_none() && type_name.args.is_empty() =>
            {
                pending.push(type_name.name);
            }
            ParamEntry::Unnamed(ty) => fields.push(Field::new(Vec::new(), ty)),
        }
    }
    fields
}
