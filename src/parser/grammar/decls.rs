//! Source file, import and declaration productions

use super::super::parser::{PResult, Parser};
use super::super::syntax_kind::SyntaxKind;
use super::LIST_END;
use crate::base::Span;
use crate::syntax::ast::{
    BasicLit, Decl, DeclKeyword, File, FuncDecl, GenDecl, Ident, ImportDecl, ImportSpec, LitKind,
    Spec, TypeSpec, ValueSpec,
};

const DECL_START: &[SyntaxKind] = &[
    SyntaxKind::FUNC_KW,
    SyntaxKind::VAR_KW,
    SyntaxKind::CONST_KW,
    SyntaxKind::TYPE_KW,
];

impl Parser<'_> {
    /// SourceFile = PackageClause ";" { ImportDecl ";" } { TopLevelDecl ";" }
    pub(crate) fn parse_source_file(&mut self) -> File {
        let start = self.start();
        let package = match self.parse_package_clause() {
            Ok(name) => name,
            Err(error) => {
                self.push_error(error);
                self.recover_to_decl();
                Ident::new("", Span::default())
            }
        };

        let mut imports = Vec::new();
        while self.at(SyntaxKind::IMPORT_KW) {
            match self.parse_import_decl() {
                Ok(decl) => imports.push(decl),
                Err(error) => {
                    self.push_error(error);
                    self.recover_to_decl();
                }
            }
        }

        let mut decls = Vec::new();
        while !self.at_eof() {
            if self.eat(SyntaxKind::SEMICOLON) {
                continue;
            }
            let result = if self.at(SyntaxKind::IMPORT_KW) {
                Err(self.error_here("imports must appear before other declarations"))
            } else if self.at_any(DECL_START) {
                self.parse_top_level_decl()
            } else {
                Err(self.unexpected("declaration"))
            };
            match result {
                Ok(decl) => decls.push(decl),
                Err(error) => {
                    self.push_error(error);
                    self.recover_to_decl();
                }
            }
        }

        File {
            package,
            imports,
            decls,
            span: self.span_from(start),
        }
    }

    fn parse_package_clause(&mut self) -> PResult<Ident> {
        if !self.eat(SyntaxKind::PACKAGE_KW) {
            return Err(self.unexpected("'package' clause"));
        }
        let name = self.expect_ident()?;
        self.expect_semicolon()?;
        Ok(name)
    }

    fn parse_import_decl(&mut self) -> PResult<ImportDecl> {
        let start = self.start();
        self.expect(SyntaxKind::IMPORT_KW)?;
        let mut specs = Vec::new();
        let grouped = self.eat(SyntaxKind::L_PAREN);
        if grouped {
            while !self.at_any(&[SyntaxKind::R_PAREN, SyntaxKind::EOF]) {
                specs.push(self.parse_import_spec()?);
                self.expect_semicolon()?;
            }
            self.expect(SyntaxKind::R_PAREN)?;
        } else {
            specs.push(self.parse_import_spec()?);
        }
        let span = self.span_from(start);
        self.expect_semicolon()?;
        Ok(ImportDecl {
            specs,
            grouped,
            span,
        })
    }

    fn parse_import_spec(&mut self) -> PResult<ImportSpec> {
        let start = self.start();
        let name = match self.current_kind() {
            SyntaxKind::IDENT => Some(self.expect_ident()?),
            SyntaxKind::DOT => {
                let token = self.bump();
                Some(self.ident_from(&token))
            }
            _ => None,
        };
        let token = self.expect(SyntaxKind::STRING)?;
        let mut path = BasicLit::new(LitKind::String, token.text);
        path.span = self.token_span(&token);
        Ok(ImportSpec {
            name,
            path,
            span: self.span_from(start),
        })
    }

    fn parse_top_level_decl(&mut self) -> PResult<Decl> {
        let decl = if self.at(SyntaxKind::FUNC_KW) {
            Decl::Func(self.parse_func_decl()?)
        } else {
            Decl::Gen(self.parse_gen_decl()?)
        };
        self.expect_semicolon()?;
        Ok(decl)
    }

    /// FunctionDecl / MethodDecl
    fn parse_func_decl(&mut self) -> PResult<FuncDecl> {
        let start = self.start();
        self.expect(SyntaxKind::FUNC_KW)?;
        let recv = if self.at(SyntaxKind::L_PAREN) {
            Some(self.parse_parameters()?)
        } else {
            None
        };
        let name = self.expect_ident()?;
        let type_params = if self.at(SyntaxKind::L_BRACKET) {
            Some(self.parse_type_params()?)
        } else {
            None
        };
        let sig = self.parse_signature()?;
        let body = if self.at(SyntaxKind::L_BRACE) {
            let old_level = self.expr_level;
            self.expr_level = 0;
            let body = self.parse_block();
            self.expr_level = old_level;
            Some(body?)
        } else {
            None
        };
        Ok(FuncDecl {
            recv,
            name,
            type_params,
            sig,
            body,
            span: self.span_from(start),
        })
    }

    /// `var`, `const` or `type` declaration, with or without parentheses
    pub(crate) fn parse_gen_decl(&mut self) -> PResult<GenDecl> {
        let start = self.start();
        let keyword = match self.current_kind() {
            SyntaxKind::VAR_KW => DeclKeyword::Var,
            SyntaxKind::CONST_KW => DeclKeyword::Const,
            SyntaxKind::TYPE_KW => DeclKeyword::Type,
            _ => return Err(self.unexpected("'var', 'const' or 'type'")),
        };
        self.bump();

        let mut specs = Vec::new();
        let grouped = self.eat(SyntaxKind::L_PAREN);
        if grouped {
            while !self.at_any(&[SyntaxKind::R_PAREN, SyntaxKind::EOF]) {
                specs.push(self.parse_spec(keyword)?);
                self.expect_semicolon()?;
            }
            self.expect(SyntaxKind::R_PAREN)?;
        } else {
            specs.push(self.parse_spec(keyword)?);
        }

        Ok(GenDecl {
            keyword,
            specs,
            grouped,
            span: self.span_from(start),
        })
    }

    fn parse_spec(&mut self, keyword: DeclKeyword) -> PResult<Spec> {
        match keyword {
            DeclKeyword::Type => Ok(Spec::Type(self.parse_type_spec()?)),
            DeclKeyword::Var | DeclKeyword::Const => Ok(Spec::Value(self.parse_value_spec()?)),
        }
    }

    /// IdentifierList [ Type ] [ "=" ExpressionList ]
    fn parse_value_spec(&mut self) -> PResult<ValueSpec> {
        let start = self.start();
        let names = self.parse_ident_list()?;
        let ty = if self.at(SyntaxKind::EQ) || self.at_any(LIST_END) {
            None
        } else {
            Some(self.parse_type()?)
        };
        let values = if self.eat(SyntaxKind::EQ) {
            self.parse_expr_list()?
        } else {
            Vec::new()
        };
        Ok(ValueSpec {
            names,
            ty,
            values,
            span: self.span_from(start),
        })
    }

    /// identifier [ TypeParameters ] [ "=" ] Type
    fn parse_type_spec(&mut self) -> PResult<TypeSpec> {
        let start = self.start();
        let name = self.expect_ident()?;
        let type_params = if self.at_type_params() {
            Some(self.parse_type_params()?)
        } else {
            None
        };
        let alias = self.eat(SyntaxKind::EQ);
        let ty = self.parse_type()?;
        Ok(TypeSpec {
            name,
            type_params,
            alias,
            ty,
            span: self.span_from(start),
        })
    }

    /// `type A[T any] ...` versus the array type `type A [N]int`
    fn at_type_params(&self) -> bool {
        self.at(SyntaxKind::L_BRACKET)
            && self.nth(1) == SyntaxKind::IDENT
            && !matches!(self.nth(2), SyntaxKind::R_BRACKET | SyntaxKind::DOT)
    }

    pub(crate) fn parse_ident_list(&mut self) -> PResult<Vec<Ident>> {
        let mut names = vec![self.expect_ident()?];
        while self.eat(SyntaxKind::COMMA) {
            names.push(self.expect_ident()?);
        }
        Ok(names)
    }
}
