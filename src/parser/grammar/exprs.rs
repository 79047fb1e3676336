//! Expression productions
//!
//! Binary expressions use precedence climbing over [`BinaryOp::precedence`].

use super::super::parser::{PResult, Parser};
use super::super::syntax_kind::SyntaxKind;
use crate::syntax::ast::{
    BasicLit, BinaryExpr, BinaryOp, CallExpr, CompositeLit, Element, Expr, FuncLit, IndexExpr,
    LitKind, SelectorExpr, SliceExpr, TypeAssertExpr, TypeExpr, UnaryExpr, UnaryOp,
};

fn binary_op(kind: SyntaxKind) -> Option<BinaryOp> {
    let op = match kind {
        SyntaxKind::PIPE_PIPE => BinaryOp::LogOr,
        SyntaxKind::AMP_AMP => BinaryOp::LogAnd,
        SyntaxKind::EQ_EQ => BinaryOp::Eq,
        SyntaxKind::BANG_EQ => BinaryOp::Ne,
        SyntaxKind::LT => BinaryOp::Lt,
        SyntaxKind::LT_EQ => BinaryOp::Le,
        SyntaxKind::GT => BinaryOp::Gt,
        SyntaxKind::GT_EQ => BinaryOp::Ge,
        SyntaxKind::PLUS => BinaryOp::Add,
        SyntaxKind::MINUS => BinaryOp::Sub,
        SyntaxKind::PIPE => BinaryOp::Or,
        SyntaxKind::CARET => BinaryOp::Xor,
        SyntaxKind::STAR => BinaryOp::Mul,
        SyntaxKind::SLASH => BinaryOp::Div,
        SyntaxKind::PERCENT => BinaryOp::Rem,
        SyntaxKind::SHL => BinaryOp::Shl,
        SyntaxKind::SHR => BinaryOp::Shr,
        SyntaxKind::AMP => BinaryOp::And,
        SyntaxKind::AMP_CARET => BinaryOp::AndNot,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: SyntaxKind) -> Option<UnaryOp> {
    let op = match kind {
        SyntaxKind::PLUS => UnaryOp::Plus,
        SyntaxKind::MINUS => UnaryOp::Neg,
        SyntaxKind::BANG => UnaryOp::Not,
        SyntaxKind::CARET => UnaryOp::Xor,
        SyntaxKind::STAR => UnaryOp::Deref,
        SyntaxKind::AMP => UnaryOp::Addr,
        SyntaxKind::ARROW => UnaryOp::Recv,
        _ => return None,
    };
    Some(op)
}

fn literal_kind(kind: SyntaxKind) -> Option<LitKind> {
    let lit = match kind {
        SyntaxKind::INT => LitKind::Int,
        SyntaxKind::FLOAT => LitKind::Float,
        SyntaxKind::IMAG => LitKind::Imag,
        SyntaxKind::CHAR => LitKind::Char,
        SyntaxKind::STRING => LitKind::String,
        _ => return None,
    };
    Some(lit)
}

/// Whether `expr` may be the type of a composite literal
fn is_literal_type(expr: &Expr) -> bool {
    match expr {
        Expr::Ident(_) => true,
        Expr::Selector(selector) => matches!(*selector.base, Expr::Ident(_)),
        Expr::Index(index) => is_literal_type(&index.base),
        Expr::Type(
            TypeExpr::Array(_) | TypeExpr::Slice(_) | TypeExpr::Map(_) | TypeExpr::Struct(_),
        ) => true,
        _ => false,
    }
}

/// Convert an expression used as a composite literal type back into a type
fn expr_to_type(expr: Expr) -> Option<TypeExpr> {
    use crate::syntax::ast::TypeName;
    match expr {
        Expr::Ident(name) => Some(TypeExpr::Named(TypeName {
            package: None,
            name,
            args: Vec::new(),
        })),
        Expr::Selector(SelectorExpr { base, sel }) => match *base {
            Expr::Ident(package) => Some(TypeExpr::Named(TypeName {
                package: Some(package),
                name: sel,
                args: Vec::new(),
            })),
            _ => None,
        },
        Expr::Index(IndexExpr { base, indices }) => {
            let mut ty = expr_to_type(*base)?;
            if let TypeExpr::Named(type_name) = &mut ty {
                type_name.args = indices
                    .into_iter()
                    .map(expr_to_type)
                    .collect::<Option<Vec<_>>>()?;
            }
            Some(ty)
        }
        Expr::Type(ty) => Some(ty),
        Expr::Unary(UnaryExpr {
            op: UnaryOp::Deref,
            operand,
        }) => Some(TypeExpr::Pointer(Box::new(expr_to_type(*operand)?))),
        _ => None,
    }
}

impl Parser<'_> {
    pub(crate) fn parse_expr(&mut self) -> PResult<Expr> {
        self.parse_binary_expr(1)
    }

    pub(crate) fn parse_expr_list(&mut self) -> PResult<Vec<Expr>> {
        let mut exprs = vec![self.parse_expr()?];
        while self.eat(SyntaxKind::COMMA) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    fn parse_binary_expr(&mut self, min_prec: u8) -> PResult<Expr> {
        let mut lhs = self.parse_unary_expr()?;
        while let Some(op) = binary_op(self.current_kind()) {
            if op.precedence() < min_prec {
                break;
            }
            self.bump();
            let rhs = self.parse_binary_expr(op.precedence() + 1)?;
            lhs = Expr::Binary(BinaryExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            });
        }
        Ok(lhs)
    }

    fn parse_unary_expr(&mut self) -> PResult<Expr> {
        // `<-chan T` is a type, not a receive
        if self.at(SyntaxKind::ARROW) && self.nth(1) == SyntaxKind::CHAN_KW {
            let ty = self.parse_type()?;
            return self.parse_postfix(Expr::Type(ty));
        }
        if let Some(op) = unary_op(self.current_kind()) {
            self.bump();
            let operand = self.parse_unary_expr()?;
            return Ok(Expr::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
            }));
        }
        self.parse_primary_expr()
    }

    fn parse_primary_expr(&mut self) -> PResult<Expr> {
        let operand = self.parse_operand()?;
        self.parse_postfix(operand)
    }

    fn parse_operand(&mut self) -> PResult<Expr> {
        let kind = self.current_kind();
        if let Some(lit) = literal_kind(kind) {
            let token = self.bump();
            let mut value = BasicLit::new(lit, token.text);
            value.span = self.token_span(&token);
            return Ok(Expr::BasicLit(value));
        }
        match kind {
            SyntaxKind::IDENT => Ok(Expr::Ident(self.expect_ident()?)),
            SyntaxKind::L_PAREN => {
                self.bump();
                let old_level = self.expr_level;
                self.expr_level = 1;
                let inner = self.parse_expr_or_type();
                self.expr_level = old_level;
                let inner = inner?;
                self.expect(SyntaxKind::R_PAREN)?;
                Ok(Expr::Paren(Box::new(inner)))
            }
            SyntaxKind::FUNC_KW => {
                self.bump();
                let sig = self.parse_signature()?;
                if self.at(SyntaxKind::L_BRACE) {
                    let old_level = self.expr_level;
                    self.expr_level = 0;
                    let body = self.parse_block();
                    self.expr_level = old_level;
                    Ok(Expr::FuncLit(FuncLit { sig, body: body? }))
                } else {
                    Ok(Expr::Type(TypeExpr::Func(sig)))
                }
            }
            SyntaxKind::L_BRACKET
            | SyntaxKind::MAP_KW
            | SyntaxKind::CHAN_KW
            | SyntaxKind::STRUCT_KW
            | SyntaxKind::INTERFACE_KW => Ok(Expr::Type(self.parse_type()?)),
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Call arguments and parenthesized operands may be types
    fn parse_expr_or_type(&mut self) -> PResult<Expr> {
        if self.at_any(&[SyntaxKind::L_BRACKET, SyntaxKind::MAP_KW, SyntaxKind::CHAN_KW])
            || (self.at(SyntaxKind::FUNC_KW) && !self.func_lit_ahead())
        {
            let ty = self.parse_type()?;
            return self.parse_postfix(Expr::Type(ty));
        }
        self.parse_expr()
    }

    /// `func(...) ... {` starts a literal; a bare `func(...)` is a type
    fn func_lit_ahead(&self) -> bool {
        let mut index = self.token_index() + 1;
        // params, then an optional parenthesized result list
        index = self.matching_close(index);
        loop {
            match self.nth_at(index) {
                SyntaxKind::L_BRACE => return true,
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => index = self.matching_close(index),
                SyntaxKind::COMMA | SyntaxKind::R_PAREN | SyntaxKind::SEMICOLON | SyntaxKind::EOF => {
                    return false;
                }
                _ => index += 1,
            }
        }
    }

    fn parse_postfix(&mut self, mut expr: Expr) -> PResult<Expr> {
        loop {
            match self.current_kind() {
                SyntaxKind::DOT => {
                    self.bump();
                    if self.eat(SyntaxKind::L_PAREN) {
                        let ty = if self.eat(SyntaxKind::TYPE_KW) {
                            None
                        } else {
                            Some(self.parse_type()?)
                        };
                        self.expect(SyntaxKind::R_PAREN)?;
                        expr = Expr::TypeAssert(TypeAssertExpr {
                            base: Box::new(expr),
                            ty,
                        });
                    } else {
                        let sel = self.expect_ident()?;
                        expr = Expr::Selector(SelectorExpr {
                            base: Box::new(expr),
                            sel,
                        });
                    }
                }
                SyntaxKind::L_BRACKET => expr = self.parse_index_or_slice(expr)?,
                SyntaxKind::L_PAREN => expr = self.parse_call(expr)?,
                SyntaxKind::L_BRACE
                    if is_literal_type(&expr)
                        && (self.expr_level >= 0 || matches!(expr, Expr::Type(_))) =>
                {
                    let start = self.start();
                    let ty = expr_to_type(expr).ok_or_else(|| self.unexpected("literal type"))?;
                    expr = Expr::Composite(self.parse_composite_body(Some(ty), start)?);
                }
                _ => return Ok(expr),
            }
        }
    }

    fn parse_index_or_slice(&mut self, base: Expr) -> PResult<Expr> {
        self.expect(SyntaxKind::L_BRACKET)?;
        let old_level = self.expr_level;
        self.expr_level = 1;
        let result = self.parse_index_or_slice_inner(base);
        self.expr_level = old_level;
        result
    }

    fn parse_index_or_slice_inner(&mut self, base: Expr) -> PResult<Expr> {
        let mut parts: Vec<Option<Expr>> = Vec::new();
        let mut current = if self.at(SyntaxKind::COLON) {
            None
        } else {
            Some(self.parse_expr_or_type()?)
        };

        if self.at(SyntaxKind::COLON) {
            while self.eat(SyntaxKind::COLON) {
                parts.push(current.take());
                if !self.at_any(&[SyntaxKind::COLON, SyntaxKind::R_BRACKET]) {
                    current = Some(self.parse_expr()?);
                }
            }
            parts.push(current.take());
            self.expect(SyntaxKind::R_BRACKET)?;
            let mut parts = parts.into_iter().map(|part| part.map(Box::new));
            return Ok(Expr::Slice(SliceExpr {
                base: Box::new(base),
                low: parts.next().flatten(),
                high: parts.next().flatten(),
                max: parts.next().flatten(),
            }));
        }

        let mut indices: Vec<Expr> = current.into_iter().collect();
        while self.eat(SyntaxKind::COMMA) {
            if self.at(SyntaxKind::R_BRACKET) {
                break;
            }
            indices.push(self.parse_expr_or_type()?);
        }
        self.expect(SyntaxKind::R_BRACKET)?;
        Ok(Expr::Index(IndexExpr {
            base: Box::new(base),
            indices,
        }))
    }

    fn parse_call(&mut self, fun: Expr) -> PResult<Expr> {
        self.expect(SyntaxKind::L_PAREN)?;
        let old_level = self.expr_level;
        self.expr_level = 1;
        let args = self.parse_call_args();
        self.expr_level = old_level;
        let (args, ellipsis) = args?;
        self.expect(SyntaxKind::R_PAREN)?;
        Ok(Expr::Call(CallExpr {
            fun: Box::new(fun),
            args,
            ellipsis,
        }))
    }

    fn parse_call_args(&mut self) -> PResult<(Vec<Expr>, bool)> {
        let mut args = Vec::new();
        let mut ellipsis = false;
        while !self.at_any(&[SyntaxKind::R_PAREN, SyntaxKind::EOF]) {
            args.push(self.parse_expr_or_type()?);
            if self.eat(SyntaxKind::ELLIPSIS) {
                ellipsis = true;
            }
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        Ok((args, ellipsis))
    }

    /// `{ elem, key: value, {nested}, }` after the literal type
    fn parse_composite_body(
        &mut self,
        ty: Option<TypeExpr>,
        start: crate::base::Position,
    ) -> PResult<CompositeLit> {
        self.expect(SyntaxKind::L_BRACE)?;
        let old_level = self.expr_level;
        self.expr_level = 1;
        let elts = self.parse_elements();
        self.expr_level = old_level;
        let elts = elts?;
        self.expect(SyntaxKind::R_BRACE)?;
        Ok(CompositeLit {
            ty,
            elts,
            span: self.span_from(start),
        })
    }

    fn parse_elements(&mut self) -> PResult<Vec<Element>> {
        let mut elts = Vec::new();
        while !self.at_any(&[SyntaxKind::R_BRACE, SyntaxKind::EOF]) {
            let first = self.parse_element_value()?;
            let element = if self.eat(SyntaxKind::COLON) {
                Element {
                    key: Some(first),
                    value: self.parse_element_value()?,
                }
            } else {
                Element {
                    key: None,
                    value: first,
                }
            };
            elts.push(element);
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }
        Ok(elts)
    }

    fn parse_element_value(&mut self) -> PResult<Expr> {
        if self.at(SyntaxKind::L_BRACE) {
            let start = self.start();
            return Ok(Expr::Composite(self.parse_composite_body(None, start)?));
        }
        self.parse_expr()
    }
}
