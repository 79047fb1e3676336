//! Statement productions

use super::super::parser::{PResult, Parser};
use super::super::syntax_kind::SyntaxKind;
use super::LIST_END;
use crate::syntax::ast::{
    AssignOp, AssignStmt, BinaryOp, Block, BranchKind, BranchStmt, CaseClause, Expr, ForStmt,
    Ident, IfStmt, IncDecStmt, LabeledStmt, RangeStmt, SendStmt, Stmt, StmtKind, SwitchStmt,
    TypeAssertExpr, TypeCaseClause, TypeSwitchStmt,
};

/// A simple statement, or the header of a range loop when one is allowed
enum Simple {
    Stmt(Stmt),
    Range {
        key: Option<Expr>,
        value: Option<Expr>,
        define: bool,
        expr: Expr,
    },
}

enum ForHeader {
    Clauses {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        post: Option<Box<Stmt>>,
    },
    Range {
        key: Option<Expr>,
        value: Option<Expr>,
        define: bool,
        expr: Expr,
    },
}

fn compound_op(kind: SyntaxKind) -> Option<BinaryOp> {
    let op = match kind {
        SyntaxKind::PLUS_EQ => BinaryOp::Add,
        SyntaxKind::MINUS_EQ => BinaryOp::Sub,
        SyntaxKind::STAR_EQ => BinaryOp::Mul,
        SyntaxKind::SLASH_EQ => BinaryOp::Div,
        SyntaxKind::PERCENT_EQ => BinaryOp::Rem,
        SyntaxKind::AMP_EQ => BinaryOp::And,
        SyntaxKind::PIPE_EQ => BinaryOp::Or,
        SyntaxKind::CARET_EQ => BinaryOp::Xor,
        SyntaxKind::SHL_EQ => BinaryOp::Shl,
        SyntaxKind::SHR_EQ => BinaryOp::Shr,
        SyntaxKind::AMP_CARET_EQ => BinaryOp::AndNot,
        _ => return None,
    };
    Some(op)
}

/// `x.(type)` or `v := x.(type)`, yielding the binding and the operand
fn type_switch_guard(stmt: Stmt) -> Result<(Option<Ident>, Expr), Stmt> {
    let Stmt { kind, span } = stmt;
    match kind {
        StmtKind::Expr(Expr::TypeAssert(TypeAssertExpr { base, ty: None })) => Ok((None, *base)),
        StmtKind::Assign(AssignStmt {
            mut lhs,
            op: AssignOp::Define,
            mut rhs,
        }) if lhs.len() == 1 && rhs.len() == 1 => match (lhs.pop(), rhs.pop()) {
            (Some(Expr::Ident(binding)), Some(Expr::TypeAssert(TypeAssertExpr { base, ty: None }))) => {
                Ok((Some(binding), *base))
            }
            (lhs, rhs) => Err(Stmt {
                kind: StmtKind::Assign(AssignStmt {
                    lhs: lhs.into_iter().collect(),
                    op: AssignOp::Define,
                    rhs: rhs.into_iter().collect(),
                }),
                span,
            }),
        },
        kind => Err(Stmt { kind, span }),
    }
}

impl Parser<'_> {
    pub(crate) fn parse_block(&mut self) -> PResult<Block> {
        let start = self.start();
        self.expect(SyntaxKind::L_BRACE)?;
        let stmts = self.parse_stmt_list();
        self.expect(SyntaxKind::R_BRACE)?;
        Ok(Block {
            stmts,
            span: self.span_from(start),
        })
    }

    /// Statements up to a closing `}` or the next case clause
    fn parse_stmt_list(&mut self) -> Vec<Stmt> {
        let old_level = self.expr_level;
        self.expr_level = 0;
        let mut stmts = Vec::new();
        while !self.at_any(&[
            SyntaxKind::R_BRACE,
            SyntaxKind::CASE_KW,
            SyntaxKind::DEFAULT_KW,
            SyntaxKind::EOF,
        ]) {
            if self.eat(SyntaxKind::SEMICOLON) {
                continue;
            }
            match self.parse_stmt() {
                Ok(stmt) => {
                    stmts.push(stmt);
                    if let Err(error) = self.expect_semicolon() {
                        self.push_error(error);
                        self.recover_to_stmt_end();
                    }
                }
                Err(error) => {
                    self.push_error(error);
                    self.recover_to_stmt_end();
                }
            }
        }
        self.expr_level = old_level;
        stmts
    }

    pub(crate) fn parse_stmt(&mut self) -> PResult<Stmt> {
        let start = self.start();
        let kind = match self.current_kind() {
            SyntaxKind::VAR_KW | SyntaxKind::CONST_KW | SyntaxKind::TYPE_KW => {
                StmtKind::Decl(self.parse_gen_decl()?)
            }
            SyntaxKind::RETURN_KW => {
                self.bump();
                let values = if self.at_any(LIST_END) {
                    Vec::new()
                } else {
                    self.parse_expr_list()?
                };
                StmtKind::Return(values)
            }
            SyntaxKind::IF_KW => StmtKind::If(self.parse_if()?),
            SyntaxKind::FOR_KW => self.parse_for()?,
            SyntaxKind::SWITCH_KW => self.parse_switch()?,
            SyntaxKind::SELECT_KW => {
                return Err(self.error_here("select statements are not supported"));
            }
            SyntaxKind::L_BRACE => StmtKind::Block(self.parse_block()?),
            SyntaxKind::BREAK_KW | SyntaxKind::CONTINUE_KW | SyntaxKind::GOTO_KW => {
                let kind = match self.bump().kind {
                    SyntaxKind::BREAK_KW => BranchKind::Break,
                    SyntaxKind::CONTINUE_KW => BranchKind::Continue,
                    _ => BranchKind::Goto,
                };
                let label = if self.at(SyntaxKind::IDENT) {
                    Some(self.expect_ident()?)
                } else {
                    None
                };
                StmtKind::Branch(BranchStmt { kind, label })
            }
            SyntaxKind::FALLTHROUGH_KW => {
                self.bump();
                StmtKind::Branch(BranchStmt {
                    kind: BranchKind::Fallthrough,
                    label: None,
                })
            }
            SyntaxKind::GO_KW => {
                self.bump();
                StmtKind::Go(self.parse_expr()?)
            }
            SyntaxKind::DEFER_KW => {
                self.bump();
                StmtKind::Defer(self.parse_expr()?)
            }
            SyntaxKind::IDENT if self.nth(1) == SyntaxKind::COLON => {
                let label = self.expect_ident()?;
                self.bump();
                let stmt = if self.at_any(&[SyntaxKind::R_BRACE, SyntaxKind::SEMICOLON]) {
                    Stmt {
                        kind: StmtKind::Empty,
                        span: self.span_from(self.start()),
                    }
                } else {
                    self.parse_stmt()?
                };
                StmtKind::Labeled(LabeledStmt {
                    label,
                    stmt: Box::new(stmt),
                })
            }
            _ => return self.parse_simple_stmt(),
        };
        Ok(Stmt {
            kind,
            span: self.span_from(start),
        })
    }

    pub(crate) fn parse_simple_stmt(&mut self) -> PResult<Stmt> {
        match self.parse_simple(false)? {
            Simple::Stmt(stmt) => Ok(stmt),
            Simple::Range { .. } => Err(self.unexpected("statement")),
        }
    }

    fn parse_simple(&mut self, range_ok: bool) -> PResult<Simple> {
        let start = self.start();
        if range_ok && self.eat(SyntaxKind::RANGE_KW) {
            return Ok(Simple::Range {
                key: None,
                value: None,
                define: false,
                expr: self.parse_expr()?,
            });
        }

        let lhs = self.parse_expr_list()?;
        let kind = match self.current_kind() {
            SyntaxKind::COLON_EQ | SyntaxKind::EQ => {
                let define = self.bump().kind == SyntaxKind::COLON_EQ;
                if range_ok && self.eat(SyntaxKind::RANGE_KW) {
                    let expr = self.parse_expr()?;
                    let mut targets = lhs.into_iter();
                    return Ok(Simple::Range {
                        key: targets.next(),
                        value: targets.next(),
                        define,
                        expr,
                    });
                }
                let rhs = self.parse_expr_list()?;
                let op = if define {
                    AssignOp::Define
                } else {
                    AssignOp::Assign
                };
                StmtKind::Assign(AssignStmt { lhs, op, rhs })
            }
            kind if compound_op(kind).is_some() => {
                let op = compound_op(self.bump().kind).map_or(AssignOp::Assign, AssignOp::Compound);
                let rhs = vec![self.parse_expr()?];
                StmtKind::Assign(AssignStmt { lhs, op, rhs })
            }
            SyntaxKind::PLUS_PLUS | SyntaxKind::MINUS_MINUS => {
                let inc = self.bump().kind == SyntaxKind::PLUS_PLUS;
                StmtKind::IncDec(IncDecStmt {
                    target: self.single(lhs)?,
                    inc,
                })
            }
            SyntaxKind::ARROW => {
                self.bump();
                let channel = self.single(lhs)?;
                StmtKind::Send(SendStmt {
                    channel,
                    value: self.parse_expr()?,
                })
            }
            _ => StmtKind::Expr(self.single(lhs)?),
        };
        Ok(Simple::Stmt(Stmt {
            kind,
            span: self.span_from(start),
        }))
    }

    fn single(&self, mut exprs: Vec<Expr>) -> PResult<Expr> {
        match exprs.len() {
            1 => exprs.pop().ok_or_else(|| self.unexpected("expression")),
            _ => Err(self.unexpected("':=', '=' or assignment operator")),
        }
    }

    fn parse_if(&mut self) -> PResult<IfStmt> {
        self.expect(SyntaxKind::IF_KW)?;
        let old_level = self.expr_level;
        self.expr_level = -1;
        let header = self.parse_if_header();
        self.expr_level = old_level;
        let (init, cond) = header?;

        let then = self.parse_block()?;
        let els = if self.eat(SyntaxKind::ELSE_KW) {
            let start = self.start();
            let kind = if self.at(SyntaxKind::IF_KW) {
                StmtKind::If(self.parse_if()?)
            } else {
                StmtKind::Block(self.parse_block()?)
            };
            Some(Box::new(Stmt {
                kind,
                span: self.span_from(start),
            }))
        } else {
            None
        };
        Ok(IfStmt {
            init,
            cond,
            then,
            els,
        })
    }

    fn parse_if_header(&mut self) -> PResult<(Option<Box<Stmt>>, Expr)> {
        if self.eat(SyntaxKind::SEMICOLON) {
            return Ok((None, self.parse_expr()?));
        }
        let first = self.parse_simple_stmt()?;
        if self.eat(SyntaxKind::SEMICOLON) {
            let cond = self.parse_expr()?;
            return Ok((Some(Box::new(first)), cond));
        }
        match first.kind {
            StmtKind::Expr(cond) => Ok((None, cond)),
            _ => Err(self.unexpected("if condition")),
        }
    }

    fn parse_for(&mut self) -> PResult<StmtKind> {
        self.expect(SyntaxKind::FOR_KW)?;
        let header = if self.at(SyntaxKind::L_BRACE) {
            ForHeader::Clauses {
                init: None,
                cond: None,
                post: None,
            }
        } else {
            let old_level = self.expr_level;
            self.expr_level = -1;
            let header = self.parse_for_header();
            self.expr_level = old_level;
            header?
        };

        let body = self.parse_block()?;
        Ok(match header {
            ForHeader::Clauses { init, cond, post } => StmtKind::For(ForStmt {
                init,
                cond,
                post,
                body,
            }),
            ForHeader::Range {
                key,
                value,
                define,
                expr,
            } => StmtKind::Range(RangeStmt {
                key,
                value,
                define,
                expr,
                body,
            }),
        })
    }

    fn parse_for_header(&mut self) -> PResult<ForHeader> {
        let init = if self.at(SyntaxKind::SEMICOLON) {
            None
        } else {
            match self.parse_simple(true)? {
                Simple::Range {
                    key,
                    value,
                    define,
                    expr,
                } => {
                    return Ok(ForHeader::Range {
                        key,
                        value,
                        define,
                        expr,
                    });
                }
                Simple::Stmt(stmt) => Some(stmt),
            }
        };

        if self.eat(SyntaxKind::SEMICOLON) {
            let cond = if self.at(SyntaxKind::SEMICOLON) {
                None
            } else {
                Some(self.parse_expr()?)
            };
            self.expect(SyntaxKind::SEMICOLON)?;
            let post = if self.at(SyntaxKind::L_BRACE) {
                None
            } else {
                Some(Box::new(self.parse_simple_stmt()?))
            };
            return Ok(ForHeader::Clauses {
                init: init.map(Box::new),
                cond,
                post,
            });
        }

        match init {
            Some(Stmt {
                kind: StmtKind::Expr(cond),
                ..
            }) => Ok(ForHeader::Clauses {
                init: None,
                cond: Some(cond),
                post: None,
            }),
            _ => Err(self.unexpected("for loop condition")),
        }
    }

    fn parse_switch(&mut self) -> PResult<StmtKind> {
        self.expect(SyntaxKind::SWITCH_KW)?;
        let old_level = self.expr_level;
        self.expr_level = -1;
        let header = self.parse_switch_header();
        self.expr_level = old_level;
        let (init, tag) = header?;

        self.expect(SyntaxKind::L_BRACE)?;
        let kind = match tag.map(type_switch_guard) {
            Some(Ok((binding, subject))) => StmtKind::TypeSwitch(TypeSwitchStmt {
                init,
                binding,
                subject,
                clauses: self.parse_type_case_clauses()?,
            }),
            Some(Err(Stmt {
                kind: StmtKind::Expr(tag),
                ..
            })) => StmtKind::Switch(SwitchStmt {
                init,
                tag: Some(tag),
                clauses: self.parse_case_clauses()?,
            }),
            Some(Err(_)) => return Err(self.unexpected("switch expression")),
            None => StmtKind::Switch(SwitchStmt {
                init,
                tag: None,
                clauses: self.parse_case_clauses()?,
            }),
        };
        self.expect(SyntaxKind::R_BRACE)?;
        Ok(kind)
    }

    fn parse_switch_header(&mut self) -> PResult<(Option<Box<Stmt>>, Option<Stmt>)> {
        if self.at(SyntaxKind::L_BRACE) {
            return Ok((None, None));
        }
        let first = if self.at(SyntaxKind::SEMICOLON) {
            None
        } else {
            Some(self.parse_simple_stmt()?)
        };
        if self.eat(SyntaxKind::SEMICOLON) {
            let tag = if self.at(SyntaxKind::L_BRACE) {
                None
            } else {
                Some(self.parse_simple_stmt()?)
            };
            return Ok((first.map(Box::new), tag));
        }
        Ok((None, first))
    }

    fn parse_case_clauses(&mut self) -> PResult<Vec<CaseClause>> {
        let mut clauses = Vec::new();
        while self.at_any(&[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW]) {
            let start = self.start();
            let is_default = self.bump().kind == SyntaxKind::DEFAULT_KW;
            let values = if is_default {
                Vec::new()
            } else {
                self.parse_expr_list()?
            };
            self.expect(SyntaxKind::COLON)?;
            let body = self.parse_stmt_list();
            clauses.push(CaseClause {
                values,
                is_default,
                body,
                span: self.span_from(start),
            });
        }
        Ok(clauses)
    }

    fn parse_type_case_clauses(&mut self) -> PResult<Vec<TypeCaseClause>> {
        let mut clauses = Vec::new();
        while self.at_any(&[SyntaxKind::CASE_KW, SyntaxKind::DEFAULT_KW]) {
            let start = self.start();
            let is_default = self.bump().kind == SyntaxKind::DEFAULT_KW;
            let mut types = Vec::new();
            if !is_default {
                types.push(self.parse_type()?);
                while self.eat(SyntaxKind::COMMA) {
                    types.push(self.parse_type()?);
                }
            }
            self.expect(SyntaxKind::COLON)?;
            let body = self.parse_stmt_list();
            clauses.push(TypeCaseClause {
                types,
                is_default,
                body,
                span: self.span_from(start),
            });
        }
        Ok(clauses)
    }
}
