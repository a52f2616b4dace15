/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the Mython expression grammar using recursive
 *           descent, precedence-climbing style.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * GitHub:   https://github.com/samwilcox/pawx
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
 * This file is part of the PAWX programming language project.
 *
 * PAWX is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Parsing order follows strict precedence, loosest-binding first:
 *
 *   or -> and -> not -> comparison -> term -> factor -> unary -> primary
 *
 * `primary` also absorbs dotted-name chains, field access, method calls,
 * and bare calls (which desugar to construction at evaluation time when
 * the callee names a class) — Mython has no separate "call" precedence
 * level because postfix `.`/`(...)` always bind tighter than any operator.
 *
 * ==========================================================================
 */

use crate::ast::expr::{BinaryOp, Expr, Literal, LogicalOp, UnaryOp};
use crate::error::MythonError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    pub fn parse_expr(&mut self) -> Result<Expr, MythonError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr, MythonError> {
        let mut left = self.parse_and()?;
        while self.check(&TokenKind::Or) {
            let span = self.current_span();
            self.advance();
            let right = self.parse_and()?;
            left = Expr::Logical {
                op: LogicalOp::Or,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, MythonError> {
        let mut left = self.parse_not()?;
        while self.check(&TokenKind::And) {
            let span = self.current_span();
            self.advance();
            let right = self.parse_not()?;
            left = Expr::Logical {
                op: LogicalOp::And,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_not(&mut self) -> Result<Expr, MythonError> {
        if self.check(&TokenKind::Not) {
            let span = self.current_span();
            self.advance();
            let expr = self.parse_not()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Not,
                expr: Box::new(expr),
                span,
            });
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, MythonError> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::EqualEqual => BinaryOp::Eq,
                TokenKind::BangEqual => BinaryOp::NotEq,
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEqual => BinaryOp::LessEq,
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEqual => BinaryOp::GreaterEq,
                _ => break,
            };
            let span = self.current_span();
            self.advance();
            let right = self.parse_term()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr, MythonError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            let span = self.current_span();
            self.advance();
            let right = self.parse_factor()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr, MythonError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mult,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            let span = self.current_span();
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    /// A leading `-` here is unary negation, not the binary `Sub` that
    /// `parse_term` handles — this is the level that lets `-5`, `f(-5)`, and
    /// `x = -1` parse at all, since the lexer never emits a signed number
    /// literal directly.
    fn parse_unary(&mut self) -> Result<Expr, MythonError> {
        if self.check(&TokenKind::Minus) {
            let span = self.current_span();
            self.advance();
            let expr = self.parse_unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(expr),
                span,
            });
        }
        self.parse_primary()
    }

    /// Literals, grouping, `str(...)`, and dotted-name/field/call/method
    /// chains. A chain starts as a plain dotted name and only "falls off"
    /// into a general `FieldAccess`/`MethodCall`/`Call` expression once a
    /// method call or bare call appears partway through it.
    fn parse_primary(&mut self) -> Result<Expr, MythonError> {
        let span = self.current_span();

        match self.peek().kind.clone() {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::Literal(Literal::Number(n), span))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(Expr::Literal(Literal::String(s), span))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(true), span))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Literal(Literal::Bool(false), span))
            }
            TokenKind::None => {
                self.advance();
                Ok(Expr::Literal(Literal::None, span))
            }
            TokenKind::Str => {
                self.advance();
                self.expect(TokenKind::LParen, "'('")?;
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(Expr::Stringify(Box::new(inner), span))
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::Identifier(_) | TokenKind::SelfKw => self.parse_chain(span),
            _ => Err(self.error("an expression")),
        }
    }

    /// Parses a dotted-name / field-access / method-call / call chain
    /// starting at the current identifier token.
    fn parse_chain(&mut self, span: crate::span::Span) -> Result<Expr, MythonError> {
        let first = self.consume_identifier_name()?;
        let mut path = vec![first];
        let mut expr: Option<Expr> = None;

        loop {
            if self.match_kind(&TokenKind::Dot) {
                let field = self.consume_identifier_name()?;
                if self.match_kind(&TokenKind::LParen) {
                    let args = self.parse_args()?;
                    let object = expr.take().unwrap_or_else(|| Expr::Variable(path.clone(), span));
                    expr = Some(Expr::MethodCall {
                        object: Box::new(object),
                        method: field,
                        args,
                        span,
                    });
                    path.clear();
                } else if let Some(current) = expr.take() {
                    expr = Some(Expr::FieldAccess {
                        object: Box::new(current),
                        field,
                        span,
                    });
                } else {
                    path.push(field);
                }
            } else if self.match_kind(&TokenKind::LParen) {
                let args = self.parse_args()?;
                let callee = expr.take().unwrap_or_else(|| Expr::Variable(path.clone(), span));
                expr = Some(Expr::Call {
                    callee: Box::new(callee),
                    args,
                    span,
                });
                path.clear();
            } else {
                break;
            }
        }

        Ok(expr.unwrap_or(Expr::Variable(path, span)))
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, MythonError> {
        let mut args = Vec::new();
        if !self.check(&TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while self.match_kind(&TokenKind::Comma) {
                args.push(self.parse_expr()?);
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        Ok(args)
    }
}
