/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the PAWX programming language project.
 *
 * PAWX is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::class::ClassDecl;
use crate::ast::expr::Expr;
use crate::ast::param::MethodDecl;
use crate::ast::stmt::{IfBranch, Stmt};
use crate::error::MythonError;
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl Parser {
    pub fn parse_stmt(&mut self) -> Result<Stmt, MythonError> {
        match self.peek().kind.clone() {
            TokenKind::If => self.parse_if(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Class => self.parse_class().map(Stmt::ClassDefinition),
            _ => self.parse_assignment_or_expr_stmt(),
        }
    }

    fn parse_assignment_or_expr_stmt(&mut self) -> Result<Stmt, MythonError> {
        let span = self.current_span();
        let expr = self.parse_expr()?;

        if self.match_kind(&TokenKind::Equal) {
            let value = self.parse_expr()?;
            self.expect_newline()?;
            return match expr {
                Expr::Variable(path, _) if path.len() == 1 => Ok(Stmt::Assignment {
                    name: path.into_iter().next().unwrap(),
                    value,
                    span,
                }),
                Expr::Variable(path, _) => Ok(Stmt::FieldAssignment { path, value, span }),
                _ => Err(MythonError::syntax(
                    "left-hand side of an assignment must be a name or dotted field path",
                    span,
                )),
            };
        }

        self.expect_newline()?;
        Ok(Stmt::Expression(expr))
    }

    fn parse_print(&mut self) -> Result<Stmt, MythonError> {
        let span = self.current_span();
        self.advance(); // `print`
        let mut args = vec![self.parse_expr()?];
        while self.match_kind(&TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        self.expect_newline()?;
        Ok(Stmt::Print { args, span })
    }

    fn parse_return(&mut self) -> Result<Stmt, MythonError> {
        let span = self.current_span();
        self.advance(); // `return`
        let value = if self.check(&TokenKind::Newline) {
            None
        } else {
            Some(self.parse_expr()?)
        };
        self.expect_newline()?;
        Ok(Stmt::Return { value, span })
    }

    fn parse_if(&mut self) -> Result<Stmt, MythonError> {
        let span = self.current_span();
        self.advance(); // `if`
        let mut branches = vec![self.parse_if_branch()?];

        while self.check(&TokenKind::Elif) {
            self.advance();
            branches.push(self.parse_if_branch()?);
        }

        let else_branch = if self.match_kind(&TokenKind::Else) {
            self.expect(TokenKind::Colon, "':'")?;
            self.expect_newline()?;
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::IfElse {
            branches,
            else_branch,
            span,
        })
    }

    fn parse_if_branch(&mut self) -> Result<IfBranch, MythonError> {
        let condition = self.parse_expr()?;
        self.expect(TokenKind::Colon, "':'")?;
        self.expect_newline()?;
        let body = self.parse_block()?;
        Ok(IfBranch { condition, body })
    }

    fn parse_class(&mut self) -> Result<ClassDecl, MythonError> {
        let span = self.current_span();
        self.advance(); // `class`
        let name = self.consume_identifier_name()?;

        let parent = if self.match_kind(&TokenKind::LParen) {
            let parent_name = self.consume_identifier_name()?;
            self.expect(TokenKind::RParen, "')'")?;
            Some(parent_name)
        } else {
            None
        };

        self.expect(TokenKind::Colon, "':'")?;
        self.expect_newline()?;
        self.expect(TokenKind::Indent, "a class body")?;

        let mut methods = Vec::new();
        self.skip_newlines();
        while !self.check(&TokenKind::Dedent) && !self.is_at_end() {
            methods.push(self.parse_method()?);
            self.skip_newlines();
        }
        self.expect(TokenKind::Dedent, "end of class body")?;

        Ok(ClassDecl {
            name,
            parent,
            methods,
            span,
        })
    }

    fn parse_method(&mut self) -> Result<MethodDecl, MythonError> {
        let span = self.current_span();
        self.expect(TokenKind::Def, "a method definition")?;
        let name = self.consume_identifier_name()?;
        self.expect(TokenKind::LParen, "'('")?;

        let mut params = Vec::new();
        let mut first = true;
        if !self.check(&TokenKind::RParen) {
            loop {
                let pname = self.consume_identifier_name()?;
                if !(first && pname == "self") {
                    params.push(pname);
                }
                first = false;
                if !self.match_kind(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        self.expect(TokenKind::Colon, "':'")?;
        self.expect_newline()?;
        let body = self.parse_block()?;

        Ok(MethodDecl {
            name,
            params,
            body,
            span,
        })
    }
}
