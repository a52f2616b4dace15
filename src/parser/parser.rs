/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform a token stream into a full Abstract
 * Syntax Tree (AST) statement list for Mython.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `statements.rs`   → statement-level grammar (`if`, `class`, `def`, ...)
 * - `expressions.rs`  → expression grammar & operator precedence
 *
 * This file serves as the root coordinator plus the shared token-stream
 * helpers (peek/advance/expect) every other module builds on.
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Stmt;
use crate::error::MythonError;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// The core Mython recursive-descent parser.
///
/// Holds the full token stream plus a cursor into it. Grammar rules live in
/// extension `impl Parser` blocks in `statements.rs` and `expressions.rs`.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

/// Parses a complete token stream into a top-level statement list.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, MythonError> {
    let mut parser = Parser { tokens, current: 0 };
    parser.parse_program()
}

impl Parser {
    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    pub fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    pub fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    pub fn advance(&mut self) -> Token {
        let t = self.tokens[self.current].clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        t
    }

    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    pub fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, MythonError> {
        if self.check(&kind) {
            Ok(self.advance())
        } else {
            Err(self.error(what))
        }
    }

    pub fn expect_newline(&mut self) -> Result<(), MythonError> {
        self.expect(TokenKind::Newline, "end of line").map(|_| ())
    }

    pub fn consume_identifier_name(&mut self) -> Result<String, MythonError> {
        match self.peek().kind.clone() {
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            TokenKind::SelfKw => {
                self.advance();
                Ok("self".to_string())
            }
            _ => Err(self.error("an identifier")),
        }
    }

    pub fn error(&self, what: &str) -> MythonError {
        let tok = self.peek();
        MythonError::syntax(
            format!("expected {} but found '{}'", what, tok),
            tok.span,
        )
    }

    pub fn current_span(&self) -> Span {
        self.peek().span
    }

    /// Skips any blank `Newline` tokens left between logical statements.
    pub fn skip_newlines(&mut self) {
        while matches!(self.peek().kind, TokenKind::Newline) {
            self.advance();
        }
    }

    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, MythonError> {
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines();
        }
        Ok(stmts)
    }

    /// `INDENT block DEDENT`, used by every `:`-headed construct.
    pub fn parse_block(&mut self) -> Result<Vec<Stmt>, MythonError> {
        self.expect(TokenKind::Indent, "an indented block")?;
        let mut stmts = Vec::new();
        self.skip_newlines();
        while !self.check(&TokenKind::Dedent) && !self.is_at_end() {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines();
        }
        self.expect(TokenKind::Dedent, "end of indented block")?;
        Ok(stmts)
    }
}
