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

use log::trace;

use crate::error::MythonError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;

/// Converts Mython source text into a token stream, synthesizing
/// `Indent`/`Dedent`/`Newline` tokens from leading whitespace so the parser
/// never has to look at raw indentation.
///
/// Indentation is tracked per logical (non-blank, non-comment-only) line.
/// Tabs in leading whitespace are rejected to keep the indent arithmetic
/// unambiguous.
pub struct Lexer<'a> {
    source: &'a str,
    indent_stack: Vec<usize>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            indent_stack: vec![0],
            tokens: Vec::new(),
        }
    }

    pub fn scan_tokens(mut self) -> Result<Vec<Token>, MythonError> {
        trace!("lexing {} line(s)", self.source.lines().count());
        for (idx, raw_line) in self.source.lines().enumerate() {
            let line_no = idx + 1;
            self.scan_line(line_no, raw_line)?;
        }

        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.tokens.push(Token::new(TokenKind::Dedent, "", Span::new(0, 0)));
        }

        let eof_line = self.source.lines().count() + 1;
        self.tokens.push(Token::new(TokenKind::Eof, "", Span::new(eof_line, 0)));

        trace!("produced {} token(s)", self.tokens.len());
        Ok(self.tokens)
    }

    fn scan_line(&mut self, line_no: usize, raw_line: &str) -> Result<(), MythonError> {
        let chars: Vec<char> = raw_line.chars().collect();
        let mut pos = 0usize;
        let mut indent = 0usize;

        while pos < chars.len() {
            match chars[pos] {
                ' ' => {
                    indent += 1;
                    pos += 1;
                }
                '\t' => {
                    return Err(MythonError::syntax(
                        "tabs are not allowed in indentation",
                        Span::new(line_no, pos),
                    ));
                }
                _ => break,
            }
        }

        let rest_is_blank = pos >= chars.len();
        let rest_is_comment = !rest_is_blank && chars[pos] == '#';

        if rest_is_blank || rest_is_comment {
            return Ok(());
        }

        let current = *self.indent_stack.last().unwrap();
        if indent > current {
            self.indent_stack.push(indent);
            self.tokens.push(Token::new(TokenKind::Indent, "", Span::new(line_no, 0)));
        } else if indent < current {
            while *self.indent_stack.last().unwrap() > indent {
                self.indent_stack.pop();
                self.tokens.push(Token::new(TokenKind::Dedent, "", Span::new(line_no, 0)));
            }
            if *self.indent_stack.last().unwrap() != indent {
                return Err(MythonError::syntax(
                    "inconsistent indentation",
                    Span::new(line_no, pos),
                ));
            }
        }

        self.scan_line_body(line_no, &chars, pos)?;
        self.tokens.push(Token::new(TokenKind::Newline, "", Span::new(line_no, chars.len())));
        Ok(())
    }

    fn scan_line_body(
        &mut self,
        line_no: usize,
        chars: &[char],
        mut pos: usize,
    ) -> Result<(), MythonError> {
        while pos < chars.len() {
            let ch = chars[pos];
            let col = pos;

            match ch {
                ' ' | '\r' => {
                    pos += 1;
                }
                '#' => break,
                '0'..='9' => {
                    let start = pos;
                    while pos < chars.len() && chars[pos].is_ascii_digit() {
                        pos += 1;
                    }
                    let text: String = chars[start..pos].iter().collect();
                    let n: i64 = text.parse().map_err(|_| {
                        MythonError::syntax(
                            format!("invalid integer literal '{}'", text),
                            Span::new(line_no, col),
                        )
                    })?;
                    self.tokens.push(Token::new(TokenKind::Number(n), text, Span::new(line_no, col)));
                }
                '"' | '\'' => {
                    let quote = ch;
                    pos += 1;
                    let start = pos;
                    while pos < chars.len() && chars[pos] != quote {
                        pos += 1;
                    }
                    if pos >= chars.len() {
                        return Err(MythonError::syntax(
                            "unterminated string literal",
                            Span::new(line_no, col),
                        ));
                    }
                    let text: String = chars[start..pos].iter().collect();
                    pos += 1;
                    self.tokens
                        .push(Token::new(TokenKind::String(text.clone()), text, Span::new(line_no, col)));
                }
                c if c.is_alphabetic() || c == '_' => {
                    let start = pos;
                    while pos < chars.len() && (chars[pos].is_alphanumeric() || chars[pos] == '_') {
                        pos += 1;
                    }
                    let text: String = chars[start..pos].iter().collect();
                    let kind = keyword_kind(&text).unwrap_or_else(|| TokenKind::Identifier(text.clone()));
                    self.tokens.push(Token::new(kind, text, Span::new(line_no, col)));
                }
                '=' => {
                    if pos + 1 < chars.len() && chars[pos + 1] == '=' {
                        self.tokens.push(Token::new(TokenKind::EqualEqual, "==", Span::new(line_no, col)));
                        pos += 2;
                    } else {
                        self.tokens.push(Token::new(TokenKind::Equal, "=", Span::new(line_no, col)));
                        pos += 1;
                    }
                }
                '!' => {
                    if pos + 1 < chars.len() && chars[pos + 1] == '=' {
                        self.tokens.push(Token::new(TokenKind::BangEqual, "!=", Span::new(line_no, col)));
                        pos += 2;
                    } else {
                        return Err(MythonError::syntax(
                            "unexpected character '!'",
                            Span::new(line_no, col),
                        ));
                    }
                }
                '<' => {
                    if pos + 1 < chars.len() && chars[pos + 1] == '=' {
                        self.tokens.push(Token::new(TokenKind::LessEqual, "<=", Span::new(line_no, col)));
                        pos += 2;
                    } else {
                        self.tokens.push(Token::new(TokenKind::Less, "<", Span::new(line_no, col)));
                        pos += 1;
                    }
                }
                '>' => {
                    if pos + 1 < chars.len() && chars[pos + 1] == '=' {
                        self.tokens.push(Token::new(TokenKind::GreaterEqual, ">=", Span::new(line_no, col)));
                        pos += 2;
                    } else {
                        self.tokens.push(Token::new(TokenKind::Greater, ">", Span::new(line_no, col)));
                        pos += 1;
                    }
                }
                '+' => {
                    self.tokens.push(Token::new(TokenKind::Plus, "+", Span::new(line_no, col)));
                    pos += 1;
                }
                '-' => {
                    self.tokens.push(Token::new(TokenKind::Minus, "-", Span::new(line_no, col)));
                    pos += 1;
                }
                '*' => {
                    self.tokens.push(Token::new(TokenKind::Star, "*", Span::new(line_no, col)));
                    pos += 1;
                }
                '/' => {
                    self.tokens.push(Token::new(TokenKind::Slash, "/", Span::new(line_no, col)));
                    pos += 1;
                }
                '.' => {
                    self.tokens.push(Token::new(TokenKind::Dot, ".", Span::new(line_no, col)));
                    pos += 1;
                }
                ',' => {
                    self.tokens.push(Token::new(TokenKind::Comma, ",", Span::new(line_no, col)));
                    pos += 1;
                }
                ':' => {
                    self.tokens.push(Token::new(TokenKind::Colon, ":", Span::new(line_no, col)));
                    pos += 1;
                }
                '(' => {
                    self.tokens.push(Token::new(TokenKind::LParen, "(", Span::new(line_no, col)));
                    pos += 1;
                }
                ')' => {
                    self.tokens.push(Token::new(TokenKind::RParen, ")", Span::new(line_no, col)));
                    pos += 1;
                }
                other => {
                    return Err(MythonError::syntax(
                        format!("unexpected character '{}'", other),
                        Span::new(line_no, col),
                    ));
                }
            }
        }

        Ok(())
    }
}
