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

use crate::span::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mult,
    Div,
    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

/// A literal that survived lexing as-is; `None`/`Bool`/numbers/strings
/// never need re-evaluation once parsed.
#[derive(Debug, Clone)]
pub enum Literal {
    None,
    Number(i64),
    String(String),
    Bool(bool),
}

#[derive(Debug, Clone)]
pub enum Expr {
    Literal(Literal, Span),

    /// A dotted identifier chain, e.g. `x` or `self.count`. Resolved by
    /// sequentially walking from the environment through instance field
    /// environments — see `spec.md`'s VariableValue algorithm.
    Variable(Vec<String>, Span),

    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
        span: Span,
    },

    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },

    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
        span: Span,
    },

    /// `str(expr)`.
    Stringify(Box<Expr>, Span),

    /// `expr.field` read (not a call).
    FieldAccess {
        object: Box<Expr>,
        field: String,
        span: Span,
    },

    /// `expr.method(args)`.
    MethodCall {
        object: Box<Expr>,
        method: String,
        args: Vec<Expr>,
        span: Span,
    },

    /// A bare call `callee(args)`. When `callee` resolves by name to a
    /// `Class` value this evaluates as construction (`NewInstance`);
    /// otherwise it calls a bound method value the same way a method
    /// lookup would. There is no separate `new` keyword in Mython.
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
        span: Span,
    },
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(_, s) => *s,
            Expr::Variable(_, s) => *s,
            Expr::Unary { span, .. } => *span,
            Expr::Binary { span, .. } => *span,
            Expr::Logical { span, .. } => *span,
            Expr::Stringify(_, s) => *s,
            Expr::FieldAccess { span, .. } => *span,
            Expr::MethodCall { span, .. } => *span,
            Expr::Call { span, .. } => *span,
        }
    }
}
