/*
 * ============================================================================
 * MYTHON
 * ============================================================================
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
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ============================================================================
 */

use crate::ast::class::ClassDecl;
use crate::ast::expr::Expr;
use crate::span::Span;

#[derive(Debug, Clone)]
pub struct IfBranch {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// All executable Mython statements.
#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(Expr),

    Assignment {
        name: String,
        value: Expr,
        span: Span,
    },

    /// `a.b.c = expr` — dotted path of length >= 2; every prefix element
    /// must resolve to an Instance, and the final segment is the field
    /// that gets written.
    FieldAssignment {
        path: Vec<String>,
        value: Expr,
        span: Span,
    },

    Print {
        args: Vec<Expr>,
        span: Span,
    },

    Return {
        value: Option<Expr>,
        span: Span,
    },

    /// `if`/`elif`*/`else`, modeled as an ordered list of condition-guarded
    /// branches plus an optional trailing unconditional branch.
    IfElse {
        branches: Vec<IfBranch>,
        else_branch: Option<Vec<Stmt>>,
        span: Span,
    },

    ClassDefinition(ClassDecl),
}
