/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * File:     statements.rs
 * Purpose:  Executes every `Stmt` node against an `Environment`.
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

use std::io::Write;

use crate::ast::Stmt;
use crate::environment::Environment;
use crate::error::MythonError;
use crate::value::Value;

use super::{classes, comparison, display, expressions};

/// What a statement did, beyond mutating the environment and writing output.
///
/// Mython has no exceptions, loops, or `break`/`continue` — `return` is the
/// only non-local control flow, so this is simpler than the teacher's
/// three-way `None | Return | Throw` signal.
#[derive(Debug, Clone)]
pub enum ExecSignal {
    None,
    Return(Value),
}

/// Runs a statement list, stopping and propagating the instant any statement
/// produces `ExecSignal::Return` — a `return` deeper in an `if` branch must
/// short-circuit every enclosing block up to the method call boundary.
pub fn exec_block<W: Write>(
    stmts: &[Stmt],
    env: &mut Environment,
    output: &mut W,
) -> Result<ExecSignal, MythonError> {
    for stmt in stmts {
        match exec_stmt(stmt, env, output)? {
            ExecSignal::None => {}
            signal @ ExecSignal::Return(_) => return Ok(signal),
        }
    }
    Ok(ExecSignal::None)
}

pub fn exec_stmt<W: Write>(
    stmt: &Stmt,
    env: &mut Environment,
    output: &mut W,
) -> Result<ExecSignal, MythonError> {
    match stmt {
        Stmt::Expression(expr) => {
            expressions::eval_expr(expr, env, output)?;
            Ok(ExecSignal::None)
        }

        Stmt::Assignment { name, value, .. } => {
            let v = expressions::eval_expr(value, env, output)?;
            env.define(name.clone(), v);
            Ok(ExecSignal::None)
        }

        Stmt::FieldAssignment { path, value, span } => {
            let v = expressions::eval_expr(value, env, output)?;
            assign_field(path, v, env, *span)?;
            Ok(ExecSignal::None)
        }

        Stmt::Print { args, span } => {
            let mut parts = Vec::with_capacity(args.len());
            for arg in args {
                let value = expressions::eval_expr(arg, env, output)?;
                parts.push(display::print_format_value(&value, *span, output)?);
            }
            writeln!(output, "{}", parts.join(" "))
                .map_err(|e| MythonError::type_error(format!("write failed: {e}"), *span))?;
            Ok(ExecSignal::None)
        }

        Stmt::Return { value, .. } => {
            let result = match value {
                Some(expr) => expressions::eval_expr(expr, env, output)?,
                Option::None => Value::None,
            };
            Ok(ExecSignal::Return(result))
        }

        Stmt::IfElse { branches, else_branch, .. } => {
            for branch in branches {
                let cond = expressions::eval_expr(&branch.condition, env, output)?;
                if comparison::is_truthy(&cond) {
                    return exec_block(&branch.body, env, output);
                }
            }
            match else_branch {
                Some(body) => exec_block(body, env, output),
                Option::None => Ok(ExecSignal::None),
            }
        }

        Stmt::ClassDefinition(decl) => {
            let class = classes::build_class(decl, env)?;
            env.define(decl.name.clone(), Value::Class(class));
            Ok(ExecSignal::None)
        }
    }
}

/// `a.b.c = expr` — every path element up to the last must resolve to an
/// instance; the final segment is the field that gets written on it.
fn assign_field(
    path: &[String],
    value: Value,
    env: &Environment,
    span: crate::span::Span,
) -> Result<(), MythonError> {
    let (last, prefix) = path.split_last().expect("FieldAssignment path has >= 2 segments");
    let target = classes::resolve_path(prefix, env, span)?;
    match target {
        Value::Instance(instance) => {
            instance.set_field(last.clone(), value);
            Ok(())
        }
        other => Err(MythonError::attribute(other.type_name(), last.clone(), span)),
    }
}
