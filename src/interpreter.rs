/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * Interpreter Entry & Runtime Bootstrap
 * -------------------------------------
 * This module is the primary runtime entrypoint for the Mython interpreter.
 * It is responsible for:
 *
 *  - Creating the global execution environment
 *  - Driving the main statement execution loop
 *  - Handling top-level returns (always an error — see `MythonError::UnboundReturn`)
 *
 * All actual evaluation logic is delegated to the following submodules:
 *
 *  - statements.rs -> statement execution (`exec_stmt`)
 *  - expressions.rs -> expression evaluation (`eval_expr`)
 *  - classes.rs     -> class/instance construction and method dispatch
 *  - comparison.rs  -> truthiness and the `==`/`<` kernel
 *  - display.rs     -> `print`/`str(...)` formatting
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

pub mod classes;
pub mod comparison;
pub mod display;
pub mod expressions;
pub mod statements;

use std::io::Write;

use log::debug;

use crate::ast::Stmt;
use crate::environment::Environment;
use crate::error::MythonError;
use statements::ExecSignal;

/// Drives a Mython program against a fresh top-level environment, writing
/// `print` output to an injected sink.
///
/// The sink is injected rather than hard-coded to stdout so the evaluator
/// can be embedded (tests capture output into a `Vec<u8>`; the CLI wires it
/// to real stdout).
pub struct Interpreter<W: Write> {
    pub env: Environment,
    pub output: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W) -> Self {
        Self {
            env: Environment::new(),
            output,
        }
    }

    /// Executes a full program. A `return` that unwinds all the way to the
    /// top level (i.e. one not inside any method call) is a `MythonError`,
    /// not a silent program exit — `spec.md`'s return unwinding only ever
    /// terminates at the nearest enclosing method call frame, and there is
    /// none at the top level.
    pub fn run(&mut self, program: Vec<Stmt>) -> Result<(), MythonError> {
        debug!("running program with {} top-level statement(s)", program.len());
        for stmt in program {
            match statements::exec_stmt(&stmt, &mut self.env, &mut self.output)? {
                ExecSignal::None => {}
                ExecSignal::Return(_) => {
                    return Err(MythonError::unbound_return(stmt_span(&stmt)));
                }
            }
        }
        Ok(())
    }
}

fn stmt_span(stmt: &Stmt) -> crate::span::Span {
    match stmt {
        Stmt::Assignment { span, .. }
        | Stmt::FieldAssignment { span, .. }
        | Stmt::Print { span, .. }
        | Stmt::Return { span, .. }
        | Stmt::IfElse { span, .. } => *span,
        Stmt::ClassDefinition(decl) => decl.span,
        Stmt::Expression(expr) => expr.span(),
    }
}

/// Convenience entry point: lexes, parses, and runs Mython `source` against
/// a fresh interpreter writing to `output`.
pub fn run_source<W: Write>(source: &str, output: W) -> Result<(), MythonError> {
    let tokens = crate::lexer::Lexer::new(source).scan_tokens()?;
    let program = crate::parser::parse(tokens)?;
    let mut interpreter = Interpreter::new(output);
    interpreter.run(program)
}
