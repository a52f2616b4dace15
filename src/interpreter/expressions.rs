/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Evaluates every `Expr` node to a runtime `Value`.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * GitHub:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the PAWX programming language project.
 *
 * PAWX is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::ast::expr::{BinaryOp, Literal, LogicalOp, UnaryOp};
use crate::ast::Expr;
use crate::environment::Environment;
use crate::error::MythonError;
use crate::span::Span;
use crate::value::Value;

use super::{classes, comparison, display};

pub fn eval_expr<W: Write>(
    expr: &Expr,
    env: &mut Environment,
    output: &mut W,
) -> Result<Value, MythonError> {
    match expr {
        Expr::Literal(lit, _) => Ok(literal_value(lit)),

        Expr::Variable(path, span) => classes::resolve_path(path, env, *span),

        Expr::Unary { op, expr, span } => {
            let value = eval_expr(expr, env, output)?;
            match op {
                UnaryOp::Not => Ok(Value::Bool(!comparison::is_truthy(&value))),
                UnaryOp::Neg => match value {
                    Value::Number(n) => Ok(Value::Number(n.wrapping_neg())),
                    other => Err(MythonError::type_error(
                        format!("bad operand type for unary -: '{}'", other.type_name()),
                        *span,
                    )),
                },
            }
        }

        Expr::Binary { op, left, right, span } => {
            let lv = eval_expr(left, env, output)?;
            let rv = eval_expr(right, env, output)?;
            if *op == BinaryOp::Add {
                eval_add(lv, rv, *span, output)
            } else {
                eval_binary(*op, &lv, &rv, *span)
            }
        }

        Expr::Logical { op, left, right, .. } => {
            let lv = eval_expr(left, env, output)?;
            match op {
                LogicalOp::And => {
                    if comparison::is_truthy(&lv) {
                        let rv = eval_expr(right, env, output)?;
                        Ok(Value::Bool(comparison::is_truthy(&rv)))
                    } else {
                        Ok(Value::Bool(false))
                    }
                }
                LogicalOp::Or => {
                    if comparison::is_truthy(&lv) {
                        Ok(Value::Bool(true))
                    } else {
                        let rv = eval_expr(right, env, output)?;
                        Ok(Value::Bool(comparison::is_truthy(&rv)))
                    }
                }
            }
        }

        Expr::Stringify(inner, span) => {
            let value = eval_expr(inner, env, output)?;
            let text = display::stringify_value(&value, *span, output)?;
            Ok(Value::String(text))
        }

        Expr::FieldAccess { object, field, span } => {
            let object_value = eval_expr(object, env, output)?;
            match object_value {
                Value::Instance(instance) => instance
                    .get_field(field)
                    .ok_or_else(|| MythonError::attribute(instance.class.name.clone(), field.clone(), *span)),
                other => Err(MythonError::attribute(other.type_name(), field.clone(), *span)),
            }
        }

        Expr::MethodCall { object, method, args, span } => {
            let object_value = eval_expr(object, env, output)?;
            let instance = object_value
                .as_instance()
                .ok_or_else(|| MythonError::attribute(object_value.type_name(), method.clone(), *span))?
                .clone();
            let method_def = instance
                .class
                .get_method(method)
                .ok_or_else(|| {
                    MythonError::method_not_found(instance.class.name.clone(), method.clone(), args.len(), *span)
                })?
                .clone();
            let arg_values = eval_args(args, env, output)?;
            classes::call_method(&instance, &method_def, &instance.class.name, arg_values, *span, output)
        }

        Expr::Call { callee, args, span } => {
            let callee_value = eval_expr(callee, env, output)?;
            let arg_values = eval_args(args, env, output)?;
            match callee_value {
                Value::Class(class) => classes::construct_instance(&class, arg_values, *span, output),
                other => Err(MythonError::type_error(
                    format!("'{}' object is not callable", other.type_name()),
                    *span,
                )),
            }
        }
    }
}

fn eval_args<W: Write>(
    args: &[Expr],
    env: &mut Environment,
    output: &mut W,
) -> Result<Vec<Value>, MythonError> {
    args.iter().map(|a| eval_expr(a, env, output)).collect()
}

fn literal_value(lit: &Literal) -> Value {
    match lit {
        Literal::None => Value::None,
        Literal::Number(n) => Value::Number(*n),
        Literal::String(s) => Value::String(s.clone()),
        Literal::Bool(b) => Value::Bool(*b),
    }
}

/// Implements `+`'s full dispatch: Number/Number and String/String are
/// handled directly; anything else falls through to `__add__`, tried on the
/// left operand first and then the right, before failing `TypeError`. This
/// needs the output sink (a `__add__` method can itself `print`), so it lives
/// outside `eval_binary`, which every other operator is content without.
fn eval_add<W: Write>(lv: Value, rv: Value, span: Span, output: &mut W) -> Result<Value, MythonError> {
    match (&lv, &rv) {
        (Value::Number(a), Value::Number(b)) => return Ok(Value::Number(a.wrapping_add(*b))),
        (Value::String(a), Value::String(b)) => return Ok(Value::String(format!("{a}{b}"))),
        _ => {}
    }

    if let Value::Instance(instance) = &lv {
        if let Some(method) = instance.class.get_method("__add__") {
            if method.params.len() == 1 {
                let method = method.clone();
                return classes::call_method(instance, &method, &instance.class.name, vec![rv], span, output);
            }
        }
    }

    if let Value::Instance(instance) = &rv {
        if let Some(method) = instance.class.get_method("__add__") {
            if method.params.len() == 1 {
                let method = method.clone();
                return classes::call_method(instance, &method, &instance.class.name, vec![lv], span, output);
            }
        }
    }

    Err(type_mismatch("+", &lv, &rv, span))
}

fn eval_binary(op: BinaryOp, lv: &Value, rv: &Value, span: Span) -> Result<Value, MythonError> {
    match op {
        BinaryOp::Add => unreachable!("Add is dispatched through eval_add"),
        BinaryOp::Sub => numeric_op(lv, rv, span, "-", |a, b| Ok(a.wrapping_sub(b))),
        BinaryOp::Mult => numeric_op(lv, rv, span, "*", |a, b| Ok(a.wrapping_mul(b))),
        BinaryOp::Div => numeric_op(lv, rv, span, "/", |a, b| {
            a.checked_div(b).ok_or_else(|| MythonError::zero_division(span))
        }),
        BinaryOp::Eq => Ok(Value::Bool(comparison::values_equal(lv, rv))),
        BinaryOp::NotEq => Ok(Value::Bool(!comparison::values_equal(lv, rv))),
        BinaryOp::Less => Ok(Value::Bool(comparison::values_less(lv, rv, span)?)),
        BinaryOp::LessEq => Ok(Value::Bool(
            comparison::values_less(lv, rv, span)? || comparison::values_equal(lv, rv),
        )),
        BinaryOp::Greater => Ok(Value::Bool(comparison::values_less(rv, lv, span)?)),
        BinaryOp::GreaterEq => Ok(Value::Bool(!comparison::values_less(lv, rv, span)?)),
    }
}

fn numeric_op(
    lv: &Value,
    rv: &Value,
    span: Span,
    symbol: &str,
    f: impl FnOnce(i64, i64) -> Result<i64, MythonError>,
) -> Result<Value, MythonError> {
    match (lv, rv) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(f(*a, *b)?)),
        _ => Err(type_mismatch(symbol, lv, rv, span)),
    }
}

fn type_mismatch(symbol: &str, lv: &Value, rv: &Value, span: Span) -> MythonError {
    MythonError::type_error(
        format!(
            "unsupported operand type(s) for {}: '{}' and '{}'",
            symbol,
            lv.type_name(),
            rv.type_name()
        ),
        span,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_wraps_on_overflow_instead_of_panicking() {
        let mut output = Vec::new();
        let result = eval_add(Value::Number(i64::MAX), Value::Number(1), Span::unknown(), &mut output).unwrap();
        assert!(matches!(result, Value::Number(n) if n == i64::MIN));
    }

    #[test]
    fn sub_and_mult_wrap_on_overflow() {
        assert!(matches!(
            eval_binary(BinaryOp::Sub, &Value::Number(i64::MIN), &Value::Number(1), Span::unknown()).unwrap(),
            Value::Number(n) if n == i64::MAX
        ));
        assert!(matches!(
            eval_binary(BinaryOp::Mult, &Value::Number(i64::MAX), &Value::Number(2), Span::unknown()).unwrap(),
            Value::Number(_)
        ));
    }

    #[test]
    fn add_fails_type_error_without_a_matching_dunder_add() {
        let mut output = Vec::new();
        let err = eval_add(Value::Number(1), Value::String("x".into()), Span::unknown(), &mut output).unwrap_err();
        assert_eq!(err.code(), "E_TYPE");
    }
}
