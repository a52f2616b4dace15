/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * File:     display.rs
 * Purpose:  Converts runtime `Value`s into their `print`/`str(...)` text.
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

use crate::error::MythonError;
use crate::span::Span;
use crate::value::Value;

use super::classes;

/// Implements `str(...)`: `String` is returned unchanged, `Number`/`Bool`
/// format directly, an `Instance` with an (inherited or own) `__str__`
/// dispatches to it and recursively stringifies whatever it returns — a
/// `__str__` need not itself return a `String` literal, just something that
/// is in turn stringifiable. An instance with no `__str__` falls back to the
/// identity surrogate. `None` and bare `Class` values are not stringifiable.
pub fn stringify_value<W: Write>(value: &Value, span: Span, output: &mut W) -> Result<String, MythonError> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(if *b { "True".to_string() } else { "False".to_string() }),
        Value::Instance(instance) => match instance.class.get_method("__str__") {
            Some(method) => {
                let method = method.clone();
                let result = classes::call_method(
                    instance,
                    &method,
                    &instance.class.name,
                    Vec::new(),
                    span,
                    output,
                )?;
                stringify_value(&result, span, output)
            }
            None => Ok(classes::identity_surrogate(instance)),
        },
        Value::None | Value::Class(_) => Err(MythonError::type_error(
            format!("'{}' object is not stringifiable", value.type_name()),
            span,
        )),
    }
}

/// Implements `print`'s formatting rule, which differs from `str(...)` only
/// in that a vacant/`None` value prints the literal text `None` instead of
/// failing.
pub fn print_format_value<W: Write>(value: &Value, span: Span, output: &mut W) -> Result<String, MythonError> {
    match value {
        Value::None => Ok("None".to_string()),
        other => stringify_value(other, span, output),
    }
}
