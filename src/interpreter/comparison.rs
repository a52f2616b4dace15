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

use crate::error::MythonError;
use crate::span::Span;
use crate::value::Value;

/// Mython truthiness, used by `if`/`elif` conditions and `and`/`or`
/// short-circuiting.
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// `==`/`!=`. Instances and classes compare by identity; every other kind
/// compares by value. There is no user-overridable equality.
pub fn values_equal(lhs: &Value, rhs: &Value) -> bool {
    lhs.is_equal(rhs)
}

/// `<`/`<=`/`>`/`>=` all reduce to this ordering primitive. Only like-typed
/// Number/String/Bool pairs are ordered; anything else is a `TypeError`.
pub fn values_less(lhs: &Value, rhs: &Value, span: Span) -> Result<bool, MythonError> {
    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(a < b),
        (Value::String(a), Value::String(b)) => Ok(a < b),
        (Value::Bool(a), Value::Bool(b)) => Ok(a < b),
        _ => Err(MythonError::type_error(
            format!(
                "'<' not supported between instances of '{}' and '{}'",
                lhs.type_name(),
                rhs.type_name()
            ),
            span,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn none_and_zero_and_empty_string_are_falsy() {
        assert!(!is_truthy(&Value::None));
        assert!(!is_truthy(&Value::Number(0)));
        assert!(!is_truthy(&Value::String(String::new())));
        assert!(is_truthy(&Value::Number(1)));
        assert!(is_truthy(&Value::String("x".into())));
    }

    #[test]
    fn numbers_and_strings_compare_by_value() {
        assert!(values_less(&Value::Number(1), &Value::Number(2), Span::unknown()).unwrap());
        assert!(values_less(&Value::String("a".into()), &Value::String("b".into()), Span::unknown()).unwrap());
        assert!(values_equal(&Value::Number(3), &Value::Number(3)));
        assert!(!values_equal(&Value::Number(3), &Value::String("3".into())));
    }

    #[test]
    fn ordering_fails_across_mixed_types() {
        let err = values_less(&Value::Number(1), &Value::String("1".into()), Span::unknown()).unwrap_err();
        assert_eq!(err.code(), "E_TYPE");
    }
}
