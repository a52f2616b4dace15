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
use thiserror::Error;

/// Every way evaluating (or parsing) a Mython program can fail.
///
/// Each variant keeps a [`Span`] for diagnostics. Lexer/parser failures
/// carry a real source location; most runtime failures still use
/// `Span::unknown()` until spans are threaded through every AST node.
#[derive(Debug, Error, Clone)]
pub enum MythonError {
    #[error("name '{name}' is not defined")]
    Name { name: String, span: Span },

    #[error("'{type_name}' object has no attribute '{attr}'")]
    Attribute {
        type_name: String,
        attr: String,
        span: Span,
    },

    #[error("{message}")]
    Type { message: String, span: Span },

    #[error("'{class_name}' has no method '{method}' matching {argc} argument(s)")]
    MethodNotFound {
        class_name: String,
        method: String,
        argc: usize,
        span: Span,
    },

    #[error("division by zero")]
    ZeroDivision { span: Span },

    #[error("return statement outside of a method call")]
    UnboundReturn { span: Span },

    #[error("{message}")]
    Syntax { message: String, span: Span },
}

impl MythonError {
    /// Stable error code, used by the diagnostics printer.
    pub fn code(&self) -> &'static str {
        match self {
            MythonError::Name { .. } => "E_NAME",
            MythonError::Attribute { .. } => "E_ATTRIBUTE",
            MythonError::Type { .. } => "E_TYPE",
            MythonError::MethodNotFound { .. } => "E_METHOD",
            MythonError::ZeroDivision { .. } => "E_ZERODIV",
            MythonError::UnboundReturn { .. } => "E_RETURN",
            MythonError::Syntax { .. } => "E_SYNTAX",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            MythonError::Name { span, .. }
            | MythonError::Attribute { span, .. }
            | MythonError::Type { span, .. }
            | MythonError::MethodNotFound { span, .. }
            | MythonError::ZeroDivision { span, .. }
            | MythonError::UnboundReturn { span, .. }
            | MythonError::Syntax { span, .. } => *span,
        }
    }

    pub fn name(name: impl Into<String>, span: Span) -> Self {
        MythonError::Name { name: name.into(), span }
    }

    pub fn attribute(type_name: impl Into<String>, attr: impl Into<String>, span: Span) -> Self {
        MythonError::Attribute { type_name: type_name.into(), attr: attr.into(), span }
    }

    pub fn type_error(message: impl Into<String>, span: Span) -> Self {
        MythonError::Type { message: message.into(), span }
    }

    pub fn method_not_found(
        class_name: impl Into<String>,
        method: impl Into<String>,
        argc: usize,
        span: Span,
    ) -> Self {
        MythonError::MethodNotFound {
            class_name: class_name.into(),
            method: method.into(),
            argc,
            span,
        }
    }

    pub fn zero_division(span: Span) -> Self {
        MythonError::ZeroDivision { span }
    }

    pub fn unbound_return(span: Span) -> Self {
        MythonError::UnboundReturn { span }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        MythonError::Syntax { message: message.into(), span }
    }
}
