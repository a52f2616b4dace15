/*
 * ==========================================================================
 * PAWX - Code with Claws!
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

/// Renders human-friendly, compiler-style diagnostics for `MythonError`s.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
///
/// The output is intentionally inspired by `rustc` diagnostics, simplified
/// for a single-file interpreter and designed to remain readable without
/// color.
pub struct DiagnosticPrinter {
    /// Full source code of the file being interpreted, stored as a single
    /// string so we can extract specific lines for error reporting.
    source: String,

    /// Name of the source file (e.g. `main.my`), used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints a formatted error diagnostic to stderr.
    ///
    /// # Output Example
    /// ```text
    /// error[E_ZERODIV]: division by zero
    ///   --> example.my:12:10
    ///    |
    /// 12 | x = 5 / 0
    ///    |          ^
    /// ```
    pub fn print(&self, error: &MythonError) {
        let Span { line, column } = error.span();

        let lines: Vec<&str> = self.source.lines().collect();
        let src_line = lines.get(line.saturating_sub(1)).unwrap_or(&"");

        eprintln!(
            "error[{}]: {}\n  --> {}:{}:{}",
            error.code(),
            error,
            self.file_name,
            line,
            column + 1
        );

        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);

        let mut underline = String::new();
        for _ in 0..column {
            underline.push(' ');
        }
        underline.push('^');

        eprintln!("   | {}", underline);
    }
}