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

/// Core parser orchestration: owns the `Parser` struct and token-stream
/// helpers.
pub mod parser;

/// Statement-level parsing: assignment, print, return, if/elif/else, class
/// and method declarations.
pub mod statements;

/// Expression-level parsing: or -> and -> not -> comparison -> term ->
/// factor -> primary, plus dotted-name/method-call/construction parsing.
pub mod expressions;

pub use parser::{parse, Parser};
