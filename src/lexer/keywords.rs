/*
 * ==========================================================================
 * MYTHON
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords for the Mython language.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 * Website:   https://www.pawx-lang.com
 * GitHub:    https://github.com/samwilcox/pawx
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

use crate::lexer::token::TokenKind;

/// Maps a scanned identifier to a reserved keyword's `TokenKind`, or `None`
/// if it is an ordinary identifier.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "if" => Some(TokenKind::If),
        "elif" => Some(TokenKind::Elif),
        "else" => Some(TokenKind::Else),
        "return" => Some(TokenKind::Return),
        "print" => Some(TokenKind::Print),
        "class" => Some(TokenKind::Class),
        "def" => Some(TokenKind::Def),
        "True" => Some(TokenKind::True),
        "False" => Some(TokenKind::False),
        "None" => Some(TokenKind::None),
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "not" => Some(TokenKind::Not),
        "str" => Some(TokenKind::Str),
        "self" => Some(TokenKind::SelfKw),
        _ => Option::None,
    }
}
