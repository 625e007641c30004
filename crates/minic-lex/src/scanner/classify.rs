//! Boundary classification of finished lexemes.
//!
//! Once the scanner decides a lexeme is complete, the routines here decide
//! whether it becomes a token or a diagnostic. Classification looks only at
//! the finished lexeme; it never consults the surrounding source.

use crate::token::TokenKind;
use crate::vocab;

/// The outcome of classifying a finished lexeme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Classified {
    /// The lexeme is a valid token of the given kind.
    Token(TokenKind),
    /// The lexeme is malformed; the message describes why.
    Error(String),
}

/// Classifies a finished word lexeme.
///
/// Reserved words are checked before boolean spellings. Since `true` and
/// `false` are in the reserved vocabulary, they classify as reserved words
/// and the boolean branch is unreachable in practice; it stays because the
/// boolean kind is part of the token vocabulary.
pub(crate) fn classify_word(lexeme: &str) -> Classified {
    if vocab::is_reserved_word(lexeme) {
        Classified::Token(TokenKind::ReservedWord)
    } else if vocab::is_boolean(lexeme) {
        Classified::Token(TokenKind::Boolean)
    } else {
        Classified::Token(TokenKind::Identifier)
    }
}

/// Classifies a finished float lexeme.
///
/// A valid float has exactly one dot and at least one digit. A trailing dot
/// (`3.`) is valid; a bare dot never reaches this point because `.` from the
/// start state is a delimiter.
pub(crate) fn classify_float(lexeme: &str) -> Classified {
    let dots = lexeme.chars().filter(|&c| c == '.').count();
    if dots == 1 && lexeme.len() > 1 {
        Classified::Token(TokenKind::Float)
    } else {
        Classified::Error(format!("invalid floating-point number '{lexeme}'"))
    }
}

/// Classifies a finished hexadecimal lexeme.
///
/// The lexeme always starts with `0x` or `0X`. It is valid when at least one
/// hex digit follows the prefix.
pub(crate) fn classify_hexadecimal(lexeme: &str) -> Classified {
    if lexeme.len() > 2 && lexeme[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        Classified::Token(TokenKind::Hexadecimal)
    } else {
        Classified::Error(format!("invalid hexadecimal number '{lexeme}'"))
    }
}

/// Classifies a finished operator run.
///
/// Recognized compound operators and single operator characters are valid.
/// Any longer run is rejected as a whole; it is never split into shorter
/// valid operators.
pub(crate) fn classify_operator(lexeme: &str) -> Classified {
    if vocab::is_compound_operator(lexeme) {
        Classified::Token(TokenKind::CompoundOperator)
    } else if lexeme.chars().count() == 1 {
        Classified::Token(TokenKind::Operator)
    } else {
        Classified::Error(format!("invalid operator '{lexeme}'"))
    }
}
