//! Token type definitions.

use std::fmt;

/// The classification of one lexical unit.
///
/// This is a closed vocabulary: the scanner never produces a kind outside
/// this set, and the set is never extended at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A word from the fixed reserved vocabulary (`if`, `int`, ...).
    ReservedWord,
    /// A name that is neither reserved nor a boolean spelling.
    Identifier,
    /// A decimal integer literal.
    Integer,
    /// A floating-point literal.
    Float,
    /// A single-character operator.
    Operator,
    /// A fixed two-character operator (`==`, `+=`, ...).
    CompoundOperator,
    /// A single-character delimiter (`;`, `(`, ...).
    Delimiter,
    /// A string literal, quotes excluded.
    Str,
    /// A line or block comment, markers excluded.
    Comment,
    /// A `0x`/`0X`-prefixed hexadecimal literal.
    Hexadecimal,
    /// A boolean literal.
    Boolean,
    /// The synthetic end-of-input marker.
    Eof,
}

impl TokenKind {
    /// Returns the fixed display name used in the token table.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "RESERVED_WORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Operator => "OPERATOR",
            TokenKind::CompoundOperator => "COMPOUND_OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Str => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::Hexadecimal => "HEXADECIMAL",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns the label of the automaton state associated with this kind.
    ///
    /// The labels follow the hand-drawn diagram of the automaton (`q0`..`q12`)
    /// and exist purely for the extended debug output.
    pub const fn state_tag(&self) -> &'static str {
        match self {
            TokenKind::Delimiter => "q0",
            TokenKind::ReservedWord => "q1",
            TokenKind::Identifier => "q2",
            TokenKind::Integer => "q3",
            TokenKind::Float => "q4",
            TokenKind::Operator => "q5",
            TokenKind::Str => "q6",
            TokenKind::Comment => "q7",
            TokenKind::CompoundOperator => "q8",
            TokenKind::Hexadecimal => "q9",
            TokenKind::Boolean => "q10",
            TokenKind::Eof => "q12",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One classified unit of scanner output.
///
/// The optional `state` field carries the automaton-state label of
/// [`TokenKind::state_tag`] when the scanner was asked to record it. It is
/// debug information only and is excluded from equality.
///
/// # Example
///
/// ```
/// use minic_lex::token::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Identifier, "x", 1);
/// assert_eq!(token.lexeme, "x");
/// assert_eq!(token.line, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Token {
    /// The classification of this token.
    pub kind: TokenKind,
    /// The exact source substring, or `"EOF"` for the terminal token.
    pub lexeme: String,
    /// Line on which the token started (1-based).
    pub line: u32,
    /// Automaton-state label, recorded only in the extended variant.
    pub state: Option<&'static str>,
}

impl Token {
    /// Creates a token without a state tag.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            state: None,
        }
    }

    /// Creates the terminal end-of-input token for the given line.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "EOF", line)
    }
}

// Equality deliberately ignores `state`: the tag is debug output and two
// scans with and without tags must produce equal token sequences.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme && self.line == other.line
    }
}

impl Eq for Token {}
