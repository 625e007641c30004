//! Static vocabularies of the toy language.
//!
//! All sets are fixed, case-sensitive, and shared by the scanner and the
//! classifier. `true` and `false` appear both in the reserved vocabulary and
//! as the boolean spellings; classification checks the reserved set first.

/// Reserved words of the language.
pub const RESERVED_WORDS: &[&str] = &[
    "if", "else", "while", "for", "int", "float", "return", "void", "function", "class", "true",
    "false",
];

/// Boolean literal spellings.
pub const BOOLEANS: &[&str] = &["true", "false"];

/// Characters that may start or extend an operator lexeme.
pub const OPERATOR_CHARS: &[char] = &['+', '-', '*', '/', '=', '<', '>', '!', '&', '|', '%', '^'];

/// Recognized two-character compound operators.
pub const COMPOUND_OPERATORS: &[&str] =
    &["==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/="];

/// Single-character delimiters, emitted directly from the start state.
pub const DELIMITERS: &[char] = &['(', ')', '{', '}', '[', ']', ';', ',', ':', '.'];

/// Returns true if `lexeme` is a reserved word.
pub fn is_reserved_word(lexeme: &str) -> bool {
    RESERVED_WORDS.contains(&lexeme)
}

/// Returns true if `lexeme` is a boolean literal spelling.
pub fn is_boolean(lexeme: &str) -> bool {
    BOOLEANS.contains(&lexeme)
}

/// Returns true if `c` belongs to the operator character set.
pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Returns true if `lexeme` is a recognized compound operator.
pub fn is_compound_operator(lexeme: &str) -> bool {
    COMPOUND_OPERATORS.contains(&lexeme)
}

/// Returns true if `c` is a delimiter.
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}
