//! minic-lex - Lexical Analyzer for the minic Toy Language
//!
//! This crate provides a complete scanner (tokenizer) for a small C-like toy
//! language. It transforms source code into a stream of classified tokens
//! plus a list of line-tagged diagnostics for the malformed pieces.
//!
//! # Overview
//!
//! Scanning is driven by a character-level finite automaton: each state looks
//! at one character and either consumes it into the pending lexeme or holds
//! it for reprocessing after the lexeme has been classified. Malformed
//! lexemes never become tokens; they are reported and the scan continues.
//!
//! # Example Usage
//!
//! ```
//! use minic_lex::scan;
//! use minic_lex::token::TokenKind;
//!
//! let (tokens, diagnostics) = scan("int x = 3.14; // set x");
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens[0].kind, TokenKind::ReservedWord);
//! assert_eq!(tokens[3].lexeme, "3.14");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`scanner`] - The scanning automaton and classification
//! - [`cursor`] - Character cursor for source traversal
//! - [`vocab`] - The fixed vocabularies of the language
//!
//! # Token Categories
//!
//! - **Reserved words**: `if`, `else`, `while`, `for`, `int`, `float`,
//!   `return`, `void`, `function`, `class`, `true`, `false`
//! - **Identifiers**: `[a-zA-Z_][a-zA-Z0-9_]*` (Unicode letters allowed)
//! - **Integers**: `42`
//! - **Floats**: `3.14`, `3.` (a trailing dot is valid)
//! - **Hexadecimals**: `0x1F`, `0XdeadBEEF`
//! - **Operators**: `+`, `-`, `*`, `/`, `=`, `<`, `>`, `!`, `&`, `|`, `%`, `^`
//! - **Compound operators**: `==`, `!=`, `<=`, `>=`, `&&`, `||`, `+=`, `-=`,
//!   `*=`, `/=`
//! - **Delimiters**: `(`, `)`, `{`, `}`, `[`, `]`, `;`, `,`, `:`, `.`
//! - **Strings**: `"text"` (no escapes, single line)
//! - **Comments**: `// line` and `/* block */`, markers excluded
//! - **EOF**: synthetic end-of-input marker, always last

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod scanner;
pub mod token;
pub mod vocab;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use scanner::{scan, ScanState, Scanner};
pub use token::{Token, TokenKind};
