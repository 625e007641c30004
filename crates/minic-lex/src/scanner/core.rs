//! The scanning automaton.
//!
//! The scanner walks the source with a [`Cursor`] and a current [`ScanState`].
//! Each step looks at one character and either consumes it or holds it for
//! reprocessing after the pending lexeme has been classified. A synthetic
//! trailing blank is fed once at end of input so that any pending lexeme is
//! flushed through the same transitions as an ordinary boundary.

use crate::cursor::Cursor;
use crate::scanner::classify::{self, Classified};
use crate::token::{Token, TokenKind};
use crate::vocab;
use minic_util::{Collector, Diagnostic};

/// The states of the scanning automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Between lexemes; dispatches on the next character.
    Start,
    /// Inside a word (identifier, reserved word, or boolean spelling).
    Identifier,
    /// Inside a decimal integer literal.
    Integer,
    /// Inside a floating-point literal, after the dot.
    Float,
    /// Inside a hexadecimal literal, after the `0x` prefix.
    Hexadecimal,
    /// Inside a run of operator characters.
    Operator,
    /// Inside a string literal, after the opening quote.
    Str,
    /// Inside a `//` comment, after the markers.
    LineComment,
    /// Inside a `/* ... */` comment, after the opening marker.
    BlockComment,
}

/// What the automaton did with the character it was shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    /// The character was absorbed; move the cursor forward.
    Consume,
    /// The character ended the pending lexeme; show it again from the
    /// new state without moving the cursor.
    Hold,
}

/// The scanning automaton over one source text.
///
/// Diagnostics go to the borrowed [`Collector`]; tokens accumulate inside the
/// scanner and are returned by [`Scanner::scan`]. For the common case use the
/// free function [`scan`] instead.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    collector: &'a mut Collector,
    state: ScanState,
    lexeme: String,
    /// Current line (1-based). Owned here rather than by the cursor: the
    /// newline that aborts an unterminated string is consumed without
    /// incrementing this counter.
    line: u32,
    /// Line on which the pending lexeme started.
    token_line: u32,
    tokens: Vec<Token>,
    state_tags: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over `source`, reporting into `collector`.
    pub fn new(source: &'a str, collector: &'a mut Collector) -> Self {
        Self {
            cursor: Cursor::new(source),
            collector,
            state: ScanState::Start,
            lexeme: String::new(),
            line: 1,
            token_line: 1,
            tokens: Vec::new(),
            state_tags: false,
        }
    }

    /// Records the automaton-state label on every emitted token.
    pub fn with_state_tags(mut self) -> Self {
        self.state_tags = true;
        self
    }

    /// Runs the automaton to end of input and returns the token stream.
    ///
    /// The stream always ends with a single EOF token carrying the final
    /// line number.
    pub fn scan(mut self) -> Vec<Token> {
        loop {
            let at_end = self.cursor.is_at_end();
            // Trailing blank sentinel: flush a pending lexeme through the
            // normal boundary transitions.
            let c = if at_end { ' ' } else { self.cursor.current_char() };
            if self.step(c) == Step::Consume {
                if at_end {
                    break;
                }
                self.cursor.advance();
            }
        }
        self.tokens.push(self.make_token(TokenKind::Eof, "EOF".to_owned(), self.line));
        self.tokens
    }

    fn step(&mut self, c: char) -> Step {
        match self.state {
            ScanState::Start => self.step_start(c),
            ScanState::Identifier => self.step_identifier(c),
            ScanState::Integer => self.step_integer(c),
            ScanState::Float => self.step_float(c),
            ScanState::Hexadecimal => self.step_hexadecimal(c),
            ScanState::Operator => self.step_operator(c),
            ScanState::Str => self.step_string(c),
            ScanState::LineComment => self.step_line_comment(c),
            ScanState::BlockComment => self.step_block_comment(c),
        }
    }

    fn step_start(&mut self, c: char) -> Step {
        self.token_line = self.line;
        match c {
            ' ' | '\t' | '\r' => Step::Consume,
            '\n' => {
                self.line += 1;
                Step::Consume
            }
            // Comment entry wins over the `/` operator.
            '/' if self.cursor.peek_char(1) == '/' => {
                self.state = ScanState::LineComment;
                self.cursor.advance();
                Step::Consume
            }
            '/' if self.cursor.peek_char(1) == '*' => {
                self.state = ScanState::BlockComment;
                self.cursor.advance();
                Step::Consume
            }
            '"' => {
                self.state = ScanState::Str;
                Step::Consume
            }
            _ if c.is_alphabetic() || c == '_' => {
                self.state = ScanState::Identifier;
                self.lexeme.push(c);
                Step::Consume
            }
            _ if c.is_ascii_digit() => {
                self.state = ScanState::Integer;
                self.lexeme.push(c);
                Step::Consume
            }
            _ if vocab::is_operator_char(c) => {
                self.state = ScanState::Operator;
                self.lexeme.push(c);
                Step::Consume
            }
            _ if vocab::is_delimiter(c) => {
                self.emit(TokenKind::Delimiter, c.to_string());
                Step::Consume
            }
            _ => {
                self.collector.report(self.line, format!("unrecognized character '{c}'"));
                Step::Consume
            }
        }
    }

    fn step_identifier(&mut self, c: char) -> Step {
        if c.is_alphanumeric() || c == '_' {
            self.lexeme.push(c);
            Step::Consume
        } else {
            let result = classify::classify_word(&self.lexeme);
            self.finish(result);
            Step::Hold
        }
    }

    fn step_integer(&mut self, c: char) -> Step {
        if c.is_ascii_digit() {
            self.lexeme.push(c);
            Step::Consume
        } else if c == '.' {
            self.lexeme.push(c);
            self.state = ScanState::Float;
            Step::Consume
        } else if (c == 'x' || c == 'X') && self.lexeme == "0" {
            self.lexeme.push(c);
            self.state = ScanState::Hexadecimal;
            Step::Consume
        } else {
            self.finish(Classified::Token(TokenKind::Integer));
            Step::Hold
        }
    }

    fn step_float(&mut self, c: char) -> Step {
        if c.is_ascii_digit() {
            self.lexeme.push(c);
            Step::Consume
        } else {
            let result = classify::classify_float(&self.lexeme);
            self.finish(result);
            Step::Hold
        }
    }

    fn step_hexadecimal(&mut self, c: char) -> Step {
        if c.is_ascii_hexdigit() {
            self.lexeme.push(c);
            Step::Consume
        } else {
            let result = classify::classify_hexadecimal(&self.lexeme);
            self.finish(result);
            Step::Hold
        }
    }

    fn step_operator(&mut self, c: char) -> Step {
        if vocab::is_operator_char(c) {
            self.lexeme.push(c);
            Step::Consume
        } else {
            let result = classify::classify_operator(&self.lexeme);
            self.finish(result);
            Step::Hold
        }
    }

    fn step_string(&mut self, c: char) -> Step {
        match c {
            '"' => {
                self.finish(Classified::Token(TokenKind::Str));
                Step::Consume
            }
            '\n' => {
                // The newline is swallowed with the broken string and does
                // not advance the line counter.
                self.collector.report(self.line, "string not closed".to_owned());
                self.lexeme.clear();
                self.state = ScanState::Start;
                Step::Consume
            }
            _ => {
                self.lexeme.push(c);
                Step::Consume
            }
        }
    }

    fn step_line_comment(&mut self, c: char) -> Step {
        if c == '\n' {
            self.finish(Classified::Token(TokenKind::Comment));
            self.line += 1;
            Step::Consume
        } else {
            self.lexeme.push(c);
            Step::Consume
        }
    }

    fn step_block_comment(&mut self, c: char) -> Step {
        if c == '*' && self.cursor.peek_char(1) == '/' {
            self.finish(Classified::Token(TokenKind::Comment));
            self.cursor.advance();
            Step::Consume
        } else {
            if c == '\n' {
                self.line += 1;
            }
            self.lexeme.push(c);
            Step::Consume
        }
    }

    /// Turns the pending lexeme into a token or a diagnostic and returns to
    /// the start state.
    fn finish(&mut self, result: Classified) {
        let lexeme = std::mem::take(&mut self.lexeme);
        match result {
            Classified::Token(kind) => {
                let token = self.make_token(kind, lexeme, self.token_line);
                self.tokens.push(token);
            }
            Classified::Error(message) => self.collector.report(self.line, message),
        }
        self.state = ScanState::Start;
    }

    fn emit(&mut self, kind: TokenKind, lexeme: String) {
        let token = self.make_token(kind, lexeme, self.token_line);
        self.tokens.push(token);
    }

    fn make_token(&self, kind: TokenKind, lexeme: String, line: u32) -> Token {
        Token {
            kind,
            lexeme,
            line,
            state: self.state_tags.then(|| kind.state_tag()),
        }
    }
}

/// Scans `source` and returns the token stream with its diagnostics.
///
/// # Example
///
/// ```
/// use minic_lex::scanner::scan;
/// use minic_lex::token::TokenKind;
///
/// let (tokens, diagnostics) = scan("int x = 10;");
/// assert!(diagnostics.is_empty());
/// assert_eq!(tokens[0].kind, TokenKind::ReservedWord);
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut collector = Collector::new();
    let tokens = Scanner::new(source, &mut collector).scan();
    (tokens, collector.into_diagnostics())
}
