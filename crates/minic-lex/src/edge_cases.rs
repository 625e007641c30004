//! Edge case tests for minic-lex

#[cfg(test)]
mod tests {
    use crate::scanner::scan;
    use crate::token::{Token, TokenKind};

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        let (tokens, diagnostics) = scan("");
        assert_eq!(tokens, vec![Token::eof(1)]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        let (tokens, _) = scan("x");
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "x", 1));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, diagnostics) = scan(&name);
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, name, 1));
    }

    #[test]
    fn test_edge_long_integer() {
        let digits = "9".repeat(1000);
        let (tokens, _) = scan(&digits);
        assert_eq!(tokens[0], Token::new(TokenKind::Integer, digits, 1));
    }

    #[test]
    fn test_edge_no_whitespace_between_tokens() {
        let (tokens, diagnostics) = scan("int x=10;");
        assert!(diagnostics.is_empty());
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["int", "x", "=", "10", ";", "EOF"]);
    }

    #[test]
    fn test_edge_identifier_glued_to_integer() {
        // `10x` is an integer followed by an identifier; the scanner never
        // backtracks past the digit run.
        let (tokens, diagnostics) = scan("10x");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Integer, "10", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 1));
    }

    #[test]
    fn test_edge_zero_x_mid_number_is_not_hex() {
        // The hex prefix only triggers when the pending integer is exactly `0`.
        let (tokens, _) = scan("10x1");
        assert_eq!(tokens[0], Token::new(TokenKind::Integer, "10", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x1", 1));
    }

    #[test]
    fn test_edge_dot_alone_is_a_delimiter() {
        let (tokens, diagnostics) = scan(".");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Delimiter, ".", 1));
    }

    #[test]
    fn test_edge_dot_then_digits_is_delimiter_then_integer() {
        let (tokens, diagnostics) = scan(".5");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Delimiter, ".", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Integer, "5", 1));
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let (tokens, diagnostics) = scan("\"\"");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Str, "", 1));
    }

    #[test]
    fn test_edge_string_with_operators_inside() {
        let (tokens, diagnostics) = scan("\"a === b\"");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Str, "a === b", 1));
    }

    #[test]
    fn test_edge_empty_line_comment() {
        let (tokens, _) = scan("//\nx");
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, "", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 2));
    }

    #[test]
    fn test_edge_empty_block_comment() {
        let (tokens, _) = scan("/**/x");
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, "", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "x", 1));
    }

    #[test]
    fn test_edge_block_comment_with_stars_inside() {
        let (tokens, _) = scan("/* a * b ** c */");
        assert_eq!(tokens[0], Token::new(TokenKind::Comment, " a * b ** c ", 1));
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let (tokens, diagnostics) = scan("\"// not a comment\"");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Str, "// not a comment", 1));
    }

    #[test]
    fn test_edge_unicode_identifier() {
        let (tokens, diagnostics) = scan("número");
        assert!(diagnostics.is_empty());
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "número", 1));
    }

    #[test]
    fn test_edge_carriage_return_is_plain_whitespace() {
        let (tokens, _) = scan("a\r\nb");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_edge_final_line_without_newline() {
        let (tokens, _) = scan("a\nb");
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "b", 2));
        assert_eq!(tokens[2], Token::eof(2));
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_error_unrecognized_characters_each_reported() {
        let (_, diagnostics) = scan("# $ ~");
        let rendered: Vec<String> = diagnostics.iter().map(|d| d.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "Line 1: unrecognized character '#'",
                "Line 1: unrecognized character '$'",
                "Line 1: unrecognized character '~'",
            ]
        );
    }

    #[test]
    fn test_error_operator_run_is_never_split() {
        // Even though `==` and `=` would both be valid, the full run is
        // rejected as one unit.
        let (tokens, diagnostics) = scan("===");
        assert_eq!(tokens, vec![Token::eof(1)]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].to_string(), "Line 1: invalid operator '==='");
    }

    #[test]
    fn test_error_two_unterminated_strings() {
        let (_, diagnostics) = scan("\"one\n\"two\n");
        assert_eq!(diagnostics.len(), 2);
        // Neither aborting newline advanced the counter, so both report
        // line 1.
        assert_eq!(diagnostics[0].to_string(), "Line 1: string not closed");
        assert_eq!(diagnostics[1].to_string(), "Line 1: string not closed");
    }

    #[test]
    fn test_error_line_numbers_stick_after_unterminated_string() {
        let (tokens, diagnostics) = scan("x\n\"open\ny");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].to_string(), "Line 2: string not closed");
        assert_eq!(tokens[1], Token::new(TokenKind::Identifier, "y", 2));
    }

    #[test]
    fn test_error_invalid_hex_then_scan_continues() {
        let (tokens, diagnostics) = scan("0x + 1");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].to_string(), "Line 1: invalid hexadecimal number '0x'");
        assert_eq!(tokens[0], Token::new(TokenKind::Operator, "+", 1));
        assert_eq!(tokens[1], Token::new(TokenKind::Integer, "1", 1));
    }

    // ==================== PROPERTY-BASED TESTS ====================

    #[test]
    fn test_prop_identifiers_always_lex_clean() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let (tokens, diagnostics) = scan(&input);
            prop_assert!(diagnostics.is_empty());
            prop_assert_eq!(tokens.len(), 2);
            let kind = tokens[0].kind;
            prop_assert!(
                kind == TokenKind::Identifier || kind == TokenKind::ReservedWord,
                "got {:?}", kind
            );
        });
    }

    #[test]
    fn test_prop_integers_always_lex_clean() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,20}")| {
            let (tokens, diagnostics) = scan(&input);
            prop_assert!(diagnostics.is_empty());
            let numeric = tokens[0].kind == TokenKind::Integer
                || tokens[0].kind == TokenKind::Hexadecimal;
            prop_assert!(numeric, "got {:?}", tokens[0].kind);
        });
    }

    #[test]
    fn test_prop_hex_literals_always_lex_clean() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9a-fA-F]{1,16}")| {
            let source = format!("0x{digits}");
            let (tokens, diagnostics) = scan(&source);
            prop_assert!(diagnostics.is_empty());
            prop_assert_eq!(tokens[0].kind, TokenKind::Hexadecimal);
            prop_assert_eq!(tokens[0].lexeme.clone(), source);
        });
    }

    #[test]
    fn test_prop_closed_strings_keep_their_body() {
        use proptest::prelude::*;

        proptest!(|(body in "[ -!#-~]{0,100}")| {
            let source = format!("\"{body}\"");
            let (tokens, diagnostics) = scan(&source);
            prop_assert!(diagnostics.is_empty());
            prop_assert_eq!(tokens[0].kind, TokenKind::Str);
            prop_assert_eq!(tokens[0].lexeme.clone(), body);
        });
    }

    #[test]
    fn test_prop_scan_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\n]{0,200}")| {
            let first = scan(&input);
            let second = scan(&input);
            prop_assert_eq!(first.0, second.0);
            prop_assert_eq!(first.1, second.1);
        });
    }

    #[test]
    fn test_prop_eof_is_always_last() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~\n]{0,200}")| {
            let (tokens, _) = scan(&input);
            prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            prop_assert_eq!(eofs, 1);
        });
    }
}
