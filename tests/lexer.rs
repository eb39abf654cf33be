//! Integration tests for clex-lexer crate.

use clex_common::Span;
use clex_lexer::{
    tokenize, tokenize_with, HexDigits, KeywordMatch, LexError, ScanOptions, Scanner, TokenKind,
};

fn lex(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(source)
        .unwrap_or_else(|e| panic!("failed to tokenize {source:?}: {e}"))
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

fn lex_compat(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize_with(source, ScanOptions::compat())
        .unwrap_or_else(|e| panic!("failed to tokenize {source:?}: {e}"))
        .into_iter()
        .map(|t| (t.kind, t.lexeme))
        .collect()
}

fn lex_err(source: &str) -> LexError {
    match tokenize(source) {
        Ok(tokens) => panic!("expected an error for {source:?}, got {tokens:?}"),
        Err(e) => e,
    }
}

use TokenKind::{Identifier as Id, Keyword as Kw, Number as Num, Operator as Op, StringLiteral as Str};

// ============================================================================
// Trivia
// ============================================================================

#[test]
fn test_empty_input() {
    assert!(lex("").is_empty());
}

#[test]
fn test_only_trivia() {
    assert!(lex(" \t\r\n").is_empty());
    assert!(lex("// just a comment").is_empty());
    assert!(lex("// one\n// two\n\n").is_empty());
    assert!(lex("/* block */").is_empty());
    assert!(lex("  /* a\n b */ // c\n\t").is_empty());
}

#[test]
fn test_line_comment_ends_at_newline() {
    assert_eq!(lex("a // b c\nd"), vec![(Id, "a"), (Id, "d")]);
}

#[test]
fn test_block_comment_between_tokens() {
    assert_eq!(lex("a/*x*/b"), vec![(Id, "a"), (Id, "b")]);
    assert_eq!(lex("a /* ** / */ / b"), vec![(Id, "a"), (Op, "/"), (Id, "b")]);
}

#[test]
fn test_comment_start_is_not_division() {
    assert_eq!(lex("x / y"), vec![(Id, "x"), (Op, "/"), (Id, "y")]);
    assert_eq!(lex("x /= y"), vec![(Id, "x"), (Op, "/="), (Id, "y")]);
    assert_eq!(lex("x //= y"), vec![(Id, "x")]);
}

#[test]
fn test_unterminated_block_comment() {
    let err = lex_err("int x; /* never closed");
    assert!(matches!(
        err,
        LexError::UnterminatedBlockComment { line: 1, span } if span == Span::from_usize(7, 22)
    ));
}

#[test]
fn test_block_comment_needs_separate_close() {
    // `/*/` opens a comment without closing it.
    assert!(matches!(lex_err("/*/"), LexError::UnterminatedBlockComment { .. }));
}

// ============================================================================
// Keywords and identifiers
// ============================================================================

#[test]
fn test_all_keywords() {
    for kw in clex_lexer::KEYWORDS {
        assert_eq!(lex(kw), vec![(Kw, kw)], "keyword {kw}");
    }
}

#[test]
fn test_identifiers() {
    assert_eq!(
        lex("main _tmp x1 __LINE__ Int"),
        vec![(Id, "main"), (Id, "_tmp"), (Id, "x1"), (Id, "__LINE__"), (Id, "Int")]
    );
}

#[test]
fn test_keyword_boundary_whole_word() {
    assert_eq!(lex("intVal"), vec![(Id, "intVal")]);
    assert_eq!(lex("double"), vec![(Kw, "double")]);
    assert_eq!(lex("doubled"), vec![(Id, "doubled")]);
    assert_eq!(lex("int_"), vec![(Id, "int_")]);
    assert_eq!(lex("if2"), vec![(Id, "if2")]);
}

#[test]
fn test_keyword_boundary_prefix() {
    assert_eq!(lex_compat("intVal"), vec![(Kw, "int"), (Id, "Val")]);
    // Longest keyword prefix wins over `do`.
    assert_eq!(lex_compat("double"), vec![(Kw, "double")]);
    assert_eq!(lex_compat("doubled"), vec![(Kw, "double"), (Id, "d")]);
    assert_eq!(lex_compat("if2"), vec![(Kw, "if"), (Num, "2")]);
    assert_eq!(lex_compat("main"), vec![(Id, "main")]);
}

#[test]
fn test_keyword_match_option_alone() {
    let options = ScanOptions::new().keyword_match(KeywordMatch::Prefix);
    let tokens = tokenize_with("unsignedint", options).unwrap();
    let lexemes: Vec<_> = tokens.iter().map(|t| t.lexeme).collect();
    assert_eq!(lexemes, ["unsigned", "int"]);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_decimal_numbers() {
    assert_eq!(lex("0 42 3.14e10"), vec![(Num, "0"), (Num, "42"), (Num, "3.14e10")]);
    assert_eq!(lex("1.5E-3 2e+8 6."), vec![(Num, "1.5E-3"), (Num, "2e+8"), (Num, "6.")]);
}

#[test]
fn test_leading_dot_number() {
    assert_eq!(lex(".5"), vec![(Num, ".5")]);
    assert_eq!(lex("x=.25e1;"), vec![(Id, "x"), (Op, "="), (Num, ".25e1"), (Op, ";")]);
}

#[test]
fn test_member_access_is_not_number() {
    assert_eq!(lex("s.x"), vec![(Id, "s"), (Op, "."), (Id, "x")]);
}

#[test]
fn test_dangling_exponent() {
    assert_eq!(lex("2e"), vec![(Num, "2"), (Id, "e")]);
}

#[test]
fn test_binary_numbers() {
    assert_eq!(lex("0b101"), vec![(Num, "0b101")]);
    assert_eq!(lex("0B11"), vec![(Num, "0B11")]);
    assert_eq!(lex("0b2"), vec![(Num, "0"), (Id, "b2")]);
}

#[test]
fn test_hex_numbers_full() {
    assert_eq!(lex("0x19"), vec![(Num, "0x19")]);
    assert_eq!(lex("0xDEADbeef"), vec![(Num, "0xDEADbeef")]);
    assert_eq!(lex("0x"), vec![(Num, "0"), (Id, "x")]);
}

#[test]
fn test_hex_numbers_octal_range() {
    let options = ScanOptions::new().hex_digits(HexDigits::Octal);
    let tokens = tokenize_with("0x19 0x17", options).unwrap();
    let lexemes: Vec<_> = tokens.iter().map(|t| (t.kind, t.lexeme)).collect();
    assert_eq!(lexemes, vec![(Num, "0x1"), (Num, "9"), (Num, "0x17")]);
}

#[test]
fn test_number_then_identifier() {
    assert_eq!(lex("10u"), vec![(Num, "10"), (Id, "u")]);
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_maximal_munch() {
    assert_eq!(lex("<<="), vec![(Op, "<<=")]);
    assert_eq!(lex(">>="), vec![(Op, ">>=")]);
    assert_eq!(lex("a<<b"), vec![(Id, "a"), (Op, "<<"), (Id, "b")]);
    assert_eq!(lex("a+++b"), vec![(Id, "a"), (Op, "++"), (Op, "+"), (Id, "b")]);
    assert_eq!(lex("p->q"), vec![(Id, "p"), (Op, "->"), (Id, "q")]);
}

#[test]
fn test_all_two_char_operators() {
    let ops = "== != >= <= += -= *= /= %= &= |= ^= ++ -- -> && || >> <<";
    let tokens = lex(ops);
    assert_eq!(tokens.len(), 19);
    for ((kind, lexeme), expected) in tokens.iter().zip(ops.split(' ')) {
        assert_eq!(*kind, Op);
        assert_eq!(*lexeme, expected);
    }
}

#[test]
fn test_all_single_char_operators() {
    let ops = "+ - * / % > < ! & | ~ ^ = , . ; : ? ( ) [ ] { }";
    let tokens = lex(ops);
    assert_eq!(tokens.len(), 24);
    assert!(tokens.iter().all(|(kind, lexeme)| *kind == Op && lexeme.len() == 1));
}

#[test]
fn test_adjacent_punctuation() {
    assert_eq!(
        lex("f(a[1]);"),
        vec![(Id, "f"), (Op, "("), (Id, "a"), (Op, "["), (Num, "1"), (Op, "]"), (Op, ")"), (Op, ";")]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_string_literal() {
    assert_eq!(lex(r#""hello""#), vec![(Str, r#""hello""#)]);
    assert_eq!(lex(r#""""#), vec![(Str, r#""""#)]);
}

#[test]
fn test_string_escaped_quote() {
    assert_eq!(lex(r#""a\"b""#), vec![(Str, r#""a\"b""#)]);
}

#[test]
fn test_string_is_shortest_match() {
    assert_eq!(lex(r#""a" "b""#), vec![(Str, r#""a""#), (Str, r#""b""#)]);
}

#[test]
fn test_string_escaped_backslash() {
    assert_eq!(lex(r#""a\\" x"#), vec![(Str, r#""a\\""#), (Id, "x")]);
}

#[test]
fn test_string_keeps_comment_markers() {
    assert_eq!(lex(r#""// not a comment""#), vec![(Str, r#""// not a comment""#)]);
}

#[test]
fn test_unterminated_string() {
    let err = lex_err("x = \"abc");
    assert_eq!(
        err,
        LexError::UnterminatedStringLiteral {
            line: 1,
            span: Span::from_usize(4, 8)
        }
    );
    assert!(matches!(lex_err(r#""ends with escape\""#), LexError::UnterminatedStringLiteral { .. }));
}

// ============================================================================
// Lines and positions
// ============================================================================

#[test]
fn test_line_after_two_newlines() {
    let tokens = tokenize("\n\nx").unwrap();
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[0].column, 1);
}

#[test]
fn test_lines_across_trivia_and_strings() {
    let source = "int a; // c\n/* one\ntwo */ b\n\"s\nt\" c";
    let lines: Vec<_> = tokenize(source)
        .unwrap()
        .iter()
        .map(|t| (t.lexeme, t.line))
        .collect();
    assert_eq!(
        lines,
        vec![("int", 1), ("a", 1), (";", 1), ("b", 3), ("\"s\nt\"", 4), ("c", 5)]
    );
}

#[test]
fn test_spans_match_lexemes() {
    let source = "while (i <= 10) { i += 0x1f; }";
    for token in tokenize(source).unwrap() {
        assert_eq!(&source[token.span.range()], token.lexeme);
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unclassifiable_character() {
    let err = lex_err("int x = @;");
    assert_eq!(
        err,
        LexError::UnclassifiableCharacter {
            ch: '@',
            line: 1,
            span: Span::from_usize(8, 9)
        }
    );
}

#[test]
fn test_unclassifiable_non_ascii() {
    let err = lex_err("a\n  é");
    match err {
        LexError::UnclassifiableCharacter { ch, line, span } => {
            assert_eq!(ch, 'é');
            assert_eq!(line, 2);
            assert_eq!(span.len(), 2);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_other_unclassifiable_characters() {
    for source in ["#include", "$x", "`", "'c'", "\\"] {
        assert!(
            matches!(lex_err(source), LexError::UnclassifiableCharacter { .. }),
            "{source:?}"
        );
    }
}

#[test]
fn test_no_partial_continuation() {
    let mut scanner = Scanner::new("a b @ c d");
    let scanned: Vec<_> = scanner.by_ref().collect();
    assert_eq!(scanned.len(), 3);
    assert!(scanned[0].is_ok() && scanned[1].is_ok());
    assert!(scanned[2].is_err());
    assert!(scanner.next().is_none());
}

// ============================================================================
// Programs
// ============================================================================

#[test]
fn test_small_program() {
    let source = r#"
/* entry point */
int main(void) {
    unsigned long n = 0x10;   // sixteen
    while (n-- > 0) {
        printf("%d\n", n);
    }
    return 0;
}
"#;
    let tokens = tokenize(source).unwrap();
    let keywords: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == Kw)
        .map(|t| t.lexeme)
        .collect();
    assert_eq!(keywords, ["int", "void", "unsigned", "long", "while", "return"]);

    let string = tokens.iter().find(|t| t.kind == Str).unwrap();
    assert_eq!(string.lexeme, r#""%d\n""#);
    assert_eq!(string.line, 6);

    assert!(tokens.iter().any(|t| t.is_operator("--")));
    assert!(tokens.iter().any(|t| t.is_keyword("return") && t.line == 8));
    assert_eq!(tokens.last().map(|t| (t.lexeme, t.line)), Some(("}", 9)));
}

#[test]
fn test_independent_scanners_on_threads() {
    let sources = ["int a = 1;", "char *s = \"x\";\nreturn s;", "x <<= 3"];
    let handles: Vec<_> = sources
        .iter()
        .map(|&src| std::thread::spawn(move || tokenize(src).map(|t| t.len())))
        .collect();
    let counts: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_eq!(counts, vec![5, 9, 3]);
}
