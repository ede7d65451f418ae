//! End-to-end tests scanning whole SMT-LIB2 scripts.
//!
//! Each token is rendered as `line:column text` so a failing test shows the
//! exact point where the scanner went off track.

use std::fmt::Write as _;
use std::io::Read;

use pretty_assertions::assert_eq;
use smt2_lexer::{ScanErrorKind, ScanOptions, Scanner, Token};

/// Render a token the way it would be written back in a script.
fn render(token: Token<'_>) -> String {
    match token {
        Token::LeftParen => "(".to_owned(),
        Token::RightParen => ")".to_owned(),
        Token::Keyword(text) | Token::Symbol(text) => text.to_owned(),
        Token::String(bytes) => format!("{:?}", String::from_utf8_lossy(bytes)),
        Token::Int(value) | Token::Float(value) => value.to_string(),
        Token::BitVector { value, width } => format!("bv{value}[{width}]"),
        Token::EndOfInput => "<eof>".to_owned(),
    }
}

/// Scan to end of input, rendering tokens and errors one per line.
fn dump<R: Read>(mut scanner: Scanner<R>) -> String {
    let mut out = String::new();
    loop {
        match scanner.next_token() {
            Ok(Token::EndOfInput) => return out,
            Ok(token) => {
                let text = render(token);
                let _ = writeln!(out, "{}:{} {text}", scanner.line(), scanner.column());
            }
            Err(e) if e.is_io() => panic!("I/O error: {e}"),
            Err(e) => {
                let _ = writeln!(out, "error {e}");
            }
        }
    }
}

fn dump_str(source: &str) -> String {
    dump(Scanner::new(source.as_bytes()))
}

// === Scripts ===

#[test]
fn bit_vector_script() {
    let script = "\
; simple bit-vector problem
(set-logic QF_BV)
(set-info :status sat)
(declare-fun x () (_ BitVec 8))
(assert (= (bvadd x #x01) #b00000010))
(check-sat)
(exit)
";
    let expected = "\
2:1 (
2:2 set-logic
2:12 QF_BV
2:17 )
3:1 (
3:2 set-info
3:11 :status
3:19 sat
3:22 )
4:1 (
4:2 declare-fun
4:14 x
4:16 (
4:17 )
4:19 (
4:20 _
4:22 BitVec
4:29 8
4:30 )
4:31 )
5:1 (
5:2 assert
5:9 (
5:10 =
5:12 (
5:13 bvadd
5:19 x
5:21 bv1[8]
5:25 )
5:27 bv2[8]
5:37 )
5:38 )
6:1 (
6:2 check-sat
6:11 )
7:1 (
7:2 exit
7:6 )
";
    assert_eq!(dump_str(script), expected);
}

#[test]
fn arithmetic_script_with_strings_and_quoted_symbols() {
    let script = r#"(set-option :produce-models true)
(declare-const |weird name| Real)
(assert (! (> |weird name| 2.5) :named "lower ""bound"""))
(get-value (|weird name| -3))
"#;
    let expected = r#"1:1 (
1:2 set-option
1:13 :produce-models
1:29 true
1:33 )
2:1 (
2:2 declare-const
2:16 weird name
2:29 Real
2:33 )
3:1 (
3:2 assert
3:9 (
3:10 !
3:12 (
3:13 >
3:15 weird name
3:28 5/2
3:31 )
3:33 :named
3:40 "lower \"bound\""
3:57 )
3:58 )
4:1 (
4:2 get-value
4:12 (
4:13 weird name
4:26 -3
4:28 )
4:29 )
"#;
    assert_eq!(dump_str(script), expected);
}

#[test]
fn scanning_resumes_after_errors() {
    let script = "(a [b] #q c)\n(d 1.)\n(e)";
    let expected = "\
1:1 (
1:2 a
error line 1 column 4: unexpected character '['
1:5 b
error line 1 column 6: unexpected character ']'
error line 1 column 8: invalid bit-vector literal, expecting 'x' or 'b'
1:9 q
1:11 c
1:12 )
2:1 (
2:2 d
error line 2 column 4: invalid decimal literal, expecting digits after '.'
2:6 )
3:1 (
3:2 e
3:3 )
";
    assert_eq!(dump_str(script), expected);
}

#[test]
fn unterminated_string_runs_to_end_of_input() {
    let script = "(echo \"never closed)\n(exit)\n";
    let expected = "\
1:1 (
1:2 echo
error line 1 column 7: unexpected end of string
";
    assert_eq!(dump_str(script), expected);
}

// === Options ===

#[test]
fn strict_numerals_keep_minus_in_symbols() {
    let options = ScanOptions::smtlib2_compliant();
    let out = dump(Scanner::with_options("(- -1 x)".as_bytes(), options));
    assert_eq!(out, "1:1 (\n1:2 -\n1:4 -1\n1:7 x\n1:8 )\n");
}

#[test]
fn interactive_mode_scans_the_same_tokens() {
    let script = "(push 1)\n(assert (distinct a b))\n(pop 1)\n";
    let interactive = ScanOptions::new().with_interactive(true);
    assert_eq!(
        dump(Scanner::with_options(script.as_bytes(), interactive)),
        dump_str(script)
    );
}

// === Caching ===

#[test]
fn cache_recovers_command_text() {
    let script = "(define-fun f ((x Int)) Int\n  (+ x 1)) ; inc\n(check-sat)";
    let mut scanner = Scanner::new(script.as_bytes());
    scanner.start_caching();

    let mut depth = 0u32;
    let mut commands = Vec::new();
    let mut begin = 0;
    loop {
        match scanner.next_token() {
            Ok(Token::LeftParen) => {
                if depth == 0 {
                    begin = scanner.cache_size() - 1;
                }
                depth += 1;
            }
            Ok(Token::RightParen) => {
                depth -= 1;
                if depth == 0 {
                    let end = scanner.cache_size();
                    let text = scanner.cached_str_trimmed(begin, end);
                    commands.push(text.map(|t| String::from_utf8_lossy(t).into_owned()));
                }
            }
            Ok(Token::EndOfInput) => break,
            Ok(_) => {}
            Err(e) => panic!("{e}"),
        }
    }

    assert_eq!(commands, vec![
        Some("(define-fun f ((x Int)) Int\n  (+ x 1))".to_owned()),
        Some("(check-sat)".to_owned()),
    ]);
}

#[test]
fn bit_vector_radix_errors_are_distinct() {
    let a = ScanErrorKind::MalformedBitVectorLiteral { radix: Some(2) };
    let b = ScanErrorKind::MalformedBitVectorLiteral { radix: Some(16) };
    assert_ne!(a, b);
    assert_ne!(a.to_string(), b.to_string());
}
