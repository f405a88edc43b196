use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;
use lexer::{GrammarVersion, Lexer, Mode};

fn tokenize(source: &str, version: GrammarVersion) -> (Vec<TokenKind>, DiagnosticEngine) {
  let mut engine = DiagnosticEngine::new("<test>", source);
  let mut lexer = Lexer::new(engine.buffer().clone(), version);
  let mut kinds = Vec::new();
  loop {
    let token = lexer.next(&mut engine, Mode::Default);
    let done = token.kind == TokenKind::EndMarker;
    kinds.push(token.kind);
    if done {
      break;
    }
  }
  (kinds, engine)
}

fn kinds(source: &str) -> Vec<TokenKind> {
  tokenize(source, GrammarVersion::default()).0
}

#[test]
fn empty_source_is_just_end_marker() {
  assert_eq!(kinds(""), vec![TokenKind::EndMarker]);
}

#[test]
fn simple_statement_gets_trailing_newline() {
  use TokenKind::*;
  assert_eq!(kinds("x = 1"), vec![Identifier, Assign, Int, Newline, EndMarker]);
}

#[test]
fn blank_and_comment_only_lines_produce_no_indentation_tokens() {
  use TokenKind::*;
  let source = "x = 1\n\n# a comment\n\ny = 2\n";
  assert_eq!(
    kinds(source),
    vec![Identifier, Assign, Int, Newline, Identifier, Assign, Int, Newline, EndMarker]
  );
}

#[test]
fn indent_and_dedent_bracket_a_suite() {
  use TokenKind::*;
  let source = "if x:\n    y = 1\nz = 2\n";
  assert_eq!(
    kinds(source),
    vec![
      If, Identifier, Colon, Newline, Indent, Identifier, Assign, Int, Newline, Dedent, Identifier, Assign, Int, Newline,
      EndMarker,
    ]
  );
}

#[test]
fn nested_indentation_emits_matching_dedents_at_eof() {
  use TokenKind::*;
  let source = "if x:\n    if y:\n        z = 1\n";
  let tokens = kinds(source);
  assert_eq!(tokens[tokens.len() - 3..], [Dedent, Dedent, EndMarker]);
}

#[test]
fn tabs_expand_to_the_next_multiple_of_eight() {
  use TokenKind::*;
  // One tab indents to column 8, matching eight spaces.
  let tabbed = kinds("if x:\n\ty = 1\n");
  let spaced = kinds("if x:\n        y = 1\n");
  assert_eq!(tabbed, spaced);
}

#[test]
fn brackets_suppress_newline_significance() {
  use TokenKind::*;
  let source = "x = (1,\n     2)\n";
  assert_eq!(
    kinds(source),
    vec![Identifier, Assign, LParen, Int, Comma, Int, RParen, Newline, EndMarker]
  );
}

#[test]
fn backslash_continuation_suppresses_the_newline() {
  use TokenKind::*;
  let source = "x = 1 + \\\n    2\n";
  assert_eq!(kinds(source), vec![Identifier, Assign, Int, Plus, Int, Newline, EndMarker]);
}

#[test]
fn decimal_hex_octal_and_binary_integers() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "0xFF");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Int(255)));
}

#[test]
fn old_style_octal_literal() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "0755");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Int(0o755)));
}

#[test]
fn float_and_exponent_literals() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "3.14");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Float(3.14)));

  let mut engine = DiagnosticEngine::new("<t>", "1e10");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Float(1e10)));
}

#[test]
fn imaginary_literal() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "2j");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Imaginary(2.0)));
}

#[test]
fn string_escapes_are_decoded() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "'a\\nb'");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Str("a\nb".to_string())));
}

#[test]
fn raw_string_prefix_disables_escapes() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "r'a\\nb'");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Str("a\\nb".to_string())));
}

#[test]
fn triple_quoted_string_spans_newlines() {
  use lexer::token::TokenValue;
  let mut engine = DiagnosticEngine::new("<t>", "'''a\nb'''");
  let mut lexer = Lexer::new(engine.buffer().clone(), GrammarVersion::default());
  let tok = lexer.next(&mut engine, Mode::Default);
  assert_eq!(tok.value, Some(TokenValue::Str("a\nb".to_string())));
}

#[test]
fn unterminated_string_is_reported_but_does_not_panic() {
  let (_, engine) = tokenize("'abc", GrammarVersion::default());
  assert!(engine.has_errors());
}

#[test]
fn print_is_a_keyword_before_3_0_and_an_identifier_after() {
  use TokenKind::*;
  let (old, _) = tokenize("print x\n", GrammarVersion::new(2, 7));
  assert_eq!(old[0], Print);
  let (new, _) = tokenize("print x\n", GrammarVersion::new(3, 0));
  assert_eq!(new[0], Identifier);
}

#[test]
fn old_style_not_equal_only_recognized_pre_3_0() {
  use TokenKind::*;
  let (old, _) = tokenize("x <> y\n", GrammarVersion::new(2, 7));
  assert_eq!(old[1], LtGt);
  let (new, _) = tokenize("x <> y\n", GrammarVersion::new(3, 0));
  assert_eq!(new[1], Lt);
  assert_eq!(new[2], Gt);
}

#[test]
fn floor_division_operator_and_augmented_form() {
  use TokenKind::*;
  assert!(kinds("x // y\n").iter().any(|k| *k == DoubleSlash));
  assert!(kinds("x //= y\n").iter().any(|k| *k == DoubleSlashEq));
}

#[test]
fn stray_bang_is_reported_as_unexpected_token() {
  let (_, engine) = tokenize("x ! y\n", GrammarVersion::default());
  assert!(engine.has_errors());
  assert_eq!(engine.diagnostics()[0].argument("actual"), Some("'!'"));
}

#[test]
fn ellipsis_is_distinct_from_three_dots_used_separately() {
  use TokenKind::*;
  assert_eq!(kinds("...\n")[0], Ellipsis);
}

#[test]
fn comparison_chain_operators_tokenize_individually() {
  use TokenKind::*;
  assert_eq!(
    kinds("a < b <= c\n"),
    vec![Identifier, Lt, Identifier, LtE, Identifier, Newline, EndMarker]
  );
}
