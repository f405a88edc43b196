use diagnostic::code::DiagnosticCode;
use diagnostic::types::error::DiagnosticError;
use diagnostic::{DiagnosticEngine, Range};

fn range(engine: &DiagnosticEngine, lo: u32, hi: u32) -> Range {
  Range::new(engine.buffer(), lo, hi)
}

#[test]
fn unexpected_token_message_substitutes_arguments() {
  let engine = DiagnosticEngine::new("demo.py", "1 +\n");
  let loc = range(&engine, 2, 3);
  let diagnostic = engine
    .diagnostic(
      DiagnosticError::UnexpectedToken,
      "unexpected {actual}: expected {expected}",
      loc,
    )
    .with_arg("actual", "newline")
    .with_arg("expected", "an expression");

  assert_eq!(
    diagnostic.message(),
    "unexpected newline: expected an expression"
  );
  assert_eq!(diagnostic.code.code(), "E0601");
}

#[test]
fn engine_accumulates_and_reports_errors() {
  let mut engine = DiagnosticEngine::new("demo.py", "(\n");
  assert!(!engine.has_errors());

  let loc = range(&engine, 1, 2);
  let diagnostic = engine.diagnostic(
    DiagnosticError::UnterminatedConstruct,
    "unexpected {actual}: expected {expected}",
    loc,
  );
  engine.add(
    diagnostic
      .with_arg("actual", "end of file")
      .with_arg("expected", ")"),
  );

  assert!(engine.has_errors());
  assert_eq!(engine.error_count(), 1);
  assert_eq!(engine.diagnostics()[0].code.code(), "E0608");
}

#[test]
fn unknown_placeholder_is_left_untouched() {
  let engine = DiagnosticEngine::new("demo.py", "x");
  let loc = range(&engine, 0, 1);
  let diagnostic = engine.diagnostic(DiagnosticError::MalformedLiteral, "bad {thing}", loc);
  assert_eq!(diagnostic.message(), "bad {thing}");
}

#[test]
fn buffer_line_col_tracks_newlines() {
  let engine = DiagnosticEngine::new("demo.py", "aa\nbbb\nc");
  assert_eq!(engine.buffer().line_col(0), (1, 1));
  assert_eq!(engine.buffer().line_col(3), (2, 1));
  assert_eq!(engine.buffer().line_col(7), (3, 1));
  assert_eq!(engine.buffer().line_text(2), "bbb");
}

#[test]
fn range_join_and_contains() {
  let engine = DiagnosticEngine::new("demo.py", "0123456789");
  let a = range(&engine, 2, 4);
  let b = range(&engine, 6, 8);
  let joined = a.join(&b);
  assert_eq!((joined.lo(), joined.hi()), (2, 8));
  assert!(joined.contains(&a));
  assert!(joined.contains(&b));
  assert!(!a.contains(&b));
}
