use diagnostic::code::DiagnosticCode;
use diagnostic::diagnostic::Diagnostic;
use diagnostic::types::error::DiagnosticError;
use diagnostic::{DiagnosticEngine, Range};
use lexer::token::{Token, TokenKind};
use lexer::Mode;

use crate::Parser;

impl Parser {
  /// Returns the not-yet-consumed token at the cursor.
  pub(crate) fn current(&self) -> &Token {
    &self.current
  }

  pub(crate) fn at(&self, kind: TokenKind) -> bool {
    self.current.kind == kind
  }

  pub(crate) fn at_any(&self, kinds: &[TokenKind]) -> bool {
    kinds.contains(&self.current.kind)
  }

  /// Consumes the current token and returns it, fetching the next one from
  /// the lexer to take its place.
  pub(crate) fn bump(&mut self, engine: &mut DiagnosticEngine) -> Token {
    let consumed = self.current.clone();
    self.current = self.lexer.next(engine, Mode::Default);
    consumed
  }

  /// Looks one token past the current one without consuming either.
  pub(crate) fn peek_next(&mut self, engine: &mut DiagnosticEngine) -> Token {
    self.lexer.peek(engine, Mode::Default)
  }

  /// Consumes the current token if it matches `kind`, else records an
  /// unexpected-token diagnostic and unwinds.
  pub(crate) fn expect(&mut self, kind: TokenKind, engine: &mut DiagnosticEngine) -> Result<Token, ()> {
    if self.at(kind) {
      Ok(self.bump(engine))
    } else {
      self.error_unexpected(kind.describe(), engine);
      Err(())
    }
  }

  /// Consumes the current token if it matches `kind`, returning whether it did.
  pub(crate) fn eat(&mut self, kind: TokenKind, engine: &mut DiagnosticEngine) -> bool {
    if self.at(kind) {
      self.bump(engine);
      true
    } else {
      false
    }
  }

  pub(crate) fn error_unexpected(&self, expected: &'static str, engine: &mut DiagnosticEngine) {
    let diagnostic = Diagnostic::new(
      DiagnosticCode::from(DiagnosticError::UnexpectedToken),
      "unexpected {actual}: expected {expected}",
      self.current.range.clone(),
    )
    .with_arg("actual", self.current.kind.describe())
    .with_arg("expected", expected);
    engine.add(diagnostic);
  }

  pub(crate) fn error_at(&self, code: DiagnosticError, reason: &'static str, location: Range, engine: &mut DiagnosticEngine) {
    engine.add(Diagnostic::new(DiagnosticCode::from(code), reason, location));
  }

  /// Consumes a run of zero or more `NEWLINE` tokens: blank and comment-only
  /// lines surface as extra newlines from the lexer (see `lexer::Lexer`),
  /// and the statement grammar simply treats runs of them as one separator.
  pub(crate) fn skip_newlines(&mut self, engine: &mut DiagnosticEngine) {
    while self.at(TokenKind::Newline) {
      self.bump(engine);
    }
  }

  /// The grammar version gates a production but the input used it anyway.
  pub(crate) fn error_version_mismatch(&self, feature: &'static str, location: Range, engine: &mut DiagnosticEngine) {
    let diagnostic = Diagnostic::new(
      DiagnosticCode::from(DiagnosticError::VersionMismatch),
      "{feature} is not available in grammar version {version}",
      location,
    )
    .with_arg("feature", feature)
    .with_arg("version", format!("{}.{}", self.version.major, self.version.minor));
    engine.add(diagnostic);
  }
}
