use diagnostic::buffer::SourceBuffer;
use diagnostic::DiagnosticEngine;
use lexer::token::{Token, TokenKind};
use lexer::{Lexer, Mode};

use crate::ast::{Module, Stmt};

pub mod ast;
mod cursor;
mod expr;
pub mod grammar;
mod stmt;
pub mod version;

pub use version::GrammarVersion;

/// Hand-rolled recursive-descent parser: one function per grammar production,
/// grouped under `expr/` (the operator-precedence cascade) and `stmt/` (simple
/// and compound statements). Holds a one-token lookahead buffer on top of the
/// lexer's own pull interface; diagnostics are reported into the caller's
/// `DiagnosticEngine` rather than stored on `self`, so a single parser never
/// owns more than the token stream it's consuming.
pub struct Parser {
  lexer: Lexer,
  current: Token,
  version: GrammarVersion,
}

impl Parser {
  /// Builds a parser over `buffer`, priming the lookahead with the first
  /// token. `version` gates every version-dependent production (see
  /// `GrammarVersion`).
  pub fn new(buffer: SourceBuffer, version: GrammarVersion, engine: &mut DiagnosticEngine) -> Self {
    let mut lexer = Lexer::new(buffer, version);
    let current = lexer.next(engine, Mode::Default);
    Self { lexer, current, version }
  }

  pub fn version(&self) -> GrammarVersion {
    self.version
  }

  /// Parses an entire source stream until end-of-input. A lexer-originated
  /// diagnostic (an illegal character, an unterminated string) never fails a
  /// token fetch the way a parser diagnostic fails a production — it still
  /// hands back a token and keeps going — so this checks the engine directly
  /// rather than trusting an `Ok` body to mean a clean parse.
  pub fn file_input(&mut self, engine: &mut DiagnosticEngine) -> Result<Module, ()> {
    let mut body = Vec::new();
    self.skip_newlines(engine);
    while !self.at(TokenKind::EndMarker) {
      body.extend(self.statement_line(engine)?);
      self.skip_newlines(engine);
    }
    if engine.has_errors() {
      return Err(());
    }
    Ok(Module { body })
  }

  /// Parses a single expression, for interactive/eval-style entry points.
  pub fn expression(&mut self, engine: &mut DiagnosticEngine) -> Result<ast::Expr, ()> {
    let value = self.test(engine)?;
    self.skip_newlines(engine);
    self.expect(TokenKind::EndMarker, engine)?;
    if engine.has_errors() {
      return Err(());
    }
    Ok(value)
  }

  /// Parses one logical line: either a single compound statement, or one or
  /// more semicolon-separated simple statements terminated by a newline.
  fn statement_line(&mut self, engine: &mut DiagnosticEngine) -> Result<Vec<Stmt>, ()> {
    stmt::parse_statement_line(self, engine)
  }
}
