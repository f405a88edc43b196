//! Simple and compound statements. Mirrors `expr/`'s layout: one file per
//! statement family, all as `impl Parser` methods, plus the shared helpers
//! (`suite`, `testlist`, target legality) every family needs.

mod classdef;
mod expr_stmt;
mod flow;
mod funcdef;
mod if_while_for;
mod imports;
mod print_exec;
mod try_with;

use diagnostic::types::error::DiagnosticError;
use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Ctx, Expr, Stmt};
use crate::Parser;

/// Entry point called by `Parser::statement_line`, kept as a free function so
/// `lib.rs` doesn't need its own `stmt`-shaped method name collision.
pub(crate) fn parse_statement_line(parser: &mut Parser, engine: &mut DiagnosticEngine) -> Result<Vec<Stmt>, ()> {
  parser.statement_line_inner(engine)
}

impl Parser {
  /// `stmt: simple_stmt | compound_stmt`
  pub(crate) fn statement_line_inner(&mut self, engine: &mut DiagnosticEngine) -> Result<Vec<Stmt>, ()> {
    if self.at_compound_stmt_start() {
      return Ok(vec![self.compound_stmt(engine)?]);
    }
    self.simple_stmt_line(engine)
  }

  fn at_compound_stmt_start(&self) -> bool {
    matches!(
      self.current().kind,
      TokenKind::If
        | TokenKind::While
        | TokenKind::For
        | TokenKind::Try
        | TokenKind::With
        | TokenKind::Def
        | TokenKind::Class
        | TokenKind::At
    )
  }

  fn compound_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    match self.current().kind {
      TokenKind::If => self.if_stmt(engine),
      TokenKind::While => self.while_stmt(engine),
      TokenKind::For => self.for_stmt(engine),
      TokenKind::Try => self.try_stmt(engine),
      TokenKind::With => self.with_stmt(engine),
      TokenKind::Def => self.funcdef(engine, Vec::new()),
      TokenKind::Class => self.classdef(engine, Vec::new()),
      TokenKind::At => self.decorated(engine),
      _ => unreachable!("at_compound_stmt_start guards this match"),
    }
  }

  /// `simple_stmt: small_stmt (';' small_stmt)* [';'] NEWLINE`
  pub(crate) fn simple_stmt_line(&mut self, engine: &mut DiagnosticEngine) -> Result<Vec<Stmt>, ()> {
    let mut stmts = vec![self.small_stmt(engine)?];
    while self.eat(TokenKind::Semicolon, engine) {
      if self.at_stmt_stop() {
        break;
      }
      stmts.push(self.small_stmt(engine)?);
    }
    if !self.at(TokenKind::EndMarker) {
      self.expect(TokenKind::Newline, engine)?;
    }
    Ok(stmts)
  }

  /// `small_stmt: expr_stmt | pass_stmt | flow_stmt | import_stmt
  ///            | global_stmt | exec_stmt | assert_stmt | print_stmt`
  fn small_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    match self.current().kind {
      TokenKind::Pass => Ok(self.pass_stmt(engine)),
      TokenKind::Break => Ok(self.break_stmt(engine)),
      TokenKind::Continue => Ok(self.continue_stmt(engine)),
      TokenKind::Return => self.return_stmt(engine),
      TokenKind::Raise => self.raise_stmt(engine),
      TokenKind::Del => self.delete_stmt(engine),
      TokenKind::Global => self.global_stmt(engine),
      TokenKind::Assert => self.assert_stmt(engine),
      TokenKind::Import => self.import_stmt(engine),
      TokenKind::From => self.from_import_stmt(engine),
      TokenKind::Print => self.print_stmt(engine),
      TokenKind::Exec => self.exec_stmt(engine),
      TokenKind::Yield => self.yield_stmt(engine),
      _ => self.expr_stmt(engine),
    }
  }

  /// `suite: simple_stmt | NEWLINE INDENT stmt+ DEDENT`
  pub(crate) fn suite(&mut self, engine: &mut DiagnosticEngine) -> Result<Vec<Stmt>, ()> {
    if !self.at(TokenKind::Newline) {
      return self.simple_stmt_line(engine);
    }
    self.bump(engine);
    self.expect(TokenKind::Indent, engine)?;
    self.skip_newlines(engine);

    let mut body = Vec::new();
    while !self.at(TokenKind::Dedent) && !self.at(TokenKind::EndMarker) {
      body.extend(self.statement_line_inner(engine)?);
      self.skip_newlines(engine);
    }
    self.expect(TokenKind::Dedent, engine)?;

    if body.is_empty() {
      self.error_unexpected("a statement", engine);
      return Err(());
    }
    Ok(body)
  }

  /// `testlist: test (',' test)* [',']` — a bare expression, or a
  /// no-parens `Tuple` once a comma appears.
  pub(crate) fn testlist(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.test(engine)?;
    if !self.at(TokenKind::Comma) {
      return Ok(first);
    }
    let mut elts = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at_testlist_stop() {
        break;
      }
      elts.push(self.test(engine)?);
    }
    let loc = elts.first().unwrap().loc().join(elts.last().unwrap().loc());
    Ok(Expr::Tuple {
      elts,
      ctx: Ctx::Unset,
      begin_loc: None,
      end_loc: None,
      loc,
    })
  }

  fn at_testlist_stop(&self) -> bool {
    matches!(self.current().kind, TokenKind::Assign | TokenKind::Colon) || self.at_stmt_stop()
  }

  pub(crate) fn at_stmt_stop(&self) -> bool {
    matches!(self.current().kind, TokenKind::Newline | TokenKind::Semicolon | TokenKind::EndMarker)
  }

  /// Every lvalue-capable shape the grammar admits for assignment, `del`,
  /// `for`, and `with ... as`: a name, an attribute/subscript, or a
  /// tuple/list of those, recursively. The parser never sets `ctx` itself
  /// (see `ast::operator::Ctx`) — this only checks syntactic legality.
  pub(crate) fn validate_assign_target(&self, target: &Expr, engine: &mut DiagnosticEngine) -> Result<(), ()> {
    match target {
      Expr::Name { .. } | Expr::Attribute { .. } | Expr::Subscript { .. } => Ok(()),
      Expr::Tuple { elts, .. } | Expr::List { elts, .. } => {
        for elt in elts {
          self.validate_assign_target(elt, engine)?;
        }
        Ok(())
      },
      _ => {
        self.error_at(
          DiagnosticError::InvalidAssignmentTarget,
          "cannot assign to this expression",
          target.loc().clone(),
          engine,
        );
        Err(())
      },
    }
  }
}
