use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{ExceptHandler, Stmt};
use crate::Parser;

impl Parser {
  /// `try_stmt: 'try' ':' suite
  ///     ((except_clause ':' suite)+ ['else' ':' suite] ['finally' ':' suite]
  ///      | 'finally' ':' suite)`
  ///
  /// A `try`/`except`/`finally` together has no single AST variant; it
  /// reparses as a `TryFinally` whose sole body statement is the
  /// `TryExcept`, mirroring how the reference grammar itself desugars it.
  pub(crate) fn try_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;

    if self.at(TokenKind::Finally) {
      let finally_token = self.bump(engine);
      let finally_colon = self.expect(TokenKind::Colon, engine)?;
      let finalbody = self.suite(engine)?;
      let end = finalbody.last().unwrap().loc().clone();
      let loc = keyword.range.join(&end);
      return Ok(Stmt::TryFinally {
        body,
        finalbody,
        keyword_loc: keyword.range,
        colon_loc: colon.range,
        finally_loc: finally_token.range,
        finally_colon_loc: finally_colon.range,
        loc,
      });
    }

    let mut handlers = Vec::new();
    while self.at(TokenKind::Except) {
      handlers.push(self.except_clause(engine)?);
    }
    if handlers.is_empty() {
      self.error_unexpected("'except' or 'finally'", engine);
      return Err(());
    }

    let mut orelse = Vec::new();
    let mut else_loc = None;
    let mut else_colon_loc = None;
    let mut end = handlers.last().unwrap().loc.clone();
    if self.at(TokenKind::Else) {
      let else_token = self.bump(engine);
      let else_colon = self.expect(TokenKind::Colon, engine)?;
      orelse = self.suite(engine)?;
      end = orelse.last().unwrap().loc().clone();
      else_loc = Some(else_token.range);
      else_colon_loc = Some(else_colon.range);
    }

    let try_except = Stmt::TryExcept {
      body,
      handlers,
      orelse,
      keyword_loc: keyword.range.clone(),
      colon_loc: colon.range.clone(),
      else_loc,
      else_colon_loc,
      loc: keyword.range.clone().join(&end),
    };

    if self.at(TokenKind::Finally) {
      let finally_token = self.bump(engine);
      let finally_colon = self.expect(TokenKind::Colon, engine)?;
      let finalbody = self.suite(engine)?;
      let end = finalbody.last().unwrap().loc().clone();
      let loc = keyword.range.join(&end);
      return Ok(Stmt::TryFinally {
        body: vec![try_except],
        finalbody,
        keyword_loc: keyword.range,
        colon_loc: colon.range,
        finally_loc: finally_token.range,
        finally_colon_loc: finally_colon.range,
        loc,
      });
    }

    Ok(try_except)
  }

  /// `except_clause: 'except' [test [('as' | ',') test]]`
  fn except_clause(&mut self, engine: &mut DiagnosticEngine) -> Result<ExceptHandler, ()> {
    let keyword = self.bump(engine);
    let mut kind = None;
    let mut name = None;
    let mut as_loc = None;

    if !self.at(TokenKind::Colon) {
      let value = self.test(engine)?;
      kind = Some(value);

      if self.at(TokenKind::As) {
        let as_token = self.bump(engine);
        as_loc = Some(as_token.range);
        name = Some(self.test(engine)?);
      } else if self.eat(TokenKind::Comma, engine) {
        name = Some(self.test(engine)?);
      }
    }

    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;
    let end = body.last().unwrap().loc().clone();
    let loc = keyword.range.join(&end);

    Ok(ExceptHandler {
      kind,
      name,
      body,
      keyword_loc: keyword.range,
      as_loc,
      colon_loc: colon.range,
      loc,
    })
  }

  /// `with_stmt: 'with' test ['as' expr] ':' suite`
  pub(crate) fn with_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    if !self.version.has_with_statement() {
      self.error_version_mismatch("the 'with' statement", keyword.range.clone(), engine);
      return Err(());
    }

    let context_expr = self.test(engine)?;
    let mut optional_vars = None;
    let mut as_loc = None;
    if self.at(TokenKind::As) {
      let as_token = self.bump(engine);
      as_loc = Some(as_token.range);
      optional_vars = Some(self.test(engine)?);
    }

    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;
    let end = body.last().unwrap().loc().clone();
    let loc = keyword.range.join(&end);

    Ok(Stmt::With {
      context_expr,
      optional_vars,
      body,
      keyword_loc: keyword.range,
      as_loc,
      colon_loc: colon.range,
      loc,
    })
  }
}
