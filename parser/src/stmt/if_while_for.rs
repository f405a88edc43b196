use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Ctx, Expr, Stmt};
use crate::Parser;

impl Parser {
  /// `if_stmt: 'if' test ':' suite ('elif' test ':' suite)* ['else' ':' suite]`
  ///
  /// `elif` reparses as a nested `If` that is the sole element of `orelse`
  /// (its own `keyword_loc` points at the `elif` token); a trailing `else`
  /// has no keyword location of its own, only its suite.
  pub(crate) fn if_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let test = self.test(engine)?;
    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;

    let (orelse, end) = if self.at(TokenKind::Elif) {
      let elif = self.if_stmt(engine)?;
      let end = elif.loc().clone();
      (vec![elif], end)
    } else if self.eat(TokenKind::Else, engine) {
      self.expect(TokenKind::Colon, engine)?;
      let orelse = self.suite(engine)?;
      let end = orelse.last().unwrap().loc().clone();
      (orelse, end)
    } else {
      let end = body.last().unwrap().loc().clone();
      (Vec::new(), end)
    };

    let loc = keyword.range.join(&end);
    Ok(Stmt::If {
      test,
      body,
      orelse,
      keyword_loc: keyword.range,
      colon_loc: colon.range,
      loc,
    })
  }

  /// `while_stmt: 'while' test ':' suite ['else' ':' suite]`
  pub(crate) fn while_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let test = self.test(engine)?;
    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;

    let mut orelse = Vec::new();
    let mut else_loc = None;
    let mut else_colon_loc = None;
    let mut end = body.last().unwrap().loc().clone();
    if self.at(TokenKind::Else) {
      let else_token = self.bump(engine);
      let else_colon = self.expect(TokenKind::Colon, engine)?;
      orelse = self.suite(engine)?;
      end = orelse.last().unwrap().loc().clone();
      else_loc = Some(else_token.range);
      else_colon_loc = Some(else_colon.range);
    }

    let loc = keyword.range.join(&end);
    Ok(Stmt::While {
      test,
      body,
      orelse,
      keyword_loc: keyword.range,
      colon_loc: colon.range,
      else_loc,
      else_colon_loc,
      loc,
    })
  }

  /// `for_stmt: 'for' exprlist 'in' testlist ':' suite ['else' ':' suite]`
  pub(crate) fn for_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let target = self.for_target(engine)?;
    let in_token = self.expect(TokenKind::In, engine)?;
    let iter = self.testlist(engine)?;
    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;

    let mut orelse = Vec::new();
    let mut else_loc = None;
    let mut else_colon_loc = None;
    let mut end = body.last().unwrap().loc().clone();
    if self.at(TokenKind::Else) {
      let else_token = self.bump(engine);
      let else_colon = self.expect(TokenKind::Colon, engine)?;
      orelse = self.suite(engine)?;
      end = orelse.last().unwrap().loc().clone();
      else_loc = Some(else_token.range);
      else_colon_loc = Some(else_colon.range);
    }

    let loc = keyword.range.join(&end);
    Ok(Stmt::For {
      target,
      iter,
      body,
      orelse,
      keyword_loc: keyword.range,
      in_loc: in_token.range,
      colon_loc: colon.range,
      else_loc,
      else_colon_loc,
      loc,
    })
  }

  /// `exprlist: expr (',' expr)* [',']`, restricted to the shapes a `for`
  /// target admits.
  fn for_target(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.or_test(engine)?;
    self.validate_assign_target(&first, engine)?;
    if !self.at(TokenKind::Comma) {
      return Ok(first);
    }
    let mut elts = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at(TokenKind::In) {
        break;
      }
      let elt = self.or_test(engine)?;
      self.validate_assign_target(&elt, engine)?;
      elts.push(elt);
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
}
