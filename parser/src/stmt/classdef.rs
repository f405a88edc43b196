use diagnostic::DiagnosticEngine;
use lexer::token::{TokenKind, TokenValue};

use crate::ast::{Expr, Stmt};
use crate::Parser;

impl Parser {
  /// `decorators: decorator+` then one `classdef` or `funcdef`, per
  /// `decorated: decorators (classdef | funcdef)`.
  pub(crate) fn decorated(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let mut decorator_list = Vec::new();
    while self.at(TokenKind::At) {
      self.bump(engine);
      let expr = self.or_test(engine)?;
      decorator_list.push(expr);
      self.expect(TokenKind::Newline, engine)?;
    }
    match self.current().kind {
      TokenKind::Def => self.funcdef(engine, decorator_list),
      TokenKind::Class => self.classdef(engine, decorator_list),
      _ => {
        self.error_unexpected("'def' or 'class'", engine);
        Err(())
      },
    }
  }

  /// `classdef: 'class' NAME ['(' [testlist] ')'] ':' suite`
  pub(crate) fn classdef(&mut self, engine: &mut DiagnosticEngine, decorator_list: Vec<Expr>) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let name_token = self.expect(TokenKind::Identifier, engine)?;
    let name = match name_token.value {
      Some(TokenValue::Ident(name)) => name,
      _ => unreachable!("Identifier token always carries TokenValue::Ident"),
    };
    let name_loc = name_token.range;

    let mut bases = Vec::new();
    let mut begin_loc = None;
    let mut end_loc = None;
    if self.at(TokenKind::LParen) {
      let begin = self.bump(engine);
      if !self.at(TokenKind::RParen) {
        bases.push(self.test(engine)?);
        while self.eat(TokenKind::Comma, engine) {
          if self.at(TokenKind::RParen) {
            break;
          }
          bases.push(self.test(engine)?);
        }
      }
      let end = self.expect(TokenKind::RParen, engine)?;
      begin_loc = Some(begin.range);
      end_loc = Some(end.range);
    }

    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;

    let start = decorator_list.first().map(|d| d.loc().clone()).unwrap_or_else(|| keyword.range.clone());
    let end = body.last().unwrap().loc().clone();
    let loc = start.join(&end);

    Ok(Stmt::ClassDef {
      name,
      name_loc,
      bases,
      body,
      decorator_list,
      keyword_loc: keyword.range,
      begin_loc,
      end_loc,
      colon_loc: colon.range,
      loc,
    })
  }
}
