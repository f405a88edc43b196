use diagnostic::DiagnosticEngine;
use lexer::token::{TokenKind, TokenValue};

use crate::ast::{Expr, Stmt};
use crate::Parser;

impl Parser {
  /// `funcdef: 'def' NAME parameters ':' suite`, with `decorator_list`
  /// already collected by `decorated` when a `@decorator` line preceded it.
  pub(crate) fn funcdef(&mut self, engine: &mut DiagnosticEngine, decorator_list: Vec<Expr>) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let name_token = self.expect(TokenKind::Identifier, engine)?;
    let name = match name_token.value {
      Some(TokenValue::Ident(name)) => name,
      _ => unreachable!("Identifier token always carries TokenValue::Ident"),
    };
    let name_loc = name_token.range;

    let (args, begin_loc, end_loc) = self.parameters(engine)?;
    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.suite(engine)?;

    let start = decorator_list.first().map(|d| d.loc().clone()).unwrap_or_else(|| keyword.range.clone());
    let end = body.last().unwrap().loc().clone();
    let loc = start.join(&end);

    Ok(Stmt::FunctionDef {
      name,
      name_loc,
      args,
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
