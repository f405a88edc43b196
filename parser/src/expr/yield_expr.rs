use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Ctx, Expr};
use crate::Parser;

impl Parser {
  /// `yield_expr: 'yield' [testlist]` — legal only inside a parenthesized
  /// context (enforced by the caller, `atom::paren_form`). A bare `yield` at
  /// statement level is handled separately in `stmt`.
  pub(crate) fn yield_expr(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let keyword = self.bump(engine);

    if self.at(TokenKind::RParen) {
      return Ok(Expr::Yield {
        value: None,
        loc: keyword.range.clone(),
        keyword_loc: keyword.range,
      });
    }

    let first = self.test(engine)?;
    let value = if self.at(TokenKind::Comma) {
      let mut elts = vec![first];
      while self.eat(TokenKind::Comma, engine) {
        if self.at(TokenKind::RParen) {
          break;
        }
        elts.push(self.test(engine)?);
      }
      let loc = elts.first().unwrap().loc().join(elts.last().unwrap().loc());
      Expr::Tuple {
        elts,
        ctx: Ctx::Unset,
        begin_loc: None,
        end_loc: None,
        loc,
      }
    } else {
      first
    };

    let loc = keyword.range.join(value.loc());
    Ok(Expr::Yield {
      value: Some(Box::new(value)),
      keyword_loc: keyword.range,
      loc,
    })
  }
}
