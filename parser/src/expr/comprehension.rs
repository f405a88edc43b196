use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Comprehension, Ctx, Expr};
use crate::Parser;

impl Parser {
  /// `comp_for: 'for' exprlist 'in' or_test [comp_iter]`
  /// `comp_iter: comp_for | comp_if` — a clause list keeps consuming `for`
  /// clauses as long as one follows the last `if` run.
  pub(crate) fn comprehension_clauses(&mut self, engine: &mut DiagnosticEngine) -> Result<Vec<Comprehension>, ()> {
    let mut generators = Vec::new();
    loop {
      let for_token = self.expect(TokenKind::For, engine)?;
      let target = self.comp_target(engine)?;
      let in_token = self.expect(TokenKind::In, engine)?;
      let iter = self.or_test(engine)?;

      let mut ifs = Vec::new();
      let mut if_locs = Vec::new();
      while self.at(TokenKind::If) {
        let if_token = self.bump(engine);
        ifs.push(self.or_test(engine)?);
        if_locs.push(if_token.range);
      }

      let mut loc = for_token.range.join(iter.loc());
      if let Some(last_if) = ifs.last() {
        loc = loc.join(last_if.loc());
      }
      generators.push(Comprehension {
        target,
        iter,
        ifs,
        for_loc: for_token.range,
        in_loc: in_token.range,
        if_locs,
        loc,
      });

      if !self.at(TokenKind::For) {
        break;
      }
    }
    Ok(generators)
  }

  /// `exprlist: expr (',' expr)* [',']`, restricted to comprehension
  /// targets: a bare name, an attribute/subscript, or a tuple of those.
  fn comp_target(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.or_test(engine)?;
    if !self.at(TokenKind::Comma) {
      return Ok(first);
    }
    let mut elts = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at(TokenKind::In) {
        break;
      }
      elts.push(self.or_test(engine)?);
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
