use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `power: atom trailer* ['**' factor]` — right-associative, so the
  /// exponent recurses into `factor` rather than `power`.
  pub(crate) fn power(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let base = self.atom_trailers(engine)?;
    if !self.at(TokenKind::DoubleStar) {
      return Ok(base);
    }
    let token = self.bump(engine);
    let exponent = self.factor(engine)?;
    let loc = base.loc().join(exponent.loc());
    Ok(Expr::BinOp {
      left: Box::new(base),
      op: Op::new(Operator::Pow, token.range),
      right: Box::new(exponent),
      loc,
    })
  }
}
