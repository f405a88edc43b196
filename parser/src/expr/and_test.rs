use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{BoolOperator, Expr};
use crate::Parser;

impl Parser {
  /// `and_test: not_test ('and' not_test)*`
  pub(crate) fn and_test(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.not_test(engine)?;
    if !self.at(TokenKind::And) {
      return Ok(first);
    }

    let mut values = vec![first];
    let mut op_locs = Vec::new();
    while self.at(TokenKind::And) {
      op_locs.push(self.bump(engine).range);
      values.push(self.not_test(engine)?);
    }
    let loc = values.first().unwrap().loc().join(values.last().unwrap().loc());
    Ok(Expr::BoolOp {
      op: BoolOperator::And,
      values,
      op_locs,
      loc,
    })
  }
}
