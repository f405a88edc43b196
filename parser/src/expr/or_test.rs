use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{BoolOperator, Expr};
use crate::Parser;

impl Parser {
  /// `or_test: and_test ('or' and_test)*` — a same-operator run collapses
  /// into one `BoolOp`; `op_locs.len() == values.len() - 1`.
  pub(crate) fn or_test(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.and_test(engine)?;
    if !self.at(TokenKind::Or) {
      return Ok(first);
    }

    let mut values = vec![first];
    let mut op_locs = Vec::new();
    while self.at(TokenKind::Or) {
      op_locs.push(self.bump(engine).range);
      values.push(self.and_test(engine)?);
    }
    let loc = values.first().unwrap().loc().join(values.last().unwrap().loc());
    Ok(Expr::BoolOp {
      op: BoolOperator::Or,
      values,
      op_locs,
      loc,
    })
  }
}
