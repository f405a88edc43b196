use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, UnaryOp, UnaryOperator};
use crate::Parser;

impl Parser {
  /// `not_test: 'not' not_test | comparison`
  pub(crate) fn not_test(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    if self.at(TokenKind::Not) {
      let token = self.bump(engine);
      let operand = Box::new(self.not_test(engine)?);
      let loc = token.range.join(operand.loc());
      return Ok(Expr::UnaryOp {
        op: UnaryOp::new(UnaryOperator::Not, token.range),
        operand,
        loc,
      });
    }
    self.comparison(engine)
  }
}
