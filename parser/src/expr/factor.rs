use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, UnaryOp, UnaryOperator};
use crate::Parser;

impl Parser {
  /// `factor: ('+'|'-'|'~') factor | power`
  pub(crate) fn factor(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let op_kind = match self.current().kind {
      TokenKind::Plus => UnaryOperator::UAdd,
      TokenKind::Minus => UnaryOperator::USub,
      TokenKind::Tilde => UnaryOperator::Invert,
      _ => return self.power(engine),
    };
    let token = self.bump(engine);
    let operand = Box::new(self.factor(engine)?);
    let loc = token.range.join(operand.loc());
    Ok(Expr::UnaryOp {
      op: UnaryOp::new(op_kind, token.range),
      operand,
      loc,
    })
  }
}
