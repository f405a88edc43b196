use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `expr: xor_expr ('|' xor_expr)*`
  pub(crate) fn bitor(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut left = self.bitxor(engine)?;
    while self.at(TokenKind::Pipe) {
      let token = self.bump(engine);
      let right = self.bitxor(engine)?;
      let loc = left.loc().join(right.loc());
      left = Expr::BinOp {
        left: Box::new(left),
        op: Op::new(Operator::BitOr, token.range),
        right: Box::new(right),
        loc,
      };
    }
    Ok(left)
  }
}
