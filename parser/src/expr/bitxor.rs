use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `xor_expr: and_expr ('^' and_expr)*`
  pub(crate) fn bitxor(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut left = self.bitand(engine)?;
    while self.at(TokenKind::Caret) {
      let token = self.bump(engine);
      let right = self.bitand(engine)?;
      let loc = left.loc().join(right.loc());
      left = Expr::BinOp {
        left: Box::new(left),
        op: Op::new(Operator::BitXor, token.range),
        right: Box::new(right),
        loc,
      };
    }
    Ok(left)
  }
}
