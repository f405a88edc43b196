use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `and_expr: shift_expr ('&' shift_expr)*`
  pub(crate) fn bitand(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut left = self.shift(engine)?;
    while self.at(TokenKind::Amp) {
      let token = self.bump(engine);
      let right = self.shift(engine)?;
      let loc = left.loc().join(right.loc());
      left = Expr::BinOp {
        left: Box::new(left),
        op: Op::new(Operator::BitAnd, token.range),
        right: Box::new(right),
        loc,
      };
    }
    Ok(left)
  }
}
