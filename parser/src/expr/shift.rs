use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `shift_expr: arith_expr (('<<'|'>>') arith_expr)*`
  pub(crate) fn shift(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut left = self.arith(engine)?;
    loop {
      let op_kind = match self.current().kind {
        TokenKind::LShift => Operator::LShift,
        TokenKind::RShift => Operator::RShift,
        _ => break,
      };
      let token = self.bump(engine);
      let right = self.arith(engine)?;
      let loc = left.loc().join(right.loc());
      left = Expr::BinOp {
        left: Box::new(left),
        op: Op::new(op_kind, token.range),
        right: Box::new(right),
        loc,
      };
    }
    Ok(left)
  }
}
