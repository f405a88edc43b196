use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `arith_expr: term (('+'|'-') term)*`
  pub(crate) fn arith(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut left = self.term(engine)?;
    loop {
      let op_kind = match self.current().kind {
        TokenKind::Plus => Operator::Add,
        TokenKind::Minus => Operator::Sub,
        _ => break,
      };
      let token = self.bump(engine);
      let right = self.term(engine)?;
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
