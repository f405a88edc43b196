use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Expr, Op, Operator};
use crate::Parser;

impl Parser {
  /// `term: factor (('*'|'/'|'%'|'//') factor)*`
  pub(crate) fn term(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut left = self.factor(engine)?;
    loop {
      if self.at(TokenKind::DoubleSlash) && !self.version.has_floor_division() {
        let loc = self.current().range.clone();
        self.error_version_mismatch("floor division", loc, engine);
        return Err(());
      }
      let op_kind = match self.current().kind {
        TokenKind::Star => Operator::Mult,
        TokenKind::Slash => Operator::Div,
        TokenKind::Percent => Operator::Mod,
        TokenKind::DoubleSlash => Operator::FloorDiv,
        _ => break,
      };
      let token = self.bump(engine);
      let right = self.factor(engine)?;
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
