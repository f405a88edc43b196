use diagnostic::{DiagnosticEngine, Range};
use lexer::token::TokenKind;

use crate::ast::{CmpOp, CmpOperator, Expr};
use crate::Parser;

impl Parser {
  /// `comparison: expr (comp_op expr)*` — collapses into one `Compare` node
  /// with parallel `ops`/`comparators` rather than nested binary nodes.
  pub(crate) fn comparison(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let left = self.bitor(engine)?;
    if !self.at_comp_op() {
      return Ok(left);
    }

    let mut ops = Vec::new();
    let mut comparators = Vec::new();
    while self.at_comp_op() {
      ops.push(self.comp_op(engine)?);
      comparators.push(self.bitor(engine)?);
    }
    let loc = left.loc().join(comparators.last().unwrap().loc());
    Ok(Expr::Compare {
      left: Box::new(left),
      ops,
      comparators,
      loc,
    })
  }

  fn at_comp_op(&self) -> bool {
    matches!(
      self.current().kind,
      TokenKind::Lt
        | TokenKind::LtE
        | TokenKind::Gt
        | TokenKind::GtE
        | TokenKind::EqEq
        | TokenKind::NotEq
        | TokenKind::LtGt
        | TokenKind::In
        | TokenKind::Not
        | TokenKind::Is
    )
  }

  /// A single comparison operator, including the two-token spellings `not
  /// in` and `is not` whose combined `loc` spans both keywords.
  fn comp_op(&mut self, engine: &mut DiagnosticEngine) -> Result<CmpOp, ()> {
    let token = self.bump(engine);
    match token.kind {
      TokenKind::Lt => Ok(CmpOp::new(CmpOperator::Lt, token.range)),
      TokenKind::LtE => Ok(CmpOp::new(CmpOperator::LtE, token.range)),
      TokenKind::Gt => Ok(CmpOp::new(CmpOperator::Gt, token.range)),
      TokenKind::GtE => Ok(CmpOp::new(CmpOperator::GtE, token.range)),
      TokenKind::EqEq => Ok(CmpOp::new(CmpOperator::Eq, token.range)),
      TokenKind::NotEq | TokenKind::LtGt => Ok(CmpOp::new(CmpOperator::NotEq, token.range)),
      TokenKind::In => Ok(CmpOp::new(CmpOperator::In, token.range)),
      TokenKind::Is => {
        if self.at(TokenKind::Not) {
          let not_token = self.bump(engine);
          let loc: Range = token.range.join(&not_token.range);
          Ok(CmpOp::new(CmpOperator::IsNot, loc))
        } else {
          Ok(CmpOp::new(CmpOperator::Is, token.range))
        }
      },
      TokenKind::Not => {
        let in_token = self.expect(TokenKind::In, engine)?;
        let loc = token.range.join(&in_token.range);
        Ok(CmpOp::new(CmpOperator::NotIn, loc))
      },
      _ => {
        self.error_unexpected("a comparison operator", engine);
        Err(())
      },
    }
  }
}
