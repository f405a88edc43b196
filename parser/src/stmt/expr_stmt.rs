use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Op, Operator, Stmt};
use crate::Parser;

impl Parser {
  /// `expr_stmt: testlist (augassign testlist | ('=' testlist)*)`
  pub(crate) fn expr_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let first = self.testlist(engine)?;

    if self.at_aug_assign() {
      self.validate_assign_target(&first, engine)?;
      let op = self.aug_assign_op(engine)?;
      let value = self.testlist(engine)?;
      let loc = first.loc().join(value.loc());
      return Ok(Stmt::AugAssign { target: first, op, value, loc });
    }

    if self.at(TokenKind::Assign) {
      self.validate_assign_target(&first, engine)?;
      let mut targets = vec![first];
      let mut op_locs = Vec::new();
      let value;
      loop {
        let equals = self.bump(engine);
        op_locs.push(equals.range);
        let next = self.testlist(engine)?;
        if self.at(TokenKind::Assign) {
          self.validate_assign_target(&next, engine)?;
          targets.push(next);
        } else {
          value = next;
          break;
        }
      }
      let loc = targets.first().unwrap().loc().join(value.loc());
      return Ok(Stmt::Assign { targets, value, op_locs, loc });
    }

    let loc = first.loc().clone();
    Ok(Stmt::Expr { value: first, loc })
  }

  fn at_aug_assign(&self) -> bool {
    matches!(
      self.current().kind,
      TokenKind::PlusEq
        | TokenKind::MinusEq
        | TokenKind::StarEq
        | TokenKind::SlashEq
        | TokenKind::PercentEq
        | TokenKind::AmpEq
        | TokenKind::PipeEq
        | TokenKind::CaretEq
        | TokenKind::LShiftEq
        | TokenKind::RShiftEq
        | TokenKind::DoubleStarEq
        | TokenKind::DoubleSlashEq
    )
  }

  /// `augassign: '+=' | '-=' | '*=' | '/=' | '%=' | '**=' | '//='
  ///           | '>>=' | '<<=' | '&=' | '|=' | '^='` — each spelling is a
  /// single lexer token, so `op.loc` is just that token's own range.
  fn aug_assign_op(&mut self, engine: &mut DiagnosticEngine) -> Result<Op, ()> {
    let token = self.bump(engine);
    let kind = match token.kind {
      TokenKind::PlusEq => Operator::Add,
      TokenKind::MinusEq => Operator::Sub,
      TokenKind::StarEq => Operator::Mult,
      TokenKind::SlashEq => Operator::Div,
      TokenKind::PercentEq => Operator::Mod,
      TokenKind::AmpEq => Operator::BitAnd,
      TokenKind::PipeEq => Operator::BitOr,
      TokenKind::CaretEq => Operator::BitXor,
      TokenKind::LShiftEq => Operator::LShift,
      TokenKind::RShiftEq => Operator::RShift,
      TokenKind::DoubleStarEq => Operator::Pow,
      TokenKind::DoubleSlashEq => {
        if !self.version.has_floor_division() {
          self.error_version_mismatch("floor-division assignment", token.range.clone(), engine);
          return Err(());
        }
        Operator::FloorDiv
      },
      _ => unreachable!("at_aug_assign guards this match"),
    };
    Ok(Op::new(kind, token.range))
  }
}
