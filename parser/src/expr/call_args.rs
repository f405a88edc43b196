use diagnostic::types::error::DiagnosticError;
use diagnostic::{DiagnosticEngine, Range};
use lexer::token::TokenKind;

use crate::ast::{Expr, Keyword};
use crate::Parser;

impl Parser {
  /// `trailer: '(' [arglist] ')'` — `arglist: argument (',' argument)* [',']`,
  /// where `argument` is `test | test '=' test | '*' test | '**' test`.
  pub(crate) fn call_trailer(&mut self, func: Expr, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let begin = self.bump(engine);

    let mut args = Vec::new();
    let mut keywords: Vec<Keyword> = Vec::new();
    let mut starargs = None;
    let mut kwargs = None;
    let mut star_loc = None;
    let mut dstar_loc = None;

    if !self.at(TokenKind::RParen) {
      loop {
        if self.at(TokenKind::DoubleStar) {
          let token = self.bump(engine);
          if dstar_loc.is_some() {
            self.error_at(DiagnosticError::MultipleStarArgs, "a call may have only one '**' argument", token.range, engine);
            return Err(());
          }
          dstar_loc = Some(token.range);
          kwargs = Some(Box::new(self.test(engine)?));
        } else if self.at(TokenKind::Star) {
          let token = self.bump(engine);
          if star_loc.is_some() {
            self.error_at(DiagnosticError::MultipleStarArgs, "a call may have only one '*' argument", token.range, engine);
            return Err(());
          }
          if dstar_loc.is_some() {
            self.error_at(
              DiagnosticError::PositionalAfterKeyword,
              "'*' argument must come before '**' argument",
              token.range,
              engine,
            );
            return Err(());
          }
          star_loc = Some(token.range);
          starargs = Some(Box::new(self.test(engine)?));
        } else {
          let value = self.test(engine)?;
          if self.at(TokenKind::Assign) {
            let name = match &value {
              Expr::Name { id, .. } => id.clone(),
              _ => {
                self.error_at(
                  DiagnosticError::InvalidAssignmentTarget,
                  "keyword argument name must be an identifier",
                  value.loc().clone(),
                  engine,
                );
                return Err(());
              },
            };
            if keywords.iter().any(|kw| kw.arg == name) {
              self.error_at(
                DiagnosticError::DuplicateKeywordArgument,
                "keyword argument repeated in the same call",
                value.loc().clone(),
                engine,
              );
              return Err(());
            }
            let equals = self.bump(engine);
            let kw_value = self.test(engine)?;
            let loc: Range = value.loc().join(kw_value.loc());
            keywords.push(Keyword {
              arg: name,
              arg_loc: value.loc().clone(),
              equals_loc: equals.range,
              loc,
              value: kw_value,
            });
          } else if !keywords.is_empty() {
            self.error_at(
              DiagnosticError::PositionalAfterKeyword,
              "positional argument follows keyword argument",
              value.loc().clone(),
              engine,
            );
            return Err(());
          } else {
            args.push(value);
          }
        }

        if !self.eat(TokenKind::Comma, engine) {
          break;
        }
        if self.at(TokenKind::RParen) {
          break;
        }
      }
    }

    let end = self.expect(TokenKind::RParen, engine)?;
    let loc = func.loc().join(&end.range);
    Ok(Expr::Call {
      func: Box::new(func),
      args,
      keywords,
      starargs,
      kwargs,
      star_loc,
      dstar_loc,
      begin_loc: begin.range,
      end_loc: end.range,
      loc,
    })
  }
}
