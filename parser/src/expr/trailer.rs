use diagnostic::DiagnosticEngine;
use lexer::token::{TokenKind, TokenValue};

use crate::ast::{Ctx, Expr};
use crate::Parser;

impl Parser {
  /// `atom_trailer: atom trailer*` — `(args)`, `[slice]`, and `.name` apply
  /// left-to-right to whatever precedes them.
  pub(crate) fn atom_trailers(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let mut value = self.atom(engine)?;
    loop {
      value = match self.current().kind {
        TokenKind::LParen => self.call_trailer(value, engine)?,
        TokenKind::LBracket => self.subscript_trailer(value, engine)?,
        TokenKind::Dot => self.attribute_trailer(value, engine)?,
        _ => break,
      };
    }
    Ok(value)
  }

  fn attribute_trailer(&mut self, value: Expr, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let dot = self.bump(engine);
    let name_token = self.expect(TokenKind::Identifier, engine)?;
    let attr = match name_token.value {
      Some(TokenValue::Ident(name)) => name,
      _ => unreachable!("Identifier token always carries TokenValue::Ident"),
    };
    let loc = value.loc().join(&name_token.range);
    Ok(Expr::Attribute {
      value: Box::new(value),
      attr,
      ctx: Ctx::Unset,
      dot_loc: dot.range,
      attr_loc: name_token.range,
      loc,
    })
  }

  fn subscript_trailer(&mut self, value: Expr, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let begin = self.bump(engine);
    let slice = self.subscript_list(engine)?;
    let end = self.expect(TokenKind::RBracket, engine)?;
    let loc = value.loc().join(&end.range);
    Ok(Expr::Subscript {
      value: Box::new(value),
      slice: Box::new(slice),
      ctx: Ctx::Unset,
      begin_loc: begin.range,
      end_loc: end.range,
      loc,
    })
  }
}
