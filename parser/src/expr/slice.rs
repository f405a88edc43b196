use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{ExtSlice, Index, Slice, SliceRange};
use crate::Parser;

impl Parser {
  /// `subscriptlist: subscript (',' subscript)* [',']` — a single dim
  /// returns that dim directly; more than one (or a trailing comma) wraps
  /// them in `ExtSlice`.
  pub(crate) fn subscript_list(&mut self, engine: &mut DiagnosticEngine) -> Result<Slice, ()> {
    let first = self.subscript_dim(engine)?;
    if !self.at(TokenKind::Comma) {
      return Ok(first);
    }

    let mut dims = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at(TokenKind::RBracket) {
        break;
      }
      dims.push(self.subscript_dim(engine)?);
    }
    let loc = dims.first().unwrap().loc().join(dims.last().unwrap().loc());
    Ok(Slice::ExtSlice(ExtSlice { dims, loc }))
  }

  /// `subscript: '.' '.' '.' | test | [test] ':' [test] [sliceop]`
  fn subscript_dim(&mut self, engine: &mut DiagnosticEngine) -> Result<Slice, ()> {
    if self.at(TokenKind::Ellipsis) {
      let token = self.bump(engine);
      let value = Box::new(crate::ast::Expr::Ellipsis { loc: token.range.clone() });
      return Ok(Slice::Index(Index { value, loc: token.range }));
    }

    let lower = if self.at(TokenKind::Colon) { None } else { Some(Box::new(self.test(engine)?)) };

    if !self.at(TokenKind::Colon) {
      let value = lower.expect("a subscript dim with no ':' must have parsed a value");
      let loc = value.loc().clone();
      return Ok(Slice::Index(Index { value, loc }));
    }

    let bound_colon = self.bump(engine);
    let mut loc = lower.as_ref().map(|e| e.loc().join(&bound_colon.range)).unwrap_or_else(|| bound_colon.range.clone());

    let upper = if self.at_slice_stop() {
      None
    } else {
      let value = Box::new(self.test(engine)?);
      loc = loc.join(value.loc());
      Some(value)
    };

    let mut step_colon_loc = None;
    let mut step = None;
    if self.at(TokenKind::Colon) {
      let colon = self.bump(engine);
      loc = loc.join(&colon.range);
      step_colon_loc = Some(colon.range);
      if !self.at_slice_stop() {
        let value = Box::new(self.test(engine)?);
        loc = loc.join(value.loc());
        step = Some(value);
      }
    }

    Ok(Slice::Slice(SliceRange {
      lower,
      upper,
      step,
      bound_colon_loc: bound_colon.range,
      step_colon_loc,
      loc,
    }))
  }

  fn at_slice_stop(&self) -> bool {
    self.at(TokenKind::Comma) || self.at(TokenKind::RBracket) || self.at(TokenKind::Colon)
  }
}
