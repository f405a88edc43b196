use diagnostic::DiagnosticEngine;
use lexer::token::{TokenKind, TokenValue};

use crate::ast::{Ctx, Expr, NumKind};
use crate::Parser;

impl Parser {
  /// `atom: '(' ... ')' | '[' ... ']' | '{' ... '}' | '`' testlist1 '`'
  ///       | NAME | NUMBER | STRING+ | '...'`
  pub(crate) fn atom(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    match self.current().kind {
      TokenKind::Int | TokenKind::Float | TokenKind::Imaginary => self.number(engine),
      TokenKind::Str => self.string(engine),
      TokenKind::Identifier => {
        let token = self.bump(engine);
        let TokenValue::Ident(id) = token.value.unwrap() else {
          unreachable!("Identifier token always carries TokenValue::Ident")
        };
        Ok(Expr::Name {
          id,
          ctx: Ctx::Unset,
          loc: token.range,
        })
      },
      TokenKind::None_ | TokenKind::True_ | TokenKind::False_ => {
        let token = self.bump(engine);
        Ok(Expr::Name {
          id: token.kind.describe().trim_matches('\'').to_string(),
          ctx: Ctx::Unset,
          loc: token.range,
        })
      },
      TokenKind::Ellipsis => {
        let token = self.bump(engine);
        Ok(Expr::Ellipsis { loc: token.range })
      },
      TokenKind::Backtick => self.repr_expr(engine),
      TokenKind::LParen => self.paren_form(engine),
      TokenKind::LBracket => self.bracket_form(engine),
      TokenKind::LBrace => self.brace_form(engine),
      _ => {
        self.error_unexpected("an expression", engine);
        Err(())
      },
    }
  }

  fn number(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let token = self.bump(engine);
    let n = match token.value.unwrap() {
      TokenValue::Int(v) => NumKind::Int(v),
      TokenValue::Float(v) => NumKind::Float(v),
      TokenValue::Imaginary(v) => NumKind::Imaginary(v),
      _ => unreachable!("number token always carries a numeric TokenValue"),
    };
    Ok(Expr::Num { n, loc: token.range })
  }

  /// Adjacent string literals concatenate into a single `Str` node:
  /// `begin_loc` is the first literal's range, `end_loc` the last.
  fn string(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.bump(engine);
    let TokenValue::Str(mut value) = first.value.unwrap() else {
      unreachable!("Str token always carries TokenValue::Str")
    };
    let begin_loc = first.range.clone();
    let mut end_loc = first.range;
    while self.at(TokenKind::Str) {
      let token = self.bump(engine);
      let TokenValue::Str(piece) = token.value.unwrap() else {
        unreachable!("Str token always carries TokenValue::Str")
      };
      value.push_str(&piece);
      end_loc = token.range;
    }
    let loc = begin_loc.join(&end_loc);
    Ok(Expr::Str {
      value,
      begin_loc,
      end_loc,
      loc,
    })
  }

  fn repr_expr(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    if !self.version.has_backtick_repr() {
      let loc = self.current().range.clone();
      self.error_version_mismatch("backtick repr expressions", loc, engine);
      return Err(());
    }
    let begin = self.bump(engine);
    let value = Box::new(self.expr_list_or_single(engine)?);
    let end = self.expect(TokenKind::Backtick, engine)?;
    let loc = begin.range.join(&end.range);
    Ok(Expr::Repr {
      value,
      begin_loc: begin.range,
      end_loc: end.range,
      loc,
    })
  }

  /// `'(' [yield_expr | testlist_comp] ')'`: empty tuple, a parenthesized
  /// single expression (no `loc` widening), a tuple, or a generator
  /// expression.
  fn paren_form(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let begin = self.bump(engine);

    if self.at(TokenKind::RParen) {
      let end = self.bump(engine);
      let loc = begin.range.join(&end.range);
      return Ok(Expr::Tuple {
        elts: Vec::new(),
        ctx: Ctx::Unset,
        begin_loc: Some(begin.range),
        end_loc: Some(end.range),
        loc,
      });
    }

    if self.at(TokenKind::Yield) {
      let value = self.yield_expr(engine)?;
      self.expect(TokenKind::RParen, engine)?;
      return Ok(value);
    }

    let first = self.test(engine)?;

    if self.at(TokenKind::For) {
      let generators = self.comprehension_clauses(engine)?;
      let end = self.expect(TokenKind::RParen, engine)?;
      let loc = begin.range.join(&end.range);
      return Ok(Expr::GeneratorExp {
        elt: Box::new(first),
        generators,
        begin_loc: begin.range,
        end_loc: end.range,
        loc,
      });
    }

    if self.at(TokenKind::Comma) {
      let mut elts = vec![first];
      while self.eat(TokenKind::Comma, engine) {
        if self.at(TokenKind::RParen) {
          break;
        }
        elts.push(self.test(engine)?);
      }
      let end = self.expect(TokenKind::RParen, engine)?;
      let loc = begin.range.join(&end.range);
      return Ok(Expr::Tuple {
        elts,
        ctx: Ctx::Unset,
        begin_loc: Some(begin.range),
        end_loc: Some(end.range),
        loc,
      });
    }

    self.expect(TokenKind::RParen, engine)?;
    Ok(first)
  }

  /// `'[' [listmaker] ']'`: empty list, a list display, or a list comprehension.
  fn bracket_form(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let begin = self.bump(engine);

    if self.at(TokenKind::RBracket) {
      let end = self.bump(engine);
      let loc = begin.range.join(&end.range);
      return Ok(Expr::List {
        elts: Vec::new(),
        ctx: Ctx::Unset,
        begin_loc: begin.range,
        end_loc: end.range,
        loc,
      });
    }

    let first = self.test(engine)?;

    if self.at(TokenKind::For) {
      let generators = self.comprehension_clauses(engine)?;
      let end = self.expect(TokenKind::RBracket, engine)?;
      let loc = begin.range.join(&end.range);
      return Ok(Expr::ListComp {
        elt: Box::new(first),
        generators,
        begin_loc: begin.range,
        end_loc: end.range,
        loc,
      });
    }

    let mut elts = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at(TokenKind::RBracket) {
        break;
      }
      elts.push(self.test(engine)?);
    }
    let end = self.expect(TokenKind::RBracket, engine)?;
    let loc = begin.range.join(&end.range);
    Ok(Expr::List {
      elts,
      ctx: Ctx::Unset,
      begin_loc: begin.range,
      end_loc: end.range,
      loc,
    })
  }

  /// `'{' [dictorsetmaker] '}'`: empty dict, a dict/set display, or a
  /// dict/set comprehension (the latter two gated by grammar version).
  fn brace_form(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let begin = self.bump(engine);

    if self.at(TokenKind::RBrace) {
      let end = self.bump(engine);
      let loc = begin.range.join(&end.range);
      return Ok(Expr::Dict {
        keys: Vec::new(),
        values: Vec::new(),
        colon_locs: Vec::new(),
        begin_loc: begin.range,
        end_loc: end.range,
        loc,
      });
    }

    let first = self.test(engine)?;

    if self.at(TokenKind::Colon) {
      let colon = self.bump(engine);
      let value = self.test(engine)?;

      if self.at(TokenKind::For) {
        if !self.version.has_set_and_dict_comprehensions() {
          let loc = colon.range.clone();
          self.error_version_mismatch("dict comprehensions", loc, engine);
          return Err(());
        }
        let generators = self.comprehension_clauses(engine)?;
        let end = self.expect(TokenKind::RBrace, engine)?;
        let loc = begin.range.join(&end.range);
        return Ok(Expr::DictComp {
          key: Box::new(first),
          value: Box::new(value),
          generators,
          colon_loc: colon.range,
          begin_loc: begin.range,
          end_loc: end.range,
          loc,
        });
      }

      let mut keys = vec![first];
      let mut values = vec![value];
      let mut colon_locs = vec![colon.range];
      while self.eat(TokenKind::Comma, engine) {
        if self.at(TokenKind::RBrace) {
          break;
        }
        let k = self.test(engine)?;
        let colon = self.expect(TokenKind::Colon, engine)?;
        let v = self.test(engine)?;
        keys.push(k);
        values.push(v);
        colon_locs.push(colon.range);
      }
      let end = self.expect(TokenKind::RBrace, engine)?;
      let loc = begin.range.join(&end.range);
      return Ok(Expr::Dict {
        keys,
        values,
        colon_locs,
        begin_loc: begin.range,
        end_loc: end.range,
        loc,
      });
    }

    if !self.version.has_set_and_dict_comprehensions() {
      let loc = begin.range.clone();
      self.error_version_mismatch("set displays", loc, engine);
      return Err(());
    }

    if self.at(TokenKind::For) {
      let generators = self.comprehension_clauses(engine)?;
      let end = self.expect(TokenKind::RBrace, engine)?;
      let loc = begin.range.join(&end.range);
      return Ok(Expr::SetComp {
        elt: Box::new(first),
        generators,
        begin_loc: begin.range,
        end_loc: end.range,
        loc,
      });
    }

    let mut elts = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at(TokenKind::RBrace) {
        break;
      }
      elts.push(self.test(engine)?);
    }
    let end = self.expect(TokenKind::RBrace, engine)?;
    let loc = begin.range.join(&end.range);
    Ok(Expr::Set {
      elts,
      begin_loc: begin.range,
      end_loc: end.range,
      loc,
    })
  }

  /// Backtick repr wraps a `testlist1`: a single test, or a comma-separated
  /// list collapsed into a `Tuple` with no parens (`` `1, 2` ``).
  fn expr_list_or_single(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let first = self.test(engine)?;
    if !self.at(TokenKind::Comma) {
      return Ok(first);
    }
    let mut elts = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at(TokenKind::Backtick) {
        break;
      }
      elts.push(self.test(engine)?);
    }
    let loc = elts.first().unwrap().loc().join(elts.last().unwrap().loc());
    Ok(Expr::Tuple {
      elts,
      ctx: Ctx::Unset,
      begin_loc: None,
      end_loc: None,
      loc,
    })
  }
}
