use diagnostic::{DiagnosticEngine, Range};
use lexer::token::{TokenKind, TokenValue};

use crate::ast::{Arg, Arguments};
use crate::Parser;

impl Parser {
  /// `parameters: '(' [varargslist] ')'`, used by both `funcdef` and
  /// `lambda`'s parenthesized form (`lambda` itself uses `varargslist`
  /// directly, without the surrounding parens).
  pub(crate) fn parameters(&mut self, engine: &mut DiagnosticEngine) -> Result<(Arguments, Range, Range), ()> {
    let begin = self.expect(TokenKind::LParen, engine)?;
    let args = if self.at(TokenKind::RParen) {
      Arguments::default()
    } else {
      self.varargslist(engine)?
    };
    let end = self.expect(TokenKind::RParen, engine)?;
    Ok((args, begin.range, end.range))
  }

  /// `varargslist: (fpdef ['=' test] ',')* ('*' NAME [',' '**' NAME] | '**' NAME)
  ///             | fpdef ['=' test] (',' fpdef ['=' test])* [',']`
  ///
  /// Tuple-destructuring parameters (`def f((a, b)): ...`) are not
  /// represented in this grammar's `Arg`; only plain names are accepted.
  pub(crate) fn varargslist(&mut self, engine: &mut DiagnosticEngine) -> Result<Arguments, ()> {
    let mut args = Vec::new();
    let mut defaults = Vec::new();
    let mut vararg = None;
    let mut kwarg = None;
    let mut star_loc = None;
    let mut dstar_loc = None;

    loop {
      if self.at(TokenKind::Star) {
        let token = self.bump(engine);
        star_loc = Some(token.range);
        vararg = Some(self.fp_name(engine)?);
      } else if self.at(TokenKind::DoubleStar) {
        let token = self.bump(engine);
        dstar_loc = Some(token.range);
        kwarg = Some(self.fp_name(engine)?);
      } else {
        let arg = self.fp_name(engine)?;
        if self.eat(TokenKind::Assign, engine) {
          defaults.push(self.test(engine)?);
        } else if !defaults.is_empty() {
          self.error_unexpected("a default value (non-default argument follows default argument)", engine);
          return Err(());
        }
        args.push(arg);
      }

      if !self.eat(TokenKind::Comma, engine) {
        break;
      }
      if self.at(TokenKind::RParen) || self.at(TokenKind::Colon) {
        break;
      }
    }

    Ok(Arguments {
      args,
      defaults,
      vararg,
      kwarg,
      star_loc,
      dstar_loc,
    })
  }

  /// `fpdef: NAME` (see the module doc comment for the omitted tuple form).
  fn fp_name(&mut self, engine: &mut DiagnosticEngine) -> Result<Arg, ()> {
    let token = self.expect(TokenKind::Identifier, engine)?;
    let name = match token.value {
      Some(TokenValue::Ident(name)) => name,
      _ => unreachable!("Identifier token always carries TokenValue::Ident"),
    };
    Ok(Arg { arg: name, loc: token.range })
  }
}
