use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::Expr;
use crate::Parser;

impl Parser {
  /// `test: lambdef | or_test ['if' or_test 'else' test]` — the entry point
  /// for any expression below statement level.
  pub(crate) fn test(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    if self.at(TokenKind::Lambda) {
      return self.lambda_expr(engine);
    }

    let body = self.or_test(engine)?;

    if self.at(TokenKind::If) {
      let if_token = self.bump(engine);
      let test = self.or_test(engine)?;
      let else_token = self.expect(TokenKind::Else, engine)?;
      let orelse = self.test(engine)?;
      let loc = body.loc().join(orelse.loc());
      return Ok(Expr::IfExp {
        body: Box::new(body),
        test: Box::new(test),
        orelse: Box::new(orelse),
        if_loc: if_token.range,
        else_loc: else_token.range,
        loc,
      });
    }

    Ok(body)
  }
}
