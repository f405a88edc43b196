use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::{Arguments, Expr};
use crate::Parser;

impl Parser {
  /// `lambdef: 'lambda' [varargslist] ':' test`
  pub(crate) fn lambda_expr(&mut self, engine: &mut DiagnosticEngine) -> Result<Expr, ()> {
    let keyword = self.bump(engine);
    let args = if self.at(TokenKind::Colon) {
      Arguments::default()
    } else {
      self.varargslist(engine)?
    };
    let colon = self.expect(TokenKind::Colon, engine)?;
    let body = self.test(engine)?;
    let loc = keyword.range.join(body.loc());
    Ok(Expr::Lambda {
      args,
      body: Box::new(body),
      keyword_loc: keyword.range,
      colon_loc: colon.range,
      loc,
    })
  }
}
