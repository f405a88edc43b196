use diagnostic::DiagnosticEngine;
use lexer::token::TokenKind;

use crate::ast::Stmt;
use crate::Parser;

impl Parser {
  /// `print_stmt: 'print' ( [ test (',' test)* [','] ] | '>>' test [ (',' test)+ [','] ] )`
  ///
  /// The lexer only ever hands back a `Print` token while
  /// `version.has_print_statement()` (see `lexer::keywords::lookup`); under
  /// a later version `print` tokenizes as a plain identifier and never
  /// reaches this production at all.
  pub(crate) fn print_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);

    let mut dest = None;
    let mut values = Vec::new();
    let mut nl = true;
    let mut end = keyword.range.clone();

    if self.at(TokenKind::RShift) {
      self.bump(engine);
      let value = self.test(engine)?;
      end = value.loc().clone();
      dest = Some(value);
    }

    if dest.is_some() {
      while self.eat(TokenKind::Comma, engine) {
        if self.at_stmt_stop() {
          nl = false;
          break;
        }
        let value = self.test(engine)?;
        end = value.loc().clone();
        values.push(value);
      }
    } else if !self.at_stmt_stop() {
      let first = self.test(engine)?;
      end = first.loc().clone();
      values.push(first);
      while self.eat(TokenKind::Comma, engine) {
        if self.at_stmt_stop() {
          nl = false;
          break;
        }
        let value = self.test(engine)?;
        end = value.loc().clone();
        values.push(value);
      }
    }

    let loc = keyword.range.join(&end);
    Ok(Stmt::Print {
      dest,
      values,
      nl,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `exec_stmt: 'exec' expr ['in' test [',' test]]` — same version gating
  /// as `print_stmt`, enforced at tokenization.
  pub(crate) fn exec_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let body = self.or_test(engine)?;
    let mut end = body.loc().clone();
    let mut globals = None;
    let mut locals = None;

    if self.eat(TokenKind::In, engine) {
      let value = self.test(engine)?;
      end = value.loc().clone();
      globals = Some(value);
      if self.eat(TokenKind::Comma, engine) {
        let value = self.test(engine)?;
        end = value.loc().clone();
        locals = Some(value);
      }
    }

    let loc = keyword.range.join(&end);
    Ok(Stmt::Exec {
      body,
      globals,
      locals,
      keyword_loc: keyword.range,
      loc,
    })
  }
}
