use diagnostic::DiagnosticEngine;
use lexer::token::{TokenKind, TokenValue};

use crate::ast::Stmt;
use crate::Parser;

impl Parser {
  pub(crate) fn pass_stmt(&mut self, engine: &mut DiagnosticEngine) -> Stmt {
    let token = self.bump(engine);
    Stmt::Pass { loc: token.range }
  }

  pub(crate) fn break_stmt(&mut self, engine: &mut DiagnosticEngine) -> Stmt {
    let token = self.bump(engine);
    Stmt::Break { loc: token.range }
  }

  pub(crate) fn continue_stmt(&mut self, engine: &mut DiagnosticEngine) -> Stmt {
    let token = self.bump(engine);
    Stmt::Continue { loc: token.range }
  }

  /// `return_stmt: 'return' [testlist]`
  pub(crate) fn return_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let value = if self.at_stmt_stop() { None } else { Some(self.testlist(engine)?) };
    let end = value.as_ref().map(|v| v.loc().clone()).unwrap_or_else(|| keyword.range.clone());
    let loc = keyword.range.join(&end);
    Ok(Stmt::Return {
      value,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `raise_stmt: 'raise' [test [',' test [',' test]]]`
  pub(crate) fn raise_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let mut exc_type = None;
    let mut exc_inst = None;
    let mut exc_tback = None;
    let mut end = keyword.range.clone();

    if !self.at_stmt_stop() {
      let value = self.test(engine)?;
      end = value.loc().clone();
      exc_type = Some(value);
      if self.eat(TokenKind::Comma, engine) {
        let value = self.test(engine)?;
        end = value.loc().clone();
        exc_inst = Some(value);
        if self.eat(TokenKind::Comma, engine) {
          let value = self.test(engine)?;
          end = value.loc().clone();
          exc_tback = Some(value);
        }
      }
    }

    let loc = keyword.range.join(&end);
    Ok(Stmt::Raise {
      exc_type,
      exc_inst,
      exc_tback,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `del_stmt: 'del' exprlist`
  pub(crate) fn delete_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let first = self.or_test(engine)?;
    self.validate_assign_target(&first, engine)?;
    let mut targets = vec![first];
    while self.eat(TokenKind::Comma, engine) {
      if self.at_stmt_stop() {
        break;
      }
      let target = self.or_test(engine)?;
      self.validate_assign_target(&target, engine)?;
      targets.push(target);
    }
    let end = targets.last().unwrap().loc().clone();
    let loc = keyword.range.join(&end);
    Ok(Stmt::Delete {
      targets,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `global_stmt: 'global' NAME (',' NAME)*`
  pub(crate) fn global_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let mut names = Vec::new();
    let mut name_locs = Vec::new();
    loop {
      let token = self.expect(TokenKind::Identifier, engine)?;
      let name = match token.value {
        Some(TokenValue::Ident(name)) => name,
        _ => unreachable!("Identifier token always carries TokenValue::Ident"),
      };
      name_locs.push(token.range);
      names.push(name);
      if !self.eat(TokenKind::Comma, engine) {
        break;
      }
    }
    let loc = keyword.range.join(name_locs.last().unwrap());
    Ok(Stmt::Global {
      names,
      name_locs,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `assert_stmt: 'assert' test [',' test]`
  pub(crate) fn assert_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let test = self.test(engine)?;
    let mut end = test.loc().clone();
    let mut msg = None;
    if self.eat(TokenKind::Comma, engine) {
      let value = self.test(engine)?;
      end = value.loc().clone();
      msg = Some(value);
    }
    let loc = keyword.range.join(&end);
    Ok(Stmt::Assert {
      test,
      msg,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `yield_stmt: yield_expr` — the bare statement-level form; the
  /// parenthesized expression form goes through `Parser::yield_expr`
  /// directly from `atom::paren_form`.
  pub(crate) fn yield_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let value = self.yield_expr(engine)?;
    let loc = value.loc().clone();
    Ok(Stmt::Expr { value, loc })
  }
}
