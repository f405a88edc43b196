use diagnostic::{DiagnosticEngine, Range};
use lexer::token::{TokenKind, TokenValue};

use crate::ast::{Alias, Stmt};
use crate::Parser;

impl Parser {
  /// `import_name: 'import' dotted_as_names`
  pub(crate) fn import_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);
    let mut names = vec![self.dotted_as_name(engine)?];
    while self.eat(TokenKind::Comma, engine) {
      names.push(self.dotted_as_name(engine)?);
    }
    let loc = keyword.range.join(&names.last().unwrap().loc);
    Ok(Stmt::Import {
      names,
      keyword_loc: keyword.range,
      loc,
    })
  }

  /// `import_from: 'from' ('.'* dotted_name | '.'+) 'import'
  ///             ('*' | '(' import_as_names ')' | import_as_names)`
  pub(crate) fn from_import_stmt(&mut self, engine: &mut DiagnosticEngine) -> Result<Stmt, ()> {
    let keyword = self.bump(engine);

    let mut level = 0u32;
    let mut dots_loc: Option<Range> = None;
    while self.at(TokenKind::Dot) || self.at(TokenKind::Ellipsis) {
      let token = self.bump(engine);
      level += if token.kind == TokenKind::Ellipsis { 3 } else { 1 };
      dots_loc = Some(match dots_loc {
        Some(prev) => prev.join(&token.range),
        None => token.range.clone(),
      });
    }

    let (module, module_loc) = if self.at(TokenKind::Import) {
      ("".to_string(), dots_loc.clone().unwrap_or_else(|| keyword.range.clone()))
    } else {
      let (name, name_loc) = self.dotted_name(engine)?;
      let loc = dots_loc.clone().map(|d| d.join(&name_loc)).unwrap_or(name_loc);
      (name, loc)
    };

    let import_token = self.expect(TokenKind::Import, engine)?;

    let mut names = Vec::new();
    let end_loc;
    if self.at(TokenKind::Star) {
      let star = self.bump(engine);
      end_loc = star.range.clone();
      names.push(Alias {
        name: "*".to_string(),
        asname: None,
        name_loc: star.range.clone(),
        as_loc: None,
        asname_loc: None,
        loc: star.range,
      });
    } else if self.eat(TokenKind::LParen, engine) {
      names.push(self.import_as_name(engine)?);
      while self.eat(TokenKind::Comma, engine) {
        if self.at(TokenKind::RParen) {
          break;
        }
        names.push(self.import_as_name(engine)?);
      }
      let rparen = self.expect(TokenKind::RParen, engine)?;
      end_loc = rparen.range;
    } else {
      names.push(self.import_as_name(engine)?);
      while self.eat(TokenKind::Comma, engine) {
        names.push(self.import_as_name(engine)?);
      }
      end_loc = names.last().unwrap().loc.clone();
    }

    let loc = keyword.range.join(&end_loc);
    Ok(Stmt::ImportFrom {
      module,
      module_loc,
      names,
      level,
      keyword_loc: keyword.range,
      import_loc: import_token.range,
      loc,
    })
  }

  /// `dotted_name: NAME ('.' NAME)*` — joined into one string since the
  /// lexer already decoded each segment; `loc` spans the whole path.
  fn dotted_name(&mut self, engine: &mut DiagnosticEngine) -> Result<(String, Range), ()> {
    let first = self.expect(TokenKind::Identifier, engine)?;
    let mut name = match first.value {
      Some(TokenValue::Ident(name)) => name,
      _ => unreachable!("Identifier token always carries TokenValue::Ident"),
    };
    let mut loc = first.range;
    while self.at(TokenKind::Dot) {
      self.bump(engine);
      let token = self.expect(TokenKind::Identifier, engine)?;
      let part = match token.value {
        Some(TokenValue::Ident(part)) => part,
        _ => unreachable!("Identifier token always carries TokenValue::Ident"),
      };
      name.push('.');
      name.push_str(&part);
      loc = loc.join(&token.range);
    }
    Ok((name, loc))
  }

  /// `dotted_as_name: dotted_name ['as' NAME]`
  fn dotted_as_name(&mut self, engine: &mut DiagnosticEngine) -> Result<Alias, ()> {
    let (name, name_loc) = self.dotted_name(engine)?;
    self.finish_alias(name, name_loc, engine)
  }

  /// `import_as_name: NAME ['as' NAME]`
  fn import_as_name(&mut self, engine: &mut DiagnosticEngine) -> Result<Alias, ()> {
    let token = self.expect(TokenKind::Identifier, engine)?;
    let name = match token.value {
      Some(TokenValue::Ident(name)) => name,
      _ => unreachable!("Identifier token always carries TokenValue::Ident"),
    };
    self.finish_alias(name, token.range, engine)
  }

  fn finish_alias(&mut self, name: String, name_loc: Range, engine: &mut DiagnosticEngine) -> Result<Alias, ()> {
    let mut loc = name_loc.clone();
    let mut as_loc = None;
    let mut asname = None;
    let mut asname_loc = None;
    if self.at(TokenKind::As) {
      let as_token = self.bump(engine);
      as_loc = Some(as_token.range);
      let token = self.expect(TokenKind::Identifier, engine)?;
      let value = match token.value {
        Some(TokenValue::Ident(value)) => value,
        _ => unreachable!("Identifier token always carries TokenValue::Ident"),
      };
      loc = loc.join(&token.range);
      asname_loc = Some(token.range);
      asname = Some(value);
    }
    Ok(Alias {
      name,
      asname,
      name_loc,
      as_loc,
      asname_loc,
      loc,
    })
  }
}
