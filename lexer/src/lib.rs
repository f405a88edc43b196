use std::collections::VecDeque;

use diagnostic::code::DiagnosticCode;
use diagnostic::types::error::DiagnosticError;
use diagnostic::buffer::SourceBuffer;
use diagnostic::{DiagnosticEngine, Range};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, TokenValue};

pub mod cursor;
pub mod keywords;
pub mod numbers;
pub mod strings;
pub mod token;
pub mod version;

pub use version::GrammarVersion;

/// Tokenization policy requested by the parser for the *next* token only.
/// `Default` lets the lexer's own bracket-depth tracking decide whether a
/// newline is significant; `IgnoreNewline` forces newlines to be treated as
/// plain whitespace regardless of bracket depth (spec §6: "configurable peek
/// modes ... whether to tokenize a line-continuation as significant").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  Default,
  IgnoreNewline,
}

/// Pull-based tokenizer with one-token lookahead. Tracks bracket nesting
/// itself so it knows when newlines/indentation are significant; the parser
/// only needs to request `Mode::IgnoreNewline` for constructs the lexer can't
/// see coming on its own (there are none in this grammar, but the hook exists
/// per the external interface contract).
pub struct Lexer {
  buffer: SourceBuffer,
  pos: u32,
  version: GrammarVersion,
  indents: Vec<u32>,
  paren_depth: u32,
  at_line_start: bool,
  eof_reached: bool,
  pending: VecDeque<Token>,
}

impl Lexer {
  pub fn new(buffer: SourceBuffer, version: GrammarVersion) -> Self {
    Self {
      buffer,
      pos: 0,
      version,
      indents: vec![0],
      paren_depth: 0,
      at_line_start: true,
      eof_reached: false,
      pending: VecDeque::new(),
    }
  }

  pub fn version(&self) -> GrammarVersion {
    self.version
  }

  pub fn next(&mut self, engine: &mut DiagnosticEngine, mode: Mode) -> Token {
    if self.pending.is_empty() {
      self.scan_into_queue(engine, mode);
    }
    self.pending.pop_front().unwrap_or_else(|| self.eof_token())
  }

  pub fn peek(&mut self, engine: &mut DiagnosticEngine, mode: Mode) -> Token {
    if self.pending.is_empty() {
      self.scan_into_queue(engine, mode);
    }
    self
      .pending
      .front()
      .cloned()
      .unwrap_or_else(|| self.eof_token())
  }

  fn eof_token(&self) -> Token {
    Token::new(TokenKind::EndMarker, self.range_here(0))
  }

  fn range_here(&self, len: u32) -> Range {
    let hi = (self.pos + len).min(self.buffer.len());
    Range::new(&self.buffer, self.pos.min(hi), hi)
  }

  fn range(&self, lo: u32, hi: u32) -> Range {
    Range::new(&self.buffer, lo, hi)
  }

  /// Scans whatever is needed to produce at least one queued token: a run of
  /// DEDENTs, a single structural token, or a single content token.
  fn scan_into_queue(&mut self, engine: &mut DiagnosticEngine, mode: Mode) {
    if self.eof_reached {
      self.pending.push_back(self.eof_token());
      return;
    }

    if self.at_line_start && self.paren_depth == 0 && mode == Mode::Default {
      if self.handle_indentation() {
        return;
      }
    }
    self.at_line_start = false;

    self.skip_intra_line_whitespace_and_comments();

    if self.pos >= self.buffer.len() {
      self.finish_at_eof();
      return;
    }

    let buffer = self.buffer.clone();
    let mut cursor = Cursor::new(buffer.text());
    cursor.reset_to(self.pos);
    let c = cursor.peek().unwrap();

    if c == '\n' {
      cursor.bump();
      self.pos = cursor.pos();
      if self.paren_depth > 0 || mode == Mode::IgnoreNewline {
        self.at_line_start = false;
        return self.scan_into_queue(engine, mode);
      }
      self.at_line_start = true;
      self.pending.push_back(Token::new(TokenKind::Newline, self.range(self.pos - 1, self.pos)));
      return;
    }

    if c == '\\' && cursor.peek_at(1) == Some('\n') {
      cursor.bump();
      cursor.bump();
      self.pos = cursor.pos();
      return self.scan_into_queue(engine, mode);
    }

    if is_ident_start(c) {
      return self.scan_identifier_or_string_prefix(&mut cursor, engine);
    }

    if c.is_ascii_digit() || (c == '.' && matches!(cursor.peek_at(1), Some(d) if d.is_ascii_digit())) {
      let start = cursor.pos();
      let (kind, value) = numbers::scan_number(&mut cursor);
      self.pos = cursor.pos();
      self.pending.push_back(Token::with_value(kind, value, self.range(start, self.pos)));
      return;
    }

    if c == '\'' || c == '"' {
      return self.scan_string_literal(&mut cursor, false, engine);
    }

    self.scan_operator(&mut cursor, engine);
  }

  fn finish_at_eof(&mut self) {
    if self.paren_depth == 0 && !self.at_line_start {
      self.pending.push_back(Token::new(TokenKind::Newline, self.range(self.pos, self.pos)));
    }
    while self.indents.len() > 1 {
      self.indents.pop();
      self.pending.push_back(Token::new(TokenKind::Dedent, self.range(self.pos, self.pos)));
    }
    self.eof_reached = true;
    self.pending.push_back(self.eof_token());
  }

  /// Measures leading whitespace of a new logical line and emits
  /// INDENT/DEDENT tokens as needed. Returns `true` if it queued anything
  /// (including "nothing to do, fall through to token scanning").
  fn handle_indentation(&mut self) -> bool {
    let mut cursor = Cursor::new(self.buffer.text());
    cursor.reset_to(self.pos);
    let line_start = cursor.pos();
    let mut width = 0u32;
    loop {
      match cursor.peek() {
        Some(' ') => {
          width += 1;
          cursor.bump();
        },
        Some('\t') => {
          width += 8 - (width % 8);
          cursor.bump();
        },
        _ => break,
      }
    }
    // A blank or comment-only line carries no indentation meaning.
    if matches!(cursor.peek(), Some('\n') | Some('#') | Option::None) {
      self.pos = cursor.pos();
      self.at_line_start = false;
      if cursor.peek() == Some('#') {
        self.skip_intra_line_whitespace_and_comments();
      }
      return false;
    }

    self.pos = cursor.pos();
    self.at_line_start = false;

    let current = *self.indents.last().unwrap();
    if width > current {
      self.indents.push(width);
      self.pending.push_back(Token::new(TokenKind::Indent, self.range(line_start, self.pos)));
      return true;
    }
    if width < current {
      while *self.indents.last().unwrap() > width {
        self.indents.pop();
        self.pending.push_back(Token::new(TokenKind::Dedent, self.range(line_start, self.pos)));
      }
      return true;
    }
    false
  }

  fn skip_intra_line_whitespace_and_comments(&mut self) {
    let mut cursor = Cursor::new(self.buffer.text());
    cursor.reset_to(self.pos);
    loop {
      match cursor.peek() {
        Some(' ') | Some('\t') | Some('\r') => {
          cursor.bump();
        },
        Some('#') => {
          while !matches!(cursor.peek(), Some('\n') | Option::None) {
            cursor.bump();
          }
        },
        _ => break,
      }
    }
    self.pos = cursor.pos();
  }

  fn scan_identifier_or_string_prefix(&mut self, cursor: &mut Cursor, engine: &mut DiagnosticEngine) {
    let start = cursor.pos();
    while matches!(cursor.peek(), Some(c) if is_ident_continue(c)) {
      cursor.bump();
    }
    let text = cursor.slice(start);

    if is_string_prefix(text) && matches!(cursor.peek(), Some('\'') | Some('"')) {
      let raw = text.to_ascii_lowercase().contains('r');
      self.pos = cursor.pos();
      return self.scan_string_literal(cursor, raw, engine);
    }

    self.pos = cursor.pos();
    if let Some(kind) = keywords::lookup(text, self.version) {
      self.pending.push_back(Token::new(kind, self.range(start, self.pos)));
    } else {
      self.pending.push_back(Token::with_value(
        TokenKind::Identifier,
        TokenValue::Ident(text.to_string()),
        self.range(start, self.pos),
      ));
    }
  }

  fn scan_string_literal(&mut self, cursor: &mut Cursor, raw: bool, engine: &mut DiagnosticEngine) {
    let start = cursor.pos();
    let scanned = strings::scan_string(cursor, raw);
    self.pos = cursor.pos();
    let range = self.range(start, self.pos);
    if !scanned.terminated {
      let diagnostic = self
        .engine_diagnostic(DiagnosticError::UnterminatedConstruct, "unterminated {actual}", range.clone())
        .with_arg("actual", "string literal");
      engine.add(diagnostic);
    }
    self
      .pending
      .push_back(Token::with_value(TokenKind::Str, TokenValue::Str(scanned.value), range));
  }

  fn engine_diagnostic(
    &self,
    code: DiagnosticError,
    reason: &'static str,
    location: Range,
  ) -> diagnostic::diagnostic::Diagnostic {
    diagnostic::diagnostic::Diagnostic::new(DiagnosticCode::from(code), reason, location)
  }

  fn scan_operator(&mut self, cursor: &mut Cursor, engine: &mut DiagnosticEngine) {
    let start = cursor.pos();
    let c = cursor.bump().unwrap();

    macro_rules! two {
      ($second:expr, $then:expr, $else_:expr) => {{
        if cursor.peek() == Some($second) {
          cursor.bump();
          $then
        } else {
          $else_
        }
      }};
    }

    let kind = match c {
      '(' => {
        self.paren_depth += 1;
        TokenKind::LParen
      },
      ')' => {
        self.paren_depth = self.paren_depth.saturating_sub(1);
        TokenKind::RParen
      },
      '[' => {
        self.paren_depth += 1;
        TokenKind::LBracket
      },
      ']' => {
        self.paren_depth = self.paren_depth.saturating_sub(1);
        TokenKind::RBracket
      },
      '{' => {
        self.paren_depth += 1;
        TokenKind::LBrace
      },
      '}' => {
        self.paren_depth = self.paren_depth.saturating_sub(1);
        TokenKind::RBrace
      },
      ',' => TokenKind::Comma,
      ':' => TokenKind::Colon,
      ';' => TokenKind::Semicolon,
      '@' => TokenKind::At,
      '`' => TokenKind::Backtick,
      '.' => {
        if cursor.peek() == Some('.') && cursor.peek_at(1) == Some('.') {
          cursor.bump();
          cursor.bump();
          TokenKind::Ellipsis
        } else {
          TokenKind::Dot
        }
      },
      '+' => two!('=', TokenKind::PlusEq, TokenKind::Plus),
      '-' => two!('=', TokenKind::MinusEq, TokenKind::Minus),
      '%' => two!('=', TokenKind::PercentEq, TokenKind::Percent),
      '^' => two!('=', TokenKind::CaretEq, TokenKind::Caret),
      '~' => TokenKind::Tilde,
      '&' => two!('=', TokenKind::AmpEq, TokenKind::Amp),
      '|' => two!('=', TokenKind::PipeEq, TokenKind::Pipe),
      '=' => two!('=', TokenKind::EqEq, TokenKind::Assign),
      '*' => {
        if cursor.peek() == Some('*') {
          cursor.bump();
          two!('=', TokenKind::DoubleStarEq, TokenKind::DoubleStar)
        } else {
          two!('=', TokenKind::StarEq, TokenKind::Star)
        }
      },
      '/' => {
        if cursor.peek() == Some('/') {
          cursor.bump();
          two!('=', TokenKind::DoubleSlashEq, TokenKind::DoubleSlash)
        } else {
          two!('=', TokenKind::SlashEq, TokenKind::Slash)
        }
      },
      '<' => {
        if cursor.peek() == Some('<') {
          cursor.bump();
          two!('=', TokenKind::LShiftEq, TokenKind::LShift)
        } else if cursor.peek() == Some('=') {
          cursor.bump();
          TokenKind::LtE
        } else if cursor.peek() == Some('>') && self.version.has_old_not_equal() {
          cursor.bump();
          TokenKind::LtGt
        } else {
          TokenKind::Lt
        }
      },
      '>' => {
        if cursor.peek() == Some('>') {
          cursor.bump();
          two!('=', TokenKind::RShiftEq, TokenKind::RShift)
        } else {
          two!('=', TokenKind::GtE, TokenKind::Gt)
        }
      },
      '!' => {
        if cursor.peek() == Some('=') {
          cursor.bump();
          TokenKind::NotEq
        } else {
          self.pos = cursor.pos();
          let range = self.range(start, self.pos);
          let diagnostic = self
            .engine_diagnostic(DiagnosticError::UnexpectedToken, "unexpected {actual}: expected {expected}", range.clone())
            .with_arg("actual", "'!'")
            .with_arg("expected", "'!='");
          engine.add(diagnostic);
          self.pending.push_back(Token::new(TokenKind::EndMarker, range));
          return;
        }
      },
      other => {
        self.pos = cursor.pos();
        let range = self.range(start, self.pos);
        let diagnostic = self
          .engine_diagnostic(DiagnosticError::UnexpectedToken, "unexpected {actual}: expected {expected}", range.clone())
          .with_arg("actual", format!("character '{other}'"))
          .with_arg("expected", "a token");
        engine.add(diagnostic);
        self.pos = cursor.pos();
        self.pending.push_back(Token::new(TokenKind::EndMarker, range));
        return;
      },
    };

    self.pos = cursor.pos();
    let range = self.range(start, self.pos);
    self.pending.push_back(Token::new(kind, range));
  }
}

fn is_ident_start(c: char) -> bool {
  c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
  c.is_alphanumeric() || c == '_'
}

fn is_string_prefix(text: &str) -> bool {
  text.len() <= 2
    && text
      .chars()
      .all(|c| matches!(c.to_ascii_lowercase(), 'r' | 'u' | 'b'))
}
