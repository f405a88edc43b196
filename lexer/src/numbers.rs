use crate::cursor::Cursor;
use crate::token::{TokenKind, TokenValue};

/// Scans a numeric literal starting at the cursor's current position (which
/// must sit on a digit or a `.` followed by a digit). Returns the token kind
/// and decoded value; the parser never re-derives these from the lexeme.
pub fn scan_number(cursor: &mut Cursor) -> (TokenKind, TokenValue) {
  let start = cursor.pos();

  if cursor.peek() == Some('0') && matches!(cursor.peek_at(1), Some('x') | Some('X')) {
    cursor.bump();
    cursor.bump();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_hexdigit() || c == '_') {
      cursor.bump();
    }
    let digits: String = cursor.slice(start)[2..].chars().filter(|c| *c != '_').collect();
    let n = i64::from_str_radix(&digits, 16).unwrap_or(0);
    return finish_int(cursor, n);
  }

  if cursor.peek() == Some('0') && matches!(cursor.peek_at(1), Some('o') | Some('O')) {
    cursor.bump();
    cursor.bump();
    while matches!(cursor.peek(), Some(c) if ('0'..='7').contains(&c) || c == '_') {
      cursor.bump();
    }
    let digits: String = cursor.slice(start)[2..].chars().filter(|c| *c != '_').collect();
    let n = i64::from_str_radix(&digits, 8).unwrap_or(0);
    return finish_int(cursor, n);
  }

  if cursor.peek() == Some('0') && matches!(cursor.peek_at(1), Some('b') | Some('B')) {
    cursor.bump();
    cursor.bump();
    while matches!(cursor.peek(), Some(c) if c == '0' || c == '1' || c == '_') {
      cursor.bump();
    }
    let digits: String = cursor.slice(start)[2..].chars().filter(|c| *c != '_').collect();
    let n = i64::from_str_radix(&digits, 2).unwrap_or(0);
    return finish_int(cursor, n);
  }

  // Old-style octal: a leading zero followed by more digits and no '.' / 'e'.
  if cursor.peek() == Some('0') {
    let save = cursor.pos();
    cursor.bump();
    let mut all_octal_digits = true;
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit() || c == '_') {
      if !matches!(cursor.peek(), Some(c) if ('0'..='7').contains(&c) || c == '_') {
        all_octal_digits = false;
      }
      cursor.bump();
    }
    let is_float_like = matches!(cursor.peek(), Some('.') | Some('e') | Some('E') | Some('j') | Some('J'));
    if !is_float_like && cursor.pos() > save + 1 {
      if all_octal_digits {
        let digits: String = cursor.slice(save)[1..].chars().filter(|c| *c != '_').collect();
        let n = i64::from_str_radix(&digits, 8).unwrap_or(0);
        return finish_int(cursor, n);
      }
    }
    if !is_float_like {
      return finish_int(cursor, 0);
    }
    // fall through to decimal/float scanning below with a reset cursor.
    cursor.reset_to(save);
  }

  while matches!(cursor.peek(), Some(c) if c.is_ascii_digit() || c == '_') {
    cursor.bump();
  }

  let mut is_float = false;
  if cursor.peek() == Some('.') && !matches!(cursor.peek_at(1), Some('.')) {
    is_float = true;
    cursor.bump();
    while matches!(cursor.peek(), Some(c) if c.is_ascii_digit() || c == '_') {
      cursor.bump();
    }
  }

  if matches!(cursor.peek(), Some('e') | Some('E')) {
    let save = cursor.pos();
    cursor.bump();
    if matches!(cursor.peek(), Some('+') | Some('-')) {
      cursor.bump();
    }
    if matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
      is_float = true;
      while matches!(cursor.peek(), Some(c) if c.is_ascii_digit()) {
        cursor.bump();
      }
    } else {
      cursor.reset_to(save);
    }
  }

  if matches!(cursor.peek(), Some('j') | Some('J')) {
    let lexeme: String = cursor.slice(start).chars().filter(|c| *c != '_').collect();
    let mantissa: f64 = lexeme.parse().unwrap_or(0.0);
    cursor.bump();
    return (TokenKind::Imaginary, TokenValue::Imaginary(mantissa));
  }

  let lexeme: String = cursor.slice(start).chars().filter(|c| *c != '_').collect();
  if is_float {
    let n: f64 = lexeme.parse().unwrap_or(0.0);
    (TokenKind::Float, TokenValue::Float(n))
  } else {
    let n: i64 = lexeme.parse().unwrap_or(0);
    (TokenKind::Int, TokenValue::Int(n))
  }
}

fn finish_int(cursor: &mut Cursor, n: i64) -> (TokenKind, TokenValue) {
  if matches!(cursor.peek(), Some('j') | Some('J')) {
    cursor.bump();
    return (TokenKind::Imaginary, TokenValue::Imaginary(n as f64));
  }
  (TokenKind::Int, TokenValue::Int(n))
}
