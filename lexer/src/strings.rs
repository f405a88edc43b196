use crate::cursor::Cursor;

/// Outcome of scanning a string literal: the decoded text, and whether the
/// closing quote was ever found (an unterminated string is a lexer-signaled
/// malformed-literal condition the parser only propagates, per spec §7).
pub struct ScannedString {
  pub value: String,
  pub terminated: bool,
}

/// Scans a string literal whose opening quote sits at `cursor`'s position.
/// Handles `'`, `"`, `'''`, `"""`, and the `r`/`u`/`b` prefixes already
/// consumed by the caller (`raw` disables escape processing).
pub fn scan_string(cursor: &mut Cursor, raw: bool) -> ScannedString {
  let quote = cursor.bump().expect("scan_string: no opening quote");
  let triple = cursor.peek() == Some(quote) && cursor.peek_at(1) == Some(quote);
  if triple {
    cursor.bump();
    cursor.bump();
  }

  let mut value = String::new();
  loop {
    if cursor.is_eof() {
      return ScannedString {
        value,
        terminated: false,
      };
    }
    if !triple && cursor.peek() == Some('\n') {
      return ScannedString {
        value,
        terminated: false,
      };
    }
    if cursor.peek() == Some(quote) {
      if !triple {
        cursor.bump();
        return ScannedString {
          value,
          terminated: true,
        };
      }
      if cursor.peek_at(1) == Some(quote) && cursor.peek_at(2) == Some(quote) {
        cursor.bump();
        cursor.bump();
        cursor.bump();
        return ScannedString {
          value,
          terminated: true,
        };
      }
    }
    if cursor.peek() == Some('\\') && !raw {
      cursor.bump();
      match cursor.bump() {
        Some('n') => value.push('\n'),
        Some('t') => value.push('\t'),
        Some('r') => value.push('\r'),
        Some('\\') => value.push('\\'),
        Some('\'') => value.push('\''),
        Some('"') => value.push('"'),
        Some('0') => value.push('\0'),
        Some('\n') => {} // escaped newline: line continuation inside the string
        Some(other) => {
          value.push('\\');
          value.push(other);
        },
        Option::None => {
          return ScannedString {
            value,
            terminated: false,
          }
        },
      }
      continue;
    }
    if cursor.peek() == Some('\\') && raw {
      value.push(cursor.bump().unwrap());
      if let Some(c) = cursor.peek() {
        value.push(c);
        cursor.bump();
      }
      continue;
    }
    value.push(cursor.bump().unwrap());
  }
}
