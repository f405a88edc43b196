/// Byte-offset character cursor over the source text. Tracks only the byte
/// position; line/column are recovered later from the buffer on demand, so
/// the hot scanning loop stays cheap.
pub struct Cursor<'a> {
  text: &'a str,
  pos: u32,
}

impl<'a> Cursor<'a> {
  pub fn new(text: &'a str) -> Self {
    Self { text, pos: 0 }
  }

  pub fn pos(&self) -> u32 {
    self.pos
  }

  pub fn is_eof(&self) -> bool {
    self.pos as usize >= self.text.len()
  }

  pub fn peek(&self) -> Option<char> {
    self.text[self.pos as usize..].chars().next()
  }

  pub fn peek_at(&self, ahead: usize) -> Option<char> {
    self.text[self.pos as usize..].chars().nth(ahead)
  }

  pub fn bump(&mut self) -> Option<char> {
    let c = self.peek()?;
    self.pos += c.len_utf8() as u32;
    Some(c)
  }

  /// Consumes `c` if it is next, returning whether it matched.
  pub fn eat(&mut self, c: char) -> bool {
    if self.peek() == Some(c) {
      self.bump();
      true
    } else {
      false
    }
  }

  pub fn slice(&self, from: u32) -> &'a str {
    &self.text[from as usize..self.pos as usize]
  }

  /// Rewinds the cursor, used when a lookahead scan (e.g. a trailing `.`
  /// exponent) turns out not to belong to the current token.
  pub fn reset_to(&mut self, pos: u32) {
    self.pos = pos;
  }
}
