use std::rc::Rc;

/// Stable identity for a `SourceBuffer`, compared by pointer rather than content
/// so two buffers holding identical text are still distinguishable.
#[derive(Debug, Clone)]
pub struct BufferId(Rc<str>);

impl PartialEq for BufferId {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}
impl Eq for BufferId {}

/// Owns the input text for one parse and vends byte-index ranges into it.
/// Read-only for the lifetime of a parse; the lexer and parser both borrow
/// from the same buffer and never mutate it.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
  name: String,
  text: Rc<str>,
  line_starts: Rc<[u32]>,
}

impl SourceBuffer {
  pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
    let text: Rc<str> = Rc::from(text.into());
    let line_starts = compute_line_starts(&text);
    Self {
      name: name.into(),
      text,
      line_starts: Rc::from(line_starts),
    }
  }

  pub fn id(&self) -> BufferId {
    BufferId(self.text.clone())
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn len(&self) -> u32 {
    self.text.len() as u32
  }

  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  /// Returns the surface text between two byte offsets. Panics if the
  /// interval does not land on a char boundary or exceeds the buffer.
  pub fn slice(&self, lo: u32, hi: u32) -> &str {
    &self.text[lo as usize..hi as usize]
  }

  /// 1-indexed (line, column) of a byte offset, for diagnostic rendering.
  pub fn line_col(&self, offset: u32) -> (usize, usize) {
    let line_idx = match self.line_starts.binary_search(&offset) {
      Ok(idx) => idx,
      Err(idx) => idx.saturating_sub(1),
    };
    let line_start = self.line_starts[line_idx];
    let col = self.text[line_start as usize..offset as usize].chars().count();
    (line_idx + 1, col + 1)
  }

  /// Full text of the line containing `line` (1-indexed), without its terminator.
  pub fn line_text(&self, line: usize) -> &str {
    if line == 0 || line > self.line_starts.len() {
      return "";
    }
    let start = self.line_starts[line - 1] as usize;
    let end = self
      .line_starts
      .get(line)
      .map(|&n| n as usize)
      .unwrap_or(self.text.len());
    self.text[start..end].trim_end_matches(['\n', '\r'])
  }
}

fn compute_line_starts(text: &str) -> Vec<u32> {
  let mut starts = vec![0u32];
  for (idx, byte) in text.bytes().enumerate() {
    if byte == b'\n' {
      starts.push((idx + 1) as u32);
    }
  }
  starts
}
