/// Selects which grammar productions are legal. Gates both lexer behavior
/// (is `print` a keyword at all?) and parser behavior (is `print` a
/// statement, or just an ordinary name used in an expression?).
///
/// Lives in the `lexer` crate because keyword recognition needs it too; the
/// `parser` crate re-exports it so callers only ever import it from one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrammarVersion {
  pub major: u8,
  pub minor: u8,
}

impl GrammarVersion {
  pub const fn new(major: u8, minor: u8) -> Self {
    Self { major, minor }
  }

  /// `print` is still a statement keyword, not a builtin function.
  pub fn has_print_statement(&self) -> bool {
    *self < Self::new(3, 0)
  }

  /// `exec` is still a statement keyword, not a builtin function.
  pub fn has_exec_statement(&self) -> bool {
    *self < Self::new(3, 0)
  }

  /// `//` floor division and its augmented form `//=` exist.
  pub fn has_floor_division(&self) -> bool {
    *self >= Self::new(2, 2)
  }

  /// Backtick `` `expr` `` repr expressions are legal.
  pub fn has_backtick_repr(&self) -> bool {
    *self < Self::new(3, 0)
  }

  /// `<>` is recognized as an alternate spelling of `!=`.
  pub fn has_old_not_equal(&self) -> bool {
    *self < Self::new(3, 0)
  }

  /// Set displays/comprehensions (`{1, 2}`, `{x for x in y}`) and dict
  /// comprehensions (`{k: v for k, v in y}`) are legal.
  pub fn has_set_and_dict_comprehensions(&self) -> bool {
    *self >= Self::new(2, 7)
  }

  /// `with` is a statement without needing `from __future__ import
  /// with_statement`.
  pub fn has_with_statement(&self) -> bool {
    *self >= Self::new(2, 6)
  }
}

impl Default for GrammarVersion {
  fn default() -> Self {
    Self::new(2, 7)
  }
}
