use diagnostic::Range;

use crate::ast::expr::Expr;

/// The contents of a `[...]` trailer's bracket, one level down from
/// `Subscript`. A single expression becomes `Index`; a `lo:hi:step` form
/// becomes `Slice`; a comma-separated mix becomes `ExtSlice`.
#[derive(Debug, Clone)]
pub enum Slice {
  Index(Index),
  Slice(SliceRange),
  ExtSlice(ExtSlice),
}

impl Slice {
  pub fn loc(&self) -> &Range {
    match self {
      Slice::Index(n) => &n.loc,
      Slice::Slice(n) => &n.loc,
      Slice::ExtSlice(n) => &n.loc,
    }
  }
}

#[derive(Debug, Clone)]
pub struct Index {
  pub value: Box<Expr>,
  pub loc: Range,
}

/// `bound_colon_loc` locates the first colon; `step_colon_loc` is present
/// iff a second colon was written, even when `step` itself was omitted
/// (`x[1:2:]` has a `step_colon_loc` but no `step`).
#[derive(Debug, Clone)]
pub struct SliceRange {
  pub lower: Option<Box<Expr>>,
  pub upper: Option<Box<Expr>>,
  pub step: Option<Box<Expr>>,
  pub bound_colon_loc: Range,
  pub step_colon_loc: Option<Range>,
  pub loc: Range,
}

#[derive(Debug, Clone)]
pub struct ExtSlice {
  pub dims: Vec<Slice>,
  pub loc: Range,
}
