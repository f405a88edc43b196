use diagnostic::Range;

use crate::ast::expr::Expr;

/// A `name=value` keyword argument in a call.
#[derive(Debug, Clone)]
pub struct Keyword {
  pub arg: String,
  pub value: Expr,
  pub arg_loc: Range,
  pub equals_loc: Range,
  pub loc: Range,
}

/// One formal parameter of a `def` or `lambda` parameter list.
#[derive(Debug, Clone)]
pub struct Arg {
  pub arg: String,
  pub loc: Range,
}

/// The formal-parameter list shared by `def` and `lambda`: ordinary
/// parameters (with optional defaults, right-aligned to `args`), an optional
/// `*vararg`, and an optional `**kwarg`.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
  pub args: Vec<Arg>,
  pub defaults: Vec<Expr>,
  pub vararg: Option<Arg>,
  pub kwarg: Option<Arg>,
  pub star_loc: Option<Range>,
  pub dstar_loc: Option<Range>,
}

/// One `name` or `name as asname` entry in `import`/`from ... import`.
#[derive(Debug, Clone)]
pub struct Alias {
  pub name: String,
  pub asname: Option<String>,
  pub name_loc: Range,
  pub as_loc: Option<Range>,
  pub asname_loc: Option<Range>,
  pub loc: Range,
}
