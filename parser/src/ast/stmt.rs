use diagnostic::Range;

use crate::ast::argument::{Alias, Arguments};
use crate::ast::expr::Expr;
use crate::ast::operator::Op;

/// One `except` clause of a `try` statement.
#[derive(Debug, Clone)]
pub struct ExceptHandler {
  pub kind: Option<Expr>,
  pub name: Option<Expr>,
  pub body: Vec<Stmt>,
  pub keyword_loc: Range,
  pub as_loc: Option<Range>,
  pub colon_loc: Range,
  pub loc: Range,
}

/// The closed statement node family. Compound statements carry
/// `keyword_loc` for their introducing keyword and `colon_loc` for the `:`
/// that opens their suite, per the location discipline in §4.3.
#[derive(Debug, Clone)]
pub enum Stmt {
  FunctionDef {
    name: String,
    name_loc: Range,
    args: Arguments,
    body: Vec<Stmt>,
    decorator_list: Vec<Expr>,
    keyword_loc: Range,
    begin_loc: Range,
    end_loc: Range,
    colon_loc: Range,
    loc: Range,
  },
  ClassDef {
    name: String,
    name_loc: Range,
    bases: Vec<Expr>,
    body: Vec<Stmt>,
    decorator_list: Vec<Expr>,
    keyword_loc: Range,
    begin_loc: Option<Range>,
    end_loc: Option<Range>,
    colon_loc: Range,
    loc: Range,
  },
  Return {
    value: Option<Expr>,
    keyword_loc: Range,
    loc: Range,
  },
  Delete {
    targets: Vec<Expr>,
    keyword_loc: Range,
    loc: Range,
  },
  /// A single `=` yields `targets.len() == 1`; a chain `a = b = v` yields
  /// `op_locs.len() == targets.len()`, one per `=` read left to right.
  Assign {
    targets: Vec<Expr>,
    value: Expr,
    op_locs: Vec<Range>,
    loc: Range,
  },
  AugAssign {
    target: Expr,
    op: Op,
    value: Expr,
    loc: Range,
  },
  /// Only produced when the selected grammar version still treats `print`
  /// as a statement.
  Print {
    dest: Option<Expr>,
    values: Vec<Expr>,
    nl: bool,
    keyword_loc: Range,
    loc: Range,
  },
  For {
    target: Expr,
    iter: Expr,
    body: Vec<Stmt>,
    orelse: Vec<Stmt>,
    keyword_loc: Range,
    in_loc: Range,
    colon_loc: Range,
    else_loc: Option<Range>,
    else_colon_loc: Option<Range>,
    loc: Range,
  },
  While {
    test: Expr,
    body: Vec<Stmt>,
    orelse: Vec<Stmt>,
    keyword_loc: Range,
    colon_loc: Range,
    else_loc: Option<Range>,
    else_colon_loc: Option<Range>,
    loc: Range,
  },
  /// `elif` is represented as a nested `If` that is the sole element of
  /// `orelse`; its own `keyword_loc` points at the `elif` token.
  If {
    test: Expr,
    body: Vec<Stmt>,
    orelse: Vec<Stmt>,
    keyword_loc: Range,
    colon_loc: Range,
    loc: Range,
  },
  With {
    context_expr: Expr,
    optional_vars: Option<Expr>,
    body: Vec<Stmt>,
    keyword_loc: Range,
    as_loc: Option<Range>,
    colon_loc: Range,
    loc: Range,
  },
  Raise {
    exc_type: Option<Expr>,
    exc_inst: Option<Expr>,
    exc_tback: Option<Expr>,
    keyword_loc: Range,
    loc: Range,
  },
  TryExcept {
    body: Vec<Stmt>,
    handlers: Vec<ExceptHandler>,
    orelse: Vec<Stmt>,
    keyword_loc: Range,
    colon_loc: Range,
    else_loc: Option<Range>,
    else_colon_loc: Option<Range>,
    loc: Range,
  },
  TryFinally {
    body: Vec<Stmt>,
    finalbody: Vec<Stmt>,
    keyword_loc: Range,
    colon_loc: Range,
    finally_loc: Range,
    finally_colon_loc: Range,
    loc: Range,
  },
  Assert {
    test: Expr,
    msg: Option<Expr>,
    keyword_loc: Range,
    loc: Range,
  },
  Import {
    names: Vec<Alias>,
    keyword_loc: Range,
    loc: Range,
  },
  ImportFrom {
    module: String,
    module_loc: Range,
    names: Vec<Alias>,
    level: u32,
    keyword_loc: Range,
    import_loc: Range,
    loc: Range,
  },
  Global {
    names: Vec<String>,
    name_locs: Vec<Range>,
    keyword_loc: Range,
    loc: Range,
  },
  /// Only produced when the selected grammar version still treats `exec`
  /// as a statement.
  Exec {
    body: Expr,
    globals: Option<Expr>,
    locals: Option<Expr>,
    keyword_loc: Range,
    loc: Range,
  },
  Expr {
    value: Expr,
    loc: Range,
  },
  Pass {
    loc: Range,
  },
  Break {
    loc: Range,
  },
  Continue {
    loc: Range,
  },
}

impl Stmt {
  pub fn loc(&self) -> &Range {
    match self {
      Stmt::FunctionDef { loc, .. }
      | Stmt::ClassDef { loc, .. }
      | Stmt::Return { loc, .. }
      | Stmt::Delete { loc, .. }
      | Stmt::Assign { loc, .. }
      | Stmt::AugAssign { loc, .. }
      | Stmt::Print { loc, .. }
      | Stmt::For { loc, .. }
      | Stmt::While { loc, .. }
      | Stmt::If { loc, .. }
      | Stmt::With { loc, .. }
      | Stmt::Raise { loc, .. }
      | Stmt::TryExcept { loc, .. }
      | Stmt::TryFinally { loc, .. }
      | Stmt::Assert { loc, .. }
      | Stmt::Import { loc, .. }
      | Stmt::ImportFrom { loc, .. }
      | Stmt::Global { loc, .. }
      | Stmt::Exec { loc, .. }
      | Stmt::Expr { loc, .. }
      | Stmt::Pass { loc }
      | Stmt::Break { loc }
      | Stmt::Continue { loc } => loc,
    }
  }
}

/// The top-level node: a source file parsed as a flat sequence of statements.
#[derive(Debug, Clone)]
pub struct Module {
  pub body: Vec<Stmt>,
}
