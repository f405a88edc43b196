use diagnostic::Range;

use crate::ast::argument::{Arguments, Keyword};
use crate::ast::comprehension::Comprehension;
use crate::ast::operator::{BoolOperator, Ctx, Op, UnaryOp};
use crate::ast::slice::Slice;

/// The decoded numeric value behind a `Num` node, already classified by the
/// lexer (int vs. float vs. imaginary); the parser never re-derives this
/// from the token's surface text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumKind {
  Int(i64),
  Float(f64),
  Imaginary(f64),
}

/// The closed expression node family. Every variant's location fields are
/// named exactly as in the doc comment on that variant, per the completeness
/// invariant: the set of location fields present matches the set named here.
#[derive(Debug, Clone)]
pub enum Expr {
  /// `loc` is the literal's full token range.
  Num { n: NumKind, loc: Range },
  /// `begin_loc`/`end_loc` sit on the opening quote of the first literal and
  /// the closing quote of the last, after adjacent-literal concatenation.
  Str {
    value: String,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  /// `` `expr` `` backtick repr. `begin_loc`/`end_loc` are the two backticks.
  Repr {
    value: Box<Expr>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  Name { id: String, ctx: Ctx, loc: Range },
  /// `begin_loc`/`end_loc` are only present when the tuple was written with
  /// parentheses (an empty tuple, or one constructed from a top-level
  /// expression list, has neither).
  Tuple {
    elts: Vec<Expr>,
    ctx: Ctx,
    begin_loc: Option<Range>,
    end_loc: Option<Range>,
    loc: Range,
  },
  List {
    elts: Vec<Expr>,
    ctx: Ctx,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  /// `colon_locs` has one entry per key-value pair, in source order.
  Dict {
    keys: Vec<Expr>,
    values: Vec<Expr>,
    colon_locs: Vec<Range>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  Set {
    elts: Vec<Expr>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  ListComp {
    elt: Box<Expr>,
    generators: Vec<Comprehension>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  SetComp {
    elt: Box<Expr>,
    generators: Vec<Comprehension>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  DictComp {
    key: Box<Expr>,
    value: Box<Expr>,
    generators: Vec<Comprehension>,
    colon_loc: Range,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  GeneratorExp {
    elt: Box<Expr>,
    generators: Vec<Comprehension>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  Lambda {
    args: Arguments,
    body: Box<Expr>,
    keyword_loc: Range,
    colon_loc: Range,
    loc: Range,
  },
  /// A run of same-operator `and`/`or` collapses into one node;
  /// `op_locs` has `values.len() - 1` entries.
  BoolOp {
    op: BoolOperator,
    values: Vec<Expr>,
    op_locs: Vec<Range>,
    loc: Range,
  },
  BinOp {
    left: Box<Expr>,
    op: Op,
    right: Box<Expr>,
    loc: Range,
  },
  UnaryOp {
    op: UnaryOp,
    operand: Box<Expr>,
    loc: Range,
  },
  /// A chained comparison `a op1 b op2 c ...`; `ops.len() == comparators.len()`.
  Compare {
    left: Box<Expr>,
    ops: Vec<crate::ast::operator::CmpOp>,
    comparators: Vec<Expr>,
    loc: Range,
  },
  /// `star_loc`/`dstar_loc` are present iff `starargs`/`kwargs` are.
  Call {
    func: Box<Expr>,
    args: Vec<Expr>,
    keywords: Vec<Keyword>,
    starargs: Option<Box<Expr>>,
    kwargs: Option<Box<Expr>>,
    star_loc: Option<Range>,
    dstar_loc: Option<Range>,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  Attribute {
    value: Box<Expr>,
    attr: String,
    ctx: Ctx,
    dot_loc: Range,
    attr_loc: Range,
    loc: Range,
  },
  Subscript {
    value: Box<Expr>,
    slice: Box<Slice>,
    ctx: Ctx,
    begin_loc: Range,
    end_loc: Range,
    loc: Range,
  },
  IfExp {
    body: Box<Expr>,
    test: Box<Expr>,
    orelse: Box<Expr>,
    if_loc: Range,
    else_loc: Range,
    loc: Range,
  },
  /// Recognized only inside a parenthesized context; see `stmt::Stmt::Expr`
  /// for the statement-level bare `yield`.
  Yield {
    value: Option<Box<Expr>>,
    keyword_loc: Range,
    loc: Range,
  },
  /// `...`, legal as an atom and as an `ExtSlice` dimension.
  Ellipsis { loc: Range },
}

impl Expr {
  pub fn loc(&self) -> &Range {
    match self {
      Expr::Num { loc, .. }
      | Expr::Str { loc, .. }
      | Expr::Repr { loc, .. }
      | Expr::Name { loc, .. }
      | Expr::Tuple { loc, .. }
      | Expr::List { loc, .. }
      | Expr::Dict { loc, .. }
      | Expr::Set { loc, .. }
      | Expr::ListComp { loc, .. }
      | Expr::SetComp { loc, .. }
      | Expr::DictComp { loc, .. }
      | Expr::GeneratorExp { loc, .. }
      | Expr::Lambda { loc, .. }
      | Expr::BoolOp { loc, .. }
      | Expr::BinOp { loc, .. }
      | Expr::UnaryOp { loc, .. }
      | Expr::Compare { loc, .. }
      | Expr::Call { loc, .. }
      | Expr::Attribute { loc, .. }
      | Expr::Subscript { loc, .. }
      | Expr::IfExp { loc, .. }
      | Expr::Yield { loc, .. }
      | Expr::Ellipsis { loc } => loc,
    }
  }

  /// Every named sub-location this variant declares, for the completeness
  /// and containment invariants. Child-node locations are not included here
  /// (they're reached through the node itself, not as a bare `Range`).
  pub fn sub_locations(&self) -> Vec<&Range> {
    match self {
      Expr::Str { begin_loc, end_loc, .. } | Expr::Repr { begin_loc, end_loc, .. } => {
        vec![begin_loc, end_loc]
      },
      Expr::Tuple { begin_loc, end_loc, .. } => begin_loc.iter().chain(end_loc.iter()).collect(),
      Expr::List { begin_loc, end_loc, .. }
      | Expr::Set { begin_loc, end_loc, .. }
      | Expr::ListComp { begin_loc, end_loc, .. }
      | Expr::SetComp { begin_loc, end_loc, .. }
      | Expr::GeneratorExp { begin_loc, end_loc, .. } => vec![begin_loc, end_loc],
      Expr::Dict {
        begin_loc,
        end_loc,
        colon_locs,
        ..
      } => {
        let mut locs = vec![begin_loc, end_loc];
        locs.extend(colon_locs.iter());
        locs
      },
      Expr::DictComp {
        begin_loc,
        end_loc,
        colon_loc,
        ..
      } => vec![begin_loc, end_loc, colon_loc],
      Expr::Lambda {
        keyword_loc, colon_loc, ..
      } => vec![keyword_loc, colon_loc],
      Expr::BoolOp { op_locs, .. } => op_locs.iter().collect(),
      Expr::BinOp { op, .. } => vec![&op.loc],
      Expr::UnaryOp { op, .. } => vec![&op.loc],
      Expr::Compare { ops, .. } => ops.iter().map(|op| &op.loc).collect(),
      Expr::Call {
        begin_loc,
        end_loc,
        star_loc,
        dstar_loc,
        ..
      } => {
        let mut locs = vec![begin_loc, end_loc];
        locs.extend(star_loc.iter());
        locs.extend(dstar_loc.iter());
        locs
      },
      Expr::Attribute { dot_loc, attr_loc, .. } => vec![dot_loc, attr_loc],
      Expr::Subscript { begin_loc, end_loc, .. } => vec![begin_loc, end_loc],
      Expr::IfExp { if_loc, else_loc, .. } => vec![if_loc, else_loc],
      Expr::Yield { keyword_loc, .. } => vec![keyword_loc],
      Expr::Num { .. } | Expr::Name { .. } | Expr::Ellipsis { .. } => vec![],
    }
  }
}
