use diagnostic::Range;

/// Binary operator kinds for `BinOp`. Each carries the `loc` of its own
/// token(s) separately from the surrounding `BinOp.loc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Sub,
  Mult,
  Div,
  Mod,
  Pow,
  FloorDiv,
  LShift,
  RShift,
  BitAnd,
  BitOr,
  BitXor,
}

/// Unary operator kinds for `UnaryOp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  UAdd,
  USub,
  Invert,
  Not,
}

/// The boolean operator shared by every arm of a `BoolOp` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOperator {
  And,
  Or,
}

/// One comparison operator inside a `Compare` chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOperator {
  Lt,
  LtE,
  Gt,
  GtE,
  Eq,
  NotEq,
  In,
  NotIn,
  Is,
  IsNot,
}

/// An operator token paired with the source range of its own spelling,
/// independent of whatever parent node embeds it.
#[derive(Debug, Clone)]
pub struct OpNode<K> {
  pub kind: K,
  pub loc: Range,
}

impl<K> OpNode<K> {
  pub fn new(kind: K, loc: Range) -> Self {
    Self { kind, loc }
  }
}

pub type Op = OpNode<Operator>;
pub type UnaryOp = OpNode<UnaryOperator>;
pub type CmpOp = OpNode<CmpOperator>;

/// Placeholder the parser attaches to lvalue-capable nodes. The parser never
/// sets this to anything but `Unset`; downstream passes decide `Load` versus
/// `Store` versus `Del`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ctx {
  #[default]
  Unset,
  Load,
  Store,
  Del,
}
