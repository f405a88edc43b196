/// Severity of a diagnostic. The parser only ever produces `Error`-severity
/// diagnostics (spec: every production mismatch is fatal); the variant still
/// exists as a closed enum rather than a bare string so call sites match
/// exhaustively as the taxonomy grows.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Error,
}

pub mod error;
