use crate::types::{error::DiagnosticError, Severity};

/// Thin wrapper around the error taxonomy, kept as its own type (rather than
/// using `DiagnosticError` directly) so a non-fatal category can be added
/// later without reshaping every call site that matches on `DiagnosticCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticCode(pub DiagnosticError);

impl DiagnosticCode {
  pub fn code(&self) -> &'static str {
    self.0.code()
  }

  pub fn severity(&self) -> Severity {
    self.0.severity()
  }
}

impl From<DiagnosticError> for DiagnosticCode {
  fn from(err: DiagnosticError) -> Self {
    DiagnosticCode(err)
  }
}
