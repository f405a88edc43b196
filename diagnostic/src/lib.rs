use crate::buffer::SourceBuffer;
use crate::code::DiagnosticCode;
use crate::diagnostic::Diagnostic;

pub mod buffer;
pub mod code;
pub mod diagnostic;
pub mod range;
pub mod types;

pub use buffer::SourceBuffer as Buffer;
pub use range::Range;

/// Sink the lexer and parser report into. Owns the source text (the "source
/// buffer" collaborator) so diagnostics can be rendered with context lines
/// without every call site threading the buffer separately.
#[derive(Debug)]
pub struct DiagnosticEngine {
  buffer: SourceBuffer,
  diagnostics: Vec<Diagnostic>,
}

impl DiagnosticEngine {
  pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
    Self {
      buffer: SourceBuffer::new(name, source),
      diagnostics: Vec::new(),
    }
  }

  pub fn buffer(&self) -> &SourceBuffer {
    &self.buffer
  }

  /// Records a diagnostic. In this grammar every diagnostic code is fatal
  /// (spec §7), so recording one always means the caller is about to unwind
  /// via `Err(())`.
  pub fn add(&mut self, diagnostic: Diagnostic) {
    self.diagnostics.push(diagnostic);
  }

  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub fn has_errors(&self) -> bool {
    !self.diagnostics.is_empty()
  }

  pub fn error_count(&self) -> usize {
    self.diagnostics.len()
  }

  pub fn print_diagnostics(&self) {
    for diagnostic in &self.diagnostics {
      diagnostic.print(&self.buffer);
    }
  }

  /// Convenience constructor for a diagnostic already located in this
  /// engine's buffer, so call sites don't need to import `DiagnosticCode`
  /// from three different modules.
  pub fn diagnostic(
    &self,
    code: impl Into<DiagnosticCode>,
    reason: &'static str,
    location: Range,
  ) -> Diagnostic {
    Diagnostic::new(code.into(), reason, location)
  }
}
