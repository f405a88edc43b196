use colored::*;

use crate::buffer::SourceBuffer;
use crate::code::DiagnosticCode;
use crate::range::Range;

/// A single structured diagnostic: a code, an opaque reason template plus its
/// substitution arguments, and the source range it points at.
///
/// `reason` is kept as a template string and `arguments` as an ordered list of
/// `(placeholder, value)` pairs rather than eagerly formatting a message, so
/// tests can compare on `reason`/`arguments` independent of how (or whether)
/// the message ever gets localized — see spec §9.
#[derive(Debug, Clone)]
pub struct Diagnostic {
  pub code: DiagnosticCode,
  pub reason: &'static str,
  pub arguments: Vec<(&'static str, String)>,
  pub location: Range,
  pub help: Option<String>,
}

impl Diagnostic {
  pub fn new(code: DiagnosticCode, reason: &'static str, location: Range) -> Self {
    Self {
      code,
      reason,
      arguments: Vec::new(),
      location,
      help: None,
    }
  }

  pub fn with_arg(mut self, key: &'static str, value: impl Into<String>) -> Self {
    self.arguments.push((key, value.into()));
    self
  }

  pub fn with_help(mut self, help: impl Into<String>) -> Self {
    self.help = Some(help.into());
    self
  }

  pub fn argument(&self, key: &str) -> Option<&str> {
    self
      .arguments
      .iter()
      .find(|(k, _)| *k == key)
      .map(|(_, v)| v.as_str())
  }

  /// Substitutes every `{placeholder}` in `reason` with its argument value.
  pub fn message(&self) -> String {
    let mut out = String::with_capacity(self.reason.len());
    let mut rest = self.reason;
    while let Some(start) = rest.find('{') {
      out.push_str(&rest[..start]);
      let Some(end) = rest[start..].find('}') else {
        out.push_str(&rest[start..]);
        rest = "";
        break;
      };
      let key = &rest[start + 1..start + end];
      match self.argument(key) {
        Some(value) => out.push_str(value),
        None => out.push_str(&rest[start..start + end + 1]),
      }
      rest = &rest[start + end + 1..];
    }
    out.push_str(rest);
    out
  }

  pub fn format(&self, buffer: &SourceBuffer) -> String {
    let mut output = String::new();
    let (line, col) = buffer.line_col(self.location.lo());
    let underline_len = self.location.len().max(1) as usize;

    output.push_str(&format!(
      "{} {}\n",
      format!("error[{}]:", self.code.code()).red().bold(),
      self.message().bold()
    ));
    output.push_str(&format!(
      "  {} {}:{}:{}\n",
      "-->".blue().bold(),
      buffer.name(),
      line,
      col
    ));

    let line_width = line.to_string().len();
    output.push_str(&format!("{} {}\n", " ".repeat(line_width), "|".blue().bold()));
    output.push_str(&format!(
      "{} {} {}\n",
      line.to_string().blue().bold(),
      "|".blue().bold(),
      buffer.line_text(line)
    ));
    output.push_str(&format!(
      "{} {} {}{}\n",
      " ".repeat(line_width),
      "|".blue().bold(),
      " ".repeat(col.saturating_sub(1)),
      "^".repeat(underline_len).red().bold()
    ));

    if let Some(help) = &self.help {
      output.push_str(&format!("{} {}\n", "= help:".blue().bold(), help));
    }

    output
  }

  pub fn print(&self, buffer: &SourceBuffer) {
    print!("{}", self.format(buffer));
  }
}
