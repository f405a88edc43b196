use std::io::Write;

use diagnostic::DiagnosticEngine;
use parser::{GrammarVersion, Parser};

/// Drives a parse from either a file or the interactive prompt, sharing the
/// same lex-then-parse pipeline either way.
pub struct Runner {
  version: GrammarVersion,
}

impl Runner {
  pub fn new(version: GrammarVersion) -> Self {
    Self { version }
  }

  pub fn run_interactive_mode(&mut self) {
    let mut line = String::new();
    loop {
      print!(">>> ");
      if std::io::stdout().flush().is_err() {
        return;
      }
      line.clear();
      let Ok(n) = std::io::stdin().read_line(&mut line) else {
        return;
      };
      if n == 0 {
        println!();
        return;
      }
      if line.trim().is_empty() {
        continue;
      }

      let mut engine = DiagnosticEngine::new("<stdin>", line.clone());
      let mut parser = Parser::new(engine.buffer().clone(), self.version, &mut engine);
      match parser.expression(&mut engine) {
        Ok(expr) => println!("{:#?}", expr),
        Err(()) => engine.print_diagnostics(),
      }
    }
  }

  pub fn run_file(&mut self, path: &str) -> Result<(), std::io::Error> {
    let source = std::fs::read_to_string(path)?;
    let mut engine = DiagnosticEngine::new(path, source);

    let mut parser = Parser::new(engine.buffer().clone(), self.version, &mut engine);
    match parser.file_input(&mut engine) {
      Ok(module) => {
        println!("{:#?}", module);
        Ok(())
      },
      Err(()) => {
        engine.print_diagnostics();
        Err(std::io::Error::other("parse error"))
      },
    }
  }
}
