use colored::*;
use parser::GrammarVersion;

use crate::runner::Runner;

mod runner;

fn main() {
  let args = std::env::args().collect::<Vec<_>>();
  let mut runner = Runner::new(GrammarVersion::default());

  let exit_code = match args.len() {
    1 => {
      println!("{}", "Running the interactive mode".cyan().bold());
      runner.run_interactive_mode();
      0
    },
    2 => {
      println!("{}", format!("Parsing file: {}", args[1]).cyan().bold());
      match runner.run_file(&args[1]) {
        Ok(()) => 0,
        Err(_) => 65,
      }
    },
    _ => {
      eprintln!("{}", "usage: driver [script]".red().bold());
      64
    },
  };

  std::process::exit(exit_code);
}
