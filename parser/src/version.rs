pub use lexer::GrammarVersion;
