use crate::token::TokenKind;
use crate::GrammarVersion;

/// Maps an identifier spelling to a keyword token, or `None` if it should be
/// tokenized as a plain `Identifier`.
///
/// `print` and `exec` are only keywords while the selected grammar version
/// still treats them as statements (see `parser::version`); recognizing them
/// as keywords at lex time and then gating their *statement* production in
/// the parser mirrors how the original `pythonparser` lexer behaves.
pub fn lookup(ident: &str, version: GrammarVersion) -> Option<TokenKind> {
  use TokenKind::*;
  Some(match ident {
    "and" => And,
    "as" => As,
    "assert" => Assert,
    "break" => Break,
    "class" => Class,
    "continue" => Continue,
    "def" => Def,
    "del" => Del,
    "elif" => Elif,
    "else" => Else,
    "except" => Except,
    "finally" => Finally,
    "for" => For,
    "from" => From,
    "global" => Global,
    "if" => If,
    "import" => Import,
    "in" => In,
    "is" => Is,
    "lambda" => Lambda,
    "not" => Not,
    "or" => Or,
    "pass" => Pass,
    "raise" => Raise,
    "return" => Return,
    "try" => Try,
    "while" => While,
    "with" => With,
    "yield" => Yield,
    "None" => None_,
    "True" => True_,
    "False" => False_,
    "print" if version.has_print_statement() => Print,
    "exec" if version.has_exec_statement() => Exec,
    _ => return Option::None,
  })
}
