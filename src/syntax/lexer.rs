//! Token definitions for the declaration line grammar.

use logos::Logos;
use smol_str::SmolStr;

/// Tokens of a single declaration line.
///
/// The grammar is deliberately tiny: identifiers, `=`, and `::`.
/// Anything else (literals, punctuation, call syntax) fails to lex and
/// poisons the whole line into a syntax error.
#[derive(Logos, Clone, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    /// An identifier: letter or underscore, then letters/digits/underscores.
    ///
    /// Case rules (aliases all-caps, segments uppercase-led) are enforced
    /// by the parser, not the lexer, so that `tu = Models::User` reports
    /// a syntax error instead of an unknown-character error.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| SmolStr::new(lex.slice()))]
    Ident(SmolStr),

    #[token("=")]
    Eq,

    #[token("::")]
    PathSep,
}

/// Lex a line into tokens, or `None` if any byte fails to tokenize.
pub fn tokenize(line: &str) -> Option<Vec<Token>> {
    let mut tokens = Vec::new();
    for result in Token::lexer(line) {
        tokens.push(result.ok()?);
    }
    Some(tokens)
}
