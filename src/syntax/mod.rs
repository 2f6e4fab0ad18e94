//! Lexer and parser for the line-oriented declaration format.

mod lexer;
mod line;
mod script;

pub use lexer::Token;
pub use line::{LineError, LineOutcome, parse_line};
pub use script::{ScriptLine, candidates, parse_script};
