pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use error::{ConfigError, ErrorKind};

/// Tokenizes and parses a whole configuration text.
pub fn parse(input: &str) -> Result<ast::Program, ConfigError> {
    let tokenizer = lexer::Tokenizer::new(input);
    parser::Parser::new(tokenizer)?.parse_program()
}
