use crate::ast::{Definition, Identifier};
use crate::error::ConfigError;
use crate::lexer::TokenKindName;
use crate::parser::values::parse_value;
use crate::parser::Parser;

/// `definition := "def" IDENTIFIER ":=" value`
pub fn parse_definition(parser: &mut Parser) -> Result<Definition, ConfigError> {
    parser.expect_token(TokenKindName::Def)?;
    let name = parser.parse_ident()?;
    parser.expect_token(TokenKindName::Assign)?;
    let value = parse_value(parser)?;

    Ok(Definition {
        identifier: Identifier { name },
        value,
    })
}
