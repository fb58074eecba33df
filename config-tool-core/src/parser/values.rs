use crate::ast::{ConstRef, Value};
use crate::error::ConfigError;
use crate::lexer::{Token, TokenKind, TokenKindName};
use crate::parser::{error, Parser, MAX_LIST_DEPTH};

/// `value := NUMBER | STRING | list_expr | CONSTREF`
pub fn parse_value(parser: &mut Parser) -> Result<Value, ConfigError> {
    let Token { kind, line, column } = parser.cur.clone();
    let value = match kind {
        TokenKind::LParen => return parse_list(parser),
        TokenKind::Number(literal) => Value::Integer(
            literal
                .parse()
                .map_err(|_| error::integer_out_of_range(&parser.cur))?,
        ),
        TokenKind::String(text) => Value::Text(text.to_string()),
        TokenKind::ConstRef(name) => Value::ConstRef(ConstRef { name, line, column }),
        _ => return Err(error::expected_value(&parser.cur)),
    };
    parser.advance()?;
    Ok(value)
}

/// `list_expr := "(" "list" value* ")"`
fn parse_list(parser: &mut Parser) -> Result<Value, ConfigError> {
    if parser.depth == MAX_LIST_DEPTH {
        return Err(error::list_too_deep(&parser.cur));
    }
    parser.expect_token(TokenKindName::LParen)?;
    parser.expect_token(TokenKindName::List)?;
    parser.depth += 1;

    let mut values = Vec::new();
    loop {
        match parser.cur.kind {
            TokenKind::RParen => break,
            TokenKind::Eof => return Err(error::unterminated_list(&parser.cur)),
            _ => values.push(parse_value(parser)?),
        }
    }
    parser.expect_token(TokenKindName::RParen)?;
    parser.depth -= 1;

    Ok(Value::List(values))
}
