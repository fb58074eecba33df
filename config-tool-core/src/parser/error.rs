use crate::error::{ConfigError, ErrorKind};
use crate::lexer::{Token, TokenKindName};

pub(crate) fn unexpected_token(expected: TokenKindName, got: &Token) -> ConfigError {
    ConfigError::new(
        ErrorKind::UnexpectedToken {
            expected,
            got: got.kind.name(),
        },
        got.line,
        got.column,
    )
}

pub(crate) fn expected_value(got: &Token) -> ConfigError {
    ConfigError::new(
        ErrorKind::ExpectedValue {
            got: got.kind.name(),
        },
        got.line,
        got.column,
    )
}

pub(crate) fn unterminated_list(at: &Token) -> ConfigError {
    ConfigError::new(ErrorKind::UnterminatedList, at.line, at.column)
}

pub(crate) fn integer_out_of_range(at: &Token) -> ConfigError {
    ConfigError::new(ErrorKind::IntegerOutOfRange, at.line, at.column)
}

pub(crate) fn list_too_deep(at: &Token) -> ConfigError {
    ConfigError::new(ErrorKind::ListTooDeep, at.line, at.column)
}
