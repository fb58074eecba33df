use std::rc::Rc;

use thiserror::Error;

use crate::lexer::TokenKindName;
use crate::parser::MAX_LIST_DEPTH;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum ErrorKind {
    #[error("Unterminated multiline comment")]
    UnterminatedComment,
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Newline inside string literal")]
    NewlineInString,
    #[error("Unterminated list: expected ')'")]
    UnterminatedList,
    #[error("Identifier must match [A-Z]+")]
    InvalidIdentifier,
    #[error("Constant name must match [A-Z]+")]
    InvalidConstantName,
    #[error("Expected '}}' after constant name")]
    MissingConstantBrace,
    #[error("Expected digit after sign")]
    MissingDigitAfterSign,
    #[error("Leading zeros are not allowed")]
    LeadingZeros,
    #[error("Integer literal out of range")]
    IntegerOutOfRange,
    #[error("List nesting exceeds {} levels", MAX_LIST_DEPTH)]
    ListTooDeep,
    #[error("Unexpected character: {}", quote_char(.0))]
    UnexpectedCharacter(char),
    #[error("Expected {expected}, got {got}")]
    UnexpectedToken {
        expected: TokenKindName,
        got: TokenKindName,
    },
    #[error("Expected value, got {got}")]
    ExpectedValue { got: TokenKindName },
    #[error("Undefined constant: {0}")]
    UndefinedConstant(Rc<str>),
}

/// The one error every stage of the pipeline reports.
///
/// Renders as `line:column: message`, followed by the snippet on the next
/// lines when there is one.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("{line}:{column}: {kind}{}", render_snippet(.snippet))]
pub struct ConfigError {
    pub kind: ErrorKind,
    pub line: usize,
    pub column: usize,
    pub snippet: Option<String>,
}

fn render_snippet(snippet: &Option<String>) -> String {
    match snippet {
        Some(snippet) => format!("\n{snippet}"),
        None => String::new(),
    }
}

/// Quotes a character for diagnostics. Single quotes are used unless the
/// character is itself a single quote; unprintable characters become `\xNN`,
/// `\uNNNN` or `\UNNNNNNNN`.
fn quote_char(ch: &char) -> String {
    let quote = if *ch == '\'' { '"' } else { '\'' };
    let body = match *ch {
        '\\' => "\\\\".to_owned(),
        '\t' => "\\t".to_owned(),
        '\n' => "\\n".to_owned(),
        '\r' => "\\r".to_owned(),
        c if is_printable(c) => c.to_string(),
        c if (c as u32) < 0x100 => format!("\\x{:02x}", c as u32),
        c if (c as u32) < 0x10000 => format!("\\u{:04x}", c as u32),
        c => format!("\\U{:08x}", c as u32),
    };
    format!("{quote}{body}{quote}")
}

/// Control, separator (other than a plain space), format and private-use
/// characters are escaped; everything else is written as-is.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    if ch.is_control() || ch.is_whitespace() {
        return false;
    }
    !matches!(
        ch as u32,
        0x00AD
            | 0x0600..=0x0605
            | 0x061C
            | 0x06DD
            | 0x070F
            | 0x0890..=0x0891
            | 0x08E2
            | 0x180E
            | 0x200B..=0x200F
            | 0x202A..=0x202E
            | 0x2060..=0x2064
            | 0x2066..=0x206F
            | 0xFEFF
            | 0xFFF9..=0xFFFB
            | 0x110BD
            | 0x110CD
            | 0x13430..=0x1343F
            | 0x1BCA0..=0x1BCA3
            | 0x1D173..=0x1D17A
            | 0xE0001
            | 0xE0020..=0xE007F
            | 0xE000..=0xF8FF
            | 0xF0000..=0xFFFFD
            | 0x100000..=0x10FFFD
    )
}

impl ConfigError {
    pub fn new(kind: ErrorKind, line: usize, column: usize) -> Self {
        ConfigError {
            kind,
            line,
            column,
            snippet: None,
        }
    }

    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = Some(snippet);
        self
    }
}
