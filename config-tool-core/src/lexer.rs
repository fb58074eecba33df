use std::fmt::Display;
use std::rc::Rc;

use crate::error::{ConfigError, ErrorKind};

const BLOCK_COMMENT_OPEN: &str = "{{!--";
const BLOCK_COMMENT_CLOSE: &str = "--}}";

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Eof,
    LParen,
    RParen,
    Assign,
    ConstRef(Rc<str>),
    String(Rc<str>),
    Number(Rc<str>),

    // Keywords
    Def,
    List,

    Ident(Rc<str>),
}

/// Payload-free mirror of [`TokenKind`], used in diagnostics.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKindName {
    Eof,
    LParen,
    RParen,
    Assign,
    ConstRef,
    String,
    Number,
    Def,
    List,
    Ident,
}

impl TokenKind {
    pub fn name(&self) -> TokenKindName {
        match self {
            TokenKind::Eof => TokenKindName::Eof,
            TokenKind::LParen => TokenKindName::LParen,
            TokenKind::RParen => TokenKindName::RParen,
            TokenKind::Assign => TokenKindName::Assign,
            TokenKind::ConstRef(_) => TokenKindName::ConstRef,
            TokenKind::String(_) => TokenKindName::String,
            TokenKind::Number(_) => TokenKindName::Number,
            TokenKind::Def => TokenKindName::Def,
            TokenKind::List => TokenKindName::List,
            TokenKind::Ident(_) => TokenKindName::Ident,
        }
    }
}

impl TokenKindName {
    pub fn to_str(self) -> &'static str {
        match self {
            TokenKindName::Eof => "EOF",
            TokenKindName::LParen => "LPAREN",
            TokenKindName::RParen => "RPAREN",
            TokenKindName::Assign => "ASSIGN",
            TokenKindName::ConstRef => "CONSTREF",
            TokenKindName::String => "STRING",
            TokenKindName::Number => "NUMBER",
            TokenKindName::Def => "DEF",
            TokenKindName::List => "LIST",
            TokenKindName::Ident => "IDENT",
        }
    }
}

impl Display for TokenKindName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.kind.name())?;
        match &self.kind {
            TokenKind::ConstRef(text)
            | TokenKind::String(text)
            | TokenKind::Number(text)
            | TokenKind::Ident(text) => write!(f, " {:?}", text),
            _ => Ok(()),
        }
    }
}

fn keywords(word: &str) -> Option<TokenKind> {
    match word {
        "def" => Some(TokenKind::Def),
        "list" => Some(TokenKind::List),
        _ => None,
    }
}

fn is_identifier(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| ch.is_ascii_uppercase())
}

#[derive(Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            failed: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn next_if(&mut self, func: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if func(ch) => self.bump(),
            _ => None,
        }
    }

    /// Consumes `pattern` if the input continues with it.
    fn eat(&mut self, pattern: &str) -> bool {
        if !self.rest().starts_with(pattern) {
            return false;
        }
        for _ in pattern.chars() {
            self.bump();
        }
        true
    }

    /// Builds an error at the cursor, with the cursor's line and a caret
    /// under its column.
    fn error(&self, kind: ErrorKind) -> ConfigError {
        let start = self.input[..self.pos]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let end = self.rest()
            .find('\n')
            .map(|idx| self.pos + idx)
            .unwrap_or(self.input.len());
        let snippet = format!(
            "{}\n{}^",
            &self.input[start..end],
            " ".repeat(self.column.saturating_sub(1))
        );
        ConfigError::new(kind, self.line, self.column).with_snippet(snippet)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ConfigError> {
        loop {
            if self.next_if(char::is_whitespace).is_some() {
                continue;
            }

            if self.peek() == Some('%') {
                while self.next_if(|ch| ch != '\n').is_some() {}
                continue;
            }

            if self.eat(BLOCK_COMMENT_OPEN) {
                while !self.eat(BLOCK_COMMENT_CLOSE) {
                    if self.bump().is_none() {
                        return Err(self.error(ErrorKind::UnterminatedComment));
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    fn read_word(&mut self) -> &'a str {
        let start = self.pos;
        while self.next_if(char::is_alphabetic).is_some() {}
        &self.input[start..self.pos]
    }

    fn read_word_token(&mut self) -> Result<TokenKind, ConfigError> {
        let word = self.read_word();
        if let Some(keyword) = keywords(word) {
            return Ok(keyword);
        }
        if !is_identifier(word) {
            return Err(self.error(ErrorKind::InvalidIdentifier));
        }
        Ok(TokenKind::Ident(word.into()))
    }

    fn read_const_ref(&mut self) -> Result<TokenKind, ConfigError> {
        let name = self.read_word();
        if !is_identifier(name) {
            return Err(self.error(ErrorKind::InvalidConstantName));
        }
        if self.next_if(|ch| ch == '}').is_none() {
            return Err(self.error(ErrorKind::MissingConstantBrace));
        }
        Ok(TokenKind::ConstRef(name.into()))
    }

    fn read_string(&mut self) -> Result<TokenKind, ConfigError> {
        let start = self.pos;
        loop {
            match self.peek() {
                None => return Err(self.error(ErrorKind::UnterminatedString)),
                Some('\n') => return Err(self.error(ErrorKind::NewlineInString)),
                Some('"') => break,
                Some(_) => {
                    self.bump();
                }
            }
        }
        let text = &self.input[start..self.pos];
        self.bump();
        Ok(TokenKind::String(text.into()))
    }

    fn read_number(&mut self) -> Result<TokenKind, ConfigError> {
        let start = self.pos;
        self.next_if(|ch| ch == '+' || ch == '-');

        match self.bump_digit() {
            None => return Err(self.error(ErrorKind::MissingDigitAfterSign)),
            Some('0') => {}
            Some(_) => {
                while self.bump_digit().is_some() {}
            }
        }
        if self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            return Err(self.error(ErrorKind::LeadingZeros));
        }

        Ok(TokenKind::Number(self.input[start..self.pos].into()))
    }

    fn bump_digit(&mut self) -> Option<char> {
        self.next_if(|ch| ch.is_ascii_digit())
    }

    pub fn next_token(&mut self) -> Result<Token, ConfigError> {
        self.skip_whitespace_and_comments()?;

        let (line, column) = (self.line, self.column);
        let Some(ch) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                line,
                column,
            });
        };

        let kind = match ch {
            '(' => {
                self.bump();
                TokenKind::LParen
            }
            ')' => {
                self.bump();
                TokenKind::RParen
            }
            ':' if self.eat(":=") => TokenKind::Assign,
            '#' if self.eat("#{") => self.read_const_ref()?,
            '@' if self.eat("@\"") => self.read_string()?,
            '+' | '-' => self.read_number()?,
            c if c.is_ascii_digit() => self.read_number()?,
            c if c.is_alphabetic() => self.read_word_token()?,
            c => return Err(self.error(ErrorKind::UnexpectedCharacter(c))),
        };

        Ok(Token { kind, line, column })
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token, ConfigError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_token() {
            Ok(Token {
                kind: TokenKind::Eof,
                ..
            }) => None,
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Tokenizer::new(input)
            .map(|token| token.unwrap().kind)
            .collect::<Vec<_>>()
    }

    fn lex_error(input: &str) -> ConfigError {
        Tokenizer::new(input)
            .find_map(Result::err)
            .expect("input should fail to tokenize")
    }

    #[test]
    fn test_punctuation() {
        let input = "():=";
        let output = Tokenizer::new(input)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(
            output,
            vec![
                Token {
                    kind: TokenKind::LParen,
                    line: 1,
                    column: 1
                },
                Token {
                    kind: TokenKind::RParen,
                    line: 1,
                    column: 2
                },
                Token {
                    kind: TokenKind::Assign,
                    line: 1,
                    column: 3
                },
            ]
        );
    }

    #[test]
    fn test_definitions() {
        let input = "def PORT := 8080
    def NAME := @\"srv 1\"
    def ALL := (list #{PORT} -3 (list))
    ";
        let expected_output = vec![
            TokenKind::Def,
            TokenKind::Ident("PORT".into()),
            TokenKind::Assign,
            TokenKind::Number("8080".into()),
            TokenKind::Def,
            TokenKind::Ident("NAME".into()),
            TokenKind::Assign,
            TokenKind::String("srv 1".into()),
            TokenKind::Def,
            TokenKind::Ident("ALL".into()),
            TokenKind::Assign,
            TokenKind::LParen,
            TokenKind::List,
            TokenKind::ConstRef("PORT".into()),
            TokenKind::Number("-3".into()),
            TokenKind::LParen,
            TokenKind::List,
            TokenKind::RParen,
            TokenKind::RParen,
        ];

        assert_eq!(kinds(input), expected_output)
    }

    #[test]
    fn test_positions() {
        let input = "def A := 1\n  def B := @\"x\"";
        let positions = Tokenizer::new(input)
            .map(|token| {
                let token = token.unwrap();
                (token.line, token.column)
            })
            .collect::<Vec<_>>();

        assert_eq!(
            positions,
            vec![(1, 1), (1, 5), (1, 7), (1, 10), (2, 3), (2, 7), (2, 9), (2, 12)]
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut tokenizer = Tokenizer::new("  % nothing here");
        for _ in 0..3 {
            let token = tokenizer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!((token.line, token.column), (1, 17));
        }
    }

    #[test]
    fn test_numbers() {
        let tests = vec![
            ("0", "0"),
            ("-0", "-0"),
            ("+0", "+0"),
            ("7", "7"),
            ("-12", "-12"),
            ("+7", "+7"),
            ("1234567890", "1234567890"),
        ];

        for (input, expected) in tests {
            assert_eq!(kinds(input), vec![TokenKind::Number(expected.into())]);
        }
    }

    #[test]
    fn test_number_errors() {
        let tests = vec![
            ("01", ErrorKind::LeadingZeros),
            ("-01", ErrorKind::LeadingZeros),
            ("007", ErrorKind::LeadingZeros),
            ("+", ErrorKind::MissingDigitAfterSign),
            ("- 1", ErrorKind::MissingDigitAfterSign),
            ("-x", ErrorKind::MissingDigitAfterSign),
        ];

        for (input, expected) in tests {
            assert_eq!(lex_error(input).kind, expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_number_followed_by_word() {
        assert_eq!(
            kinds("0A"),
            vec![TokenKind::Number("0".into()), TokenKind::Ident("A".into())]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            kinds("A ABC def list XYZ"),
            vec![
                TokenKind::Ident("A".into()),
                TokenKind::Ident("ABC".into()),
                TokenKind::Def,
                TokenKind::List,
                TokenKind::Ident("XYZ".into()),
            ]
        );

        // Keywords are case-sensitive.
        assert_eq!(kinds("LIST"), vec![TokenKind::Ident("LIST".into())]);

        for input in ["AbC", "abc", "Def", "ÄB"] {
            assert_eq!(
                lex_error(input).kind,
                ErrorKind::InvalidIdentifier,
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_identifier_stops_at_digit() {
        assert_eq!(
            kinds("AB1"),
            vec![TokenKind::Ident("AB".into()), TokenKind::Number("1".into())]
        );
    }

    #[test]
    fn test_const_refs() {
        assert_eq!(kinds("#{HOST}"), vec![TokenKind::ConstRef("HOST".into())]);

        let tests = vec![
            ("#{host}", ErrorKind::InvalidConstantName),
            ("#{}", ErrorKind::InvalidConstantName),
            ("#{Host}", ErrorKind::InvalidConstantName),
            ("#{HOST", ErrorKind::MissingConstantBrace),
            ("#{HOST1}", ErrorKind::MissingConstantBrace),
            ("#HOST", ErrorKind::UnexpectedCharacter('#')),
        ];

        for (input, expected) in tests {
            assert_eq!(lex_error(input).kind, expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_strings() {
        assert_eq!(kinds("@\"\""), vec![TokenKind::String("".into())]);
        assert_eq!(
            kinds("@\"Привет, мир\""),
            vec![TokenKind::String("Привет, мир".into())]
        );
        assert_eq!(
            kinds(r#"@"C:\path\n""#),
            vec![TokenKind::String(r"C:\path\n".into())]
        );
        assert_eq!(
            kinds("@\"% not {{!-- a comment\""),
            vec![TokenKind::String("% not {{!-- a comment".into())]
        );

        assert_eq!(lex_error("@\"oops").kind, ErrorKind::UnterminatedString);
        assert_eq!(lex_error("@\"oops\n\"").kind, ErrorKind::NewlineInString);
        assert_eq!(
            lex_error("\"plain\"").kind,
            ErrorKind::UnexpectedCharacter('"')
        );
    }

    #[test]
    fn test_comments() {
        let with_comments = "% header\ndef A := 1 % tail\n{{!--\nmulti\nline\n--}}def B := (list {{!-- x --}} 2)";
        let without_comments = "\ndef A := 1 \n def B := (list  2)";

        assert_eq!(kinds(with_comments), kinds(without_comments));
    }

    #[test]
    fn test_block_comment_is_not_nested() {
        assert_eq!(
            kinds("{{!-- {{!-- --}} 1"),
            vec![TokenKind::Number("1".into())]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let error = lex_error("{{!-- no end\n def A := 1\n");
        assert_eq!(error.kind, ErrorKind::UnterminatedComment);
        assert_eq!((error.line, error.column), (3, 1));
        assert_eq!(error.to_string(), "3:1: Unterminated multiline comment\n\n^");
    }

    #[test]
    fn test_error_snippet() {
        let error = lex_error("def A := 1\ndef AbC := 1\ndef C := 3");
        assert_eq!((error.line, error.column), (2, 8));
        assert_eq!(
            error.to_string(),
            "2:8: Identifier must match [A-Z]+\ndef AbC := 1\n       ^"
        );
    }

    #[test]
    fn test_unexpected_character() {
        let error = lex_error("def A := 1;");
        assert_eq!(error.kind, ErrorKind::UnexpectedCharacter(';'));
        assert_eq!(
            error.to_string(),
            "1:11: Unexpected character: ';'\ndef A := 1;\n          ^"
        );
        assert_eq!(
            lex_error("def A : 1").kind,
            ErrorKind::UnexpectedCharacter(':')
        );

        let tests = vec![
            ("def A := '", "1:10: Unexpected character: \"'\""),
            ("def A := \u{01}", "1:10: Unexpected character: '\\x01'"),
            ("def A := \u{200b}1", "1:10: Unexpected character: '\\u200b'"),
            ("def A := \\", "1:10: Unexpected character: '\\\\'"),
        ];

        for (input, expected) in tests {
            let rendered = lex_error(input).to_string();
            assert_eq!(rendered.lines().next(), Some(expected), "input: {input:?}");
        }
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let output = Tokenizer::new("def $ A B").collect::<Vec<_>>();
        assert_eq!(output.len(), 2);
        assert!(output[0].is_ok());
        assert!(output[1].is_err());
    }

    #[test]
    fn test_token_display() {
        let output = Tokenizer::new("def A := @\"x\"")
            .map(|token| token.unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            output,
            vec!["1:1 DEF", "1:5 IDENT \"A\"", "1:7 ASSIGN", "1:10 STRING \"x\""]
        );
    }
}
