pub mod definitions;
mod error;
pub mod values;

use std::rc::Rc;

use crate::ast::Program;
use crate::error::ConfigError;
use crate::lexer::{Token, TokenKind, TokenKindName, Tokenizer};
use definitions::parse_definition;

/// Deepest `(list ...)` nesting accepted. Parsing, evaluation and rendering
/// all recurse once per level, so this bounds their stack use.
pub const MAX_LIST_DEPTH: usize = 256;

/// Recursive-descent parser with a single token of lookahead in `cur`.
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    pub cur: Token,
    pub(crate) depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokenizer: Tokenizer<'a>) -> Result<Self, ConfigError> {
        let cur = tokenizer.next_token()?;
        Ok(Self {
            tokenizer,
            cur,
            depth: 0,
        })
    }

    /// Moves to the next token, returning the one that was current.
    pub(crate) fn advance(&mut self) -> Result<Token, ConfigError> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.cur, next))
    }

    pub(crate) fn parse_ident(&mut self) -> Result<Rc<str>, ConfigError> {
        match &self.cur.kind {
            TokenKind::Ident(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(error::unexpected_token(TokenKindName::Ident, &self.cur)),
        }
    }

    pub(crate) fn expect_token(&mut self, token_kind: TokenKindName) -> Result<Token, ConfigError> {
        if self.cur.kind.name() != token_kind {
            return Err(error::unexpected_token(token_kind, &self.cur));
        }
        self.advance()
    }

    /// `program := definition* EOF`
    pub fn parse_program(&mut self) -> Result<Program, ConfigError> {
        let mut definitions = Vec::new();
        while self.cur.kind != TokenKind::Eof {
            definitions.push(parse_definition(self)?);
        }
        Ok(Program { definitions })
    }
}
