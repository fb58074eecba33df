use std::path::Path;

use config_tool_core::lexer::Tokenizer;
use config_tool_core::{parse, ConfigError};
use config_tool_interpreter::evaluator::eval_program;
use config_tool_toml::to_toml;
use miette::{IntoDiagnostic, WrapErr};
use thiserror::Error;

use crate::Emit;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0:?}")]
    Io(miette::Report),
}

impl From<miette::Report> for RunError {
    fn from(value: miette::Report) -> Self {
        RunError::Io(value)
    }
}

pub fn execute(input: &Path, output: Option<&Path>, emit: Emit) -> Result<(), RunError> {
    let text = std::fs::read_to_string(input)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading {} failed", input.display()))?;

    let rendered = render(&text, emit)?;

    match output {
        Some(path) => std::fs::write(path, rendered)
            .into_diagnostic()
            .wrap_err_with(|| format!("writing {} failed", path.display()))?,
        None => print!("{}", rendered),
    }
    Ok(())
}

pub fn render(text: &str, emit: Emit) -> Result<String, ConfigError> {
    match emit {
        Emit::Toml => translate(text),
        Emit::Tokens => Tokenizer::new(text)
            .map(|token| token.map(|token| format!("{}\n", token)))
            .collect(),
        Emit::Ast => Ok(parse(text)?.to_string()),
    }
}

pub fn translate(text: &str) -> Result<String, ConfigError> {
    let program = parse(text)?;
    let environment = eval_program(&program)?;
    Ok(to_toml(&environment))
}
