use std::rc::Rc;

use crate::environment::Environment;
use crate::value::Value;
use config_tool_core::ast;
use config_tool_core::{ConfigError, ErrorKind};

pub fn eval_program(program: &ast::Program) -> Result<Environment, ConfigError> {
    eval_program_with(program, &Environment::new())
}

/// Evaluates `program` on top of the bindings in `base`. The base is left
/// untouched; on success the extended environment is returned.
pub fn eval_program_with(
    program: &ast::Program,
    base: &Environment,
) -> Result<Environment, ConfigError> {
    let mut environment = base.clone();
    for definition in &program.definitions {
        eval_definition(definition, &mut environment)?;
    }
    Ok(environment)
}

fn eval_definition(
    definition: &ast::Definition,
    environment: &mut Environment,
) -> Result<(), ConfigError> {
    let value = eval_value(&definition.value, environment)?;
    environment.set(definition.identifier.name.clone(), value);
    Ok(())
}

fn eval_value(value: &ast::Value, environment: &Environment) -> Result<Rc<Value>, ConfigError> {
    match value {
        ast::Value::Integer(value) => Ok(Value::integer(*value)),
        ast::Value::Text(value) => Ok(Value::string(value.clone())),
        ast::Value::List(values) => Ok(Value::list(
            values
                .iter()
                .map(|value| eval_value(value, environment))
                .collect::<Result<Vec<_>, _>>()?,
        )),
        ast::Value::ConstRef(reference) => eval_const_ref(reference, environment),
    }
}

fn eval_const_ref(
    reference: &ast::ConstRef,
    environment: &Environment,
) -> Result<Rc<Value>, ConfigError> {
    environment.get(&reference.name).ok_or_else(|| {
        ConfigError::new(
            ErrorKind::UndefinedConstant(reference.name.clone()),
            reference.line,
            reference.column,
        )
    })
}
