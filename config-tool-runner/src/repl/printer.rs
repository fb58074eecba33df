use std::collections::HashSet;

use config_tool_core::ast::Program;
use config_tool_core::ConfigError;
use config_tool_interpreter::environment::Environment;
use config_tool_toml::writer::render_value;

/// Prints the bindings `program` defined, in the order it defined them.
pub fn print(program: &Program, result: Result<&Environment, ConfigError>) {
    match result {
        Ok(environment) => {
            let mut printed = HashSet::new();
            for definition in &program.definitions {
                let name = &definition.identifier.name;
                if !printed.insert(name.clone()) {
                    continue;
                }
                if let Some(value) = environment.get(name) {
                    println!("{} = {}", name, render_value(&value));
                }
            }
        }
        Err(err) => println!("Error evaluating:\n{}", err),
    }
}
