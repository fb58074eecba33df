use config_tool_core::ast::Program;
use config_tool_core::ConfigError;
use config_tool_interpreter::environment::Environment;
use config_tool_interpreter::evaluator::eval_program_with;

/// Bindings that persist across lines of an interactive session.
#[derive(Default)]
pub struct Session {
    environment: Environment,
}

impl Session {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    /// Evaluates one line's program. A failing line leaves the session as it
    /// was.
    pub fn evaluate(&mut self, program: &Program) -> Result<&Environment, ConfigError> {
        self.environment = eval_program_with(program, &self.environment)?;
        Ok(&self.environment)
    }
}
