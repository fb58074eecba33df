use config_tool_core::ast::Program;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    Exit,
    Clear,
    Value(Program),
}

pub struct Reader {
    rl: DefaultEditor,
}

impl Reader {
    pub fn new(rl: DefaultEditor) -> Self {
        Self { rl }
    }

    pub fn read(&mut self) -> ReadOutput {
        let readline = self.rl.readline(PROMPT);

        let line = match readline {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                return ReadOutput::Clear; // Clear line
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                return ReadOutput::Exit;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                return ReadOutput::Exit;
            }
            Ok(line) => {
                if let Err(err) = self.rl.add_history_entry(line.as_str()) {
                    println!("Error: {:?}", err);
                }
                line
            }
        };

        match config_tool_core::parse(&line) {
            Ok(program) => ReadOutput::Value(program),
            Err(error) => {
                println!("Parsing error:\n{}", error);
                ReadOutput::Clear
            }
        }
    }
}
