mod evaluator;
mod printer;
mod reader;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use evaluator::Session;
use reader::{ReadOutput, Reader};

struct Repl {
    reader: Reader,
    session: Session,
}

impl Repl {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::Exit => break,
                ReadOutput::Clear => continue,
                ReadOutput::Value(program) => {
                    let result = self.session.evaluate(&program);
                    printer::print(&program, result)
                }
            }
        }
    }
}

pub fn start() -> Result<(), ReadlineError> {
    let rl = DefaultEditor::new()?;

    Repl {
        reader: Reader::new(rl),
        session: Session::new(),
    }
    .run();
    Ok(())
}
