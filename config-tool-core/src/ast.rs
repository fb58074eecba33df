use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub struct Definition {
    pub identifier: Identifier,
    pub value: Value,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Integer(i64),
    Text(String),
    List(Vec<Value>),
    ConstRef(ConstRef),
}

/// A `#{NAME}` placeholder, with the position it was written at.
#[derive(Debug, PartialEq, Clone)]
pub struct ConstRef {
    pub name: Rc<str>,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub name: Rc<str>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub definitions: Vec<Definition>,
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "@\"{}\"", value),
            Value::List(values) => {
                write!(f, "(list")?;
                for value in values {
                    write!(f, " {}", value)?;
                }
                write!(f, ")")
            }
            Value::ConstRef(reference) => write!(f, "#{{{}}}", reference.name),
        }
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "def {} := {}", self.identifier.name, self.value)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for definition in &self.definitions {
            writeln!(f, "{}", definition)?;
        }
        Ok(())
    }
}
