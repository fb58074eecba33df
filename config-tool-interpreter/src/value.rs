use std::rc::Rc;

/// A fully resolved value. Constant references never survive evaluation, so
/// there is no variant for them.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    Integer(i64),
    String(String),
    List(Vec<Rc<Value>>),
}

impl Value {
    pub fn integer(value: i64) -> Rc<Value> {
        Rc::new(Value::Integer(value))
    }
    pub fn string(value: String) -> Rc<Value> {
        Rc::new(Value::String(value))
    }
    pub fn list(values: Vec<Rc<Value>>) -> Rc<Value> {
        Rc::new(Value::List(values))
    }
}
