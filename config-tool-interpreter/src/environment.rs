use crate::value::Value;
use std::collections::HashMap;
use std::rc::Rc;

/// Name to value bindings, iterated in the order names were first defined.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Environment {
    store: HashMap<Rc<str>, usize>,
    entries: Vec<(Rc<str>, Rc<Value>)>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            store: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Rc<Value>> {
        self.store
            .get(key)
            .map(|&index| self.entries[index].1.clone())
    }

    /// Binds `key`, returning the value it replaced. A rebound key keeps its
    /// original position.
    pub fn set(&mut self, key: Rc<str>, value: Rc<Value>) -> Option<Rc<Value>> {
        match self.store.get(&key) {
            Some(&index) => Some(std::mem::replace(&mut self.entries[index].1, value)),
            None => {
                self.store.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Rc<Value>)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
