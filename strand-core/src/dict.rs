//! The word dictionary.
//!
//! An ordered list of (word, value) entries. Definition appends;
//! lookup scans from the newest entry back, so redefinition shadows
//! and `forget` re-exposes whatever was shadowed. This is the only
//! key-value structure in the runtime and it is not general purpose:
//! the scan is linear and word strings live in their entries.

use std::rc::Rc;

use crate::mem::MemStats;
use crate::value::{deep_clone_seq, free_sequence, PrimitiveFn, Sequence, Value};

#[derive(Debug)]
pub struct DictEntry {
    pub word: Rc<str>,
    pub value: Value,
}

#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind a word, shadowing any existing binding. A sequence value
    /// is deep-copied so the entry owns its body.
    pub fn define(&mut self, word: &str, value: Value, mem: &mut MemStats) {
        let value = match value {
            Value::Seq(seq) => Value::Seq(Rc::new(deep_clone_seq(&seq, mem))),
            other => other,
        };
        self.entries.push(DictEntry {
            word: Rc::from(word),
            value,
        });
    }

    pub fn define_native(&mut self, word: &str, op: PrimitiveFn, mem: &mut MemStats) {
        let v = Value::Func { op, quote: None };
        mem.on_alloc(&v);
        self.define(word, v, mem);
    }

    /// The current (newest) binding of a word.
    pub fn find(&self, word: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|e| &*e.word == word)
            .map(|e| &e.value)
    }

    pub fn find_mut(&mut self, word: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .rev()
            .find(|e| &*e.word == word)
            .map(|e| &mut e.value)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Unlink the newest binding of a word, releasing its value. A
    /// shadowed older binding becomes visible again.
    pub fn forget(&mut self, word: &str, mem: &mut MemStats) {
        if let Some(idx) = self.entries.iter().rposition(|e| &*e.word == word) {
            let entry = self.entries.remove(idx);
            if let Value::Seq(seq) = &entry.value {
                free_sequence(seq, mem);
            }
            mem.on_free(&entry.value);
        }
    }

    /// Entries newest first, the order the console lists them in.
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &DictEntry> {
        self.entries.iter().rev()
    }
}

/// Free-standing so callers with a split interpreter borrow can use it.
pub fn bound_seq(dict: &Dictionary, word: &str) -> Option<Rc<Sequence>> {
    dict.find(word).and_then(|v| v.as_seq(dict))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_definition_wins() {
        let mut mem = MemStats::default();
        let mut d = Dictionary::new();
        d.define("w", Value::Int(1), &mut mem);
        d.define("w", Value::Int(2), &mut mem);
        assert_eq!(d.find("w"), Some(&Value::Int(2)));
    }

    #[test]
    fn forget_reexposes_the_shadowed_binding() {
        let mut mem = MemStats::default();
        let mut d = Dictionary::new();
        d.define("w", Value::Int(1), &mut mem);
        d.define("w", Value::Int(2), &mut mem);
        d.forget("w", &mut mem);
        assert_eq!(d.find("w"), Some(&Value::Int(1)));
        d.forget("w", &mut mem);
        assert_eq!(d.find("w"), None);
        d.forget("w", &mut mem);
        assert_eq!(d.find("w"), None);
    }

    #[test]
    fn binding_a_sequence_takes_a_private_copy() {
        let mut mem = MemStats::default();
        let mut d = Dictionary::new();
        let body = Rc::new(Sequence {
            items: vec![Value::Int(7)],
        });
        d.define("f", Value::Seq(body.clone()), &mut mem);
        match d.find("f") {
            Some(Value::Seq(bound)) => assert!(!Rc::ptr_eq(bound, &body)),
            other => panic!("unexpected binding {:?}", other),
        }
    }
}
