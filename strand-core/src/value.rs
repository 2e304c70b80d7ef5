//! The tagged value type and the sequence type it builds on.
//!
//! A Value is one of a fixed set of variants chosen to drive LED
//! appliances efficiently: 32-bit integers, doubles, short strings,
//! native operations, sequences (the bodies of functions, loops and
//! conditionals), integer arrays sized to a whole LED string, and
//! symbols naming dictionary entries. There are no general lists,
//! maps or records.

use std::fmt;
use std::rc::Rc;

use crate::dict::Dictionary;
use crate::mem::MemStats;

/// A native operation bound into the dictionary.
pub type PrimitiveFn = fn(&mut crate::interp::Interp);

#[derive(Clone)]
pub enum Value {
    /// Placeholder for a recycled cell.
    Free,
    Int(i32),
    Float(f64),
    /// Owned character data. The tokenizer can never produce one with
    /// embedded whitespace.
    Str(String),
    /// A native operation, optionally carrying a captured sequence
    /// that `call` re-enters.
    Func {
        op: PrimitiveFn,
        quote: Option<Rc<Sequence>>,
    },
    /// A shared reference to a sequence. Dictionary-bound sequences
    /// are deep-copied at definition time, so sharing is safe.
    Seq(Rc<Sequence>),
    /// Owned 32-bit integer buffer with a fixed length.
    Array(Vec<i32>),
    /// The name of a dictionary entry, resolved at evaluation time.
    Sym(Rc<str>),
}

/// An ordered run of values, executed front to back.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    pub items: Vec<Value>,
}

impl Default for Value {
    fn default() -> Self {
        Value::Free
    }
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Free => "free",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Func { .. } => "func",
            Value::Seq(_) => "seq",
            Value::Array(_) => "array",
            Value::Sym(_) => "sym",
        }
    }

    /// Integer view of a value. Symbols resolve through the
    /// dictionary; anything non-numeric reads as zero.
    pub fn as_int(&self, dict: &Dictionary) -> i32 {
        match self {
            Value::Int(n) => *n,
            Value::Float(f) => *f as i32,
            Value::Str(s) => s.parse().unwrap_or(0),
            Value::Sym(w) => dict.find(w).map_or(0, |v| v.as_int(dict)),
            _ => 0,
        }
    }

    pub fn as_float(&self, dict: &Dictionary) -> f64 {
        match self {
            Value::Int(n) => *n as f64,
            Value::Float(f) => *f,
            Value::Str(s) => s.parse().unwrap_or(0.0),
            Value::Sym(w) => dict.find(w).map_or(0.0, |v| v.as_float(dict)),
            _ => 0.0,
        }
    }

    pub fn as_string(&self, dict: &Dictionary) -> String {
        match self {
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Str(s) => s.clone(),
            Value::Sym(w) => dict.find(w).map_or(String::new(), |v| v.as_string(dict)),
            _ => String::new(),
        }
    }

    pub fn as_seq(&self, dict: &Dictionary) -> Option<Rc<Sequence>> {
        match self {
            Value::Seq(s) => Some(s.clone()),
            Value::Sym(w) => dict.find(w).and_then(|v| v.as_seq(dict)),
            _ => None,
        }
    }
}

// Func holds a bare function pointer, so Debug is written by hand.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Free => write!(f, "Free"),
            Value::Int(n) => write!(f, "Int({})", n),
            Value::Float(x) => write!(f, "Float({})", x),
            Value::Str(s) => write!(f, "Str({})", s),
            Value::Func { quote, .. } => match quote {
                Some(q) => write!(f, "Func(<native>, {} captured)", q.items.len()),
                None => write!(f, "Func(<native>)"),
            },
            Value::Seq(s) => write!(f, "Seq({} items)", s.items.len()),
            Value::Array(ia) => write!(f, "Array({:?})", ia),
            Value::Sym(w) => write!(f, "Sym({})", w),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Free, Value::Free) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Sym(a), Value::Sym(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b),
            (Value::Func { op: a, quote: qa }, Value::Func { op: b, quote: qb }) => {
                *a as usize == *b as usize
                    && match (qa, qb) {
                        (Some(x), Some(y)) => Rc::ptr_eq(x, y),
                        (None, None) => true,
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

// The console rendering used by `.`, `prtstk` and the step tracer.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Free => write!(f, "<free>"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => {
                if x.is_finite() && x.fract() == 0.0 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{}", x)
                }
            }
            Value::Str(s) => write!(f, "{}", s),
            Value::Func { .. } => write!(f, "<func>"),
            Value::Seq(_) => write!(f, "<seq>"),
            Value::Array(ia) => write!(f, "<int[{}]>", ia.len()),
            Value::Sym(w) => write!(f, "<{}>", w),
        }
    }
}

/// Copy a value, cloning owned payloads, and account for the new
/// cell. Sequences are shared, not copied.
pub fn clone_value(v: &Value, mem: &mut MemStats) -> Value {
    mem.on_alloc(v);
    v.clone()
}

/// Release a value's cell. The payload of a shared sequence is left
/// alone; dictionary teardown and top-level teardown walk sequences
/// explicitly.
pub fn free_value(v: Value, mem: &mut MemStats) {
    mem.on_free(&v);
}

/// Deep-copy a sequence, recursing into nested sequences, with every
/// new cell accounted for. Used when a sequence is bound into a
/// dictionary so the entry owns its body outright.
pub fn deep_clone_seq(seq: &Sequence, mem: &mut MemStats) -> Sequence {
    let mut items = Vec::with_capacity(seq.items.len());
    for item in &seq.items {
        let copy = match item {
            Value::Seq(inner) => Value::Seq(Rc::new(deep_clone_seq(inner, mem))),
            other => other.clone(),
        };
        mem.on_alloc(&copy);
        items.push(copy);
    }
    Sequence { items }
}

/// Account for the teardown of a sequence and everything it contains.
pub fn free_sequence(seq: &Sequence, mem: &mut MemStats) {
    for item in &seq.items {
        if let Value::Seq(inner) = item {
            free_sequence(inner, mem);
        }
        mem.on_free(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_console_format() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(5.0).to_string(), "5.0");
        assert_eq!(Value::Float(1.25).to_string(), "1.25");
        assert_eq!(Value::Str("red".into()).to_string(), "red");
        assert_eq!(Value::Array(vec![0, 0, 0]).to_string(), "<int[3]>");
        assert_eq!(Value::Sym("dup".into()).to_string(), "<dup>");
        assert_eq!(Value::Free.to_string(), "<free>");
    }

    #[test]
    fn coercions_read_zero_on_mismatch() {
        let dict = Dictionary::new();
        assert_eq!(Value::Str("17".into()).as_int(&dict), 17);
        assert_eq!(Value::Str("oops".into()).as_int(&dict), 0);
        assert_eq!(Value::Float(3.9).as_int(&dict), 3);
        assert_eq!(Value::Array(vec![1]).as_int(&dict), 0);
        assert_eq!(Value::Free.as_float(&dict), 0.0);
    }

    #[test]
    fn deep_clone_counts_every_cell() {
        let mut mem = MemStats::default();
        let inner = Sequence {
            items: vec![Value::Int(1), Value::Int(2)],
        };
        let outer = Sequence {
            items: vec![Value::Seq(Rc::new(inner)), Value::Str("x".into())],
        };
        let copy = deep_clone_seq(&outer, &mut mem);
        assert_eq!(mem.allocs, 4);
        free_sequence(&copy, &mut mem);
        assert_eq!(mem.frees, 4);
        assert_eq!(mem.live, 0);
    }
}
