//! The evaluator.
//!
//! A sequence runs front to back. Native operations dispatch with
//! their captured sequence (if any) exposed for `call`; symbols
//! resolve against the dictionary at the moment they execute; every
//! other value pushes a copy of itself. Control-flow words re-enter
//! `run_sequence`, which is the only recursion in the runtime.

use crate::interp::Interp;
use crate::value::{Sequence, Value};

pub fn run_sequence(interp: &mut Interp, seq: &Sequence) {
    for item in &seq.items {
        run_value(interp, item);
    }
}

pub fn run_value(interp: &mut Interp, v: &Value) {
    match v {
        Value::Func { op, quote } => {
            let saved = std::mem::replace(&mut interp.quote, quote.clone());
            op(interp);
            interp.quote = saved;
        }
        Value::Sym(word) => match interp.dict.find(word).cloned() {
            Some(Value::Func { op, quote }) => {
                let saved = std::mem::replace(&mut interp.quote, quote);
                op(interp);
                interp.quote = saved;
            }
            Some(bound) => {
                interp.mem.on_alloc(&bound);
                interp.stack.push(bound);
            }
            // The binding was forgotten after compilation; nothing to do.
            None => {}
        },
        other => {
            let copy = crate::value::clone_value(other, &mut interp.mem);
            interp.stack.push(copy);
        }
    }

    if interp.step {
        if let Some(trace) = interp.step_fn {
            trace(interp, v);
        }
    }
}

/// The default step tracer: the value just run, then the stack.
pub fn trace_to_console(interp: &mut Interp, last: &Value) {
    let mut line = format!("{}: ", last);
    for v in interp.stack.iter_top_down() {
        line.push_str(&v.to_string());
        line.push(' ');
    }
    interp.out.write_line(&line);
}
