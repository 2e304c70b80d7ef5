//! Dictionary words.

use crate::interp::Interp;
#[cfg(test)]
use crate::value::Value;

// ( value name -- ) single live entry per name: forget, then bind.
pub fn def(interp: &mut Interp) {
    let word = interp.pop_string();
    let value = interp.pop_operand();
    let Interp { dict, mem, .. } = interp;
    dict.forget(&word, mem);
    dict.define(&word, value, mem);
}

// ( value name -- ) bind without forgetting; the old entry is shadowed.
pub fn redef(interp: &mut Interp) {
    let word = interp.pop_string();
    let value = interp.pop_operand();
    let Interp { dict, mem, .. } = interp;
    dict.define(&word, value, mem);
}

// ( name -- )
pub fn forget(interp: &mut Interp) {
    let word = interp.pop_string();
    let Interp { dict, mem, .. } = interp;
    dict.forget(&word, mem);
}

// ( name -- flag )
pub fn defp(interp: &mut Interp) {
    let word = interp.pop_string();
    let flag = interp.dict.contains(&word) as i32;
    interp.push_int(flag);
}

// ( name -- value ) copy of the bound value; 0 when unbound.
pub fn vget(interp: &mut Interp) {
    let word = interp.pop_string();
    match interp.dict.find(&word).cloned() {
        Some(v) => {
            interp.mem.on_alloc(&v);
            interp.stack.push(v);
        }
        None => interp.push_int(0),
    }
}

// Turn on step tracing.
pub fn step(interp: &mut Interp) {
    interp.step = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_keeps_one_live_entry_per_name() {
        let mut interp = Interp::new();
        let before = interp.dict.len();
        interp.run_line("1 'k def 2 'k def 3 'k def");
        assert_eq!(interp.dict.len(), before + 1);
        interp.run_line("@k");
        assert_eq!(interp.pop_int(), 3);
    }

    #[test]
    fn redef_shadows_and_forget_unshadows() {
        let mut interp = Interp::new();
        interp.run_line("1 'k def 2 'k redef");
        interp.run_line("@k");
        assert_eq!(interp.pop_int(), 2);
        interp.run_line("'k forget @k");
        assert_eq!(interp.pop_int(), 1);
    }

    #[test]
    fn defp_and_vget_tolerate_unknown_names() {
        let mut interp = Interp::new();
        interp.run_line("'ghost def? 'ghost vget");
        assert_eq!(interp.pop_int(), 0);
        assert_eq!(interp.pop_int(), 0);
    }

    #[test]
    fn vget_copies_array_payloads() {
        let mut interp = Interp::new();
        interp.run_line("3 array 'buf def");
        interp.run_line("@buf 0 9 puta");
        let copy = interp.pop();
        assert_eq!(copy, Some(Value::Array(vec![9, 0, 0])));
        interp.run_line("'buf 0 dgeta");
        assert_eq!(interp.pop_int(), 0); // the bound array is untouched
    }

    #[test]
    fn bang_sigil_compiles_to_def() {
        let mut interp = Interp::new();
        interp.run_line("44 !speed @speed");
        assert_eq!(interp.pop_int(), 44);
    }
}
