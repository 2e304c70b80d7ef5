//! Integer array words. Arrays are fixed-length, zero-initialised,
//! and mutated in place; out-of-range reads push 0 and out-of-range
//! writes vanish.

use crate::eval;
use crate::interp::Interp;
use crate::value::Value;

// ( n -- array )
pub fn array(interp: &mut Interp) {
    let n = interp.pop_int().max(0) as usize;
    interp.push_value(Value::Array(vec![0; n]));
}

// ( array -- array ) element i becomes i.
pub fn identity(interp: &mut Interp) {
    if let Some(Value::Array(ia)) = interp.stack.top_mut() {
        for (i, slot) in ia.iter_mut().enumerate() {
            *slot = i as i32;
        }
    }
}

// ( array idx -- array value )
pub fn geta(interp: &mut Interp) {
    let idx = interp.pop_int();
    let value = match interp.stack.top() {
        Some(Value::Array(ia)) if idx >= 0 => ia.get(idx as usize).copied().unwrap_or(0),
        _ => 0,
    };
    interp.push_int(value);
}

// ( array idx value -- array )
pub fn puta(interp: &mut Interp) {
    let value = interp.pop_int();
    let idx = interp.pop_int();
    if let Some(Value::Array(ia)) = interp.stack.top_mut() {
        if idx >= 0 {
            if let Some(slot) = ia.get_mut(idx as usize) {
                *slot = value;
            }
        }
    }
}

// ( word idx -- value ) reads an array bound in the dictionary.
pub fn dgeta(interp: &mut Interp) {
    let idx = interp.pop_int();
    let word = interp.pop_string();
    let value = match interp.dict.find(&word) {
        Some(Value::Array(ia)) if idx >= 0 => ia.get(idx as usize).copied().unwrap_or(0),
        _ => 0,
    };
    interp.push_int(value);
}

// ( word idx value -- ) writes an array bound in the dictionary.
pub fn dputa(interp: &mut Interp) {
    let value = interp.pop_int();
    let idx = interp.pop_int();
    let word = interp.pop_string();
    if let Some(Value::Array(ia)) = interp.dict.find_mut(&word) {
        if idx >= 0 {
            if let Some(slot) = ia.get_mut(idx as usize) {
                *slot = value;
            }
        }
    }
}

// ( array -- array len )
pub fn size(interp: &mut Interp) {
    let n = match interp.stack.top() {
        Some(Value::Array(ia)) => ia.len() as i32,
        _ => 0,
    };
    interp.push_int(n);
}

// ( array seq -- array ) run the sequence once per element with the
// element pushed first; the element is replaced by the single integer
// the sequence leaves behind.
pub fn map(interp: &mut Interp) {
    let block = interp.pop_seq();
    let target = interp.pop_operand();
    match (block, target) {
        (Some(block), Value::Array(mut ia)) => {
            for i in 0..ia.len() {
                interp.push_int(ia[i]);
                eval::run_sequence(interp, &block);
                ia[i] = interp.pop_int();
            }
            interp.stack.push(Value::Array(ia));
        }
        (None, target) => interp.stack.push(target),
        (_, other) => interp.drop_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_is_zeroed_and_identity_fills_indices() {
        let mut interp = Interp::new();
        interp.run_line("4 array");
        assert_eq!(interp.pop(), Some(Value::Array(vec![0, 0, 0, 0])));
        interp.run_line("4 array identity");
        assert_eq!(interp.pop(), Some(Value::Array(vec![0, 1, 2, 3])));
    }

    #[test]
    fn geta_and_puta_leave_the_array_in_place() {
        let mut interp = Interp::new();
        interp.run_line("3 array 1 42 puta 1 geta");
        assert_eq!(interp.pop_int(), 42);
        assert_eq!(interp.pop(), Some(Value::Array(vec![0, 42, 0])));
    }

    #[test]
    fn out_of_range_reads_zero_and_writes_vanish() {
        let mut interp = Interp::new();
        interp.run_line("2 array 9 geta");
        assert_eq!(interp.pop_int(), 0);
        interp.run_line("9 7 puta");
        assert_eq!(interp.pop(), Some(Value::Array(vec![0, 0])));
        interp.run_line("5 geta"); // nothing left but an empty stack
        assert_eq!(interp.pop_int(), 0);
    }

    #[test]
    fn dictionary_arrays_are_shared_state() {
        let mut interp = Interp::new();
        interp.run_line("8 array 'leds def");
        interp.run_line("'leds 3 77 dputa");
        interp.run_line("'leds 3 dgeta");
        assert_eq!(interp.pop_int(), 77);
        interp.run_line("'nosuch 0 dgeta");
        assert_eq!(interp.pop_int(), 0);
    }

    #[test]
    fn size_reads_without_popping() {
        let mut interp = Interp::new();
        interp.run_line("6 array size");
        assert_eq!(interp.pop_int(), 6);
        assert!(matches!(interp.pop(), Some(Value::Array(_))));
        interp.run_line("3 size");
        assert_eq!(interp.pop_int(), 0);
        assert_eq!(interp.pop_int(), 3);
    }

    #[test]
    fn map_replaces_each_element() {
        let mut interp = Interp::new();
        interp.run_line("5 array identity [ dup * ] map");
        assert_eq!(interp.pop(), Some(Value::Array(vec![0, 1, 4, 9, 16])));
    }
}
