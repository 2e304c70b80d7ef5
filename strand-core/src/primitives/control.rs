//! Control-flow words. Each one pops its operands, then re-enters the
//! evaluator on the chosen sequence. A missing sequence operand means
//! nothing runs.

use crate::dict::bound_seq;
use crate::eval;
use crate::interp::Interp;

// ( seq cond -- )
pub fn if_word(interp: &mut Interp) {
    let test = interp.pop_int();
    let block = interp.pop_seq();
    if test != 0 {
        if let Some(block) = block {
            eval::run_sequence(interp, &block);
        }
    }
}

// ( then-seq else-seq cond -- )
pub fn ife(interp: &mut Interp) {
    let test = interp.pop_int();
    let else_block = interp.pop_seq();
    let then_block = interp.pop_seq();
    let chosen = if test != 0 { then_block } else { else_block };
    if let Some(block) = chosen {
        eval::run_sequence(interp, &block);
    }
}

// ( seq begin end -- ) runs for i in [begin,end), or downward through
// end+1 when begin is the larger; i is pushed before each run.
pub fn loop_word(interp: &mut Interp) {
    let end = interp.pop_int();
    let begin = interp.pop_int();
    let Some(block) = interp.pop_seq() else {
        return;
    };
    if begin < end {
        let mut i = begin;
        while i < end {
            interp.push_int(i);
            eval::run_sequence(interp, &block);
            i += 1;
        }
    } else {
        let mut i = begin;
        while i > end {
            interp.push_int(i);
            eval::run_sequence(interp, &block);
            i -= 1;
        }
    }
}

// ( seq n -- ) n runs, no index.
pub fn repeat(interp: &mut Interp) {
    let times = interp.pop_int();
    let Some(block) = interp.pop_seq() else {
        return;
    };
    for _ in 0..times {
        eval::run_sequence(interp, &block);
    }
}

// Re-enter the captured sequence of the word being executed, or, with
// no capture, pop a name and run the sequence bound to it.
pub fn call(interp: &mut Interp) {
    if let Some(block) = interp.quote.clone() {
        eval::run_sequence(interp, &block);
    } else {
        let word = interp.pop_string();
        if let Some(block) = bound_seq(&interp.dict, &word) {
            eval::run_sequence(interp, &block);
        }
    }
}
