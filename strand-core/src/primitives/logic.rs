//! Comparison and boolean words. Integer-only: float operands are
//! truncated on the way in, results are 1 or 0 (and/or pass values
//! through).

use crate::interp::Interp;
use crate::numeric::{binary, unary, FloatOp1, FloatOp2};

fn comp(a: i32, b: i32) -> i32 {
    if a > b {
        1
    } else if a < b {
        -1
    } else {
        0
    }
}

pub fn eq(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) == 0) as i32, None::<FloatOp2>);
}

pub fn ne(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) != 0) as i32, None::<FloatOp2>);
}

pub fn gt(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) == 1) as i32, None::<FloatOp2>);
}

pub fn lt(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) == -1) as i32, None::<FloatOp2>);
}

pub fn ge(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) != -1) as i32, None::<FloatOp2>);
}

pub fn le(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) != 1) as i32, None::<FloatOp2>);
}

// ( a b -- a|0 ) a when b is true, else 0.
pub fn and(interp: &mut Interp) {
    binary(interp, |a, b| if b != 0 { a } else { 0 }, None::<FloatOp2>);
}

// ( a b -- a|b ) a when a is true, else b.
pub fn or(interp: &mut Interp) {
    binary(interp, |a, b| if a != 0 { a } else { b }, None::<FloatOp2>);
}

pub fn not(interp: &mut Interp) {
    unary(interp, |a| (a == 0) as i32, None::<FloatOp1>);
}
