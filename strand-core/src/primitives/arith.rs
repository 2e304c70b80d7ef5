//! Arithmetic words, all lifted through the broadcasting model.
//! Integer paths wrap on overflow; division and modulo by zero read
//! as zero like every other fault.

use std::f64::consts::PI;

use crate::interp::Interp;
use crate::numeric::{binary, ternary, unary, FloatOp1, FloatOp2, FloatOp3};
use crate::value::Value;

pub fn add(interp: &mut Interp) {
    binary(interp, |a, b| a.wrapping_add(b), Some::<FloatOp2>(|a, b| a + b));
}

pub fn sub(interp: &mut Interp) {
    binary(interp, |a, b| a.wrapping_sub(b), Some::<FloatOp2>(|a, b| a - b));
}

pub fn mul(interp: &mut Interp) {
    binary(interp, |a, b| a.wrapping_mul(b), Some::<FloatOp2>(|a, b| a * b));
}

pub fn div(interp: &mut Interp) {
    binary(
        interp,
        |a, b| if b == 0 { 0 } else { a.wrapping_div(b) },
        Some::<FloatOp2>(|a, b| if b == 0.0 { 0.0 } else { a / b }),
    );
}

// Float remainder is a - trunc(a/b)*b, so it matches the integer
// word's sign behaviour.
pub fn modulo(interp: &mut Interp) {
    binary(
        interp,
        |a, b| if b == 0 { 0 } else { a.wrapping_rem(b) },
        Some::<FloatOp2>(|a, b| if b == 0.0 { 0.0 } else { a - (a / b).trunc() * b }),
    );
}

pub fn sq(interp: &mut Interp) {
    unary(interp, |a| a.wrapping_mul(a), Some::<FloatOp1>(|a| a * a));
}

pub fn sqrt(interp: &mut Interp) {
    unary(
        interp,
        |a| (a as f64).sqrt() as i32,
        Some::<FloatOp1>(f64::sqrt),
    );
}

pub fn abs(interp: &mut Interp) {
    unary(interp, |a| a.wrapping_abs(), Some::<FloatOp1>(f64::abs));
}

pub fn pow(interp: &mut Interp) {
    binary(
        interp,
        |a, b| (a as f64).powf(b as f64) as i32,
        Some::<FloatOp2>(f64::powf),
    );
}

// Rounding words are the identity on integers.
pub fn round(interp: &mut Interp) {
    unary(interp, |a| a, Some::<FloatOp1>(f64::round));
}

pub fn ceil(interp: &mut Interp) {
    unary(interp, |a| a, Some::<FloatOp1>(f64::ceil));
}

pub fn floor(interp: &mut Interp) {
    unary(interp, |a| a, Some::<FloatOp1>(f64::floor));
}

pub fn sin(interp: &mut Interp) {
    unary(
        interp,
        |a| (a as f64).sin() as i32,
        Some::<FloatOp1>(f64::sin),
    );
}

pub fn cos(interp: &mut Interp) {
    unary(
        interp,
        |a| (a as f64).cos() as i32,
        Some::<FloatOp1>(f64::cos),
    );
}

pub fn tan(interp: &mut Interp) {
    unary(
        interp,
        |a| (a as f64).tan() as i32,
        Some::<FloatOp1>(f64::tan),
    );
}

pub fn deg(interp: &mut Interp) {
    unary(
        interp,
        |a| (a as f64 * 180.0 / PI) as i32,
        Some::<FloatOp1>(|a| a * 180.0 / PI),
    );
}

pub fn rad(interp: &mut Interp) {
    unary(
        interp,
        |a| (a as f64 * PI / 180.0) as i32,
        Some::<FloatOp1>(|a| a * PI / 180.0),
    );
}

pub fn min(interp: &mut Interp) {
    binary(
        interp,
        |a, b| if a < b { a } else { b },
        Some::<FloatOp2>(|a, b| if a < b { a } else { b }),
    );
}

pub fn max(interp: &mut Interp) {
    binary(
        interp,
        |a, b| if a > b { a } else { b },
        Some::<FloatOp2>(|a, b| if a > b { a } else { b }),
    );
}

// ( a lo hi -- clamped )
pub fn constrain(interp: &mut Interp) {
    ternary(
        interp,
        |a, lo, hi| {
            if a < lo {
                lo
            } else if a > hi {
                hi
            } else {
                a
            }
        },
        Some::<FloatOp3>(|a, lo, hi| {
            if a < lo {
                lo
            } else if a > hi {
                hi
            } else {
                a
            }
        }),
    );
}

// ( array -- total ) scalar word; anything else sums to zero.
pub fn sum(interp: &mut Interp) {
    let v = interp.pop_operand();
    let total = match &v {
        Value::Array(ia) => ia.iter().fold(0i32, |acc, &x| acc.wrapping_add(x)),
        _ => 0,
    };
    interp.push_int(total);
    interp.drop_value(v);
}
