//! The broadcasting numeric model.
//!
//! Every arithmetic word is an integer operator with an optional
//! float twin, lifted over the operand shapes by `unary`, `binary`
//! and `ternary`:
//!
//! - The float twin runs when it exists and at least one operand is
//!   neither INT nor ARRAY. Words without a twin always take the
//!   integer path, coercing as needed.
//! - If any operand is an ARRAY the result is an ARRAY as long as
//!   the longest array operand. Scalar operands broadcast; a shorter
//!   array reads as zero past its end. Float results are truncated
//!   per element.
//! - All-scalar integer operands produce an INT; the float path
//!   produces a FLOAT.

use crate::interp::Interp;
use crate::value::Value;

pub type FloatOp1 = fn(f64) -> f64;
pub type FloatOp2 = fn(f64, f64) -> f64;
pub type FloatOp3 = fn(f64, f64, f64) -> f64;

fn is_int_or_array(v: &Value) -> bool {
    matches!(v, Value::Int(_) | Value::Array(_))
}

fn elem_int(interp: &Interp, v: &Value, i: usize) -> i32 {
    match v {
        Value::Array(ia) => ia.get(i).copied().unwrap_or(0),
        other => other.as_int(&interp.dict),
    }
}

fn elem_float(interp: &Interp, v: &Value, i: usize) -> f64 {
    match v {
        Value::Array(ia) => ia.get(i).map(|&n| n as f64).unwrap_or(0.0),
        other => other.as_float(&interp.dict),
    }
}

fn span(v: &Value) -> usize {
    match v {
        Value::Array(ia) => ia.len(),
        _ => 1,
    }
}

pub fn unary<FI, FF>(interp: &mut Interp, op: FI, fop: Option<FF>)
where
    FI: Fn(i32) -> i32,
    FF: Fn(f64) -> f64,
{
    let a = interp.pop_operand();
    match &a {
        Value::Array(ia) => {
            let rs: Vec<i32> = ia.iter().map(|&x| op(x)).collect();
            interp.push_value(Value::Array(rs));
        }
        Value::Int(n) => interp.push_int(op(*n)),
        other => match &fop {
            Some(f) => interp.push_float(f(other.as_float(&interp.dict))),
            None => interp.push_int(op(other.as_int(&interp.dict))),
        },
    }
    interp.drop_value(a);
}

pub fn binary<FI, FF>(interp: &mut Interp, op: FI, fop: Option<FF>)
where
    FI: Fn(i32, i32) -> i32,
    FF: Fn(f64, f64) -> f64,
{
    let b = interp.pop_operand();
    let a = interp.pop_operand();

    // The float twin runs only when some operand falls outside the
    // integer world; drop it otherwise so one check covers all paths.
    let fop = match fop {
        Some(f) if !(is_int_or_array(&a) && is_int_or_array(&b)) => Some(f),
        _ => None,
    };

    if matches!(a, Value::Array(_)) || matches!(b, Value::Array(_)) {
        let len = span(&a).max(span(&b));
        let mut rs = vec![0i32; len];
        for (i, slot) in rs.iter_mut().enumerate() {
            *slot = match &fop {
                Some(f) => f(elem_float(interp, &a, i), elem_float(interp, &b, i)) as i32,
                None => op(elem_int(interp, &a, i), elem_int(interp, &b, i)),
            };
        }
        interp.push_value(Value::Array(rs));
    } else if let Some(f) = &fop {
        let r = f(a.as_float(&interp.dict), b.as_float(&interp.dict));
        interp.push_float(r);
    } else {
        let r = op(a.as_int(&interp.dict), b.as_int(&interp.dict));
        interp.push_int(r);
    }

    interp.drop_value(a);
    interp.drop_value(b);
}

pub fn ternary<FI, FF>(interp: &mut Interp, op: FI, fop: Option<FF>)
where
    FI: Fn(i32, i32, i32) -> i32,
    FF: Fn(f64, f64, f64) -> f64,
{
    let c = interp.pop_operand();
    let b = interp.pop_operand();
    let a = interp.pop_operand();

    let fop = match fop {
        Some(f) if !(is_int_or_array(&a) && is_int_or_array(&b) && is_int_or_array(&c)) => Some(f),
        _ => None,
    };

    let any_array =
        matches!(a, Value::Array(_)) || matches!(b, Value::Array(_)) || matches!(c, Value::Array(_));

    if any_array {
        let len = span(&a).max(span(&b)).max(span(&c));
        let mut rs = vec![0i32; len];
        for (i, slot) in rs.iter_mut().enumerate() {
            *slot = match &fop {
                Some(f) => f(
                    elem_float(interp, &a, i),
                    elem_float(interp, &b, i),
                    elem_float(interp, &c, i),
                ) as i32,
                None => op(
                    elem_int(interp, &a, i),
                    elem_int(interp, &b, i),
                    elem_int(interp, &c, i),
                ),
            };
        }
        interp.push_value(Value::Array(rs));
    } else if let Some(f) = &fop {
        let r = f(
            a.as_float(&interp.dict),
            b.as_float(&interp.dict),
            c.as_float(&interp.dict),
        );
        interp.push_float(r);
    } else {
        let r = op(
            a.as_int(&interp.dict),
            b.as_int(&interp.dict),
            c.as_int(&interp.dict),
        );
        interp.push_int(r);
    }

    interp.drop_value(a);
    interp.drop_value(b);
    interp.drop_value(c);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn popped_array(interp: &mut Interp) -> Vec<i32> {
        match interp.pop() {
            Some(Value::Array(ia)) => ia,
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn scalar_ints_stay_int() {
        let mut interp = Interp::new();
        interp.push_int(2);
        interp.push_int(3);
        binary(&mut interp, |a, b| a + b, Some(|a: f64, b: f64| a + b));
        assert_eq!(interp.pop(), Some(Value::Int(5)));
    }

    #[test]
    fn one_float_operand_selects_the_float_twin() {
        let mut interp = Interp::new();
        interp.push_int(2);
        interp.push_float(0.5);
        binary(&mut interp, |a, b| a + b, Some(|a: f64, b: f64| a + b));
        assert_eq!(interp.pop(), Some(Value::Float(2.5)));
    }

    #[test]
    fn arrays_broadcast_against_scalars() {
        let mut interp = Interp::new();
        interp.push_value(Value::Array(vec![1, 2, 3]));
        interp.push_int(10);
        binary(&mut interp, |a, b| a * b, Some(|a: f64, b: f64| a * b));
        assert_eq!(popped_array(&mut interp), vec![10, 20, 30]);
    }

    #[test]
    fn shorter_arrays_read_zero_past_their_end() {
        let mut interp = Interp::new();
        interp.push_value(Value::Array(vec![1, 2, 3, 4]));
        interp.push_value(Value::Array(vec![10, 20]));
        binary(&mut interp, |a, b| a + b, Some(|a: f64, b: f64| a + b));
        assert_eq!(popped_array(&mut interp), vec![11, 22, 3, 4]);
    }

    #[test]
    fn float_results_truncate_in_array_mode() {
        let mut interp = Interp::new();
        interp.push_value(Value::Array(vec![3, 4, 5]));
        interp.push_float(2.0);
        binary(
            &mut interp,
            |a, b| if b == 0 { 0 } else { a / b },
            Some(|a: f64, b: f64| if b == 0.0 { 0.0 } else { a / b }),
        );
        assert_eq!(popped_array(&mut interp), vec![1, 2, 2]);
    }

    #[test]
    fn pairwise_equals_elementwise_application() {
        let ia = vec![3, -1, 7, 0, 22];
        let op = |a: i32, b: i32| a.wrapping_mul(b).wrapping_add(1);
        let mut interp = Interp::new();
        interp.push_value(Value::Array(ia.clone()));
        interp.push_value(Value::Array(ia.clone()));
        binary(&mut interp, op, None::<FloatOp2>);
        let rs = popped_array(&mut interp);
        for (i, &x) in ia.iter().enumerate() {
            assert_eq!(rs[i], op(x, x));
        }
    }

    #[test]
    fn ternary_lifts_over_the_longest_operand() {
        let mut interp = Interp::new();
        interp.push_value(Value::Array(vec![-5, 50, 500]));
        interp.push_int(0);
        interp.push_int(100);
        ternary(
            &mut interp,
            |a, lo, hi| a.max(lo).min(hi),
            None::<FloatOp3>,
        );
        assert_eq!(popped_array(&mut interp), vec![0, 50, 100]);
    }

    #[test]
    fn missing_operands_read_as_zero() {
        let mut interp = Interp::new();
        interp.push_int(4);
        binary(&mut interp, |a, b| a - b, None::<FloatOp2>);
        assert_eq!(interp.pop(), Some(Value::Int(-4)));
        assert_eq!(interp.stack.len(), 0);
    }
}
