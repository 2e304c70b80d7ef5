//! Clock and randomness words. Delays block the whole evaluator by
//! design; `now` pushes milliseconds as a float so a counter past the
//! 32-bit range stays exact enough for scheduling.

use rand::Rng;

use crate::interp::Interp;

// ( ms -- )
pub fn delay(interp: &mut Interp) {
    let ms = interp.pop_int();
    if ms > 0 {
        interp.clock.delay_ms(ms);
    }
}

// ( us -- )
pub fn delayus(interp: &mut Interp) {
    let us = interp.pop_int();
    if us > 0 {
        interp.clock.delay_us(us);
    }
}

// ( -- ms )
pub fn now(interp: &mut Interp) {
    let ms = interp.clock.millis();
    interp.push_float(ms);
}

// ( max -- n ) uniform in [0, max).
pub fn rndm(interp: &mut Interp) {
    let max = interp.pop_int();
    let n = if max > 0 {
        rand::thread_rng().gen_range(0..max)
    } else {
        0
    };
    interp.push_int(n);
}

// ( min max -- n ) uniform in [min, max); an empty range reads min.
pub fn rrndm(interp: &mut Interp) {
    let max = interp.pop_int();
    let min = interp.pop_int();
    let n = if max > min {
        rand::thread_rng().gen_range(min..max)
    } else {
        min
    };
    interp.push_int(n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn now_is_a_float() {
        let mut interp = Interp::new();
        now(&mut interp);
        assert!(matches!(interp.pop(), Some(Value::Float(_))));
    }

    #[test]
    fn random_words_respect_their_ranges() {
        let mut interp = Interp::new();
        for _ in 0..100 {
            interp.run_line("10 rndm");
            let n = interp.pop_int();
            assert!((0..10).contains(&n));
            interp.run_line("5 8 rrndm");
            let n = interp.pop_int();
            assert!((5..8).contains(&n));
        }
        interp.run_line("0 rndm 9 3 rrndm");
        assert_eq!(interp.pop_int(), 9);
        assert_eq!(interp.pop_int(), 0);
    }
}
