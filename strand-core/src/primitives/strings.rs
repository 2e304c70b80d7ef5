//! Number formatting and substring words.

use crate::interp::Interp;

// ( num width dps -- str ) fixed-point rendering.
pub fn num_dec(interp: &mut Interp) {
    let dps = interp.pop_int().max(0) as usize;
    let width = interp.pop_int().max(0) as usize;
    let num = interp.pop_float();
    interp.push_str(format!("{:w$.p$}", num, w = width, p = dps));
}

// ( num width dps -- str ) scientific rendering.
pub fn num_sci(interp: &mut Interp) {
    let dps = interp.pop_int().max(0) as usize;
    let width = interp.pop_int().max(0) as usize;
    let num = interp.pop_float();
    interp.push_str(format!("{:w$.p$E}", num, w = width, p = dps));
}

// ( str start len -- sub ) pushes nothing when start is past the end.
pub fn str_mid(interp: &mut Interp) {
    let len = interp.pop_int().max(0) as usize;
    let start = interp.pop_int().max(0) as usize;
    let s = interp.pop_string();
    if start < s.len() {
        let end = (start + len).min(s.len());
        if let Some(sub) = s.get(start..end) {
            interp.push_str(sub);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_point_rendering() {
        let mut interp = Interp::new();
        interp.run_line("3.14159 7 2 num:dec");
        assert_eq!(interp.pop_string(), "   3.14");
    }

    #[test]
    fn scientific_rendering() {
        let mut interp = Interp::new();
        interp.run_line("1500.0 0 2 num:sci");
        assert_eq!(interp.pop_string(), "1.50E3");
    }

    #[test]
    fn substrings_clamp_to_the_end() {
        let mut interp = Interp::new();
        interp.run_line("'firmware 4 3 str:mid");
        assert_eq!(interp.pop_string(), "war");
        interp.run_line("'firmware 6 99 str:mid");
        assert_eq!(interp.pop_string(), "re");
        interp.run_line("'firmware 20 3 str:mid");
        assert_eq!(interp.stack.len(), 0); // start past the end pushes nothing
    }
}
