//! Color words. Packing order follows the global byte-order selector;
//! the HSV words broadcast like arithmetic, so a whole string of hues
//! converts in one word.

use crate::color;
use crate::interp::Interp;
use crate::numeric::{ternary, FloatOp3};
use crate::value::Value;

// ( n -- ) select the RGB byte order, 0..=5.
pub fn rgbformat(interp: &mut Interp) {
    interp.rgb_format = interp.pop_int();
}

// ( b g r -- color )
pub fn rgb_to_color(interp: &mut Interp) {
    let r = interp.pop_int();
    let g = interp.pop_int();
    let b = interp.pop_int();
    let fmt = interp.rgb_format;
    interp.push_int(color::pack(fmt, r, g, b));
}

// ( color -- b g r )
pub fn color_to_rgb(interp: &mut Interp) {
    let c = interp.pop_int();
    let (r, g, b) = color::unpack(interp.rgb_format, c);
    interp.push_int(b);
    interp.push_int(g);
    interp.push_int(r);
}

// ( h s l -- color ) HSL-style mapping, broadcast over arrays.
pub fn hsv(interp: &mut Interp) {
    let fmt = interp.rgb_format;
    ternary(
        interp,
        move |h, s, l| color::make_color(fmt, h, s, l),
        None::<FloatOp3>,
    );
}

// ( h s v -- color ) rainbow mapping, broadcast over arrays.
pub fn hsvr(interp: &mut Interp) {
    let fmt = interp.rgb_format;
    ternary(
        interp,
        move |h, s, v| color::hsv_rainbow(fmt, h, s, v),
        None::<FloatOp3>,
    );
}

// ( a b ratio -- blended )
pub fn blend(interp: &mut Interp) {
    let ratio = interp.pop_int();
    let b = interp.pop_int();
    let a = interp.pop_int();
    let fmt = interp.rgb_format;
    interp.push_int(color::blend(fmt, a, b, ratio));
}

// ( array-a array-b ratio -- blended-array ) element-wise blend of two
// equal-length arrays; a length mismatch consumes both and pushes
// nothing.
pub fn ablend(interp: &mut Interp) {
    let ratio = interp.pop_int();
    let vb = interp.pop_operand();
    let va = interp.pop_operand();
    let fmt = interp.rgb_format;
    match (va, vb) {
        (Value::Array(mut ia), Value::Array(ib)) if ia.len() == ib.len() => {
            for (slot, &b) in ia.iter_mut().zip(ib.iter()) {
                *slot = color::blend(fmt, *slot, b, ratio);
            }
            interp.stack.push(Value::Array(ia));
            interp.drop_value(Value::Array(ib));
        }
        (va, vb) => {
            interp.drop_value(va);
            interp.drop_value(vb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_respects_the_selector() {
        let mut interp = Interp::new();
        interp.run_line("#FF 0 0 rgb>");
        assert_eq!(interp.pop_int(), 0x0000FF);
        interp.run_line("0 rgbformat 0 0 #FF rgb>");
        assert_eq!(interp.pop_int(), 0xFF0000);
        interp.run_line("1 rgbformat 0 #FF 0 rgb>");
        assert_eq!(interp.pop_int(), 0xFF0000); // grb puts green high
    }

    #[test]
    fn unpack_then_pack_is_identity() {
        let mut interp = Interp::new();
        interp.run_line("2 rgbformat #A1B2C3 >rgb rgb>");
        assert_eq!(interp.pop_int(), 0xA1B2C3);
        interp.run_line("0 rgbformat");
    }

    #[test]
    fn hsv_words_broadcast_over_hue_arrays() {
        let mut interp = Interp::new();
        interp.run_line("3 array identity 120 * 100 50 hsv>");
        match interp.pop() {
            Some(Value::Array(ia)) => {
                assert_eq!(ia.len(), 3);
                assert_eq!(ia[0] & 0xff0000, 0xff0000); // hue 0 is red
                assert_eq!(ia[1] & 0x00ff00, 0x00ff00); // hue 120 is green
                assert_eq!(ia[2] & 0x0000ff, 0x0000ff); // hue 240 is blue
            }
            other => panic!("expected array, got {:?}", other),
        }
    }

    #[test]
    fn ablend_mixes_equal_length_arrays_only() {
        let mut interp = Interp::new();
        interp.run_line("2 array 2 array identity 100 ablend");
        assert_eq!(interp.pop(), Some(Value::Array(vec![0, 1])));
        assert_eq!(interp.stack.len(), 0);

        interp.run_line("2 array 3 array 50 ablend");
        assert_eq!(interp.stack.len(), 0); // mismatch pushes nothing
    }

    #[test]
    fn blend_is_a_channel_mix() {
        let mut interp = Interp::new();
        interp.run_line("#000000 #FFFFFF 50 blend");
        assert_eq!(interp.pop_int(), 0x7F7F7F);
    }
}
