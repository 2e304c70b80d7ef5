//! Words for the four-character segmented display.

use crate::interp::Interp;

// ( bus addr pos char-code -- )
pub fn quad_char(interp: &mut Interp) {
    let code = interp.pop_int();
    let pos = interp.pop_int();
    let addr = interp.pop_int();
    let bus = interp.pop_int();
    let ch = (code.clamp(0, 127) as u8) as char;
    interp.quad.write_char(bus, addr, pos, ch);
}

// ( bus addr str -- ) only the first four characters are shown.
pub fn quad_str(interp: &mut Interp) {
    let text = interp.pop_string();
    let addr = interp.pop_int();
    let bus = interp.pop_int();
    let shown: String = text.chars().take(4).collect();
    interp.quad.write_text(bus, addr, &shown);
}

// ( bus addr -- )
pub fn quad_blank(interp: &mut Interp) {
    interp.push_str("    ");
    quad_str(interp);
}
