//! LED driver words. The logical-to-physical index map lives on the
//! interpreter so a remapped installation (folded strips, reversed
//! runs) keeps the language-side arrays contiguous.

use crate::interp::Interp;
use crate::value::Value;

// ( total per-strip -- )
pub fn led_init(interp: &mut Interp) {
    let per_strip = interp.pop_int().max(0) as usize;
    let total = interp.pop_int().max(0) as usize;
    interp.leds.init(total, per_strip);
    interp.led_map = (0..total).collect();
}

// ( array -- ) write a whole frame through the map and render it.
pub fn led_showa(interp: &mut Interp) {
    let v = interp.pop_operand();
    if let Value::Array(ia) = &v {
        for (i, &c) in ia.iter().enumerate() {
            if let Some(&phys) = interp.led_map.get(i) {
                interp.leds.set_pixel(phys, c);
            }
        }
        interp.leds.show();
    }
    interp.drop_value(v);
}

// ( array -- array ) read the current frame back through the map.
pub fn led_reada(interp: &mut Interp) {
    let v = interp.pop_operand();
    match v {
        Value::Array(mut ia) => {
            for (i, slot) in ia.iter_mut().enumerate() {
                if let Some(&phys) = interp.led_map.get(i) {
                    *slot = interp.leds.get_pixel(phys);
                }
            }
            interp.stack.push(Value::Array(ia));
        }
        other => interp.drop_value(other),
    }
}

fn put(interp: &mut Interp, idx: i32, color: i32) {
    if idx >= 0 {
        if let Some(&phys) = interp.led_map.get(idx as usize) {
            interp.leds.set_pixel(phys, color);
        }
    }
}

// ( color idx -- )
pub fn led_pixel(interp: &mut Interp) {
    let idx = interp.pop_int();
    let color = interp.pop_int();
    put(interp, idx, color);
}

// ( color min max -- ) paint [min, max).
pub fn led_fill(interp: &mut Interp) {
    let pmax = interp.pop_int();
    let pmin = interp.pop_int();
    let color = interp.pop_int();
    let mut i = pmin;
    while i < pmax {
        put(interp, i, color);
        i += 1;
    }
}

// ( -- ) render the pixel buffer.
pub fn led_show(interp: &mut Interp) {
    interp.leds.show();
}

// ( -- ) spin until the render engine is idle.
pub fn led_dma_wait(interp: &mut Interp) {
    while interp.leds.busy() {
        interp.clock.delay_us(100);
    }
}

// ( array -- ) install a logical-to-physical map.
pub fn led_set_map(interp: &mut Interp) {
    let v = interp.pop_operand();
    if let Value::Array(ia) = &v {
        for (i, &phys) in ia.iter().enumerate() {
            if i >= interp.led_map.len() {
                break;
            }
            if phys >= 0 {
                interp.led_map[i] = phys as usize;
            }
        }
    }
    interp.drop_value(v);
}
