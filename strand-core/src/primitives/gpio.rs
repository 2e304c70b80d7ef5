//! GPIO and ADC words.

use crate::interp::Interp;

// ( pin mode -- ) 1 input, 2 output.
pub fn pinmode(interp: &mut Interp) {
    let mode = interp.pop_int();
    let pin = interp.pop_int();
    interp.gpio.pin_mode(pin, mode);
}

// ( pin -- level )
pub fn digitalread(interp: &mut Interp) {
    let pin = interp.pop_int();
    let level = interp.gpio.digital_read(pin);
    interp.push_int(level);
}

// ( pin level -- )
pub fn digitalwrite(interp: &mut Interp) {
    let level = interp.pop_int();
    let pin = interp.pop_int();
    interp.gpio.digital_write(pin, level);
}

// ( pin -- reading )
pub fn analogread(interp: &mut Interp) {
    let pin = interp.pop_int();
    let reading = interp.gpio.analog_read(pin);
    interp.push_int(reading);
}

// ( pin duty -- )
pub fn analogwrite(interp: &mut Interp) {
    let duty = interp.pop_int();
    let pin = interp.pop_int();
    interp.gpio.analog_write(pin, duty);
}

// ( mode -- )
pub fn analogreference(interp: &mut Interp) {
    let mode = interp.pop_int();
    interp.gpio.analog_reference(mode);
}
