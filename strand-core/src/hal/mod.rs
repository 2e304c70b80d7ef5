//! Collaborator interfaces.
//!
//! The interpreter owns no I/O. Everything it touches outside its own
//! state arrives through one of these traits, injected by the host:
//! the console, the millisecond clock, the LED driver, GPIO pins, the
//! segmented display, file storage, the UDP transport, and host
//! control. Null implementations are the defaults, so a bare
//! interpreter runs (and tests run) with no hardware at all.

pub mod null;

/// Console text sink shared by the printing words and line echo.
pub trait Output {
    fn write_str(&mut self, text: &str);

    fn write_line(&mut self, text: &str) {
        self.write_str(text);
        self.write_str("\n");
    }
}

/// Millisecond clock plus blocking delays. Delays busy-wait; there is
/// no other task to yield to.
pub trait Clock {
    fn millis(&self) -> f64;
    fn delay_ms(&self, ms: i32);
    fn delay_us(&self, us: i32);
}

/// An addressable LED string with a pixel buffer and a blocking
/// render. `busy` reports an in-flight render (DMA on real hardware).
pub trait LedDriver {
    fn init(&mut self, total: usize, per_strip: usize);
    fn len(&self) -> usize;
    fn set_pixel(&mut self, idx: usize, color: i32);
    fn get_pixel(&self, idx: usize) -> i32;
    fn show(&mut self);
    fn busy(&self) -> bool;
}

/// Digital and analog pins.
pub trait Gpio {
    fn pin_mode(&mut self, pin: i32, mode: i32);
    fn digital_read(&mut self, pin: i32) -> i32;
    fn digital_write(&mut self, pin: i32, value: i32);
    fn analog_read(&mut self, pin: i32) -> i32;
    fn analog_write(&mut self, pin: i32, value: i32);
    fn analog_reference(&mut self, mode: i32);
}

/// A four-character alphanumeric display on an I2C bus.
pub trait QuadDisplay {
    fn write_char(&mut self, bus: i32, addr: i32, pos: i32, ch: char);
    fn write_text(&mut self, bus: i32, addr: i32, text: &str);
}

/// Attached file storage. At most one file is open for writing at a
/// time, matching the UDP file-load protocol.
pub trait Storage {
    /// Whole-file read, split into lines. None when the file cannot
    /// be opened; the caller logs and carries on.
    fn read_lines(&mut self, name: &str) -> Option<Vec<String>>;
    fn open_write(&mut self, name: &str) -> bool;
    fn write_line(&mut self, line: &str);
    fn close_write(&mut self);
}

/// The UDP transport. `init` brings the link up; the reply methods
/// compose a datagram back to the most recent sender.
pub trait Net {
    fn init(&mut self, mac: [u8; 6], ip: [u8; 4], port: u16) -> bool;
    fn begin_reply(&mut self);
    fn write(&mut self, text: &str);
    fn end_reply(&mut self);
}

/// Host control: reset request and the free-memory probe.
pub trait Host {
    fn reset(&mut self);
    fn free_ram(&self) -> i32;
}
