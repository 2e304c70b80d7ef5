//! Host-side collaborators: the wall clock, disk storage, and logging
//! stand-ins for the peripherals a workstation does not have.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::time::Instant;

use log::{info, warn};
use strand_core::hal::{Clock, Gpio, Host, QuadDisplay, Storage};

/// Milliseconds since process start, with sleeping delays.
pub struct HostClock {
    start: Instant,
}

impl HostClock {
    pub fn new() -> Self {
        HostClock {
            start: Instant::now(),
        }
    }
}

impl Default for HostClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for HostClock {
    fn millis(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn delay_ms(&self, ms: i32) {
        std::thread::sleep(std::time::Duration::from_millis(ms.max(0) as u64));
    }

    fn delay_us(&self, us: i32) {
        std::thread::sleep(std::time::Duration::from_micros(us.max(0) as u64));
    }
}

/// Files relative to the working directory, with the single open
/// write handle the UDP file-load protocol needs.
#[derive(Default)]
pub struct DiskStorage {
    writing: Option<File>,
}

impl DiskStorage {
    pub fn new() -> Self {
        DiskStorage::default()
    }
}

impl Storage for DiskStorage {
    fn read_lines(&mut self, name: &str) -> Option<Vec<String>> {
        match std::fs::read_to_string(name) {
            Ok(text) => Some(text.lines().map(str::to_string).collect()),
            Err(err) => {
                warn!("read {}: {}", name, err);
                None
            }
        }
    }

    fn open_write(&mut self, name: &str) -> bool {
        match OpenOptions::new().write(true).create(true).truncate(true).open(name) {
            Ok(file) => {
                self.writing = Some(file);
                true
            }
            Err(err) => {
                warn!("open {} for write: {}", name, err);
                false
            }
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Some(file) = self.writing.as_mut() {
            if let Err(err) = writeln!(file, "{}", line) {
                warn!("write: {}", err);
            }
        }
    }

    fn close_write(&mut self) {
        if let Some(mut file) = self.writing.take() {
            let _ = file.flush();
        }
    }
}

/// Pin operations are logged rather than driven.
#[derive(Default)]
pub struct LogGpio;

impl Gpio for LogGpio {
    fn pin_mode(&mut self, pin: i32, mode: i32) {
        info!("pinmode {} {}", pin, mode);
    }
    fn digital_read(&mut self, _pin: i32) -> i32 {
        0
    }
    fn digital_write(&mut self, pin: i32, value: i32) {
        info!("digitalwrite {} {}", pin, value);
    }
    fn analog_read(&mut self, _pin: i32) -> i32 {
        0
    }
    fn analog_write(&mut self, pin: i32, value: i32) {
        info!("analogwrite {} {}", pin, value);
    }
    fn analog_reference(&mut self, mode: i32) {
        info!("analogreference {}", mode);
    }
}

/// The segmented display renders into the log.
#[derive(Default)]
pub struct LogQuad;

impl QuadDisplay for LogQuad {
    fn write_char(&mut self, bus: i32, addr: i32, pos: i32, ch: char) {
        info!("quad {}/{:#04x} pos {}: {}", bus, addr, pos, ch);
    }
    fn write_text(&mut self, bus: i32, addr: i32, text: &str) {
        info!("quad {}/{:#04x}: {:?}", bus, addr, text);
    }
}

/// Host control. A reset request ends the process; a supervisor (or
/// systemd unit) brings the runtime back, which is as close to a
/// device reboot as a workstation gets.
#[derive(Default)]
pub struct HostControl;

impl Host for HostControl {
    fn reset(&mut self) {
        warn!("reset requested, exiting");
        std::process::exit(0);
    }

    fn free_ram(&self) -> i32 {
        // No meaningful figure on a hosted target; report a fixed
        // budget comparable to the device class.
        256 * 1024
    }
}
