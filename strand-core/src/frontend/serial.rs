//! Serial console line assembly.
//!
//! Bytes trickle in; CR or LF terminates a line, which is echoed
//! (when enabled) and handed to the compiler. A CRLF pair therefore
//! also runs one empty line, which is harmless.

use crate::interp::Interp;
use crate::parser;

#[derive(Default)]
pub struct SerialConsole {
    buf: String,
}

impl SerialConsole {
    pub fn new() -> Self {
        SerialConsole { buf: String::new() }
    }

    pub fn feed_byte(&mut self, interp: &mut Interp, byte: u8) {
        if byte == b'\r' || byte == b'\n' {
            let line = std::mem::take(&mut self.buf);
            if interp.echo {
                interp.out.write_line(&format!("serial>{}", line));
            }
            parser::run_line(interp, &line);
        } else {
            self.buf.push(byte as char);
        }
    }

    pub fn feed(&mut self, interp: &mut Interp, bytes: &[u8]) {
        for &b in bytes {
            self.feed_byte(interp, b);
        }
    }

    /// Convenience for hosts that already have whole lines.
    pub fn feed_line(&mut self, interp: &mut Interp, line: &str) {
        self.feed(interp, line.as_bytes());
        self.feed_byte(interp, b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_terminate_on_cr_or_lf() {
        let mut interp = Interp::new();
        interp.echo = false;
        let mut console = SerialConsole::new();
        console.feed(&mut interp, b"1 2 +\r");
        assert_eq!(interp.pop_int(), 3);
        console.feed(&mut interp, b"4 5 +\n");
        assert_eq!(interp.pop_int(), 9);
        assert_eq!(interp.stack.len(), 0);
    }

    #[test]
    fn partial_lines_wait_for_their_terminator() {
        let mut interp = Interp::new();
        interp.echo = false;
        let mut console = SerialConsole::new();
        console.feed(&mut interp, b"10 2");
        assert_eq!(interp.stack.len(), 0);
        console.feed(&mut interp, b"0 +\n");
        assert_eq!(interp.pop_int(), 30);
    }
}
