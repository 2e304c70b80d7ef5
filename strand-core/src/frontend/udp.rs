//! UDP command framing.
//!
//! A datagram is `ack-token SP payload`. The sender retries until it
//! sees its token come back, so the token of the previous datagram is
//! remembered and a repeat skips execution while still being
//! acknowledged. A payload of `----- name` toggles file-write mode:
//! the first one opens `name` on storage, the next one closes it, and
//! every payload in between is appended verbatim. Anything else is a
//! top-level line.

use log::{info, warn};

use crate::interp::Interp;
use crate::parser;

#[derive(Default)]
pub struct UdpFrontend {
    prev_ack: String,
    writing: bool,
}

impl UdpFrontend {
    pub fn new() -> Self {
        UdpFrontend {
            prev_ack: String::new(),
            writing: false,
        }
    }

    /// Process one datagram and return the reply to send back.
    pub fn handle_datagram(&mut self, interp: &mut Interp, data: &[u8]) -> Vec<u8> {
        let text = String::from_utf8_lossy(data);
        let (ack, payload) = match text.find(' ') {
            Some(idx) => (&text[..idx], &text[idx + 1..]),
            None => (&text[..], ""),
        };

        if ack != self.prev_ack {
            if let Some(name) = payload.strip_prefix("----- ") {
                if self.writing {
                    info!("close udp file update");
                    interp.storage.close_write();
                    self.writing = false;
                } else {
                    info!("opening file {}", name);
                    if interp.storage.open_write(name) {
                        self.writing = true;
                    } else {
                        warn!("could not open {} for writing", name);
                    }
                }
            } else if self.writing {
                interp.storage.write_line(payload);
            } else {
                if interp.echo {
                    interp.out.write_line(&format!("udp>{}", payload));
                }
                parser::run_line(interp, payload);
            }
            self.prev_ack = ack.to_string();
        }

        ack.as_bytes().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::Storage;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Default)]
    struct MemFs {
        files: HashMap<String, Vec<String>>,
        open: Option<String>,
    }

    #[derive(Clone, Default)]
    struct SharedFs(Rc<RefCell<MemFs>>);

    impl Storage for SharedFs {
        fn read_lines(&mut self, name: &str) -> Option<Vec<String>> {
            self.0.borrow().files.get(name).cloned()
        }
        fn open_write(&mut self, name: &str) -> bool {
            let mut fs = self.0.borrow_mut();
            fs.files.insert(name.to_string(), Vec::new());
            fs.open = Some(name.to_string());
            true
        }
        fn write_line(&mut self, line: &str) {
            let mut fs = self.0.borrow_mut();
            if let Some(name) = fs.open.clone() {
                if let Some(lines) = fs.files.get_mut(&name) {
                    lines.push(line.to_string());
                }
            }
        }
        fn close_write(&mut self) {
            self.0.borrow_mut().open = None;
        }
    }

    #[test]
    fn duplicate_ack_executes_once_but_still_replies() {
        let mut interp = Interp::new();
        interp.echo = false;
        let mut udp = UdpFrontend::new();

        let reply1 = udp.handle_datagram(&mut interp, b"t1 5 'x def");
        let reply2 = udp.handle_datagram(&mut interp, b"t1 9 'x def");
        assert_eq!(reply1, b"t1");
        assert_eq!(reply2, b"t1");
        assert_eq!(
            interp.dict.find("x").map(|v| v.as_int(&interp.dict)),
            Some(5)
        );

        udp.handle_datagram(&mut interp, b"t2 9 'x def");
        assert_eq!(
            interp.dict.find("x").map(|v| v.as_int(&interp.dict)),
            Some(9)
        );
    }

    #[test]
    fn file_write_mode_captures_payloads_verbatim() {
        let mut interp = Interp::new();
        interp.echo = false;
        let fs = SharedFs::default();
        interp.set_storage(Box::new(fs.clone()));
        let mut udp = UdpFrontend::new();

        udp.handle_datagram(&mut interp, b"a1 ----- boot.str");
        udp.handle_datagram(&mut interp, b"a2 // lines are stored, not run");
        udp.handle_datagram(&mut interp, b"a3 1 2 +");
        udp.handle_datagram(&mut interp, b"a4 ----- boot.str");
        udp.handle_datagram(&mut interp, b"a5 3 4 +");

        assert_eq!(interp.pop_int(), 7); // only the post-close line ran
        assert_eq!(interp.stack.len(), 0);
        let fs = fs.0.borrow();
        assert_eq!(
            fs.files.get("boot.str").unwrap(),
            &vec![
                "// lines are stored, not run".to_string(),
                "1 2 +".to_string()
            ]
        );
    }

    #[test]
    fn datagram_without_payload_is_just_acked() {
        let mut interp = Interp::new();
        let mut udp = UdpFrontend::new();
        let reply = udp.handle_datagram(&mut interp, b"lone");
        assert_eq!(reply, b"lone");
        assert_eq!(interp.stack.len(), 0);
    }
}
