//! The UDP transport. One socket is shared between the tick loop
//! (which polls for datagrams) and the interpreter's reply words, so
//! both sides hold the same state through an `Rc<RefCell<_>>`.

use std::cell::RefCell;
use std::net::{SocketAddr, UdpSocket};
use std::rc::Rc;

use log::{info, warn};
use strand_core::hal::Net;

#[derive(Default)]
pub struct UdpPort {
    socket: Option<UdpSocket>,
    peer: Option<SocketAddr>,
    reply: String,
}

impl UdpPort {
    /// Bind immediately, without waiting for `udp:init`. Used by the
    /// serve loop when a port is given on the command line.
    pub fn bind(&mut self, port: u16) -> bool {
        match UdpSocket::bind(("0.0.0.0", port)) {
            Ok(socket) => {
                if let Err(err) = socket.set_nonblocking(true) {
                    warn!("udp nonblocking: {}", err);
                    return false;
                }
                info!("udp listening on {}", port);
                self.socket = Some(socket);
                true
            }
            Err(err) => {
                warn!("udp bind {}: {}", port, err);
                false
            }
        }
    }

    /// Poll for one datagram; remembers the sender for replies.
    pub fn poll(&mut self) -> Option<Vec<u8>> {
        let socket = self.socket.as_ref()?;
        let mut buf = [0u8; 1500];
        match socket.recv_from(&mut buf) {
            Ok((len, from)) => {
                self.peer = Some(from);
                Some(buf[..len].to_vec())
            }
            Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => None,
            Err(err) => {
                warn!("udp recv: {}", err);
                None
            }
        }
    }

    pub fn send_to_peer(&self, data: &[u8]) {
        if let (Some(socket), Some(peer)) = (self.socket.as_ref(), self.peer) {
            if let Err(err) = socket.send_to(data, peer) {
                warn!("udp send: {}", err);
            }
        }
    }
}

/// The interpreter-facing handle over the shared port.
#[derive(Clone, Default)]
pub struct NetHandle(pub Rc<RefCell<UdpPort>>);

impl Net for NetHandle {
    fn init(&mut self, _mac: [u8; 6], _ip: [u8; 4], port: u16) -> bool {
        // The MAC and IP configure real link hardware; a hosted socket
        // only needs the port.
        self.0.borrow_mut().bind(port)
    }

    fn begin_reply(&mut self) {
        self.0.borrow_mut().reply.clear();
    }

    fn write(&mut self, text: &str) {
        self.0.borrow_mut().reply.push_str(text);
    }

    fn end_reply(&mut self) {
        let port = self.0.borrow();
        port.send_to_peer(port.reply.as_bytes());
    }
}
