//! The device loop on a workstation: stdin stands in for the serial
//! port, a UDP socket for the network, and the scheduler runs between
//! polls, exactly one tick at a time.

use std::io::BufRead;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use log::info;
use strand_core::frontend::serial::SerialConsole;
use strand_core::frontend::udp::UdpFrontend;
use strand_core::scheduler;
use strand_core::Interp;

use crate::net::NetHandle;

/// Read stdin on its own thread; the tick loop drains the channel.
fn spawn_serial_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

/// Run the full device loop until the process is killed. `port` opens
/// the UDP listener up front; programs can still rebind via
/// `udp:init`.
pub fn serve(interp: &mut Interp, net: NetHandle, port: Option<u16>) {
    if let Some(port) = port {
        net.0.borrow_mut().bind(port);
    }

    let serial_rx = spawn_serial_reader();
    let mut console = SerialConsole::new();
    let mut udp = UdpFrontend::new();
    let mut serial_open = true;

    info!("runtime up");
    loop {
        // Drain every serial line that has arrived.
        while serial_open {
            match serial_rx.try_recv() {
                Ok(line) => console.feed_line(interp, &line),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    serial_open = false;
                    info!("serial closed");
                }
            }
        }

        // One datagram per tick.
        let datagram = net.0.borrow_mut().poll();
        if let Some(data) = datagram {
            let reply = udp.handle_datagram(interp, &data);
            net.0.borrow().send_to_peer(&reply);
        }

        // Every task whose deadline has arrived.
        scheduler::tick(interp);

        std::thread::sleep(Duration::from_millis(1));
    }
}
