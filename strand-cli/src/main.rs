//! Strand host runtime.
//!
//! With no arguments this is an interactive console (or a line-by-line
//! evaluator when stdin is piped). `-e` evaluates and prints the top
//! of stack, `-c` evaluates silently, a bare path ingests a file, and
//! `serve PORT` runs the full device loop: serial drain, UDP poll,
//! scheduler walk.

mod host;
mod net;
mod output;
mod repl;
mod runtime;
mod sim_led;

use std::io::{IsTerminal, Read};

use strand_core::Interp;

use crate::host::{DiskStorage, HostClock, HostControl, LogGpio, LogQuad};
use crate::net::NetHandle;
use crate::output::StdoutOutput;
use crate::sim_led::SimLedStrip;

fn build_interp() -> (Interp, NetHandle) {
    let mut interp = Interp::new();
    interp.set_output(Box::new(StdoutOutput::new()));
    interp.set_clock(Box::new(HostClock::new()));
    interp.set_led_driver(Box::new(SimLedStrip::new()));
    interp.set_gpio(Box::new(LogGpio));
    interp.set_quad_display(Box::new(LogQuad));
    interp.set_storage(Box::new(DiskStorage::new()));
    interp.set_host(Box::new(HostControl));
    interp.step_fn = Some(strand_core::eval::trace_to_console);
    let net = NetHandle::default();
    interp.set_net(Box::new(net.clone()));
    (interp, net)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let (mut interp, net) = build_interp();

    if args.len() > 1 {
        match args[1].as_str() {
            "-e" => {
                let Some(code) = args.get(2) else {
                    eprintln!("usage: {} -e <code>", args[0]);
                    std::process::exit(1);
                };
                interp.run_source(code);
                if let Some(top) = interp.stack.top() {
                    println!("{}", top);
                }
            }
            "-c" => {
                let Some(code) = args.get(2) else {
                    eprintln!("usage: {} -c <code>", args[0]);
                    std::process::exit(1);
                };
                interp.run_source(code);
            }
            "serve" => {
                let port = match args.get(2) {
                    Some(text) => Some(text.parse::<u16>().map_err(|_| "bad port number")?),
                    None => None,
                };
                runtime::serve(&mut interp, net, port);
            }
            path => {
                // Ingest through the prose/code file path, the same
                // way `file:run` would on the device.
                strand_core::frontend::file::run_file(&mut interp, path);
            }
        }
    } else if !std::io::stdin().is_terminal() {
        let mut code = String::new();
        std::io::stdin().read_to_string(&mut code)?;
        interp.run_source(&code);
    } else {
        repl::run_repl(&mut interp)?;
    }

    Ok(())
}
