//! # Strand core
//!
//! The interpreter for Strand, a Forth dialect built to drive strings
//! of addressable RGB LEDs from a small controller. Programs are
//! plain text: whitespace-separated words, sigil-prefixed literals,
//! and bracketed sequences, evaluated immediately against one shared
//! interpreter state.
//!
//! The crate is hardware-free. Hosts inject collaborators through the
//! [`hal`] traits (console, clock, LED driver, pins, display, storage,
//! network, host control) and pump the interpreter from their outer
//! loop: drain serial input, hand over UDP datagrams, and walk the
//! scheduler once per tick.
//!
//! ```
//! use strand_core::Interp;
//!
//! let mut interp = Interp::new();
//! interp.run_line("5 array identity 5 *");
//! assert_eq!(interp.stack.len(), 1);
//! ```

pub mod builtins;
pub mod color;
pub mod dict;
pub mod eval;
pub mod frontend;
pub mod hal;
pub mod interp;
pub mod mem;
pub mod numeric;
pub mod parser;
pub mod primitives;
pub mod scheduler;
pub mod stack;
pub mod value;

pub use dict::Dictionary;
pub use interp::Interp;
pub use mem::MemStats;
pub use stack::VStack;
pub use value::{Sequence, Value};
