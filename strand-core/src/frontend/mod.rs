//! Input frontends: the serial console, the UDP command channel, and
//! the file ingester. All three feed the same top-level line path;
//! the transports themselves live host-side behind `hal` traits.

pub mod file;
pub mod serial;
pub mod udp;
