//! Console sink writing straight to stdout.

use std::io::Write;

use strand_core::hal::Output;

#[derive(Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub fn new() -> Self {
        StdoutOutput
    }
}

impl Output for StdoutOutput {
    fn write_str(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }

    fn write_line(&mut self, text: &str) {
        println!("{}", text);
    }
}
