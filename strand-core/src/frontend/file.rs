//! File ingest in the unu convention.
//!
//! Files alternate prose and code, separated by `~~~` lines, and
//! start in prose. The suppress flag is forced on for the duration of
//! the run so the leading prose is skipped, and cleared afterwards.
//! CR, LF and TAB are normalised to spaces before tokenisation.

use log::warn;

use crate::interp::Interp;
use crate::parser;

pub fn run_file(interp: &mut Interp, name: &str) {
    let Some(lines) = interp.storage.read_lines(name) else {
        warn!("file:run could not open {}", name);
        return;
    };

    interp.suppress = true;
    for line in lines {
        let line: String = line
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();
        parser::run_line(interp, &line);
    }
    interp.suppress = false;
}
