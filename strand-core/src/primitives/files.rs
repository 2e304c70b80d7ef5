//! Storage words.

use crate::frontend::file;
use crate::interp::Interp;

// ( name -- ) ingest a file through the prose/code path.
pub fn file_run(interp: &mut Interp) {
    let name = interp.pop_string();
    file::run_file(interp, &name);
}
