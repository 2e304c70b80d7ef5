//! Memory counter words. Each pushes one field of the cell
//! accounting; the push itself is counted after the field is read.

use crate::interp::Interp;

pub fn mem_malloc(interp: &mut Interp) {
    let n = interp.mem.heap_allocs;
    interp.push_int(n);
}

pub fn mem_alloc(interp: &mut Interp) {
    let n = interp.mem.allocs;
    interp.push_int(n);
}

pub fn mem_free(interp: &mut Interp) {
    let n = interp.mem.frees;
    interp.push_int(n);
}

pub fn mem_calloc(interp: &mut Interp) {
    let n = interp.mem.live;
    interp.push_int(n);
}

pub fn mem_cfree(interp: &mut Interp) {
    let n = interp.mem.pooled;
    interp.push_int(n);
}

pub fn mem_amalloc(interp: &mut Interp) {
    let n = interp.mem.array_allocs;
    interp.push_int(n);
}

pub fn mem_afree(interp: &mut Interp) {
    let n = interp.mem.array_frees;
    interp.push_int(n);
}

pub fn mem_sram(interp: &mut Interp) {
    let n = interp.host.free_ram();
    interp.push_int(n);
}
