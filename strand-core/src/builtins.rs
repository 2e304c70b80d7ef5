//! Registration of every native word.
//!
//! Order matters only for the console's dictionary listing; it
//! follows the rough grouping of the word set itself: arithmetic,
//! stack shuffling, arrays, comparisons, control flow, color,
//! definitions, diagnostics, then the peripheral bindings.

use crate::interp::Interp;
use crate::primitives::*;

pub fn register_builtins(interp: &mut Interp) {
    let mut def = |name: &str, op: crate::value::PrimitiveFn| {
        let Interp { dict, mem, .. } = interp;
        dict.define_native(name, op, mem);
    };

    // arithmetic
    def("+", arith::add);
    def("-", arith::sub);
    def("*", arith::mul);
    def("/", arith::div);
    def("mod", arith::modulo);
    def("sq", arith::sq);
    def("sqrt", arith::sqrt);
    def("constrain", arith::constrain);
    def("sin", arith::sin);
    def("cos", arith::cos);
    def("tan", arith::tan);
    def("deg", arith::deg);
    def("rad", arith::rad);
    def("pow", arith::pow);
    def("abs", arith::abs);
    def("min", arith::min);
    def("max", arith::max);
    def("round", arith::round);
    def("ceil", arith::ceil);
    def("floor", arith::floor);

    // formatting
    def("stack:size", stack_ops::stack_size);
    def("num:dec", strings::num_dec);
    def("num:sci", strings::num_sci);
    def("str:mid", strings::str_mid);

    // stack shuffling
    def("dup", stack_ops::dup);
    def("over", stack_ops::over);
    def("aty", stack_ops::aty);
    def("atz", stack_ops::atz);
    def("atu", stack_ops::atu);
    def("atv", stack_ops::atv);
    def("atw", stack_ops::atw);
    def("at", stack_ops::at);
    def("swap", stack_ops::swap);
    def("rot", stack_ops::rot);
    def("rup", stack_ops::rup);
    def("rot4", stack_ops::rot4);
    def("rup4", stack_ops::rup4);
    def("rotn", stack_ops::rotn);
    def("rupn", stack_ops::rupn);
    def("drop", stack_ops::drop_top);
    def("dup2", stack_ops::dup2);
    def("drop2", stack_ops::drop2);
    def("clst", stack_ops::clst);

    // the stash
    def(">>>", stack_ops::stash);
    def("<<<", stack_ops::unstash);
    def("<swap>", stack_ops::swap_stash);

    // integer arrays
    def("sum", arith::sum);
    def("array", arrays::array);
    def("identity", arrays::identity);
    def("geta", arrays::geta);
    def("puta", arrays::puta);
    def("dgeta", arrays::dgeta);
    def("dputa", arrays::dputa);
    def("size", arrays::size);
    def("map", arrays::map);

    // comparisons
    def("eq", logic::eq);
    def("ne", logic::ne);
    def("gt", logic::gt);
    def("lt", logic::lt);
    def("ge", logic::ge);
    def("le", logic::le);
    def("and", logic::and);
    def("or", logic::or);
    def("not", logic::not);

    // control flow
    def("if", control::if_word);
    def("ife", control::ife);
    def("loop", control::loop_word);
    def("repeat", control::repeat);
    def("call", control::call);

    // color
    def("rgbformat", color_ops::rgbformat);
    def("rgb>", color_ops::rgb_to_color);
    def(">rgb", color_ops::color_to_rgb);
    def("hsv>", color_ops::hsv);
    def("hsvr>", color_ops::hsvr);
    def("blend", color_ops::blend);
    def("ablend", color_ops::ablend);

    // definitions
    def("def", define::def);
    def("redef", define::redef);
    def("forget", define::forget);
    def("def?", define::defp);
    def("vget", define::vget);
    def("step", define::step);

    // host control
    def("rb", io::rb);

    // cell accounting
    def("mem:malloc", mem_ops::mem_malloc);
    def("mem:alloc", mem_ops::mem_alloc);
    def("mem:free", mem_ops::mem_free);
    def("mem:calloc", mem_ops::mem_calloc);
    def("mem:cfree", mem_ops::mem_cfree);
    def("mem:amalloc", mem_ops::mem_amalloc);
    def("mem:afree", mem_ops::mem_afree);
    def("mem:sram", mem_ops::mem_sram);

    // console
    def("cmd:echo", io::cmd_echo);
    def(".", io::dot);
    def("cr", io::cr);
    def("prtdict", io::prtdict);
    def("prtstk", io::prtstk);

    // clock and randomness
    def("rndm", time::rndm);
    def("rrndm", time::rrndm);
    def("delay", time::delay);
    def("delayus", time::delayus);
    def("now", time::now);

    // pins
    def("pinmode", gpio::pinmode);
    def("digitalread", gpio::digitalread);
    def("digitalwrite", gpio::digitalwrite);
    def("analogread", gpio::analogread);
    def("analogreference", gpio::analogreference);
    def("analogwrite", gpio::analogwrite);

    // network
    def("udp:init", net::udp_init);
    def("udp-begin", net::udp_begin);
    def(".udp", net::udp_prt);
    def("udp-end", net::udp_end);

    // scheduler
    def("loop:def", tasks::loop_def);
    def("loop:forget", tasks::loop_forget);

    // storage
    def("file:run", files::file_run);

    // segmented display
    def("quad:char", quad::quad_char);
    def("quad:str", quad::quad_str);
    def("quad:blank", quad::quad_blank);

    // LED driver
    def("led:init", led::led_init);
    def("led:showa", led::led_showa);
    def("led:reada", led::led_reada);
    def("led:pixel", led::led_pixel);
    def("led:fill", led::led_fill);
    def("led:show", led::led_show);
    def("led:dma-wait", led::led_dma_wait);
    def("led:set-map", led::led_set_map);
}
