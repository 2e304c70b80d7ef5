//! The interpreter context.
//!
//! Everything process-wide lives here: both operand stacks, the
//! dictionary, the loop-task list, the compiler state, the cell
//! counters, the color-format selector, the echo/suppress/step flags,
//! and the injected collaborators. One context, one evaluator thread;
//! control-flow words and the scheduler re-enter the evaluator on the
//! same context.

use std::rc::Rc;

use crate::dict::Dictionary;
use crate::hal::null::{
    NullClock, NullGpio, NullHost, NullLeds, NullNet, NullOutput, NullQuad, NullStorage,
};
use crate::hal::{Clock, Gpio, Host, LedDriver, Net, Output, QuadDisplay, Storage};
use crate::mem::MemStats;
use crate::parser::Compiler;
use crate::scheduler::TaskList;
use crate::stack::VStack;
use crate::value::{Sequence, Value};

/// Trace hook run after every evaluated value while `step` is set.
pub type StepFn = fn(&mut Interp, &Value);

pub struct Interp {
    pub stack: VStack,
    pub stash: VStack,
    pub dict: Dictionary,
    pub tasks: TaskList,
    pub mem: MemStats,
    pub(crate) compiler: Compiler,

    /// RGB byte-order selector, 0..=5.
    pub rgb_format: i32,
    /// Echo received serial/UDP lines to the console.
    pub echo: bool,
    /// While set, incoming lines are prose and are ignored.
    pub suppress: bool,
    /// Trace every evaluated value through `step_fn`.
    pub step: bool,
    pub step_fn: Option<StepFn>,

    /// Captured sequence of the native operation currently executing;
    /// `call` re-enters it.
    pub(crate) quote: Option<Rc<Sequence>>,

    // Templates cloned into compiled sequences by the sigil handlers.
    pub(crate) word_call: Value,
    pub(crate) word_vget: Value,
    pub(crate) word_def: Value,

    /// Logical to physical LED index map.
    pub led_map: Vec<usize>,

    pub out: Box<dyn Output>,
    pub clock: Box<dyn Clock>,
    pub leds: Box<dyn LedDriver>,
    pub gpio: Box<dyn Gpio>,
    pub quad: Box<dyn QuadDisplay>,
    pub storage: Box<dyn Storage>,
    pub net: Box<dyn Net>,
    pub host: Box<dyn Host>,
}

impl Interp {
    pub fn new() -> Self {
        let mut interp = Interp {
            stack: VStack::new(),
            stash: VStack::new(),
            dict: Dictionary::new(),
            tasks: TaskList::new(),
            mem: MemStats::default(),
            compiler: Compiler::new(),
            rgb_format: 0,
            echo: true,
            suppress: false,
            step: false,
            step_fn: None,
            quote: None,
            word_call: Value::Free,
            word_vget: Value::Free,
            word_def: Value::Free,
            led_map: Vec::new(),
            out: Box::new(NullOutput),
            clock: Box::new(NullClock),
            leds: Box::new(NullLeds),
            gpio: Box::new(NullGpio),
            quad: Box::new(NullQuad),
            storage: Box::new(NullStorage),
            net: Box::new(NullNet),
            host: Box::new(NullHost),
        };
        crate::builtins::register_builtins(&mut interp);
        interp.word_call = interp.dict.find("call").cloned().unwrap_or(Value::Free);
        interp.word_vget = interp.dict.find("vget").cloned().unwrap_or(Value::Free);
        interp.word_def = interp.dict.find("def").cloned().unwrap_or(Value::Free);
        interp
    }

    // Collaborator injection, one setter per seam.

    pub fn set_output(&mut self, out: Box<dyn Output>) {
        self.out = out;
    }

    pub fn set_clock(&mut self, clock: Box<dyn Clock>) {
        self.clock = clock;
    }

    pub fn set_led_driver(&mut self, leds: Box<dyn LedDriver>) {
        self.leds = leds;
    }

    pub fn set_gpio(&mut self, gpio: Box<dyn Gpio>) {
        self.gpio = gpio;
    }

    pub fn set_quad_display(&mut self, quad: Box<dyn QuadDisplay>) {
        self.quad = quad;
    }

    pub fn set_storage(&mut self, storage: Box<dyn Storage>) {
        self.storage = storage;
    }

    pub fn set_net(&mut self, net: Box<dyn Net>) {
        self.net = net;
    }

    pub fn set_host(&mut self, host: Box<dyn Host>) {
        self.host = host;
    }

    // Typed stack access. Pops coerce and release the cell; a missing
    // operand reads as zero, the empty string, or no sequence.

    pub fn push_value(&mut self, v: Value) {
        self.mem.on_alloc(&v);
        self.stack.push(v);
    }

    pub fn push_int(&mut self, n: i32) {
        self.push_value(Value::Int(n));
    }

    pub fn push_float(&mut self, f: f64) {
        self.push_value(Value::Float(f));
    }

    pub fn push_str(&mut self, s: impl Into<String>) {
        self.push_value(Value::Str(s.into()));
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.stack.pop()
    }

    /// Pop a raw operand, synthesizing a zero when the stack is
    /// under-populated so the caller can proceed.
    pub fn pop_operand(&mut self) -> Value {
        match self.stack.pop() {
            Some(v) => v,
            None => {
                let zero = Value::Int(0);
                self.mem.on_alloc(&zero);
                zero
            }
        }
    }

    pub fn pop_int(&mut self) -> i32 {
        match self.stack.pop() {
            Some(v) => {
                let n = v.as_int(&self.dict);
                self.mem.on_free(&v);
                n
            }
            None => 0,
        }
    }

    pub fn pop_float(&mut self) -> f64 {
        match self.stack.pop() {
            Some(v) => {
                let f = v.as_float(&self.dict);
                self.mem.on_free(&v);
                f
            }
            None => 0.0,
        }
    }

    pub fn pop_string(&mut self) -> String {
        match self.stack.pop() {
            Some(v) => {
                let s = v.as_string(&self.dict);
                self.mem.on_free(&v);
                s
            }
            None => String::new(),
        }
    }

    pub fn pop_seq(&mut self) -> Option<Rc<Sequence>> {
        let v = self.stack.pop()?;
        let seq = v.as_seq(&self.dict);
        self.mem.on_free(&v);
        seq
    }

    /// Release a popped value's cell.
    pub fn drop_value(&mut self, v: Value) {
        crate::value::free_value(v, &mut self.mem);
    }

    /// Copy of the value at `depth` from the top, zero when absent.
    pub fn clone_at(&mut self, depth: usize) -> Value {
        let v = match self.stack.at(depth) {
            Some(v) => v.clone(),
            None => Value::Int(0),
        };
        self.mem.on_alloc(&v);
        v
    }

    /// Nesting depth of sequences still open in the compiler; zero
    /// when the next completed line will evaluate.
    pub fn compiler_depth(&self) -> usize {
        self.compiler.depth()
    }

    /// Compile and run one line of source.
    pub fn run_line(&mut self, line: &str) {
        crate::parser::run_line(self, line);
    }

    /// Run a multi-line blob of source, line by line.
    pub fn run_source(&mut self, source: &str) {
        for line in source.lines() {
            crate::parser::run_line(self, line);
        }
    }
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}
