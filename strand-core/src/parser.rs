//! The lexer and sigil compiler.
//!
//! Input arrives one line at a time. A line is either a `//` comment,
//! a `~~~` prose toggle, or a run of space-delimited tokens. The first
//! character of each token picks a sigil handler; everything else is a
//! dictionary word or a numeric literal. Compilation appends onto the
//! currently open sequence; when the line ends with no inner sequence
//! open, the finished top-level sequence is evaluated and destroyed.
//!
//! The `:` sigil records a pending definition name in compiler state,
//! so definitions do not nest. `;` closes the body and compiles the
//! equivalent of `'name def`.

use std::rc::Rc;

use crate::eval;
use crate::interp::Interp;
use crate::value::{free_sequence, Sequence, Value};

/// Mutable compile state: the stack of open sequences (the bottom one
/// is the top level) and the pending `:` definition name.
pub(crate) struct Compiler {
    pub(crate) open: Vec<Sequence>,
    pending: Option<String>,
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Compiler {
            open: vec![Sequence::default()],
            pending: None,
        }
    }

    /// Depth of nested `[`; zero when the next completed line will
    /// evaluate.
    pub fn depth(&self) -> usize {
        self.open.len() - 1
    }
}

/// Feed one line through the compiler, evaluating the top-level
/// sequence if the line completes it.
pub fn run_line(interp: &mut Interp, line: &str) {
    let bytes = line.as_bytes();
    if bytes.starts_with(b"//") {
        return;
    }
    if bytes.starts_with(b"~~~") {
        interp.suppress = !interp.suppress;
        return;
    }
    if interp.suppress {
        return;
    }

    for tok in line.split(' ').filter(|t| !t.is_empty()) {
        compile_word(interp, tok);
    }

    if interp.compiler.open.len() == 1 {
        let seq = std::mem::take(&mut interp.compiler.open[0]);
        eval::run_sequence(interp, &seq);
        free_sequence(&seq, &mut interp.mem);
    }
}

/// Append a value to the innermost open sequence.
fn emit(interp: &mut Interp, v: Value) {
    interp.mem.on_alloc(&v);
    if let Some(seq) = interp.compiler.open.last_mut() {
        seq.items.push(v);
    }
}

/// Open a new inner sequence.
fn open_sequence(interp: &mut Interp) {
    interp.compiler.open.push(Sequence::default());
}

/// Close the innermost sequence and append it to its outer. Closing
/// the top level is a no-op.
fn close_sequence(interp: &mut Interp) {
    if interp.compiler.open.len() > 1 {
        let seq = interp.compiler.open.pop().unwrap_or_default();
        emit(interp, Value::Seq(Rc::new(seq)));
    }
}

/// Clone one of the builtin templates (`call`, `vget`, `def`) with an
/// optional captured sequence.
fn emit_template(interp: &mut Interp, template: Template, quote: Option<Rc<Sequence>>) {
    let source = match template {
        Template::Call => &interp.word_call,
        Template::Vget => &interp.word_vget,
        Template::Def => &interp.word_def,
    };
    if let Value::Func { op, .. } = source {
        let op = *op;
        emit(interp, Value::Func { op, quote });
    }
}

enum Template {
    Call,
    Vget,
    Def,
}

fn compile_word(interp: &mut Interp, tok: &str) {
    match tok.as_bytes()[0] {
        b'[' => open_sequence(interp),
        b']' => close_sequence(interp),
        b'@' => {
            emit(interp, Value::Str(tok[1..].to_string()));
            emit_template(interp, Template::Vget, None);
        }
        b'!' => {
            emit(interp, Value::Str(tok[1..].to_string()));
            emit_template(interp, Template::Def, None);
        }
        b'#' => {
            let n = i64::from_str_radix(&tok[1..], 16).unwrap_or(0) as i32;
            emit(interp, Value::Int(n));
        }
        b'\'' => emit(interp, Value::Str(tok[1..].to_string())),
        b':' => {
            interp.compiler.pending = Some(tok[1..].to_string());
            open_sequence(interp);
        }
        b';' => {
            if let Some(name) = interp.compiler.pending.take() {
                close_sequence(interp);
                emit(interp, Value::Str(name));
                emit_template(interp, Template::Def, None);
            }
        }
        b'(' => {} // stack-effect comment
        _ => compile_plain_word(interp, tok),
    }
}

fn compile_plain_word(interp: &mut Interp, tok: &str) {
    enum Lookup {
        Quoted(Rc<Sequence>),
        Bound,
        Missing,
    }

    let lookup = match interp.dict.find(tok) {
        Some(Value::Seq(seq)) => Lookup::Quoted(seq.clone()),
        Some(_) => Lookup::Bound,
        None => Lookup::Missing,
    };

    match lookup {
        // A word bound to a sequence compiles to a call carrying that
        // sequence, so the body is re-entered without another lookup.
        Lookup::Quoted(seq) => emit_template(interp, Template::Call, Some(seq)),
        Lookup::Bound => emit(interp, Value::Sym(Rc::from(tok))),
        Lookup::Missing => {
            // Everything else is a number; parse failures read as zero.
            if tok.contains('.') {
                emit(interp, Value::Float(tok.parse().unwrap_or(0.0)));
            } else {
                emit(interp, Value::Int(tok.parse().unwrap_or(0)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_and_sigils() {
        let mut interp = Interp::new();
        interp.run_line("#FF 'lantern 2.5 19 bogus");
        assert_eq!(interp.pop_int(), 0); // unknown word reads as zero
        assert_eq!(interp.pop_int(), 19);
        assert_eq!(interp.pop_float(), 2.5);
        assert_eq!(interp.pop_string(), "lantern");
        assert_eq!(interp.pop_int(), 255);
    }

    #[test]
    fn bracket_sequences_nest_and_span_lines() {
        let mut interp = Interp::new();
        interp.run_line("[ 1 [ 2 3");
        assert_eq!(interp.stack.len(), 0); // still open, nothing ran
        interp.run_line("] 4 ]");
        let seq = interp.pop_seq().expect("sequence on stack");
        assert_eq!(seq.items.len(), 3);
        assert!(matches!(seq.items[1], Value::Seq(ref inner) if inner.items.len() == 2));
    }

    #[test]
    fn colon_definition_is_sugar_for_def() {
        let mut interp = Interp::new();
        interp.run_line(":twice dup + ;");
        assert!(interp.dict.contains("twice"));
        interp.run_line("21 twice");
        assert_eq!(interp.pop_int(), 42);
    }

    #[test]
    fn stray_semicolon_is_ignored() {
        let mut interp = Interp::new();
        interp.run_line("; 1 2");
        assert_eq!(interp.stack.len(), 2);
    }

    #[test]
    fn comment_and_prose_lines_are_skipped() {
        let mut interp = Interp::new();
        interp.run_line("// 1 2 3");
        assert_eq!(interp.stack.len(), 0);
        interp.run_line("~~~");
        interp.run_line("5 5 +");
        interp.run_line("~~~");
        interp.run_line("7");
        assert_eq!(interp.pop_int(), 7);
        assert_eq!(interp.stack.len(), 0);
    }

    #[test]
    fn stack_effect_comment_token_is_inert() {
        let mut interp = Interp::new();
        interp.run_line("(n--n) 3");
        assert_eq!(interp.pop_int(), 3);
        assert_eq!(interp.stack.len(), 0);
    }
}
