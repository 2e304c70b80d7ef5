//! Console and host-control words.

use crate::interp::Interp;

// ( a -- ) print the top value and a space.
pub fn dot(interp: &mut Interp) {
    let v = interp.pop_operand();
    let text = format!("{} ", v);
    interp.out.write_str(&text);
    interp.drop_value(v);
}

// ( -- ) newline.
pub fn cr(interp: &mut Interp) {
    interp.out.write_line("");
}

// ( -- ) print the whole stack, top first, without consuming it.
pub fn prtstk(interp: &mut Interp) {
    let mut line = String::new();
    for v in interp.stack.iter_top_down() {
        line.push_str(&v.to_string());
        line.push(' ');
    }
    interp.out.write_line(&line);
}

// ( -- ) list the dictionary, newest entry first.
pub fn prtdict(interp: &mut Interp) {
    let mut lines = String::new();
    for entry in interp.dict.iter_newest_first() {
        lines.push_str(&format!("{}: {}\n", entry.word, entry.value));
    }
    interp.out.write_str(&lines);
}

// ( n -- ) zero disables echo of received lines.
pub fn cmd_echo(interp: &mut Interp) {
    interp.echo = interp.pop_int() != 0;
}

// ( -- ) ask the host for a reset.
pub fn rb(interp: &mut Interp) {
    interp.host.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::Output;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<String>>);

    impl Output for Captured {
        fn write_str(&mut self, text: &str) {
            self.0.borrow_mut().push_str(text);
        }
    }

    #[test]
    fn dot_prints_in_console_format() {
        let out = Captured::default();
        let mut interp = Interp::new();
        interp.set_output(Box::new(out.clone()));
        interp.run_line("42 . 2.5 . 'go . 3 array .");
        assert_eq!(out.0.borrow().as_str(), "42 2.5 go <int[3]> ");
    }

    #[test]
    fn prtstk_shows_top_first_and_keeps_the_stack() {
        let out = Captured::default();
        let mut interp = Interp::new();
        interp.set_output(Box::new(out.clone()));
        interp.run_line("1 2 3 prtstk");
        assert_eq!(out.0.borrow().as_str(), "3 2 1 \n");
        assert_eq!(interp.stack.len(), 3);
    }

    #[test]
    fn prtdict_lists_newest_first() {
        let out = Captured::default();
        let mut interp = Interp::new();
        interp.set_output(Box::new(out.clone()));
        interp.run_line("1 'a def 2 'b def prtdict");
        let text = out.0.borrow();
        let a_at = text.find("a: 1").expect("a listed");
        let b_at = text.find("b: 2").expect("b listed");
        assert!(b_at < a_at);
    }
}
