//! Scheduler words.

use crate::interp::Interp;
use crate::scheduler::task_from_spec;

// ( [ body period deadline ] name -- ) define or replace a task.
pub fn loop_def(interp: &mut Interp) {
    let name = interp.pop_string();
    let v = interp.pop_operand();
    if let Some(spec) = v.as_seq(&interp.dict) {
        let task = {
            let Interp { dict, mem, .. } = interp;
            task_from_spec(name, &spec, mem, dict)
        };
        if let Some(task) = task {
            let Interp { tasks, mem, .. } = interp;
            tasks.define(task, mem);
        }
    }
    interp.drop_value(v);
}

// ( name -- )
pub fn loop_forget(interp: &mut Interp) {
    let name = interp.pop_string();
    let Interp { tasks, mem, .. } = interp;
    tasks.forget(&name, mem);
}

#[cfg(test)]
mod tests {
    use crate::interp::Interp;

    #[test]
    fn malformed_specs_are_ignored() {
        let mut interp = Interp::new();
        interp.run_line("[ 1 2 ] 'short loop:def");
        interp.run_line("5 'scalar loop:def");
        assert!(interp.tasks.is_empty());
    }

    #[test]
    fn tasks_own_a_private_copy_of_their_body() {
        let mut interp = Interp::new();
        interp.run_line("[ [ 1 ] 50.0 0.0 ] 'blink loop:def");
        assert_eq!(interp.tasks.len(), 1);
        let task = interp.tasks.find("blink").unwrap();
        assert_eq!(task.period_ms, 50.0);
        assert_eq!(task.deadline_ms, 0.0);
        assert_eq!(task.body.items.len(), 1);
    }
}
