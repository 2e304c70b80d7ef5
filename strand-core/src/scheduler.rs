//! Periodic loop tasks.
//!
//! A task is a named sequence with a period and a next deadline, both
//! in milliseconds as floats so they outlive the 32-bit integer range
//! of a long-running counter. On every host tick the list is walked;
//! a task whose deadline has arrived runs to completion on the shared
//! evaluator and its deadline advances to the time sampled before the
//! run plus its period, so an overrunning task re-fires on the next
//! walk.
//!
//! `loop:def` consumes a three-element sequence: the body, the period
//! and the initial deadline. The body is deep-copied so the task owns
//! it; `loop:forget` releases it.

use std::rc::Rc;

use crate::eval;
use crate::interp::Interp;
use crate::mem::MemStats;
use crate::value::{deep_clone_seq, free_sequence, Sequence};

pub struct Task {
    pub name: String,
    pub body: Rc<Sequence>,
    pub period_ms: f64,
    pub deadline_ms: f64,
}

#[derive(Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList { tasks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn define(&mut self, task: Task, mem: &mut MemStats) {
        self.forget(&task.name, mem);
        self.tasks.push(task);
    }

    pub fn forget(&mut self, name: &str, mem: &mut MemStats) {
        if let Some(idx) = self.tasks.iter().rposition(|t| t.name == name) {
            let task = self.tasks.remove(idx);
            free_sequence(&task.body, mem);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().rev().find(|t| t.name == name)
    }
}

/// Build a task from the three-element sequence `loop:def` consumes.
/// Anything malformed is silently dropped.
pub fn task_from_spec(
    name: String,
    spec: &Sequence,
    mem: &mut MemStats,
    dict: &crate::dict::Dictionary,
) -> Option<Task> {
    if spec.items.len() < 3 {
        return None;
    }
    let body = spec.items[0].as_seq(dict)?;
    let period_ms = spec.items[1].as_float(dict);
    let deadline_ms = spec.items[2].as_float(dict);
    Some(Task {
        name,
        body: Rc::new(deep_clone_seq(&body, mem)),
        period_ms,
        deadline_ms,
    })
}

/// One scheduler walk: run every task whose deadline has arrived,
/// newest definition first, strictly sequentially.
pub fn tick(interp: &mut Interp) {
    let mut i = interp.tasks.tasks.len();
    while i > 0 {
        i -= 1;
        if i >= interp.tasks.tasks.len() {
            // A task removed entries while it ran.
            continue;
        }
        let now = interp.clock.millis();
        if interp.tasks.tasks[i].deadline_ms <= now {
            let body = interp.tasks.tasks[i].body.clone();
            eval::run_sequence(interp, &body);
            if let Some(task) = interp.tasks.tasks.get_mut(i) {
                task.deadline_ms = now + task.period_ms;
            }
        }
    }
}
