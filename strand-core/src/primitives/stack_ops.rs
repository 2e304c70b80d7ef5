//! Stack shuffling words.

use crate::interp::Interp;

// ( a -- a a )
pub fn dup(interp: &mut Interp) {
    let v = interp.clone_at(0);
    interp.stack.push(v);
}

// ( a b -- a b a )
pub fn over(interp: &mut Interp) {
    let v = interp.clone_at(1);
    interp.stack.push(v);
}

// ( a b -- a b a b )
pub fn dup2(interp: &mut Interp) {
    over(interp);
    over(interp);
}

// Fixed-depth peeks at 1 through 5 from the top.
pub fn aty(interp: &mut Interp) {
    let v = interp.clone_at(1);
    interp.stack.push(v);
}

pub fn atz(interp: &mut Interp) {
    let v = interp.clone_at(2);
    interp.stack.push(v);
}

pub fn atu(interp: &mut Interp) {
    let v = interp.clone_at(3);
    interp.stack.push(v);
}

pub fn atv(interp: &mut Interp) {
    let v = interp.clone_at(4);
    interp.stack.push(v);
}

pub fn atw(interp: &mut Interp) {
    let v = interp.clone_at(5);
    interp.stack.push(v);
}

// ( n -- copy-of-item-n ) with 0 the top of stack.
pub fn at(interp: &mut Interp) {
    let n = interp.pop_int().max(0) as usize;
    let v = interp.clone_at(n);
    interp.stack.push(v);
}

// ( -- depth )
pub fn stack_size(interp: &mut Interp) {
    let n = interp.stack.len() as i32;
    interp.push_int(n);
}

// ( a b -- b a )
pub fn swap(interp: &mut Interp) {
    interp.stack.swap_top();
}

// ( a b c -- c a b )
pub fn rot(interp: &mut Interp) {
    if interp.stack.len() >= 3 {
        let v = interp.stack.pop().unwrap_or_default();
        interp.stack.insert_under(2, v);
    }
}

// ( a b c -- b c a )
pub fn rup(interp: &mut Interp) {
    if interp.stack.len() >= 3 {
        if let Some(v) = interp.stack.take_at(2) {
            interp.stack.push(v);
        }
    }
}

// ( a b c d -- d a b c )
pub fn rot4(interp: &mut Interp) {
    if interp.stack.len() >= 4 {
        let v = interp.stack.pop().unwrap_or_default();
        interp.stack.insert_under(3, v);
    }
}

// ( a b c d -- b c d a )
pub fn rup4(interp: &mut Interp) {
    if interp.stack.len() >= 4 {
        if let Some(v) = interp.stack.take_at(3) {
            interp.stack.push(v);
        }
    }
}

// ( ... n -- rotated ) the top item moves under the next n-1.
pub fn rotn(interp: &mut Interp) {
    let n = interp.pop_int();
    if n >= 2 && interp.stack.len() >= n as usize {
        let v = interp.stack.pop().unwrap_or_default();
        interp.stack.insert_under(n as usize - 1, v);
    }
}

// ( ... n -- rotated ) the item at depth n-1 moves to the top.
pub fn rupn(interp: &mut Interp) {
    let n = interp.pop_int();
    if n >= 2 && interp.stack.len() >= n as usize {
        if let Some(v) = interp.stack.take_at(n as usize - 1) {
            interp.stack.push(v);
        }
    }
}

// ( a -- )
pub fn drop_top(interp: &mut Interp) {
    if let Some(v) = interp.stack.pop() {
        interp.drop_value(v);
    }
}

// ( a b -- )
pub fn drop2(interp: &mut Interp) {
    drop_top(interp);
    drop_top(interp);
}

// ( ... -- )
pub fn clst(interp: &mut Interp) {
    let Interp { stack, mem, .. } = interp;
    stack.clear(mem);
}

// ( a -- ) moves the top of the primary stack to the stash.
pub fn stash(interp: &mut Interp) {
    if let Some(v) = interp.stack.pop() {
        interp.stash.push(v);
    }
}

// ( -- a ) moves the top of the stash back.
pub fn unstash(interp: &mut Interp) {
    if let Some(v) = interp.stash.pop() {
        interp.stack.push(v);
    }
}

// Exchange the identities of the two stacks.
pub fn swap_stash(interp: &mut Interp) {
    std::mem::swap(&mut interp.stack, &mut interp.stash);
}
