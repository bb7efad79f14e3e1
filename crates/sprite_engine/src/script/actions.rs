//! Built-in actions

use super::Action;
use crate::ecs::Context;
use std::fmt;

/// Wait a fixed time
#[derive(Debug, Clone)]
pub struct Delay {
    duration: f32,
    elapsed: f32,
}

impl Delay {
    /// Wait `seconds`
    pub fn new(seconds: f32) -> Self {
        Self { duration: seconds, elapsed: 0.0 }
    }
}

impl Action for Delay {
    fn update(&mut self, dt: f32, _ctx: &mut Context<'_>) -> Option<f32> {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            let overtime = self.elapsed - self.duration;
            self.elapsed = 0.0;
            return Some((dt - overtime).max(0.0));
        }
        None
    }
}

/// Call a function once and finish immediately
pub struct CallFunction {
    f: Box<dyn FnMut(&mut Context<'_>)>,
}

impl CallFunction {
    /// Wrap a function taking the script's context
    pub fn new(f: impl FnMut(&mut Context<'_>) + 'static) -> Self {
        Self { f: Box::new(f) }
    }
}

impl Action for CallFunction {
    fn update(&mut self, _dt: f32, ctx: &mut Context<'_>) -> Option<f32> {
        (self.f)(ctx);
        Some(0.0)
    }
}

impl fmt::Debug for CallFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallFunction").finish_non_exhaustive()
    }
}

/// Run actions one after another, carrying leftover time into the next
pub struct Sequence {
    actions: Vec<Box<dyn Action>>,
    index: usize,
}

impl Sequence {
    /// Run `actions` in order
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self { actions, index: 0 }
    }
}

impl Action for Sequence {
    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Option<f32> {
        let mut total = 0.0;
        while let Some(action) = self.actions.get_mut(self.index) {
            let spent = action.update(dt - total, ctx)?;
            total += spent;
            self.index += 1;
        }
        self.index = 0;
        Some(total)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.actions.len())
            .field("index", &self.index)
            .finish()
    }
}

/// Run actions together, finishing when the slowest one does
pub struct Parallel {
    actions: Vec<Box<dyn Action>>,
    finished: Vec<bool>,
    max_spent: f32,
}

impl Parallel {
    /// Run `actions` side by side
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        let finished = vec![false; actions.len()];
        Self { actions, finished, max_spent: 0.0 }
    }
}

impl Action for Parallel {
    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Option<f32> {
        let mut done = true;
        for (action, finished) in self.actions.iter_mut().zip(self.finished.iter_mut()) {
            if *finished {
                continue;
            }
            match action.update(dt, ctx) {
                Some(spent) => {
                    *finished = true;
                    self.max_spent = self.max_spent.max(spent);
                }
                None => done = false,
            }
        }

        if !done {
            return None;
        }
        self.finished.iter_mut().for_each(|f| *f = false);
        Some(std::mem::take(&mut self.max_spent))
    }
}

impl fmt::Debug for Parallel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parallel")
            .field("len", &self.actions.len())
            .field("finished", &self.finished)
            .finish()
    }
}

/// Run an action a number of times, or forever
pub struct Repeat {
    action: Box<dyn Action>,
    count: Option<u32>,
    remaining: u32,
}

impl Repeat {
    /// Repeat `count` times
    pub fn times(action: impl Action + 'static, count: u32) -> Self {
        Self { action: Box::new(action), count: Some(count), remaining: count }
    }

    /// Repeat until the script stops it
    pub fn forever(action: impl Action + 'static) -> Self {
        Self { action: Box::new(action), count: None, remaining: 0 }
    }
}

impl Action for Repeat {
    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Option<f32> {
        let Some(count) = self.count else {
            self.action.update(dt, ctx);
            return None;
        };
        if count == 0 {
            return Some(0.0);
        }

        let spent = self.action.update(dt, ctx)?;
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = count;
            return Some(spent);
        }
        None
    }
}

impl fmt::Debug for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repeat")
            .field("count", &self.count)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
