//! Script component

use super::Action;
use crate::ecs::{Component, Context};
use crate::events::Disposable;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

struct Running {
    action: Box<dyn Action>,
    stopped: Rc<Cell<bool>>,
}

/// Stops a running action when disposed
#[derive(Debug, Clone)]
pub struct ActionHandle {
    stopped: Rc<Cell<bool>>,
}

impl ActionHandle {
    /// Whether the handle was disposed
    pub fn is_disposed(&self) -> bool {
        self.stopped.get()
    }
}

impl Disposable for ActionHandle {
    fn dispose(&mut self) {
        self.stopped.set(true);
    }
}

/// Runs actions on its owner every frame.
///
/// Actions are updated in the order they were started. A finished or
/// disposed action is dropped.
#[derive(Default)]
pub struct Script {
    running: Vec<Running>,
}

impl Script {
    /// Create an idle script
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an action. Disposing the handle stops it before its next update.
    pub fn run(&mut self, action: impl Action + 'static) -> ActionHandle {
        let stopped = Rc::new(Cell::new(false));
        self.running.push(Running {
            action: Box::new(action),
            stopped: Rc::clone(&stopped),
        });
        ActionHandle { stopped }
    }

    /// Drop every running action
    pub fn stop_all(&mut self) {
        self.running.clear();
    }

    /// Number of actions still running
    pub fn running_count(&self) -> usize {
        self.running.len()
    }
}

impl Component for Script {
    fn on_update(&mut self, ctx: &mut Context<'_>, dt: f32) {
        self.running.retain_mut(|running| {
            !running.stopped.get() && running.action.update(dt, ctx).is_none()
        });
    }

    fn dispose(&mut self, _ctx: &mut Context<'_>) {
        self.stop_all();
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script")
            .field("running", &self.running.len())
            .finish()
    }
}
