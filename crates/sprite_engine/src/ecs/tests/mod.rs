//! Entity/component graph tests

mod graph;

use super::{Component, Context};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared event log written by [`Recorder`] components
pub(super) type Log = Rc<RefCell<Vec<String>>>;

pub(super) fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Component that records every lifecycle hook it receives
pub(super) struct Recorder {
    pub name: &'static str,
    pub log: Log,
}

impl Recorder {
    pub fn new(name: &'static str, log: &Log) -> Self {
        Self { name, log: Rc::clone(log) }
    }

    fn record(&self, event: &str) {
        self.log.borrow_mut().push(format!("{}:{event}", self.name));
    }
}

impl Component for Recorder {
    fn on_added(&mut self, _ctx: &mut Context<'_>) {
        self.record("added");
    }

    fn on_removed(&mut self, _ctx: &mut Context<'_>) {
        self.record("removed");
    }

    fn on_start(&mut self, _ctx: &mut Context<'_>) {
        self.record("start");
    }

    fn on_update(&mut self, _ctx: &mut Context<'_>, _dt: f32) {
        self.record("update");
    }

    fn dispose(&mut self, _ctx: &mut Context<'_>) {
        self.record("dispose");
    }
}

/// Same behavior as [`Recorder`] under a different concrete type
pub(super) struct OtherRecorder(pub Recorder);

impl Component for OtherRecorder {
    fn on_removed(&mut self, ctx: &mut Context<'_>) {
        self.0.on_removed(ctx);
    }

    fn dispose(&mut self, ctx: &mut Context<'_>) {
        self.0.dispose(ctx);
    }
}
