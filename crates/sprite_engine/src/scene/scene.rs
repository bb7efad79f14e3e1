//! Scene marker component

use crate::ecs::{Component, Context};
use crate::events::Signal0;

/// Optional component on a scene entity.
///
/// Without one, a scene counts as opaque and nothing is emitted when it is
/// shown or hidden.
#[derive(Debug)]
pub struct Scene {
    /// Emitted when the scene becomes the top of the stack
    pub shown: Signal0,
    /// Emitted when the scene stops being the top of the stack
    pub hidden: Signal0,
    /// Whether the scene hides everything beneath it
    pub opaque: bool,
}

impl Scene {
    /// Create a scene marker
    pub fn new(opaque: bool) -> Self {
        Self {
            shown: Signal0::new(),
            hidden: Signal0::new(),
            opaque,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Component for Scene {
    fn dispose(&mut self, _ctx: &mut Context<'_>) {
        self.shown.disconnect_all();
        self.hidden.disconnect_all();
    }
}
