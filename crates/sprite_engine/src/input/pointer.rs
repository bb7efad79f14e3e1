//! Pointer dispatcher with bubbling and hover tracking

use crate::display::{hit_test, view_to_local, PointerSignal, Sprite};
use crate::ecs::{ComponentId, EntityId, World};
use crate::events::Signal1;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

/// Pointer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button, or a touch
    Left,
    /// Middle mouse button
    Middle,
    /// Right mouse button
    Right,
}

/// One dispatched pointer event.
///
/// Listeners receive a copy per sprite so `local_x`/`local_y` are in that
/// sprite's space; all copies share the propagation flag.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    /// X in viewport coordinates
    pub view_x: f32,
    /// Y in viewport coordinates
    pub view_y: f32,
    /// X in the receiving sprite's space (viewport space for global signals)
    pub local_x: f32,
    /// Y in the receiving sprite's space (viewport space for global signals)
    pub local_y: f32,
    /// The sprite that was hit, if any
    pub hit: Option<ComponentId>,
    /// Button that caused the event, `None` for movement
    pub button: Option<MouseButton>,
    /// Increments with every dispatched event
    pub id: u32,
    stopped: Rc<Cell<bool>>,
}

impl PointerEvent {
    fn new(id: u32, x: f32, y: f32, hit: Option<ComponentId>, button: Option<MouseButton>) -> Self {
        Self {
            view_x: x,
            view_y: y,
            local_x: x,
            local_y: y,
            hit,
            button,
            id,
            stopped: Rc::new(Cell::new(false)),
        }
    }

    /// Stop the event from reaching further ancestors and the global signals
    pub fn stop_propagation(&self) {
        self.stopped.set(true);
    }

    /// Whether a listener stopped propagation
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

/// Routes pointer activity to sprites.
///
/// Events go to the topmost sprite under the pointer first, then bubble up
/// through every ancestor sprite, then reach the global `down`/`moved`/`up`
/// signals. Any listener can cut that chain short with
/// [`PointerEvent::stop_propagation`].
#[derive(Debug, Default)]
pub struct Pointer {
    x: f32,
    y: f32,
    next_id: u32,
    pressed: HashSet<MouseButton>,
    hovered: Option<ComponentId>,
    down: Signal1<PointerEvent>,
    moved: Signal1<PointerEvent>,
    up: Signal1<PointerEvent>,
}

impl Pointer {
    /// Create a dispatcher at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Last reported X in viewport coordinates
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Last reported Y in viewport coordinates
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Whether a button is currently held
    pub fn is_down(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }

    /// Sprite currently under the pointer
    pub fn hovered(&self) -> Option<ComponentId> {
        self.hovered
    }

    /// Emitted after sprite listeners when a button is pressed
    pub fn down(&self) -> &Signal1<PointerEvent> {
        &self.down
    }

    /// Emitted after sprite listeners when the pointer moves
    pub fn moved(&self) -> &Signal1<PointerEvent> {
        &self.moved
    }

    /// Emitted after sprite listeners when a button is released
    pub fn up(&self) -> &Signal1<PointerEvent> {
        &self.up
    }

    /// Report a button press at a viewport position
    pub fn submit_down(&mut self, world: &World, root: EntityId, x: f32, y: f32, button: MouseButton) {
        self.pressed.insert(button);
        let event = self.prepare(world, root, x, y, Some(button));
        self.update_hover(world, &event);
        if dispatch(world, &event, PointerSignal::Down) {
            self.down.emit(&event);
        }
    }

    /// Report pointer movement to a viewport position
    pub fn submit_move(&mut self, world: &World, root: EntityId, x: f32, y: f32) {
        let event = self.prepare(world, root, x, y, None);
        self.update_hover(world, &event);
        if dispatch(world, &event, PointerSignal::Move) {
            self.moved.emit(&event);
        }
    }

    /// Report a button release at a viewport position
    pub fn submit_up(&mut self, world: &World, root: EntityId, x: f32, y: f32, button: MouseButton) {
        self.pressed.remove(&button);
        let event = self.prepare(world, root, x, y, Some(button));
        self.update_hover(world, &event);
        if dispatch(world, &event, PointerSignal::Up) {
            self.up.emit(&event);
        }
    }

    fn prepare(&mut self, world: &World, root: EntityId, x: f32, y: f32, button: Option<MouseButton>) -> PointerEvent {
        self.x = x;
        self.y = y;
        self.next_id = self.next_id.wrapping_add(1);
        let hit = hit_test(world, root, x, y);
        PointerEvent::new(self.next_id, x, y, hit, button)
    }

    /// Emit out/in on the sprites leaving and entering the hover position.
    /// These go to the sprite itself only and do not bubble.
    fn update_hover(&mut self, world: &World, event: &PointerEvent) {
        if self.hovered == event.hit {
            return;
        }
        let previous = std::mem::replace(&mut self.hovered, event.hit);
        if let Some(previous) = previous {
            emit_on(world, previous, PointerSignal::Out, event);
        }
        if let Some(current) = event.hit {
            emit_on(world, current, PointerSignal::In, event);
        }
    }
}

/// Bubble an event from the hit sprite through its ancestor sprites.
/// Returns whether it should continue on to the global signals.
fn dispatch(world: &World, event: &PointerEvent, which: PointerSignal) -> bool {
    let Some(hit) = event.hit else {
        return true;
    };
    let Some(owner) = world.owner(hit) else {
        return true;
    };

    let chain: Vec<ComponentId> = std::iter::once(owner)
        .chain(world.ancestors(owner))
        .filter_map(|entity| world.component_id::<Sprite>(entity))
        .collect();

    for sprite in chain {
        emit_on(world, sprite, which, event);
        if event.is_stopped() {
            return false;
        }
    }
    true
}

fn emit_on(world: &World, sprite: ComponentId, which: PointerSignal, event: &PointerEvent) {
    let Some(signal) = world
        .component_as::<Sprite>(sprite)
        .and_then(|s| s.pointer_signal(which))
    else {
        return;
    };
    let mut local = event.clone();
    if let Some(p) = view_to_local(world, sprite, event.view_x, event.view_y) {
        local.local_x = p.x;
        local.local_y = p.y;
    }
    signal.emit(&local);
}
