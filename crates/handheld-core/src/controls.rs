//! Registry of the five interactive controls and their pointer handlers.

use crate::element::{AnimatedElement, ElementId, ElementTargets};
use crate::tilt::{depth_delta, pad_tilt};
use glam::Vec3;

/// A pointer hit on one control, in the control's parent space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerContact {
    pub element: ElementId,
    pub point: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter(ElementId),
    Leave(ElementId),
    Move(PointerContact),
}

#[derive(Clone, Debug)]
pub struct Controls {
    elements: [AnimatedElement; 5],
    last_contact: Option<Vec3>,
}

impl Default for Controls {
    fn default() -> Self {
        Self::new()
    }
}

impl Controls {
    pub fn new() -> Self {
        Self::with_targets(|_| ElementTargets::default())
    }

    /// Build the registry with per-element initial targets.
    pub fn with_targets(mut targets: impl FnMut(ElementId) -> ElementTargets) -> Self {
        Self {
            elements: ElementId::ALL.map(|id| AnimatedElement::new(id, targets(id))),
            last_contact: None,
        }
    }

    pub fn get(&self, id: ElementId) -> &AnimatedElement {
        &self.elements[id.index()]
    }

    pub fn get_mut(&mut self, id: ElementId) -> &mut AnimatedElement {
        &mut self.elements[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimatedElement> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut AnimatedElement> {
        self.elements.iter_mut()
    }

    /// Last contact point reported over the directional pad.
    pub fn last_contact(&self) -> Option<Vec3> {
        self.last_contact
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(id) => self.on_pointer_enter(id),
            PointerEvent::Leave(id) => self.on_pointer_leave(id),
            PointerEvent::Move(contact) => self.on_pointer_move(contact),
        }
    }

    pub fn on_pointer_enter(&mut self, id: ElementId) {
        let e = self.get_mut(id);
        e.depth.target += depth_delta(e.pressed, true);
        e.pressed = true;
        log::debug!("[pointer] enter {} depth_target={:.3}", id, e.depth.target);
    }

    pub fn on_pointer_leave(&mut self, id: ElementId) {
        let e = self.get_mut(id);
        e.depth.target += depth_delta(e.pressed, false);
        e.pressed = false;
        if let Some(t) = &mut e.tilt {
            t.x.target = 0.0;
            t.y.target = 0.0;
        }
        log::debug!("[pointer] leave {} depth_target={:.3}", id, e.depth.target);
    }

    /// Tilt the pad toward the contact point. Moves over other controls,
    /// over a pad that is not hovered, or over a pad whose resting pose is
    /// still unknown are ignored.
    pub fn on_pointer_move(&mut self, contact: PointerContact) {
        if !contact.element.tilts() {
            return;
        }
        let e = self.get_mut(contact.element);
        if !e.pressed {
            return;
        }
        let Some(rest) = e.rest().map(|r| r.position) else {
            return;
        };
        let targets = pad_tilt(rest, contact.point);
        if let Some(t) = &mut e.tilt {
            t.x.target = targets.x;
            t.y.target = targets.y;
        }
        self.last_contact = Some(contact.point);
    }
}
