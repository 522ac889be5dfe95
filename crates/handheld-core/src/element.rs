//! Animation records for the console's physical controls.
//!
//! Records are plain data. The frame loop advances them and writes the
//! result into the render object owned by the host.

use crate::animator::Animated;
use crate::error::HandheldError;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// The closed set of interactive controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    A,
    B,
    Select,
    Start,
    DPad,
}

impl ElementId {
    pub const ALL: [ElementId; 5] = [
        ElementId::A,
        ElementId::B,
        ElementId::Select,
        ElementId::Start,
        ElementId::DPad,
    ];

    pub const fn index(self) -> usize {
        match self {
            ElementId::A => 0,
            ElementId::B => 1,
            ElementId::Select => 2,
            ElementId::Start => 3,
            ElementId::DPad => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ElementId::A => "a",
            ElementId::B => "b",
            ElementId::Select => "select",
            ElementId::Start => "start",
            ElementId::DPad => "dPad",
        }
    }

    /// Only the directional pad rocks on its pivot.
    pub const fn tilts(self) -> bool {
        matches!(self, ElementId::DPad)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementId {
    type Err = HandheldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" => Ok(ElementId::A),
            "b" => Ok(ElementId::B),
            "select" => Ok(ElementId::Select),
            "start" => Ok(ElementId::Start),
            "dpad" | "d_pad" | "d-pad" => Ok(ElementId::DPad),
            _ => Err(HandheldError::UnknownElement(s.to_string())),
        }
    }
}

/// Mutable pose of one render object, in its parent's space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Vec3, // euler XYZ, radians
}

impl NodeTransform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }
}

/// Access to the render objects a host has instantiated so far.
///
/// `None` means the object is not available yet (asset still loading); the
/// frame loop skips that element for the frame.
pub trait NodeHost {
    fn node_mut(&mut self, id: ElementId) -> Option<&mut NodeTransform>;
}

/// Initial targets for [`AnimatedElement::new`]; omitted values are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementTargets {
    pub depth: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
}

/// Rocker state of the directional pad.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: Animated,
    pub y: Animated,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedElement {
    pub id: ElementId,
    /// Offset along the push axis, relative to the resting pose.
    pub depth: Animated,
    /// Present only for elements that tilt.
    pub tilt: Option<Tilt>,
    /// Pointer currently over the element; guards against repeated enter/leave.
    pub pressed: bool,
    rest: Option<NodeTransform>,
}

impl AnimatedElement {
    pub fn new(id: ElementId, targets: ElementTargets) -> Self {
        let tilt = id.tilts().then(|| Tilt {
            x: Animated {
                target: targets.tilt_x,
                actual: 0.0,
            },
            y: Animated {
                target: targets.tilt_y,
                actual: 0.0,
            },
        });
        Self {
            id,
            depth: Animated {
                target: targets.depth,
                actual: 0.0,
            },
            tilt,
            pressed: false,
            rest: None,
        }
    }

    /// Resting pose captured the first time the render object was seen.
    pub fn rest(&self) -> Option<&NodeTransform> {
        self.rest.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.rest.is_some()
    }

    /// Capture the resting pose once. Actuals are offsets from this pose, so
    /// they start at zero regardless of where the object was authored.
    pub fn bind(&mut self, node: &NodeTransform) -> bool {
        if self.rest.is_some() {
            return false;
        }
        self.rest = Some(*node);
        self.depth.actual = 0.0;
        if let Some(t) = &mut self.tilt {
            t.x.actual = 0.0;
            t.y.actual = 0.0;
        }
        true
    }

    /// Advance every animated scalar and write the pose into `node`.
    pub fn update(&mut self, node: &mut NodeTransform, elapsed: f32, rate: f32) {
        self.bind(node);
        let Some(rest) = self.rest else {
            return;
        };
        node.position.z = rest.position.z + self.depth.step(elapsed, rate);
        if let Some(t) = &mut self.tilt {
            node.rotation.y = rest.rotation.y + t.y.step(elapsed, rate);
            node.rotation.x = rest.rotation.x + t.x.step(elapsed, rate);
        }
    }

    pub fn settled(&self) -> bool {
        self.depth.settled() && self.tilt.map_or(true, |t| t.x.settled() && t.y.settled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for id in ElementId::ALL {
            assert_eq!(id.name().parse::<ElementId>(), Ok(id));
        }
        assert!("x".parse::<ElementId>().is_err());
    }

    #[test]
    fn only_the_pad_carries_tilt() {
        for id in ElementId::ALL {
            let e = AnimatedElement::new(id, ElementTargets::default());
            assert_eq!(e.tilt.is_some(), id == ElementId::DPad);
        }
    }
}
