//! Pointer hover tracking and keyboard tuning.

use handheld_core::{ElementId, PointerContact, PointerEvent, Tuning};
use smallvec::SmallVec;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub inside: bool,
}

pub type PointerEvents = SmallVec<[PointerEvent; 3]>;

/// Turns per-move pick results into enter/leave/move events.
#[derive(Default, Clone, Copy, Debug)]
pub struct HoverTracker {
    current: Option<ElementId>,
}

impl HoverTracker {
    pub fn hovered(&self) -> Option<ElementId> {
        self.current
    }

    /// Feed the control under the cursor (if any) after a pointer move.
    pub fn update(&mut self, hit: Option<PointerContact>) -> PointerEvents {
        let mut events = PointerEvents::new();
        let next = hit.map(|c| c.element);
        if next != self.current {
            if let Some(prev) = self.current {
                events.push(PointerEvent::Leave(prev));
            }
            if let Some(id) = next {
                events.push(PointerEvent::Enter(id));
            }
            self.current = next;
        }
        if let Some(contact) = hit {
            events.push(PointerEvent::Move(contact));
        }
        events
    }

    /// The cursor left the window.
    pub fn clear(&mut self) -> PointerEvents {
        let mut events = PointerEvents::new();
        if let Some(prev) = self.current.take() {
            events.push(PointerEvent::Leave(prev));
        }
        events
    }
}

/// Apply one tuning key: lowercase decreases, uppercase increases, `0`
/// restores the defaults. Returns whether the key was recognised.
pub fn adjust_tuning(key: &str, tuning: &mut Tuning) -> bool {
    let t = tuning;
    match key {
        "r" => t.rows = t.rows.saturating_sub(1),
        "R" => t.rows = t.rows.saturating_add(1),
        "c" => t.columns = t.columns.saturating_sub(10),
        "C" => t.columns = t.columns.saturating_add(10),
        "h" => t.bar_height -= 0.05,
        "H" => t.bar_height += 0.05,
        "w" => t.bar_width -= 0.01,
        "W" => t.bar_width += 0.01,
        "g" => t.bar_width_gap -= 0.01,
        "G" => t.bar_width_gap += 0.01,
        "b" => t.brightness -= 0.05,
        "B" => t.brightness += 0.05,
        "t" => t.threshold -= 0.05,
        "T" => t.threshold += 0.05,
        "0" => *t = Tuning::default(),
        _ => return false,
    }
    *t = t.clamped();
    log::info!(
        "[tuning] rows={} columns={} bar_height={:.2} bar_width={:.2} gap={:.2} brightness={:.2} threshold={:.2}",
        t.rows,
        t.columns,
        t.bar_height,
        t.bar_width,
        t.bar_width_gap,
        t.brightness,
        t.threshold
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn contact(element: ElementId) -> Option<PointerContact> {
        Some(PointerContact {
            element,
            point: Vec3::ZERO,
        })
    }

    #[test]
    fn entering_then_moving_emits_enter_once() {
        let mut hover = HoverTracker::default();
        let first = hover.update(contact(ElementId::A));
        assert_eq!(first.len(), 2);
        assert_eq!(first[0], PointerEvent::Enter(ElementId::A));
        assert!(matches!(first[1], PointerEvent::Move(_)));
        let second = hover.update(contact(ElementId::A));
        assert_eq!(second.len(), 1);
        assert!(matches!(second[0], PointerEvent::Move(_)));
    }

    #[test]
    fn switching_controls_leaves_before_entering() {
        let mut hover = HoverTracker::default();
        hover.update(contact(ElementId::A));
        let ev = hover.update(contact(ElementId::B));
        assert_eq!(ev[0], PointerEvent::Leave(ElementId::A));
        assert_eq!(ev[1], PointerEvent::Enter(ElementId::B));
        assert_eq!(hover.hovered(), Some(ElementId::B));
    }

    #[test]
    fn moving_off_and_out_of_window_leaves() {
        let mut hover = HoverTracker::default();
        hover.update(contact(ElementId::DPad));
        let ev = hover.update(None);
        assert_eq!(ev.as_slice(), &[PointerEvent::Leave(ElementId::DPad)]);
        assert!(hover.clear().is_empty());

        hover.update(contact(ElementId::Start));
        assert_eq!(
            hover.clear().as_slice(),
            &[PointerEvent::Leave(ElementId::Start)]
        );
    }

    #[test]
    fn tuning_keys_adjust_and_clamp() {
        let mut t = Tuning::default();
        assert!(adjust_tuning("R", &mut t));
        assert_eq!(t.rows, 41);
        assert!(adjust_tuning("C", &mut t));
        assert_eq!(t.columns, 367);
        for _ in 0..100 {
            adjust_tuning("T", &mut t);
        }
        assert_eq!(t.threshold, 10.0);
        for _ in 0..100 {
            adjust_tuning("w", &mut t);
        }
        assert_eq!(t.bar_width, 0.0);
        assert!(adjust_tuning("0", &mut t));
        assert_eq!(t, Tuning::default());
        assert!(!adjust_tuning("x", &mut t));
    }

    #[test]
    fn rows_never_drop_below_one() {
        let mut t = Tuning {
            rows: 1,
            ..Tuning::default()
        };
        adjust_tuning("r", &mut t);
        assert_eq!(t.rows, 1);
    }
}
