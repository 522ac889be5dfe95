// Host-side tests for the per-frame update.

use glam::Vec3;
use handheld_core::{
    Console, ElementId, NodeHost, NodeTransform, PointerContact, PointerEvent, SourceImage,
    Tuning, CONVERGENCE_RATE, PRESS_DEPTH, TILT_MAX,
};

/// Render objects that can be "still loading" (None).
#[derive(Default)]
struct Nodes {
    slots: [Option<NodeTransform>; 5],
}

impl Nodes {
    fn loaded() -> Self {
        let mut n = Self::default();
        for id in ElementId::ALL {
            n.slots[id.index()] = Some(NodeTransform::at(Vec3::new(
                id.index() as f32 - 2.0,
                -2.0,
                0.98,
            )));
        }
        n
    }

    fn get(&self, id: ElementId) -> NodeTransform {
        self.slots[id.index()].expect("node loaded")
    }
}

impl NodeHost for Nodes {
    fn node_mut(&mut self, id: ElementId) -> Option<&mut NodeTransform> {
        self.slots[id.index()].as_mut()
    }
}

#[test]
fn pressed_button_snaps_to_depth_in_one_large_step() {
    let mut console = Console::default();
    let mut nodes = Nodes::loaded();
    let tuning = Tuning::default();
    console.advance_frame(0.0, &mut nodes, &tuning);

    console.handle_pointer(PointerEvent::Enter(ElementId::B));
    assert_eq!(console.controls.get(ElementId::B).depth.target, -0.1);

    // 0.2 s at 0.6/s is a 0.12 step, more than the 0.1 gap: lands exactly
    console.advance_frame(0.2, &mut nodes, &tuning);
    assert_eq!(console.controls.get(ElementId::B).depth.actual, -PRESS_DEPTH);
    assert!((nodes.get(ElementId::B).position.z - (0.98 - PRESS_DEPTH)).abs() < 1e-6);
}

#[test]
fn small_steps_move_at_the_convergence_rate() {
    let mut console = Console::default();
    let mut nodes = Nodes::loaded();
    let tuning = Tuning::default();
    console.advance_frame(0.0, &mut nodes, &tuning);
    console.handle_pointer(PointerEvent::Enter(ElementId::A));
    console.advance_frame(0.05, &mut nodes, &tuning);
    let actual = console.controls.get(ElementId::A).depth.actual;
    assert!((actual + 0.05 * CONVERGENCE_RATE).abs() < 1e-6);
}

#[test]
fn authoring_offset_becomes_the_rest_pose() {
    let mut console = Console::default();
    let mut nodes = Nodes::loaded();
    nodes.slots[ElementId::Start.index()] = Some(NodeTransform {
        position: Vec3::new(0.5, -4.0, 1.7),
        rotation: Vec3::new(0.2, 0.0, 0.0),
    });
    for _ in 0..30 {
        console.advance_frame(1.0 / 60.0, &mut nodes, &Tuning::default());
    }
    // target 0 means resting pose, not the origin
    let node = nodes.get(ElementId::Start);
    assert_eq!(node.position.z, 1.7);
    assert_eq!(node.rotation.x, 0.2);
}

#[test]
fn unloaded_elements_are_skipped_then_bound_on_arrival() {
    let mut console = Console::default();
    let mut nodes = Nodes::loaded();
    nodes.slots[ElementId::DPad.index()] = None;
    console.handle_pointer(PointerEvent::Enter(ElementId::DPad));
    console.advance_frame(0.5, &mut nodes, &Tuning::default());
    assert!(!console.controls.get(ElementId::DPad).is_bound());
    assert_eq!(console.controls.get(ElementId::DPad).depth.actual, 0.0);

    nodes.slots[ElementId::DPad.index()] = Some(NodeTransform::at(Vec3::new(-1.9, -2.0, 0.985)));
    console.advance_frame(0.5, &mut nodes, &Tuning::default());
    assert!(console.controls.get(ElementId::DPad).is_bound());
    assert!((nodes.get(ElementId::DPad).position.z - (0.985 - PRESS_DEPTH)).abs() < 1e-6);
}

#[test]
fn pad_rotation_follows_tilt_targets() {
    let mut console = Console::default();
    let mut nodes = Nodes::loaded();
    let tuning = Tuning::default();
    console.advance_frame(0.0, &mut nodes, &tuning);
    let rest = nodes.get(ElementId::DPad).position;

    console.handle_pointer(PointerEvent::Enter(ElementId::DPad));
    console.handle_pointer(PointerEvent::Move(PointerContact {
        element: ElementId::DPad,
        point: rest + Vec3::new(-0.5, 0.5, 0.0),
    }));
    for _ in 0..120 {
        console.advance_frame(1.0 / 60.0, &mut nodes, &tuning);
    }
    let node = nodes.get(ElementId::DPad);
    assert_eq!(node.rotation.y, -TILT_MAX);
    assert_eq!(node.rotation.x, -TILT_MAX);
    assert!(console.controls.get(ElementId::DPad).settled());

    console.handle_pointer(PointerEvent::Leave(ElementId::DPad));
    for _ in 0..120 {
        console.advance_frame(1.0 / 60.0, &mut nodes, &tuning);
    }
    let node = nodes.get(ElementId::DPad);
    assert_eq!(node.rotation.x, 0.0);
    assert_eq!(node.rotation.y, 0.0);
    assert_eq!(node.position.z, rest.z);
}

#[test]
fn shader_config_tracks_tuning_and_time() {
    let mut console = Console::default();
    let mut nodes = Nodes::default();
    let tuning = Tuning {
        rows: 0,
        columns: 9000,
        threshold: -3.0,
        brightness: 2.0,
        ..Tuning::default()
    };
    console.advance_frame(0.25, &mut nodes, &tuning);
    console.advance_frame(0.5, &mut nodes, &tuning);
    assert_eq!(console.shader.rows, 1);
    assert_eq!(console.shader.columns, 600);
    assert_eq!(console.shader.threshold, 0.0);
    assert_eq!(console.shader.brightness, 2.0);
    assert!((console.shader.time - 0.75).abs() < 1e-6);
}

#[test]
fn image_becomes_visible_on_the_next_frame() {
    let mut console = Console::default();
    assert!(!console.screen.is_ready());
    let before = console.screen.generation();
    console.set_image(SourceImage::solid(2, 2, [255, 255, 255, 255]).expect("valid image"));
    assert!(console.screen.is_ready());
    assert_ne!(console.screen.generation(), before);
}
