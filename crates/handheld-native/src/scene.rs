//! Box-built console scene: render objects, instancing and ray picking.

use glam::{EulerRot, Mat4, Quat, Vec3};
use handheld_core::{
    ElementId, NodeHost, NodeTransform, PointerContact, BODY_CENTER, BODY_HALF_EXTENTS,
    BUTTON_A_POSITION, BUTTON_B_POSITION, BUTTON_SELECT_POSITION, BUTTON_START_POSITION,
    DPAD_POSITION, SCREEN_CENTER, SCREEN_SIZE,
};

const PLASTIC_BEZEL: [f32; 4] = [0.08, 0.08, 0.1, 1.0];
const POWER_LED: [f32; 4] = [1.0, 0.02, 0.02, 1.0];

/// Plastic colours of the housing and controls, linear RGBA.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub main: [f32; 4],
    pub buttons_ab: [f32; 4],
    pub dpad: [f32; 4],
    pub buttons_sel_start: [f32; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            main: [0.62, 0.62, 0.58, 1.0],
            buttons_ab: [0.45, 0.03, 0.18, 1.0],
            dpad: [0.03, 0.03, 0.03, 1.0],
            buttons_sel_start: [0.18, 0.18, 0.2, 1.0],
        }
    }
}

/// Parse `#rrggbb` or `rrggbb` (sRGB) into a linear RGBA colour.
pub fn parse_hex_color(s: &str) -> Result<[f32; 4], String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected a colour like #8b8b83, got '{s}'"));
    }
    let channel = |i: usize| -> Result<f32, String> {
        let v = u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string())?;
        Ok((v as f32 / 255.0).powf(2.2))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?, 1.0])
}

/// One box of a render object, in the object's local space.
#[derive(Clone, Copy, Debug)]
pub struct Part {
    pub offset: Vec3,
    pub half_extents: Vec3,
    pub color: [f32; 4],
}

impl Part {
    fn centred(half_extents: Vec3, color: [f32; 4]) -> Self {
        Self {
            offset: Vec3::ZERO,
            half_extents,
            color,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub element: Option<ElementId>,
    pub transform: NodeTransform,
    pub parts: Vec<Part>,
}

impl SceneNode {
    pub fn model_matrix(&self) -> Mat4 {
        let r = self.transform.rotation;
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.transform.position,
        )
    }

    pub fn part_matrix(&self, part: &Part) -> Mat4 {
        self.model_matrix()
            * Mat4::from_translation(part.offset)
            * Mat4::from_scale(part.half_extents * 2.0)
    }
}

/// Per-instance data for the cube pipeline; matches `VsIn` in `scene.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Nearest surface hit along a pointer ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pick {
    pub element: Option<ElementId>,
    pub point: Vec3,
}

impl Pick {
    pub fn contact(&self) -> Option<PointerContact> {
        self.element.map(|element| PointerContact {
            element,
            point: self.point,
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

impl NodeHost for Scene {
    fn node_mut(&mut self, id: ElementId) -> Option<&mut NodeTransform> {
        self.nodes
            .iter_mut()
            .find(|n| n.element == Some(id))
            .map(|n| &mut n.transform)
    }
}

impl Scene {
    /// The console body, bezel, power light and the five controls.
    pub fn console(palette: &Palette) -> Self {
        let body = SceneNode {
            element: None,
            transform: NodeTransform::at(Vec3::from(BODY_CENTER)),
            parts: vec![Part::centred(Vec3::from(BODY_HALF_EXTENTS), palette.main)],
        };
        let screen = Vec3::from(SCREEN_CENTER);
        let bezel = SceneNode {
            element: None,
            transform: NodeTransform::at(Vec3::new(screen.x, screen.y, BODY_HALF_EXTENTS[2])),
            parts: vec![Part::centred(
                Vec3::new(SCREEN_SIZE[0] * 0.5 + 0.35, SCREEN_SIZE[1] * 0.5 + 0.3, 0.01),
                PLASTIC_BEZEL,
            )],
        };
        let led = SceneNode {
            element: None,
            transform: NodeTransform::at(Vec3::new(
                screen.x - SCREEN_SIZE[0] * 0.5 - 0.2,
                screen.y + 0.5,
                BODY_HALF_EXTENTS[2] + 0.02,
            )),
            parts: vec![Part::centred(Vec3::splat(0.06), POWER_LED)],
        };
        let dpad = SceneNode {
            element: Some(ElementId::DPad),
            transform: NodeTransform::at(Vec3::from(DPAD_POSITION)),
            parts: vec![
                Part::centred(Vec3::new(0.6, 0.19, 0.12), palette.dpad),
                Part::centred(Vec3::new(0.19, 0.6, 0.12), palette.dpad),
            ],
        };
        let round = |id, pos: [f32; 3]| SceneNode {
            element: Some(id),
            transform: NodeTransform::at(Vec3::from(pos)),
            parts: vec![Part::centred(Vec3::new(0.38, 0.38, 0.12), palette.buttons_ab)],
        };
        let pill = |id, pos: [f32; 3]| SceneNode {
            element: Some(id),
            transform: NodeTransform {
                position: Vec3::from(pos),
                rotation: Vec3::new(0.0, 0.0, 0.45),
            },
            parts: vec![Part::centred(Vec3::new(0.34, 0.09, 0.07), palette.buttons_sel_start)],
        };
        Self {
            nodes: vec![
                body,
                bezel,
                led,
                dpad,
                round(ElementId::A, BUTTON_A_POSITION),
                round(ElementId::B, BUTTON_B_POSITION),
                pill(ElementId::Select, BUTTON_SELECT_POSITION),
                pill(ElementId::Start, BUTTON_START_POSITION),
            ],
        }
    }

    pub fn part_count(&self) -> usize {
        self.nodes.iter().map(|n| n.parts.len()).sum()
    }

    pub fn instances(&self) -> Vec<InstanceRaw> {
        let mut out = Vec::with_capacity(self.part_count());
        for node in &self.nodes {
            for part in &node.parts {
                out.push(InstanceRaw {
                    model: node.part_matrix(part).to_cols_array_2d(),
                    color: part.color,
                });
            }
        }
        out
    }

    /// Nearest part hit by the ray, if any.
    pub fn pick(&self, ray_origin: Vec3, ray_dir: Vec3) -> Option<Pick> {
        let mut best = None::<(f32, Option<ElementId>)>;
        for node in &self.nodes {
            for part in &node.parts {
                let Some(t) = ray_unit_box(node.part_matrix(part), ray_origin, ray_dir) else {
                    continue;
                };
                match best {
                    Some((bt, _)) if t >= bt => {}
                    _ => best = Some((t, node.element)),
                }
            }
        }
        best.map(|(t, element)| Pick {
            element,
            point: ray_origin + ray_dir * t,
        })
    }
}

/// Ray parameter of the first hit against the unit cube transformed by
/// `model`, or `None` on a miss. The ray is carried into box space without
/// renormalising, so `t` stays valid in world space.
pub fn ray_unit_box(model: Mat4, ray_origin: Vec3, ray_dir: Vec3) -> Option<f32> {
    let inv = model.inverse();
    let o = inv.transform_point3(ray_origin);
    let d = inv.transform_vector3(ray_dir);
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        if d[axis].abs() < 1e-8 {
            if o[axis].abs() > 0.5 {
                return None;
            }
            continue;
        }
        let inv_d = 1.0 / d[axis];
        let t0 = (-0.5 - o[axis]) * inv_d;
        let t1 = (0.5 - o[axis]) * inv_d;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }
    if t_max < t_min || t_max < 0.0 {
        return None;
    }
    Some(if t_min >= 0.0 { t_min } else { t_max })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_front_face_of_unit_box() {
        let t = ray_unit_box(Mat4::IDENTITY, Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
        assert_eq!(t, Some(4.5));
    }

    #[test]
    fn ray_misses_offset_box() {
        let model = Mat4::from_translation(Vec3::new(3.0, 0.0, 0.0));
        assert!(ray_unit_box(model, Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).is_none());
    }

    #[test]
    fn picking_straight_down_onto_a_button_finds_it() {
        let scene = Scene::console(&Palette::default());
        let a = Vec3::from(BUTTON_A_POSITION);
        let pick = scene
            .pick(Vec3::new(a.x, a.y, 10.0), Vec3::NEG_Z)
            .expect("hit");
        assert_eq!(pick.element, Some(ElementId::A));
        assert!((pick.point.z - (a.z + 0.12)).abs() < 1e-4);
    }

    #[test]
    fn picking_the_body_yields_no_contact() {
        let scene = Scene::console(&Palette::default());
        let pick = scene
            .pick(Vec3::new(2.5, 5.5, 10.0), Vec3::NEG_Z)
            .expect("hit body");
        assert_eq!(pick.element, None);
        assert!(pick.contact().is_none());
    }

    #[test]
    fn instances_carry_the_configured_palette() {
        let palette = Palette {
            main: [0.1, 0.2, 0.3, 1.0],
            buttons_ab: [0.9, 0.0, 0.0, 1.0],
            dpad: [0.0, 0.9, 0.0, 1.0],
            buttons_sel_start: [0.0, 0.0, 0.9, 1.0],
        };
        let scene = Scene::console(&palette);
        let colors: Vec<[f32; 4]> = scene.instances().iter().map(|i| i.color).collect();
        assert_eq!(colors.len(), scene.part_count());
        // body first, then bezel and LED, then the two pad bars, A, B, Select, Start
        assert_eq!(colors[0], palette.main);
        assert_eq!(colors[3], palette.dpad);
        assert_eq!(colors[4], palette.dpad);
        assert_eq!(colors[5], palette.buttons_ab);
        assert_eq!(colors[6], palette.buttons_ab);
        assert_eq!(colors[7], palette.buttons_sel_start);
        assert_eq!(colors[8], palette.buttons_sel_start);
        assert_ne!(colors[0], Palette::default().main);
    }

    #[test]
    fn hex_colours_parse_to_linear_rgba() {
        assert_eq!(parse_hex_color("#ff0000"), Ok([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(parse_hex_color("00FF00"), Ok([0.0, 1.0, 0.0, 1.0]));
        let grey = parse_hex_color("#808080").expect("valid colour");
        assert!((grey[0] - (128.0_f32 / 255.0).powf(2.2)).abs() < 1e-6);
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("zzzzzz").is_err());
        assert!(parse_hex_color("#ff00ff00").is_err());
    }

    #[test]
    fn scene_exposes_every_control() {
        let mut scene = Scene::console(&Palette::default());
        for id in ElementId::ALL {
            assert!(scene.node_mut(id).is_some(), "{id} missing");
        }
    }
}
