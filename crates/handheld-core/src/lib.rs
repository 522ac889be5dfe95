pub mod animator;
pub mod constants;
pub mod controls;
pub mod element;
pub mod error;
pub mod frame;
pub mod lcd;
pub mod screen;
pub mod source;
pub mod tilt;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static SCREEN_WGSL: &str = include_str!("../shaders/screen.wgsl");

pub use animator::{advance, Animated};
pub use constants::*;
pub use controls::{Controls, PointerContact, PointerEvent};
pub use element::{AnimatedElement, ElementId, ElementTargets, NodeHost, NodeTransform, Tilt};
pub use error::HandheldError;
pub use frame::Console;
pub use screen::{ScreenUniforms, ShaderConfig, Tuning};
pub use source::{ScreenSource, SourceImage};
pub use tilt::{depth_delta, pad_tilt, TiltTargets};
