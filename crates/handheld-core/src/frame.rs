use crate::constants::CONVERGENCE_RATE;
use crate::controls::{Controls, PointerEvent};
use crate::element::NodeHost;
use crate::screen::{ShaderConfig, Tuning};
use crate::source::{ScreenSource, SourceImage};

/// Everything the per-frame callback mutates: control animation records,
/// the screen's uniform state and its source image.
#[derive(Clone, Debug)]
pub struct Console {
    pub controls: Controls,
    pub shader: ShaderConfig,
    pub screen: ScreenSource,
    pub rate: f32,
}

impl Default for Console {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Console {
    pub fn new(tuning: Tuning) -> Self {
        let mut shader = ShaderConfig::default();
        shader.apply(&tuning);
        Self {
            controls: Controls::new(),
            shader,
            screen: ScreenSource::new(None),
            rate: CONVERGENCE_RATE,
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.controls.handle(event);
    }

    pub fn set_image(&mut self, image: SourceImage) {
        self.screen.replace(image);
    }

    /// Run one frame. Must be called before the host flushes transforms and
    /// before the screen is drawn, so both see this frame's values.
    ///
    /// Elements whose render object is not available yet are skipped.
    pub fn advance_frame<H: NodeHost>(&mut self, elapsed: f32, nodes: &mut H, tuning: &Tuning) {
        let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        for element in self.controls.iter_mut() {
            let Some(node) = nodes.node_mut(element.id) else {
                continue;
            };
            if !element.is_bound() {
                log::debug!(
                    "[frame] bound {} at rest z={:.3}",
                    element.id,
                    node.position.z
                );
            }
            element.update(node, elapsed, self.rate);
        }
        self.shader.apply(tuning);
        self.shader.advance_time(elapsed);
    }
}
