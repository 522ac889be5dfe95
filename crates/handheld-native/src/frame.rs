//! Per-frame glue between the window loop and the console model.

use crate::camera::Camera;
use crate::images::LoadedImage;
use crate::input::{HoverTracker, MouseState, PointerEvents};
use crate::render::GpuState;
use crate::scene::{Palette, Scene};
use handheld_core::{Console, Tuning};
use std::sync::mpsc::Receiver;
use std::time::Instant;

/// State owned by the window loop between frames.
pub struct FrameContext {
    pub console: Console,
    pub scene: Scene,
    pub tuning: Tuning,
    pub camera: Camera,
    pub hover: HoverTracker,
    pub mouse: MouseState,
    pub images: Receiver<LoadedImage>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(tuning: Tuning, palette: &Palette, images: Receiver<LoadedImage>) -> Self {
        Self {
            console: Console::new(tuning),
            scene: Scene::console(palette),
            tuning,
            camera: Camera::default(),
            hover: HoverTracker::default(),
            mouse: MouseState::default(),
            images,
            last_instant: Instant::now(),
        }
    }

    /// Install whatever the loader thread has finished since last frame.
    fn poll_images(&mut self) {
        while let Ok(LoadedImage { path, result }) = self.images.try_recv() {
            match result {
                Ok(image) => {
                    log::info!(
                        "[image] {} ready ({}x{})",
                        path.display(),
                        image.width(),
                        image.height()
                    );
                    self.console.set_image(image);
                }
                Err(e) => log::warn!("[image] {}: {e:#}", path.display()),
            }
        }
    }

    pub fn frame(&mut self, gpu: &mut GpuState<'_>) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.poll_images();
        self.console
            .advance_frame(dt_sec, &mut self.scene, &self.tuning);
        gpu.render(
            &self.camera,
            &self.scene,
            &self.console.shader,
            &self.console.screen,
        )
    }

    fn dispatch(&mut self, events: PointerEvents) {
        for ev in events {
            self.console.handle_pointer(ev);
        }
    }

    pub fn pointer_moved(&mut self, width: u32, height: u32, x: f32, y: f32) {
        self.mouse.x = x;
        self.mouse.y = y;
        self.mouse.inside = true;
        let (ro, rd) = self.camera.screen_to_world_ray(width, height, x, y);
        let contact = self.scene.pick(ro, rd).and_then(|p| p.contact());
        let events = self.hover.update(contact);
        self.dispatch(events);
    }

    /// The projection changed under a still cursor; pick again.
    pub fn resized(&mut self, width: u32, height: u32) {
        if self.mouse.inside {
            self.pointer_moved(width, height, self.mouse.x, self.mouse.y);
        }
    }

    pub fn pointer_left(&mut self) {
        self.mouse.inside = false;
        let events = self.hover.clear();
        self.dispatch(events);
    }
}
