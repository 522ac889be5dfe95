//! The screen's source image and the slot it is swapped through.

use crate::error::{HandheldError, Result};
use glam::{Vec2, Vec4};
use std::sync::Arc;

/// Immutable RGBA8 pixel buffer, row 0 at the top.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl SourceImage {
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(HandheldError::EmptyImage { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(HandheldError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels: pixels.into(),
        })
    }

    /// Single-colour image, handy for tests and placeholders.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self::from_rgba8(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Nearest-texel lookup; `uv` is clamped to the unit square.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let uv = uv.clamp(Vec2::ZERO, Vec2::ONE);
        let x = ((uv.x * self.width as f32) as u32).min(self.width - 1);
        let y = ((uv.y * self.height as f32) as u32).min(self.height - 1);
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let p = &self.pixels[i..i + 4];
        Vec4::new(p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32) / 255.0
    }
}

/// Holds the image currently shown on the screen.
///
/// Images are swapped whole, so a frame sees either the old or the new one.
/// `generation` changes on every swap so renderers know when to re-upload.
#[derive(Clone, Debug, Default)]
pub struct ScreenSource {
    image: Option<Arc<SourceImage>>,
    generation: u64,
}

impl ScreenSource {
    pub fn new(image: Option<SourceImage>) -> Self {
        let mut s = Self::default();
        if let Some(img) = image {
            s.replace(img);
        }
        s
    }

    pub fn replace(&mut self, image: SourceImage) {
        log::info!("[image] installed {}x{}", image.width(), image.height());
        self.image = Some(Arc::new(image));
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        if self.image.take().is_some() {
            self.generation += 1;
        }
    }

    pub fn current(&self) -> Option<&Arc<SourceImage>> {
        self.image.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.image.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
