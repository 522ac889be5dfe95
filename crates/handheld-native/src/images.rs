use anyhow::Context;
use handheld_core::SourceImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

// Larger images are downscaled before upload; the LCD grid tops out at 600 cells anyway.
pub const MAX_IMAGE_DIMENSION: u32 = 2048;

pub struct LoadedImage {
    pub path: PathBuf,
    pub result: anyhow::Result<SourceImage>,
}

pub fn load_image(path: &Path) -> anyhow::Result<SourceImage> {
    let mut img = image::open(path).with_context(|| format!("decode {}", path.display()))?;
    if img.width() > MAX_IMAGE_DIMENSION || img.height() > MAX_IMAGE_DIMENSION {
        log::info!(
            "[image] downscaling {}x{} to fit {}",
            img.width(),
            img.height(),
            MAX_IMAGE_DIMENSION
        );
        img = img.resize(MAX_IMAGE_DIMENSION, MAX_IMAGE_DIMENSION, FilterType::Triangle);
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(SourceImage::from_rgba8(width, height, rgba.into_raw())?)
}

/// Decode `path` off the render thread; the result arrives on `tx`.
pub fn spawn_loader(path: PathBuf, tx: Sender<LoadedImage>) {
    log::info!("[image] loading {}", path.display());
    let spawned = thread::Builder::new()
        .name("image-loader".into())
        .spawn(move || {
            let result = load_image(&path);
            _ = tx.send(LoadedImage { path, result });
        });
    if let Err(e) = spawned {
        log::error!("[image] could not start loader thread: {e}");
    }
}

pub fn write_png(path: &Path, width: u32, height: u32, rgba: Vec<u8>) -> anyhow::Result<()> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| anyhow::anyhow!("snapshot buffer does not match {width}x{height}"))?;
    img.save(path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
