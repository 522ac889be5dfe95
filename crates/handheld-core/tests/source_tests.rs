// Host-side tests for the source image and its swap slot.

use glam::{Vec2, Vec4};
use handheld_core::{HandheldError, ScreenSource, SourceImage};

#[test]
fn rejects_mismatched_buffers() {
    let err = SourceImage::from_rgba8(2, 2, vec![0; 15]).unwrap_err();
    assert_eq!(
        err,
        HandheldError::BufferSize {
            width: 2,
            height: 2,
            expected: 16,
            actual: 15
        }
    );
    assert!(matches!(
        SourceImage::from_rgba8(0, 4, Vec::new()),
        Err(HandheldError::EmptyImage { .. })
    ));
}

#[test]
fn sample_picks_nearest_texel_and_clamps() {
    // 2x1: red then blue
    let img = SourceImage::from_rgba8(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255]).expect("valid");
    assert_eq!(img.sample(Vec2::new(0.1, 0.5)), Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(img.sample(Vec2::new(0.9, 0.5)), Vec4::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(img.sample(Vec2::new(1.0, 1.0)), Vec4::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(img.sample(Vec2::new(-3.0, 9.0)), Vec4::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn replace_swaps_whole_image_and_bumps_generation() {
    let mut slot = ScreenSource::new(None);
    assert_eq!(slot.generation(), 0);
    assert!(slot.current().is_none());
    slot.replace(SourceImage::solid(1, 1, [1, 2, 3, 4]).expect("valid"));
    let g1 = slot.generation();
    let first = slot.current().cloned().expect("installed");

    slot.replace(SourceImage::solid(3, 2, [9, 9, 9, 255]).expect("valid"));
    assert!(slot.generation() > g1);
    let second = slot.current().expect("installed");
    assert_eq!((second.width(), second.height()), (3, 2));
    // a reader holding the old image still sees it complete
    assert_eq!(first.pixels(), &[1, 2, 3, 4]);

    slot.clear();
    assert!(!slot.is_ready());
}

#[test]
fn starting_with_an_image_counts_as_one_swap() {
    let slot = ScreenSource::new(Some(SourceImage::solid(2, 2, [0, 0, 0, 255]).expect("valid")));
    assert!(slot.is_ready());
    assert_eq!(slot.generation(), 1);
}
