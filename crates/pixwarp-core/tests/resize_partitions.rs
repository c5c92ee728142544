//! Resize behavior through the public `Raster` API, partitioned by ROI use
//! and interpolation mode.

use std::collections::HashSet;

use pixwarp_core::{InterpolationMode, PackedPixel, Raster, RasterError};

fn rgb(r: u8, g: u8, b: u8) -> u32 {
    PackedPixel::from_rgb(r, g, b).0
}

/// 4x4 gradient: red follows x, green follows y, blue is `x + y`.
fn gradient() -> Raster {
    let raw = (0..4u8)
        .flat_map(|y| (0..4u8).map(move |x| rgb(x * 10, y * 10, x + y)))
        .collect();
    let mut raster = Raster::from_raw(4, 4, raw).unwrap();
    raster.set_interpolation_method(InterpolationMode::Nearest);
    raster
}

fn value_set(raster: &Raster) -> HashSet<u32> {
    raster.pixels().to_raw().into_iter().collect()
}

#[test]
fn resize_does_not_mutate_source() {
    for mode in InterpolationMode::ALL {
        let mut raster = gradient();
        raster.set_interpolation_method(mode);
        let before = raster.pixels_copy();
        let _ = raster.resize(6, 6).unwrap();
        assert_eq!(raster.pixels(), &before, "{mode}");
    }
}

// --- No ROI, nearest ---

#[test]
fn same_size_without_roi_is_identity() {
    let raster = gradient();
    let out = raster.resize(4, 4).unwrap();
    assert_eq!((out.width(), out.height()), (4, 4));
    assert_eq!(out.pixels(), raster.pixels());
}

#[test]
fn downscale_picks_existing_pixels() {
    let raster = gradient();
    let out = raster.resize(2, 2).unwrap();
    assert_eq!((out.width(), out.height()), (2, 2));
    let source = value_set(&raster);
    assert!(value_set(&out).is_subset(&source));
}

#[test]
fn upscale_preserves_quadrant_blocks() {
    let red = rgb(255, 0, 0);
    let green = rgb(0, 255, 0);
    let blue = rgb(0, 0, 255);
    let yellow = rgb(255, 255, 0);

    let mut small = Raster::from_raw(2, 2, vec![red, green, blue, yellow]).unwrap();
    small.set_interpolation_method(InterpolationMode::Nearest);

    let out = small.resize(4, 4).unwrap().into_pixels().to_raw();
    assert_eq!(out.len(), 16);
    assert_eq!(
        out,
        vec![
            red, red, green, green, //
            red, red, green, green, //
            blue, blue, yellow, yellow, //
            blue, blue, yellow, yellow,
        ]
    );
}

#[test]
fn single_row_replicates_pixels() {
    let pixels = vec![rgb(10, 20, 30), rgb(40, 50, 60), rgb(70, 80, 90)];
    let mut line = Raster::from_raw(3, 1, pixels.clone()).unwrap();
    line.set_interpolation_method(InterpolationMode::Nearest);

    let out = line.resize(6, 1).unwrap();
    assert_eq!((out.width(), out.height()), (6, 1));
    assert_eq!(
        out.pixels().to_raw(),
        vec![pixels[0], pixels[0], pixels[1], pixels[1], pixels[2], pixels[2]]
    );
}

// --- ROI, nearest ---

#[test]
fn same_size_with_roi_equals_crop() {
    for mode in InterpolationMode::ALL {
        let mut raster = gradient();
        raster.set_interpolation_method(mode);
        raster.set_roi(1, 1, 2, 2);

        let out = raster.resize(2, 2).unwrap();
        assert_eq!(out.pixels(), raster.crop().pixels(), "{mode}");
    }
}

#[test]
fn roi_zoom_in_maps_corners() {
    let mut raster = gradient();
    raster.set_roi(1, 1, 2, 2);
    let roi = raster.crop().pixels_copy();

    let out = raster.resize(4, 4).unwrap();
    assert_eq!((out.width(), out.height()), (4, 4));
    assert_eq!(out.pixel(0, 0).unwrap(), roi.get(0, 0).unwrap());
    assert_eq!(out.pixel(3, 0).unwrap(), roi.get(1, 0).unwrap());
    assert_eq!(out.pixel(0, 3).unwrap(), roi.get(0, 1).unwrap());
    assert_eq!(out.pixel(3, 3).unwrap(), roi.get(1, 1).unwrap());
}

#[test]
fn roi_downscale_to_single_pixel() {
    let mut raster = gradient();
    raster.set_roi(1, 1, 2, 2);
    let out = raster.resize(1, 1).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap(), raster.pixel(1, 1).unwrap());
}

#[test]
fn roi_nearest_never_reads_outside_roi() {
    let mut raster = gradient();
    raster.set_roi(1, 0, 2, 3);
    let allowed = value_set(&raster.crop());
    for (w, h) in [(1, 1), (3, 2), (5, 7), (2, 3)] {
        let out = raster.resize(w, h).unwrap();
        assert!(value_set(&out).is_subset(&allowed), "{w}x{h}");
    }
}

// --- No ROI, smoothing kernels ---

#[test]
fn bilinear_produces_new_values() {
    let mut raster = gradient();
    raster.set_interpolation_method(InterpolationMode::Bilinear);
    let out = raster.resize(6, 6).unwrap();
    assert_eq!((out.width(), out.height()), (6, 6));
    assert!(!value_set(&out).is_subset(&value_set(&raster)));
}

#[test]
fn bilinear_single_column_varies() {
    let mut line = Raster::from_raw(
        1,
        3,
        vec![rgb(10, 20, 30), rgb(40, 50, 60), rgb(70, 80, 90)],
    )
    .unwrap();
    line.set_interpolation_method(InterpolationMode::Bilinear);

    let out = line.resize(1, 6).unwrap().into_pixels().to_raw();
    assert_eq!(out.len(), 6);
    assert!(out.iter().any(|p| *p != out[0]));
}

#[test]
fn bicubic_output_size() {
    let mut raster = gradient();
    raster.set_interpolation_method(InterpolationMode::Bicubic);
    let out = raster.resize(7, 5).unwrap();
    assert_eq!((out.width(), out.height()), (7, 5));
    assert_eq!(out.pixels().len(), 35);
    assert_eq!(out.interpolation_method(), InterpolationMode::Bicubic);
}

// --- ROI, smoothing kernels ---

#[test]
fn roi_zoom_smoothing_differs_from_nearest() {
    let mut raster = gradient();
    raster.set_roi(1, 1, 2, 2);
    let nearest = raster.resize(6, 6).unwrap();

    for mode in [InterpolationMode::Bilinear, InterpolationMode::Bicubic] {
        raster.set_interpolation_method(mode);
        let smooth = raster.resize(6, 6).unwrap();
        assert_eq!((smooth.width(), smooth.height()), (6, 6));
        assert_ne!(smooth.pixels(), nearest.pixels(), "{mode}");
    }
}

#[test]
fn roi_zoom_smoothing_synthesizes_values() {
    let mut raster = gradient();
    raster.set_roi(1, 1, 2, 2);
    let roi_values = value_set(&raster.crop());

    for mode in [InterpolationMode::Bilinear, InterpolationMode::Bicubic] {
        raster.set_interpolation_method(mode);
        let out = raster.resize(6, 6).unwrap();
        assert!(!value_set(&out).is_subset(&roi_values), "{mode}");
    }
}

// --- Errors ---

#[test]
fn zero_target_is_rejected() {
    let raster = gradient();
    for (w, h) in [(0, 4), (4, 0), (0, 0)] {
        assert!(matches!(
            raster.resize(w, h),
            Err(RasterError::InvalidDimensions { .. })
        ));
    }
}

#[test]
fn off_raster_roi_falls_back_to_full() {
    let mut raster = gradient();
    raster.set_roi(10, 10, 3, 3);
    let out = raster.resize(4, 4).unwrap();
    assert_eq!(out.pixels(), raster.pixels());
}
