//! Edge case testing for buffers and pipelines

use chroma::{
    isolate, process, Adjustments, Channel, ChromaError, ColorModel, PixelBuffer, Rgb,
};

#[test]
fn test_single_pixel_image() {
    let image = PixelBuffer::filled(1, 1, [12, 34, 56, 78]).unwrap();
    let out = process(&image, ColorModel::Hsv, &Adjustments::default()).unwrap();
    assert_eq!(out.pixel(0, 0), Some([12, 34, 56, 78]));

    let channels = isolate(&image).unwrap();
    assert_eq!(channels.iter().count(), 6);
}

#[test]
fn test_single_row_and_column() {
    for (w, h) in [(257, 1), (1, 257)] {
        let image = PixelBuffer::filled(w, h, [90, 10, 200, 255]).unwrap();
        let out = process(&image, ColorModel::Ycbcr, &Adjustments::default()).unwrap();
        assert_eq!(out.width(), w);
        assert_eq!(out.height(), h);
    }
}

#[test]
fn test_malformed_buffer_rejected() {
    let result = PixelBuffer::from_raw(10, 10, vec![0; 10 * 10 * 3]);
    match result {
        Err(ChromaError::BufferSizeMismatch { expected, actual }) => {
            assert_eq!(expected, 400);
            assert_eq!(actual, 300);
        }
        other => panic!("expected BufferSizeMismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_dimension_rejected() {
    assert!(matches!(
        PixelBuffer::new(0, 0),
        Err(ChromaError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_extreme_colors_survive_identity() {
    let data = vec![
        0, 0, 0, 255, //
        255, 255, 255, 255, //
        255, 0, 0, 0, //
        0, 255, 0, 1, //
        0, 0, 255, 254, //
        255, 255, 0, 128,
    ];
    let image = PixelBuffer::from_raw(3, 2, data).unwrap();

    for model in [ColorModel::Ycbcr, ColorModel::Hsv] {
        let out = process(&image, model, &Adjustments::default()).unwrap();
        for ((a, alpha_a), (b, alpha_b)) in image.pixels().zip(out.pixels()) {
            assert!(a.max_channel_diff(b) <= 1, "{}: {:?} vs {:?}", model, a, b);
            assert_eq!(alpha_a, alpha_b);
        }
    }
}

#[test]
fn test_all_zero_factors_ycbcr_is_flat_gray() {
    let image = PixelBuffer::filled(3, 3, [250, 5, 120, 9]).unwrap();
    let adjustments = Channel::ALL
        .iter()
        .fold(Adjustments::new(), |adj, &c| adj.with_factor(c, 0.0));

    let out = process(&image, ColorModel::Ycbcr, &adjustments).unwrap();
    for (rgb, alpha) in out.pixels() {
        assert_eq!(rgb, Rgb::new(128, 128, 128));
        assert_eq!(alpha, 9);
    }

    // HSV neutral: hue 0, no saturation, full value
    let out = process(&image, ColorModel::Hsv, &adjustments).unwrap();
    for (rgb, _) in out.pixels() {
        assert_eq!(rgb, Rgb::new(255, 255, 255));
    }
}

#[test]
fn test_transparent_pixels_still_converted() {
    let image = PixelBuffer::filled(2, 1, [200, 50, 80, 0]).unwrap();
    let out = process(
        &image,
        ColorModel::Ycbcr,
        &Adjustments::new().with_factor(Channel::Y, 50.0),
    )
    .unwrap();
    assert_eq!(out.pixel(1, 0), Some([151, 1, 31, 0]));
}
