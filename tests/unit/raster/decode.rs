use std::io::Cursor;

use super::*;

fn encode_png(img: image::DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_gray_png_keeps_values() {
    let img = image::GrayImage::from_raw(3, 1, vec![0, 100, 255]).unwrap();
    let grid = decode_grayscale(&encode_png(image::DynamicImage::ImageLuma8(img))).unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 1));
    assert_eq!(grid.as_raw(), &[0, 100, 255]);
}

#[test]
fn decode_rgba_png_reduces_to_luma() {
    let img = image::RgbaImage::from_raw(2, 1, vec![255, 255, 255, 255, 0, 0, 0, 0]).unwrap();
    let grid = decode_grayscale(&encode_png(image::DynamicImage::ImageRgba8(img))).unwrap();
    assert_eq!(grid.as_raw(), &[255, 0]);
}

#[test]
fn decode_rgb_png_uses_601_weights() {
    let img = image::RgbImage::from_raw(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
    let grid = decode_grayscale(&encode_png(image::DynamicImage::ImageRgb8(img))).unwrap();
    assert_eq!((grid.width(), grid.height()), (3, 1));
    assert_eq!(grid.as_raw(), &[76, 150, 29]);
}

#[test]
fn decode_rgba_png_ignores_alpha_for_color() {
    let img = image::RgbaImage::from_raw(1, 1, vec![0, 255, 0, 10]).unwrap();
    let grid = decode_grayscale(&encode_png(image::DynamicImage::ImageRgba8(img))).unwrap();
    assert_eq!(grid.as_raw(), &[150]);
}

#[test]
fn luma_601_rounds_to_nearest() {
    assert_eq!(luma_601([0, 0, 0]), 0);
    assert_eq!(luma_601([255, 255, 255]), 255);
    assert_eq!(luma_601([128, 128, 128]), 128);
    assert_eq!(luma_601([10, 200, 30]), 124);
}

#[test]
fn decode_garbage_is_decode_error() {
    let err = decode_grayscale(b"definitely not an image").unwrap_err();
    assert!(matches!(err, PolarwaveError::Decode(_)));
}

#[test]
fn missing_file_is_input_not_found() {
    let err = decode_grayscale_file(Path::new("target/does/not/exist.png")).unwrap_err();
    assert!(matches!(err, PolarwaveError::InputNotFound(_)));
}

#[test]
fn directory_is_input_not_found() {
    let err = decode_grayscale_file(Path::new(".")).unwrap_err();
    assert!(matches!(err, PolarwaveError::InputNotFound(_)));
}
