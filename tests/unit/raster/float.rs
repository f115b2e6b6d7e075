use super::*;

#[test]
fn from_fn_is_row_major() {
    let r = FloatRaster::from_fn(3, 2, |x, y| [f64::from(x), f64::from(y), 0.0, 1.0]);
    assert_eq!(r.width(), 3);
    assert_eq!(r.height(), 2);
    assert_eq!(r.pixels()[4], [1.0, 1.0, 0.0, 1.0]);
    assert_eq!(r.get(2, 1), Some([2.0, 1.0, 0.0, 1.0]));
}

#[test]
fn get_and_set_bounds_check() {
    let mut r = FloatRaster::new(2, 2);
    assert_eq!(r.get(0, 0), Some(TRANSPARENT));
    assert!(r.set(1, 1, [5.0; 4]));
    assert_eq!(r.read(1, 1), Some([5.0; 4]));
    assert!(!r.set(2, 0, [5.0; 4]));
    assert!(!r.write(0, -1, [5.0; 4]));
    assert_eq!(r.get(-1, 0), None);
    assert_eq!(r.get(0, 2), None);
}

#[test]
fn from_pixels_validates_length() {
    FloatRaster::from_pixels(2, 2, vec![[0.0; 4]; 4]).unwrap();
    let err = FloatRaster::from_pixels(2, 2, vec![[0.0; 4]; 3]).unwrap_err();
    assert!(matches!(err, BlitError::Validation(_)));
}

#[test]
fn rgba8_conversion_clamps_and_truncates() {
    let r = FloatRaster::from_pixels(2, 1, vec![[12.7, -1.0, 256.0, 255.0], [0.0, 1.0, 2.0, 3.0]])
        .unwrap();
    let img = r.to_rgba8();
    assert_eq!(img.get_pixel(0, 0).0, [12, 0, 255, 255]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 1, 2, 3]);

    let back = FloatRaster::from_rgba8(&img);
    assert_eq!(back.get(0, 0), Some([12.0, 0.0, 255.0, 255.0]));
    assert_eq!(back.get(1, 0), Some([0.0, 1.0, 2.0, 3.0]));
}
