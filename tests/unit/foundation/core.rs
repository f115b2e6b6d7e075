use super::*;

#[test]
fn u8_conversion_clamps_and_truncates() {
    assert_eq!(rgba_from_u8([0, 17, 128, 255]), [0.0, 17.0, 128.0, 255.0]);
    assert_eq!(rgba_to_u8([-3.0, 17.9, 300.0, 254.999]), [0, 17, 255, 254]);
    assert_eq!(rgba_to_u8([f64::NAN, 0.0, 0.0, 0.0]), [0, 0, 0, 0]);
}

#[test]
fn region_emptiness_and_area() {
    assert!(Region::from_size(0, 4).is_empty());
    assert!(Region::from_size(4, 0).is_empty());
    assert!(Region::from_size(-1, 4).is_empty());
    assert!(!Region::from_size(1, 1).is_empty());
    assert_eq!(Region::new(5, 6, 3, 4).area(), 12);
    assert_eq!(Region::from_size(-3, 4).area(), 0);
}

#[test]
fn region_validate_rejects_negative_extent() {
    Region::from_size(0, 0).validate("dst").unwrap();
    let err = Region::new(1, 1, -2, 3).validate("src").unwrap_err();
    assert!(err.to_string().contains("src extent"));
}

#[test]
fn region_parses_from_text() {
    let r: Region = "1, -2,30,40".parse().unwrap();
    assert_eq!(r, Region::new(1, -2, 30, 40));
    assert!("1,2,3".parse::<Region>().is_err());
    assert!("1,2,3,4,5".parse::<Region>().is_err());
    assert!("a,2,3,4".parse::<Region>().is_err());
}
