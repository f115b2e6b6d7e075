use super::*;

#[test]
fn from_coords_orders_destination_first() {
    let req = BlitRequest::from_coords(1, 2, 3, 4, 5, 6, 7, 8, FilterMode::Bilinear);
    assert_eq!(req.dst, Region::new(1, 2, 3, 4));
    assert_eq!(req.src, Region::new(5, 6, 7, 8));
    assert_eq!(req.mode, FilterMode::Bilinear);
}

#[test]
fn zero_extents_are_empty() {
    let full = Region::from_size(4, 4);
    assert!(BlitRequest::new(Region::from_size(0, 0), full, FilterMode::Nearest).is_empty());
    assert!(BlitRequest::new(Region::from_size(5, 0), full, FilterMode::Nearest).is_empty());
    assert!(BlitRequest::new(full, Region::from_size(0, 4), FilterMode::Nearest).is_empty());
    assert!(!BlitRequest::copy(0, 0, full, FilterMode::Nearest).is_empty());
}

#[test]
fn validate_rejects_negative_extents_only() {
    let ok = BlitRequest::from_coords(-5, -5, 0, 3, -1, -1, 2, 0, FilterMode::Nearest);
    ok.validate().unwrap();

    let bad_dst = BlitRequest::from_coords(0, 0, -1, 3, 0, 0, 2, 2, FilterMode::Nearest);
    assert!(matches!(bad_dst.validate(), Err(BlitError::Validation(_))));

    let bad_src = BlitRequest::from_coords(0, 0, 1, 3, 0, 0, 2, -2, FilterMode::Nearest);
    let err = bad_src.validate().unwrap_err();
    assert!(err.to_string().contains("source"));
}

#[test]
fn source_position_scales_and_swaps_origin_axes() {
    let req = BlitRequest::from_coords(0, 0, 4, 2, 10, 20, 2, 8, FilterMode::Nearest);
    // x = (x1 / dw) * sw + sy, y = (y1 / dh) * sh + sx
    assert_eq!(req.source_position(0, 0), (20.0, 10.0));
    assert_eq!(req.source_position(2, 1), (21.0, 14.0));
    assert_eq!(req.source_position(1, 0), (20.5, 10.0));
}

#[test]
fn json_round_trip_and_default_mode() {
    let req = BlitRequest::from_coords(1, 2, 3, 4, 5, 6, 7, 8, FilterMode::Bilinear);
    let back = BlitRequest::from_json(&req.to_json().unwrap()).unwrap();
    assert_eq!(back, req);

    let no_mode = r#"{
        "dst": { "x": 0, "y": 0, "width": 2, "height": 2 },
        "src": { "x": 0, "y": 0, "width": 4, "height": 4 }
    }"#;
    assert_eq!(
        BlitRequest::from_json(no_mode).unwrap().mode,
        FilterMode::Nearest
    );
}

#[test]
fn json_errors_are_classified() {
    assert!(matches!(
        BlitRequest::from_json("{ not json"),
        Err(BlitError::Serde(_))
    ));

    let negative = r#"{
        "dst": { "x": 0, "y": 0, "width": -2, "height": 2 },
        "src": { "x": 0, "y": 0, "width": 4, "height": 4 }
    }"#;
    assert!(matches!(
        BlitRequest::from_json(negative),
        Err(BlitError::Validation(_))
    ));
}
