use super::*;
use crate::foundation::error::FlatcolorError;
use serde_json::json;

#[test]
fn defaults_match_a_fresh_node() {
    let p = ConstantParams::default();
    assert_eq!(
        p.channels(),
        [Channel::RED, Channel::GREEN, Channel::BLUE, Channel::ALPHA]
    );
    assert_eq!(p.colors(), [0.0; 4]);
    assert_eq!(p.frames, FrameRange::new(1, 1));
    assert!(p.format.is_none());

    assert_eq!(ConstantParams::from_json_str("{}").unwrap(), p);
}

#[test]
fn full_knob_set_decodes() {
    let p = ConstantParams::from_json_value(json!({
        "channels": ["rgba.red", "depth.Z", "chan20", "rgba.alpha"],
        "color": [0.25, 0.5, 1.0, 0.75],
        "format": "HD_720",
        "first": 10,
        "last": 5,
    }))
    .unwrap();
    assert_eq!(p.slots[1].channel, Channel::DEPTH);
    assert_eq!(p.slots[2].channel, Channel::from_index(20).unwrap());
    assert_eq!(p.colors(), [0.25, 0.5, 1.0, 0.75]);
    assert_eq!(p.format.unwrap().format.width, 1280);
    assert_eq!(p.frames, FrameRange::new(10, 5));
}

#[test]
fn layer_names_and_scalar_color() {
    let p = ConstantParams::from_json_value(json!({ "channels": "rgb", "color": 0.5 })).unwrap();
    assert_eq!(p.slots[3].channel, Channel::NONE);
    assert_eq!(p.colors(), [0.5; 4]);

    let err = ConstantParams::from_json_value(json!({ "channels": "beauty" })).unwrap_err();
    assert!(matches!(err, FlatcolorError::Validation(_)));
}

#[test]
fn object_format_decodes() {
    let p = ConstantParams::from_json_value(json!({
        "format": {
            "width": 200,
            "height": 100,
            "area": { "x": 10, "y": 10, "r": 190, "t": 90 },
            "name": "inset",
        }
    }))
    .unwrap();
    let pair = p.format.unwrap();
    assert_eq!(pair.format.area, IBox::new(10, 10, 190, 90));
    assert_eq!(pair.format.pixel_aspect, 1.0);
    assert_eq!(pair.full_size_format, pair.format);
}

#[test]
fn bad_shapes_are_rejected() {
    assert!(ConstantParams::from_json_value(json!({ "color": [1.0, 2.0] })).is_err());
    assert!(
        ConstantParams::from_json_value(json!({ "channels": ["rgba.red", "rgba.green"] }))
            .is_err()
    );
    assert!(ConstantParams::from_json_value(json!({ "format": { "width": 0, "height": 4 } }))
        .is_err());
    assert!(ConstantParams::from_json_value(json!([1, 2])).is_err());
}

#[test]
fn unknown_knobs_are_rejected() {
    let err = ConstantParams::from_json_value(json!({ "colour": 1.0 })).unwrap_err();
    assert!(matches!(err, FlatcolorError::Serde(_)));
}

#[test]
fn legacy_full_format_matches_format() {
    let legacy = ConstantParams::from_json_value(json!({ "full_format": "2K_DCP" })).unwrap();
    let current = ConstantParams::from_json_value(json!({ "format": "2K_DCP" })).unwrap();
    assert_eq!(legacy, current);
    assert!(legacy.format.is_some());
}

#[test]
fn legacy_proxy_format_is_ignored() {
    let p = ConstantParams::from_json_value(json!({ "proxy_format": "PAL" })).unwrap();
    assert!(p.format.is_none());
}

#[test]
fn encoded_knobs_decode_to_same_params() {
    let p = ConstantParams::new()
        .with_channels([Channel::ALPHA, Channel::NONE, Channel::MASK, Channel::RED])
        .with_color([0.1, 0.0, -2.0, 1.0])
        .with_format(Format::new(64, 32).named("tiny"))
        .with_frames(-4, 12);
    let back = ConstantParams::from_json_value(p.to_json_value()).unwrap();
    assert_eq!(back, p);
}
