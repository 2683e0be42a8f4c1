use super::*;
use crate::op::constant::Constant;
use crate::params::knobs::ConstantParams;

const RGBA: [Channel; 4] = [Channel::RED, Channel::GREEN, Channel::BLUE, Channel::ALPHA];

fn op(color: [f32; 4]) -> Constant {
    Constant::new(ConstantParams::new().with_color(color))
}

#[test]
fn every_pixel_is_the_color() {
    let img = render_rgba32f(
        &op([0.1, 0.2, 0.3, 1.0]),
        IBox::new(-3, 2, 5, 6),
        RGBA,
        &PlaneThreading::default(),
    )
    .unwrap();
    assert_eq!(img.dimensions(), (8, 4));
    assert!(img.pixels().all(|p| p.0 == [0.1, 0.2, 0.3, 1.0]));
}

#[test]
fn erased_channels_render_as_zero() {
    let img = render_rgba32f(
        &op([0.0, 0.5, 0.0, 0.0]),
        IBox::new(0, 0, 3, 3),
        RGBA,
        &PlaneThreading::default(),
    )
    .unwrap();
    assert!(img.pixels().all(|p| p.0 == [0.0, 0.5, 0.0, 0.0]));
}

#[test]
fn layout_selects_output_slots() {
    let params = ConstantParams::new()
        .with_channels([Channel::DEPTH, Channel::NONE, Channel::NONE, Channel::MASK])
        .with_color([4.0, 0.0, 0.0, 0.25]);
    let img = render_rgba32f(
        &Constant::new(params),
        IBox::new(0, 0, 2, 1),
        [Channel::MASK, Channel::RED, Channel::DEPTH, Channel::NONE],
        &PlaneThreading::default(),
    )
    .unwrap();
    assert!(img.pixels().all(|p| p.0 == [0.25, 0.0, 4.0, 0.0]));
}

#[test]
fn parallel_matches_sequential() {
    let c = op([0.9, 0.0, 0.4, 0.6]);
    let bbox = IBox::new(0, 0, 37, 23);
    let seq = render_rgba32f(&c, bbox, RGBA, &PlaneThreading::default()).unwrap();
    for threads in [None, Some(1), Some(3)] {
        let par = render_rgba32f(
            &c,
            bbox,
            RGBA,
            &PlaneThreading {
                parallel: true,
                threads,
            },
        )
        .unwrap();
        assert_eq!(par, seq);
    }
}

#[test]
fn empty_box_and_zero_threads_are_rejected() {
    let c = op([1.0; 4]);
    assert!(render_rgba32f(&c, IBox::new(0, 0, 0, 4), RGBA, &PlaneThreading::default()).is_err());
    let err = render_rgba32f(
        &c,
        IBox::new(0, 0, 2, 2),
        RGBA,
        &PlaneThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, FlatcolorError::Validation(_)));
}
