use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2">
  <rect width="4" height="2" fill="#ff0000"/>
</svg>"##;

#[test]
fn rasterizes_at_requested_scale() {
    let frame = rasterize_svg(SQUARE, 2.0).unwrap();
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert_eq!(&frame.data[..4], &[255, 0, 0, 255]);
}

#[test]
fn rejects_bad_scale_and_svg() {
    assert!(rasterize_svg(SQUARE, 0.0).is_err());
    assert!(rasterize_svg(SQUARE, f32::NAN).is_err());
    assert!(rasterize_svg("not svg", 1.0).is_err());
}

#[test]
fn straight_alpha_unpremultiplies() {
    let frame = RasterFrame {
        width: 1,
        height: 1,
        data: vec![64, 0, 128, 128],
    };
    assert_eq!(frame.to_straight_rgba8(), vec![128, 0, 255, 128]);
}
