use super::*;

#[test]
fn canvas_height_scales_with_line_spacing() {
    let c = Canvas::for_grid(300, 200, 2.5);
    assert_eq!(c.width, 300);
    assert_eq!(c.height, 500.0);
}

#[test]
fn canvas_with_zero_rows_is_flat() {
    let c = Canvas::for_grid(10, 0, 2.0);
    assert_eq!(c.height, 0.0);
}
