//! Flat-fill drawing primitives on top of `image::RgbaImage`.
//!
//! Every primitive uses the same coverage rule: a pixel `(x, y)` is painted when
//! its centre `(x + 0.5, y + 0.5)` lies inside the shape. There is no
//! anti-aliasing, so repeated draws with the same input always touch exactly
//! the same pixels. Shapes are clipped to the canvas.

use image::{Rgba, RgbaImage};

/// A point in canvas coordinates (pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of an ellipse, `[left, top, right, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl BoundingBox {
    /// Box of a circle with the given centre and radius
    pub fn around(center: Point, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }
}

/// Fill row `y` from edge to edge with a single color.
pub fn fill_row(canvas: &mut RgbaImage, y: u32, color: Rgba<u8>) {
    if y >= canvas.height() {
        return;
    }

    for x in 0..canvas.width() {
        canvas.put_pixel(x, y, color);
    }
}

/// Fill the ellipse inscribed in `bbox`.
pub fn fill_ellipse(canvas: &mut RgbaImage, bbox: BoundingBox, color: Rgba<u8>) {
    let rx = (bbox.right - bbox.left) / 2.0;
    let ry = (bbox.bottom - bbox.top) / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return;
    }

    let cx = bbox.left + rx;
    let cy = bbox.top + ry;

    let (x_range, y_range) = match pixel_span(canvas, bbox.left, bbox.top, bbox.right, bbox.bottom)
    {
        Some(span) => span,
        None => return,
    };

    for y in y_range {
        let dy = (y as f32 + 0.5 - cy) / ry;
        for x in x_range.clone() {
            let dx = (x as f32 + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Draw a straight segment of the given width with flat (butt) ends.
///
/// Round caps are drawn separately with [`fill_ellipse`].
pub fn draw_thick_line(
    canvas: &mut RgbaImage,
    start: Point,
    end: Point,
    width: u32,
    color: Rgba<u8>,
) {
    if width == 0 {
        return;
    }

    let half = width as f32 / 2.0;
    let seg_x = end.x - start.x;
    let seg_y = end.y - start.y;
    let length_sq = seg_x * seg_x + seg_y * seg_y;

    // A zero-length segment degenerates to a square of side `width`
    if length_sq == 0.0 {
        let bbox = BoundingBox::around(start, half);
        if let Some((x_range, y_range)) =
            pixel_span(canvas, bbox.left, bbox.top, bbox.right, bbox.bottom)
        {
            for y in y_range {
                for x in x_range.clone() {
                    canvas.put_pixel(x, y, color);
                }
            }
        }
        return;
    }

    let span = pixel_span(
        canvas,
        start.x.min(end.x) - half,
        start.y.min(end.y) - half,
        start.x.max(end.x) + half,
        start.y.max(end.y) + half,
    );
    let (x_range, y_range) = match span {
        Some(span) => span,
        None => return,
    };

    let length = length_sq.sqrt();

    for y in y_range {
        let py = y as f32 + 0.5 - start.y;
        for x in x_range.clone() {
            let px = x as f32 + 0.5 - start.x;

            // Projection along the segment, normalised to [0, 1] between the ends
            let along = (px * seg_x + py * seg_y) / length_sq;
            if !(0.0..=1.0).contains(&along) {
                continue;
            }

            let across = (px * seg_y - py * seg_x).abs() / length;
            if across <= half {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Pixel index ranges covering a float rectangle, clipped to the canvas.
fn pixel_span(
    canvas: &RgbaImage,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
    let clamp = |v: f32, max: u32| -> u32 { v.max(0.0).min(max as f32) as u32 };

    let x0 = clamp(left.floor(), canvas.width());
    let x1 = clamp(right.ceil(), canvas.width());
    let y0 = clamp(top.floor(), canvas.height());
    let y1 = clamp(bottom.ceil(), canvas.height());

    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some((x0..x1, y0..y1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_fill_row_is_uniform() {
        let mut canvas = RgbaImage::from_pixel(8, 8, CLEAR);
        fill_row(&mut canvas, 3, RED);

        for x in 0..8 {
            assert_eq!(*canvas.get_pixel(x, 3), RED);
            assert_eq!(*canvas.get_pixel(x, 2), CLEAR);
            assert_eq!(*canvas.get_pixel(x, 4), CLEAR);
        }
    }

    #[test]
    fn test_fill_row_out_of_bounds_is_ignored() {
        let mut canvas = RgbaImage::from_pixel(4, 4, CLEAR);
        fill_row(&mut canvas, 10, RED);
        assert!(canvas.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_fill_ellipse_covers_center_not_corners() {
        let mut canvas = RgbaImage::from_pixel(20, 20, CLEAR);
        fill_ellipse(
            &mut canvas,
            BoundingBox::around(Point::new(10.0, 10.0), 6.0),
            RED,
        );

        assert_eq!(*canvas.get_pixel(10, 10), RED);
        assert_eq!(*canvas.get_pixel(4, 9), RED);
        assert_eq!(*canvas.get_pixel(4, 4), CLEAR);
        assert_eq!(*canvas.get_pixel(0, 0), CLEAR);
        assert_eq!(*canvas.get_pixel(17, 10), CLEAR);
    }

    #[test]
    fn test_fill_ellipse_clips_to_canvas() {
        let mut canvas = RgbaImage::from_pixel(10, 10, CLEAR);
        fill_ellipse(
            &mut canvas,
            BoundingBox::around(Point::new(0.0, 0.0), 4.0),
            RED,
        );

        assert_eq!(*canvas.get_pixel(0, 0), RED);
        assert_eq!(*canvas.get_pixel(9, 9), CLEAR);
    }

    #[test]
    fn test_fill_ellipse_degenerate_box_draws_nothing() {
        let mut canvas = RgbaImage::from_pixel(10, 10, CLEAR);
        fill_ellipse(
            &mut canvas,
            BoundingBox::around(Point::new(5.0, 5.0), 0.0),
            RED,
        );
        assert!(canvas.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_thick_line_diagonal() {
        let mut canvas = RgbaImage::from_pixel(32, 32, CLEAR);
        draw_thick_line(
            &mut canvas,
            Point::new(4.0, 4.0),
            Point::new(28.0, 28.0),
            4,
            RED,
        );

        // On the segment
        assert_eq!(*canvas.get_pixel(15, 15), RED);
        assert_eq!(*canvas.get_pixel(16, 15), RED);
        // Far from the segment
        assert_eq!(*canvas.get_pixel(28, 4), CLEAR);
        // Beyond the flat ends
        assert_eq!(*canvas.get_pixel(1, 1), CLEAR);
        assert_eq!(*canvas.get_pixel(30, 30), CLEAR);
    }

    #[test]
    fn test_thick_line_zero_width_draws_nothing() {
        let mut canvas = RgbaImage::from_pixel(16, 16, CLEAR);
        draw_thick_line(
            &mut canvas,
            Point::new(0.0, 0.0),
            Point::new(15.0, 15.0),
            0,
            RED,
        );
        assert!(canvas.pixels().all(|p| *p == CLEAR));
    }
}
