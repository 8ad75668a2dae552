#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Corners of the axis-aligned square with top-left corner `(x, y)`, clockwise from the top-left.
///
/// Negative sizes are clamped to zero, giving a degenerate square.
pub fn square_to_polygon(x: f32, y: f32, size: f32) -> [Point; 4] {
    let size = size.max(0.0);
    [
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ]
}

pub fn circle_params(x: f32, y: f32, radius: f32) -> (Point, f32) {
    (Point::new(x, y), radius.max(0.0))
}
