use crate::color::Color;
use crate::geometry::{Point, circle_params, square_to_polygon};
use crate::surface::DrawingSurface;
use log::{debug, warn};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Polygon { points: Vec<Point>, color: Color },
    Square { x: f32, y: f32, size: f32, color: Color },
    Circle { x: f32, y: f32, radius: f32, color: Color },
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Polygon { color, .. }
            | Shape::Square { color, .. }
            | Shape::Circle { color, .. } => *color,
        }
    }

    pub fn draw(&self, surface: &mut impl DrawingSurface) {
        debug!("drawing {self:?}");
        match self {
            Shape::Polygon { points, color } => draw_polygon(surface, points, *color),
            Shape::Square { x, y, size, color } => draw_square(surface, *x, *y, *size, *color),
            Shape::Circle { x, y, radius, color } => draw_circle(surface, *x, *y, *radius, *color),
        }
    }
}

/// Fills the polygon joining `points` in order and back to the first.
///
/// Fewer than three points draw nothing, as does any non-finite coordinate.
pub fn draw_polygon(surface: &mut impl DrawingSurface, points: &[Point], color: Color) {
    if !points.iter().all(Point::is_finite) {
        warn!("skipping polygon with non-finite points: {points:?}");
        return;
    }
    surface.fill_polygon(points, color);
}

pub fn draw_square(surface: &mut impl DrawingSurface, x: f32, y: f32, size: f32, color: Color) {
    draw_polygon(surface, &square_to_polygon(x, y, size), color);
}

pub fn draw_circle(surface: &mut impl DrawingSurface, x: f32, y: f32, radius: f32, color: Color) {
    let (center, radius) = circle_params(x, y, radius);
    if !center.is_finite() || !radius.is_finite() {
        warn!("skipping circle at {center:?} with radius {radius}");
        return;
    }
    surface.fill_circle(center, radius, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelSurface;

    fn magenta() -> Color {
        Color::parse("#f0f").unwrap()
    }

    #[derive(Default)]
    struct RecordingSurface {
        polygons: Vec<Vec<Point>>,
        circles: Vec<(Point, f32)>,
    }

    impl DrawingSurface for RecordingSurface {
        fn width(&self) -> u32 {
            200
        }

        fn height(&self) -> u32 {
            200
        }

        fn fill_polygon(&mut self, points: &[Point], _color: Color) {
            self.polygons.push(points.to_vec());
        }

        fn fill_circle(&mut self, center: Point, radius: f32, _color: Color) {
            self.circles.push((center, radius));
        }
    }

    #[test]
    fn square_is_drawn_as_its_polygon() {
        let mut surface = RecordingSurface::default();
        draw_square(&mut surface, 20.0, 20.0, 40.0, magenta());
        assert_eq!(surface.polygons, [square_to_polygon(20.0, 20.0, 40.0).to_vec()]);
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn circle_uses_native_circle_fill() {
        let mut surface = RecordingSurface::default();
        draw_circle(&mut surface, 100.0, 100.0, 40.0, Color::BLACK);
        assert_eq!(surface.circles, [(Point::new(100.0, 100.0), 40.0)]);
        assert!(surface.polygons.is_empty());
    }

    #[test]
    fn negative_radius_is_clamped() {
        let mut surface = RecordingSurface::default();
        draw_circle(&mut surface, 1.0, 1.0, -5.0, Color::BLACK);
        assert_eq!(surface.circles, [(Point::new(1.0, 1.0), 0.0)]);
    }

    #[test]
    fn non_finite_shapes_are_skipped() {
        let mut surface = RecordingSurface::default();
        draw_polygon(&mut surface, &[Point::new(f32::NAN, 0.0)], Color::RED);
        draw_circle(&mut surface, f32::INFINITY, 0.0, 3.0, Color::RED);
        assert!(surface.polygons.is_empty());
        assert!(surface.circles.is_empty());
    }

    #[test]
    fn square_fill_inside_not_outside() {
        let mut surface = PixelSurface::new(200, 200).unwrap();
        draw_square(&mut surface, 20.0, 20.0, 40.0, magenta());
        assert_eq!(surface.pixel(21, 21), Some(magenta()));
        assert_ne!(surface.pixel(61, 61), Some(magenta()));
    }

    #[test]
    fn shape_draw_dispatches() {
        let mut surface = RecordingSurface::default();
        let shapes = [
            Shape::Polygon {
                points: vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
                color: Color::RED,
            },
            Shape::Square {
                x: 1.0,
                y: 2.0,
                size: 3.0,
                color: Color::RED,
            },
            Shape::Circle {
                x: 4.0,
                y: 5.0,
                radius: 6.0,
                color: Color::BLACK,
            },
        ];
        for shape in &shapes {
            shape.draw(&mut surface);
        }
        assert_eq!(surface.polygons.len(), 2);
        assert_eq!(surface.circles, [(Point::new(4.0, 5.0), 6.0)]);
        assert_eq!(shapes[2].color(), Color::BLACK);
    }
}
