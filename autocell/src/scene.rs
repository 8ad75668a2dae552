use crate::color::Color;
use crate::geometry::Point;
use crate::random::Random;
use crate::shape::Shape;
use crate::surface::DrawingSurface;
use log::info;

const RANDOM_POLYGON_POINTS: usize = 20;
const SQUARE_SIZE: f32 = 40.0;

/// An ordered list of shapes. Later shapes paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// The autocell page: a red polygon through 20 random points inside
    /// `width` x `height`, four 40x40 squares, then a black circle at (100, 100).
    pub fn autocell(width: u32, height: u32, rand: &mut Random) -> Self {
        let mut shapes = vec![Shape::Polygon {
            points: rand.generate_points(RANDOM_POLYGON_POINTS, width, height),
            color: Color::from_rgb([0xff, 0, 0]),
        }];

        let squares = [
            (20.0, 20.0, [0xff, 0x00, 0xff]),
            (60.0, 20.0, [0xff, 0xaa, 0x00]),
            (20.0, 60.0, [0x00, 0x00, 0xff]),
            (60.0, 60.0, [0x00, 0xaa, 0xaa]),
        ];
        shapes.extend(squares.into_iter().map(|(x, y, rgb)| Shape::Square {
            x,
            y,
            size: SQUARE_SIZE,
            color: Color::from_rgb(rgb),
        }));

        shapes.push(Shape::Circle {
            x: 100.0,
            y: 100.0,
            radius: 40.0,
            color: Color::BLACK,
        });
        Self::new(shapes)
    }

    /// A fixed red quadrilateral, handy for checking a surface by eye.
    pub fn sample_polygon() -> Self {
        Self::new(vec![Shape::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 50.0),
                Point::new(50.0, 100.0),
                Point::new(0.0, 90.0),
            ],
            color: Color::RED,
        }])
    }

    pub fn render(&self, surface: &mut impl DrawingSurface) {
        info!(
            "rendering {} shapes onto {}x{} surface",
            self.shapes.len(),
            surface.width(),
            surface.height()
        );
        for shape in &self.shapes {
            shape.draw(surface);
        }
    }
}

/// Renders the autocell scene once, sized to `surface`.
pub fn render_autocell(surface: &mut impl DrawingSurface, rand: &mut Random) -> Scene {
    let scene = Scene::autocell(surface.width(), surface.height(), rand);
    scene.render(surface);
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelSurface;

    fn color(text: &str) -> Color {
        Color::parse(text).unwrap()
    }

    #[test]
    fn autocell_scene_order_and_colors() {
        let scene = Scene::autocell(400, 300, &mut Random::from_seed(5));
        assert_eq!(scene.shapes.len(), 6);

        let Shape::Polygon { points, color: fill } = &scene.shapes[0] else {
            panic!("first shape should be the random polygon: {:?}", scene.shapes[0]);
        };
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.x < 400.0 && p.y < 300.0));
        assert_eq!(*fill, color("#f00"));

        let expected_squares = [
            (20.0, 20.0, "#f0f"),
            (60.0, 20.0, "#fa0"),
            (20.0, 60.0, "#00f"),
            (60.0, 60.0, "#0aa"),
        ];
        for (shape, (x, y, text)) in scene.shapes[1..5].iter().zip(expected_squares) {
            assert_eq!(
                *shape,
                Shape::Square {
                    x,
                    y,
                    size: 40.0,
                    color: color(text)
                }
            );
        }

        assert_eq!(
            scene.shapes[5],
            Shape::Circle {
                x: 100.0,
                y: 100.0,
                radius: 40.0,
                color: color("#000")
            }
        );
    }

    #[test]
    fn seeded_scenes_repeat() {
        let first = Scene::autocell(400, 300, &mut Random::from_seed(11));
        let second = Scene::autocell(400, 300, &mut Random::from_seed(11));
        assert_eq!(first, second);
    }

    #[test]
    fn circle_is_drawn_last() {
        let mut surface = PixelSurface::new(400, 300).unwrap();
        render_autocell(&mut surface, &mut Random::from_seed(1));
        assert_eq!(surface.pixel(100, 100), Some(Color::BLACK));
    }

    #[test]
    fn squares_visible_outside_circle() {
        let mut surface = PixelSurface::new(400, 300).unwrap();
        Scene::autocell(400, 300, &mut Random::from_seed(2)).render(&mut surface);
        assert_eq!(surface.pixel(21, 21), Some(color("#f0f")));
        assert_eq!(surface.pixel(61, 21), Some(color("#fa0")));
        assert_eq!(surface.pixel(21, 61), Some(color("#00f")));
        assert_eq!(surface.pixel(61, 61), Some(color("#0aa")));
        assert_eq!(surface.pixel(59, 30), Some(color("#f0f")));
        assert_eq!(surface.pixel(60, 30), Some(color("#fa0")));
    }

    #[test]
    fn squares_paint_over_random_polygon() {
        let mut surface = PixelSurface::new(400, 300).unwrap();
        let mut scene = Scene::autocell(400, 300, &mut Random::from_seed(3));
        scene.shapes.truncate(5);
        scene.render(&mut surface);
        for y in 20..100 {
            for x in 20..100 {
                assert_ne!(surface.pixel(x, y), Some(color("#f00")), "({x}, {y})");
            }
        }
    }

    #[test]
    fn empty_scene_leaves_surface_untouched() {
        let mut surface = PixelSurface::new(10, 10).unwrap();
        Scene::default().render(&mut surface);
        assert_eq!(surface, PixelSurface::new(10, 10).unwrap());
    }

    #[test]
    fn sample_polygon_fills_near_origin() {
        let mut surface = PixelSurface::new(120, 120).unwrap();
        Scene::sample_polygon().render(&mut surface);
        assert_eq!(surface.pixel(10, 50), Some(Color::RED));
        assert_eq!(surface.pixel(110, 110), Some(Color::TRANSPARENT));
    }
}
