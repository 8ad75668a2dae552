#![deny(clippy::all)]
#![forbid(unsafe_code)]

//! Draws a fixed scene of filled polygons, squares and circles onto a pixel surface.
//!
//! The drawing surface is always passed explicitly, randomness comes from an
//! injectable [`Random`], and the scene itself is plain data ([`Scene`]).

mod color;
mod error;
mod geometry;
mod random;
mod scene;
mod shape;
mod surface;

pub use color::{Color, alpha_blend, alpha_blend_with_background};
pub use error::{Error, Result};
pub use geometry::{Point, circle_params, square_to_polygon};
pub use random::Random;
pub use scene::{Scene, render_autocell};
pub use shape::{Shape, draw_circle, draw_polygon, draw_square};
pub use surface::{DrawingSurface, PixelSurface};
