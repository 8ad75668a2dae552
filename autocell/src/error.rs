use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color string that is not `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    InvalidColor(String),
    /// A drawing surface with no pixels to draw on.
    EmptySurface { width: u32, height: u32 },
    /// An RGBA buffer whose length does not match `4 * width * height`.
    BufferSize { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColor(text) => write!(f, "invalid color {text:?}"),
            Error::EmptySurface { width, height } => {
                write!(f, "drawing surface is empty ({width}x{height})")
            }
            Error::BufferSize { expected, actual } => {
                write!(f, "pixel buffer has {actual} bytes, expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
