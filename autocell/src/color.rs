use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    rgba: [u8; 4],
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_rgba([0, 0, 0, 0]);
    pub const BLACK: Color = Color::from_rgba([0, 0, 0, 0xff]);
    pub const WHITE: Color = Color::from_rgba([0xff, 0xff, 0xff, 0xff]);
    pub const RED: Color = Color::from_rgba([0xff, 0, 0, 0xff]);

    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self { rgba }
    }

    pub const fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::from_rgba([rgb[0], rgb[1], rgb[2], 0xff])
    }

    pub fn rgba(&self) -> [u8; 4] {
        self.rgba
    }

    pub fn alpha(&self) -> u8 {
        self.rgba[3]
    }

    /// Parses a CSS hex color: `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(text.to_string());
        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|digit| digit.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut rgba = [0, 0, 0, 0xff];
        match digits.len() {
            3 | 4 => {
                for (channel, digit) in rgba.iter_mut().zip(digits.chars()) {
                    *channel = digit.to_digit(16).ok_or_else(invalid)? as u8 * 0x11;
                }
            }
            6 | 8 => {
                for (channel, pair) in rgba.iter_mut().zip(digits.as_bytes().chunks(2)) {
                    let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
                    *channel = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
                }
            }
            _ => return Err(invalid()),
        }
        Ok(Self::from_rgba(rgba))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.rgba;
        if a == 0xff {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

// From https://en.wikipedia.org/wiki/Alpha_compositing
pub fn alpha_blend(above: Color, below: Color) -> Color {
    if above.alpha() == 0xff {
        return above;
    }
    if above.alpha() == 0x00 {
        return below;
    }

    let above = color_as_fractions(above);
    let below = color_as_fractions(below);

    let above_alpha = above[3];
    let below_alpha = below[3];
    let result_alpha = above_alpha + below_alpha * (1.0 - above_alpha);

    let mut result: [f32; 4] = [0.0, 0.0, 0.0, result_alpha];
    for i in 0..=2 {
        result[i] =
            (above[i] * above_alpha + below[i] * below_alpha * (1.0 - above_alpha)) / result_alpha;
    }
    color_as_bytes(result)
}

// alpha_blend with below_alpha set to 1.0
pub fn alpha_blend_with_background(above: Color, below: Color) -> Color {
    if above.alpha() == 0xff {
        return above;
    }
    if above.alpha() == 0x00 {
        return below;
    }

    let above = color_as_fractions(above);
    let below = color_as_fractions(below);

    let above_alpha = above[3];

    let mut result: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    for i in 0..=2 {
        result[i] = above[i] * above_alpha + below[i] * (1.0 - above_alpha);
    }
    color_as_bytes(result)
}

fn color_as_fractions(color: Color) -> [f32; 4] {
    color.rgba.map(|channel| channel as f32 / 0xff as f32)
}

fn color_as_bytes(color: [f32; 4]) -> Color {
    Color::from_rgba(color.map(|channel| (channel * 0xff as f32).round() as u8))
}
