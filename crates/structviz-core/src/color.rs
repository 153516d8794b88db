// RGBA color with validated channels.
// - r/g/b are integers in [0, 255], alpha is a float in [0.0, 1.0].
// - `set` validates every channel before writing any of them.
// - Text input: `#rgb`, `#rrggbb`, `#rrggbbaa` or a basic color name.
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Interval, Result, VizError};

const CHANNEL: Interval = Interval::closed(0.0, 255.0);
const ALPHA: Interval = Interval::closed(0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgba_u8(0, 0, 0, 1.0)
    }
}

fn channel(field: &'static str, v: i64) -> Result<u8> {
    u8::try_from(v).map_err(|_| VizError::Range {
        field,
        value: v.to_string(),
        interval: CHANNEL,
    })
}

impl Color {
    /// Infallible constructor for constants; alpha is clamped into [0, 1].
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: f64) -> Self {
        let a = if a > 1.0 {
            1.0
        } else if a >= 0.0 {
            a
        } else {
            0.0
        };
        Self { r, g, b, a }
    }

    pub fn new(r: i64, g: i64, b: i64, a: f64) -> Result<Self> {
        let mut c = Self::default();
        c.set(r, g, b, a)?;
        Ok(c)
    }

    pub fn set(&mut self, r: i64, g: i64, b: i64, a: f64) -> Result<()> {
        let r = channel("red", r)?;
        let g = channel("green", g)?;
        let b = channel("blue", b)?;
        let a = ALPHA.check("alpha", a)?;
        *self = Self { r, g, b, a };
        Ok(())
    }

    pub fn set_red(&mut self, v: i64) -> Result<()> {
        self.r = channel("red", v)?;
        Ok(())
    }

    pub fn set_green(&mut self, v: i64) -> Result<()> {
        self.g = channel("green", v)?;
        Ok(())
    }

    pub fn set_blue(&mut self, v: i64) -> Result<()> {
        self.b = channel("blue", v)?;
        Ok(())
    }

    pub fn set_alpha(&mut self, v: f64) -> Result<()> {
        self.a = ALPHA.check("alpha", v)?;
        Ok(())
    }

    pub fn red(&self) -> u8 {
        self.r
    }
    pub fn green(&self) -> u8 {
        self.g
    }
    pub fn blue(&self) -> u8 {
        self.b
    }
    pub fn alpha(&self) -> f64 {
        self.a
    }

    pub fn rgba(&self) -> (u8, u8, u8, f64) {
        (self.r, self.g, self.b, self.a)
    }

    /// Looks up one of the basic named colors (case-insensitive).
    pub fn named(name: &str) -> Option<Self> {
        let rgb = match name.to_ascii_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "red" => (255, 0, 0),
            "green" => (0, 128, 0),
            "lime" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "yellow" => (255, 255, 0),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "gray" | "grey" => (128, 128, 128),
            "lightgray" | "lightgrey" => (211, 211, 211),
            "darkgray" | "darkgrey" => (169, 169, 169),
            "orange" => (255, 165, 0),
            "purple" => (128, 0, 128),
            "brown" => (165, 42, 42),
            "pink" => (255, 192, 203),
            "navy" => (0, 0, 128),
            "teal" => (0, 128, 128),
            "olive" => (128, 128, 0),
            "maroon" => (128, 0, 0),
            _ => return None,
        };
        Some(Self::from_rgba_u8(rgb.0, rgb.1, rgb.2, 1.0))
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        // from_str_radix alone would accept a leading '+'
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            3 => {
                let mut out = [0u8; 3];
                for (i, slot) in out.iter_mut().enumerate() {
                    let d = byte(&hex[i..i + 1])?;
                    *slot = d * 17;
                }
                Some(Self::from_rgba_u8(out[0], out[1], out[2], 1.0))
            }
            6 | 8 => {
                let r = byte(&hex[0..2])?;
                let g = byte(&hex[2..4])?;
                let b = byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    byte(&hex[6..8])? as f64 / 255.0
                } else {
                    1.0
                };
                Some(Self::from_rgba_u8(r, g, b, a))
            }
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let parsed = match t.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => Self::named(t),
        };
        parsed.ok_or_else(|| VizError::InvalidValue {
            field: "color",
            value: s.to_string(),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// External schema: `[r, g, b, a]`
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rgba().serialize(serializer)
    }
}
