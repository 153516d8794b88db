use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::color::Color;
use crate::error::{Interval, Result, VizError};

pub const DEFAULT_COLOR: Color = Color::from_rgba_u8(128, 128, 128, 1.0);
pub const DEFAULT_SIZE: f64 = 10.0;
pub const DEFAULT_THICKNESS: f64 = 1.0;

pub const SIZE_RANGE: Interval = Interval::left_open(0.0, 50.0);
pub const THICKNESS_RANGE: Interval = Interval::left_open(0.0, 10.0);
pub const OPACITY_RANGE: Interval = Interval::closed(0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Diamond,
    Cross,
    TriangleDown,
    TriangleUp,
    Star,
    Wye,
}

impl Shape {
    pub const ALL: [Shape; 8] = [
        Shape::Circle,
        Shape::Square,
        Shape::Diamond,
        Shape::Cross,
        Shape::TriangleDown,
        Shape::TriangleUp,
        Shape::Star,
        Shape::Wye,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Diamond => "diamond",
            Shape::Cross => "cross",
            Shape::TriangleDown => "triangle-down",
            Shape::TriangleUp => "triangle-up",
            Shape::Star => "star",
            Shape::Wye => "wye",
        }
    }
}

impl FromStr for Shape {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim().to_ascii_lowercase();
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str() == t)
            .ok_or_else(|| VizError::InvalidValue {
                field: "shape",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Styling of a single node. Fields only change through validating setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementVisual {
    color: Color,
    shape: Shape,
    size: f64,
    opacity: f64,
}

impl Default for ElementVisual {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            shape: Shape::Circle,
            size: DEFAULT_SIZE,
            opacity: 1.0,
        }
    }
}

impl ElementVisual {
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn shape(&self) -> Shape {
        self.shape
    }
    pub fn size(&self) -> f64 {
        self.size
    }
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Parses `color` as hex or a color name; see [`Color`]'s `FromStr`.
    pub fn set_color_str(&mut self, color: &str) -> Result<()> {
        self.color = color.parse()?;
        Ok(())
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn set_shape_str(&mut self, shape: &str) -> Result<()> {
        self.shape = shape.parse()?;
        Ok(())
    }

    pub fn set_size(&mut self, size: f64) -> Result<()> {
        self.size = SIZE_RANGE.check("size", size)?;
        Ok(())
    }

    pub fn set_opacity(&mut self, opacity: f64) -> Result<()> {
        self.opacity = OPACITY_RANGE.check("opacity", opacity)?;
        Ok(())
    }
}

/// Styling of one outgoing link.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkVisual {
    color: Color,
    thickness: f64,
    opacity: f64,
}

impl Default for LinkVisual {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            thickness: DEFAULT_THICKNESS,
            opacity: 1.0,
        }
    }
}

impl LinkVisual {
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn thickness(&self) -> f64 {
        self.thickness
    }
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_color_str(&mut self, color: &str) -> Result<()> {
        self.color = color.parse()?;
        Ok(())
    }

    pub fn set_thickness(&mut self, thickness: f64) -> Result<()> {
        self.thickness = THICKNESS_RANGE.check("thickness", thickness)?;
        Ok(())
    }

    pub fn set_opacity(&mut self, opacity: f64) -> Result<()> {
        self.opacity = OPACITY_RANGE.check("opacity", opacity)?;
        Ok(())
    }
}
