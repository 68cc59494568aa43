use crate::foundation::error::{MotionPlotError, MotionPlotResult};

pub use kurbo::{Point, Rect, Vec2};

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// A canvas of the given pixel dimensions; both must be non-zero.
    pub fn new(width: u32, height: u32) -> MotionPlotResult<Self> {
        if width == 0 || height == 0 {
            return Err(MotionPlotError::validation("Canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Full canvas rectangle with the origin at the top-left corner.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Closed numeric interval of data values along one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Domain {
    /// Lower bound, inclusive.
    pub min: f64,
    /// Upper bound, inclusive.
    pub max: f64,
}

impl Domain {
    /// An interval from `min` to `max`; bounds must be finite and ordered.
    pub fn new(min: f64, max: f64) -> MotionPlotResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(MotionPlotError::validation("Domain bounds must be finite"));
        }
        if min > max {
            return Err(MotionPlotError::validation("Domain min must be <= max"));
        }
        Ok(Self { min, max })
    }

    /// Width of the interval, `max - min`.
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Whether `v` lies inside the closed interval.
    pub fn contains(self, v: f64) -> bool {
        self.min <= v && v <= self.max
    }

    /// The same interval, widened to span at least one unit so that linear
    /// projection never divides by zero. A single-value domain maps its one
    /// value to pixel offset zero.
    pub fn for_projection(self) -> Self {
        if self.span() == 0.0 {
            Self {
                min: self.min,
                max: self.min + 1.0,
            }
        } else {
            self
        }
    }
}

/// Axis selector for operations that run once per screen axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Axis2D {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis2D {
    /// The named component of `p`.
    pub fn of(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// The perpendicular axis.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// A color from its three channel values.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
