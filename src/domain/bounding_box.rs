/// Rectangle in source units (PDF points, ALTO pixels, ...), top-left origin.
///
/// Corners are stored ordered so that `x0 <= x1` and `y0 <= y1`. Zero-area
/// boxes are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl BoundingBox {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.y0.is_finite() && self.x1.is_finite() && self.y1.is_finite()
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// Box on the 0..=1000 integer grid expected by the reading-order model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NormalizedBox {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl NormalizedBox {
    pub const MAX: u16 = 1000;
    pub const ZERO: NormalizedBox = NormalizedBox {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    pub fn new(x0: u16, y0: u16, x1: u16, y1: u16) -> Self {
        Self {
            x0: x0.min(Self::MAX),
            y0: y0.min(Self::MAX),
            x1: x1.min(Self::MAX),
            y1: y1.min(Self::MAX),
        }
    }

    pub fn as_array(&self) -> [u16; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    pub fn center_x(&self) -> u16 {
        (self.x0 + self.x1) / 2
    }

    pub fn center_y(&self) -> u16 {
        (self.y0 + self.y1) / 2
    }

    pub fn height(&self) -> u16 {
        self.y1.saturating_sub(self.y0)
    }
}

impl From<NormalizedBox> for BoundingBox {
    fn from(b: NormalizedBox) -> Self {
        BoundingBox::new(b.x0.into(), b.y0.into(), b.x1.into(), b.y1.into())
    }
}
