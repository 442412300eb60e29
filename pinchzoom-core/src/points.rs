use serde::{Deserialize, Serialize};

/// A 2D point in viewport-relative pixel space.
///
/// Used for pinch centers, single-pointer positions and zoom anchors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
}

impl Origin {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    pub fn div_scalar(&self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Width and height of a container or of the unscaled content, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dims {
    pub width: f64,
    pub height: f64,
}

impl Dims {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Dimensions after applying a uniform scale factor.
    pub fn scaled(&self, scale: f64) -> Self {
        Self {
            width: self.width * scale,
            height: self.height * scale,
        }
    }

    pub fn center(&self) -> Origin {
        Origin::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Returns true only when both dimensions are present and identical.
pub fn dims_equal(a: Option<&Dims>, b: Option<&Dims>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.width == b.width && a.height == b.height,
        _ => false,
    }
}

/// Bounding box of an element in client (page viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Origin {
        Origin::new(self.left, self.top)
    }

    pub fn dims(&self) -> Dims {
        Dims::new(self.width, self.height)
    }
}

/// One active touch point as reported by the event source.
///
/// Coordinates are client coordinates; convert with
/// [`relative_coords`](crate::geometry::relative_coords) before doing
/// transform math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: i32,
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(id: i32, client_x: f64, client_y: f64) -> Self {
        Self {
            id,
            client_x,
            client_y,
        }
    }

    pub fn client(&self) -> Origin {
        Origin::new(self.client_x, self.client_y)
    }
}
