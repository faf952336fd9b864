use foundation::geometry::{Rect, Vec2};

/// Document-space bounding box of an element.
///
/// Refreshed from layout on scroll/resize; viewport tests read it as-is.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ElementBounds {
    pub rect: Rect,
}

impl ElementBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self {
            rect: Rect::new(min, max),
        }
    }

    pub fn from_origin_size(origin: Vec2, width: f64, height: f64) -> Self {
        Self {
            rect: Rect::from_origin_size(origin, width, height),
        }
    }
}
