use dashscroll_graphics::{Point, Rect};

/// Axis a scrollable region moves along.
///
/// An engine is one-dimensional; two engines, one per orientation, make a 2D
/// scroll area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    /// Coordinate of `point` along this axis.
    pub fn coordinate(self, point: Point) -> f32 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Length of `rect` along this axis.
    pub fn extent(self, rect: Rect) -> f32 {
        match self {
            Orientation::Horizontal => rect.width,
            Orientation::Vertical => rect.height,
        }
    }
}
