use std::fmt;

use crate::{Point, Size};

/// An axis aligned rectangle, `max` is exclusive.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::min_size(Point::new(x, y), Size::new(width, height))
    }

    pub const fn min_size(min: Point, size: Size) -> Self {
        Self {
            min,
            max: Point {
                x: min.x + size.width,
                y: min.y + size.height,
            },
        }
    }

    pub const fn top(self) -> i32 {
        self.min.y
    }

    pub const fn right(self) -> i32 {
        self.max.x
    }

    pub const fn bottom(self) -> i32 {
        self.max.y
    }

    pub const fn left(self) -> i32 {
        self.min.x
    }

    pub const fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    pub const fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    pub const fn size(self) -> Size {
        Size {
            width:  self.width(),
            height: self.height(),
        }
    }

    pub const fn with_size(self, size: Size) -> Self {
        Self::min_size(self.min, size)
    }

    /// Check whether `other` lies entirely within `self`, edges included.
    pub const fn contains_rect(self, other: Self) -> bool {
        other.min.x >= self.min.x
            && other.min.y >= self.min.y
            && other.max.x <= self.max.x
            && other.max.y <= self.max.y
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left(),
            self.top(),
            self.width(),
            self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Rect, Size};

    #[test]
    fn edges() {
        let rect = Rect::new(10, 20, 30, 40);

        assert_eq!(rect.left(), 10);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.size(), Size::new(30, 40));
    }

    #[test]
    fn contains_rect_is_edge_inclusive() {
        let outer = Rect::new(0, 0, 100, 100);

        assert!(outer.contains_rect(outer));
        assert!(outer.contains_rect(Rect::new(80, 0, 20, 100)));
        assert!(!outer.contains_rect(Rect::new(81, 0, 20, 20)));
        assert!(!outer.contains_rect(Rect::new(-1, 5, 20, 20)));
    }
}
