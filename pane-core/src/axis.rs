use crate::{Point, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub const fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub(crate) fn unpack_size(self, size: Size) -> (i32, i32) {
        match self {
            Axis::Horizontal => (size.width, size.height),
            Axis::Vertical => (size.height, size.width),
        }
    }

    pub(crate) fn unpack_point(self, point: Point) -> (i32, i32) {
        match self {
            Axis::Horizontal => (point.x, point.y),
            Axis::Vertical => (point.y, point.x),
        }
    }

    pub(crate) fn pack_size(self, major: i32, minor: i32) -> Size {
        match self {
            Axis::Horizontal => Size::new(major, minor),
            Axis::Vertical => Size::new(minor, major),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, Point, Size};

    #[test]
    fn unpack_pack() {
        let size = Size::new(3, 7);

        let (major, minor) = Axis::Vertical.unpack_size(size);
        assert_eq!((major, minor), (7, 3));
        assert_eq!(Axis::Vertical.pack_size(major, minor), size);

        assert_eq!(Axis::Horizontal.unpack_point(Point::new(1, 2)), (1, 2));
        assert_eq!(Axis::Vertical.unpack_point(Point::new(1, 2)), (2, 1));
    }

    #[test]
    fn cross() {
        assert_eq!(Axis::Horizontal.cross(), Axis::Vertical);
        assert_eq!(Axis::Vertical.cross(), Axis::Horizontal);
    }
}
