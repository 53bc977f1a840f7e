use std::fmt;

/// A width and a height in whole pixels.
///
/// Sizes are not clamped, a size computed from a misconfigured widget can end up negative.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width:  i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
