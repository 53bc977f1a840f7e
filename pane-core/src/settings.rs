/// Defaults used when a [`Viewport`](crate::Viewport) builds its scrollbars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollSettings {
    /// Distance moved by a single step, on both bars.
    pub step: i32,

    /// Page increment of the horizontal bar. The vertical page increment follows the visible
    /// content height instead.
    pub horizontal_big_step: i32,

    /// Thickness of a bar across its axis.
    pub thickness: i32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            step:                4,
            horizontal_big_step: 30,
            thickness:           16,
        }
    }
}
