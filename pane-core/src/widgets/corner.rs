use crate::Widget;

/// Fills the square left over where a vertical and a horizontal scrollbar meet.
pub struct Corner;

impl Widget for Corner {
    fn fills_background() -> bool {
        true
    }
}
