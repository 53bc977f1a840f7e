//! Scroll viewports for a retained widget tree.
//!
//! ```
//! use pane::{Axis, Rect, Root, Size, widgets::ScrollView};
//!
//! let mut root = Root::new(|_| {});
//! let view = ScrollView::new(&mut root);
//!
//! root.resize(view, Size::new(216, 116)).unwrap();
//!
//! let mut widget = root.get_mut(view).unwrap();
//! widget.set_content_size(Size::new(800, 600));
//! widget.scroll_into_view_axis(Rect::new(0, 450, 10, 20), Axis::Vertical);
//!
//! assert_eq!(widget.visible_content_rect(), Rect::new(0, 370, 200, 100));
//! drop(widget);
//!
//! // deliver the queued scrollbar notifications
//! root.flush();
//! ```

mod log;

pub use log::init_log;
pub use pane_core::*;
