//! Core of `pane`: a retained widget tree and the scroll viewport that drives a pair of
//! scrollbars for any widget whose content is larger than its bounds.

mod axis;
mod build;
mod context;
mod math;
mod root;
mod settings;
mod tree;
mod viewport;
mod widget;

pub mod widgets;

pub use axis::Axis;
pub use build::WidgetBuilder;
pub use context::{MutCx, ReadCx, RefCx};
pub use math::{Point, Rect, Size};
pub use root::{Root, RootSignal, RootState};
pub use settings::ScrollSettings;
pub use tree::{GetError, Tree, WidgetMut, WidgetRef};
pub use viewport::{Scrollable, Viewport};
pub use widget::{
    AnyWidget, AnyWidgetId, ChildUpdate, Update, Widget, WidgetFlags, WidgetId, WidgetState,
};
