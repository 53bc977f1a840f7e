mod corner;
mod scroll_bar;
mod scroll_view;

pub use corner::Corner;
pub use scroll_bar::ScrollBar;
pub use scroll_view::ScrollView;
