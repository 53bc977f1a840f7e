use crate::WidgetId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootSignal {
    /// A widget needs to be drawn again, see [`Root::take_redraws`](crate::Root::take_redraws).
    RequestRedraw(WidgetId),

    /// Updates were queued, see [`Root::flush`](crate::Root::flush).
    RequestFlush,
}
