use std::{
    any::Any,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{Axis, MutCx, Size};

mod state;

pub use state::{WidgetFlags, WidgetState};

pub trait Widget: Any {
    fn update(&mut self, cx: &mut MutCx<'_>, update: Update) {
        let _ = cx;
        let _ = update;
    }

    fn fills_background() -> bool
    where
        Self: Sized,
    {
        false
    }
}

/// Notifications delivered to [`Widget::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    Resized(Size),
    Visible(bool),
    ValueChanged { axis: Axis, value: i32 },
    Children(ChildUpdate),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChildUpdate {
    Added(usize),
    Removed(usize),
}

pub trait AnyWidget: Widget {
    fn downcast_ref<'a>(widget: &'a (dyn Widget + 'static)) -> Option<&'a Self>;

    fn downcast_mut<'a>(widget: &'a mut (dyn Widget + 'static)) -> Option<&'a mut Self>;
}

impl AnyWidget for dyn Widget {
    fn downcast_ref<'a>(widget: &'a (dyn Widget + 'static)) -> Option<&'a Self> {
        Some(widget)
    }

    fn downcast_mut<'a>(widget: &'a mut (dyn Widget + 'static)) -> Option<&'a mut Self> {
        Some(widget)
    }
}

impl<T> AnyWidget for T
where
    T: Widget,
{
    fn downcast_ref<'a>(widget: &'a (dyn Widget + 'static)) -> Option<&'a Self> {
        (widget as &dyn Any).downcast_ref()
    }

    fn downcast_mut<'a>(widget: &'a mut (dyn Widget + 'static)) -> Option<&'a mut Self> {
        (widget as &mut dyn Any).downcast_mut()
    }
}

pub struct WidgetId<T: ?Sized = dyn Widget> {
    pub(crate) index:      u32,
    pub(crate) generation: u32,
    pub(crate) marker:     PhantomData<T>,
}

impl<T: ?Sized> Clone for WidgetId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for WidgetId<T> {}

impl<T: ?Sized, U: ?Sized> PartialEq<WidgetId<U>> for WidgetId<T> {
    fn eq(&self, other: &WidgetId<U>) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T: ?Sized> Eq for WidgetId<T> {}

impl<T: ?Sized, U: ?Sized> PartialOrd<WidgetId<U>> for WidgetId<T> {
    fn partial_cmp(&self, other: &WidgetId<U>) -> Option<Ordering> {
        Some(
            self.index
                .cmp(&other.index)
                .then(self.generation.cmp(&other.generation)),
        )
    }
}

impl<T: ?Sized> Ord for WidgetId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then(self.generation.cmp(&other.generation))
    }
}

impl<T: ?Sized> Hash for WidgetId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for WidgetId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.generation)
    }
}

pub trait AnyWidgetId: Copy {
    fn upcast(&self) -> WidgetId;
}

impl<T> AnyWidgetId for WidgetId<T>
where
    T: ?Sized,
{
    fn upcast(&self) -> WidgetId {
        WidgetId {
            index:      self.index,
            generation: self.generation,
            marker:     PhantomData,
        }
    }
}
