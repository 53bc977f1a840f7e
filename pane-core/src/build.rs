use crate::{AnyWidgetId, Root, Widget, WidgetId};

#[must_use]
pub struct WidgetBuilder<'a, T: ?Sized> {
    root: &'a mut Root,
    id:   WidgetId<T>,
}

impl<'a, T> WidgetBuilder<'a, T>
where
    T: Widget,
{
    pub(crate) fn new(root: &'a mut Root, id: WidgetId<T>) -> Self {
        Self { root, id }
    }

    pub fn id(&self) -> WidgetId<T> {
        self.id
    }

    pub fn with_child(self, child: impl AnyWidgetId) -> Self {
        if let Err(err) = self.root.add_child(self.id, child) {
            tracing::warn!(
                parent = ?self.id,
                child = ?child.upcast(),
                %err,
                "failed to add child",
            );
        }

        self
    }

    pub fn finish(self) -> WidgetId<T> {
        self.id
    }
}
