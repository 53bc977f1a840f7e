use std::cell::{Ref, RefMut};

use crate::{
    AnyWidget, Rect, RootState, ScrollSettings, Size, Tree, Update, WidgetFlags, WidgetId,
    WidgetMut, WidgetRef, WidgetState, tree::GetError,
};

/// Context handed out with a shared borrow of a widget.
pub struct RefCx<'a> {
    pub(crate) root:  &'a RootState,
    pub(crate) tree:  &'a Tree,
    pub(crate) state: Ref<'a, WidgetState>,
}

/// Context handed out with a mutable borrow of a widget.
pub struct MutCx<'a> {
    pub(crate) root:  &'a mut RootState,
    pub(crate) tree:  &'a Tree,
    pub(crate) state: RefMut<'a, WidgetState>,
}

/// Read access shared by every context.
pub trait ReadCx {
    fn root(&self) -> &RootState;
    fn tree(&self) -> &Tree;
    fn state(&self) -> &WidgetState;

    fn get_widget<T>(&self, id: WidgetId<T>) -> Result<WidgetRef<'_, T>, GetError>
    where
        Self: Sized,
        T: ?Sized + AnyWidget,
    {
        self.tree().get(self.root(), id)
    }

    fn settings(&self) -> &ScrollSettings {
        &self.root().settings
    }

    fn id(&self) -> WidgetId {
        self.state().id
    }

    fn parent(&self) -> Option<WidgetId> {
        self.state().parent
    }

    fn children(&self) -> &[WidgetId] {
        &self.state().children
    }

    fn rect(&self) -> Rect {
        self.state().rect
    }

    fn size(&self) -> Size {
        self.state().rect.size()
    }

    fn width(&self) -> i32 {
        self.state().rect.width()
    }

    fn height(&self) -> i32 {
        self.state().rect.height()
    }

    fn is_visible(&self) -> bool {
        self.state().is_visible()
    }
}

impl ReadCx for RefCx<'_> {
    fn root(&self) -> &RootState {
        self.root
    }

    fn tree(&self) -> &Tree {
        self.tree
    }

    fn state(&self) -> &WidgetState {
        &self.state
    }
}

impl ReadCx for MutCx<'_> {
    fn root(&self) -> &RootState {
        self.root
    }

    fn tree(&self) -> &Tree {
        self.tree
    }

    fn state(&self) -> &WidgetState {
        &self.state
    }
}

impl MutCx<'_> {
    pub fn get_widget_mut<T>(&mut self, id: WidgetId<T>) -> Result<WidgetMut<'_, T>, GetError>
    where
        T: ?Sized + AnyWidget,
    {
        self.tree.get_mut(self.root, id)
    }

    /// Mark the widget dirty, it will be redrawn next frame.
    pub fn request_redraw(&mut self) {
        self.root.request_redraw(self.state.id);
    }

    /// Queue `update` for this widget, delivered by [`Root::flush`](crate::Root::flush).
    pub fn post(&mut self, update: Update) {
        self.root.post(self.state.id, update);
    }

    /// Queue `update` for the parent of this widget, if there is one.
    pub fn post_to_parent(&mut self, update: Update) {
        if let Some(parent) = self.state.parent {
            self.root.post(parent, update);
        }
    }

    /// Set the rect relative to the parent.
    pub fn set_rect(&mut self, rect: Rect) {
        if self.state.rect == rect {
            return;
        }

        self.state.rect = rect;
        self.request_redraw();
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        let rect = self.state.rect.with_size(size);
        self.set_rect(rect);
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.state.is_visible() == visible {
            return;
        }

        self.state.flags.set(WidgetFlags::VISIBLE, visible);
        self.post(Update::Visible(visible));

        // the area the widget covers belongs to the parent once hidden
        match self.state.parent {
            Some(parent) => self.root.request_redraw(parent),

            None => self.request_redraw(),
        }
    }
}
