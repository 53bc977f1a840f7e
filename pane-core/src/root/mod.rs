use std::{
    collections::{HashSet, VecDeque},
    hash::BuildHasherDefault,
};

use seahash::SeaHasher;

use crate::{
    AnyWidget, AnyWidgetId, ChildUpdate, GetError, ReadCx, ScrollSettings, Size, Tree, Update,
    Widget, WidgetBuilder, WidgetId, WidgetMut, WidgetRef,
};

mod signal;

pub use signal::RootSignal;

pub struct Root {
    pub(crate) tree:  Tree,
    pub(crate) state: RootState,
}

pub struct RootState {
    pub(crate) redraw:   HashSet<WidgetId, BuildHasherDefault<SeaHasher>>,
    pub(crate) updates:  VecDeque<(WidgetId, Update)>,
    pub(crate) sink:     Box<dyn Fn(RootSignal)>,
    pub(crate) settings: ScrollSettings,
}

impl RootState {
    pub(crate) fn signal(&self, signal: RootSignal) {
        tracing::trace!(
            signal = ?signal,
            "root signal emitted",
        );

        (self.sink)(signal);
    }

    pub(crate) fn request_redraw(&mut self, widget: WidgetId) {
        if self.redraw.insert(widget) {
            self.signal(RootSignal::RequestRedraw(widget));
        }
    }

    pub(crate) fn post(&mut self, widget: WidgetId, update: Update) {
        tracing::trace!(?widget, ?update, "update posted");

        let was_empty = self.updates.is_empty();
        self.updates.push_back((widget, update));

        if was_empty {
            self.signal(RootSignal::RequestFlush);
        }
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.settings
    }

    pub fn needs_redraw(&self, widget: impl AnyWidgetId) -> bool {
        self.redraw.contains(&widget.upcast())
    }

    pub fn pending_updates(&self) -> usize {
        self.updates.len()
    }
}

impl Root {
    pub fn new(sink: impl Fn(RootSignal) + 'static) -> Self {
        Self::with_settings(ScrollSettings::default(), sink)
    }

    pub fn with_settings(settings: ScrollSettings, sink: impl Fn(RootSignal) + 'static) -> Self {
        Self {
            tree:  Tree::new(),
            state: RootState {
                redraw: HashSet::default(),
                updates: VecDeque::new(),
                sink: Box::new(sink),
                settings,
            },
        }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn settings(&self) -> &ScrollSettings {
        &self.state.settings
    }

    pub fn build_widget<T>(&mut self, widget: T) -> WidgetBuilder<'_, T>
    where
        T: Widget,
    {
        let id = self.tree.insert(widget);
        WidgetBuilder::new(self, id)
    }

    pub fn add_child(
        &mut self,
        parent: impl AnyWidgetId,
        child: impl AnyWidgetId,
    ) -> Result<(), GetError> {
        let parent = parent.upcast();
        let index = self.tree.add_child(parent, child.upcast())?;

        self.state.post(parent, Update::Children(ChildUpdate::Added(index)));
        self.state.request_redraw(parent);

        Ok(())
    }

    /// Remove a widget and all it's descendants, returns `false` if `widget` was not alive.
    pub fn remove(&mut self, widget: impl AnyWidgetId) -> bool {
        let widget = widget.upcast();

        if !self.tree.contains(widget) {
            return false;
        }

        if let Some((parent, index)) = self.tree.remove(widget) {
            self.state.post(parent, Update::Children(ChildUpdate::Removed(index)));
            self.state.request_redraw(parent);
        }

        // updates still queued for the removed subtree are dropped by `flush`
        self.state.redraw.retain(|id| self.tree.contains(*id));

        true
    }

    pub fn get<T>(&self, id: WidgetId<T>) -> Result<WidgetRef<'_, T>, GetError>
    where
        T: ?Sized + AnyWidget,
    {
        self.tree.get(&self.state, id)
    }

    pub fn get_mut<T>(&mut self, id: WidgetId<T>) -> Result<WidgetMut<'_, T>, GetError>
    where
        T: ?Sized + AnyWidget,
    {
        self.tree.get_mut(&mut self.state, id)
    }

    /// Resize a widget and deliver [`Update::Resized`] to it.
    ///
    /// Does nothing when the size is unchanged.
    pub fn resize(&mut self, widget: impl AnyWidgetId, size: Size) -> Result<(), GetError> {
        let mut widget = self.get_mut(widget.upcast())?;

        if widget.cx.size() == size {
            return Ok(());
        }

        tracing::debug!(widget = ?widget.cx.id(), ?size, "widget resized");

        widget.cx.set_size(size);
        widget.widget.update(&mut widget.cx, Update::Resized(size));

        Ok(())
    }

    /// Deliver every queued update, including those queued while delivering.
    ///
    /// Returns the number of updates delivered.
    pub fn flush(&mut self) -> usize {
        let mut delivered = 0;

        while let Some((id, update)) = self.state.updates.pop_front() {
            match self.tree.get_mut(&mut self.state, id) {
                Ok(mut widget) => {
                    widget.widget.update(&mut widget.cx, update);
                    delivered += 1;
                }

                Err(err) => {
                    tracing::trace!(?id, ?update, %err, "update dropped");
                }
            }
        }

        delivered
    }

    /// Take every widget that requested a redraw since the last call, ordered by id.
    pub fn take_redraws(&mut self) -> Vec<WidgetId> {
        let mut widgets: Vec<_> = self.state.redraw.drain().collect();
        widgets.sort();
        widgets
    }

    pub fn needs_redraw(&self, widget: impl AnyWidgetId) -> bool {
        self.state.needs_redraw(widget)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::{AnyWidgetId, MutCx, Root, RootSignal, Size, Update, Widget};

    #[derive(Default)]
    struct Recorder {
        updates: Vec<Update>,
    }

    impl Widget for Recorder {
        fn update(&mut self, cx: &mut MutCx<'_>, update: Update) {
            if let Update::Resized(_) = update {
                cx.post(Update::Visible(true));
            }

            self.updates.push(update);
        }
    }

    #[test]
    fn redraw_requests_are_deduplicated() {
        let signals = Rc::new(RefCell::new(Vec::new()));
        let mut root = Root::new({
            let signals = signals.clone();
            move |signal| signals.borrow_mut().push(signal)
        });

        let id = root.build_widget(Recorder::default()).finish();

        {
            let mut widget = root.get_mut(id).unwrap();
            widget.cx.request_redraw();
            widget.cx.request_redraw();
        }

        assert!(root.needs_redraw(id));
        assert_eq!(
            *signals.borrow(),
            vec![RootSignal::RequestRedraw(id.upcast())]
        );

        assert_eq!(root.take_redraws(), vec![id.upcast()]);
        assert!(root.take_redraws().is_empty());
        assert!(!root.needs_redraw(id));
    }

    #[test]
    fn resize_delivers_and_flush_drains() {
        let mut root = Root::new(|_| {});
        let id = root.build_widget(Recorder::default()).finish();

        root.resize(id, Size::new(10, 20)).unwrap();
        root.resize(id, Size::new(10, 20)).unwrap();

        assert_eq!(
            root.get(id).unwrap().updates,
            vec![Update::Resized(Size::new(10, 20))]
        );
        assert_eq!(root.state().pending_updates(), 1);

        assert_eq!(root.flush(), 1);
        assert_eq!(root.state().pending_updates(), 0);
        assert_eq!(
            root.get(id).unwrap().updates,
            vec![
                Update::Resized(Size::new(10, 20)),
                Update::Visible(true),
            ]
        );
    }

    #[test]
    fn updates_for_removed_widgets_are_dropped() {
        let mut root = Root::new(|_| {});

        let child = root.build_widget(Recorder::default()).finish();
        let parent = root
            .build_widget(Recorder::default())
            .with_child(child)
            .finish();

        root.flush();

        root.get_mut(child).unwrap().cx.post(Update::Visible(false));
        root.remove(child);

        // only the `Removed` notification for the parent survives
        assert_eq!(root.flush(), 1);
        assert!(!root.needs_redraw(child));
        assert!(root.needs_redraw(parent));
    }
}
