mod widget_mut;
mod widget_ref;

use std::{
    cell::{Ref, RefCell, RefMut},
    marker::PhantomData,
};

pub use widget_mut::WidgetMut;
pub use widget_ref::WidgetRef;

use crate::{
    AnyWidget, AnyWidgetId, MutCx, RefCx, RootState, Widget, WidgetId, WidgetState,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GetError {
    #[error("widget id is invalid")]
    InvalidId,

    #[error("widget has the wrong type")]
    InvalidType,

    #[error("child is not valid for the parent")]
    InvalidChild,

    #[error("widget already has a parent")]
    AlreadyParented,

    #[error("widget already borrowed")]
    Borrowed,
}

/// Storage for every widget, a parent owns its children.
///
/// Parents are tracked by id only, removing a widget removes all of its descendants.
pub struct Tree {
    // entries in the tree
    entries: Vec<Entry>,

    // list of freed entries
    free: Vec<u32>,
}

struct Entry {
    // current generation of this entry, a `WidgetId` with a `generation` different from this will
    // be invalid for this entry.
    generation: u32,
    alive:      bool,
    widget:     RefCell<Box<dyn Widget>>,
    state:      RefCell<WidgetState>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free:    Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: impl AnyWidgetId) -> bool {
        self.entry(id).is_ok()
    }

    /// Add a widget to the tree.
    ///
    /// Will use a previously freed entry.
    pub(crate) fn insert<T>(&mut self, widget: T) -> WidgetId<T>
    where
        T: Widget,
    {
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.generation += 1;

            let id = WidgetId {
                index,
                generation: entry.generation,
                marker: PhantomData::<T>,
            };

            entry.alive = true;
            entry.widget = RefCell::new(Box::new(widget));
            entry.state = RefCell::new(WidgetState::new::<T>(id.upcast()));

            id
        } else {
            let index = self.entries.len() as u32;

            let id = WidgetId {
                index,
                generation: 0,
                marker: PhantomData::<T>,
            };

            self.entries.push(Entry {
                generation: 0,
                alive:      true,
                widget:     RefCell::new(Box::new(widget)),
                state:      RefCell::new(WidgetState::new::<T>(id.upcast())),
            });

            id
        }
    }

    /// Remove a widget and all it's descendants.
    ///
    /// Returns the parent the widget was detached from and the index it had there.
    pub(crate) fn remove(&mut self, id: WidgetId) -> Option<(WidgetId, usize)> {
        let parent = self.entry_mut(id).ok()?.state.get_mut().parent;

        let detached = parent.and_then(|parent| {
            let state = self.entry_mut(parent).ok()?.state.get_mut();
            let index = state.children.iter().position(|child| *child == id)?;
            state.children.remove(index);

            Some((parent, index))
        });

        self.free_recursive(id);

        detached
    }

    fn free_recursive(&mut self, id: WidgetId) {
        let Ok(entry) = self.entry_mut(id) else {
            return;
        };

        let children = std::mem::take(&mut entry.state.get_mut().children);

        entry.alive = false;
        entry.widget = RefCell::new(Box::new(Tombstone));
        self.free.push(id.index);

        for child in children {
            self.free_recursive(child);
        }
    }

    /// Make `child` the last child of `parent`, returns the index it was added at.
    pub(crate) fn add_child(&mut self, parent: WidgetId, child: WidgetId) -> Result<usize, GetError> {
        self.entry(parent)?;

        // `child` must not be an ancestor of `parent`
        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(GetError::InvalidChild);
            }

            ancestor = self.entry_mut(current)?.state.get_mut().parent;
        }

        let child_state = self.entry_mut(child)?.state.get_mut();

        if child_state.parent.is_some() {
            return Err(GetError::AlreadyParented);
        }

        child_state.parent = Some(parent);

        let parent_state = self.entry_mut(parent)?.state.get_mut();
        parent_state.children.push(child);

        Ok(parent_state.children.len() - 1)
    }

    pub fn get_state(&self, id: impl AnyWidgetId) -> Result<Ref<'_, WidgetState>, GetError> {
        let entry = self.entry(id)?;
        entry.state.try_borrow().map_err(|_| GetError::Borrowed)
    }

    /// Get a reference to a widget.
    pub(crate) fn get<'a, T>(
        &'a self,
        root: &'a RootState,
        id: WidgetId<T>,
    ) -> Result<WidgetRef<'a, T>, GetError>
    where
        T: ?Sized + AnyWidget,
    {
        let entry = self.entry(id)?;

        let widget = entry
            .widget
            .try_borrow()
            .map_err(|_| GetError::Borrowed)?;

        let widget = Ref::filter_map(widget, |widget| T::downcast_ref(&**widget))
            .map_err(|_| GetError::InvalidType)?;

        let state = entry
            .state
            .try_borrow()
            .map_err(|_| GetError::Borrowed)?;

        Ok(WidgetRef {
            widget,
            cx: RefCx {
                root,
                tree: self,
                state,
            },
        })
    }

    /// Get a mutable reference to a widget.
    pub(crate) fn get_mut<'a, T>(
        &'a self,
        root: &'a mut RootState,
        id: WidgetId<T>,
    ) -> Result<WidgetMut<'a, T>, GetError>
    where
        T: ?Sized + AnyWidget,
    {
        let entry = self.entry(id)?;

        let widget = entry
            .widget
            .try_borrow_mut()
            .map_err(|_| GetError::Borrowed)?;

        let widget = RefMut::filter_map(widget, |widget| T::downcast_mut(&mut **widget))
            .map_err(|_| GetError::InvalidType)?;

        let state = entry
            .state
            .try_borrow_mut()
            .map_err(|_| GetError::Borrowed)?;

        Ok(WidgetMut {
            widget,
            cx: MutCx {
                root,
                tree: self,
                state,
            },
        })
    }

    fn entry(&self, id: impl AnyWidgetId) -> Result<&Entry, GetError> {
        let id = id.upcast();

        match self.entries.get(id.index as usize) {
            Some(entry) if entry.alive && entry.generation == id.generation => Ok(entry),
            _ => Err(GetError::InvalidId),
        }
    }

    fn entry_mut(&mut self, id: impl AnyWidgetId) -> Result<&mut Entry, GetError> {
        let id = id.upcast();

        match self.entries.get_mut(id.index as usize) {
            Some(entry) if entry.alive && entry.generation == id.generation => Ok(entry),
            _ => Err(GetError::InvalidId),
        }
    }
}

struct Tombstone;

impl Widget for Tombstone {}

#[cfg(test)]
mod tests {
    use crate::{AnyWidgetId, GetError, ReadCx, Root, Widget, WidgetId};

    struct TestWidget(i32);

    impl Widget for TestWidget {}

    struct OtherWidget;

    impl Widget for OtherWidget {}

    #[test]
    fn insert_and_get() {
        let mut root = Root::new(|_| {});

        let id = root.build_widget(TestWidget(0)).finish();
        assert!(root.get(id).is_ok());
        assert_eq!(root.tree().len(), 1);
    }

    #[test]
    fn get_mutability() {
        let mut root = Root::new(|_| {});

        let a = root.build_widget(TestWidget(0)).finish();
        let b = root.build_widget(TestWidget(1)).finish();

        let mut widget = root.get_mut(a).unwrap();

        // getting a widget while it's borrowed mutable is not possible
        assert_eq!(widget.cx.get_widget(a).err(), Some(GetError::Borrowed));
        assert_eq!(widget.cx.get_widget_mut(a).err(), Some(GetError::Borrowed));

        // but getting others is
        assert!(widget.cx.get_widget(b).is_ok());
        assert!(widget.cx.get_widget_mut(b).is_ok());

        widget.widget.0 = 10;
        drop(widget);

        // getting a widget after the reference has been dropped is possible
        assert_eq!(root.get(a).unwrap().widget.0, 10);
    }

    #[test]
    fn wrong_type() {
        let mut root = Root::new(|_| {});

        let id = root.build_widget(TestWidget(0)).finish();
        let wrong = WidgetId::<OtherWidget> {
            index:      id.index,
            generation: id.generation,
            marker:     std::marker::PhantomData,
        };

        assert_eq!(root.get(wrong).err(), Some(GetError::InvalidType));
    }

    #[test]
    fn remove_is_recursive() {
        let mut root = Root::new(|_| {});

        let grandchild = root.build_widget(TestWidget(2)).finish();
        let child = root
            .build_widget(TestWidget(1))
            .with_child(grandchild)
            .finish();
        let parent = root
            .build_widget(TestWidget(0))
            .with_child(child)
            .finish();

        assert!(root.remove(child));

        assert!(root.get(parent).is_ok());
        assert_eq!(root.get(child).err(), Some(GetError::InvalidId));
        assert_eq!(root.get(grandchild).err(), Some(GetError::InvalidId));
        assert!(root.tree().get_state(parent).unwrap().children().is_empty());
    }

    #[test]
    fn stale_id_after_reuse() {
        let mut root = Root::new(|_| {});

        let old = root.build_widget(TestWidget(0)).finish();
        root.remove(old);

        let new = root.build_widget(TestWidget(1)).finish();

        assert_eq!(old.index, new.index);
        assert_eq!(root.get(old).err(), Some(GetError::InvalidId));
        assert_eq!(root.get(new).unwrap().widget.0, 1);
    }

    #[test]
    fn reject_reparenting_and_cycles() {
        let mut root = Root::new(|_| {});

        let a = root.build_widget(TestWidget(0)).finish();
        let b = root.build_widget(TestWidget(1)).finish();
        let c = root.build_widget(TestWidget(2)).finish();

        root.add_child(a, b).unwrap();

        assert_eq!(root.add_child(c, b), Err(GetError::AlreadyParented));
        assert_eq!(root.add_child(b, a), Err(GetError::InvalidChild));
        assert_eq!(root.add_child(a, a), Err(GetError::InvalidChild));

        let parent = root.tree().get_state(b).unwrap().parent();
        assert_eq!(parent, Some(a.upcast()));
    }
}
