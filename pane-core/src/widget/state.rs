use crate::{Rect, Size, Widget, WidgetId};

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetFlags: u8 {
        const VISIBLE         = 1 << 0;
        const FILL_BACKGROUND = 1 << 1;
    }
}

impl WidgetFlags {
    pub fn new<T: Widget>() -> Self {
        let mut flags = Self::VISIBLE;

        flags.set(
            Self::FILL_BACKGROUND,
            T::fills_background(),
        );

        flags
    }
}

#[derive(Debug)]
pub struct WidgetState {
    pub(crate) id:       WidgetId,
    pub(crate) parent:   Option<WidgetId>,
    pub(crate) children: Vec<WidgetId>,

    // relative to the parent
    pub(crate) rect:  Rect,
    pub(crate) flags: WidgetFlags,
}

impl WidgetState {
    pub fn new<T: Widget>(id: WidgetId) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            rect: Rect::ZERO,
            flags: WidgetFlags::new::<T>(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    pub fn flags(&self) -> WidgetFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(WidgetFlags::VISIBLE)
    }

    pub fn fills_background(&self) -> bool {
        self.flags.contains(WidgetFlags::FILL_BACKGROUND)
    }
}
