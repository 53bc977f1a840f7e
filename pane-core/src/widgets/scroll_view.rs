use crate::{MutCx, Root, Scrollable, Update, Viewport, Widget, WidgetId};

/// A scrollable area with no content of its own.
///
/// Whoever owns it sets the content size and draws the part reported by the visible content
/// rect.
pub struct ScrollView {
    viewport: Viewport,
}

impl ScrollView {
    pub fn new(root: &mut Root) -> WidgetId<Self> {
        let viewport = Viewport::new(root);
        let [vbar, hbar, corner] = viewport.children();

        root.build_widget(Self { viewport })
            .with_child(vbar)
            .with_child(hbar)
            .with_child(corner)
            .finish()
    }
}

impl Widget for ScrollView {
    fn update(&mut self, cx: &mut MutCx<'_>, update: Update) {
        self.viewport.handle_update(cx, &update);
    }
}

impl Scrollable for ScrollView {
    fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }
}
