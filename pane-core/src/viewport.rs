use crate::{
    AnyWidgetId, Axis, MutCx, ReadCx, Rect, Root, Size, Update, Widget, WidgetId, WidgetMut,
    WidgetRef,
    widgets::{Corner, ScrollBar},
};

/// Scroll state for a widget whose content is larger than its bounds.
///
/// A `Viewport` owns a vertical and a horizontal [`ScrollBar`] and a [`Corner`], all of which
/// must be added as children of the widget embedding it. The scrollbar values are the scroll
/// offset, the top-left of the visible part of the content in content coordinates.
///
/// Every operation takes the context of the owning widget, the bars are reached through it.
pub struct Viewport {
    vbar:   WidgetId<ScrollBar>,
    hbar:   WidgetId<ScrollBar>,
    corner: WidgetId<Corner>,

    content_size:                    Size,
    size_occupied_by_fixed_elements: Size,
    padding:                         Size,
    scrollbars_enabled:              bool,

    // bumped on every range recompute
    generation: u64,
}

impl Viewport {
    /// Build the scrollbars and the corner, they still have to be added as children of the
    /// owning widget, see [`Viewport::children`].
    pub fn new(root: &mut Root) -> Self {
        let settings = *root.settings();

        let vbar = ScrollBar::new(Axis::Vertical, settings.thickness).with_step(settings.step);
        let vbar = build_scrollbar(root, vbar);

        let hbar = ScrollBar::new(Axis::Horizontal, settings.thickness)
            .with_step(settings.step)
            .with_big_step(settings.horizontal_big_step);
        let hbar = build_scrollbar(root, hbar);

        let corner = root.build_widget(Corner).finish();

        Self {
            vbar,
            hbar,
            corner,

            content_size: Size::ZERO,
            size_occupied_by_fixed_elements: Size::ZERO,
            padding: Size::ZERO,
            scrollbars_enabled: true,

            generation: 0,
        }
    }

    pub fn children(&self) -> [WidgetId; 3] {
        [
            self.vbar.upcast(),
            self.hbar.upcast(),
            self.corner.upcast(),
        ]
    }

    pub fn vertical_scrollbar(&self) -> WidgetId<ScrollBar> {
        self.vbar
    }

    pub fn horizontal_scrollbar(&self) -> WidgetId<ScrollBar> {
        self.hbar
    }

    pub fn scrollbar(&self, axis: Axis) -> WidgetId<ScrollBar> {
        match axis {
            Axis::Horizontal => self.hbar,
            Axis::Vertical => self.vbar,
        }
    }

    pub fn corner(&self) -> WidgetId<Corner> {
        self.corner
    }

    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn size_occupied_by_fixed_elements(&self) -> Size {
        self.size_occupied_by_fixed_elements
    }

    pub fn padding(&self) -> Size {
        self.padding
    }

    pub fn is_scrollbars_enabled(&self) -> bool {
        self.scrollbars_enabled
    }

    /// Number of times the scrollbar ranges have been recomputed.
    pub fn layout_generation(&self) -> u64 {
        self.generation
    }

    pub fn set_content_size(&mut self, cx: &mut MutCx<'_>, size: Size) {
        if self.content_size == size {
            return;
        }

        self.content_size = size;
        self.update_scrollbar_ranges(cx);
    }

    /// Reserve space that never scrolls, like a header.
    pub fn set_size_occupied_by_fixed_elements(&mut self, cx: &mut MutCx<'_>, size: Size) {
        if self.size_occupied_by_fixed_elements == size {
            return;
        }

        self.size_occupied_by_fixed_elements = size;
        self.update_scrollbar_ranges(cx);
    }

    /// Set the padding applied on both sides of the content, per axis.
    pub fn set_padding(&mut self, cx: &mut MutCx<'_>, size: Size) {
        if self.padding == size {
            return;
        }

        self.padding = size;
        self.update_scrollbar_ranges(cx);
    }

    /// Width taken by the vertical scrollbar, zero while it's hidden.
    pub fn width_occupied_by_vertical_scrollbar(&self, cx: &impl ReadCx) -> i32 {
        self.occupied_by(cx, Axis::Vertical)
    }

    /// Height taken by the horizontal scrollbar, zero while it's hidden.
    pub fn height_occupied_by_horizontal_scrollbar(&self, cx: &impl ReadCx) -> i32 {
        self.occupied_by(cx, Axis::Horizontal)
    }

    fn occupied_by(&self, cx: &impl ReadCx, axis: Axis) -> i32 {
        cx.get_widget(self.scrollbar(axis)).map_or(0, |bar| {
            if !bar.cx.is_visible() {
                return 0;
            }

            let (_, minor) = axis.unpack_size(bar.cx.size());
            minor
        })
    }

    /// How far the content along `axis` extends past what fits, never negative.
    fn excess(&self, cx: &impl ReadCx, axis: Axis) -> i32 {
        let (extent, _) = axis.unpack_size(cx.size());
        let (content, _) = axis.unpack_size(self.content_size);
        // padding of the same axis, not the height for both
        let (padding, _) = axis.unpack_size(self.padding);
        let (fixed, _) = axis.unpack_size(self.size_occupied_by_fixed_elements);

        let available = extent - fixed - self.occupied_by(cx, axis.cross());
        i32::max(0, content + padding * 2 - available)
    }

    /// Derive the scrollbar ranges and the vertical page step from the current bounds.
    pub fn update_scrollbar_ranges(&mut self, cx: &mut MutCx<'_>) {
        self.generation += 1;

        for axis in [Axis::Vertical, Axis::Horizontal] {
            let excess = self.excess(cx, axis);

            if let Ok(mut bar) = cx.get_widget_mut(self.scrollbar(axis)) {
                ScrollBar::set_range(&mut bar, 0, excess);
            }
        }

        let visible_height = self.visible_content_rect(cx).height();

        if let Ok(mut vbar) = cx.get_widget_mut(self.vbar) {
            let big_step = visible_height - vbar.step();
            ScrollBar::set_big_step(&mut vbar, big_step);
        }

        tracing::trace!(
            widget = ?cx.id(),
            generation = self.generation,
            "scrollbar ranges updated",
        );
    }

    /// Recompute the ranges and lay out the scrollbars and the corner for `size`.
    pub fn on_resize(&mut self, cx: &mut MutCx<'_>, size: Size) {
        self.update_scrollbar_ranges(cx);

        let (Some(vbar_size), Some(hbar_size)) = (
            preferred_size(cx, self.vbar),
            preferred_size(cx, self.hbar),
        ) else {
            tracing::warn!(widget = ?cx.id(), "viewport lost its scrollbars");
            return;
        };

        let vbar_rect = Rect::new(
            size.width - vbar_size.width,
            0,
            vbar_size.width,
            size.height - hbar_size.height,
        );

        let hbar_rect = Rect::new(
            0,
            size.height - hbar_size.height,
            size.width - vbar_size.width,
            hbar_size.height,
        );

        if let Ok(mut vbar) = cx.get_widget_mut(self.vbar) {
            vbar.cx.set_rect(vbar_rect);
        }

        if let Ok(mut hbar) = cx.get_widget_mut(self.hbar) {
            hbar.cx.set_rect(hbar_rect);
        }

        let both_visible = [self.vbar, self.hbar]
            .into_iter()
            .all(|bar| cx.get_widget(bar).is_ok_and(|bar| bar.cx.is_visible()));

        // the width comes from the horizontal bar and the height from the vertical one, they only
        // agree while both bars share a thickness
        let corner_rect = Rect::new(
            hbar_rect.right(),
            vbar_rect.bottom(),
            self.height_occupied_by_horizontal_scrollbar(cx),
            self.width_occupied_by_vertical_scrollbar(cx),
        );

        if let Ok(mut corner) = cx.get_widget_mut(self.corner) {
            corner.cx.set_visible(both_visible);

            if both_visible {
                corner.cx.set_rect(corner_rect);
            }
        }

        tracing::debug!(
            widget = ?cx.id(),
            ?size,
            ?vbar_rect,
            ?hbar_rect,
            "viewport resized",
        );
    }

    /// The part of the content currently shown, in content coordinates.
    pub fn visible_content_rect(&self, cx: &impl ReadCx) -> Rect {
        let value = |axis| {
            cx.get_widget(self.scrollbar(axis))
                .map_or(0, |bar| bar.value())
        };

        let width = cx.width()
            - self.width_occupied_by_vertical_scrollbar(cx)
            - self.padding.width * 2
            - self.size_occupied_by_fixed_elements.width;

        let height = cx.height()
            - self.height_occupied_by_horizontal_scrollbar(cx)
            - self.padding.height * 2
            - self.size_occupied_by_fixed_elements.height;

        Rect::new(
            value(Axis::Horizontal),
            value(Axis::Vertical),
            width,
            height,
        )
    }

    /// Scroll the least amount needed to bring `rect` into view, on the enabled axes only.
    pub fn scroll_into_view(
        &self,
        cx: &mut MutCx<'_>,
        rect: Rect,
        horizontal: bool,
        vertical: bool,
    ) {
        let visible = self.visible_content_rect(cx);

        if visible.contains_rect(rect) {
            return;
        }

        for (axis, enabled) in [(Axis::Vertical, vertical), (Axis::Horizontal, horizontal)] {
            if enabled
                && let Some(value) = scroll_target(axis, visible, rect)
                && let Ok(mut bar) = cx.get_widget_mut(self.scrollbar(axis))
            {
                ScrollBar::set_value(&mut bar, value);
            }
        }
    }

    pub fn scroll_into_view_axis(&self, cx: &mut MutCx<'_>, rect: Rect, axis: Axis) {
        match axis {
            Axis::Horizontal => self.scroll_into_view(cx, rect, true, false),
            Axis::Vertical => self.scroll_into_view(cx, rect, false, true),
        }
    }

    /// Show or hide both scrollbars and the corner, ranges and values are left alone.
    pub fn set_scrollbars_enabled(&mut self, cx: &mut MutCx<'_>, enabled: bool) {
        if self.scrollbars_enabled == enabled {
            return;
        }

        self.scrollbars_enabled = enabled;

        tracing::debug!(widget = ?cx.id(), enabled, "scrollbars toggled");

        for child in self.children() {
            if let Ok(mut child) = cx.get_widget_mut(child) {
                child.cx.set_visible(enabled);
            }
        }
    }

    /// Handle the updates a scrollable widget receives, call from [`Widget::update`].
    ///
    /// A changed scrollbar value only requests a redraw, layout is never re-entered from here.
    pub fn handle_update(&mut self, cx: &mut MutCx<'_>, update: &Update) {
        match *update {
            Update::Resized(size) => self.on_resize(cx, size),
            Update::ValueChanged { .. } => cx.request_redraw(),
            _ => {}
        }
    }
}

// bars start out at their preferred size so the ranges computed on the first resize, before
// the bars are placed, already leave room for them
fn build_scrollbar(root: &mut Root, bar: ScrollBar) -> WidgetId<ScrollBar> {
    let size = bar.preferred_size();
    let id = root.build_widget(bar).finish();

    if let Ok(mut bar) = root.get_mut(id) {
        bar.cx.set_size(size);
    }

    id
}

fn preferred_size(cx: &impl ReadCx, bar: WidgetId<ScrollBar>) -> Option<Size> {
    cx.get_widget(bar)
        .ok()
        .map(|bar| bar.preferred_size())
}

/// New scrollbar value along `axis` that brings `target` into `visible`, if it has to move.
fn scroll_target(axis: Axis, visible: Rect, target: Rect) -> Option<i32> {
    let (visible_near, _) = axis.unpack_point(visible.min);
    let (visible_far, _) = axis.unpack_point(visible.max);
    let (visible_extent, _) = axis.unpack_size(visible.size());

    let (target_near, _) = axis.unpack_point(target.min);
    let (target_far, _) = axis.unpack_point(target.max);

    if target_near < visible_near {
        Some(target_near)
    } else if target_far > visible_far {
        Some(target_far - visible_extent)
    } else {
        None
    }
}

/// A widget that embeds a [`Viewport`].
pub trait Scrollable: Widget {
    fn viewport(&self) -> &Viewport;

    fn viewport_mut(&mut self) -> &mut Viewport;
}

impl<T> WidgetMut<'_, T>
where
    T: Scrollable,
{
    pub fn set_content_size(&mut self, size: Size) {
        self.widget.viewport_mut().set_content_size(&mut self.cx, size);
    }

    pub fn set_size_occupied_by_fixed_elements(&mut self, size: Size) {
        let viewport = self.widget.viewport_mut();
        viewport.set_size_occupied_by_fixed_elements(&mut self.cx, size);
    }

    pub fn set_padding(&mut self, size: Size) {
        self.widget.viewport_mut().set_padding(&mut self.cx, size);
    }

    pub fn set_scrollbars_enabled(&mut self, enabled: bool) {
        let viewport = self.widget.viewport_mut();
        viewport.set_scrollbars_enabled(&mut self.cx, enabled);
    }

    pub fn scroll_into_view(&mut self, rect: Rect, horizontal: bool, vertical: bool) {
        let viewport = self.widget.viewport();
        viewport.scroll_into_view(&mut self.cx, rect, horizontal, vertical);
    }

    pub fn scroll_into_view_axis(&mut self, rect: Rect, axis: Axis) {
        let viewport = self.widget.viewport();
        viewport.scroll_into_view_axis(&mut self.cx, rect, axis);
    }

    pub fn visible_content_rect(&self) -> Rect {
        self.widget.viewport().visible_content_rect(&self.cx)
    }
}

impl<T> WidgetRef<'_, T>
where
    T: Scrollable,
{
    pub fn visible_content_rect(&self) -> Rect {
        self.widget.viewport().visible_content_rect(&self.cx)
    }

    pub fn width_occupied_by_vertical_scrollbar(&self) -> i32 {
        let viewport = self.widget.viewport();
        viewport.width_occupied_by_vertical_scrollbar(&self.cx)
    }

    pub fn height_occupied_by_horizontal_scrollbar(&self) -> i32 {
        let viewport = self.widget.viewport();
        viewport.height_occupied_by_horizontal_scrollbar(&self.cx)
    }
}
