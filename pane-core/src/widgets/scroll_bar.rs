use crate::{Axis, MutCx, Size, Update, Widget, WidgetMut};

/// The range/value model of a scrollbar.
///
/// The value is the scroll offset of whatever the bar controls. Changing it queues an
/// [`Update::ValueChanged`] for the parent.
pub struct ScrollBar {
    axis:      Axis,
    thickness: i32,

    value:    i32,
    min:      i32,
    max:      i32,
    step:     i32,
    big_step: i32,
}

impl ScrollBar {
    pub fn new(axis: Axis, thickness: i32) -> Self {
        Self {
            axis,
            thickness,

            value: 0,
            min: 0,
            max: 0,
            step: 1,
            big_step: 10,
        }
    }

    pub fn with_step(mut self, step: i32) -> Self {
        self.step = step;
        self
    }

    pub fn with_big_step(mut self, big_step: i32) -> Self {
        self.big_step = big_step;
        self
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn big_step(&self) -> i32 {
        self.big_step
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Room for two arrow buttons along the axis, [`Self::thickness`] across it.
    pub fn preferred_size(&self) -> Size {
        self.axis.pack_size(self.thickness * 2, self.thickness)
    }

    pub fn set_step(this: &mut WidgetMut<Self>, step: i32) {
        this.widget.step = step;
    }

    pub fn set_big_step(this: &mut WidgetMut<Self>, big_step: i32) {
        this.widget.big_step = big_step;
    }

    /// Set the range, the current value is clamped into it.
    pub fn set_range(this: &mut WidgetMut<Self>, min: i32, max: i32) {
        debug_assert!(min <= max, "scrollbar range is inverted");

        if this.widget.range() == (min, max) {
            return;
        }

        tracing::trace!(axis = ?this.widget.axis, min, max, "scrollbar range changed");

        this.widget.min = min;
        this.widget.max = max;
        this.cx.request_redraw();

        let clamped = this.widget.value.max(min).min(max);
        Self::set_value(this, clamped);
    }

    /// Set the value as given, it is not clamped into the range.
    pub fn set_value(this: &mut WidgetMut<Self>, value: i32) {
        if this.widget.value == value {
            return;
        }

        this.widget.value = value;

        let axis = this.widget.axis;
        tracing::trace!(?axis, value, "scrollbar value changed");

        this.cx.request_redraw();
        this.cx.post_to_parent(Update::ValueChanged { axis, value });
    }
}

impl Widget for ScrollBar {
    fn update(&mut self, cx: &mut MutCx<'_>, update: Update) {
        if let Update::Visible(true) = update {
            cx.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{AnyWidgetId, Axis, Root, Size, Widget, WidgetId, widgets::ScrollBar};

    struct Parent;

    impl Widget for Parent {}

    fn setup() -> (Root, WidgetId<Parent>, WidgetId<ScrollBar>) {
        let mut root = Root::new(|_| {});

        let bar = root
            .build_widget(ScrollBar::new(Axis::Horizontal, 16))
            .finish();
        let parent = root.build_widget(Parent).with_child(bar).finish();

        root.flush();
        root.take_redraws();

        (root, parent, bar)
    }

    #[test]
    fn preferred_size_follows_axis() {
        assert_eq!(
            ScrollBar::new(Axis::Vertical, 10).preferred_size(),
            Size::new(10, 20)
        );
        assert_eq!(
            ScrollBar::new(Axis::Horizontal, 10).preferred_size(),
            Size::new(20, 10)
        );
    }

    #[test]
    fn set_value_notifies_parent_once() {
        let (mut root, parent, bar) = setup();

        {
            let mut bar = root.get_mut(bar).unwrap();
            ScrollBar::set_value(&mut bar, 12);
            ScrollBar::set_value(&mut bar, 12);
        }

        assert_eq!(root.state().pending_updates(), 1);
        assert_eq!(root.take_redraws(), vec![bar.upcast()]);
        assert_eq!(root.flush(), 1);
        assert!(!root.needs_redraw(parent));
    }

    #[test]
    fn value_may_leave_the_range() {
        let (mut root, _, bar) = setup();

        let mut bar = root.get_mut(bar).unwrap();
        ScrollBar::set_value(&mut bar, -10);

        assert_eq!(bar.value(), -10);
        assert_eq!(bar.range(), (0, 0));
    }

    #[test]
    fn set_range_clamps_value() {
        let (mut root, _, bar) = setup();

        let mut bar_mut = root.get_mut(bar).unwrap();
        ScrollBar::set_range(&mut bar_mut, 0, 100);
        ScrollBar::set_value(&mut bar_mut, 80);
        ScrollBar::set_range(&mut bar_mut, 0, 50);

        assert_eq!(bar_mut.value(), 50);
        drop(bar_mut);

        root.flush();
        assert_eq!(root.get(bar).unwrap().value(), 50);
    }

    #[test]
    fn equal_range_is_ignored() {
        let (mut root, _, bar) = setup();

        ScrollBar::set_range(&mut root.get_mut(bar).unwrap(), 0, 0);

        assert!(root.take_redraws().is_empty());
        assert_eq!(root.state().pending_updates(), 0);
    }
}
